// src/gui/components/forms.rs
//
// The create forms, each drawn as a window over whatever page is showing.
// Drawing only edits the draft; submit/cancel are acted on after the window
// closure returns.

use eframe::egui::{self, ComboBox, RichText, TextEdit};

use crate::{
    gui::{actions, app::App},
    types::{
        Currency, Id, Model, ModelType, PriceType, PriceUnit, Provider, COMMON_BENCHMARKS,
        COMMON_SCORE_UNITS,
    },
};

pub fn draw(ctx: &egui::Context, app: &mut App) {
    if app.model_form.is_open() {
        model_window(ctx, app);
    }
    if app.benchmark_form.is_open() {
        benchmark_window(ctx, app);
    }
    if app.pricing_form.is_open() {
        pricing_window(ctx, app);
    }
    if app.comparison_form.is_open() {
        comparison_window(ctx, app);
    }
}

#[derive(Default)]
struct Clicks {
    submit: bool,
    cancel: bool,
}

/* ---------------- shared widgets ---------------- */

fn error_box(ui: &mut egui::Ui, err: Option<&str>) {
    if let Some(e) = err {
        ui.colored_label(ui.visuals().error_fg_color, e);
        ui.add_space(4.0);
    }
}

fn buttons(ui: &mut egui::Ui, submitting: bool, verb: &str, clicks: &mut Clicks) {
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.button("Cancel").clicked() {
            clicks.cancel = true;
        }
        let label = if submitting { s!("Creating...") } else { s!(verb) };
        if ui.add_enabled(!submitting, egui::Button::new(label)).clicked() {
            clicks.submit = true;
        }
    });
}

fn model_picker(ui: &mut egui::Ui, id: &str, choices: &[Model], selected: &mut Option<Id>) {
    let text = selected
        .and_then(|id| choices.iter().find(|m| m.id == id))
        .map(|m| m.name.clone())
        .unwrap_or_else(|| s!("Select a model"));
    ComboBox::from_id_salt(id)
        .selected_text(text)
        .width(240.0)
        .show_ui(ui, |ui| {
            for m in choices {
                let label = match m.provider_name() {
                    Some(p) => format!("{} ({p})", m.name),
                    None => m.name.clone(),
                };
                ui.selectable_value(selected, Some(m.id), label);
            }
        });
}

fn provider_picker(ui: &mut egui::Ui, providers: &[Provider], selected: &mut Option<Id>) {
    let text = selected
        .and_then(|id| providers.iter().find(|p| p.id == id))
        .map(|p| p.name.clone())
        .unwrap_or_else(|| s!("Select a provider"));
    ComboBox::from_id_salt("model_form_provider")
        .selected_text(text)
        .width(200.0)
        .show_ui(ui, |ui| {
            for p in providers {
                ui.selectable_value(selected, Some(p.id), p.name.as_str());
            }
        });
}

/// Combo over the known variants of an open enum. `None` shows `placeholder`.
fn enum_picker<T: Clone + PartialEq>(
    ui: &mut egui::Ui,
    id: &str,
    value: &mut Option<T>,
    known: &[T],
    label: fn(&T) -> &str,
    placeholder: &str,
) {
    let text = value.as_ref().map(|v| s!(label(v))).unwrap_or_else(|| s!(placeholder));
    ComboBox::from_id_salt(id).selected_text(text).show_ui(ui, |ui| {
        for k in known {
            ui.selectable_value(value, Some(k.clone()), label(k));
        }
    });
}

/// Free text with a dropdown of suggestions that fill it in.
fn suggest(ui: &mut egui::Ui, id: &str, text: &mut String, hint: &str, options: &[&str]) {
    ui.horizontal(|ui| {
        ui.add(TextEdit::singleline(text).hint_text(hint).desired_width(180.0));
        ComboBox::from_id_salt(id).selected_text("▾").width(40.0).show_ui(ui, |ui| {
            for o in options {
                if ui.selectable_label(text.as_str() == *o, *o).clicked() {
                    *text = s!(*o);
                }
            }
        });
    });
}

fn field(ui: &mut egui::Ui, label: &str, required: bool) {
    let text = if required { format!("{label} *") } else { s!(label) };
    ui.label(RichText::new(text).strong());
}

fn finish_window<D: crate::forms::Draft>(form: &mut crate::forms::FormState<D>, open: bool, clicks: &Clicks) {
    if !open || clicks.cancel {
        form.close();
    }
}

/* ---------------- model ---------------- */

fn model_window(ctx: &egui::Context, app: &mut App) {
    let mut open = true;
    let mut clicks = Clicks::default();
    let mut create_provider = false;

    let form = &mut app.model_form;
    let providers = app.models.providers();
    let submitting = form.is_submitting();
    let err = form.error().map(str::to_string);

    egui::Window::new("Add New Model")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            error_box(ui, err.as_deref());
            let d = &mut form.draft;

            egui::Grid::new("model_form_grid").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
                field(ui, "Model Name", true);
                ui.add(TextEdit::singleline(&mut d.name).hint_text("GPT-4o, Claude 3.5 Sonnet, etc."));
                ui.end_row();

                field(ui, "Provider", true);
                provider_picker(ui, providers, &mut d.provider_id);
                ui.end_row();

                ui.label("");
                ui.horizontal(|ui| {
                    ui.add(TextEdit::singleline(&mut d.new_provider_name).hint_text("or add a new provider").desired_width(150.0));
                    if ui.add_enabled(!d.creating_provider, egui::Button::new("Add")).clicked() {
                        create_provider = true;
                    }
                    if d.creating_provider {
                        ui.spinner();
                    }
                });
                ui.end_row();

                field(ui, "Model Type", false);
                enum_picker(ui, "model_form_type", &mut d.model_type, ModelType::KNOWN, ModelType::label, "Select type");
                ui.end_row();

                field(ui, "Description", false);
                ui.add(TextEdit::multiline(&mut d.description).desired_rows(3).hint_text("Brief description of the model"));
                ui.end_row();

                field(ui, "Release Date", false);
                ui.add(TextEdit::singleline(&mut d.release_date).hint_text("YYYY-MM-DD"));
                ui.end_row();

                field(ui, "Context Window", false);
                ui.add(TextEdit::singleline(&mut d.context_window).hint_text("128000"));
                ui.end_row();
            });

            buttons(ui, submitting, "Create Model", &mut clicks);
        });

    finish_window(&mut app.model_form, open, &clicks);
    if create_provider {
        actions::create_inline_provider(app);
    }
    if clicks.submit {
        actions::submit_model_form(app);
    }
}

/* ---------------- benchmark ---------------- */

fn benchmark_window(ctx: &egui::Context, app: &mut App) {
    let mut open = true;
    let mut clicks = Clicks::default();

    let form = &mut app.benchmark_form;
    let choices = &app.choices;
    let submitting = form.is_submitting();
    let err = form.error().map(str::to_string);

    egui::Window::new("Add Benchmark Result")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            error_box(ui, err.as_deref());
            let d = &mut form.draft;

            egui::Grid::new("bench_form_grid").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
                field(ui, "Model", true);
                model_picker(ui, "bench_form_model", choices, &mut d.model_id);
                ui.end_row();

                field(ui, "Benchmark", true);
                suggest(ui, "bench_form_name", &mut d.benchmark_name, "Select from list or enter custom", COMMON_BENCHMARKS);
                ui.end_row();

                field(ui, "Score", false);
                ui.add(TextEdit::singleline(&mut d.score).hint_text("85.7"));
                ui.end_row();

                field(ui, "Unit", false);
                suggest(ui, "bench_form_unit", &mut d.unit, "accuracy, percentage, etc.", COMMON_SCORE_UNITS);
                ui.end_row();

                field(ui, "Test Date", false);
                ui.add(TextEdit::singleline(&mut d.test_date).hint_text("YYYY-MM-DD"));
                ui.end_row();

                field(ui, "Source URL", false);
                ui.add(TextEdit::singleline(&mut d.source_url).hint_text("https://..."));
                ui.end_row();

                field(ui, "Notes", false);
                ui.add(TextEdit::multiline(&mut d.notes).desired_rows(2).hint_text("Additional notes about this benchmark result"));
                ui.end_row();
            });

            buttons(ui, submitting, "Add Benchmark", &mut clicks);
        });

    finish_window(&mut app.benchmark_form, open, &clicks);
    if clicks.submit {
        actions::submit_benchmark_form(app);
    }
}

/* ---------------- pricing ---------------- */

fn pricing_window(ctx: &egui::Context, app: &mut App) {
    let mut open = true;
    let mut clicks = Clicks::default();

    let form = &mut app.pricing_form;
    let choices = &app.choices;
    let submitting = form.is_submitting();
    let err = form.error().map(str::to_string);

    egui::Window::new("Add Pricing")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            error_box(ui, err.as_deref());
            let d = &mut form.draft;

            egui::Grid::new("price_form_grid").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
                field(ui, "Model", true);
                model_picker(ui, "price_form_model", choices, &mut d.model_id);
                ui.end_row();

                field(ui, "Price Type", true);
                enum_picker(ui, "price_form_type", &mut d.price_type, PriceType::KNOWN, PriceType::label, "Select type");
                ui.end_row();

                field(ui, "Price", true);
                ui.add(TextEdit::singleline(&mut d.price).hint_text("0.000002"));
                ui.end_row();

                field(ui, "Currency", false);
                let mut cur = Some(d.currency.clone());
                enum_picker(ui, "price_form_currency", &mut cur, Currency::KNOWN, Currency::label, "USD");
                if let Some(c) = cur {
                    d.currency = c;
                }
                ui.end_row();

                field(ui, "Unit", true);
                enum_picker(ui, "price_form_unit", &mut d.unit, PriceUnit::KNOWN, PriceUnit::label, "Select unit");
                ui.end_row();

                field(ui, "Valid From", true);
                ui.add(TextEdit::singleline(&mut d.valid_from).hint_text("YYYY-MM-DD"));
                ui.end_row();

                field(ui, "Valid To", false);
                ui.add(TextEdit::singleline(&mut d.valid_to).hint_text("YYYY-MM-DD (open-ended)"));
                ui.end_row();

                field(ui, "Source URL", false);
                ui.add(TextEdit::singleline(&mut d.source_url).hint_text("https://..."));
                ui.end_row();
            });

            buttons(ui, submitting, "Add Pricing", &mut clicks);
        });

    finish_window(&mut app.pricing_form, open, &clicks);
    if clicks.submit {
        actions::submit_pricing_form(app);
    }
}

/* ---------------- comparison ---------------- */

fn comparison_window(ctx: &egui::Context, app: &mut App) {
    let mut open = true;
    let mut clicks = Clicks::default();

    let form = &mut app.comparison_form;
    let choices = &app.choices;
    let submitting = form.is_submitting();
    let err = form.error().map(str::to_string);

    egui::Window::new("Create Comparison")
        .open(&mut open)
        .collapsible(false)
        .default_width(520.0)
        .show(ctx, |ui| {
            error_box(ui, err.as_deref());
            let d = &mut form.draft;

            egui::Grid::new("cmp_form_grid").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
                field(ui, "Name", true);
                ui.add(TextEdit::singleline(&mut d.name).hint_text("e.g., Top AI Models Q4 2024"));
                ui.end_row();

                field(ui, "Description", false);
                ui.add(TextEdit::multiline(&mut d.description).desired_rows(2).hint_text("Brief description of this comparison"));
                ui.end_row();

                ui.label("");
                ui.checkbox(&mut d.is_public, "Make this comparison public");
                ui.end_row();
            });

            ui.separator();
            ui.label(RichText::new(format!("Selected Models ({})", d.staged().len())).strong());
            let mut unstage = None;
            if d.staged().is_empty() {
                ui.weak("No models selected. Add at least 2 models below.");
            }
            for &id in d.staged() {
                let name = choices.iter().find(|m| m.id == id).map(|m| m.name.as_str()).unwrap_or("?");
                ui.horizontal(|ui| {
                    ui.label(name);
                    if ui.small_button("✕").clicked() {
                        unstage = Some(id);
                    }
                });
            }
            if let Some(id) = unstage {
                d.unstage(id);
            }

            ui.separator();
            ui.label(RichText::new("Available Models").strong());
            let available: Vec<&Model> = choices.iter().filter(|m| !d.is_staged(m.id)).collect();
            let mut stage = None;
            egui::ScrollArea::vertical().max_height(180.0).show(ui, |ui| {
                for m in &available {
                    ui.horizontal(|ui| {
                        if ui.small_button("+").clicked() {
                            stage = Some(m.id);
                        }
                        ui.label(m.name.as_str());
                        if let Some(p) = m.provider_name() {
                            ui.weak(p);
                        }
                    });
                }
                if available.is_empty() {
                    ui.weak(if choices.is_empty() { "No models available" } else { "All models have been selected" });
                }
            });
            if let Some(id) = stage {
                d.stage(id);
            }

            buttons(ui, submitting, "Create Comparison", &mut clicks);
        });

    finish_window(&mut app.comparison_form, open, &clicks);
    if clicks.submit {
        actions::submit_comparison_form(app);
    }
}
