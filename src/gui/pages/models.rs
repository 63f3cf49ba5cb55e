// src/gui/pages/models.rs
use eframe::egui::{self, ComboBox, RichText};

use crate::{
    config::options::PageKind::{self, *},
    forms::{BenchmarkDraft, PricingDraft},
    gui::{
        actions,
        app::App,
        components::data_table::{self, TableEvent},
        table_model::TableData,
    },
    types::{display_date, ModelType},
};

use super::{error_line, Page};

pub struct ModelsPage;
pub static PAGE: ModelsPage = ModelsPage;

const ACTIONS: &[&str] = &["Delete"];

impl Page for ModelsPage {
    fn kind(&self) -> PageKind { Models }
    fn title(&self) -> &'static str { "Models" }

    fn on_enter(&self, app: &mut App) {
        actions::load_models(app);
    }

    fn on_leave(&self, app: &mut App) {
        app.models.leave();
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        controls(ui, app);
        error_line(ui, app.models.error.as_deref());
        ui.separator();

        if app.models.selected.is_some() {
            egui::SidePanel::right("model_detail")
                .resizable(true)
                .default_width(380.0)
                .show_inside(ui, |ui| detail(ui, app));
        }

        let table = TableData::models(&app.models);
        if app.models.is_loading() && app.models.models().is_empty() {
            ui.spinner();
            return;
        }
        if table.is_empty() {
            ui.weak("No models found matching your criteria.");
            return;
        }

        match data_table::draw(ui, "models_table", &table, app.models.selected, ACTIONS) {
            Some(TableEvent::Select(id)) => {
                app.models.selected = if app.models.selected == Some(id) { None } else { Some(id) };
            }
            Some(TableEvent::Action(id, 0)) => app.models.delete.request(id),
            _ => {}
        }
    }
}

/// Search box, server-side filters, and the create buttons.
fn controls(ui: &mut egui::Ui, app: &mut App) {
    let mut reload = false;

    ui.horizontal_wrapped(|ui| {
        ui.label("Search:");
        ui.add(
            egui::TextEdit::singleline(&mut app.models.search)
                .hint_text("Search models...")
                .desired_width(180.0),
        );

        let providers = app.models.providers().to_vec();
        let mut provider = app.models.provider_filter();
        let text = provider
            .and_then(|id| providers.iter().find(|p| p.id == id))
            .map(|p| p.name.clone())
            .unwrap_or_else(|| s!("All Providers"));
        ComboBox::from_id_salt("models_provider_filter")
            .selected_text(text)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut provider, None, "All Providers");
                for p in &providers {
                    ui.selectable_value(&mut provider, Some(p.id), p.name.as_str());
                }
            });
        if app.models.set_provider_filter(provider) {
            logf!("UI: provider filter → {:?}", provider);
            reload = true;
        }

        let mut kind = app.models.type_filter().cloned();
        let text = kind.as_ref().map(|k| s!(k.label())).unwrap_or_else(|| s!("All Types"));
        ComboBox::from_id_salt("models_type_filter")
            .selected_text(text)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut kind, None, "All Types");
                for k in ModelType::KNOWN {
                    ui.selectable_value(&mut kind, Some(k.clone()), k.label());
                }
            });
        if app.models.set_type_filter(kind) {
            logf!("UI: type filter → {:?}", app.models.type_filter());
            reload = true;
        }

        if ui.button("⟳").on_hover_text("Reload").clicked() {
            reload = true;
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Add Model").clicked() {
                app.model_form.open();
            }
        });
    });

    if reload {
        actions::load_models(app);
    }
}

/// Side panel for the selected model: its embedded benchmarks and pricing.
fn detail(ui: &mut egui::Ui, app: &mut App) {
    let Some(id) = app.models.selected else { return };
    let Some(m) = app.models.models().iter().find(|m| m.id == id).cloned() else { return };

    ui.heading(&m.name);
    if let Some(p) = app.models.provider_name(&m) {
        ui.weak(p);
    }
    ui.horizontal_wrapped(|ui| {
        if let Some(t) = &m.model_type {
            ui.label(RichText::new(t.label()).small().strong());
        }
        if let Some(c) = m.context_label() {
            ui.label(RichText::new(format!("Context: {c}")).small());
        }
        if let Some(d) = m.release_date {
            ui.label(RichText::new(format!("Released {d}")).small());
        }
    });
    if let Some(desc) = &m.description {
        ui.label(desc.as_str());
    }
    if !m.created_at.is_empty() {
        ui.weak(format!("Added {}", display_date(&m.created_at)));
    }

    let mut open_bench = false;
    let mut open_price = false;

    ui.separator();
    ui.horizontal(|ui| {
        ui.strong(format!("{} benchmarks", m.benchmarks.len()));
        if ui.small_button("+ Add").clicked() {
            open_bench = true;
        }
    });
    let bench = TableData::model_benchmarks(&m);
    if !bench.is_empty() {
        ui.push_id("model_bench", |ui| {
            data_table::draw(ui, "model_bench_table", &bench, None, &[]);
        });
    }

    ui.separator();
    ui.horizontal(|ui| {
        ui.strong(format!("{} pricing tiers", m.pricing.len()));
        if ui.small_button("+ Add").clicked() {
            open_price = true;
        }
    });
    let price = TableData::model_pricing(&m);
    if !price.is_empty() {
        ui.push_id("model_price", |ui| {
            data_table::draw(ui, "model_price_table", &price, None, &[]);
        });
    }

    if open_bench {
        app.benchmark_form.open_with(BenchmarkDraft::for_model(m.id));
        actions::load_choices(app);
    }
    if open_price {
        app.pricing_form.open_with(PricingDraft::for_model(m.id));
        actions::load_choices(app);
    }
}
