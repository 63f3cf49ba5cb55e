// src/gui/pages/comparisons.rs
use eframe::egui::{self, RichText};

use crate::{
    aggregate::ComparisonDetail,
    config::options::PageKind::{self, *},
    gui::{
        actions,
        app::App,
        components::{
            data_table::{self, TableEvent},
            pivot_table,
        },
        table_model::TableData,
    },
    types::display_date,
    views::DetailState,
};

use super::{error_line, Page};

pub struct ComparisonsPage;
pub static PAGE: ComparisonsPage = ComparisonsPage;

const ACTIONS: &[&str] = &["Delete"];

impl Page for ComparisonsPage {
    fn kind(&self) -> PageKind { Comparisons }
    fn title(&self) -> &'static str { "Comparisons" }

    fn on_enter(&self, app: &mut App) {
        actions::load_comparisons(app);
    }

    fn on_leave(&self, app: &mut App) {
        app.comparisons.leave();
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        egui::SidePanel::left("comparison_list")
            .resizable(true)
            .default_width(360.0)
            .show_inside(ui, |ui| list(ui, app));

        egui::CentralPanel::default().show_inside(ui, |ui| detail(ui, app));
    }
}

fn list(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.heading("Comparisons");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("New Comparison").clicked() {
                app.comparison_form.open();
                actions::load_choices(app);
            }
            if ui.button("⟳").on_hover_text("Reload").clicked() {
                actions::load_comparisons(app);
            }
        });
    });
    error_line(ui, app.comparisons.error.as_deref());
    ui.separator();

    let table = TableData::comparisons(&app.comparisons);
    if table.is_empty() {
        if app.comparisons.is_loading() {
            ui.spinner();
        } else {
            ui.weak("No comparison tables yet. Create one to get started.");
        }
        return;
    }

    match data_table::draw(ui, "comparisons_table", &table, app.comparisons.selected(), ACTIONS) {
        Some(TableEvent::Select(id)) if app.comparisons.selected() != Some(id) => {
            actions::select_comparison(app, id);
        }
        Some(TableEvent::Action(id, 0)) => app.comparisons.delete.request(id),
        _ => {}
    }
}

fn detail(ui: &mut egui::Ui, app: &mut App) {
    let Some(table) = app.comparisons.selected_table().cloned() else {
        ui.centered_and_justified(|ui| {
            ui.weak("Select a comparison table to view details");
        });
        return;
    };

    ui.heading(&table.name);
    if let Some(desc) = &table.description {
        ui.label(desc.as_str());
    }
    ui.horizontal(|ui| {
        ui.label(RichText::new(table.visibility_label()).small().strong());
        ui.weak(format!("Created {}", display_date(&table.created_at)));
    });
    ui.separator();

    match app.comparisons.detail() {
        DetailState::Idle => {}
        DetailState::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading comparison…");
            });
        }
        DetailState::Failed(msg) => {
            ui.colored_label(ui.visuals().error_fg_color, msg);
        }
        DetailState::Ready(d) => {
            let d = d.clone();
            ready(ui, app, &d);
        }
    }
}

fn ready(ui: &mut egui::Ui, app: &mut App, d: &ComparisonDetail) {
    if d.is_empty() {
        ui.weak("This comparison has no models.");
        return;
    }

    egui::ScrollArea::both().auto_shrink([false, false]).show(ui, |ui| {
        let pivot = d.pivot();
        ui.strong("Benchmarks");
        if pivot.rows.is_empty() {
            ui.weak("No benchmark results recorded for these models.");
        } else {
            pivot_table::draw(ui, "comparison_pivot", &pivot);
        }

        ui.add_space(12.0);
        ui.checkbox(&mut app.state.gui.comparisons_show_pricing, "Show current pricing");
        if !app.state.gui.comparisons_show_pricing {
            return;
        }

        ui.horizontal_wrapped(|ui| {
            for m in &d.models {
                ui.group(|ui| {
                    ui.vertical(|ui| {
                        ui.strong(&m.name);
                        let rows = d.pricing_for(m.id);
                        if rows.is_empty() {
                            ui.weak("No current pricing");
                            return;
                        }
                        let table = TableData::current_pricing(m.id, rows);
                        ui.push_id(("pricing", m.id), |ui| {
                            data_table::draw(ui, "current_pricing", &table, None, &[]);
                        });
                    });
                });
            }
        });
    });
}
