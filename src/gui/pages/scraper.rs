// src/gui/pages/scraper.rs
use eframe::egui::{self, ComboBox, RichText};

use crate::{
    config::options::PageKind::{self, *},
    gui::{
        actions,
        app::App,
        components::data_table::{self, TableEvent},
        table_model::TableData,
    },
    types::{ScrapeDataType, SourceType},
    views::ScrapeOutcome,
};

use super::{error_line, Page};

pub struct ScraperPage;
pub static PAGE: ScraperPage = ScraperPage;

const ACTIONS: &[&str] = &["Delete"];

impl Page for ScraperPage {
    fn kind(&self) -> PageKind { Scraper }
    fn title(&self) -> &'static str { "Scraper" }

    fn on_enter(&self, app: &mut App) {
        actions::load_sources(app);
    }

    fn on_leave(&self, app: &mut App) {
        app.scraper.leave();
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        egui::SidePanel::left("scrape_form")
            .resizable(true)
            .default_width(420.0)
            .show_inside(ui, |ui| {
                scrape_form(ui, app);
                ui.separator();
                outcome(ui, app);
            });

        egui::CentralPanel::default().show_inside(ui, |ui| sources(ui, app));
    }
}

fn scrape_form(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Scrape a page");
    let busy = app.scraper.is_scraping();
    let mut go = false;

    egui::Grid::new("scrape_grid").num_columns(2).spacing([8.0, 6.0]).show(ui, |ui| {
        let d = &mut app.scraper.draft;

        ui.label("URL *");
        ui.add(egui::TextEdit::singleline(&mut d.url).hint_text("https://example.com/models"));
        ui.end_row();

        ui.label("Data type");
        ComboBox::from_id_salt("scrape_data_type")
            .selected_text(d.data_type.label())
            .show_ui(ui, |ui| {
                for t in ScrapeDataType::ALL {
                    ui.selectable_value(&mut d.data_type, t, t.label());
                }
            });
        ui.end_row();

        ui.label("Model name");
        ui.add(egui::TextEdit::singleline(&mut d.model_name).hint_text("optional"));
        ui.end_row();

        ui.label("Provider name");
        ui.add(egui::TextEdit::singleline(&mut d.provider_name).hint_text("optional"));
        ui.end_row();
    });

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        let label = if busy { "Scraping…" } else { "Scrape" };
        if ui.add_enabled(!busy, egui::Button::new(label)).clicked() {
            go = true;
        }
        if busy {
            ui.spinner();
        }
    });

    if go {
        app.scraper.error = None;
        actions::scrape(app);
    }
}

fn outcome(ui: &mut egui::Ui, app: &App) {
    match app.scraper.outcome() {
        None => {}
        Some(ScrapeOutcome::Failed(msg)) => {
            ui.colored_label(ui.visuals().error_fg_color, format!("Scrape failed: {msg}"));
        }
        Some(ScrapeOutcome::Succeeded(raw)) => {
            ui.label(RichText::new("Scrape succeeded").strong());
            let Some(raw) = raw else {
                ui.weak("No raw response returned.");
                return;
            };
            egui::ScrollArea::both()
                .id_salt("scrape_raw")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add(egui::Label::new(RichText::new(raw.as_str()).monospace()).wrap_mode(egui::TextWrapMode::Extend));
                });
        }
    }
}

fn sources(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.heading("Web sources");
        if app.scraper.sources_loading() {
            ui.spinner();
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("⟳").on_hover_text("Reload").clicked() {
                actions::load_sources(app);
            }
        });
    });
    error_line(ui, app.scraper.error.as_deref());

    let mut add = false;
    ui.horizontal(|ui| {
        ui.label("Track URL:");
        ui.add(
            egui::TextEdit::singleline(&mut app.scraper.new_source_url)
                .hint_text("https://…")
                .desired_width(260.0),
        );
        let kind = app.scraper.new_source_type.get_or_insert(SourceType::Both);
        ComboBox::from_id_salt("new_source_type")
            .selected_text(kind.label())
            .show_ui(ui, |ui| {
                for k in SourceType::KNOWN {
                    ui.selectable_value(&mut *kind, k.clone(), k.label());
                }
            });
        if ui.button("Add").clicked() {
            add = true;
        }
    });
    if add {
        actions::add_source(app);
    }
    ui.separator();

    let table = TableData::web_sources(&app.scraper);
    if table.is_empty() {
        if !app.scraper.sources_loading() {
            ui.weak("No web sources tracked.");
        }
        return;
    }
    if let Some(TableEvent::Action(id, 0)) = data_table::draw(ui, "web_sources", &table, None, ACTIONS) {
        app.scraper.delete.request(id);
    }
}
