// src/gui/pages/mod.rs
use eframe::egui;

use crate::{config::options::PageKind, gui::app::App};

pub mod comparisons;
pub mod models;
pub mod scraper;

pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Called when the tab becomes active. Pages re-fetch here; nothing is
    /// cached across visits.
    fn on_enter(&self, app: &mut App);

    /// Called when another tab is picked. Default: nothing.
    fn on_leave(&self, _app: &mut App) {}

    /// Page body below the tab bar.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);
}

/// Red text for a view-local error, if any.
pub(crate) fn error_line(ui: &mut egui::Ui, err: Option<&str>) {
    if let Some(e) = err {
        ui.colored_label(ui.visuals().error_fg_color, e);
    }
}
