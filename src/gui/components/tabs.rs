// src/gui/components/tabs.rs
//
// Renders the top tabs and performs the tab switch itself.
// Switching leaves the old page (its in-flight loads get discarded) and
// enters the new one (which re-fetches).

use eframe::egui;
use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let pages = router::all_pages();
        let cur = app.current_index();

        for (idx, page) in pages.iter().enumerate() {
            let selected = idx == cur;
            if ui.selectable_label(selected, page.title()).clicked() && !selected {
                app.switch_to(idx);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(app.tasks.api().root().as_str())
                    .small()
                    .monospace(),
            )
            .on_hover_text("Backend API root");
        });
    });
}
