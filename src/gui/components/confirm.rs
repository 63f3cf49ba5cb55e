// src/gui/components/confirm.rs
//
// Yes/no window for every pending delete. Nothing is sent until "Delete"
// is clicked.

use eframe::egui;

use crate::gui::{actions, app::App};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Answer {
    Yes,
    No,
}

fn ask(ctx: &egui::Context, title: &str, text: &str) -> Option<Answer> {
    let mut answer = None;
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(text);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let red = ui.visuals().error_fg_color;
                if ui.button(egui::RichText::new("Delete").color(red)).clicked() {
                    answer = Some(Answer::Yes);
                }
                if ui.button("Cancel").clicked() {
                    answer = Some(Answer::No);
                }
            });
        });
    answer
}

pub fn draw(ctx: &egui::Context, app: &mut App) {
    if let Some(&id) = app.models.delete.pending() {
        let name = app
            .models
            .models()
            .iter()
            .find(|m| m.id == id)
            .map(|m| m.name.clone())
            .unwrap_or_else(|| format!("#{id}"));
        match ask(ctx, "Delete model", &format!("Are you sure you want to delete {name}?")) {
            Some(Answer::Yes) => actions::confirm_delete_model(app),
            Some(Answer::No) => app.models.delete.cancel(),
            None => {}
        }
    }

    if let Some(&id) = app.comparisons.delete.pending() {
        let name = app
            .comparisons
            .tables()
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| format!("#{id}"));
        match ask(
            ctx,
            "Delete comparison",
            &format!("Are you sure you want to delete the comparison {name}?"),
        ) {
            Some(Answer::Yes) => actions::confirm_delete_comparison(app),
            Some(Answer::No) => app.comparisons.delete.cancel(),
            None => {}
        }
    }

    if app.scraper.delete.pending().is_some() {
        match ask(ctx, "Delete web source", "Are you sure you want to delete this web source?") {
            Some(Answer::Yes) => actions::confirm_delete_source(app),
            Some(Answer::No) => app.scraper.delete.cancel(),
            None => {}
        }
    }
}
