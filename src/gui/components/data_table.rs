// src/gui/components/data_table.rs
//
// Draws a TableData. Purely a view: clicks come back as a TableEvent and
// the caller decides what they mean.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::table_model::TableData;
use crate::types::Id;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableEvent {
    /// Row body clicked.
    Select(Id),
    /// Button `n` of the trailing action column clicked.
    Action(Id, usize),
}

const ROW_H: f32 = 22.0;

/// `actions` become buttons in a trailing column, one set per row.
/// `selected` highlights the row with that key.
pub fn draw(
    ui: &mut egui::Ui,
    id_salt: &str,
    table: &TableData,
    selected: Option<Id>,
    actions: &[&str],
) -> Option<TableEvent> {
    let mut event = None;
    let cols = table.ncols();

    // Reserve space for the scroll bar instead of floating over content
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let mut builder = TableBuilder::new(ui)
        .id_salt(id_salt)
        .striped(true)
        .sense(egui::Sense::click())
        .cell_layout(Layout::left_to_right(Align::Center))
        .min_scrolled_height(0.0);

    for ci in 0..cols {
        let w = table.widths.get(ci).copied().unwrap_or(100.0);
        builder = builder.column(Column::initial(w).resizable(true).clip(true).at_least(30.0));
    }
    if !actions.is_empty() {
        builder = builder.column(Column::auto());
    }

    builder
        .header(24.0, |mut header| {
            for ci in 0..cols {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    let text = RichText::new(table.headers[ci]).strong();
                    if table.numeric.contains(&ci) {
                        ui.centered_and_justified(|ui| { ui.label(text); });
                    } else {
                        ui.label(text);
                    }
                });
            }
            if !actions.is_empty() {
                header.col(|_ui| {});
            }
        })
        .body(|body| {
            body.rows(ROW_H, table.nrows(), |mut row| {
                let ri = row.index();
                let Some(&key) = table.keys.get(ri) else { return };
                row.set_selected(selected == Some(key));

                for ci in 0..cols {
                    let cell = table.rows[ri].get(ci).map(String::as_str).unwrap_or("");
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                        if table.numeric.contains(&ci) {
                            ui.centered_and_justified(|ui| { ui.label(cell); });
                        } else {
                            ui.label(cell);
                        }
                    });
                }
                if !actions.is_empty() {
                    row.col(|ui| {
                        for (ai, label) in actions.iter().enumerate() {
                            if ui.small_button(*label).clicked() {
                                event = Some(TableEvent::Action(key, ai));
                            }
                        }
                    });
                }

                if event.is_none() && row.response().clicked() {
                    event = Some(TableEvent::Select(key));
                }
            });
        });

    event
}
