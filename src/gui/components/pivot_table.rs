// src/gui/components/pivot_table.rs
//
// Benchmark rows x model columns. Cells without data show "-" dimmed.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::aggregate::PivotTable;
use crate::config::consts::NO_DATA;

pub fn draw(ui: &mut egui::Ui, id_salt: &str, pivot: &PivotTable) {
    let weak = ui.visuals().weak_text_color();

    let mut builder = TableBuilder::new(ui)
        .id_salt(id_salt)
        .striped(true)
        .vscroll(false)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::initial(140.0).resizable(true).clip(true));
    for _ in &pivot.columns {
        builder = builder.column(Column::initial(120.0).resizable(true).clip(true));
    }

    builder
        .header(40.0, |mut header| {
            header.col(|ui| {
                ui.label(RichText::new("Benchmark").strong());
            });
            for c in &pivot.columns {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&c.model_name).strong());
                        if let Some(p) = &c.provider_name {
                            ui.label(RichText::new(p).small().color(weak));
                        }
                    });
                });
            }
        })
        .body(|mut body| {
            for r in &pivot.rows {
                body.row(20.0, |mut row| {
                    row.col(|ui| {
                        ui.label(RichText::new(&r.name).strong());
                    });
                    for ci in 0..pivot.columns.len() {
                        let text = r.cell_text(ci);
                        row.col(|ui| {
                            if text == NO_DATA {
                                ui.label(RichText::new(text).color(weak));
                            } else {
                                ui.label(text);
                            }
                        });
                    }
                });
            }
        });
}
