// src/gui/components/data_table.rs
//
// Extracted columns side by side, one grid column per source table.
// Purely a view.

use eframe::egui::{self, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};
use crate::{gui::app::App, runner::TableColumn};

fn column_title(col: &TableColumn) -> String {
    match &col.caption {
        Some(c) => format!("{}: {}", col.index, c),
        None => format!("Table {}", col.index),
    }
}

pub fn draw(ui: &mut egui::Ui, app: &App) {
    if app.columns.is_empty() {
        ui.label("Nothing extracted yet.");
        return;
    }

    let nrows = app.columns.iter().map(|c| c.values.len()).max().unwrap_or(0);
    let missing = app.state.options.missing.as_str();
    let weak = ui.visuals().weak_text_color();

    egui::ScrollArea::horizontal()
        .id_salt("columns_hscroll")
        .show(ui, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .column(Column::exact(48.0))
                .columns(Column::initial(180.0).at_least(40.0).clip(true), app.columns.len())
                .header(24.0, |mut header| {
                    header.col(|ui| { ui.strong("Row"); });
                    for col in &app.columns {
                        header.col(|ui| { ui.strong(column_title(col)); });
                    }
                })
                .body(|body| {
                    body.rows(20.0, nrows, |mut row| {
                        let i = row.index();
                        row.col(|ui| { ui.label(RichText::new(i.to_string()).color(weak)); });
                        for col in &app.columns {
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                                match col.values.get(i) {
                                    Some(Some(v)) => { ui.label(v.replace('\n', " / ")); }
                                    // Row exists but is too short for the column.
                                    Some(None) => { ui.label(RichText::new(missing).color(weak)); }
                                    // Table has fewer rows than the longest one.
                                    None => {}
                                }
                            });
                        }
                    });
                });
        });
}
