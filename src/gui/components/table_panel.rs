// src/gui/components/table_panel.rs
//
// Left panel: the tables found on the loaded page. Clicking one extracts the
// current column from just that table.

use eframe::egui;
use crate::{config::options::TableRange, core::TableSummary, gui::{actions, app::App}};

fn entry_label(sum: &TableSummary) -> String {
    let caption = sum.caption.as_deref().unwrap_or("(no caption)");
    format!("{}: {} ({} rows)", sum.index, caption, sum.rows)
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Tables");
    if let Some(t) = &app.title {
        ui.label(egui::RichText::new(t).italics());
    }
    ui.separator();

    if app.tables.is_empty() {
        ui.label("Load a saved page to list its tables.");
        return;
    }

    let mut clicked: Option<usize> = None;

    egui::ScrollArea::vertical()
        .id_salt("table_list")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for sum in &app.tables {
                let selected = app.state.gui.selected_table == Some(sum.index);
                let mut resp = ui.selectable_label(selected, entry_label(sum));
                if !sum.headers.is_empty() {
                    resp = resp.on_hover_text(sum.headers.join(" | "));
                }
                if resp.clicked() {
                    clicked = Some(sum.index);
                }
            }
        });

    if let Some(ix) = clicked {
        logf!("UI: Table {} picked", ix);
        app.state.gui.selected_table = Some(ix);
        app.state.options.range = TableRange::one(ix);
        actions::extract(app);
    }
}
