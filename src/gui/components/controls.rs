// src/gui/components/controls.rs

use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // --- Source + class ---
    let mut load_clicked = false;
    ui.horizontal(|ui| {
        ui.label("Page:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.source_text)
                .hint_text("saved .html file")
                .desired_width(360.0)
                .font(egui::TextStyle::Monospace),
        );
        if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            load_clicked = true;
        }
        if ui.button("Load").clicked() {
            load_clicked = true;
        }

        ui.label("Class:");
        ui.add(egui::TextEdit::singleline(&mut app.state.options.class).desired_width(100.0));
    });

    if load_clicked {
        actions::load(app);
    }

    // --- Range + column ---
    let n_tables = app.tables.len();
    let mut extract_clicked = false;
    let mut copy_clicked = false;

    ui.horizontal(|ui| {
        let opts = &mut app.state.options;

        ui.label("Tables from");
        ui.add(egui::DragValue::new(&mut opts.range.start).range(0..=n_tables));

        ui.label("to");
        let mut to_end = opts.range.end.is_none();
        if ui.checkbox(&mut to_end, "last").changed() {
            opts.range.end = if to_end { None } else { Some(n_tables) };
            logd!("UI: range end → {:?}", opts.range.end);
        }
        if let Some(end) = opts.range.end.as_mut() {
            ui.add(egui::DragValue::new(end).range(0..=n_tables));
        }

        ui.separator();

        ui.label("Column");
        ui.add(egui::DragValue::new(&mut opts.column));

        ui.separator();

        if ui.button("Extract").clicked() {
            extract_clicked = true;
        }
        if ui.button("Copy").clicked() {
            copy_clicked = true;
        }
    });

    if extract_clicked {
        app.state.gui.selected_table = None;
        actions::extract(app);
    }
    if copy_clicked {
        actions::copy(app, ui.ctx());
    }

    ui.label(format!("Status: {}", app.status_text()));
}
