// src/gui/actions/copy.rs
use eframe::egui;
use crate::{gui::app::App, render};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.columns.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let txt = render::clipboard_text(&app.columns, &app.state.options);
    logf!("Copy: tables={} bytes={}", app.columns.len(), txt.len());

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
