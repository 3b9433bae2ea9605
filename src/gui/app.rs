// src/gui/app.rs
use std::{
    error::Error,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    core::TableSummary,
    runner::{Input, TableColumn},
};

use super::components::{controls, data_table, table_panel};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Wikitable Column Extractor",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // what the loaded page has to offer
    pub title: Option<String>,
    pub tables: Vec<TableSummary>,

    // result of the last extraction
    pub columns: Vec<TableColumn>,

    // status line (progress sink writes here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        logf!("Init: class={} column={}", state.options.class, state.options.column);
        Self {
            state,
            title: None,
            tables: Vec::new(),
            columns: Vec::new(),
            status: Arc::new(Mutex::new(s!("Idle"))),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// The page file named in the source field, if any.
    pub fn source_input(&self) -> Option<Input> {
        let text = self.state.gui.source_text.trim();
        if text.is_empty() { None } else { Some(Input::File(PathBuf::from(text))) }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("tables")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                table_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            controls::draw(ui, self);

            ui.separator();

            data_table::draw(ui, self);
        });
    }
}
