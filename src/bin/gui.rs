// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use wiki_scrape::{
    config::consts::{WINDOW_H, WINDOW_W},
    gui,
    log::{self, LogTarget},
};

fn main() {
    log::init(LogTarget::default_file(), None);

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Wikitable Column Extractor")
            .with_inner_size([WINDOW_W, WINDOW_H]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
