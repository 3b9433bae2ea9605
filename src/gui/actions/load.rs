// src/gui/actions/load.rs
use crate::{gui::app::App, gui::progress::GuiProgress, runner};

/// Read the page named in the source field and list its tables.
pub fn load(app: &mut App) {
    let Some(input) = app.source_input() else {
        app.status("No page file given");
        return;
    };
    let class = app.state.options.class.clone();
    logf!("Load: {} class={}", input.label(), class);

    let mut prog = GuiProgress::new(app.status.clone());
    let summary = runner::list(&[input], &class, Some(&mut prog));

    // On failure the progress sink has already put the error in the status line.
    let Some(doc) = summary.documents.into_iter().next() else { return };

    app.title = doc.title;
    app.tables = doc.tables;
    app.columns.clear();
    app.state.gui.selected_table = None;

    let n = app.tables.len();
    logf!("Load: OK tables={}", n);
    app.status(match n {
        0 => format!("No tables with class \"{}\"", class),
        1 => s!("Loaded 1 table"),
        _ => format!("Loaded {} tables", n),
    });
}
