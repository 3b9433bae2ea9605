// src/gui/actions/extract.rs
use crate::{gui::app::App, gui::progress::GuiProgress, runner};

/// Re-read the page and extract the configured column from the configured range.
pub fn extract(app: &mut App) {
    let Some(input) = app.source_input() else {
        app.status("No page file given");
        return;
    };
    let opts = app.state.options.clone();
    logf!(
        "Extract: {} range={:?} column={}",
        input.label(), opts.range, opts.column
    );

    let mut prog = GuiProgress::new(app.status.clone());
    let summary = runner::run(&[input], &opts, Some(&mut prog));
    let Some(doc) = summary.documents.into_iter().next() else { return };

    app.columns = doc.tables;

    let rows: usize = app.columns.iter().map(|c| c.values.len()).sum();
    let missing: usize = app
        .columns
        .iter()
        .map(|c| c.values.iter().filter(|v| v.is_none()).count())
        .sum();
    logf!("Extract: OK tables={} rows={} missing={}", app.columns.len(), rows, missing);

    app.status(if app.columns.is_empty() {
        s!("No tables in that range")
    } else {
        format!(
            "Column {} from {} table(s): {} value(s), {} missing",
            opts.column,
            app.columns.len(),
            rows,
            missing
        )
    });
}
