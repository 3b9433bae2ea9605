// src/render.rs
//
// Plain-text views of extraction results: what the CLI prints and what the
// GUI puts on the clipboard. Display only; nothing here is a file format.

use std::io::{self, Write};

use crate::{
    config::options::ExtractOptions,
    core::TableSummary,
    runner::{DocumentColumns, DocumentListing, TableColumn},
};

/// `# <source> table <index>[: <caption>]`
pub fn heading(source: &str, col: &TableColumn) -> String {
    match &col.caption {
        Some(c) => format!("# {} table {}: {}", source, col.index, c),
        None => format!("# {} table {}", source, col.index),
    }
}

/// Values one per line. Multi-line cell text is flattened with " / " so
/// each row stays on one line.
pub fn write_values<W: Write>(mut w: W, values: &[Option<String>], opts: &ExtractOptions) -> io::Result<()> {
    for v in values {
        let text = opts.display(v);
        if text.contains('\n') {
            writeln!(w, "{}", text.replace('\n', " / "))?;
        } else {
            writeln!(w, "{}", text)?;
        }
    }
    Ok(())
}

pub fn write_documents<W: Write>(
    mut w: W,
    docs: &[DocumentColumns],
    opts: &ExtractOptions,
    headings: bool,
) -> io::Result<()> {
    for doc in docs {
        for col in &doc.tables {
            if headings {
                writeln!(w, "{}", heading(&doc.source, col))?;
            }
            write_values(&mut w, &col.values, opts)?;
        }
    }
    Ok(())
}

/// `<index>\t<n> rows\t<caption|->\t<h1 | h2 | …>`
pub fn summary_line(sum: &TableSummary) -> String {
    let caption = sum.caption.as_deref().unwrap_or("-");
    let headers = sum.headers.join(" | ");
    format!("{}\t{} rows\t{}\t{}", sum.index, sum.rows, caption, headers)
}

pub fn write_listings<W: Write>(mut w: W, docs: &[DocumentListing]) -> io::Result<()> {
    for doc in docs {
        match &doc.title {
            Some(t) => writeln!(w, "# {} ({})", doc.source, t)?,
            None => writeln!(w, "# {}", doc.source)?,
        }
        for sum in &doc.tables {
            writeln!(w, "{}", summary_line(sum))?;
        }
    }
    Ok(())
}

/// Clipboard text: each table's values one per line, a blank line between tables.
pub fn clipboard_text(cols: &[TableColumn], opts: &ExtractOptions) -> String {
    let mut buf: Vec<u8> = Vec::new();
    for (i, col) in cols.iter().enumerate() {
        if i > 0 {
            buf.push(b'\n');
        }
        // Writing into a Vec can't fail.
        let _ = write_values(&mut buf, &col.values, opts);
    }
    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
