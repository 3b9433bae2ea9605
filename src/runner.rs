// src/runner.rs
//
// Drives extraction over one or more saved pages. Front ends (CLI, GUI)
// call into here; nothing below this layer does I/O.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::{
    config::consts::STDIN_SOURCE,
    config::options::ExtractOptions,
    core::{Page, TableSummary},
    error::{Error, Result},
    extract::{extract_column_from_tables, select_tables, Column},
    progress::Progress,
};

/// Where a page comes from. The page must already be on disk or piped in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// `-` means stdin; anything else is a path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == STDIN_SOURCE { Input::Stdin } else { Input::File(PathBuf::from(arg)) }
    }

    pub fn label(&self) -> String {
        match self {
            Input::Stdin => s!("<stdin>"),
            Input::File(p) => p.display().to_string(),
        }
    }

    pub fn read(&self) -> Result<String> {
        match self {
            Input::Stdin => {
                let mut bytes = Vec::new();
                std::io::stdin()
                    .lock()
                    .read_to_end(&mut bytes)
                    .map_err(|e| Error::io("<stdin>", e))?;
                Ok(decode_page(bytes))
            }
            Input::File(p) => read_page_file(p),
        }
    }
}

pub fn read_page_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    Ok(decode_page(bytes))
}

/// Page bytes to text. Saved pages are UTF-8 in practice; a stray byte
/// becomes U+FFFD instead of failing the whole input.
pub fn decode_page(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

/// The column pulled out of one table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    /// Position among all matching tables of the page (not within the range).
    pub index: usize,
    pub caption: Option<String>,
    pub values: Column,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentColumns {
    pub source: String,
    pub title: Option<String>,
    pub tables: Vec<TableColumn>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentListing {
    pub source: String,
    pub title: Option<String>,
    pub tables: Vec<TableSummary>,
}

#[derive(Debug)]
pub struct Failure {
    pub source: String,
    pub error: Error,
}

/// What a run produced. Failed inputs don't stop the others.
#[derive(Debug)]
pub struct RunSummary<T> {
    pub documents: Vec<T>,
    pub failed: Vec<Failure>,
}

impl<T> RunSummary<T> {
    pub fn all_failed(&self) -> bool {
        self.documents.is_empty() && !self.failed.is_empty()
    }
}

/* ---------------- single page ---------------- */

/// Select the configured table range of `page` and pull the column out of
/// each selected table.
pub fn extract_page(page: &Page, opts: &ExtractOptions) -> Result<Vec<TableColumn>> {
    let all = page.tables(&opts.class)?;
    let end = opts.range.end_for(all.len());
    let picked = select_tables(&all, opts.range.start, end);

    // select_tables clamps; this is where the picked slice begins.
    let first = opts.range.start.min(end.min(all.len()));

    let columns = extract_column_from_tables(picked, opts.column);
    logd!(
        "Extract: class={} tables={} picked={} column={}",
        opts.class, all.len(), picked.len(), opts.column
    );

    Ok(picked
        .iter()
        .zip(columns)
        .enumerate()
        .map(|(i, (table, values))| TableColumn {
            index: first + i,
            caption: table.caption(),
            values,
        })
        .collect())
}

/// Convenience: parse `html` and run `extract_page` on it.
pub fn extract_html(html: &str, opts: &ExtractOptions) -> Result<Vec<TableColumn>> {
    extract_page(&Page::parse(html), opts)
}

/// Summaries of every table of `class` on the page.
pub fn list_page(page: &Page, class: &str) -> Result<Vec<TableSummary>> {
    Ok(page
        .tables(class)?
        .iter()
        .enumerate()
        .map(|(i, t)| t.summary(i))
        .collect())
}

/* ---------------- many inputs ---------------- */

pub fn run(
    inputs: &[Input],
    opts: &ExtractOptions,
    progress: Option<&mut dyn Progress>,
) -> RunSummary<DocumentColumns> {
    for_each_input(inputs, progress, |source, page| {
        Ok(DocumentColumns {
            source,
            title: page.title(),
            tables: extract_page(page, opts)?,
        })
    })
}

pub fn list(
    inputs: &[Input],
    class: &str,
    progress: Option<&mut dyn Progress>,
) -> RunSummary<DocumentListing> {
    for_each_input(inputs, progress, |source, page| {
        Ok(DocumentListing {
            source,
            title: page.title(),
            tables: list_page(page, class)?,
        })
    })
}

fn for_each_input<T, F>(
    inputs: &[Input],
    mut progress: Option<&mut dyn Progress>,
    mut work: F,
) -> RunSummary<T>
where
    F: FnMut(String, &Page) -> Result<T>,
{
    if let Some(p) = progress.as_deref_mut() {
        p.begin(inputs.len());
    }

    let mut documents = Vec::with_capacity(inputs.len());
    let mut failed = Vec::new();

    for input in inputs {
        let label = input.label();
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Reading {}", label));
        }
        let result = input.read().and_then(|text| {
            let page = Page::parse(&text);
            work(label.clone(), &page)
        });

        match result {
            Ok(doc) => {
                logf!("Run: OK {}", label);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&label);
                }
                documents.push(doc);
            }
            Err(e) => {
                loge!("Run: {}: {}", label, e);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(&label, &e.to_string());
                }
                failed.push(Failure { source: label, error: e });
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    RunSummary { documents, failed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::TableRange;

    const PAGE: &str = "<html><body>\
        <table class=wikitable><tr><td>a</td><td>1</td></tr></table>\
        <table class=other><tr><td>skip</td></tr></table>\
        <table class=\"wikitable sortable\"><caption>Second</caption>\
          <tr><td>b</td><td>2</td></tr><tr><td>c</td></tr></table>\
        <table class=wikitable><tr><td>d</td><td>4</td></tr></table>\
        </body></html>";

    #[test]
    fn indexes_follow_the_full_table_list() {
        let opts = ExtractOptions {
            range: TableRange::new(1, 3),
            column: 1,
            ..ExtractOptions::default()
        };
        let cols = extract_html(PAGE, &opts).unwrap();
        assert_eq!(cols.len(), 2);
        assert_eq!(cols[0].index, 1);
        assert_eq!(cols[0].caption.as_deref(), Some("Second"));
        assert_eq!(cols[0].values, vec![Some(s!("2")), None]);
        assert_eq!(cols[1].index, 2);
        assert_eq!(cols[1].values, vec![Some(s!("4"))]);
    }

    #[test]
    fn range_past_end_is_empty() {
        let opts = ExtractOptions { range: TableRange::new(10, 20), ..ExtractOptions::default() };
        assert!(extract_html(PAGE, &opts).unwrap().is_empty());
    }

    #[test]
    fn other_class() {
        let opts = ExtractOptions { class: s!("other"), ..ExtractOptions::default() };
        let cols = extract_html(PAGE, &opts).unwrap();
        assert_eq!(cols.len(), 1);
        assert_eq!(cols[0].values, vec![Some(s!("skip"))]);
    }

    #[test]
    fn listing_counts_rows() {
        let page = Page::parse(PAGE);
        let list = list_page(&page, "wikitable").unwrap();
        let rows: Vec<usize> = list.iter().map(|s| s.rows).collect();
        assert_eq!(rows, vec![1, 2, 1]);
        assert_eq!(list[1].index, 1);
    }

    #[test]
    fn stray_bytes_are_replaced() {
        let text = decode_page(b"<td>caf\xe9</td>".to_vec());
        assert_eq!(text, "<td>caf\u{fffd}</td>");
        assert_eq!(decode_page(b"plain".to_vec()), "plain");
    }

    #[test]
    fn latin1_file_still_extracts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.html");
        std::fs::write(&path, b"<table class=wikitable><tr><td>caf\xe9</td></tr></table>").unwrap();

        let cols = extract_html(&read_page_file(&path).unwrap(), &ExtractOptions::default()).unwrap();
        assert_eq!(cols[0].values, vec![Some(s!("caf\u{fffd}"))]);
    }

    #[test]
    fn progress_hears_about_each_input() {
        #[derive(Default)]
        struct Recorder(Vec<String>);
        impl Progress for Recorder {
            fn log(&mut self, msg: &str) { self.0.push(s!(msg)); }
            fn item_failed(&mut self, label: &str, _err: &str) { self.0.push(format!("failed {label}")); }
        }

        let mut rec = Recorder::default();
        let missing = Input::File(PathBuf::from("/nonexistent/wiki_scrape/page.html"));
        let summary = run(&[missing], &ExtractOptions::default(), Some(&mut rec));
        assert!(summary.all_failed());
        assert_eq!(
            rec.0,
            vec![
                s!("Reading /nonexistent/wiki_scrape/page.html"),
                s!("failed /nonexistent/wiki_scrape/page.html"),
            ]
        );
    }

    #[test]
    fn stdin_arg() {
        assert_eq!(Input::from_arg("-"), Input::Stdin);
        assert_eq!(Input::from_arg("a.html"), Input::File(PathBuf::from("a.html")));
        assert_eq!(Input::Stdin.label(), "<stdin>");
    }
}
