// src/core/html.rs
//
// Parsed HTML page and its tables, read through `scraper`.
//
// Row/cell lookup follows the DOM query semantics of a browser console:
// rows are `tbody tr` descendants of the table and cells are `td`
// descendants of the row, both in document order. The HTML parser inserts
// an implicit <tbody>, so plain `<table><tr>…` markup still has body rows.

use std::mem::take;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::DEFAULT_TABLE_CLASS;
use crate::core::sanitize::{is_css_ident, normalize_lines, style_hides};
use crate::error::{Error, Result};
use crate::extract::{CellSource, RowSource, TableSource};

static BODY_ROWS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tbody tr").expect("static selector"));
static DATA_CELLS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("static selector"));
static ANY_ROWS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("static selector"));

/// A whole HTML document, parsed once.
pub struct Page {
    html: Html,
}

impl Page {
    /// Parse a full document. HTML parsing is lenient; this never fails.
    pub fn parse(text: &str) -> Self {
        Self { html: Html::parse_document(text) }
    }

    /// Every element carrying `class`, in document order.
    pub fn tables(&self, class: &str) -> Result<Vec<HtmlTable<'_>>> {
        if !is_css_ident(class) {
            return Err(Error::InvalidClass(s!(class)));
        }
        let sel = Selector::parse(&format!(".{}", class))
            .map_err(|_| Error::InvalidClass(s!(class)))?;

        Ok(self.html.select(&sel).map(HtmlTable::new).collect())
    }

    /// Tables marked `class="wikitable"`.
    pub fn wikitables(&self) -> Vec<HtmlTable<'_>> {
        self.tables(DEFAULT_TABLE_CLASS).unwrap_or_default()
    }

    /// Document `<title>`, if present and non-empty.
    pub fn title(&self) -> Option<String> {
        let sel = Selector::parse("title").ok()?;
        let el = self.html.select(&sel).next()?;
        let t = rendered_text(el);
        if t.is_empty() { None } else { Some(t) }
    }
}

/// One table element of a `Page`.
#[derive(Clone, Copy, Debug)]
pub struct HtmlTable<'d> {
    el: ElementRef<'d>,
}

/// A listing line for a table: where it is and what it looks like.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableSummary {
    pub index: usize,
    pub caption: Option<String>,
    pub headers: Vec<String>,
    pub rows: usize,
}

impl<'d> HtmlTable<'d> {
    pub fn new(el: ElementRef<'d>) -> Self {
        Self { el }
    }

    /// Text of the table's own `<caption>` child.
    pub fn caption(&self) -> Option<String> {
        let cap = self
            .el
            .children()
            .filter_map(ElementRef::wrap)
            .find(|c| c.value().name() == "caption")?;
        let text = rendered_text(cap);
        if text.is_empty() { None } else { Some(text) }
    }

    /// `th` texts of the first row that has any. Informational only:
    /// extraction never looks at header cells.
    pub fn headers(&self) -> Vec<String> {
        for tr in self.el.select(&ANY_ROWS) {
            let ths: Vec<String> = tr
                .children()
                .filter_map(ElementRef::wrap)
                .filter(|c| c.value().name() == "th")
                .map(rendered_text)
                .collect();
            if !ths.is_empty() {
                return ths;
            }
        }
        Vec::new()
    }

    pub fn summary(&self, index: usize) -> TableSummary {
        TableSummary {
            index,
            caption: self.caption(),
            headers: self.headers(),
            rows: self.body_rows().len(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct HtmlRow<'d>(ElementRef<'d>);

#[derive(Clone, Copy, Debug)]
pub struct HtmlCell<'d>(ElementRef<'d>);

impl<'d> TableSource for HtmlTable<'d> {
    type Row<'a> = HtmlRow<'d> where Self: 'a;

    fn body_rows(&self) -> Vec<Self::Row<'_>> {
        self.el.select(&BODY_ROWS).map(HtmlRow).collect()
    }
}

impl<'d> RowSource for HtmlRow<'d> {
    type Cell = HtmlCell<'d>;

    fn cells(&self) -> Vec<HtmlCell<'d>> {
        self.0.select(&DATA_CELLS).map(HtmlCell).collect()
    }
}

impl CellSource for HtmlCell<'_> {
    fn text(&self) -> String {
        rendered_text(self.0)
    }
}

/* ---------- rendered text ---------- */

/// Approximates what a browser shows for an element: text nodes joined,
/// `<script>`/`<style>` and `display:none` subtrees skipped, `<br>` and
/// block elements start a new line, cells of a table row are separated by a
/// tab, whitespace collapsed per cell. `rowspan`/`colspan` and CSS layout
/// are not modelled.
pub fn rendered_text(el: ElementRef<'_>) -> String {
    let mut tc = TextCollector::default();
    tc.walk(el);
    tc.finish()
}

#[derive(Default)]
struct TextCollector {
    lines: Vec<Vec<String>>,
    // finished cell segments of the current line
    cells: Vec<String>,
    seg: String,
}

impl TextCollector {
    fn walk(&mut self, el: ElementRef<'_>) {
        for child in el.children() {
            if let Some(text) = child.value().as_text() {
                self.seg.push_str(text);
                continue;
            }
            let Some(child_el) = ElementRef::wrap(child) else { continue };
            if is_hidden(child_el) {
                continue;
            }
            match child_el.value().name() {
                "script" | "style" | "template" => {}
                "br" => self.break_line(),
                "tr" => {
                    self.break_line();
                    self.walk_row(child_el);
                    self.break_line();
                }
                name if is_block(name) => {
                    self.break_line();
                    self.walk(child_el);
                    self.break_line();
                }
                _ => self.walk(child_el),
            }
        }
    }

    /// Cells of one row, tab-separated. Anything between cells is ignored.
    fn walk_row(&mut self, tr: ElementRef<'_>) {
        let cells = tr
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|c| matches!(c.value().name(), "td" | "th") && !is_hidden(*c));
        for (i, cell) in cells.enumerate() {
            if i > 0 {
                self.cells.push(take(&mut self.seg));
            }
            self.walk(cell);
        }
    }

    fn break_line(&mut self) {
        self.cells.push(take(&mut self.seg));
        self.lines.push(take(&mut self.cells));
    }

    fn finish(mut self) -> String {
        self.break_line();
        normalize_lines(&self.lines)
    }
}

fn is_hidden(el: ElementRef<'_>) -> bool {
    let node = el.value();
    node.attr("hidden").is_some() || node.attr("style").is_some_and(style_hides)
}

fn is_block(name: &str) -> bool {
    matches!(
        name,
        "p" | "div" | "li" | "ul" | "ol" | "dl" | "dt" | "dd" | "table" | "tr"
            | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "blockquote" | "pre"
    )
}
