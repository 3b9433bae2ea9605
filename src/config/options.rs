// src/config/options.rs
use super::consts::*;

/// Half-open range `[start, end)` over the tables of a page.
/// `end: None` means "through the last table".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableRange {
    pub start: usize,
    pub end: Option<usize>,
}

impl Default for TableRange {
    fn default() -> Self {
        Self { start: 0, end: None }
    }
}

impl TableRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end: Some(end) }
    }

    /// Just table `ix`.
    pub fn one(ix: usize) -> Self {
        Self::new(ix, ix.saturating_add(1))
    }

    /// Concrete end for a page holding `len` tables (not clamped).
    pub fn end_for(&self, len: usize) -> usize {
        self.end.unwrap_or(len)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    /// CSS class marking the tables of interest.
    pub class: String,
    pub range: TableRange,
    /// Zero-based column to isolate.
    pub column: usize,
    /// What front ends print in place of a missing cell.
    pub missing: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            class: s!(DEFAULT_TABLE_CLASS),
            range: TableRange::default(),
            column: 0,
            missing: s!(DEFAULT_MISSING),
        }
    }
}

impl ExtractOptions {
    pub fn display<'a>(&'a self, value: &'a Option<String>) -> &'a str {
        value.as_deref().unwrap_or(&self.missing)
    }
}
