// src/extract/mem.rs
//
// In-memory table: rows of cell strings. Lets the extractor be exercised
// without parsing any HTML.

use super::source::{CellSource, RowSource, TableSource};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemTable {
    rows: Vec<Vec<String>>,
}

impl MemTable {
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|r| r.into_iter().map(Into::into).collect())
                .collect(),
        }
    }
}

impl TableSource for MemTable {
    type Row<'a> = &'a [String];

    fn body_rows(&self) -> Vec<Self::Row<'_>> {
        self.rows.iter().map(Vec::as_slice).collect()
    }
}

impl<'r> RowSource for &'r [String] {
    type Cell = &'r str;

    fn cells(&self) -> Vec<&'r str> {
        let row: &'r [String] = *self;
        row.iter().map(String::as_str).collect()
    }
}

impl CellSource for &str {
    fn text(&self) -> String {
        s!(*self)
    }
}
