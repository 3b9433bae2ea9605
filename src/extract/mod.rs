// src/extract/mod.rs
//! # Column extraction
//!
//! Turns tables into columns of cell text. Everything here is pure and
//! total: no I/O, no logging, no failure paths. A row that is too short for
//! the requested column yields `None` instead of an error, and out-of-range
//! table slices shrink instead of failing.
//!
//! The extractor never touches HTML directly. It reads through the
//! [`TableSource`] / [`RowSource`] / [`CellSource`] traits, implemented by
//! `core::html` for parsed pages and by [`MemTable`] for in-memory fixtures.
//!
//! ## Typical call chain
//! ```text
//! runner → Page::tables(class) → select_tables(start, end)
//!                              ↘ extract_column_from_tables(column)
//! ```

mod column;
mod mem;
mod select;
mod source;

pub use column::{extract_column, extract_column_from_tables, flatten_columns, Column};
pub use mem::MemTable;
pub use select::select_tables;
pub use source::{CellSource, RowSource, TableSource};
