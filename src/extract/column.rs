// src/extract/column.rs
use super::source::{CellSource, RowSource, TableSource};

/// One value per body row; `None` where the row has no cell at the column.
pub type Column = Vec<Option<String>>;

/// Cell text at `column` for every body row of `table`, in row order.
pub fn extract_column<T>(table: &T, column: usize) -> Column
where
    T: TableSource + ?Sized,
{
    table
        .body_rows()
        .iter()
        .map(|row| row.cells().get(column).map(CellSource::text))
        .collect()
}

/// `extract_column` applied to each table in turn.
/// Results stay per table (same order, same count as `tables`).
pub fn extract_column_from_tables<T>(tables: &[T], column: usize) -> Vec<Column>
where
    T: TableSource,
{
    tables.iter().map(|t| extract_column(t, column)).collect()
}

/// Concatenate per-table columns into one, table order first.
pub fn flatten_columns(columns: Vec<Column>) -> Column {
    columns.into_iter().flatten().collect()
}
