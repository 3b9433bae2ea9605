// src/extract/source.rs

/// Anything with body rows, in document order.
pub trait TableSource {
    type Row<'a>: RowSource
    where
        Self: 'a;

    fn body_rows(&self) -> Vec<Self::Row<'_>>;
}

/// A row: its data cells, in document order. Header cells are not data cells.
pub trait RowSource {
    type Cell: CellSource;

    fn cells(&self) -> Vec<Self::Cell>;
}

/// A cell: its rendered text.
pub trait CellSource {
    fn text(&self) -> String;
}
