// src/domain/table.rs

/// Tabular scrape result: one row per listing, columns defined by the backend.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropertyTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl PropertyTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Drops the trailing column from the header and from every row.
    /// Positional: whatever the backend put last goes.
    pub fn without_last_column(mut self) -> Self {
        self.columns.pop();
        for row in &mut self.rows {
            row.pop();
        }
        self
    }
}
