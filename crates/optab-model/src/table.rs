/// An ordered sequence of column names paired with ordered rows of cells.
///
/// Cells are aligned positionally to columns; every row's length equals the
/// column count (the decode boundary drops rows that violate this).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Position of the first column with this name, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Cell at `(row_idx, name)`, or `None` if either coordinate is missing.
    pub fn cell(&self, row_idx: usize, name: &str) -> Option<&str> {
        let col_idx = self.column_index(name)?;
        self.rows.get(row_idx)?.get(col_idx).map(String::as_str)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
