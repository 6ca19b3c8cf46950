//! Raw Table - Ingested tabular data before validation.

use serde::{Deserialize, Serialize};

/// A single ingested cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    /// Classifies raw text: blank ⇒ `Empty`, numeric ⇒ `Number`, otherwise `Text`.
    pub fn from_text(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Cell::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Cell::Number(value),
            _ => Cell::Text(trimmed.to_string()),
        }
    }

    /// Returns the numeric value, if this cell holds one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Renders the cell as it would appear in a delimited file.
    pub fn display(&self) -> String {
        match self {
            Cell::Text(text) => text.clone(),
            Cell::Number(value) => value.to_string(),
            Cell::Empty => String::new(),
        }
    }
}

/// Headers plus rows of cells, as handed over by an ingestion adapter.
///
/// The first column is expected to hold alternative identifiers and the
/// remaining columns criterion values; the Validator enforces this.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl RawTable {
    /// Creates a table from headers and rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { headers, rows }
    }

    /// Creates a table from text cells, classifying each one.
    pub fn from_text_rows(headers: Vec<impl Into<String>>, rows: Vec<Vec<&str>>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Cell::from_text).collect())
                .collect(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_from_text_classifies_values() {
        assert_eq!(Cell::from_text("12.5"), Cell::Number(12.5));
        assert_eq!(Cell::from_text("  7 "), Cell::Number(7.0));
        assert_eq!(Cell::from_text("M1"), Cell::Text("M1".to_string()));
        assert_eq!(Cell::from_text("   "), Cell::Empty);
    }

    #[test]
    fn cell_from_text_keeps_non_finite_as_text() {
        assert_eq!(Cell::from_text("NaN"), Cell::Text("NaN".to_string()));
        assert_eq!(Cell::from_text("inf"), Cell::Text("inf".to_string()));
    }

    #[test]
    fn cell_display_round_trips_text() {
        assert_eq!(Cell::Text("A".to_string()).display(), "A");
        assert_eq!(Cell::Number(3.0).display(), "3");
        assert_eq!(Cell::Empty.display(), "");
    }

    #[test]
    fn from_text_rows_builds_table() {
        let table = RawTable::from_text_rows(
            vec!["Model", "RAM"],
            vec![vec!["M1", "256"], vec!["M2", ""]],
        );
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[0][1], Cell::Number(256.0));
        assert!(table.rows[1][1].is_empty());
    }
}
