//! Ranking - Scored, ranked result rows.

use serde::{Deserialize, Serialize};

/// One scored alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub identifier: String,
    /// Position of the alternative in the input matrix.
    pub input_index: usize,
    /// Original criterion values.
    pub values: Vec<f64>,
    /// Closeness coefficient in [0, 1].
    pub score: f64,
    /// Rank, 1 being best.
    pub rank: usize,
}

/// Result rows ordered best first, with the headers they were scored under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    pub identifier_header: String,
    pub criteria: Vec<String>,
    pub rows: Vec<ResultRow>,
}

impl Ranking {
    /// Number of ranked alternatives.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The top-ranked row.
    pub fn best(&self) -> Option<&ResultRow> {
        self.rows.first()
    }

    /// Up to `n` rows, best first.
    pub fn top(&self, n: usize) -> &[ResultRow] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Looks a row up by alternative identifier.
    pub fn get(&self, identifier: &str) -> Option<&ResultRow> {
        self.rows.iter().find(|row| row.identifier == identifier)
    }

    /// Rows in their original input order.
    pub fn in_input_order(&self) -> Vec<&ResultRow> {
        let mut rows: Vec<&ResultRow> = self.rows.iter().collect();
        rows.sort_by_key(|row| row.input_index);
        rows
    }

    /// Scores in original input order.
    pub fn scores(&self) -> Vec<f64> {
        self.in_input_order().iter().map(|row| row.score).collect()
    }

    /// Full header row: identifier, criteria, then the score and rank columns.
    pub fn columns(&self, score_column: &str, rank_column: &str) -> Vec<String> {
        std::iter::once(self.identifier_header.clone())
            .chain(self.criteria.iter().cloned())
            .chain([score_column.to_string(), rank_column.to_string()])
            .collect()
    }
}
