//! Decision Matrix - Alternatives × criteria table of raw values.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::ValidationError;

/// Default header for the identifier column.
pub const DEFAULT_IDENTIFIER_HEADER: &str = "Alternative";

/// An m×n table of criterion values, one row per alternative.
///
/// Construction through [`DecisionMatrixBuilder`] guarantees the shape
/// (at least one row and one criterion, rectangular, unique identifiers,
/// finite values). Strict positivity is checked by the Validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionMatrix {
    identifier_header: String,
    criteria: Vec<String>,
    alternatives: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl DecisionMatrix {
    /// Creates a builder for constructing a decision matrix.
    pub fn builder() -> DecisionMatrixBuilder {
        DecisionMatrixBuilder::new()
    }

    /// Header of the identifier column.
    pub fn identifier_header(&self) -> &str {
        &self.identifier_header
    }

    /// Ordered criterion names.
    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    /// Ordered alternative identifiers.
    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    /// Row-major values.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// Values of a single alternative.
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.values.get(index).map(Vec::as_slice)
    }

    /// Values of a single criterion, top to bottom.
    pub fn column(&self, index: usize) -> Vec<f64> {
        self.values.iter().map(|row| row[index]).collect()
    }

    /// Number of alternatives (m).
    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    /// Number of criteria (n).
    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    /// Every value in row-major order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().flat_map(|row| row.iter().copied())
    }

    /// Returns a copy with one criterion column multiplied by `factor`.
    pub fn with_scaled_column(&self, column: usize, factor: f64) -> Self {
        let mut scaled = self.clone();
        for row in &mut scaled.values {
            if let Some(value) = row.get_mut(column) {
                *value *= factor;
            }
        }
        scaled
    }
}

/// Builder for constructing DecisionMatrix instances.
#[derive(Debug, Default)]
pub struct DecisionMatrixBuilder {
    identifier_header: Option<String>,
    criteria: Vec<String>,
    rows: Vec<(String, Vec<f64>)>,
}

impl DecisionMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the identifier column header.
    pub fn identifier_header(mut self, header: impl Into<String>) -> Self {
        self.identifier_header = Some(header.into());
        self
    }

    /// Sets the criterion names.
    pub fn criteria(mut self, names: Vec<impl Into<String>>) -> Self {
        self.criteria = names.into_iter().map(Into::into).collect();
        self
    }

    /// Adds an alternative with its criterion values.
    pub fn row(mut self, identifier: impl Into<String>, values: Vec<f64>) -> Self {
        self.rows.push((identifier.into(), values));
        self
    }

    /// Builds the matrix, checking its shape.
    ///
    /// When no criterion names were given they default to `C1..Cn`, taken
    /// from the width of the first row.
    pub fn build(self) -> Result<DecisionMatrix, ValidationError> {
        if self.rows.is_empty() {
            return Err(ValidationError::schema(
                "matrix",
                "at least one alternative is required",
            ));
        }

        let criteria = if self.criteria.is_empty() {
            let width = self.rows[0].1.len();
            (1..=width).map(|j| format!("C{}", j)).collect()
        } else {
            self.criteria
        };

        if criteria.is_empty() {
            return Err(ValidationError::schema(
                "matrix",
                "at least one criterion column is required",
            ));
        }

        let mut seen = HashSet::new();
        let mut alternatives = Vec::with_capacity(self.rows.len());
        let mut values = Vec::with_capacity(self.rows.len());

        for (identifier, row) in self.rows {
            if identifier.trim().is_empty() {
                return Err(ValidationError::schema(
                    "identifier",
                    "alternative identifiers cannot be empty",
                ));
            }
            if !seen.insert(identifier.clone()) {
                return Err(ValidationError::schema(
                    "identifier",
                    format!("duplicate alternative identifier '{}'", identifier),
                ));
            }
            if row.len() != criteria.len() {
                return Err(ValidationError::schema(
                    identifier.as_str(),
                    format!(
                        "expected {} criterion values, found {}",
                        criteria.len(),
                        row.len()
                    ),
                ));
            }
            if row.iter().any(|v| !v.is_finite()) {
                return Err(ValidationError::schema(
                    identifier.as_str(),
                    "criterion values must be finite numbers",
                ));
            }
            alternatives.push(identifier);
            values.push(row);
        }

        Ok(DecisionMatrix {
            identifier_header: self
                .identifier_header
                .unwrap_or_else(|| DEFAULT_IDENTIFIER_HEADER.to_string()),
            criteria,
            alternatives,
            values,
        })
    }
}
