//! Validator - Shape and value checks that run before any arithmetic.
//!
//! Checks run in a fixed order and the first failure wins:
//! 1. schema (identifier column, numeric criteria, no missing cells)
//! 2. every value strictly positive
//! 3. weight and impact counts match the criteria count
//! 4. every weight strictly positive
//! 5. every impact token recognized

use super::criteria::{check_weights_positive, ImpactVector, WeightVector};
use super::raw_table::{Cell, RawTable};
use super::DecisionMatrix;
use crate::domain::foundation::ValidationError;

/// A matrix with weights and impacts that passed every check.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    pub matrix: DecisionMatrix,
    pub weights: WeightVector,
    pub impacts: ImpactVector,
}

/// Input validation functions.
pub struct Validator;

impl Validator {
    /// Validates an ingested table against raw weights and impact tokens.
    pub fn validate<S: AsRef<str>>(
        table: &RawTable,
        weights: &[f64],
        impacts: &[S],
    ) -> Result<ValidatedInput, ValidationError> {
        let matrix = Self::to_matrix(table)?;
        Self::check_values_positive(&matrix)?;
        Self::check_cardinality(matrix.criterion_count(), weights.len(), impacts.len())?;
        check_weights_positive(weights)?;
        let impacts = ImpactVector::from_tokens(impacts)?;

        Ok(ValidatedInput {
            matrix,
            weights: WeightVector::new(weights.to_vec()),
            impacts,
        })
    }

    /// Runs the value checks on already-typed input.
    ///
    /// The matrix shape is guaranteed by its builder and impacts by their
    /// type, so this covers positivity, cardinality and weights.
    pub fn check(
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        impacts: &ImpactVector,
    ) -> Result<(), ValidationError> {
        Self::check_values_positive(matrix)?;
        Self::check_cardinality(matrix.criterion_count(), weights.len(), impacts.len())?;
        check_weights_positive(weights.as_slice())
    }

    /// Splits a raw table into identifiers and numeric criteria.
    ///
    /// The identifier column is rejected only when every identifier is
    /// numeric, since then it cannot be told apart from a criterion.
    pub fn to_matrix(table: &RawTable) -> Result<DecisionMatrix, ValidationError> {
        if table.column_count() < 2 {
            return Err(ValidationError::schema(
                "columns",
                format!(
                    "input must contain an identifier column and at least one criterion column, found {} column(s)",
                    table.column_count()
                ),
            ));
        }
        if table.is_empty() {
            return Err(ValidationError::schema(
                "rows",
                "input must contain at least one alternative",
            ));
        }

        let identifier_header = &table.headers[0];
        let criteria = &table.headers[1..];

        if table.rows.iter().all(|row| matches!(row.first(), Some(Cell::Number(_)))) {
            return Err(ValidationError::schema(
                identifier_header.as_str(),
                "first column must contain non-numeric identifiers",
            ));
        }

        let mut builder = DecisionMatrix::builder()
            .identifier_header(identifier_header.clone())
            .criteria(criteria.to_vec());

        for (row_index, row) in table.rows.iter().enumerate() {
            if row.len() != table.column_count() {
                return Err(ValidationError::schema(
                    "rows",
                    format!(
                        "row {} has {} cells, expected {}",
                        row_index + 1,
                        row.len(),
                        table.column_count()
                    ),
                ));
            }

            let identifier = match &row[0] {
                Cell::Text(text) => text.clone(),
                Cell::Number(value) => value.to_string(),
                Cell::Empty => {
                    return Err(ValidationError::schema(
                        identifier_header.as_str(),
                        format!("row {} is missing its identifier", row_index + 1),
                    ))
                }
            };

            let values = row[1..]
                .iter()
                .zip(criteria)
                .map(|(cell, criterion)| match cell {
                    Cell::Number(value) => Ok(*value),
                    Cell::Empty => Err(ValidationError::schema(
                        criterion.as_str(),
                        format!("missing value for '{}'", identifier),
                    )),
                    Cell::Text(text) => Err(ValidationError::schema(
                        criterion.as_str(),
                        format!(
                            "all criteria columns must contain numeric values, found '{}' for '{}'",
                            text, identifier
                        ),
                    )),
                })
                .collect::<Result<Vec<_>, _>>()?;

            builder = builder.row(identifier, values);
        }

        builder.build()
    }

    fn check_values_positive(matrix: &DecisionMatrix) -> Result<(), ValidationError> {
        if matrix.values().any(|value| value <= 0.0) {
            return Err(ValidationError::range(
                "values",
                "all values must be positive",
            ));
        }
        Ok(())
    }

    fn check_cardinality(
        criteria: usize,
        weights: usize,
        impacts: usize,
    ) -> Result<(), ValidationError> {
        if weights != criteria {
            return Err(ValidationError::cardinality("weights", criteria, weights));
        }
        if impacts != criteria {
            return Err(ValidationError::cardinality("impacts", criteria, impacts));
        }
        Ok(())
    }
}
