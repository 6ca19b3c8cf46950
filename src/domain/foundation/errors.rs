//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors raised while validating or scoring a decision problem.
///
/// Every variant carries enough detail (field, expected vs. actual) for a
/// caller to correct the input. Scoring is all-or-nothing: when one of these
/// is returned, no partial ranking exists.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Table cannot be split into an identifier column and numeric criteria.
    #[error("Invalid '{field}': {reason}")]
    Schema { field: String, reason: String },

    /// A value or weight is not strictly positive.
    #[error("Invalid '{field}': {reason}")]
    Range { field: String, reason: String },

    /// Weight or impact count does not match the number of criteria.
    #[error("Number of {field} must match number of criteria: expected {expected}, got {actual}")]
    Cardinality {
        field: String,
        expected: usize,
        actual: usize,
    },

    /// An impact token outside the accepted set.
    #[error("Invalid impact '{token}': accepted values are {}", .accepted.join(", "))]
    UnknownImpact {
        token: String,
        accepted: Vec<String>,
    },

    /// A criterion column with zero Euclidean norm.
    #[error("Criterion column '{column}' has zero norm and cannot be normalized")]
    DegenerateColumn { column: String },
}

impl ValidationError {
    /// Creates a schema error for a field.
    pub fn schema(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::Schema {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a range error for a field.
    pub fn range(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::Range {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a cardinality error.
    pub fn cardinality(field: impl Into<String>, expected: usize, actual: usize) -> Self {
        ValidationError::Cardinality {
            field: field.into(),
            expected,
            actual,
        }
    }

    /// Creates an unknown impact error listing the accepted tokens.
    pub fn unknown_impact(token: impl Into<String>, accepted: &[&str]) -> Self {
        ValidationError::UnknownImpact {
            token: token.into(),
            accepted: accepted.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Creates a degenerate column error.
    pub fn degenerate_column(column: impl Into<String>) -> Self {
        ValidationError::DegenerateColumn {
            column: column.into(),
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::Schema { .. } => ErrorCode::SchemaError,
            ValidationError::Range { .. } => ErrorCode::RangeError,
            ValidationError::Cardinality { .. } => ErrorCode::CardinalityError,
            ValidationError::UnknownImpact { .. } => ErrorCode::DomainError,
            ValidationError::DegenerateColumn { .. } => ErrorCode::DegenerateColumn,
        }
    }

    /// Returns the name of the offending field, if the error names one.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::Schema { field, .. }
            | ValidationError::Range { field, .. }
            | ValidationError::Cardinality { field, .. } => Some(field),
            ValidationError::UnknownImpact { .. } => Some("impacts"),
            ValidationError::DegenerateColumn { column } => Some(column),
        }
    }
}

/// Error codes exposed to API consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    SchemaError,
    RangeError,
    CardinalityError,
    DomainError,
    DegenerateColumn,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::SchemaError => "SCHEMA_ERROR",
            ErrorCode::RangeError => "RANGE_ERROR",
            ErrorCode::CardinalityError => "CARDINALITY_ERROR",
            ErrorCode::DomainError => "DOMAIN_ERROR",
            ErrorCode::DegenerateColumn => "DEGENERATE_COLUMN",
        };
        write!(f, "{}", s)
    }
}
