//! Foundation module - Shared domain primitives.
//!
//! Contains the error taxonomy, the impact value object and identifiers
//! that form the vocabulary of the ranking domain.

mod errors;
mod ids;
mod impact;

pub use errors::{ErrorCode, ValidationError};
pub use ids::AnalysisId;
pub use impact::{Impact, IMPACT_TOKENS};
