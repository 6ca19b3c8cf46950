//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (errors, impacts, identifiers)
//! - `topsis` - Pure scoring pipeline (validation, normalization, ranking)

pub mod foundation;
pub mod topsis;
