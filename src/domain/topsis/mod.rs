//! TOPSIS Module - Pure domain services for multi-criteria ranking.
//!
//! Alternatives are scored by their relative closeness to an ideal profile
//! (best value on every criterion) and distance from an anti-ideal profile
//! (worst value on every criterion).
//!
//! # Components
//!
//! - `DecisionMatrix` / `RawTable` - Typed and ingested decision tables
//! - `WeightVector` / `ImpactVector` - Per-criterion weights and directions
//! - `Validator` - Ordered shape and value checks
//! - `normalize` / `apply_weights` - Column unit-normalization and weighting
//! - `IdealSolution` - Ideal and anti-ideal profiles
//! - `separations` / `closeness_scores` - Distances and closeness coefficients
//! - `rank` - Competition ranking of the coefficients
//! - `TopsisEngine` - The whole pipeline behind one call
//!
//! # Design Philosophy
//!
//! All functions are pure and stateless. No ports or adapters are involved;
//! ingestion and delivery live in the adapter layer.

mod criteria;
mod decision_matrix;
mod engine;
mod ideal;
mod normalizer;
mod ranker;
mod ranking;
mod raw_table;
mod separation;
mod validator;

pub use criteria::{parse_impacts, parse_weights, ImpactVector, WeightVector};
pub use decision_matrix::{DecisionMatrix, DecisionMatrixBuilder, DEFAULT_IDENTIFIER_HEADER};
pub use engine::{TopsisAnalysis, TopsisEngine};
pub use ideal::IdealSolution;
pub use normalizer::{apply_weights, column_norms, normalize, NormalizedMatrix, WeightedMatrix};
pub use ranker::{rank, ranked_order};
pub use ranking::{Ranking, ResultRow};
pub use raw_table::{Cell, RawTable};
pub use separation::{closeness, closeness_scores, separations, Separations, INDISTINGUISHABLE_SCORE};
pub use validator::{ValidatedInput, Validator};
