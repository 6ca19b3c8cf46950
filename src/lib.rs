//! TOPSIS Ranker - Multi-criteria ranking of alternatives.
//!
//! Scores alternatives by their relative closeness to an ideal solution
//! (TOPSIS) and ranks them. The scoring core in `domain::topsis` is pure;
//! file ingestion, result delivery and the HTTP API live in `adapters`.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
