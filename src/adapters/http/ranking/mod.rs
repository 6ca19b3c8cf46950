//! Ranking HTTP adapter.
//!
//! Exposes validation, file analysis, direct scoring and result download.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::RankingAppState;
pub use routes::ranking_router;
