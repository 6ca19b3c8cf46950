//! HTTP adapters - REST API implementations.

pub mod app;
pub mod ranking;

pub use app::{build_router, build_state};
pub use ranking::{ranking_router, RankingAppState};
