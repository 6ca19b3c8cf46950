//! Route configuration for ranking endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{analyze, download, health, score, validate_request, RankingAppState};

/// Creates the ranking router with all endpoints.
///
/// Routes:
/// - `GET /health` - Liveness probe
/// - `POST /api/validate` - Check form fields
/// - `POST /api/analyze` - Score an uploaded file (multipart)
/// - `POST /api/score` - Score a JSON matrix
/// - `GET /api/download/:filename` - Download a result file
pub fn ranking_router() -> Router<RankingAppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/validate", post(validate_request))
        .route("/api/analyze", post(analyze))
        .route("/api/score", post(score))
        .route("/api/download/:filename", get(download))
}
