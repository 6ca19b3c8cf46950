//! Application router assembly.
//!
//! Wires adapters from configuration and wraps the ranking routes in the
//! tracing, timeout, CORS and body-limit layers.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::adapters::email::{NoopNotifier, ResendConfig, ResendNotifier};
use crate::adapters::export::CsvResultWriter;
use crate::adapters::storage::LocalResultStore;
use crate::application::AnalyzeHandler;
use crate::config::{AppConfig, CorsMode, ServerConfig};
use crate::ports::ResultNotifier;

use super::ranking::{ranking_router, RankingAppState};

/// Room for multipart boundaries and form fields on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Builds the ranking state from configuration.
pub fn build_state(config: &AppConfig) -> RankingAppState {
    let store = Arc::new(LocalResultStore::new(&config.upload.dir));

    let notifier: Arc<dyn ResultNotifier> = match config.email.api_key() {
        Some(key) => {
            let resend = ResendConfig::new(key, config.email.from_header())
                .with_base_url(config.email.api_base_url.clone());
            Arc::new(ResendNotifier::new(resend))
        }
        None => {
            tracing::info!("No Resend API key configured, result emails disabled");
            Arc::new(NoopNotifier)
        }
    };

    let analyze_handler = AnalyzeHandler::new(
        store.clone(),
        Arc::new(CsvResultWriter::new()),
        notifier,
        config.upload.policy(),
    );

    RankingAppState::new(Arc::new(analyze_handler), store)
}

/// Builds the full application router.
pub fn build_router(state: RankingAppState, config: &AppConfig) -> Router {
    ranking_router()
        .with_state(state)
        .layer(DefaultBodyLimit::max(
            config.upload.max_file_size + MULTIPART_OVERHEAD_BYTES,
        ))
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins = match server.cors_mode() {
        CorsMode::AllowAny => return CorsLayer::permissive(),
        CorsMode::Origins(origins) => origins,
    };

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}
