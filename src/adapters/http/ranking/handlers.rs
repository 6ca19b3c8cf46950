//! HTTP handlers for ranking endpoints.

use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::application::{
    AnalyzeCommand, AnalyzeError, AnalyzeHandler, ValidateRequestCommand, ValidateRequestHandler,
};
use crate::domain::foundation::{Impact, ValidationError};
use crate::domain::topsis::{DecisionMatrix, ImpactVector, TopsisEngine, Validator, WeightVector};
use crate::ports::{ResultStore, StorageError};

use super::dto::{
    AnalyzeResponse, ErrorResponse, ScoreRequest, ScoreResponse, ValidateRequest,
    ValidateResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

/// Shared state for ranking endpoints.
#[derive(Clone)]
pub struct RankingAppState {
    analyze_handler: Arc<AnalyzeHandler>,
    validate_handler: Arc<ValidateRequestHandler>,
    store: Arc<dyn ResultStore>,
}

impl RankingAppState {
    pub fn new(analyze_handler: Arc<AnalyzeHandler>, store: Arc<dyn ResultStore>) -> Self {
        Self {
            analyze_handler,
            validate_handler: Arc::new(ValidateRequestHandler::new()),
            store,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /health - Liveness probe
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// POST /api/validate - Check form fields before upload
pub async fn validate_request(
    State(state): State<RankingAppState>,
    Json(req): Json<ValidateRequest>,
) -> Json<ValidateResponse> {
    let cmd = ValidateRequestCommand {
        email: req.email,
        weights: req.weights,
        impacts: req.impacts,
    };
    let result = state.validate_handler.handle(&cmd);

    Json(ValidateResponse {
        valid: result.is_valid(),
        errors: result.errors,
    })
}

/// POST /api/analyze - Score an uploaded file and email the result
pub async fn analyze(State(state): State<RankingAppState>, mut multipart: Multipart) -> Response {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut email = None;
    let mut weights = None;
    let mut impacts = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return multipart_error(e.status(), e.body_text()),
        };

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                match field.bytes().await {
                    Ok(bytes) => file = Some((file_name, bytes.to_vec())),
                    Err(e) => return multipart_error(e.status(), e.body_text()),
                }
            }
            "email" | "weights" | "impacts" => {
                let value = match field.text().await {
                    Ok(text) => text,
                    Err(e) => return multipart_error(e.status(), e.body_text()),
                };
                match name.as_str() {
                    "email" => email = Some(value),
                    "weights" => weights = Some(value),
                    _ => impacts = Some(value),
                }
            }
            _ => {}
        }
    }

    let Some((file_name, content)) = file else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("No file uploaded")),
        )
            .into_response();
    };

    let (Some(recipient), Some(weights), Some(impacts)) = (email, weights, impacts) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Missing required fields")),
        )
            .into_response();
    };

    let cmd = AnalyzeCommand {
        file_name,
        content,
        weights,
        impacts,
        recipient,
    };

    match state.analyze_handler.handle(cmd).await {
        Ok(outcome) => (StatusCode::OK, Json(AnalyzeResponse::from(outcome))).into_response(),
        Err(e) => handle_analyze_error(e),
    }
}

/// POST /api/score - Score a matrix given as JSON
pub async fn score(Json(req): Json<ScoreRequest>) -> Response {
    let result = score_request(req);

    match result {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => validation_error(&e),
    }
}

/// GET /api/download/:filename - Download a stored result file
pub async fn download(
    State(state): State<RankingAppState>,
    Path(filename): Path<String>,
) -> Response {
    match state.store.read(&filename).await {
        Ok(content) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", filename),
                ),
            ],
            content,
        )
            .into_response(),
        Err(StorageError::NotFound(_)) | Err(StorageError::InvalidName(_)) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("File", &filename)),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to read result file");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Failed to read result file")),
            )
                .into_response()
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

fn score_request(req: ScoreRequest) -> Result<ScoreResponse, ValidationError> {
    let mut builder = DecisionMatrix::builder().criteria(req.criteria);
    if let Some(header) = req.identifier_header {
        builder = builder.identifier_header(header);
    }
    for row in req.rows {
        builder = builder.row(row.id, row.values);
    }
    let matrix = builder.build()?;

    let weights = WeightVector::new(req.weights);
    let impacts = match ImpactVector::from_tokens(&req.impacts) {
        Ok(impacts) => impacts,
        Err(e) => {
            // Value, count and weight checks report before token errors
            let placeholder = ImpactVector::new(vec![Impact::Benefit; req.impacts.len()]);
            Validator::check(&matrix, &weights, &placeholder)?;
            return Err(e);
        }
    };

    Ok(TopsisEngine::score(&matrix, &weights, &impacts)?.into())
}

fn validation_error(error: &ValidationError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::validation(error)),
    )
        .into_response()
}

fn multipart_error(status: StatusCode, message: String) -> Response {
    let body = if status == StatusCode::PAYLOAD_TOO_LARGE {
        ErrorResponse::payload_too_large(message)
    } else {
        ErrorResponse::bad_request(message)
    };
    (status, Json(body)).into_response()
}

fn handle_analyze_error(error: AnalyzeError) -> Response {
    match error {
        AnalyzeError::Validation(ref e) => validation_error(e),
        AnalyzeError::FileTooLarge { .. } => (
            StatusCode::PAYLOAD_TOO_LARGE,
            Json(ErrorResponse::payload_too_large(error.to_string())),
        )
            .into_response(),
        ref e if e.is_client_error() => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(e.to_string())),
        )
            .into_response(),
        e => {
            tracing::error!(error = %e, "Analysis failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal(e.to_string())),
            )
                .into_response()
        }
    }
}
