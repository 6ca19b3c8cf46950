//! Request and response DTOs for ranking endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::application::AnalysisOutcome;
use crate::domain::foundation::ValidationError;
use crate::domain::topsis::Ranking;
use crate::ports::{RANK_COLUMN, SCORE_COLUMN};

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/validate`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidateRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub weights: String,
    #[serde(default)]
    pub impacts: String,
}

/// One alternative in a `POST /api/score` body.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreRowRequest {
    pub id: String,
    pub values: Vec<f64>,
}

/// Body of `POST /api/score`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreRequest {
    /// Header of the identifier column; defaults to `Alternative`.
    #[serde(default)]
    pub identifier_header: Option<String>,
    /// Criterion names; generated as `C1..Cn` when empty.
    #[serde(default)]
    pub criteria: Vec<String>,
    pub rows: Vec<ScoreRowRequest>,
    pub weights: Vec<f64>,
    pub impacts: Vec<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub errors: BTreeMap<String, String>,
}

/// Compact ranking entry, score rounded to 4 decimals.
#[derive(Debug, Clone, Serialize)]
pub struct RankedResult {
    pub name: String,
    pub score: f64,
    pub rank: usize,
}

/// Response of `POST /api/analyze`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub message: String,
    pub results: Vec<RankedResult>,
    /// Full result rows keyed by column, score rounded to 6 decimals.
    pub full_data: Vec<Map<String, Value>>,
    pub columns: Vec<String>,
    pub download_filename: String,
    pub email_sent: bool,
}

impl From<AnalysisOutcome> for AnalyzeResponse {
    fn from(outcome: AnalysisOutcome) -> Self {
        let results = outcome
            .ranking
            .rows
            .iter()
            .map(|row| RankedResult {
                name: row.identifier.clone(),
                score: round_to(row.score, 4),
                rank: row.rank,
            })
            .collect();

        Self {
            success: true,
            message: "Analysis completed successfully!".to_string(),
            results,
            full_data: full_data(&outcome.ranking),
            columns: outcome.columns,
            download_filename: outcome.download_file_name,
            email_sent: outcome.email_sent,
        }
    }
}

/// One ranked row of a `POST /api/score` response.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredRowResponse {
    pub id: String,
    pub values: Vec<f64>,
    pub score: f64,
    pub rank: usize,
}

/// Response of `POST /api/score`, rows best first.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreResponse {
    pub identifier_header: String,
    pub criteria: Vec<String>,
    pub rows: Vec<ScoredRowResponse>,
}

impl From<Ranking> for ScoreResponse {
    fn from(ranking: Ranking) -> Self {
        Self {
            identifier_header: ranking.identifier_header,
            criteria: ranking.criteria,
            rows: ranking
                .rows
                .into_iter()
                .map(|row| ScoredRowResponse {
                    id: row.identifier,
                    values: row.values,
                    score: row.score,
                    rank: row.rank,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self {
            code: "PAYLOAD_TOO_LARGE".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// Error body for a failed validation, naming the offending field.
    pub fn validation(error: &ValidationError) -> Self {
        Self {
            code: error.code().to_string(),
            message: error.to_string(),
            details: error
                .field()
                .map(|field| serde_json::json!({ "field": field })),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

fn full_data(ranking: &Ranking) -> Vec<Map<String, Value>> {
    ranking
        .rows
        .iter()
        .map(|row| {
            let mut entry = Map::new();
            entry.insert(
                ranking.identifier_header.clone(),
                Value::String(row.identifier.clone()),
            );
            for (criterion, value) in ranking.criteria.iter().zip(&row.values) {
                entry.insert(criterion.clone(), Value::from(*value));
            }
            entry.insert(SCORE_COLUMN.to_string(), Value::from(round_to(row.score, 6)));
            entry.insert(RANK_COLUMN.to_string(), Value::from(row.rank));
            entry
        })
        .collect()
}
