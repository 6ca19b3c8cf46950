//! End-to-end ranking through the file handler and the HTTP router.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use topsis_ranker::adapters::export::{render_table, CsvResultWriter};
use topsis_ranker::adapters::http::{build_router, build_state};
use topsis_ranker::application::{RankFileCommand, RankFileError, RankFileHandler};
use topsis_ranker::config::AppConfig;
use topsis_ranker::domain::foundation::{ErrorCode, ValidationError};

const FUNDS_CSV: &str = "Fund Name,P1,P2,P3,P4,P5\n\
                         M1,0.67,0.45,6.5,42.6,12.56\n\
                         M2,0.6,0.36,3.6,53.3,14.47\n\
                         M3,0.82,0.67,3.8,63.1,17.1\n\
                         M4,0.6,0.36,3.5,69.2,18.42\n\
                         M5,0.76,0.58,4.8,43,12.29\n";

const FUNDS_JSON: &str = r#"[
    {"Fund Name": "M1", "P1": 0.67, "P2": 0.45, "P3": 6.5, "P4": 42.6, "P5": 12.56},
    {"Fund Name": "M2", "P1": 0.6, "P2": 0.36, "P3": 3.6, "P4": 53.3, "P5": 14.47},
    {"Fund Name": "M3", "P1": 0.82, "P2": 0.67, "P3": 3.8, "P4": 63.1, "P5": 17.1},
    {"Fund Name": "M4", "P1": 0.6, "P2": 0.36, "P3": 3.5, "P4": 69.2, "P5": 18.42},
    {"Fund Name": "M5", "P1": 0.76, "P2": 0.58, "P3": 4.8, "P4": 43, "P5": 12.29}
]"#;

fn rank_command(dir: &TempDir, file: &str, weights: &str, impacts: &str) -> RankFileCommand {
    RankFileCommand {
        input: dir.path().join(file),
        weights: weights.to_string(),
        impacts: impacts.to_string(),
        output: dir.path().join("out.csv"),
    }
}

fn handler() -> RankFileHandler {
    RankFileHandler::new(Arc::new(CsvResultWriter::new()))
}

#[tokio::test]
async fn csv_and_json_inputs_rank_identically() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("funds.csv"), FUNDS_CSV).unwrap();
    std::fs::write(dir.path().join("funds.json"), FUNDS_JSON).unwrap();

    let from_csv = handler()
        .handle(rank_command(&dir, "funds.csv", "1,1,1,2,1", "+,+,-,+,+"))
        .await
        .unwrap();
    let from_json = handler()
        .handle(rank_command(&dir, "funds.json", "1,1,1,2,1", "+,+,-,+,+"))
        .await
        .unwrap();

    assert_eq!(from_csv.rows, from_json.rows);
    assert_eq!(from_csv.identifier_header, "Fund Name");
}

#[tokio::test]
async fn written_csv_matches_ranking() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("funds.csv"), FUNDS_CSV).unwrap();

    let ranking = handler()
        .handle(rank_command(&dir, "funds.csv", "1,1,1,2,1", "++-++"))
        .await
        .unwrap();

    let written = std::fs::read_to_string(dir.path().join("out.csv")).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), ranking.len() + 1);
    for (line, row) in lines[1..].iter().zip(&ranking.rows) {
        assert!(line.starts_with(&format!("{},", row.identifier)));
        assert!(line.ends_with(&format!(",{}", row.rank)));
    }

    let table = render_table(&ranking);
    assert!(table.lines().next().unwrap().contains("Topsis Score"));
    assert_eq!(table.lines().count(), ranking.len() + 2);
}

#[tokio::test]
async fn short_weight_list_is_a_cardinality_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("small.csv"), "Name,C1,C2,C3\nA,1,2,3\nB,3,2,1\n").unwrap();

    let err = handler()
        .handle(rank_command(&dir, "small.csv", "1,1", "+,+,+"))
        .await
        .unwrap_err();

    match err {
        RankFileError::Validation(e) => {
            assert_eq!(e, ValidationError::cardinality("weights", 3, 2));
            assert_eq!(e.code(), ErrorCode::CardinalityError);
            assert_eq!(
                e.to_string(),
                "Number of weights must match number of criteria: expected 3, got 2"
            );
        }
        other => panic!("expected validation error, got {}", other),
    }
}

#[tokio::test]
async fn numeric_identifier_column_is_rejected() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("ids.csv"), "Id,C1,C2\n1,1,2\n2,3,4\n").unwrap();

    let err = handler()
        .handle(rank_command(&dir, "ids.csv", "1,1", "+,+"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        RankFileError::Validation(ValidationError::Schema { .. })
    ));
}

#[tokio::test]
async fn uploaded_result_can_be_downloaded() {
    let dir = TempDir::new().unwrap();
    let mut config = AppConfig::default();
    config.upload.dir = dir.path().to_path_buf();
    let app = build_router(build_state(&config), &config);

    let boundary = "pipeline-boundary";
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"funds.csv\"\r\n\r\n{csv}\r\n\
         --{b}\r\nContent-Disposition: form-data; name=\"email\"\r\n\r\nuser@example.com\r\n\
         --{b}\r\nContent-Disposition: form-data; name=\"weights\"\r\n\r\n1,1,1,2,1\r\n\
         --{b}\r\nContent-Disposition: form-data; name=\"impacts\"\r\n\r\n+,+,-,+,+\r\n\
         --{b}--\r\n",
        b = boundary,
        csv = FUNDS_CSV
    );

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/analyze")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={}", boundary),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    let file_name = json["download_filename"].as_str().unwrap().to_string();
    assert_eq!(json["results"].as_array().unwrap().len(), 5);

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/download/{}", file_name))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let csv = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(csv.starts_with("Fund Name,P1,P2,P3,P4,P5,Topsis Score,Rank"));
}
