//! Application handlers.
//!
//! Handlers that orchestrate ingestion, scoring, storage and delivery.

mod analyze;
mod rank_file;
mod validate_request;

pub use analyze::{AnalysisOutcome, AnalyzeCommand, AnalyzeError, AnalyzeHandler, UploadPolicy};
pub use rank_file::{RankFileCommand, RankFileError, RankFileHandler};
pub use validate_request::{
    ValidateRequestCommand, ValidateRequestHandler, ValidateRequestResult,
};
