//! Application layer - Handlers that coordinate domain services and ports.

pub mod handlers;

pub use handlers::{
    AnalysisOutcome, AnalyzeCommand, AnalyzeError, AnalyzeHandler, RankFileCommand, RankFileError,
    RankFileHandler, UploadPolicy, ValidateRequestCommand, ValidateRequestHandler,
    ValidateRequestResult,
};
