//! Result Writer Port - Renders a ranking into a deliverable document.

use thiserror::Error;

use crate::domain::topsis::Ranking;

/// Header of the appended score column.
pub const SCORE_COLUMN: &str = "Topsis Score";

/// Header of the appended rank column.
pub const RANK_COLUMN: &str = "Rank";

/// Errors raised while rendering results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("Failed to write results: {0}")]
    Write(String),
}

/// Port for rendering a ranking.
///
/// Implementations keep the identifier and original criterion values of
/// every row and append the score and rank columns.
pub trait ResultWriter: Send + Sync {
    /// File extension of the rendered document, without the dot.
    fn file_extension(&self) -> &'static str;

    /// Renders the ranking, best first.
    fn write(&self, ranking: &Ranking) -> Result<Vec<u8>, ExportError>;
}
