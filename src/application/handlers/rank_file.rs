//! RankFileHandler - Scores a file on disk and writes the result next to it.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tokio::fs;

use crate::adapters::ingest::reader_for;
use crate::domain::foundation::ValidationError;
use crate::domain::topsis::{parse_impacts, parse_weights, Ranking, TopsisEngine};
use crate::ports::{ExportError, IngestError, ResultWriter, TableFormat};

/// Command to rank one input file.
#[derive(Debug, Clone)]
pub struct RankFileCommand {
    pub input: PathBuf,
    /// Comma-separated weights, e.g. `1,1,1,2`.
    pub weights: String,
    /// Comma-separated impacts, e.g. `+,+,-,+`.
    pub impacts: String,
    pub output: PathBuf,
}

/// Error type for file ranking.
#[derive(Debug, Error)]
pub enum RankFileError {
    #[error("File not found: {0}")]
    InputNotFound(PathBuf),

    #[error("Failed to access '{path}': {message}")]
    Io { path: PathBuf, message: String },

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Handler for the command-line ranking path.
pub struct RankFileHandler {
    writer: Arc<dyn ResultWriter>,
}

impl RankFileHandler {
    pub fn new(writer: Arc<dyn ResultWriter>) -> Self {
        Self { writer }
    }

    pub async fn handle(&self, cmd: RankFileCommand) -> Result<Ranking, RankFileError> {
        let weights = parse_weights(&cmd.weights)?;
        let impacts = parse_impacts(&cmd.impacts)?;

        let file_name = cmd
            .input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let format = TableFormat::from_file_name(&file_name)?;

        let bytes = fs::read(&cmd.input).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RankFileError::InputNotFound(cmd.input.clone())
            } else {
                RankFileError::Io {
                    path: cmd.input.clone(),
                    message: e.to_string(),
                }
            }
        })?;

        let table = reader_for(format).read(&bytes)?;
        let ranking = TopsisEngine::score_table(&table, &weights, &impacts)?;

        let content = self.writer.write(&ranking)?;
        fs::write(&cmd.output, content)
            .await
            .map_err(|e| RankFileError::Io {
                path: cmd.output.clone(),
                message: e.to_string(),
            })?;

        tracing::info!(
            input = %cmd.input.display(),
            output = %cmd.output.display(),
            alternatives = ranking.len(),
            "Ranking written"
        );
        Ok(ranking)
    }
}
