//! AnalyzeHandler - Scores an uploaded table, stores the result file and
//! emails it to the requester.

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;

use crate::adapters::email::{is_valid_email, render_summary, RESULT_SUBJECT};
use crate::adapters::ingest::reader_for;
use crate::domain::foundation::{AnalysisId, ValidationError};
use crate::domain::topsis::{parse_impacts, parse_weights, Ranking, TopsisEngine, Validator};
use crate::ports::{
    Attachment, ExportError, IngestError, Notification, ResultNotifier, ResultStore, ResultWriter,
    StorageError, TableFormat, RANK_COLUMN, SCORE_COLUMN,
};

/// Upload restrictions applied before a file is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    /// Maximum accepted file size in bytes.
    pub max_file_size: usize,
    /// Lowercase extensions, without the dot.
    pub allowed_extensions: Vec<String>,
}

impl UploadPolicy {
    pub fn allows_extension(&self, file_name: &str) -> bool {
        file_name
            .rsplit_once('.')
            .map(|(_, ext)| {
                let ext = ext.to_ascii_lowercase();
                self.allowed_extensions.iter().any(|allowed| *allowed == ext)
            })
            .unwrap_or(false)
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_file_size: 10 * 1024 * 1024,
            allowed_extensions: vec!["csv".to_string(), "json".to_string()],
        }
    }
}

/// Command to analyze one uploaded file.
#[derive(Debug, Clone)]
pub struct AnalyzeCommand {
    pub file_name: String,
    pub content: Vec<u8>,
    /// Comma-separated weights, e.g. `1,1,2`.
    pub weights: String,
    /// Comma-separated impacts, e.g. `+,+,-`.
    pub impacts: String,
    /// Address the result is emailed to.
    pub recipient: String,
}

/// Result of a successful analysis.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub analysis_id: AnalysisId,
    pub ranking: Ranking,
    /// Header of the result table, including score and rank columns.
    pub columns: Vec<String>,
    /// Name under which the result file can be downloaded.
    pub download_file_name: String,
    pub email_sent: bool,
}

/// Error type for analysis.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("Invalid email format")]
    InvalidRecipient,

    #[error("No file selected")]
    MissingFile,

    #[error("File is too large: {size} bytes exceeds the limit of {max} bytes")]
    FileTooLarge { size: usize, max: usize },

    #[error("File type not supported: {0}")]
    UnsupportedFile(String),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl AnalyzeError {
    /// Whether the error was caused by the submitted input.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, AnalyzeError::Export(_) | AnalyzeError::Storage(_))
    }
}

/// Handler for analyzing uploaded files.
pub struct AnalyzeHandler {
    store: Arc<dyn ResultStore>,
    writer: Arc<dyn ResultWriter>,
    notifier: Arc<dyn ResultNotifier>,
    policy: UploadPolicy,
}

impl AnalyzeHandler {
    pub fn new(
        store: Arc<dyn ResultStore>,
        writer: Arc<dyn ResultWriter>,
        notifier: Arc<dyn ResultNotifier>,
        policy: UploadPolicy,
    ) -> Self {
        Self {
            store,
            writer,
            notifier,
            policy,
        }
    }

    pub async fn handle(&self, cmd: AnalyzeCommand) -> Result<AnalysisOutcome, AnalyzeError> {
        // 1. Check form fields
        if !is_valid_email(cmd.recipient.trim()) {
            return Err(AnalyzeError::InvalidRecipient);
        }
        let weights = parse_weights(&cmd.weights)?;
        let impacts = parse_impacts(&cmd.impacts)?;

        // 2. Check the upload itself
        let format = self.check_upload(&cmd)?;

        // 3. Ingest, validate and score
        let table = reader_for(format).read(&cmd.content)?;
        let input = Validator::validate(&table, &weights, &impacts)?;
        let ranking = TopsisEngine::score(&input.matrix, &input.weights, &input.impacts)?;

        let analysis_id = AnalysisId::new();
        tracing::info!(
            analysis_id = %analysis_id,
            alternatives = ranking.len(),
            criteria = ranking.criteria.len(),
            "Analysis scored"
        );

        // 4. Render and store the result file
        let content = self.writer.write(&ranking)?;
        let download_file_name = format!(
            "topsis_result_{}_{}.{}",
            Utc::now().format("%Y%m%d_%H%M%S"),
            analysis_id.short(),
            self.writer.file_extension()
        );
        self.store.save(&download_file_name, &content).await?;

        // 5. Deliver by email; failure here never fails the analysis
        let notification = Notification {
            recipient: cmd.recipient.trim().to_string(),
            subject: RESULT_SUBJECT.to_string(),
            html_body: render_summary(&ranking, &input.weights, &input.impacts),
            attachment: Some(Attachment {
                file_name: download_file_name.clone(),
                content,
            }),
        };
        let email_sent = self.deliver(&analysis_id, &notification).await;

        Ok(AnalysisOutcome {
            analysis_id,
            columns: ranking.columns(SCORE_COLUMN, RANK_COLUMN),
            ranking,
            download_file_name,
            email_sent,
        })
    }

    fn check_upload(&self, cmd: &AnalyzeCommand) -> Result<TableFormat, AnalyzeError> {
        if cmd.file_name.trim().is_empty() {
            return Err(AnalyzeError::MissingFile);
        }
        if !self.policy.allows_extension(&cmd.file_name) {
            return Err(AnalyzeError::UnsupportedFile(cmd.file_name.clone()));
        }
        if cmd.content.len() > self.policy.max_file_size {
            return Err(AnalyzeError::FileTooLarge {
                size: cmd.content.len(),
                max: self.policy.max_file_size,
            });
        }
        Ok(TableFormat::from_file_name(&cmd.file_name)?)
    }

    async fn deliver(&self, analysis_id: &AnalysisId, notification: &Notification) -> bool {
        if !self.notifier.is_configured() {
            tracing::debug!(analysis_id = %analysis_id, "Email delivery disabled");
            return false;
        }
        match self.notifier.notify(notification).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(analysis_id = %analysis_id, error = %e, "Result email not sent");
                false
            }
        }
    }
}
