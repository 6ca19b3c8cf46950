//! Table Reader Port - Turns uploaded bytes into a raw decision table.
//!
//! Adapters (CSV, JSON) hand the domain a [`RawTable`] already split into
//! headers and cells. Whether the first column really holds identifiers and
//! the rest numbers is decided later by the Validator.

use std::fmt;
use thiserror::Error;

use crate::domain::topsis::RawTable;

/// Supported tabular input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableFormat {
    Csv,
    Json,
}

impl TableFormat {
    /// Detects the format from a file name extension (case-insensitive).
    pub fn from_file_name(file_name: &str) -> Result<Self, IngestError> {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .ok_or_else(|| IngestError::UnsupportedFormat(file_name.to_string()))?;
        Self::from_extension(&extension)
    }

    /// Parses a bare extension such as `csv`.
    pub fn from_extension(extension: &str) -> Result<Self, IngestError> {
        match extension.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "csv" => Ok(TableFormat::Csv),
            "json" => Ok(TableFormat::Json),
            other => Err(IngestError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            TableFormat::Csv => "csv",
            TableFormat::Json => "json",
        }
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Errors raised while reading tabular input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    /// File type is not one of the supported formats.
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Input contains no header or no data.
    #[error("Input file is empty")]
    Empty,

    /// Input could not be parsed.
    #[error("Error reading {format} data: {message}")]
    Malformed { format: String, message: String },
}

impl IngestError {
    pub fn malformed(format: TableFormat, message: impl Into<String>) -> Self {
        IngestError::Malformed {
            format: format.to_string(),
            message: message.into(),
        }
    }
}

/// Port for reading a decision table from raw bytes.
pub trait TableReader: Send + Sync {
    /// The format this reader understands.
    fn format(&self) -> TableFormat;

    /// Parses bytes into headers and cells.
    ///
    /// # Errors
    ///
    /// Returns `IngestError::Empty` when there is no header or data and
    /// `IngestError::Malformed` when the bytes are not valid for the format.
    fn read(&self, bytes: &[u8]) -> Result<RawTable, IngestError>;
}
