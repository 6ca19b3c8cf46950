//! Result Store Port - Persists rendered result files for later download.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during result storage operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// File was not found.
    #[error("File not found: {0}")]
    NotFound(String),

    /// File name is not a plain name inside the store.
    #[error("Invalid file name: {0}")]
    InvalidName(String),

    /// IO error during file operation.
    #[error("IO error: {0}")]
    Io(String),
}

/// Port for storing result files by name.
///
/// # Contract
///
/// Implementations must:
/// - Accept only plain file names (no separators, no `..`)
/// - Write atomically (no partial content on failure)
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Saves content under `file_name`, replacing any previous file.
    ///
    /// Returns the path where the file was written.
    async fn save(&self, file_name: &str, content: &[u8]) -> Result<PathBuf, StorageError>;

    /// Reads a stored file.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the file doesn't exist.
    async fn read(&self, file_name: &str) -> Result<Vec<u8>, StorageError>;

    /// Checks whether a file exists.
    async fn exists(&self, file_name: &str) -> Result<bool, StorageError>;
}
