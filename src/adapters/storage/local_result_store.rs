//! Local filesystem store for result files.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{ResultStore, StorageError};

/// Stores result files flat inside one directory.
///
/// Writes go to `{name}.tmp` first and are renamed into place, so a reader
/// never observes a partially written file.
#[derive(Debug, Clone)]
pub struct LocalResultStore {
    base_dir: PathBuf,
}

impl LocalResultStore {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Resolves a plain file name inside the base directory.
    fn resolve(&self, file_name: &str) -> Result<PathBuf, StorageError> {
        let invalid = file_name.is_empty()
            || file_name.contains('/')
            || file_name.contains('\\')
            || file_name.contains("..")
            || file_name.starts_with('.');
        if invalid {
            return Err(StorageError::InvalidName(file_name.to_string()));
        }
        Ok(self.base_dir.join(file_name))
    }
}

#[async_trait]
impl ResultStore for LocalResultStore {
    async fn save(&self, file_name: &str, content: &[u8]) -> Result<PathBuf, StorageError> {
        let file_path = self.resolve(file_name)?;

        fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|e| StorageError::Io(format!("Failed to create directory: {}", e)))?;

        let temp_path = self.base_dir.join(format!("{}.tmp", file_name));
        fs::write(&temp_path, content)
            .await
            .map_err(|e| StorageError::Io(format!("Failed to write temporary file: {}", e)))?;

        if let Err(e) = fs::rename(&temp_path, &file_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StorageError::Io(format!("Failed to rename file: {}", e)));
        }

        tracing::debug!(path = %file_path.display(), bytes = content.len(), "Result file saved");
        Ok(file_path)
    }

    async fn read(&self, file_name: &str) -> Result<Vec<u8>, StorageError> {
        let file_path = self.resolve(file_name)?;

        match fs::read(&file_path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(file_name.to_string()))
            }
            Err(e) => Err(StorageError::Io(format!("Failed to read file: {}", e))),
        }
    }

    async fn exists(&self, file_name: &str) -> Result<bool, StorageError> {
        let file_path = self.resolve(file_name)?;
        fs::try_exists(&file_path)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))
    }
}
