//! Upload configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::application::UploadPolicy;
use crate::ports::TableFormat;

/// Largest accepted `max_file_size` (100 MiB).
const MAX_FILE_SIZE_CEILING: usize = 100 * 1024 * 1024;

/// Upload and result file configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    /// Directory where result files are stored
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// Maximum upload size in bytes
    #[serde(default = "default_max_file_size")]
    pub max_file_size: usize,

    /// Accepted file extensions (comma-separated)
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: String,
}

impl UploadConfig {
    /// Get allowed extensions as lowercase values without dots
    pub fn allowed_extensions_list(&self) -> Vec<String> {
        self.allowed_extensions
            .split(',')
            .map(|ext| ext.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect()
    }

    /// Build the upload policy enforced by the analyze handler
    pub fn policy(&self) -> UploadPolicy {
        UploadPolicy {
            max_file_size: self.max_file_size,
            allowed_extensions: self.allowed_extensions_list(),
        }
    }

    /// Validate upload configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.dir.as_os_str().is_empty() {
            return Err(ValidationError::EmptyUploadDir);
        }
        if self.max_file_size == 0 || self.max_file_size > MAX_FILE_SIZE_CEILING {
            return Err(ValidationError::InvalidMaxFileSize);
        }
        let extensions = self.allowed_extensions_list();
        if extensions.is_empty() {
            return Err(ValidationError::NoAllowedExtensions);
        }
        // Every allowed extension needs a reader
        if let Some(ext) = extensions
            .iter()
            .find(|ext| TableFormat::from_extension(ext).is_err())
        {
            return Err(ValidationError::UnsupportedExtension(ext.clone()));
        }
        Ok(())
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            max_file_size: default_max_file_size(),
            allowed_extensions: default_allowed_extensions(),
        }
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from("uploads")
}

fn default_max_file_size() -> usize {
    10 * 1024 * 1024
}

fn default_allowed_extensions() -> String {
    "csv,json".to_string()
}
