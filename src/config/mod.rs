//! Runtime configuration.
//!
//! Values come from the process environment (and a `.env` file when
//! present) under the `TOPSIS` prefix, with `__` between nesting levels:
//!
//! ```text
//! TOPSIS__SERVER__PORT=8080
//! TOPSIS__UPLOAD__DIR=/var/lib/topsis/results
//! TOPSIS__EMAIL__RESEND_API_KEY=re_...
//! ```
//!
//! Unset values fall back to defaults that run a local development server
//! with email delivery turned off.

mod email;
mod error;
mod server;
mod upload;

pub use email::EmailConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{CorsMode, Environment, ServerConfig};
pub use upload::UploadConfig;

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub upload: UploadConfig,

    /// Result delivery through Resend; disabled without an API key.
    #[serde(default)]
    pub email: EmailConfig,
}

impl AppConfig {
    /// Reads `.env` if present, then the `TOPSIS__*` environment.
    ///
    /// Only parsing is checked here; call [`AppConfig::validate`] before
    /// using the result.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TOPSIS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Checks each section in turn, stopping at the first problem.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.upload.validate()?;
        self.email.validate()
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
