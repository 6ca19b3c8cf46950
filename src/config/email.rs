//! Result email settings.

use serde::Deserialize;

use super::error::ValidationError;
use crate::adapters::email::DEFAULT_RESEND_BASE_URL;

/// Keys copied from sample configuration rather than issued by Resend.
const PLACEHOLDER_KEYS: [&str; 3] = ["re_xxx", "re_your_api_key", "re_123456789"];

/// Resend settings. Delivery is off unless `resend_api_key` holds a
/// non-blank key.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    #[serde(default)]
    pub resend_api_key: Option<String>,

    #[serde(default = "default_from_email")]
    pub from_email: String,

    #[serde(default = "default_from_name")]
    pub from_name: String,

    /// Overridable for tests and regional endpoints.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl EmailConfig {
    /// `Name <address>` as sent in the `from` field.
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    /// Trimmed key, `None` when unset or blank.
    pub fn api_key(&self) -> Option<&str> {
        self.resend_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key().is_some()
    }

    /// A key, when present, must look like a real Resend key.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(key) = self.api_key() {
            if !key.starts_with("re_") || key.len() <= 3 || PLACEHOLDER_KEYS.contains(&key) {
                return Err(ValidationError::InvalidResendKey);
            }
        }
        if !self.from_email.contains('@') {
            return Err(ValidationError::InvalidFromEmail);
        }
        Ok(())
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            resend_api_key: None,
            from_email: default_from_email(),
            from_name: default_from_name(),
            api_base_url: default_api_base_url(),
        }
    }
}

fn default_from_email() -> String {
    "noreply@topsis-ranker.local".to_string()
}

fn default_from_name() -> String {
    "TOPSIS Ranker".to_string()
}

fn default_api_base_url() -> String {
    DEFAULT_RESEND_BASE_URL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_disable_delivery() {
        let config = EmailConfig::default();
        assert_eq!(config.from_name, "TOPSIS Ranker");
        assert_eq!(config.api_base_url, "https://api.resend.com");
        assert!(!config.is_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn from_header_combines_name_and_address() {
        let config = EmailConfig {
            from_email: "results@topsis.example".to_string(),
            from_name: "Ranking Desk".to_string(),
            ..Default::default()
        };
        assert_eq!(config.from_header(), "Ranking Desk <results@topsis.example>");
    }

    #[test]
    fn blank_key_counts_as_unset() {
        let config = EmailConfig {
            resend_api_key: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(!config.is_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn key_without_resend_prefix_is_rejected() {
        let config = EmailConfig {
            resend_api_key: Some("sk_xxx".to_string()),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidResendKey));
    }

    #[test]
    fn sample_placeholder_key_is_rejected() {
        let config = EmailConfig {
            resend_api_key: Some("re_your_api_key".to_string()),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidResendKey));
    }

    #[test]
    fn sender_without_at_sign_is_rejected() {
        let config = EmailConfig {
            resend_api_key: Some("re_abcd1234".to_string()),
            from_email: "invalid-email".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidFromEmail));
    }

    #[test]
    fn real_looking_key_enables_delivery() {
        let config = EmailConfig {
            resend_api_key: Some("re_abcd1234".to_string()),
            ..Default::default()
        };
        assert!(config.is_enabled());
        assert!(config.validate().is_ok());
    }
}
