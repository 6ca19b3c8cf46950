//! Resend email notifier.
//!
//! Sends HTML messages through the Resend HTTP API:
//!
//! ```ignore
//! let notifier = ResendNotifier::new(ResendConfig::new(api_key, "Results <noreply@example.com>"));
//! notifier.notify(&notification).await?;
//! ```

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use std::time::Duration;

use crate::ports::{Notification, NotifyError, ResultNotifier};

/// Default Resend API endpoint.
pub const DEFAULT_RESEND_BASE_URL: &str = "https://api.resend.com";

/// Configuration for the Resend notifier.
#[derive(Debug, Clone)]
pub struct ResendConfig {
    api_key: Secret<String>,
    /// Value of the `from` field, e.g. `Name <addr@example.com>`.
    pub from: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl ResendConfig {
    pub fn new(api_key: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            from: from.into(),
            base_url: DEFAULT_RESEND_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Resend API request body.
#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: &'a str,
    html: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attachments: Vec<EmailAttachment<'a>>,
}

#[derive(Debug, Serialize)]
struct EmailAttachment<'a> {
    filename: &'a str,
    content: String,
}

/// Notifier backed by the Resend API.
pub struct ResendNotifier {
    config: ResendConfig,
    client: Client,
}

impl ResendNotifier {
    pub fn new(config: ResendConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { config, client }
    }

    fn emails_url(&self) -> String {
        format!("{}/emails", self.config.base_url.trim_end_matches('/'))
    }

    fn to_request<'a>(&'a self, notification: &'a Notification) -> SendEmailRequest<'a> {
        SendEmailRequest {
            from: &self.config.from,
            to: vec![notification.recipient.as_str()],
            subject: &notification.subject,
            html: &notification.html_body,
            attachments: notification
                .attachment
                .iter()
                .map(|a| EmailAttachment {
                    filename: &a.file_name,
                    content: STANDARD.encode(&a.content),
                })
                .collect(),
        }
    }
}

#[async_trait]
impl ResultNotifier for ResendNotifier {
    fn is_configured(&self) -> bool {
        true
    }

    async fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(self.emails_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .json(&self.to_request(notification))
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Email transport failed");
                NotifyError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Email rejected by provider");
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        tracing::info!(recipient = %notification.recipient, "Result email sent");
        Ok(())
    }
}

/// Notifier used when no provider is configured.
#[derive(Debug, Clone, Default)]
pub struct NoopNotifier;

#[async_trait]
impl ResultNotifier for NoopNotifier {
    fn is_configured(&self) -> bool {
        false
    }

    async fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        tracing::debug!(recipient = %notification.recipient, "Email not configured, skipping");
        Err(NotifyError::NotConfigured)
    }
}
