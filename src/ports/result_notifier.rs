//! Result Notifier Port - Delivers finished analyses to a recipient.
//!
//! Purely downstream of the result sink: the scoring core never knows
//! whether delivery succeeded.

use async_trait::async_trait;
use thiserror::Error;

/// A file attached to a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub content: Vec<u8>,
}

/// A message to deliver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub recipient: String,
    pub subject: String,
    pub html_body: String,
    pub attachment: Option<Attachment>,
}

/// Errors raised while delivering a notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotifyError {
    /// No delivery channel is configured.
    #[error("Email not configured")]
    NotConfigured,

    /// The provider could not be reached.
    #[error("Email transport error: {0}")]
    Transport(String),

    /// The provider refused the message.
    #[error("Email rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
}

/// Port for delivering notifications.
#[async_trait]
pub trait ResultNotifier: Send + Sync {
    /// Whether this notifier can deliver at all.
    fn is_configured(&self) -> bool;

    /// Delivers one notification.
    async fn notify(&self, notification: &Notification) -> Result<(), NotifyError>;
}
