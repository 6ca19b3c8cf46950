//! Email adapters - Result delivery by email.

mod address;
mod resend_notifier;
mod summary;

pub use address::is_valid_email;
pub use resend_notifier::{NoopNotifier, ResendConfig, ResendNotifier, DEFAULT_RESEND_BASE_URL};
pub use summary::{escape_html, render_summary, RESULT_SUBJECT, SUMMARY_ROWS};
