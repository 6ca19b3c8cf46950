//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `TableReader` - Tabular ingestion (CSV, JSON)
//! - `ResultWriter` - Rendering a ranking into a document
//! - `ResultStore` - Persisting rendered results for download
//! - `ResultNotifier` - Delivering results to a recipient

mod result_notifier;
mod result_store;
mod result_writer;
mod table_reader;

pub use result_notifier::{Attachment, Notification, NotifyError, ResultNotifier};
pub use result_store::{ResultStore, StorageError};
pub use result_writer::{ExportError, ResultWriter, RANK_COLUMN, SCORE_COLUMN};
pub use table_reader::{IngestError, TableFormat, TableReader};
