//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ingest` - CSV and JSON table readers
//! - `export` - CSV result writer and terminal table rendering
//! - `storage` - Local result file store
//! - `email` - Result delivery through Resend
//! - `http` - REST API

pub mod email;
pub mod export;
pub mod http;
pub mod ingest;
pub mod storage;

pub use email::{NoopNotifier, ResendConfig, ResendNotifier};
pub use export::{render_table, CsvResultWriter};
pub use ingest::{reader_for, CsvTableReader, JsonTableReader};
pub use storage::LocalResultStore;
