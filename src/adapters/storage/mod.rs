//! Storage Adapters
//!
//! Implementations of the ResultStore port.
//!
//! - **LocalResultStore** - Result files in a local directory

mod local_result_store;

pub use local_result_store::LocalResultStore;
