//! Ingestion adapters - Tabular readers behind the `TableReader` port.

mod csv_reader;
mod json_reader;

pub use csv_reader::CsvTableReader;
pub use json_reader::JsonTableReader;

use crate::ports::{TableFormat, TableReader};

/// Returns the reader for a format.
pub fn reader_for(format: TableFormat) -> Box<dyn TableReader> {
    match format {
        TableFormat::Csv => Box::new(CsvTableReader::new()),
        TableFormat::Json => Box::new(JsonTableReader::new()),
    }
}
