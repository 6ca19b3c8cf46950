//! Export adapters - Rendering rankings for download and display.

mod csv_writer;
mod text_table;

pub use csv_writer::CsvResultWriter;
pub use text_table::{render_table, SCORE_PRECISION};
