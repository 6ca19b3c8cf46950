//! CSV result writer.

use crate::domain::topsis::Ranking;
use crate::ports::{ExportError, ResultWriter, RANK_COLUMN, SCORE_COLUMN};

/// Writes the ranking as CSV: the input columns followed by
/// `Topsis Score` and `Rank`, best row first.
#[derive(Debug, Clone, Default)]
pub struct CsvResultWriter;

impl CsvResultWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ResultWriter for CsvResultWriter {
    fn file_extension(&self) -> &'static str {
        "csv"
    }

    fn write(&self, ranking: &Ranking) -> Result<Vec<u8>, ExportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer
            .write_record(ranking.columns(SCORE_COLUMN, RANK_COLUMN))
            .map_err(|e| ExportError::Write(e.to_string()))?;

        for row in &ranking.rows {
            let record = std::iter::once(row.identifier.clone())
                .chain(row.values.iter().map(|v| v.to_string()))
                .chain([row.score.to_string(), row.rank.to_string()]);
            writer
                .write_record(record)
                .map_err(|e| ExportError::Write(e.to_string()))?;
        }

        writer
            .into_inner()
            .map_err(|e| ExportError::Write(e.to_string()))
    }
}
