//! CSV table reader.

use crate::domain::topsis::{Cell, RawTable};
use crate::ports::{IngestError, TableFormat, TableReader};

/// Reads comma-separated input whose first record is the header.
///
/// Rows of differing length are passed through unchanged so the Validator
/// can report them with row numbers.
#[derive(Debug, Clone, Default)]
pub struct CsvTableReader;

impl CsvTableReader {
    pub fn new() -> Self {
        Self
    }
}

impl TableReader for CsvTableReader {
    fn format(&self) -> TableFormat {
        TableFormat::Csv
    }

    fn read(&self, bytes: &[u8]) -> Result<RawTable, IngestError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(bytes);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| IngestError::malformed(TableFormat::Csv, e.to_string()))?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').to_string())
            .collect();

        if headers.iter().all(String::is_empty) {
            return Err(IngestError::Empty);
        }

        let rows = reader
            .records()
            .map(|record| {
                record
                    .map(|r| r.iter().map(Cell::from_text).collect::<Vec<_>>())
                    .map_err(|e| IngestError::malformed(TableFormat::Csv, e.to_string()))
            })
            .filter(|row| !matches!(row, Ok(cells) if cells.iter().all(Cell::is_empty)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RawTable::new(headers, rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAPTOPS: &str = "Model,RAM,Cores,Storage,Price\n\
                           M1,256,8,30000,5000\n\
                           M2,512,12,40000,6000\n\
                           M3,128,4,15000,3000\n";

    #[test]
    fn reads_header_and_rows() {
        let table = CsvTableReader::new().read(LAPTOPS.as_bytes()).unwrap();
        assert_eq!(table.headers, vec!["Model", "RAM", "Cores", "Storage", "Price"]);
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.rows[0][0], Cell::Text("M1".to_string()));
        assert_eq!(table.rows[2][4], Cell::Number(3000.0));
    }

    #[test]
    fn trims_cells_and_marks_blanks_empty() {
        let table = CsvTableReader::new()
            .read(b"Name, C1 , C2\n A , 1 ,\n")
            .unwrap();
        assert_eq!(table.headers, vec!["Name", "C1", "C2"]);
        assert_eq!(table.rows[0][0], Cell::Text("A".to_string()));
        assert_eq!(table.rows[0][1], Cell::Number(1.0));
        assert_eq!(table.rows[0][2], Cell::Empty);
    }

    #[test]
    fn strips_byte_order_mark() {
        let table = CsvTableReader::new()
            .read("\u{feff}Name,C1\nA,1\n".as_bytes())
            .unwrap();
        assert_eq!(table.headers[0], "Name");
    }

    #[test]
    fn keeps_ragged_rows_for_validation() {
        let table = CsvTableReader::new().read(b"Name,C1,C2\nA,1\n").unwrap();
        assert_eq!(table.rows[0].len(), 2);
    }

    #[test]
    fn skips_blank_lines() {
        let table = CsvTableReader::new().read(b"Name,C1\nA,1\n,\nB,2\n").unwrap();
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(CsvTableReader::new().read(b""), Err(IngestError::Empty));
    }

    #[test]
    fn header_only_input_has_no_rows() {
        let table = CsvTableReader::new().read(b"Name,C1\n").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn invalid_utf8_is_malformed() {
        let result = CsvTableReader::new().read(&[b'N', b',', 0xff, 0xfe, b'\n']);
        assert!(matches!(result, Err(IngestError::Malformed { .. })));
    }
}
