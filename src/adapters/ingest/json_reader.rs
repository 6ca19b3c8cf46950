//! JSON table reader.

use serde_json::{Map, Value};

use crate::domain::topsis::{Cell, RawTable};
use crate::ports::{IngestError, TableFormat, TableReader};

/// Reads either an array of objects or a single object.
///
/// Column order follows the key order of the first object; keys first seen
/// in later objects are appended. Missing keys become empty cells.
#[derive(Debug, Clone, Default)]
pub struct JsonTableReader;

impl JsonTableReader {
    pub fn new() -> Self {
        Self
    }

    fn to_cell(value: &Value) -> Cell {
        match value {
            Value::Null => Cell::Empty,
            Value::Number(n) => n.as_f64().map(Cell::Number).unwrap_or(Cell::Empty),
            Value::String(s) => Cell::from_text(s),
            other => Cell::Text(other.to_string()),
        }
    }
}

impl TableReader for JsonTableReader {
    fn format(&self) -> TableFormat {
        TableFormat::Json
    }

    fn read(&self, bytes: &[u8]) -> Result<RawTable, IngestError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(IngestError::Empty);
        }

        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| IngestError::malformed(TableFormat::Json, e.to_string()))?;

        let records: Vec<Map<String, Value>> = match value {
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::Object(map) => Ok(map),
                    _ => Err(IngestError::malformed(
                        TableFormat::Json,
                        "expected an array of objects",
                    )),
                })
                .collect::<Result<_, _>>()?,
            Value::Object(map) => vec![map],
            _ => {
                return Err(IngestError::malformed(
                    TableFormat::Json,
                    "expected an object or an array of objects",
                ))
            }
        };

        let mut headers: Vec<String> = Vec::new();
        for record in &records {
            for key in record.keys() {
                if !headers.contains(key) {
                    headers.push(key.clone());
                }
            }
        }

        if headers.is_empty() {
            return Err(IngestError::Empty);
        }

        let rows = records
            .iter()
            .map(|record| {
                headers
                    .iter()
                    .map(|key| record.get(key).map(Self::to_cell).unwrap_or(Cell::Empty))
                    .collect()
            })
            .collect();

        Ok(RawTable::new(headers, rows))
    }
}
