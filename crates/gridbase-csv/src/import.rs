//! Table import from CSV and JSON

use std::io::Read;

use serde_json::Value as JsonValue;

use crate::error::CsvResult;
use gridbase_core::{Row, Table, Value};

/// Result of an import: parsed rows plus non-fatal problems
///
/// Import problems accumulate instead of aborting the whole file; an
/// outcome can carry both rows and errors.
#[derive(Debug, Default)]
pub struct ImportOutcome {
    /// Parsed rows ready to append; ids are placeholders replaced on append
    pub rows: Vec<Row>,
    /// Human-readable problems encountered
    pub errors: Vec<String>,
}

impl ImportOutcome {
    fn error(message: impl Into<String>) -> Self {
        Self {
            rows: Vec::new(),
            errors: vec![message.into()],
        }
    }
}

/// Raw CSV content split into headers and records
#[derive(Debug, Default)]
pub struct ParsedCsv {
    /// First record of the file
    pub headers: Vec<String>,
    /// Remaining records
    pub records: Vec<Vec<String>>,
}

/// Table importer
pub struct TableImporter;

impl TableImporter {
    /// Parse CSV into raw headers and records without mapping to a table
    pub fn parse_csv<R: Read>(reader: R) -> CsvResult<ParsedCsv> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let headers = match csv_reader.headers() {
            Ok(h) => h.iter().map(|s| s.trim().to_string()).collect(),
            Err(_) => Vec::new(),
        };

        let mut records = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            records.push(record.iter().map(|s| s.trim().to_string()).collect());
        }

        Ok(ParsedCsv { headers, records })
    }

    /// Import CSV content as rows shaped for a table
    ///
    /// Headers match column names case-insensitively; unrecognized CSV
    /// columns are dropped, and table columns absent from the CSV are
    /// filled with the empty string. A file whose headers match nothing
    /// yields an error instead of a pile of blank rows.
    pub fn import_csv<R: Read>(table: &Table, reader: R) -> CsvResult<ImportOutcome> {
        let parsed = Self::parse_csv(reader)?;

        if parsed.headers.is_empty() {
            return Ok(ImportOutcome::error("CSV file is empty"));
        }

        // header index -> column id
        let column_map: Vec<(usize, String)> = parsed
            .headers
            .iter()
            .enumerate()
            .filter_map(|(index, header)| {
                table
                    .column_by_name(header)
                    .map(|col| (index, col.id.clone()))
            })
            .collect();

        if column_map.is_empty() {
            return Ok(ImportOutcome::error("No matching columns found in CSV"));
        }

        let mut outcome = ImportOutcome::default();
        for (row_index, record) in parsed.records.iter().enumerate() {
            let mut row = Row::new(format!("import-{}", row_index));
            for (field_index, column_id) in &column_map {
                let value = record.get(*field_index).cloned().unwrap_or_default();
                row.set(column_id.clone(), Value::Text(value));
            }
            fill_missing(&mut row, table);
            outcome.rows.push(row);
        }

        Ok(outcome)
    }

    /// Import a JSON array of objects as rows shaped for a table
    ///
    /// Object keys match column names case-insensitively, like CSV headers.
    pub fn import_json<R: Read>(table: &Table, reader: R) -> CsvResult<ImportOutcome> {
        let data: JsonValue = serde_json::from_reader(reader)?;

        let array = match data.as_array() {
            Some(a) => a,
            None => return Ok(ImportOutcome::error("JSON must be an array of objects")),
        };

        let mut outcome = ImportOutcome::default();
        for (index, entry) in array.iter().enumerate() {
            let object = match entry.as_object() {
                Some(o) => o,
                None => {
                    outcome
                        .errors
                        .push(format!("Entry {} is not an object, skipped", index + 1));
                    continue;
                }
            };

            let mut row = Row::new(format!("import-{}", index));
            for (key, value) in object {
                if let Some(col) = table.column_by_name(key) {
                    row.set(col.id.clone(), json_to_value(value));
                }
            }
            fill_missing(&mut row, table);
            outcome.rows.push(row);
        }

        Ok(outcome)
    }
}

fn fill_missing(row: &mut Row, table: &Table) {
    for col in &table.columns {
        if !row.cells.contains_key(&col.id) {
            row.set(col.id.clone(), Value::text(""));
        }
    }
}

fn json_to_value(value: &JsonValue) -> Value {
    match value {
        JsonValue::Null => Value::text(""),
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Number(n) => n.as_f64().map(Value::Number).unwrap_or(Value::Empty),
        JsonValue::String(s) => Value::Text(s.clone()),
        // Nested structures flatten to their JSON text
        other => Value::Text(other.to_string()),
    }
}
