//! Table export to CSV and JSON

use std::io::Write;

use serde_json::{Map, Value as JsonValue};

use crate::error::CsvResult;
use gridbase_core::{Table, Value};

/// Table exporter
pub struct TableExporter;

impl TableExporter {
    /// Export a table to a CSV string
    ///
    /// The header row carries the column names; cells are written as their
    /// display strings, with quoting left to the writer. Column order
    /// follows the table.
    pub fn to_csv_string(table: &Table) -> CsvResult<String> {
        let mut buf = Vec::new();
        Self::write_csv(table, &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    /// Export a table as CSV to a writer
    pub fn write_csv<W: Write>(table: &Table, writer: W) -> CsvResult<()> {
        let mut csv_writer = csv::WriterBuilder::new().from_writer(writer);

        let header: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
        csv_writer.write_record(&header)?;

        for row in &table.rows {
            let record: Vec<String> = table
                .columns
                .iter()
                .map(|col| row.get(&col.id).to_display_string())
                .collect();
            csv_writer.write_record(&record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Export a table to a pretty-printed JSON string
    ///
    /// Rows become an array of objects keyed by column name. Values keep
    /// their type where they have one; blank cells export as the empty
    /// string so every object has the full key set.
    pub fn to_json_string(table: &Table) -> CsvResult<String> {
        let data: Vec<JsonValue> = table
            .rows
            .iter()
            .map(|row| {
                let mut obj = Map::new();
                for col in &table.columns {
                    obj.insert(col.name.clone(), json_cell(row.get(&col.id)));
                }
                JsonValue::Object(obj)
            })
            .collect();
        Ok(serde_json::to_string_pretty(&data)?)
    }
}

fn json_cell(value: &Value) -> JsonValue {
    match value {
        Value::Empty => JsonValue::String(String::new()),
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Number(n) => serde_json::Number::from_f64(*n)
            .map(JsonValue::Number)
            .unwrap_or_else(|| JsonValue::String(value.to_display_string())),
        Value::Text(s) => JsonValue::String(s.clone()),
    }
}
