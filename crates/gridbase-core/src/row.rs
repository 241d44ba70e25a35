//! Row type

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::value::Value;

const EMPTY: Value = Value::Empty;

/// A single record: a flat map from column id to value
///
/// Rows are created with an empty-string cell for every column that exists
/// at creation time. A column added later leaves older rows without that
/// key; reads treat the missing cell as [`Value::Empty`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Unique id within the table
    pub id: String,
    /// Cell values, keyed by column id
    #[serde(default)]
    pub cells: AHashMap<String, Value>,
    /// User-picked row color; overrides every color rule when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_color: Option<String>,
}

impl Row {
    /// Create an empty row
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            cells: AHashMap::new(),
            manual_color: None,
        }
    }

    /// Get a cell value; missing cells read as [`Value::Empty`]
    pub fn get(&self, column_id: &str) -> &Value {
        self.cells.get(column_id).unwrap_or(&EMPTY)
    }

    /// Set a cell value
    pub fn set<S: Into<String>, V: Into<Value>>(&mut self, column_id: S, value: V) {
        self.cells.insert(column_id.into(), value.into());
    }

    /// Remove a cell (used when its column is deleted)
    pub fn remove(&mut self, column_id: &str) -> Option<Value> {
        self.cells.remove(column_id)
    }

    /// Builder-style cell assignment, for tests and seed data
    pub fn with<S: Into<String>, V: Into<Value>>(mut self, column_id: S, value: V) -> Self {
        self.set(column_id, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_cell_reads_empty() {
        let row = Row::new("r1").with("c1", "Open");
        assert_eq!(row.get("c1"), &Value::text("Open"));
        assert_eq!(row.get("c2"), &Value::Empty);
    }

    #[test]
    fn test_remove_cell() {
        let mut row = Row::new("r1").with("c1", "Open");
        assert_eq!(row.remove("c1"), Some(Value::text("Open")));
        assert_eq!(row.get("c1"), &Value::Empty);
        assert_eq!(row.remove("c1"), None);
    }
}
