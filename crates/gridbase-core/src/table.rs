//! Table type

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::row::Row;

/// A dataset: an ordered column schema plus its rows
///
/// A table owns its columns and rows exclusively. `folder_id` is a weak
/// reference; a missing folder never invalidates the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Unique id
    pub id: String,
    /// Display name
    pub name: String,
    /// Owning folder, if any
    #[serde(default)]
    pub folder_id: Option<String>,
    /// Columns in display order
    pub columns: Vec<Column>,
    /// Rows in insertion order (not guaranteed sorted)
    pub rows: Vec<Row>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last mutation time
    pub updated_at: DateTime<Utc>,
}

impl Table {
    /// Create a new table with no columns or rows
    pub fn new<S: Into<String>>(id: S, name: S, folder_id: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            folder_id,
            columns: Vec::new(),
            rows: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh the mutation timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Find a column by id
    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    /// Find a column by name, case-insensitively (CSV import matches headers this way)
    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Find a row by id
    pub fn row(&self, row_id: &str) -> Option<&Row> {
        self.rows.iter().find(|r| r.id == row_id)
    }

    /// Find a row by id, mutably
    pub fn row_mut(&mut self, row_id: &str) -> Option<&mut Row> {
        self.rows.iter_mut().find(|r| r.id == row_id)
    }

    /// All column ids, in display order
    pub fn column_ids(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.id.clone()).collect()
    }
}

/// Partial update for a table
#[derive(Debug, Clone, Default)]
pub struct TablePatch {
    /// New name
    pub name: Option<String>,
}
