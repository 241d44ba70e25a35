//! Folder type

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default folder accent color
pub const DEFAULT_FOLDER_COLOR: &str = "#10b981";

/// A purely organizational grouping of tables
///
/// Tables weak-reference a folder by id; deleting a folder detaches its
/// tables rather than deleting them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    /// Unique id
    pub id: String,
    /// Display name
    pub name: String,
    /// Accent color (hex)
    pub color: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last mutation time
    pub updated_at: DateTime<Utc>,
}

impl Folder {
    /// Create a new folder
    pub fn new<S: Into<String>>(id: S, name: S, color: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            color: color.unwrap_or_else(|| DEFAULT_FOLDER_COLOR.to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh the mutation timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Partial update for a folder
#[derive(Debug, Clone, Default)]
pub struct FolderPatch {
    /// New name
    pub name: Option<String>,
    /// New accent color
    pub color: Option<String>,
}
