//! View (sheet) types

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::filter::{ColorRule, FilterCondition};
use crate::row::Row;

/// How a view renders its rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    /// Spreadsheet grid
    Grid,
    /// Card gallery
    Gallery,
    /// Single-record form
    Form,
    /// Kanban board (usually grouped)
    Kanban,
    /// Calendar
    Calendar,
    /// Chart
    Chart,
    /// Returns analysis
    Returns,
}

impl ViewType {
    /// Lowercase name, as stored on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewType::Grid => "grid",
            ViewType::Gallery => "gallery",
            ViewType::Form => "form",
            ViewType::Kanban => "kanban",
            ViewType::Calendar => "calendar",
            ViewType::Chart => "chart",
            ViewType::Returns => "returns",
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending
    Asc,
    /// Descending
    Desc,
}

/// One sort key; order within `View::sorts` defines priority
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sort {
    /// Column id to sort by
    pub field: String,
    /// Direction
    pub direction: SortDirection,
}

impl Sort {
    /// Ascending sort on a column
    pub fn asc<S: Into<String>>(field: S) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    /// Descending sort on a column
    pub fn desc<S: Into<String>>(field: S) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// A sheet over a table: per-view filters, sorts, colors, visibility
///
/// Many views may point at the same table; each one filters, sorts and
/// colors the same underlying rows independently. `visible_columns` may
/// contain stale ids after a column is deleted; readers intersect it with
/// the table's current columns defensively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
    /// Unique id
    pub id: String,
    /// Display name
    pub name: String,
    /// Render style
    #[serde(rename = "type")]
    pub view_type: ViewType,
    /// Weak reference to the table this view reads
    pub table_id: String,
    /// AND-combined filter conditions, in insertion order
    #[serde(default)]
    pub filters: Vec<FilterCondition>,
    /// Sort keys, primary first
    #[serde(default)]
    pub sorts: Vec<Sort>,
    /// Color rules, precedence order
    #[serde(default)]
    pub color_rules: Vec<ColorRule>,
    /// Visible column ids
    #[serde(default)]
    pub visible_columns: Vec<String>,
    /// Group rows by this column
    #[serde(default)]
    pub group_by: Option<String>,
    /// View-local row override; when set, the view renders these rows
    /// instead of the table's
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<Row>>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last mutation time
    pub updated_at: DateTime<Utc>,
}

impl View {
    /// Create a new view with all the given columns visible
    pub fn new<S: Into<String>>(
        id: S,
        name: S,
        view_type: ViewType,
        table_id: S,
        visible_columns: Vec<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            view_type,
            table_id: table_id.into(),
            filters: Vec::new(),
            sorts: Vec::new(),
            color_rules: Vec::new(),
            visible_columns,
            group_by: None,
            rows: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh the mutation timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Partial update for a view
#[derive(Debug, Clone, Default)]
pub struct ViewPatch {
    /// New name
    pub name: Option<String>,
    /// New render style
    pub view_type: Option<ViewType>,
    /// New group-by column (`Some(None)` clears grouping)
    pub group_by: Option<Option<String>>,
}
