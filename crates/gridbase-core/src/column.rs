//! Column schema types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default width for newly created columns, in pixels
pub const DEFAULT_COLUMN_WIDTH: f64 = 200.0;

/// Declared type of a column
///
/// The type is advisory: values are stored as entered and coerced at
/// evaluation time. It drives which filter operators the UI offers
/// (see [`crate::FilterOperator::for_column_type`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Free-form text
    Text,
    /// Numeric values
    Number,
    /// ISO-8601 date strings
    Date,
    /// One of a fixed list of options
    Select,
    /// Boolean
    Checkbox,
    /// Email address
    Email,
    /// URL
    Url,
}

impl ColumnType {
    /// Lowercase name, as stored on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Text => "text",
            ColumnType::Number => "number",
            ColumnType::Date => "date",
            ColumnType::Select => "select",
            ColumnType::Checkbox => "checkbox",
            ColumnType::Email => "email",
            ColumnType::Url => "url",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A typed column in a table
///
/// Identity is `id`, unique within the owning table. Column order in
/// `Table::columns` is display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Unique id within the table
    pub id: String,
    /// Display name (also the CSV/JSON export key)
    pub name: String,
    /// Declared type
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// Custom width in pixels (None = default)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Allowed options, for select columns
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl Column {
    /// Create a new column
    pub fn new<S: Into<String>>(id: S, name: S, column_type: ColumnType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            column_type,
            width: Some(DEFAULT_COLUMN_WIDTH),
            options: Vec::new(),
        }
    }

    /// Set the width
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the select options
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }
}

/// The caller-supplied part of a new column (the store assigns the id)
#[derive(Debug, Clone)]
pub struct ColumnSpec {
    /// Display name
    pub name: String,
    /// Declared type
    pub column_type: ColumnType,
    /// Custom width (None = default)
    pub width: Option<f64>,
    /// Select options
    pub options: Vec<String>,
}

impl ColumnSpec {
    /// Create a column spec with defaults
    pub fn new<S: Into<String>>(name: S, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            width: None,
            options: Vec::new(),
        }
    }

    /// Set a custom width
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the select options
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }
}

/// Partial update for a column; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct ColumnPatch {
    /// New name
    pub name: Option<String>,
    /// New declared type
    pub column_type: Option<ColumnType>,
    /// New width
    pub width: Option<f64>,
    /// New select options
    pub options: Option<Vec<String>>,
}
