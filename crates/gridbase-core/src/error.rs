//! Error types for gridbase-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gridbase-core
///
/// Store mutations return `Err` to reject an operation; the store itself is
/// left untouched in that case.
#[derive(Debug, Error)]
pub enum Error {
    /// A required name was empty
    #[error("{0} name cannot be empty")]
    EmptyName(&'static str),

    /// Folder not found by id
    #[error("Folder not found: {0}")]
    FolderNotFound(String),

    /// Table not found by id
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// Column not found within a table
    #[error("Column {column} not found in table {table}")]
    ColumnNotFound {
        /// Owning table id
        table: String,
        /// Missing column id
        column: String,
    },

    /// Row not found within a table
    #[error("Row {row} not found in table {table}")]
    RowNotFound {
        /// Owning table id
        table: String,
        /// Missing row id
        row: String,
    },

    /// View not found by id
    #[error("View not found: {0}")]
    ViewNotFound(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
