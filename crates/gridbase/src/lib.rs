//! # gridbase
//!
//! A spreadsheet-flavored in-memory database: tables with typed columns
//! live in folders, and views render them through a query pipeline of
//! search, filters, multi-key sorting, grouping, conditional row colors,
//! and pagination.
//!
//! ## Example
//!
//! ```rust
//! use gridbase::prelude::*;
//!
//! let mut workspace = Workspace::new();
//!
//! // A new table comes with a default "Name" column
//! let table_id = workspace.add_table("Inventory", None).unwrap();
//! let price_id = workspace
//!     .add_column(&table_id, ColumnSpec::new("Price", ColumnType::Number))
//!     .unwrap();
//!
//! let row_id = workspace.add_row(&table_id).unwrap();
//! workspace.update_cell(&table_id, &row_id, &price_id, "29.99").unwrap();
//!
//! // Views render through the pipeline
//! let view_id = workspace.add_view(&table_id, "Grid", ViewType::Grid).unwrap();
//! workspace.add_sort(&view_id, &price_id, SortDirection::Desc).unwrap();
//!
//! let table = workspace.table(&table_id).unwrap();
//! let view = workspace.view(&view_id).unwrap();
//! let output = render_view(table, view, &RenderOptions::show_all());
//! assert_eq!(output.total_rows, 1);
//! ```

pub mod prelude;

// Re-export core types
pub use gridbase_core::{
    ColorRule,
    ColorRulePatch,
    ColorRuleSpec,
    Column,
    ColumnPatch,
    ColumnSpec,
    // Column types
    ColumnType,
    // Error types
    Error,
    // Filter types
    FilterCondition,
    FilterOperator,
    FilterPatch,
    Folder,
    FolderPatch,
    Result,
    Row,
    Sort,
    SortDirection,
    Table,
    TablePatch,
    // Cell types
    Value,
    View,
    ViewPatch,
    ViewType,
    // Main types
    Workspace,
    DEFAULT_COLUMN_WIDTH,
    DEFAULT_FOLDER_COLOR,
};

// Re-export query pipeline types
pub use gridbase_query::{
    apply_filters, apply_search, compare_values, evaluate_condition, group_rows, render_view,
    resolve_color, sort_rows, visible_columns, PageRequest, RenderOptions, RenderedRow, RowColor,
    RowGroup, ViewOutput, ALL_ROWS_KEY, DEFAULT_PAGE_SIZE, UNGROUPED_KEY,
};

// Re-export interchange types
pub use gridbase_csv::{CsvError, CsvResult, ImportOutcome, TableExporter, TableImporter};

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Extension trait for Workspace file persistence
pub trait WorkspaceExt {
    /// Load a workspace from a JSON file
    fn load<P: AsRef<Path>>(path: P) -> Result<Workspace>;

    /// Save the workspace to a JSON file
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

impl WorkspaceExt for Workspace {
    fn load<P: AsRef<Path>>(path: P) -> Result<Workspace> {
        let file = File::open(path).map_err(|e| Error::other(e.to_string()))?;
        serde_json::from_reader(BufReader::new(file)).map_err(|e| Error::other(e.to_string()))
    }

    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path).map_err(|e| Error::other(e.to_string()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)
            .map_err(|e| Error::other(e.to_string()))
    }
}
