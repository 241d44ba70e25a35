//! # gridbase-core
//!
//! Core data structures for the gridbase "spreadsheet as database" library.
//!
//! This crate provides the fundamental types used throughout gridbase:
//! - [`Value`] - Cell values (text, numbers, booleans, empty)
//! - [`Column`], [`Row`], [`Table`], [`Folder`] - The dataset model
//! - [`View`], [`FilterCondition`], [`Sort`], [`ColorRule`] - Per-sheet configuration
//! - [`Workspace`] - The state container with the full mutation API
//!
//! ## Example
//!
//! ```rust
//! use gridbase_core::{ColumnSpec, ColumnType, Workspace};
//!
//! let mut ws = Workspace::new();
//! let table_id = ws.add_table("Returns", None).unwrap();
//! let amount = ws
//!     .add_column(&table_id, ColumnSpec::new("Amount", ColumnType::Number))
//!     .unwrap();
//!
//! let row = ws.add_row(&table_id).unwrap();
//! ws.update_cell(&table_id, &row, &amount, "29.99").unwrap();
//! ```

pub mod column;
pub mod error;
pub mod filter;
pub mod folder;
pub mod row;
pub mod table;
pub mod value;
pub mod view;
pub mod workspace;

// Re-exports for convenience
pub use column::{Column, ColumnPatch, ColumnSpec, ColumnType, DEFAULT_COLUMN_WIDTH};
pub use error::{Error, Result};
pub use filter::{ColorRule, ColorRulePatch, FilterCondition, FilterOperator, FilterPatch};
pub use folder::{Folder, FolderPatch, DEFAULT_FOLDER_COLOR};
pub use row::Row;
pub use table::{Table, TablePatch};
pub use value::Value;
pub use view::{Sort, SortDirection, View, ViewPatch, ViewType};
pub use workspace::{ColorRuleSpec, Workspace};
