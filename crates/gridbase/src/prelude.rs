//! Prelude module - common imports for gridbase users
//!
//! ```rust
//! use gridbase::prelude::*;
//! ```

pub use crate::{
    // Color types
    ColorRule,
    ColorRuleSpec,
    Column,
    ColumnSpec,
    // Column types
    ColumnType,
    // Error types
    Error,
    // Filter types
    FilterCondition,
    FilterOperator,
    Folder,
    // Pagination
    PageRequest,
    // Pipeline types
    RenderOptions,
    RenderedRow,
    Result,
    Row,
    RowColor,
    RowGroup,
    // Sort types
    Sort,
    SortDirection,
    Table,
    // Interchange types
    TableExporter,
    TableImporter,
    // Cell types
    Value,
    View,
    ViewOutput,
    ViewType,
    // Main types
    Workspace,
    // Extension traits
    WorkspaceExt,

    // Pipeline entry points
    render_view,
    visible_columns,
};
