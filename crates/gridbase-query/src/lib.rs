//! Query pipeline for gridbase views
//!
//! Turns a table plus a view configuration into display-ready output:
//! global search, AND-combined filters, stable multi-key sorting,
//! insertion-ordered grouping, conditional row colors, and per-group
//! pagination, always in that order.
//!
//! ```
//! use gridbase_core::{Column, ColumnType, Row, Sort, Table, View, ViewType};
//! use gridbase_query::{render_view, RenderOptions};
//!
//! let mut table = Table::new("t1", "Inventory", None);
//! table.columns.push(Column::new("c1", "Item", ColumnType::Text));
//! table.rows.push(Row::new("r1").with("c1", "widget 10"));
//! table.rows.push(Row::new("r2").with("c1", "widget 9"));
//!
//! let mut view = View::new("v1", "Grid", ViewType::Grid, "t1", table.column_ids());
//! view.sorts.push(Sort::asc("c1"));
//!
//! let output = render_view(&table, &view, &RenderOptions::show_all());
//! let ids: Vec<&str> = output.rows().map(|r| r.row.id.as_str()).collect();
//! assert_eq!(ids, ["r2", "r1"]);
//! ```

pub mod color;
pub mod filter;
pub mod group;
pub mod paginate;
pub mod pipeline;
pub mod sort;

pub use color::{resolve_color, RowColor};
pub use filter::{apply_filters, apply_search, evaluate_condition};
pub use group::{group_rows, ALL_ROWS_KEY, UNGROUPED_KEY};
pub use paginate::{total_pages, PageRequest, DEFAULT_PAGE_SIZE};
pub use pipeline::{render_view, visible_columns, RenderOptions, RenderedRow, RowGroup, ViewOutput};
pub use sort::{compare_rows, compare_values, sort_rows};
