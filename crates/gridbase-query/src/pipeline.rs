//! View pipeline orchestrator
//!
//! Composes the stages in a fixed order (row source → search → filter →
//! sort → group → color → paginate) and exposes the single entry point the
//! UI renders from. The pipeline is pure over its inputs and recomputes
//! fully on every call; malformed view configuration degrades to "no
//! effect" with a debug log instead of failing the render.

use gridbase_core::{Column, Row, Table, View};

use crate::color::{resolve_color, RowColor};
use crate::filter::{apply_filters, apply_search};
use crate::group::group_rows;
use crate::paginate::{total_pages, PageRequest};
use crate::sort::sort_rows;

/// Inputs to a render beyond the table and view themselves
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Global search text; blank means no search
    pub search: String,
    /// Requested page window
    pub page: PageRequest,
}

impl RenderOptions {
    /// Everything, unwindowed, no search
    pub fn show_all() -> Self {
        Self {
            search: String::new(),
            page: PageRequest::all(),
        }
    }
}

/// A row plus its resolved display color
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRow {
    /// The row data
    pub row: Row,
    /// Transient display color; not persisted
    pub color: RowColor,
}

/// One group bucket of the rendered output
#[derive(Debug, Clone, PartialEq)]
pub struct RowGroup {
    /// Group key (cell display value, or the implicit/ungrouped key)
    pub key: String,
    /// The windowed rows of this group
    pub rows: Vec<RenderedRow>,
    /// Total rows in the group before windowing
    pub total: usize,
}

/// Result of rendering a view
#[derive(Debug, Clone, PartialEq)]
pub struct ViewOutput {
    /// Group buckets in first-encounter order
    pub groups: Vec<RowGroup>,
    /// Total rows across all groups, after search and filters
    pub total_rows: usize,
    /// Page count over the summed total
    pub total_pages: usize,
}

impl ViewOutput {
    /// Flatten the windowed rows across groups, in group order
    pub fn rows(&self) -> impl Iterator<Item = &RenderedRow> {
        self.groups.iter().flat_map(|g| g.rows.iter())
    }
}

/// Render a view over its table
///
/// Stage order is fixed and not reorderable by configuration:
/// 1. row source: the view's own rows when it stores a subset, else the table's
/// 2. global search (OR across all table columns)
/// 3. the view's filters (AND-combined)
/// 4. the view's sorts (stable, multi-key)
/// 5. group-by
/// 6. per-row color resolution
/// 7. pagination, windowed per group
pub fn render_view(table: &Table, view: &View, options: &RenderOptions) -> ViewOutput {
    log_dangling_columns(table, view);

    let rows = view.rows.as_ref().unwrap_or(&table.rows).clone();

    let rows = apply_search(rows, &table.columns, &options.search);
    let mut rows = apply_filters(rows, &view.filters);
    sort_rows(&mut rows, &view.sorts);

    let grouped = group_rows(rows, view.group_by.as_deref());

    let total_rows: usize = grouped.iter().map(|(_, rows)| rows.len()).sum();
    let total_pages = total_pages(total_rows, options.page.page_size);

    let groups = grouped
        .into_iter()
        .map(|(key, rows)| {
            let total = rows.len();
            let (start, end) = options.page.bounds(total);
            let rows = rows[start..end]
                .iter()
                .map(|row| RenderedRow {
                    color: resolve_color(row, &view.color_rules),
                    row: row.clone(),
                })
                .collect();
            RowGroup { key, rows, total }
        })
        .collect();

    ViewOutput {
        groups,
        total_rows,
        total_pages,
    }
}

/// The view's visible columns, defensively intersected with the table
///
/// Stale ids (columns deleted since the view was configured) are dropped;
/// the result keeps the table's display order.
pub fn visible_columns<'a>(table: &'a Table, view: &View) -> Vec<&'a Column> {
    table
        .columns
        .iter()
        .filter(|c| view.visible_columns.iter().any(|id| *id == c.id))
        .collect()
}

fn log_dangling_columns(table: &Table, view: &View) {
    for filter in &view.filters {
        if table.column(&filter.column_id).is_none() {
            log::debug!(
                "view {}: filter {} references missing column {}",
                view.id,
                filter.id,
                filter.column_id
            );
        }
    }
    for sort in &view.sorts {
        if table.column(&sort.field).is_none() {
            log::debug!("view {}: sort references missing column {}", view.id, sort.field);
        }
    }
    if let Some(group_by) = &view.group_by {
        if table.column(group_by).is_none() {
            log::debug!("view {}: group-by references missing column {}", view.id, group_by);
        }
    }
}
