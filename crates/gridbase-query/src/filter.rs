//! Filter condition evaluation and the global text search

use gridbase_core::{Column, FilterCondition, FilterOperator, Row, Value};

/// Evaluate one filter condition against one row
///
/// Emptiness checks run first, regardless of the column's declared type.
/// Equality is strict value equality; the text operators compare lowercased
/// display strings; the ordering operators compare finite numbers and are
/// false whenever either side fails to coerce. A dangling `column_id` reads
/// as an empty cell, so malformed conditions degrade instead of erroring.
pub fn evaluate_condition(row: &Row, condition: &FilterCondition) -> bool {
    let cell = row.get(&condition.column_id);

    match condition.operator {
        FilterOperator::IsEmpty => cell.is_blank(),
        FilterOperator::IsNotEmpty => !cell.is_blank(),
        FilterOperator::Equals => *cell == condition.value,
        FilterOperator::NotEquals => *cell != condition.value,
        FilterOperator::Contains => text_of(cell).contains(&text_of(&condition.value)),
        FilterOperator::NotContains => !text_of(cell).contains(&text_of(&condition.value)),
        FilterOperator::StartsWith => text_of(cell).starts_with(&text_of(&condition.value)),
        FilterOperator::EndsWith => text_of(cell).ends_with(&text_of(&condition.value)),
        FilterOperator::Gt => numeric(cell, &condition.value, |a, b| a > b),
        FilterOperator::Lt => numeric(cell, &condition.value, |a, b| a < b),
        FilterOperator::Gte => numeric(cell, &condition.value, |a, b| a >= b),
        FilterOperator::Lte => numeric(cell, &condition.value, |a, b| a <= b),
    }
}

fn text_of(value: &Value) -> String {
    value.to_display_string().to_lowercase()
}

fn numeric(cell: &Value, filter: &Value, cmp: impl Fn(f64, f64) -> bool) -> bool {
    match (cell.as_f64(), filter.as_f64()) {
        (Some(a), Some(b)) => cmp(a, b),
        _ => false,
    }
}

/// Apply a filter list with strict AND semantics
///
/// An empty list passes every row through unchanged.
pub fn apply_filters(mut rows: Vec<Row>, filters: &[FilterCondition]) -> Vec<Row> {
    if filters.is_empty() {
        return rows;
    }
    rows.retain(|row| filters.iter().all(|f| evaluate_condition(row, f)));
    rows
}

/// Global text search: keep rows where any column's stringified value
/// contains the query, case-insensitively (OR across columns)
///
/// A blank query is a no-op.
pub fn apply_search(mut rows: Vec<Row>, columns: &[Column], query: &str) -> Vec<Row> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return rows;
    }
    rows.retain(|row| {
        columns
            .iter()
            .any(|col| text_of(row.get(&col.id)).contains(&query))
    });
    rows
}
