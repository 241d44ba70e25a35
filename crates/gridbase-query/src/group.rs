//! Row grouping

use gridbase_core::Row;

/// Group key used for rows whose group-by cell is empty or missing
pub const UNGROUPED_KEY: &str = "Ungrouped";

/// Group key for the single implicit bucket when no group-by is set
pub const ALL_ROWS_KEY: &str = "All Rows";

/// Partition rows into named buckets by a column value
///
/// With `group_by = None`, every row lands in one implicit bucket in input
/// order. Otherwise the bucket key is the cell's display string (empty and
/// missing cells bucket under [`UNGROUPED_KEY`]); buckets appear in
/// first-encounter order and rows keep their relative input order, so
/// grouping after sorting preserves the sort within each bucket.
pub fn group_rows(rows: Vec<Row>, group_by: Option<&str>) -> Vec<(String, Vec<Row>)> {
    let column_id = match group_by {
        Some(id) => id,
        None => return vec![(ALL_ROWS_KEY.to_string(), rows)],
    };

    let mut groups: Vec<(String, Vec<Row>)> = Vec::new();
    for row in rows {
        let cell = row.get(column_id);
        let key = if cell.is_blank() {
            UNGROUPED_KEY.to_string()
        } else {
            cell.to_display_string()
        };
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, bucket)) => bucket.push(row),
            None => groups.push((key, vec![row])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_group_by_yields_single_bucket_in_order() {
        let rows = vec![Row::new("r1"), Row::new("r2"), Row::new("r3")];
        let groups = group_rows(rows, None);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, ALL_ROWS_KEY);
        let ids: Vec<&str> = groups[0].1.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["r1", "r2", "r3"]);
    }

    #[test]
    fn test_buckets_in_first_encounter_order() {
        let rows = vec![
            Row::new("r1").with("c1", "Todo"),
            Row::new("r2").with("c1", "Done"),
            Row::new("r3").with("c1", "Todo"),
        ];
        let groups = group_rows(rows, Some("c1"));
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Todo");
        assert_eq!(groups[1].0, "Done");
        let todo_ids: Vec<&str> = groups[0].1.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(todo_ids, ["r1", "r3"]);
    }

    #[test]
    fn test_blank_cells_bucket_as_ungrouped() {
        let rows = vec![
            Row::new("r1").with("c1", "Todo"),
            Row::new("r2").with("c1", ""),
            Row::new("r3"), // missing cell entirely
        ];
        let groups = group_rows(rows, Some("c1"));
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].0, UNGROUPED_KEY);
        assert_eq!(groups[1].1.len(), 2);
    }

    #[test]
    fn test_dangling_group_column_buckets_everything_ungrouped() {
        let rows = vec![Row::new("r1").with("c1", "x"), Row::new("r2").with("c1", "y")];
        let groups = group_rows(rows, Some("zzz"));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, UNGROUPED_KEY);
        assert_eq!(groups[0].1.len(), 2);
    }
}
