//! Workspace store: the mutable aggregate the pipeline reads from
//!
//! Holds every folder, table and view, and exposes the CRUD mutation API
//! the UI layer calls. Mutations validate minimal preconditions (non-empty
//! name, existing parent), mutate in place, and refresh `updated_at` on the
//! owning entity. A rejected operation returns `Err` and leaves the store
//! untouched.
//!
//! The store is single-writer by design: one UI thread mutates, renders
//! recompute from scratch afterwards. A hosted deployment would wrap the
//! whole struct in a mutex and keep the pipeline pure over snapshots.

use serde::{Deserialize, Serialize};

use crate::column::{Column, ColumnPatch, ColumnSpec, ColumnType, DEFAULT_COLUMN_WIDTH};
use crate::error::{Error, Result};
use crate::filter::{ColorRule, ColorRulePatch, FilterCondition, FilterOperator, FilterPatch};
use crate::folder::{Folder, FolderPatch};
use crate::row::Row;
use crate::table::{Table, TablePatch};
use crate::value::Value;
use crate::view::{Sort, SortDirection, View, ViewPatch, ViewType};

/// All user data: folders, tables and views
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Workspace {
    /// Folders, in creation order
    pub folders: Vec<Folder>,
    /// Tables, in creation order
    pub tables: Vec<Table>,
    /// Views, in creation order
    pub views: Vec<View>,
    /// Currently open table
    #[serde(default)]
    pub active_table_id: Option<String>,
    /// Currently open view
    #[serde(default)]
    pub active_view_id: Option<String>,
    /// Monotonic id counter
    #[serde(default)]
    next_id: u64,
}

impl Workspace {
    /// Create an empty workspace
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}{}", prefix, self.next_id)
    }

    // ==================== Lookups ====================

    /// Find a folder by id
    pub fn folder(&self, id: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.id == id)
    }

    /// Find a table by id
    pub fn table(&self, id: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == id)
    }

    /// Find a view by id
    pub fn view(&self, id: &str) -> Option<&View> {
        self.views.iter().find(|v| v.id == id)
    }

    /// Tables that weak-reference a folder
    pub fn folder_tables(&self, folder_id: &str) -> Vec<&Table> {
        self.tables
            .iter()
            .filter(|t| t.folder_id.as_deref() == Some(folder_id))
            .collect()
    }

    /// Views defined over a table
    pub fn views_for_table(&self, table_id: &str) -> Vec<&View> {
        self.views.iter().filter(|v| v.table_id == table_id).collect()
    }

    /// The currently open table, if any
    pub fn active_table(&self) -> Option<&Table> {
        self.active_table_id.as_deref().and_then(|id| self.table(id))
    }

    /// The currently open view, if any
    pub fn active_view(&self) -> Option<&View> {
        self.active_view_id.as_deref().and_then(|id| self.view(id))
    }

    fn table_mut(&mut self, id: &str) -> Result<&mut Table> {
        self.tables
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::TableNotFound(id.to_string()))
    }

    fn view_mut(&mut self, id: &str) -> Result<&mut View> {
        self.views
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or_else(|| Error::ViewNotFound(id.to_string()))
    }

    // ==================== Folder operations ====================

    /// Create a folder; returns its id
    pub fn add_folder(&mut self, name: &str, color: Option<String>) -> Result<String> {
        if name.trim().is_empty() {
            return Err(Error::EmptyName("folder"));
        }
        let id = self.next_id("f");
        self.folders.push(Folder::new(id.clone(), name.to_string(), color));
        Ok(id)
    }

    /// Apply a partial update to a folder
    pub fn update_folder(&mut self, id: &str, patch: FolderPatch) -> Result<()> {
        let folder = self
            .folders
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| Error::FolderNotFound(id.to_string()))?;
        if let Some(name) = patch.name {
            if name.trim().is_empty() {
                return Err(Error::EmptyName("folder"));
            }
            folder.name = name;
        }
        if let Some(color) = patch.color {
            folder.color = color;
        }
        folder.touch();
        Ok(())
    }

    /// Delete a folder, detaching its tables (`folder_id` cleared, no cascade)
    pub fn delete_folder(&mut self, id: &str) -> Result<()> {
        if self.folder(id).is_none() {
            return Err(Error::FolderNotFound(id.to_string()));
        }
        self.folders.retain(|f| f.id != id);
        for table in &mut self.tables {
            if table.folder_id.as_deref() == Some(id) {
                table.folder_id = None;
            }
        }
        Ok(())
    }

    // ==================== Table operations ====================

    /// Create a table with one default text column; returns its id
    pub fn add_table(&mut self, name: &str, folder_id: Option<&str>) -> Result<String> {
        if name.trim().is_empty() {
            return Err(Error::EmptyName("table"));
        }
        if let Some(fid) = folder_id {
            if self.folder(fid).is_none() {
                return Err(Error::FolderNotFound(fid.to_string()));
            }
        }
        let id = self.next_id("t");
        let column_id = self.next_id("c");
        let mut table = Table::new(id.clone(), name.to_string(), folder_id.map(String::from));
        table
            .columns
            .push(Column::new(column_id.as_str(), "Name", ColumnType::Text));
        self.tables.push(table);
        self.active_table_id = Some(id.clone());
        Ok(id)
    }

    /// Apply a partial update to a table
    pub fn update_table(&mut self, id: &str, patch: TablePatch) -> Result<()> {
        let table = self.table_mut(id)?;
        if let Some(name) = patch.name {
            if name.trim().is_empty() {
                return Err(Error::EmptyName("table"));
            }
            table.name = name;
        }
        table.touch();
        Ok(())
    }

    /// Delete a table
    ///
    /// Views over the table are left in place; orphan cleanup belongs to the
    /// persistence layer.
    pub fn delete_table(&mut self, id: &str) -> Result<()> {
        if self.table(id).is_none() {
            return Err(Error::TableNotFound(id.to_string()));
        }
        self.tables.retain(|t| t.id != id);
        if self.active_table_id.as_deref() == Some(id) {
            self.active_table_id = self.tables.first().map(|t| t.id.clone());
        }
        Ok(())
    }

    /// Move a table into a folder, or out of every folder with `None`
    pub fn move_table_to_folder(&mut self, table_id: &str, folder_id: Option<&str>) -> Result<()> {
        if let Some(fid) = folder_id {
            if self.folder(fid).is_none() {
                return Err(Error::FolderNotFound(fid.to_string()));
            }
        }
        let table = self.table_mut(table_id)?;
        table.folder_id = folder_id.map(String::from);
        table.touch();
        Ok(())
    }

    /// Set the active table
    pub fn set_active_table(&mut self, id: &str) -> Result<()> {
        if self.table(id).is_none() {
            return Err(Error::TableNotFound(id.to_string()));
        }
        self.active_table_id = Some(id.to_string());
        Ok(())
    }

    // ==================== Column operations ====================

    /// Add a column to a table; returns the new column id
    ///
    /// Existing rows are left without the new key and read as empty.
    pub fn add_column(&mut self, table_id: &str, spec: ColumnSpec) -> Result<String> {
        if spec.name.trim().is_empty() {
            return Err(Error::EmptyName("column"));
        }
        let id = self.next_id("c");
        let table = self.table_mut(table_id)?;
        let mut column = Column::new(id.as_str(), spec.name.as_str(), spec.column_type);
        column.width = Some(spec.width.unwrap_or(DEFAULT_COLUMN_WIDTH));
        column.options = spec.options;
        table.columns.push(column);
        table.touch();
        Ok(id)
    }

    /// Apply a partial update to a column
    pub fn update_column(
        &mut self,
        table_id: &str,
        column_id: &str,
        patch: ColumnPatch,
    ) -> Result<()> {
        let table = self.table_mut(table_id)?;
        let column = table
            .columns
            .iter_mut()
            .find(|c| c.id == column_id)
            .ok_or_else(|| Error::ColumnNotFound {
                table: table_id.to_string(),
                column: column_id.to_string(),
            })?;
        if let Some(name) = patch.name {
            if name.trim().is_empty() {
                return Err(Error::EmptyName("column"));
            }
            column.name = name;
        }
        if let Some(column_type) = patch.column_type {
            column.column_type = column_type;
        }
        if let Some(width) = patch.width {
            column.width = Some(width);
        }
        if let Some(options) = patch.options {
            column.options = options;
        }
        table.touch();
        Ok(())
    }

    /// Delete a column, stripping its cell from every row synchronously
    pub fn delete_column(&mut self, table_id: &str, column_id: &str) -> Result<()> {
        let table = self.table_mut(table_id)?;
        if table.column(column_id).is_none() {
            return Err(Error::ColumnNotFound {
                table: table_id.to_string(),
                column: column_id.to_string(),
            });
        }
        table.columns.retain(|c| c.id != column_id);
        for row in &mut table.rows {
            row.remove(column_id);
        }
        table.touch();
        Ok(())
    }

    // ==================== Row operations ====================

    /// Append an empty row (empty string cell for every existing column)
    pub fn add_row(&mut self, table_id: &str) -> Result<String> {
        let id = self.next_id("r");
        let table = self.table_mut(table_id)?;
        let mut row = Row::new(id.as_str());
        for column in &table.columns {
            row.set(column.id.as_str(), "");
        }
        table.rows.push(row);
        table.touch();
        Ok(id)
    }

    /// Overwrite several cells of a row at once
    pub fn update_row<I>(&mut self, table_id: &str, row_id: &str, values: I) -> Result<()>
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        let table = self.table_mut(table_id)?;
        let row = table.row_mut(row_id).ok_or_else(|| Error::RowNotFound {
            table: table_id.to_string(),
            row: row_id.to_string(),
        })?;
        for (column_id, value) in values {
            row.set(column_id, value);
        }
        table.touch();
        Ok(())
    }

    /// Set a single cell
    pub fn update_cell<V: Into<Value>>(
        &mut self,
        table_id: &str,
        row_id: &str,
        column_id: &str,
        value: V,
    ) -> Result<()> {
        let table = self.table_mut(table_id)?;
        let row = table.row_mut(row_id).ok_or_else(|| Error::RowNotFound {
            table: table_id.to_string(),
            row: row_id.to_string(),
        })?;
        row.set(column_id, value.into());
        table.touch();
        Ok(())
    }

    /// Delete a row
    pub fn delete_row(&mut self, table_id: &str, row_id: &str) -> Result<()> {
        let table = self.table_mut(table_id)?;
        if table.row(row_id).is_none() {
            return Err(Error::RowNotFound {
                table: table_id.to_string(),
                row: row_id.to_string(),
            });
        }
        table.rows.retain(|r| r.id != row_id);
        table.touch();
        Ok(())
    }

    /// Set or clear a row's manual color override
    pub fn set_row_manual_color(
        &mut self,
        table_id: &str,
        row_id: &str,
        color: Option<String>,
    ) -> Result<()> {
        let table = self.table_mut(table_id)?;
        let row = table.row_mut(row_id).ok_or_else(|| Error::RowNotFound {
            table: table_id.to_string(),
            row: row_id.to_string(),
        })?;
        row.manual_color = color;
        table.touch();
        Ok(())
    }

    /// Append imported rows (from CSV/JSON import), assigning fresh ids
    ///
    /// Cells for columns the import did not cover are filled with empty
    /// text, so a partially-populated import still renders cleanly.
    pub fn append_imported_rows(&mut self, table_id: &str, rows: Vec<Row>) -> Result<Vec<String>> {
        if self.table(table_id).is_none() {
            return Err(Error::TableNotFound(table_id.to_string()));
        }
        let mut ids = Vec::with_capacity(rows.len());
        for imported in rows {
            let id = self.next_id("r");
            let table = self.table_mut(table_id)?;
            let mut row = Row::new(id.as_str());
            for column in &table.columns {
                row.set(column.id.as_str(), "");
            }
            for (column_id, value) in imported.cells {
                row.set(column_id, value);
            }
            table.rows.push(row);
            ids.push(id);
        }
        self.table_mut(table_id)?.touch();
        Ok(ids)
    }

    // ==================== View operations ====================

    /// Create a view over a table with all columns visible; returns its id
    pub fn add_view(&mut self, table_id: &str, name: &str, view_type: ViewType) -> Result<String> {
        if name.trim().is_empty() {
            return Err(Error::EmptyName("view"));
        }
        let visible = self
            .table(table_id)
            .ok_or_else(|| Error::TableNotFound(table_id.to_string()))?
            .column_ids();
        let id = self.next_id("v");
        self.views.push(View::new(
            id.as_str(),
            name,
            view_type,
            table_id,
            visible,
        ));
        self.active_view_id = Some(id.clone());
        Ok(id)
    }

    /// Apply a partial update to a view
    pub fn update_view(&mut self, id: &str, patch: ViewPatch) -> Result<()> {
        let view = self.view_mut(id)?;
        if let Some(name) = patch.name {
            if name.trim().is_empty() {
                return Err(Error::EmptyName("view"));
            }
            view.name = name;
        }
        if let Some(view_type) = patch.view_type {
            view.view_type = view_type;
        }
        if let Some(group_by) = patch.group_by {
            view.group_by = group_by;
        }
        view.touch();
        Ok(())
    }

    /// Delete a view
    pub fn delete_view(&mut self, id: &str) -> Result<()> {
        if self.view(id).is_none() {
            return Err(Error::ViewNotFound(id.to_string()));
        }
        self.views.retain(|v| v.id != id);
        if self.active_view_id.as_deref() == Some(id) {
            self.active_view_id = self.views.first().map(|v| v.id.clone());
        }
        Ok(())
    }

    /// Set the active view
    pub fn set_active_view(&mut self, id: &str) -> Result<()> {
        if self.view(id).is_none() {
            return Err(Error::ViewNotFound(id.to_string()));
        }
        self.active_view_id = Some(id.to_string());
        Ok(())
    }

    // ==================== Filter operations ====================

    /// Add a filter condition to a view; returns the condition id
    pub fn add_filter(
        &mut self,
        view_id: &str,
        column_id: &str,
        operator: FilterOperator,
        value: Value,
    ) -> Result<String> {
        let id = self.next_id("flt");
        let view = self.view_mut(view_id)?;
        view.filters.push(FilterCondition {
            id: id.clone(),
            column_id: column_id.to_string(),
            operator,
            value,
        });
        view.touch();
        Ok(id)
    }

    /// Apply a partial update to a filter condition
    ///
    /// A missing filter id is a silent no-op; only the view must exist.
    pub fn update_filter(&mut self, view_id: &str, filter_id: &str, patch: FilterPatch) -> Result<()> {
        let view = self.view_mut(view_id)?;
        if let Some(filter) = view.filters.iter_mut().find(|f| f.id == filter_id) {
            if let Some(column_id) = patch.column_id {
                filter.column_id = column_id;
            }
            if let Some(operator) = patch.operator {
                filter.operator = operator;
            }
            if let Some(value) = patch.value {
                filter.value = value;
            }
            view.touch();
        }
        Ok(())
    }

    /// Remove a filter condition; a missing id is a silent no-op
    pub fn remove_filter(&mut self, view_id: &str, filter_id: &str) -> Result<()> {
        let view = self.view_mut(view_id)?;
        view.filters.retain(|f| f.id != filter_id);
        view.touch();
        Ok(())
    }

    /// Drop every filter condition from a view
    pub fn clear_filters(&mut self, view_id: &str) -> Result<()> {
        let view = self.view_mut(view_id)?;
        view.filters.clear();
        view.touch();
        Ok(())
    }

    // ==================== Sort operations ====================

    /// Add a sort key, replacing any existing sort on the same field
    ///
    /// The replacement appends at the end, so re-sorting an already sorted
    /// field demotes it to the lowest priority.
    pub fn add_sort(&mut self, view_id: &str, field: &str, direction: SortDirection) -> Result<()> {
        let view = self.view_mut(view_id)?;
        view.sorts.retain(|s| s.field != field);
        view.sorts.push(Sort {
            field: field.to_string(),
            direction,
        });
        view.touch();
        Ok(())
    }

    /// Remove the sort on a field; a missing field is a silent no-op
    pub fn remove_sort(&mut self, view_id: &str, field: &str) -> Result<()> {
        let view = self.view_mut(view_id)?;
        view.sorts.retain(|s| s.field != field);
        view.touch();
        Ok(())
    }

    /// Drop every sort key from a view
    pub fn clear_sorts(&mut self, view_id: &str) -> Result<()> {
        let view = self.view_mut(view_id)?;
        view.sorts.clear();
        view.touch();
        Ok(())
    }

    // ==================== Color rule operations ====================

    /// Append a color rule (lowest precedence); returns the rule id
    pub fn add_color_rule(&mut self, view_id: &str, rule: ColorRuleSpec) -> Result<String> {
        let id = self.next_id("cr");
        let view = self.view_mut(view_id)?;
        view.color_rules.push(ColorRule {
            id: id.clone(),
            column_id: rule.column_id,
            operator: rule.operator,
            value: rule.value,
            color: rule.color,
            text_color: rule.text_color,
        });
        view.touch();
        Ok(id)
    }

    /// Apply a partial update to a color rule; a missing id is a silent no-op
    pub fn update_color_rule(
        &mut self,
        view_id: &str,
        rule_id: &str,
        patch: ColorRulePatch,
    ) -> Result<()> {
        let view = self.view_mut(view_id)?;
        if let Some(rule) = view.color_rules.iter_mut().find(|r| r.id == rule_id) {
            if let Some(column_id) = patch.column_id {
                rule.column_id = column_id;
            }
            if let Some(operator) = patch.operator {
                rule.operator = operator;
            }
            if let Some(value) = patch.value {
                rule.value = value;
            }
            if let Some(color) = patch.color {
                rule.color = color;
            }
            if let Some(text_color) = patch.text_color {
                rule.text_color = text_color;
            }
            view.touch();
        }
        Ok(())
    }

    /// Remove a color rule; a missing id is a silent no-op
    pub fn remove_color_rule(&mut self, view_id: &str, rule_id: &str) -> Result<()> {
        let view = self.view_mut(view_id)?;
        view.color_rules.retain(|r| r.id != rule_id);
        view.touch();
        Ok(())
    }

    /// Drop every color rule from a view
    pub fn clear_color_rules(&mut self, view_id: &str) -> Result<()> {
        let view = self.view_mut(view_id)?;
        view.color_rules.clear();
        view.touch();
        Ok(())
    }

    // ==================== Column visibility ====================

    /// Toggle a column in or out of a view's visible set
    pub fn toggle_column_visibility(&mut self, view_id: &str, column_id: &str) -> Result<()> {
        let view = self.view_mut(view_id)?;
        if let Some(pos) = view.visible_columns.iter().position(|c| c == column_id) {
            view.visible_columns.remove(pos);
        } else {
            view.visible_columns.push(column_id.to_string());
        }
        view.touch();
        Ok(())
    }

    /// Replace a view's visible column set
    pub fn set_visible_columns(&mut self, view_id: &str, column_ids: Vec<String>) -> Result<()> {
        let view = self.view_mut(view_id)?;
        view.visible_columns = column_ids;
        view.touch();
        Ok(())
    }

    /// Show every column of the owning table
    pub fn show_all_columns(&mut self, view_id: &str) -> Result<()> {
        let table_id = self.view_mut(view_id)?.table_id.clone();
        let column_ids = self
            .table(&table_id)
            .map(Table::column_ids)
            .unwrap_or_default();
        self.set_visible_columns(view_id, column_ids)
    }

    /// Hide every column
    pub fn hide_all_columns(&mut self, view_id: &str) -> Result<()> {
        self.set_visible_columns(view_id, Vec::new())
    }
}

/// The caller-supplied part of a new color rule (the store assigns the id)
#[derive(Debug, Clone)]
pub struct ColorRuleSpec {
    /// Column the rule tests
    pub column_id: String,
    /// Comparison operator
    pub operator: FilterOperator,
    /// Comparison value
    pub value: Value,
    /// Background color
    pub color: String,
    /// Optional text color
    pub text_color: Option<String>,
}

impl ColorRuleSpec {
    /// Rule with just a background color
    pub fn new<S: Into<String>>(
        column_id: S,
        operator: FilterOperator,
        value: Value,
        color: S,
    ) -> Self {
        Self {
            column_id: column_id.into(),
            operator,
            value,
            color: color.into(),
            text_color: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn workspace_with_table() -> (Workspace, String) {
        let mut ws = Workspace::new();
        let table_id = ws.add_table("Returns", None).unwrap();
        (ws, table_id)
    }

    #[test]
    fn test_add_table_seeds_default_column() {
        let (ws, table_id) = workspace_with_table();
        let table = ws.table(&table_id).unwrap();
        assert_eq!(table.columns.len(), 1);
        assert_eq!(table.columns[0].name, "Name");
        assert_eq!(table.columns[0].column_type, ColumnType::Text);
        assert_eq!(ws.active_table_id.as_deref(), Some(table_id.as_str()));
    }

    #[test]
    fn test_empty_names_rejected() {
        let mut ws = Workspace::new();
        assert!(ws.add_table("", None).is_err());
        assert!(ws.add_table("   ", None).is_err());
        assert!(ws.add_folder("", None).is_err());
        assert!(ws.tables.is_empty());
        assert!(ws.folders.is_empty());
    }

    #[test]
    fn test_add_row_fills_existing_columns() {
        let (mut ws, table_id) = workspace_with_table();
        let row_id = ws.add_row(&table_id).unwrap();
        let table = ws.table(&table_id).unwrap();
        let column_id = table.columns[0].id.clone();
        assert_eq!(table.row(&row_id).unwrap().get(&column_id), &Value::text(""));
    }

    #[test]
    fn test_column_added_later_reads_empty_on_old_rows() {
        let (mut ws, table_id) = workspace_with_table();
        let row_id = ws.add_row(&table_id).unwrap();
        let col_id = ws
            .add_column(&table_id, ColumnSpec::new("Amount", ColumnType::Number))
            .unwrap();
        let table = ws.table(&table_id).unwrap();
        let row = table.row(&row_id).unwrap();
        assert!(!row.cells.contains_key(&col_id));
        assert_eq!(row.get(&col_id), &Value::Empty);
    }

    #[test]
    fn test_delete_column_strips_row_cells() {
        let (mut ws, table_id) = workspace_with_table();
        let col_id = ws
            .add_column(&table_id, ColumnSpec::new("Status", ColumnType::Select))
            .unwrap();
        let row_id = ws.add_row(&table_id).unwrap();
        ws.update_cell(&table_id, &row_id, &col_id, "Open").unwrap();

        ws.delete_column(&table_id, &col_id).unwrap();

        let table = ws.table(&table_id).unwrap();
        assert!(table.column(&col_id).is_none());
        assert!(!table.row(&row_id).unwrap().cells.contains_key(&col_id));
    }

    #[test]
    fn test_delete_folder_detaches_tables() {
        let mut ws = Workspace::new();
        let folder_id = ws.add_folder("Projects", None).unwrap();
        let table_id = ws.add_table("Tasks", Some(&folder_id)).unwrap();

        ws.delete_folder(&folder_id).unwrap();

        assert!(ws.folder(&folder_id).is_none());
        // The table survives, detached
        assert_eq!(ws.table(&table_id).unwrap().folder_id, None);
    }

    #[test]
    fn test_delete_table_does_not_cascade_views() {
        let (mut ws, table_id) = workspace_with_table();
        let view_id = ws.add_view(&table_id, "Grid", ViewType::Grid).unwrap();

        ws.delete_table(&table_id).unwrap();

        // Orphan cleanup is the persistence layer's job
        assert!(ws.view(&view_id).is_some());
    }

    #[test]
    fn test_add_view_defaults_to_all_columns_visible() {
        let (mut ws, table_id) = workspace_with_table();
        ws.add_column(&table_id, ColumnSpec::new("Amount", ColumnType::Number))
            .unwrap();
        let view_id = ws.add_view(&table_id, "Grid", ViewType::Grid).unwrap();
        let view = ws.view(&view_id).unwrap();
        assert_eq!(view.visible_columns.len(), 2);
        assert_eq!(ws.active_view_id.as_deref(), Some(view_id.as_str()));
    }

    #[test]
    fn test_add_sort_replaces_and_demotes_same_field() {
        let (mut ws, table_id) = workspace_with_table();
        let view_id = ws.add_view(&table_id, "Grid", ViewType::Grid).unwrap();

        ws.add_sort(&view_id, "c1", SortDirection::Asc).unwrap();
        ws.add_sort(&view_id, "c2", SortDirection::Asc).unwrap();
        ws.add_sort(&view_id, "c1", SortDirection::Desc).unwrap();

        let view = ws.view(&view_id).unwrap();
        assert_eq!(view.sorts.len(), 2);
        assert_eq!(view.sorts[0].field, "c2");
        assert_eq!(view.sorts[1].field, "c1");
        assert_eq!(view.sorts[1].direction, SortDirection::Desc);
    }

    #[test]
    fn test_filter_lifecycle() {
        let (mut ws, table_id) = workspace_with_table();
        let view_id = ws.add_view(&table_id, "Grid", ViewType::Grid).unwrap();

        let f1 = ws
            .add_filter(&view_id, "c1", FilterOperator::Equals, Value::text("Open"))
            .unwrap();
        let _f2 = ws
            .add_filter(&view_id, "c1", FilterOperator::IsNotEmpty, Value::Empty)
            .unwrap();
        assert_eq!(ws.view(&view_id).unwrap().filters.len(), 2);

        ws.update_filter(
            &view_id,
            &f1,
            FilterPatch {
                value: Some(Value::text("Closed")),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(
            ws.view(&view_id).unwrap().filters[0].value,
            Value::text("Closed")
        );

        ws.remove_filter(&view_id, &f1).unwrap();
        assert_eq!(ws.view(&view_id).unwrap().filters.len(), 1);

        // Unknown filter ids are silent no-ops; a missing view is not
        ws.remove_filter(&view_id, "nope").unwrap();
        assert!(ws.remove_filter("no-view", &f1).is_err());

        ws.clear_filters(&view_id).unwrap();
        assert!(ws.view(&view_id).unwrap().filters.is_empty());
    }

    #[test]
    fn test_color_rule_lifecycle() {
        let (mut ws, table_id) = workspace_with_table();
        let view_id = ws.add_view(&table_id, "Grid", ViewType::Grid).unwrap();

        let rule_id = ws
            .add_color_rule(
                &view_id,
                ColorRuleSpec::new("c1", FilterOperator::Equals, Value::text("Closed"), "red"),
            )
            .unwrap();
        ws.update_color_rule(
            &view_id,
            &rule_id,
            ColorRulePatch {
                color: Some("green".to_string()),
                text_color: Some(Some("white".to_string())),
                ..Default::default()
            },
        )
        .unwrap();

        let rule = &ws.view(&view_id).unwrap().color_rules[0];
        assert_eq!(rule.color, "green");
        assert_eq!(rule.text_color.as_deref(), Some("white"));

        ws.remove_color_rule(&view_id, &rule_id).unwrap();
        assert!(ws.view(&view_id).unwrap().color_rules.is_empty());
    }

    #[test]
    fn test_toggle_column_visibility() {
        let (mut ws, table_id) = workspace_with_table();
        let view_id = ws.add_view(&table_id, "Grid", ViewType::Grid).unwrap();
        let column_id = ws.table(&table_id).unwrap().columns[0].id.clone();

        ws.toggle_column_visibility(&view_id, &column_id).unwrap();
        assert!(ws.view(&view_id).unwrap().visible_columns.is_empty());

        ws.toggle_column_visibility(&view_id, &column_id).unwrap();
        assert_eq!(ws.view(&view_id).unwrap().visible_columns, vec![column_id]);
    }

    #[test]
    fn test_show_and_hide_all_columns() {
        let (mut ws, table_id) = workspace_with_table();
        ws.add_column(&table_id, ColumnSpec::new("Amount", ColumnType::Number))
            .unwrap();
        let view_id = ws.add_view(&table_id, "Grid", ViewType::Grid).unwrap();

        ws.hide_all_columns(&view_id).unwrap();
        assert!(ws.view(&view_id).unwrap().visible_columns.is_empty());

        ws.show_all_columns(&view_id).unwrap();
        assert_eq!(ws.view(&view_id).unwrap().visible_columns.len(), 2);
    }

    #[test]
    fn test_updated_at_refreshes_on_mutation() {
        let (mut ws, table_id) = workspace_with_table();
        let before = ws.table(&table_id).unwrap().updated_at;
        let row_id = ws.add_row(&table_id).unwrap();
        ws.update_cell(&table_id, &row_id, "c1", "x").unwrap();
        assert!(ws.table(&table_id).unwrap().updated_at >= before);
    }

    #[test]
    fn test_append_imported_rows_fills_missing_columns() {
        let (mut ws, table_id) = workspace_with_table();
        let amount_id = ws
            .add_column(&table_id, ColumnSpec::new("Amount", ColumnType::Number))
            .unwrap();
        let name_id = ws.table(&table_id).unwrap().columns[0].id.clone();

        let imported = Row::new("import-0").with(name_id.as_str(), "Mouse");
        let ids = ws.append_imported_rows(&table_id, vec![imported]).unwrap();
        assert_eq!(ids.len(), 1);

        let table = ws.table(&table_id).unwrap();
        let row = table.row(&ids[0]).unwrap();
        assert_eq!(row.get(&name_id), &Value::text("Mouse"));
        assert_eq!(row.get(&amount_id), &Value::text(""));
    }

    #[test]
    fn test_workspace_json_roundtrip() {
        let (mut ws, table_id) = workspace_with_table();
        let view_id = ws.add_view(&table_id, "Grid", ViewType::Grid).unwrap();
        ws.add_filter(&view_id, "c1", FilterOperator::Contains, Value::text("a"))
            .unwrap();

        let json = serde_json::to_string(&ws).unwrap();
        let back: Workspace = serde_json::from_str(&json).unwrap();
        assert_eq!(back.tables, ws.tables);
        assert_eq!(back.views, ws.views);

        // The id counter must survive the round-trip so fresh ids stay unique
        let mut back = back;
        let mut again = ws.clone();
        assert_eq!(back.add_row(&table_id).unwrap(), again.add_row(&table_id).unwrap());
    }
}
