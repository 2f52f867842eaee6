use thiserror::Error;

use super::model::{Column, Table, Value};

/// A selection named a column the table does not have.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no column named '{0}' in this dataset")]
pub struct UnknownColumn(pub String);

/// Column names of `table` in source order.
pub fn available_columns(table: &Table) -> Vec<&str> {
    table.columns().iter().map(|c| c.name.as_str()).collect()
}

/// A borrowed projection of a [`Table`]; never copies cell data.
#[derive(Debug, Clone)]
pub struct TableView<'a> {
    columns: Vec<&'a Column>,
}

impl<'a> TableView<'a> {
    pub fn columns(&self) -> &[&'a Column] {
        &self.columns
    }
}

/// Project `table` onto `names`, in the order given. Zero names is a valid,
/// empty view.
pub fn select<'a, S: AsRef<str>>(
    table: &'a Table,
    names: &[S],
) -> Result<TableView<'a>, UnknownColumn> {
    let columns = names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            table
                .column(name)
                .ok_or_else(|| UnknownColumn(name.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(TableView { columns })
}

/// Values of a single column.
pub fn select_single<'a>(table: &'a Table, name: &str) -> Result<&'a [Value], UnknownColumn> {
    table
        .column(name)
        .map(|c| c.values.as_slice())
        .ok_or_else(|| UnknownColumn(name.to_string()))
}

// ---------------------------------------------------------------------------
// ColumnSelection – multi-select widget state
// ---------------------------------------------------------------------------

/// Ordered set of picked column names, kept in the order they were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSelection {
    names: Vec<String>,
}

impl ColumnSelection {
    /// Add `name` if absent, remove it otherwise. Returns whether it is
    /// selected afterwards.
    pub fn toggle(&mut self, name: &str) -> bool {
        if let Some(pos) = self.names.iter().position(|n| n == name) {
            self.names.remove(pos);
            false
        } else {
            self.names.push(name.to_string());
            true
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    /// Drop picks that `table` no longer has (after a re-upload).
    pub fn retain_known(&mut self, table: &Table) {
        self.names.retain(|n| table.column(n).is_some());
    }
}

impl<S: Into<String>> FromIterator<S> for ColumnSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = ColumnSelection::default();
        for name in iter {
            let name = name.into();
            if !selection.contains(&name) {
                selection.names.push(name);
            }
        }
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_uploaded;

    fn table() -> Table {
        load_uploaded(b"date,kwh,region\n2020-01,3,north\n2020-02,4,south\n").unwrap()
    }

    #[test]
    fn available_columns_keep_source_order() {
        assert_eq!(available_columns(&table()), ["date", "kwh", "region"]);
    }

    #[test]
    fn select_projects_in_requested_order() {
        let table = table();
        let view = select(&table, &["region", "kwh"]).unwrap();
        let names: Vec<&str> = view.columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["region", "kwh"]);
    }

    #[test]
    fn empty_selection_is_an_empty_view() {
        let table = table();
        let view = select::<&str>(&table, &[]).unwrap();
        assert!(view.columns().is_empty());
    }

    #[test]
    fn unknown_column_is_reported() {
        let table = table();
        assert_eq!(
            select(&table, &["kwh", "gas"]).unwrap_err(),
            UnknownColumn("gas".into())
        );
        assert_eq!(
            select_single(&table, "gas").unwrap_err(),
            UnknownColumn("gas".into())
        );
    }

    #[test]
    fn select_single_borrows_values() {
        let table = table();
        assert_eq!(
            select_single(&table, "kwh").unwrap(),
            [Value::Integer(3), Value::Integer(4)]
        );
    }

    #[test]
    fn toggle_keeps_pick_order() {
        let mut selection = ColumnSelection::default();
        assert!(selection.toggle("kwh"));
        assert!(selection.toggle("date"));
        assert!(selection.toggle("region"));
        assert!(!selection.toggle("date"));
        assert_eq!(selection.names(), ["kwh", "region"]);
        assert!(!selection.contains("date"));
    }

    #[test]
    fn retain_known_drops_stale_names() {
        let mut selection: ColumnSelection = ["kwh", "gas", "date"].into_iter().collect();
        selection.retain_known(&table());
        assert_eq!(selection.names(), ["kwh", "date"]);
    }
}
