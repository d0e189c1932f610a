use super::ValueRecord;
use crate::{schema::ColumnDescriptor, Error, Result};

/// An immutable snapshot of query results paired with its column shape.
///
/// Every row holds exactly one value per column.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSet {
    columns: Vec<ColumnDescriptor>,
    rows: Vec<ValueRecord>,
}

impl RowSet {
    /// Pairs rows with their columns, rejecting rows of the wrong arity.
    pub fn new(columns: Vec<ColumnDescriptor>, rows: Vec<ValueRecord>) -> Result<Self> {
        if let Some((i, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != columns.len())
        {
            return Err(Error::invalid_result(format!(
                "row {i} has {} values, expected {}",
                row.len(),
                columns.len()
            )));
        }

        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| &column.name[..])
    }

    /// Position of the named column within each row.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.name == name)
    }

    pub fn rows(&self) -> &[ValueRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValueRecord> {
        self.rows.iter()
    }

    pub fn into_rows(self) -> Vec<ValueRecord> {
        self.rows
    }
}

impl<'a> IntoIterator for &'a RowSet {
    type Item = &'a ValueRecord;
    type IntoIter = std::slice::Iter<'a, ValueRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
