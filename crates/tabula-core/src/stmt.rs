mod delete;
pub use delete::Delete;

mod filter;
pub use filter::Filter;

mod insert;
pub use insert::Insert;

mod row_set;
pub use row_set::RowSet;

mod select;
pub use select::Select;

mod value;
pub use value::Value;

mod value_record;
pub use value_record::ValueRecord;

/// A single data statement sent to a driver.
///
/// Table and column names are plain strings here. Callers are expected to
/// have checked them against the introspected schema before building the
/// statement; the serializer only quotes them.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Select(Select),
    Insert(Insert),
    Delete(Delete),
}

impl Statement {
    /// Name of the table the statement targets.
    pub fn table(&self) -> &str {
        match self {
            Statement::Select(select) => &select.table,
            Statement::Insert(insert) => &insert.table,
            Statement::Delete(delete) => &delete.table,
        }
    }

    /// Returns `true` if executing the statement produces rows.
    pub fn returns_rows(&self) -> bool {
        matches!(self, Statement::Select(_))
    }
}
