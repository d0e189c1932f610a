use super::{Statement, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Table to insert into
    pub table: String,

    /// Target columns, in order
    pub columns: Vec<String>,

    /// One value per target column
    pub values: Vec<Value>,
}

impl Insert {
    pub fn new(table: impl Into<String>, columns: Vec<String>, values: Vec<Value>) -> Self {
        Self {
            table: table.into(),
            columns,
            values,
        }
    }
}

impl Statement {
    pub fn is_insert(&self) -> bool {
        matches!(self, Statement::Insert(..))
    }

    /// Attempts to return a reference to an inner [`Insert`].
    pub fn as_insert(&self) -> Option<&Insert> {
        match self {
            Self::Insert(insert) => Some(insert),
            _ => None,
        }
    }
}

impl From<Insert> for Statement {
    fn from(src: Insert) -> Self {
        Self::Insert(src)
    }
}
