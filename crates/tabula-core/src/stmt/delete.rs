use super::{Filter, Statement};

#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    /// Table to delete from
    pub table: String,

    /// WHERE
    pub filter: Filter,
}

impl Delete {
    pub fn new(table: impl Into<String>, filter: Filter) -> Self {
        Self {
            table: table.into(),
            filter,
        }
    }
}

impl Statement {
    pub fn is_delete(&self) -> bool {
        matches!(self, Statement::Delete(..))
    }

    /// Attempts to return a reference to an inner [`Delete`].
    pub fn as_delete(&self) -> Option<&Delete> {
        match self {
            Self::Delete(delete) => Some(delete),
            _ => None,
        }
    }
}

impl From<Delete> for Statement {
    fn from(src: Delete) -> Self {
        Self::Delete(src)
    }
}
