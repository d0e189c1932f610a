use super::{Filter, Statement};

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// Table to read from
    pub table: String,

    /// Columns to project, in order
    pub columns: Vec<String>,

    /// WHERE
    pub filter: Option<Filter>,

    /// LIMIT
    pub limit: Option<u64>,
}

impl Select {
    pub fn new(table: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            table: table.into(),
            columns,
            filter: None,
            limit: None,
        }
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl Statement {
    pub fn is_select(&self) -> bool {
        matches!(self, Statement::Select(..))
    }

    /// Attempts to return a reference to an inner [`Select`].
    pub fn as_select(&self) -> Option<&Select> {
        match self {
            Self::Select(select) => Some(select),
            _ => None,
        }
    }
}

impl From<Select> for Statement {
    fn from(src: Select) -> Self {
        Self::Select(src)
    }
}
