use crate::{stmt::ValueRecord, Error, Result};

/// Outcome of [`Connection::exec`](super::Connection::exec).
#[derive(Debug)]
pub enum Response {
    /// A statement that changed rows
    Count {
        affected: u64,
        last_insert_id: Option<u64>,
    },

    /// Rows returned by a query
    Rows(Vec<ValueRecord>),
}

impl Response {
    pub fn count(affected: u64) -> Self {
        Self::Count {
            affected,
            last_insert_id: None,
        }
    }

    pub fn inserted(affected: u64, last_insert_id: Option<u64>) -> Self {
        Self::Count {
            affected,
            last_insert_id,
        }
    }

    pub fn rows(rows: Vec<ValueRecord>) -> Self {
        Self::Rows(rows)
    }

    pub fn into_rows(self) -> Result<Vec<ValueRecord>> {
        match self {
            Self::Rows(rows) => Ok(rows),
            Self::Count { .. } => Err(Error::invalid_result("expected Rows, got Count")),
        }
    }

    /// Returns `(affected, last_insert_id)`.
    pub fn into_count(self) -> Result<(u64, Option<u64>)> {
        match self {
            Self::Count {
                affected,
                last_insert_id,
            } => Ok((affected, last_insert_id)),
            Self::Rows(_) => Err(Error::invalid_result("expected Count, got Rows")),
        }
    }
}
