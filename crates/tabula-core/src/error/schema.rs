use super::Error;

/// Error when a table or column lookup fails.
///
/// This occurs when:
/// - The table is not part of the current database's schema
/// - A column name is not one of the table's columns
/// - The structural query itself fails (closed connection, lost server)
#[derive(Debug)]
pub(super) struct SchemaError {
    message: Box<str>,
}

impl std::error::Error for SchemaError {}

impl core::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "schema error: {}", self.message)
    }
}

impl Error {
    /// Creates a schema error.
    ///
    /// Usually attached with [`Error::context`] on top of the driver error that
    /// caused the lookup to fail.
    pub fn schema(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Schema(SchemaError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a schema error.
    pub fn is_schema(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Schema(_))
    }
}
