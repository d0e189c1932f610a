use super::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error raised by `mysql_async`, `rusqlite` or `url`.
#[derive(Debug)]
pub(super) struct DriverError(BoxError);

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&*self.0)
    }
}

impl core::fmt::Display for DriverError {
    /// Renders the wrapped error followed by its sources, `: ` separated.
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let first: &(dyn std::error::Error + 'static) = &*self.0;

        for (i, err) in std::iter::successors(Some(first), |err| err.source()).enumerate() {
            if i > 0 {
                f.write_str(": ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl Error {
    /// Wraps an error coming out of a database client library.
    pub fn driver(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Driver(DriverError(Box::new(err))))
    }

    pub fn is_driver(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Driver(_))
    }
}
