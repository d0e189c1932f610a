use super::Error;

/// Error when form input fails validation before it reaches the database.
#[derive(Debug)]
pub(super) struct ValidationError {
    pub(super) kind: ValidationErrorKind,
}

#[derive(Debug)]
pub(super) enum ValidationErrorKind {
    /// Numeric component outside its allowed range
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Free-form rejection
    Message(Box<str>),
}

impl std::error::Error for ValidationError {}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.kind {
            ValidationErrorKind::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "{field} {value} is out of range ({min}..={max})"),
            ValidationErrorKind::Message(message) => write!(f, "invalid input: {message}"),
        }
    }
}

impl Error {
    /// Creates a validation error for a numeric input outside `min..=max`.
    pub fn validation_out_of_range(field: &'static str, value: i64, min: i64, max: i64) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError {
            kind: ValidationErrorKind::OutOfRange {
                field,
                value,
                min,
                max,
            },
        }))
    }

    /// Creates a validation error with a message.
    pub fn validation(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError {
            kind: ValidationErrorKind::Message(message.into().into()),
        }))
    }

    /// Returns `true` if this error is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Validation(_))
    }
}
