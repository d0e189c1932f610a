use super::Error;

/// Error when an insert or delete could not be built or executed.
///
/// Mutations auto-commit one statement at a time, so a mutation error never
/// leaves a partially applied change behind.
#[derive(Debug)]
pub(super) struct MutationError {
    message: Box<str>,
}

impl std::error::Error for MutationError {}

impl core::fmt::Display for MutationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "mutation failed: {}", self.message)
    }
}

impl Error {
    /// Creates a mutation error.
    pub fn mutation(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Mutation(MutationError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a mutation error.
    pub fn is_mutation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Mutation(_))
    }
}
