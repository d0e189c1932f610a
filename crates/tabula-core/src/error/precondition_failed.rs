use super::Error;

/// Error when a session operation is called in a state that does not allow
/// it, e.g. reading records before any table was selected.
#[derive(Debug)]
pub(super) struct PreconditionFailed {
    message: Box<str>,
}

impl std::error::Error for PreconditionFailed {}

impl core::fmt::Display for PreconditionFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "precondition failed: {}", self.message)
    }
}

impl Error {
    pub fn precondition_failed(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::PreconditionFailed(PreconditionFailed {
            message: message.into().into(),
        }))
    }

    pub fn is_precondition_failed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::PreconditionFailed(_))
    }
}
