use super::Error;

/// Error when a connection URL or login details cannot be turned into a
/// connection: unparsable URL, unknown scheme, missing host or database.
#[derive(Debug)]
pub(super) struct InvalidConnectionUrl(Box<str>);

impl std::error::Error for InvalidConnectionUrl {}

impl core::fmt::Display for InvalidConnectionUrl {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid connection URL: {}", self.0)
    }
}

impl Error {
    /// Creates an invalid connection URL error. Callers redact passwords
    /// before they reach `message`.
    pub fn invalid_connection_url(message: impl Into<String>) -> Error {
        let message = message.into().into_boxed_str();
        Error::from(super::ErrorKind::InvalidConnectionUrl(InvalidConnectionUrl(message)))
    }

    pub fn is_invalid_connection_url(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidConnectionUrl(_))
    }
}
