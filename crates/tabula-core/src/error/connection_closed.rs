use super::Error;

/// Error when an operation is attempted on a session whose connection was
/// already closed.
#[derive(Debug)]
pub(super) struct ConnectionClosed;

impl std::error::Error for ConnectionClosed {}

impl core::fmt::Display for ConnectionClosed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("connection closed")
    }
}

impl Error {
    pub fn connection_closed() -> Error {
        Error::from(super::ErrorKind::ConnectionClosed(ConnectionClosed))
    }

    pub fn is_connection_closed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ConnectionClosed(_))
    }
}
