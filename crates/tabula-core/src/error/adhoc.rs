/// Error created from a format string or an `anyhow::Error`.
#[derive(Debug)]
pub(super) struct AdhocError {
    inner: anyhow::Error,
}

impl AdhocError {
    pub(super) fn new(inner: anyhow::Error) -> Self {
        AdhocError { inner }
    }

    pub(super) fn from_args(args: core::fmt::Arguments<'_>) -> Self {
        AdhocError::new(anyhow::Error::msg(args.to_string()))
    }
}

impl std::error::Error for AdhocError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner.source()
    }
}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.inner, f)
    }
}
