/// Optional debug sink that captures raw request data to a file.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait DumpService: Send + Sync + 'static {
    /// Appends `text` to the dump. Does nothing if capturing is disabled.
    fn capture(&self, text: &str) -> anyhow::Result<()>;
}

#[cfg(feature = "mock")]
impl MockDumpService {
    /// Accepts any number of captures.
    pub fn ignoring(mut self) -> Self {
        self.expect_capture().returning(|_| Ok(()));
        self
    }

    pub fn with_capture_error(mut self) -> Self {
        self.expect_capture()
            .once()
            .returning(|_| Err(anyhow::anyhow!("dump file is locked")));
        self
    }
}
