#[cfg_attr(feature = "mock", mockall::automock)]
pub trait HashService: Send + Sync + 'static {
    /// Hashes the given data using the configured algorithm and returns the
    /// lowercase hexadecimal encoding of the result.
    fn hex_digest(&self, data: &[u8]) -> String;
}

#[cfg(feature = "mock")]
impl MockHashService {
    pub fn with_hex_digest(mut self, data: Vec<u8>, result: String) -> Self {
        self.expect_hex_digest()
            .once()
            .with(mockall::predicate::eq(data))
            .return_once(move |_| result);
        self
    }
}
