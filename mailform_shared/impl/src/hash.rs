use mailform_models::hash::HashAlgorithm;
use mailform_shared_contracts::hash::HashService;
use md5::Md5;
use sha2::{Digest, Sha256, Sha512};

#[derive(Debug, Clone, Copy)]
pub struct HashServiceImpl {
    algorithm: HashAlgorithm,
    digest: fn(&[u8]) -> String,
}

impl HashServiceImpl {
    pub fn new(algorithm: HashAlgorithm) -> Self {
        let digest: fn(&[u8]) -> String = match algorithm {
            HashAlgorithm::Md5 => hex_digest::<Md5>,
            HashAlgorithm::Sha256 => hex_digest::<Sha256>,
            HashAlgorithm::Sha512 => hex_digest::<Sha512>,
        };
        Self { algorithm, digest }
    }
}

impl HashService for HashServiceImpl {
    #[tracing::instrument(level = "trace", skip_all, fields(algorithm = %self.algorithm))]
    fn hex_digest(&self, data: &[u8]) -> String {
        (self.digest)(data)
    }
}

fn hex_digest<D: Digest>(data: &[u8]) -> String {
    hex::encode(D::new().chain_update(data).finalize())
}
