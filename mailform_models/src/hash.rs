use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One-way hash function used to derive form digests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// Kept for compatibility with digests issued by older deployments.
    Md5,
    #[default]
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown hash algorithm {0:?}")]
pub struct UnknownHashAlgorithmError(pub String);

impl FromStr for HashAlgorithm {
    type Err = UnknownHashAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "md5" => Ok(Self::Md5),
            "sha256" => Ok(Self::Sha256),
            "sha512" => Ok(Self::Sha512),
            _ => Err(UnknownHashAlgorithmError(s.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!("md5".parse(), Ok(HashAlgorithm::Md5));
        assert_eq!("sha256".parse(), Ok(HashAlgorithm::Sha256));
        assert_eq!("sha512".parse(), Ok(HashAlgorithm::Sha512));
        assert_eq!(
            "crc32".parse::<HashAlgorithm>(),
            Err(UnknownHashAlgorithmError("crc32".into()))
        );
    }

    #[test]
    fn deserialize() {
        let value = serde_json::Value::String("md5".into());
        assert_eq!(
            serde_json::from_value::<HashAlgorithm>(value).unwrap(),
            HashAlgorithm::Md5
        );

        let value = serde_json::Value::String("sha1".into());
        serde_json::from_value::<HashAlgorithm>(value).unwrap_err();
    }
}
