use std::{
    net::{IpAddr, SocketAddr},
    path::{Path, PathBuf},
};

use anyhow::Context;
use config::{File, FileFormat};
use mailform_models::{
    email_address::EmailAddress, hash::HashAlgorithm, language::Language, Sensitive,
};
use serde::{de::Error as _, Deserialize, Deserializer};

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            anyhow::Ok(builder.add_source(File::from_str(&content, FileFormat::Toml)))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub email: EmailConfig,
    pub mailform: MailformConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub address: SocketAddr,
    /// Host name used to qualify bare recipients, defaults to the machine
    /// hostname
    pub server_name: Option<String>,
    pub real_ip: Option<RealIpConfig>,
}

#[derive(Debug, Deserialize)]
pub struct RealIpConfig {
    pub header: String,
    pub set_from: IpAddr,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub smtp_url: Sensitive<String>,
    pub from: EmailAddress,
}

#[derive(Debug, Deserialize)]
pub struct MailformConfig {
    pub salt: Sensitive<String>,
    /// Full address or bare local part, qualified with the server name
    #[serde(deserialize_with = "deserialize_recipient")]
    pub recipient: String,
    pub prefix: String,
    #[serde(default)]
    pub hash_algorithm: HashAlgorithm,
    #[serde(default)]
    pub debug: bool,
    #[serde(default)]
    pub language: Language,
    #[serde(default = "default_max_message_bytes")]
    pub max_message_bytes: usize,
    #[serde(default = "default_true")]
    pub show_placeholders: bool,
    #[serde(default = "default_textarea_rows")]
    pub textarea_rows: u32,
    /// Text above the blank form, defaults to the greeting of the configured
    /// language
    pub greeting: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LogConfig {
    pub messages: Option<PathBuf>,
    pub digest_failures: Option<PathBuf>,
    pub dump: Option<PathBuf>,
}

fn deserialize_recipient<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let recipient = String::deserialize(deserializer)?;
    let address = if recipient.contains('@') {
        recipient.clone()
    } else {
        format!("{recipient}@example.com")
    };

    if EmailAddress::is_valid(&address) {
        Ok(recipient)
    } else {
        Err(D::Error::custom(format!("Invalid recipient {recipient:?}")))
    }
}

fn default_max_message_bytes() -> usize {
    10 * 1024
}

fn default_true() -> bool {
    true
}

fn default_textarea_rows() -> u32 {
    10
}
