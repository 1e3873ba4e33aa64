use std::collections::BTreeMap;

use serde::Serialize;

/// Append-only structured log for form activity.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait RecordService: Send + Sync + 'static {
    /// Appends `record` to the given log.
    ///
    /// Callers treat this as best-effort: an error must never change the
    /// outcome of the operation that produced the record.
    fn record(&self, log: AttemptLog, record: &Record) -> anyhow::Result<()>;
}

/// The logs a [`Record`] can be written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttemptLog {
    /// Every attempt to dispatch a confirmed message
    Messages,
    /// Confirmations whose digest did not verify
    DigestFailures,
}

impl AttemptLog {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Messages => "messages",
            Self::DigestFailures => "digest_failures",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub event: &'static str,
    pub fields: BTreeMap<&'static str, RecordValue>,
}

impl Record {
    pub fn new(event: &'static str) -> Self {
        Self {
            event,
            fields: BTreeMap::new(),
        }
    }

    pub fn field(mut self, key: &'static str, value: impl Into<RecordValue>) -> Self {
        self.fields.insert(key, value.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RecordValue {
    String(String),
    Int(u64),
    Bool(bool),
    Null,
}

impl std::fmt::Display for RecordValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Int(n) => n.fmt(f),
            Self::Bool(b) => b.fmt(f),
            Self::Null => f.write_str("null"),
        }
    }
}

impl From<String> for RecordValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for RecordValue {
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<u64> for RecordValue {
    fn from(value: u64) -> Self {
        Self::Int(value)
    }
}

impl From<usize> for RecordValue {
    fn from(value: usize) -> Self {
        Self::Int(value as u64)
    }
}

impl From<bool> for RecordValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<RecordValue>> From<Option<T>> for RecordValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(feature = "mock")]
impl MockRecordService {
    pub fn with_record(mut self, log: AttemptLog, record: Record) -> Self {
        self.expect_record()
            .once()
            .with(
                mockall::predicate::eq(log),
                mockall::predicate::eq(record),
            )
            .return_once(|_, _| Ok(()));
        self
    }

    pub fn with_record_error(mut self, log: AttemptLog, record: Record) -> Self {
        self.expect_record()
            .once()
            .with(
                mockall::predicate::eq(log),
                mockall::predicate::eq(record),
            )
            .return_once(|_, _| Err(anyhow::anyhow!("log file is not writable")));
        self
    }
}
