use std::{collections::BTreeMap, path::PathBuf, sync::Arc};

use anyhow::Context;
use chrono::{DateTime, Utc};
use mailform_shared_contracts::record::{AttemptLog, Record, RecordService, RecordValue};
use serde::Serialize;
use tracing::{info, warn};

use crate::fs::append_locked;

/// Writes records as JSON lines and mirrors each of them as a tracing event.
#[derive(Debug, Clone, Default)]
pub struct RecordServiceImpl {
    config: RecordServiceConfig,
}

#[derive(Debug, Clone, Default)]
pub struct RecordServiceConfig {
    pub messages: Option<Arc<PathBuf>>,
    pub digest_failures: Option<Arc<PathBuf>>,
}

impl RecordServiceImpl {
    pub fn new(config: RecordServiceConfig) -> Self {
        Self { config }
    }

    fn path(&self, log: AttemptLog) -> Option<&PathBuf> {
        match log {
            AttemptLog::Messages => self.config.messages.as_deref(),
            AttemptLog::DigestFailures => self.config.digest_failures.as_deref(),
        }
    }
}

#[derive(Serialize)]
struct Line<'a> {
    timestamp: DateTime<Utc>,
    log: &'static str,
    event: &'static str,
    fields: &'a BTreeMap<&'static str, RecordValue>,
}

impl RecordService for RecordServiceImpl {
    fn record(&self, log: AttemptLog, record: &Record) -> anyhow::Result<()> {
        let fields = &record.fields;
        match log {
            AttemptLog::Messages => info!(log = log.as_str(), ?fields, "{}", record.event),
            AttemptLog::DigestFailures => warn!(log = log.as_str(), ?fields, "{}", record.event),
        }

        let Some(path) = self.path(log) else {
            return Ok(());
        };

        let mut line = serde_json::to_string(&Line {
            timestamp: Utc::now(),
            log: log.as_str(),
            event: record.event,
            fields: &record.fields,
        })?;
        line.push('\n');

        append_locked(path, line.as_bytes()).with_context(|| {
            format!("Failed to append to {} log at {}", log.as_str(), path.display())
        })
    }
}
