use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use chrono::Utc;
use mailform_shared_contracts::dump::DumpService;

use crate::fs::append_locked;

#[derive(Debug, Clone, Default)]
pub struct DumpServiceImpl {
    path: Option<Arc<PathBuf>>,
}

impl DumpServiceImpl {
    pub fn new(path: Option<Arc<PathBuf>>) -> Self {
        Self { path }
    }
}

impl DumpService for DumpServiceImpl {
    fn capture(&self, text: &str) -> anyhow::Result<()> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };

        let block = format!("--- {} ---\n{text}\n", Utc::now().to_rfc3339());
        append_locked(path, block.as_bytes())
            .with_context(|| format!("Failed to write dump to {}", path.display()))
    }
}
