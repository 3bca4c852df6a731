//! File-backed lead source
//!
//! Reads a JSON array of records in the wire format of `PipelineRecord`
//! (camelCase fields, RFC 3339 `createdAt`). The file is re-read on every
//! call.

use async_trait::async_trait;
use log::debug;
use revenueos_core::PipelineRecord;
use revenueos_ports::{LeadSource, SourceError, SourceResult};
use std::path::{Path, PathBuf};

use super::newest_first;

pub struct JsonFileLeadSource {
    path: PathBuf,
}

impl JsonFileLeadSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl LeadSource for JsonFileLeadSource {
    async fn recent_leads(&self, limit: usize) -> SourceResult<Vec<PipelineRecord>> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let records: Vec<PipelineRecord> = serde_json::from_str(&raw).map_err(|e| {
            SourceError::Decode(format!("{}: {}", self.path.display(), e))
        })?;

        debug!(
            "Loaded {} records from {}",
            records.len(),
            self.path.display()
        );

        Ok(newest_first(records, limit))
    }

    fn name(&self) -> &str {
        "JsonFileLeadSource"
    }
}
