//! In-memory lead source

use async_trait::async_trait;
use revenueos_core::PipelineRecord;
use revenueos_ports::{LeadSource, SourceResult};

use super::newest_first;
use crate::demo::seed_leads;

/// Serves a fixed set of records held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryLeadSource {
    records: Vec<PipelineRecord>,
}

impl InMemoryLeadSource {
    pub fn new(records: Vec<PipelineRecord>) -> Self {
        Self { records }
    }

    /// Source pre-filled with the deterministic seed set
    pub fn seeded(year: i32) -> Self {
        Self::new(seed_leads(year, 8))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl LeadSource for InMemoryLeadSource {
    async fn recent_leads(&self, limit: usize) -> SourceResult<Vec<PipelineRecord>> {
        Ok(newest_first(self.records.clone(), limit))
    }

    fn name(&self) -> &str {
        "InMemoryLeadSource"
    }
}
