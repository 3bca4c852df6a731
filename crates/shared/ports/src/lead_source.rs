use async_trait::async_trait;
use revenueos_core::PipelineRecord;
use std::sync::Arc;

use crate::SourceResult;

/// Port for retrieving pipeline records
///
/// Implementations return at most `limit` records, newest `created_at`
/// first. The analytics never call this themselves: the caller resolves the
/// records and hands a plain slice to the engine.
#[async_trait]
pub trait LeadSource: Send + Sync {
    /// Fetch the most recent records
    async fn recent_leads(&self, limit: usize) -> SourceResult<Vec<PipelineRecord>>;

    /// Get the source's name/identifier for logging
    fn name(&self) -> &str {
        "LeadSource"
    }
}

#[async_trait]
impl<T: LeadSource + ?Sized> LeadSource for Arc<T> {
    async fn recent_leads(&self, limit: usize) -> SourceResult<Vec<PipelineRecord>> {
        (**self).recent_leads(limit).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
