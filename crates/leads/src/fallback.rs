//! Demo-record fallback
//!
//! Wraps a source so that callers always get representative, non-empty
//! input: if the wrapped source fails or returns nothing, the sample
//! records are served instead.

use async_trait::async_trait;
use log::warn;
use revenueos_core::PipelineRecord;
use revenueos_ports::{LeadSource, SourceResult};

use crate::demo::demo_leads;

pub struct FallbackLeadSource<S> {
    inner: S,
    fallback: Vec<PipelineRecord>,
}

impl<S: LeadSource> FallbackLeadSource<S> {
    /// Fall back to the built-in demo leads
    pub fn new(inner: S) -> Self {
        Self::with_fallback(inner, demo_leads())
    }

    /// Fall back to a caller-supplied record set
    pub fn with_fallback(inner: S, fallback: Vec<PipelineRecord>) -> Self {
        Self { inner, fallback }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: LeadSource> LeadSource for FallbackLeadSource<S> {
    /// Never fails. The fallback set is served whole, regardless of `limit`.
    async fn recent_leads(&self, limit: usize) -> SourceResult<Vec<PipelineRecord>> {
        match self.inner.recent_leads(limit).await {
            Ok(records) if !records.is_empty() => Ok(records),
            Ok(_) => {
                warn!(
                    "{} returned no records, serving {} sample records",
                    self.inner.name(),
                    self.fallback.len()
                );
                Ok(self.fallback.clone())
            }
            Err(e) => {
                warn!(
                    "{} failed ({}), serving {} sample records",
                    self.inner.name(),
                    e,
                    self.fallback.len()
                );
                Ok(self.fallback.clone())
            }
        }
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryLeadSource;
    use revenueos_ports::SourceError;

    struct BrokenSource;

    #[async_trait]
    impl LeadSource for BrokenSource {
        async fn recent_leads(&self, _limit: usize) -> SourceResult<Vec<PipelineRecord>> {
            Err(SourceError::Unavailable("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_passes_through_real_records() {
        let seeded = InMemoryLeadSource::seeded(2025);
        let source = FallbackLeadSource::new(seeded.clone());
        assert_eq!(source.inner().len(), 8);
        assert_eq!(source.name(), "InMemoryLeadSource");

        let records = source.recent_leads(50).await.unwrap();
        assert_eq!(records, seeded.recent_leads(50).await.unwrap());
    }

    #[tokio::test]
    async fn test_empty_source_serves_demo_leads() {
        let source = FallbackLeadSource::new(InMemoryLeadSource::default());
        assert_eq!(source.recent_leads(50).await.unwrap(), demo_leads());
    }

    #[tokio::test]
    async fn test_failing_source_serves_demo_leads() {
        let _ = env_logger::try_init();

        let source = FallbackLeadSource::new(BrokenSource);
        assert_eq!(source.recent_leads(50).await.unwrap(), demo_leads());
    }

    #[tokio::test]
    async fn test_custom_fallback() {
        let custom = demo_leads()[..2].to_vec();
        let source = FallbackLeadSource::with_fallback(BrokenSource, custom.clone());
        assert_eq!(source.recent_leads(50).await.unwrap(), custom);
    }
}
