use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DealStatus;
use crate::values::Timestamp;

/// One sales opportunity in the pipeline
///
/// Records are produced by the data source and only read by the analytics
/// functions. Field ranges are not validated here: `probability` is expected
/// in [0, 1] and `deal_size` / `engagement_score` non-negative, but nothing
/// clamps them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineRecord {
    /// Deal amount, currency-agnostic
    pub deal_size: Decimal,
    /// Estimated likelihood of closing (0.0 - 1.0)
    pub probability: Decimal,
    /// Urgency signal, observed range 1-5
    pub urgency: u32,
    /// Engagement signal, observed range 0-100
    pub engagement_score: Decimal,
    pub status: DealStatus,
    /// Only the year and month are used by the forecast
    pub created_at: Timestamp,
}

impl PipelineRecord {
    /// Create an active record with neutral urgency and engagement
    pub fn new(deal_size: Decimal, probability: Decimal, created_at: Timestamp) -> Self {
        Self {
            deal_size,
            probability,
            urgency: 1,
            engagement_score: Decimal::ZERO,
            status: DealStatus::Active,
            created_at,
        }
    }

    /// Builder: Set urgency
    pub fn with_urgency(mut self, urgency: u32) -> Self {
        self.urgency = urgency;
        self
    }

    /// Builder: Set engagement score
    pub fn with_engagement(mut self, engagement_score: Decimal) -> Self {
        self.engagement_score = engagement_score;
        self
    }

    /// Builder: Set status
    pub fn with_status(mut self, status: impl Into<DealStatus>) -> Self {
        self.status = status.into();
        self
    }

    /// Probability-weighted value of this deal, saturating on overflow
    pub fn weighted_value(&self) -> Decimal {
        self.deal_size.saturating_mul(self.probability)
    }
}
