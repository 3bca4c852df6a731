//! Lead heat scoring and risk classification

use revenueos_core::{PipelineRecord, Score};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Heat below this is high risk
pub const HIGH_RISK_HEAT_THRESHOLD: Decimal = dec!(45);

/// Heat at or above this is low risk
pub const LOW_RISK_HEAT_THRESHOLD: Decimal = dec!(70);

const PROBABILITY_WEIGHT: Decimal = dec!(50);
const URGENCY_WEIGHT: Decimal = dec!(3);
const ENGAGEMENT_WEIGHT: Decimal = dec!(2);

/// Three-tier risk label for a single deal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
            RiskLevel::Low => "low",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Composite heat score
///
/// `probability × 50 + urgency × 3 + engagement_score × 2`. Not normalized:
/// treat it as a relative signal, not a percentage. Saturates on overflow.
pub fn heat_score(record: &PipelineRecord) -> Score {
    record
        .probability
        .saturating_mul(PROBABILITY_WEIGHT)
        .saturating_add(Decimal::from(record.urgency).saturating_mul(URGENCY_WEIGHT))
        .saturating_add(record.engagement_score.saturating_mul(ENGAGEMENT_WEIGHT))
}

/// Classify a deal's risk from its status and heat score
///
/// A stalled deal is always high risk, whatever its heat.
pub fn detect_risk(record: &PipelineRecord) -> RiskLevel {
    let heat = heat_score(record);

    if record.status.is_stalled() || heat < HIGH_RISK_HEAT_THRESHOLD {
        RiskLevel::High
    } else if heat < LOW_RISK_HEAT_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Number of deals classified as high risk
pub fn count_risk_alerts(records: &[PipelineRecord]) -> usize {
    records
        .iter()
        .filter(|r| detect_risk(r) == RiskLevel::High)
        .count()
}
