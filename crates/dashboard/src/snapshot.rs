//! Dashboard metrics snapshot

use revenueos_analytics::{
    ForecastBucket, count_risk_alerts, expected_revenue, monthly_forecast, pipeline_value,
    velocity, win_rate_percent,
};
use revenueos_core::{Money, PipelineRecord, Score};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All dashboard metrics, computed from one record list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub record_count: usize,
    /// Unweighted sum of deal sizes
    pub pipeline_value: Money,
    pub expected_revenue: Money,
    pub win_rate_percent: Score,
    pub velocity: Money,
    /// Number of high-risk deals
    pub risk_alerts: usize,
    pub forecast: Vec<ForecastBucket>,
}

impl DashboardSnapshot {
    pub fn from_records(records: &[PipelineRecord], avg_sales_cycle_days: Decimal) -> Self {
        Self {
            record_count: records.len(),
            pipeline_value: pipeline_value(records),
            expected_revenue: expected_revenue(records),
            win_rate_percent: win_rate_percent(records),
            velocity: velocity(records, avg_sales_cycle_days),
            risk_alerts: count_risk_alerts(records),
            forecast: monthly_forecast(records),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
