//! RevenueOS Analytics
//!
//! Pure aggregation functions that turn a list of pipeline records into
//! business metrics. Every call recomputes from the full input; there is no
//! cached or incremental state.
//!
//! ```text
//! &[PipelineRecord] ──► expected_revenue / pipeline_value / velocity / win_rate_percent
//!                   ──► monthly_forecast ──► Vec<ForecastBucket>
//!        record     ──► heat_score ──► detect_risk ──► RiskLevel
//! ```
//!
//! No input validation happens here. Out-of-range probabilities or negative
//! deal sizes flow through the arithmetic unchanged.

pub mod forecast;
pub mod revenue;
pub mod risk;

pub use forecast::{ForecastBucket, fill_month_gaps, month_key, monthly_forecast};
pub use revenue::{expected_revenue, pipeline_value, velocity, win_rate_percent};
pub use risk::{
    HIGH_RISK_HEAT_THRESHOLD, LOW_RISK_HEAT_THRESHOLD, RiskLevel, count_risk_alerts, detect_risk,
    heat_score,
};
