//! Revenue projection

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

const MONTHS_PER_YEAR: Decimal = dec!(12);
const MAX_GROWTH: Decimal = dec!(100);

/// Projected revenue for a set of assumptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulatorOutput {
    pub monthly_revenue: Decimal,
    /// Always exactly `monthly_revenue × 12`
    pub yearly_projection: Decimal,
    /// UI growth indicator, clamped to [0, 100]
    pub growth: Decimal,
}

/// Project revenue from win rate, deal size and lead flow
///
/// - `monthly_revenue = win_rate_percent / 100 × avg_deal_size × leads_per_month`
/// - `yearly_projection = monthly_revenue × 12`
/// - `growth = clamp(win_rate_percent × leads_per_month / 10, 0, 100)`
///
/// Sales cycle length does not enter the run-rate. Negative inputs are not
/// rejected and propagate through the revenue figures; products too large
/// for `Decimal` saturate instead of overflowing.
pub fn compute_simulator_output(
    win_rate_percent: Decimal,
    avg_deal_size: Decimal,
    leads_per_month: Decimal,
) -> SimulatorOutput {
    let monthly_revenue = (win_rate_percent / dec!(100))
        .saturating_mul(avg_deal_size)
        .saturating_mul(leads_per_month);
    let yearly_projection = monthly_revenue.saturating_mul(MONTHS_PER_YEAR);
    let growth = (win_rate_percent.saturating_mul(leads_per_month) / dec!(10))
        .clamp(Decimal::ZERO, MAX_GROWTH);

    SimulatorOutput {
        monthly_revenue,
        yearly_projection,
        growth,
    }
}
