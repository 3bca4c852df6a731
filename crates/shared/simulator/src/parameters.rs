//! Simulator parameters
//!
//! Held by the caller, passed by value into the projection. There is no
//! shared store: updating a parameter returns nothing and touches only the
//! caller's copy.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::output::{SimulatorOutput, compute_simulator_output};

/// Which assumption a UI control adjusts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterKey {
    WinRate,
    AvgDealSize,
    LeadsPerMonth,
    SalesCycle,
}

impl ParameterKey {
    pub const ALL: [ParameterKey; 4] = [
        ParameterKey::WinRate,
        ParameterKey::AvgDealSize,
        ParameterKey::LeadsPerMonth,
        ParameterKey::SalesCycle,
    ];

    /// Slider range offered for this parameter
    pub fn bounds(&self) -> SliderBounds {
        match self {
            ParameterKey::WinRate => SliderBounds::new(dec!(1), dec!(100), dec!(1)),
            ParameterKey::AvgDealSize => SliderBounds::new(dec!(1000), dec!(50000), dec!(500)),
            ParameterKey::LeadsPerMonth => SliderBounds::new(dec!(1), dec!(100), dec!(1)),
            ParameterKey::SalesCycle => SliderBounds::new(dec!(7), dec!(180), dec!(1)),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ParameterKey::WinRate => "Win Rate (%)",
            ParameterKey::AvgDealSize => "Avg Deal Size",
            ParameterKey::LeadsPerMonth => "Leads per month",
            ParameterKey::SalesCycle => "Sales Cycle (days)",
        }
    }
}

/// Inclusive range and step of a parameter control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderBounds {
    pub min: Decimal,
    pub max: Decimal,
    pub step: Decimal,
}

impl SliderBounds {
    pub fn new(min: Decimal, max: Decimal, step: Decimal) -> Self {
        Self { min, max, step }
    }

    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp a value into the range
    pub fn clamp(&self, value: Decimal) -> Decimal {
        value.clamp(self.min, self.max)
    }
}

/// The four what-if assumptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulatorParameters {
    /// Percentage of leads that close (0 - 100)
    pub win_rate_percent: Decimal,
    pub avg_deal_size: Decimal,
    pub leads_per_month: Decimal,
    /// Collected for display; the projection does not use it
    pub sales_cycle_days: Decimal,
}

impl Default for SimulatorParameters {
    fn default() -> Self {
        Self {
            win_rate_percent: dec!(30),
            avg_deal_size: dec!(12000),
            leads_per_month: dec!(20),
            sales_cycle_days: dec!(45),
        }
    }
}

impl SimulatorParameters {
    pub fn get(&self, key: ParameterKey) -> Decimal {
        match key {
            ParameterKey::WinRate => self.win_rate_percent,
            ParameterKey::AvgDealSize => self.avg_deal_size,
            ParameterKey::LeadsPerMonth => self.leads_per_month,
            ParameterKey::SalesCycle => self.sales_cycle_days,
        }
    }

    /// Set a parameter. The value is stored as given, bounds are not enforced.
    pub fn set(&mut self, key: ParameterKey, value: Decimal) {
        match key {
            ParameterKey::WinRate => self.win_rate_percent = value,
            ParameterKey::AvgDealSize => self.avg_deal_size = value,
            ParameterKey::LeadsPerMonth => self.leads_per_month = value,
            ParameterKey::SalesCycle => self.sales_cycle_days = value,
        }
    }

    /// Builder: Set a parameter
    pub fn with(mut self, key: ParameterKey, value: Decimal) -> Self {
        self.set(key, value);
        self
    }

    /// Recompute the projection for the current assumptions
    pub fn output(&self) -> SimulatorOutput {
        compute_simulator_output(
            self.win_rate_percent,
            self.avg_deal_size,
            self.leads_per_month,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = SimulatorParameters::default();

        assert_eq!(params.get(ParameterKey::WinRate), dec!(30));
        assert_eq!(params.get(ParameterKey::AvgDealSize), dec!(12000));
        assert_eq!(params.get(ParameterKey::LeadsPerMonth), dec!(20));
        assert_eq!(params.get(ParameterKey::SalesCycle), dec!(45));
        assert_eq!(params.output().monthly_revenue, dec!(72000));
    }

    #[test]
    fn test_set_recomputes() {
        let mut params = SimulatorParameters::default();
        params.set(ParameterKey::LeadsPerMonth, dec!(40));

        let output = params.output();
        assert_eq!(output.monthly_revenue, dec!(144000));
        assert_eq!(output.growth, dec!(100));
    }

    #[test]
    fn test_sales_cycle_does_not_change_output() {
        let base = SimulatorParameters::default();
        let slow = base.with(ParameterKey::SalesCycle, dec!(180));

        assert_eq!(slow.sales_cycle_days, dec!(180));
        assert_eq!(base.output(), slow.output());
    }

    #[test]
    fn test_set_does_not_clamp() {
        let params = SimulatorParameters::default().with(ParameterKey::WinRate, dec!(250));

        assert_eq!(params.win_rate_percent, dec!(250));
        assert!(!ParameterKey::WinRate.bounds().contains(dec!(250)));
        assert_eq!(ParameterKey::WinRate.bounds().clamp(dec!(250)), dec!(100));
    }

    #[test]
    fn test_slider_bounds() {
        let deal = ParameterKey::AvgDealSize.bounds();
        assert_eq!(deal.min, dec!(1000));
        assert_eq!(deal.max, dec!(50000));
        assert_eq!(deal.step, dec!(500));

        let cycle = ParameterKey::SalesCycle.bounds();
        assert!(cycle.contains(dec!(7)));
        assert!(!cycle.contains(dec!(6)));

        for key in ParameterKey::ALL {
            let bounds = key.bounds();
            assert!(bounds.contains(SimulatorParameters::default().get(key)));
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(ParameterKey::WinRate.label(), "Win Rate (%)");
        assert_eq!(ParameterKey::SalesCycle.label(), "Sales Cycle (days)");

        let labels: std::collections::HashSet<_> =
            ParameterKey::ALL.iter().map(ParameterKey::label).collect();
        assert_eq!(labels.len(), ParameterKey::ALL.len());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let params: SimulatorParameters = serde_json::from_str(r#"{"winRatePercent": 50}"#).unwrap();
        assert_eq!(params.win_rate_percent, dec!(50));
        assert_eq!(params.leads_per_month, dec!(20));
    }
}
