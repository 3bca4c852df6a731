//! Dashboard configuration
//!
//! Every field has a default, so a config file only needs the values it
//! overrides.

use log::info;
use revenueos_simulator::SimulatorParameters;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardConfig {
    /// Maximum number of records fetched per snapshot
    pub lead_limit: usize,
    /// Cycle length fed into the velocity metric
    pub avg_sales_cycle_days: Decimal,
    /// Serve sample records when the source is empty or failing.
    /// Defaults to on, like the leads API; set it to `false` to surface
    /// store errors and empty pipelines the way the dashboard page does.
    pub fallback_to_demo: bool,
    /// Initial what-if assumptions offered to the simulator view
    pub simulator: SimulatorParameters,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            lead_limit: revenueos_leads::DEFAULT_LEAD_LIMIT,
            avg_sales_cycle_days: dec!(45),
            fallback_to_demo: true,
            simulator: SimulatorParameters::default(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;

        let config = Self::from_json_str(&raw)?;
        info!(
            "Loaded dashboard config from {}: lead_limit={}, avg_sales_cycle_days={}",
            path.display(),
            config.lead_limit,
            config.avg_sales_cycle_days
        );

        Ok(config)
    }
}
