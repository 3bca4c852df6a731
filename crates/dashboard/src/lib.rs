//! RevenueOS Dashboard
//!
//! Wires a `LeadSource` to the analytics engine:
//!
//! ```text
//! LeadSource ──► (FallbackLeadSource) ──► Vec<PipelineRecord>
//!                                                │
//!                                                ▼
//!                                     DashboardSnapshot::from_records
//!                                                │
//!                                                ▼
//!                                    pipeline / expected / win rate /
//!                                    velocity / risk alerts / forecast
//! ```
//!
//! Nothing is cached: each `snapshot()` call refetches and recomputes.

pub mod config;
pub mod error;
pub mod snapshot;

pub use config::DashboardConfig;
pub use error::{Error, Result};
pub use snapshot::DashboardSnapshot;

use log::debug;
use revenueos_leads::FallbackLeadSource;
use revenueos_ports::LeadSource;
use revenueos_simulator::{SimulatorOutput, SimulatorParameters};
use std::sync::Arc;

pub struct Dashboard {
    config: DashboardConfig,
    source: Arc<dyn LeadSource>,
}

impl Dashboard {
    /// Create a dashboard over `source`, wrapped in the demo fallback when
    /// the config asks for it
    pub fn new(config: DashboardConfig, source: Arc<dyn LeadSource>) -> Self {
        let source: Arc<dyn LeadSource> = if config.fallback_to_demo {
            Arc::new(FallbackLeadSource::new(source))
        } else {
            source
        };

        Self { config, source }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Fetch the latest records and compute every metric
    pub async fn snapshot(&self) -> Result<DashboardSnapshot> {
        let records = self.source.recent_leads(self.config.lead_limit).await?;
        let snapshot = DashboardSnapshot::from_records(&records, self.config.avg_sales_cycle_days);

        debug!(
            "Snapshot from {}: records={}, expected_revenue={}, velocity={}, risk_alerts={}",
            self.source.name(),
            snapshot.record_count,
            snapshot.expected_revenue,
            snapshot.velocity,
            snapshot.risk_alerts
        );

        Ok(snapshot)
    }

    /// Starting parameters for the what-if view
    pub fn simulator_defaults(&self) -> SimulatorParameters {
        self.config.simulator
    }

    /// Project revenue for caller-held parameters
    pub fn simulate(&self, params: &SimulatorParameters) -> SimulatorOutput {
        params.output()
    }
}
