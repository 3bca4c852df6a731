//! RevenueOS What-If Simulator
//!
//! Projects monthly and yearly revenue from four business assumptions.
//! The caller owns the parameters and recomputes on every change:
//!
//! ```rust,ignore
//! use revenueos_simulator::{ParameterKey, SimulatorParameters};
//!
//! let mut params = SimulatorParameters::default();
//! params.set(ParameterKey::WinRate, dec!(40));
//!
//! let output = params.output();
//! ```

pub mod output;
pub mod parameters;

pub use output::{SimulatorOutput, compute_simulator_output};
pub use parameters::{ParameterKey, SimulatorParameters, SliderBounds};
