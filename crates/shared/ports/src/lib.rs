//! RevenueOS Ports
//!
//! Port definitions (traits) for RevenueOS.
//! These define the boundary between the analytics and the data store.

mod error;
mod lead_source;

pub use error::{SourceError, SourceResult};
pub use lead_source::LeadSource;
