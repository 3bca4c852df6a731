//! RevenueOS Core Domain
//!
//! Pure domain types for RevenueOS pipeline analytics.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{DealStatus, PipelineRecord};
pub use values::{Money, Score, Timestamp};
