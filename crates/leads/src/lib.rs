//! RevenueOS Lead Retrieval
//!
//! Implementations of the `LeadSource` port plus the sample data the product
//! shows when the real store has nothing to offer.
//!
//! - **Adapters**: in-memory records, JSON file store
//! - **Sample data**: fixed demo leads, deterministic seed generator
//! - **Fallback**: wraps any source and substitutes demo leads on error or
//!   empty result
//!
//! The fallback is a property of retrieval only. The analytics engine
//! processes whatever list it receives.

pub mod adapters;
pub mod demo;
pub mod fallback;

pub use adapters::{InMemoryLeadSource, JsonFileLeadSource};
pub use demo::{demo_leads, seed_leads};
pub use fallback::FallbackLeadSource;

/// Default number of records fetched per read
pub const DEFAULT_LEAD_LIMIT: usize = 50;
