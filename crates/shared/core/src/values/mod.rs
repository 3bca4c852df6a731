use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Monetary amount - uses Decimal for precision
/// Currency-agnostic; the analytics never convert between currencies
pub type Money = Decimal;

/// Unnormalized score value (heat, growth, percentages)
pub type Score = Decimal;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;
