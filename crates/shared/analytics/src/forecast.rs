//! Monthly revenue forecast
//!
//! Buckets probability-weighted deal value by the calendar month of
//! `created_at`. Month keys are `"{year}-{month:02}"`, so lexicographic order
//! of the keys is chronological order.

use chrono::Datelike;
use revenueos_core::{Money, PipelineRecord, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregated expected revenue for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastBucket {
    /// Month key, e.g. `"2026-03"`
    pub month: String,
    pub revenue: Money,
}

impl ForecastBucket {
    pub fn new(month: impl Into<String>, revenue: Money) -> Self {
        Self {
            month: month.into(),
            revenue,
        }
    }
}

/// Month key for a timestamp, evaluated in UTC
pub fn month_key(timestamp: &Timestamp) -> String {
    format!("{:04}-{:02}", timestamp.year(), timestamp.month())
}

/// Expected revenue per month, ascending by month key
///
/// Records sharing a month are summed into one bucket. Months without
/// records are absent; use [`fill_month_gaps`] for a continuous series.
pub fn monthly_forecast(records: &[PipelineRecord]) -> Vec<ForecastBucket> {
    let mut by_month: BTreeMap<String, Money> = BTreeMap::new();

    for record in records {
        let revenue = by_month.entry(month_key(&record.created_at)).or_default();
        *revenue = revenue.saturating_add(record.weighted_value());
    }

    by_month
        .into_iter()
        .map(|(month, revenue)| ForecastBucket { month, revenue })
        .collect()
}

/// Insert zero-revenue buckets for missing months between the first and
/// last month of a forecast
///
/// Buckets whose key cannot be parsed are left out of the gap calculation;
/// if none parse, the input is returned unchanged.
pub fn fill_month_gaps(buckets: &[ForecastBucket]) -> Vec<ForecastBucket> {
    let mut by_month: BTreeMap<(i32, u32), Money> = BTreeMap::new();
    for bucket in buckets {
        if let Some(key) = parse_month_key(&bucket.month) {
            let revenue = by_month.entry(key).or_default();
            *revenue = revenue.saturating_add(bucket.revenue);
        }
    }

    let (Some(&first), Some(&last)) = (by_month.keys().next(), by_month.keys().next_back()) else {
        return buckets.to_vec();
    };

    let mut filled = Vec::new();
    let mut cursor = first;
    while cursor <= last {
        let revenue = by_month.get(&cursor).copied().unwrap_or(Decimal::ZERO);
        filled.push(ForecastBucket {
            month: format!("{:04}-{:02}", cursor.0, cursor.1),
            revenue,
        });
        cursor = next_month(cursor);
    }

    filled
}

fn parse_month_key(key: &str) -> Option<(i32, u32)> {
    let (year, month) = key.split_once('-')?;
    let year = year.parse::<i32>().ok()?;
    let month = month.parse::<u32>().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}

fn next_month((year, month): (i32, u32)) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}
