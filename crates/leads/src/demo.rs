//! Sample pipeline records
//!
//! `demo_leads` is what the product shows when the store is empty or
//! unreachable. `seed_leads` reproduces the records used to seed a fresh
//! database.

use chrono::{Duration, TimeZone, Utc};
use revenueos_core::{DealStatus, PipelineRecord, Timestamp};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(year: i32, month: u32, day: u32) -> Timestamp {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn lead(
    deal_size: Decimal,
    probability: Decimal,
    urgency: u32,
    engagement_score: Decimal,
    status: DealStatus,
    created_at: Timestamp,
) -> PipelineRecord {
    PipelineRecord {
        deal_size,
        probability,
        urgency,
        engagement_score,
        status,
        created_at,
    }
}

/// The fixed five sample records
pub fn demo_leads() -> Vec<PipelineRecord> {
    vec![
        lead(dec!(12000), dec!(0.35), 2, dec!(55), DealStatus::Active, date(2026, 1, 10)),
        lead(dec!(18000), dec!(0.6), 4, dec!(72), DealStatus::Won, date(2026, 1, 19)),
        lead(dec!(9000), dec!(0.25), 3, dec!(40), DealStatus::Stalled, date(2026, 2, 3)),
        lead(dec!(26000), dec!(0.45), 5, dec!(79), DealStatus::Active, date(2026, 2, 15)),
        lead(dec!(15000), dec!(0.5), 3, dec!(67), DealStatus::Active, date(2026, 3, 5)),
    ]
}

/// Deterministic seed records for `year`
///
/// Record `i` (0-based) gets deal size `8000 + 3500i`, probability
/// `0.25 + 0.15 × (i mod 4)`, urgency `(i mod 5) + 1`, engagement `40 + 6i`,
/// and is created on day `5 + i` of month `(i mod 6) + 1`, rolling over
/// into the next month when the day overflows. Every fifth record is
/// stalled; of the rest, every third is won.
pub fn seed_leads(year: i32, count: usize) -> Vec<PipelineRecord> {
    (0..count)
        .map(|i| {
            let n = Decimal::from(i);
            let month = (i % 6) as u32 + 1;
            let created_at = date(year, month, 1) + Duration::days(4 + i as i64);

            let status = if i % 5 == 0 {
                DealStatus::Stalled
            } else if i % 3 == 0 {
                DealStatus::Won
            } else {
                DealStatus::Active
            };

            lead(
                dec!(8000) + n * dec!(3500),
                dec!(0.25) + Decimal::from(i % 4) * dec!(0.15),
                (i % 5) as u32 + 1,
                dec!(40) + n * dec!(6),
                status,
                created_at,
            )
        })
        .collect()
}
