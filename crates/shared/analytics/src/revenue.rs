//! Pipeline value metrics

use revenueos_core::{Money, PipelineRecord, Score};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Probability-weighted value of the whole pipeline
///
/// Σ `deal_size × probability`. Zero for an empty pipeline.
/// Saturates at `Decimal::MAX`/`Decimal::MIN` instead of overflowing.
pub fn expected_revenue(records: &[PipelineRecord]) -> Money {
    records
        .iter()
        .map(PipelineRecord::weighted_value)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Raw pipeline value: Σ `deal_size`, unweighted, every status included
pub fn pipeline_value(records: &[PipelineRecord]) -> Money {
    records
        .iter()
        .map(|r| r.deal_size)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Sales velocity
///
/// `qualified × pipeline_value / avg_sales_cycle_days`, where `qualified`
/// counts records not marked lost and `pipeline_value` includes lost deals.
/// Returns zero for an empty pipeline or a non-positive cycle length.
pub fn velocity(records: &[PipelineRecord], avg_sales_cycle_days: Decimal) -> Money {
    if records.is_empty() || avg_sales_cycle_days <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let qualified = records.iter().filter(|r| !r.status.is_lost()).count();
    let pipeline = pipeline_value(records);

    let throughput = Decimal::from(qualified).saturating_mul(pipeline);
    throughput
        .checked_div(avg_sales_cycle_days)
        .unwrap_or(if throughput.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        })
}

/// Share of won deals as a percentage (0 - 100)
pub fn win_rate_percent(records: &[PipelineRecord]) -> Score {
    if records.is_empty() {
        return Decimal::ZERO;
    }

    let won = records.iter().filter(|r| r.status.is_won()).count();
    Decimal::from(won) / Decimal::from(records.len()) * dec!(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(deal_size: Decimal, probability: Decimal, status: &str) -> PipelineRecord {
        PipelineRecord::new(
            deal_size,
            probability,
            Utc.with_ymd_and_hms(2026, 1, 10, 0, 0, 0).unwrap(),
        )
        .with_status(status)
    }

    #[test]
    fn test_expected_revenue_single_record() {
        let records = vec![record(dec!(10000), dec!(0.5), "active")];
        assert_eq!(expected_revenue(&records), dec!(5000));
    }

    #[test]
    fn test_expected_revenue_sums_weighted_values() {
        let records = vec![
            record(dec!(12000), dec!(0.35), "active"),
            record(dec!(18000), dec!(0.6), "won"),
            record(dec!(9000), dec!(0.25), "lost"),
        ];
        // 4200 + 10800 + 2250
        assert_eq!(expected_revenue(&records), dec!(17250));
    }

    #[test]
    fn test_empty_pipeline() {
        assert_eq!(expected_revenue(&[]), Decimal::ZERO);
        assert_eq!(pipeline_value(&[]), Decimal::ZERO);
        assert_eq!(win_rate_percent(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_velocity_empty_or_bad_cycle_is_zero() {
        let records = vec![record(dec!(10000), dec!(0.5), "active")];

        assert_eq!(velocity(&[], dec!(45)), Decimal::ZERO);
        assert_eq!(velocity(&records, Decimal::ZERO), Decimal::ZERO);
        assert_eq!(velocity(&records, dec!(-10)), Decimal::ZERO);
    }

    #[test]
    fn test_velocity_counts_lost_value_but_not_lost_deals() {
        let records = vec![
            record(dec!(20000), dec!(0.5), "active"),
            record(dec!(10000), dec!(0.9), "won"),
            record(dec!(15000), dec!(0.1), "lost"),
        ];

        // qualified = 2, pipeline = 45000 (lost included)
        assert_eq!(velocity(&records, dec!(30)), dec!(3000));
    }

    #[test]
    fn test_velocity_monotonic_in_pipeline_and_qualified() {
        let base = vec![
            record(dec!(10000), dec!(0.5), "active"),
            record(dec!(5000), dec!(0.5), "lost"),
        ];
        let base_velocity = velocity(&base, dec!(45));

        // Larger deal, same qualified count
        let mut bigger = base.clone();
        bigger[0].deal_size = dec!(20000);
        assert!(velocity(&bigger, dec!(45)) >= base_velocity);

        // Same value, one more qualified deal
        let mut requalified = base.clone();
        requalified[1].status = "stalled".into();
        assert!(velocity(&requalified, dec!(45)) >= base_velocity);
    }

    #[test]
    fn test_win_rate() {
        let records = vec![
            record(dec!(1000), dec!(0.5), "won"),
            record(dec!(1000), dec!(0.5), "active"),
            record(dec!(1000), dec!(0.5), "lost"),
            record(dec!(1000), dec!(0.5), "active"),
        ];
        assert_eq!(win_rate_percent(&records), dec!(25));
    }

    #[test]
    fn test_extreme_values_saturate() {
        let huge = vec![
            record(Decimal::MAX, dec!(2), "active"),
            record(Decimal::MAX, dec!(0.5), "won"),
        ];
        assert_eq!(expected_revenue(&huge), Decimal::MAX);
        assert_eq!(pipeline_value(&huge), Decimal::MAX);
        assert_eq!(velocity(&huge, dec!(45)), Decimal::MAX / dec!(45));

        let negative = vec![record(Decimal::MIN, dec!(3), "active"); 3];
        assert_eq!(expected_revenue(&negative), Decimal::MIN);
        assert_eq!(pipeline_value(&negative), Decimal::MIN);
    }

    #[test]
    fn test_velocity_saturates_on_tiny_cycle() {
        let records = vec![record(dec!(1000000000000000000000), dec!(0.5), "active"); 100];
        assert_eq!(velocity(&records, dec!(0.0000001)), Decimal::MAX);
    }

    #[test]
    fn test_out_of_range_input_is_not_clamped() {
        let records = vec![record(dec!(1000), dec!(1.5), "active")];
        assert_eq!(expected_revenue(&records), dec!(1500));
    }
}
