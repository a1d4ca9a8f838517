//! Tiered commission calculation.
//!
//! The tiered method pays a per-order rate selected by the supervisor's
//! average daily worked hours across the period. Only days that actually
//! have records count toward the average; each such day contributes its
//! summed hours once.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::HoursBand;
use crate::error::{EngineError, EngineResult};
use crate::models::{CommissionDetail, DailyCommissionLine, PerformanceRecord};

/// The result of a tiered commission calculation.
#[derive(Debug, Clone)]
pub struct TieredCommissionResult {
    /// The commission amount: `total_orders * rate_per_order`.
    pub commission: Decimal,
    /// Full arithmetic detail for audit and display.
    pub detail: CommissionDetail,
    /// One line per distinct day with data, priced at the period rate.
    pub daily_breakdown: Vec<DailyCommissionLine>,
}

/// Selects the per-order rate for an average from an ordered band list.
///
/// The first band whose inclusive interval contains the average wins;
/// an average outside every band falls back to the last band's rate.
fn select_rate(bands: &[HoursBand], daily_average_hours: Decimal) -> EngineResult<Decimal> {
    let matched = bands.iter().find(|band| {
        band.min_hours <= daily_average_hours && daily_average_hours <= band.max_hours
    });

    match matched.or_else(|| bands.last()) {
        Some(band) => Ok(band.rate_per_order),
        None => Err(EngineError::CalculationError {
            message: "tiered salary config has no hour bands".to_string(),
        }),
    }
}

/// Computes a tiered commission over filtered performance records.
///
/// Records are grouped by calendar day. The daily average is the mean of
/// per-day hour sums across the distinct days that have at least one
/// record — not total hours over calendar days in the range. The selected
/// rate applies at period level: every breakdown line uses it, so the
/// line commissions sum exactly to the total.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`] when `bands` is empty; a
/// tiered configuration without bands is a configuration defect.
pub fn calculate_tiered_commission(
    bands: &[HoursBand],
    records: &[PerformanceRecord],
) -> EngineResult<TieredCommissionResult> {
    let mut days: BTreeMap<NaiveDate, (Decimal, u64)> = BTreeMap::new();

    for record in records {
        let entry = days.entry(record.date).or_insert((Decimal::ZERO, 0));
        entry.0 += record.hours;
        entry.1 += u64::from(record.orders);
    }

    let days_with_data = days.len() as u32;
    let total_hours: Decimal = days.values().map(|(hours, _)| *hours).sum();
    let total_orders: u64 = days.values().map(|(_, orders)| *orders).sum();

    let daily_average_hours = if days_with_data > 0 {
        total_hours / Decimal::from(days_with_data)
    } else {
        Decimal::ZERO
    };

    let rate_per_order = select_rate(bands, daily_average_hours)?;
    let commission = Decimal::from(total_orders) * rate_per_order;

    let daily_breakdown = days
        .into_iter()
        .map(|(date, (hours, orders))| DailyCommissionLine {
            date,
            orders,
            hours,
            rate_per_order,
            commission: Decimal::from(orders) * rate_per_order,
        })
        .collect();

    Ok(TieredCommissionResult {
        commission,
        detail: CommissionDetail::TieredByHours {
            total_orders,
            total_hours,
            daily_average_hours,
            days_with_data,
            rate_per_order,
        },
        daily_breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn band(min: &str, max: &str, rate: &str) -> HoursBand {
        HoursBand {
            min_hours: dec(min),
            max_hours: dec(max),
            rate_per_order: dec(rate),
        }
    }

    fn record(day: u32, hours: &str, orders: u32) -> PerformanceRecord {
        PerformanceRecord {
            date: date(2025, 6, day),
            worker_code: "W-1".to_string(),
            hours: dec(hours),
            break_minutes: Decimal::ZERO,
            delay: Decimal::ZERO,
            absent: false,
            orders,
            acceptance_rate: Decimal::ZERO,
            debt: Decimal::ZERO,
        }
    }

    /// Five days with per-day hour sums 50..90 average to 70 and pick the
    /// first band.
    #[test]
    fn test_daily_average_over_days_with_data() {
        let bands = vec![band("0", "100", "1.0"), band("101", "200", "1.2")];
        let records = vec![
            record(1, "50", 100),
            record(2, "60", 100),
            record(3, "70", 100),
            record(4, "80", 100),
            record(5, "90", 100),
        ];

        let result = calculate_tiered_commission(&bands, &records).unwrap();

        match result.detail {
            CommissionDetail::TieredByHours {
                total_orders,
                total_hours,
                daily_average_hours,
                days_with_data,
                rate_per_order,
            } => {
                assert_eq!(total_orders, 500);
                assert_eq!(total_hours, dec("350"));
                assert_eq!(daily_average_hours, dec("70"));
                assert_eq!(days_with_data, 5);
                assert_eq!(rate_per_order, dec("1.0"));
            }
            other => panic!("Expected TieredByHours detail, got {:?}", other),
        }
        assert_eq!(result.commission, dec("500"));
    }

    #[test]
    fn test_multiple_records_per_day_sum_before_averaging() {
        let bands = vec![band("0", "100", "1.0")];
        // Two workers on the same day: the day contributes 50 once.
        let records = vec![
            record(1, "30", 40),
            PerformanceRecord {
                worker_code: "W-2".to_string(),
                ..record(1, "20", 60)
            },
        ];

        let result = calculate_tiered_commission(&bands, &records).unwrap();

        match result.detail {
            CommissionDetail::TieredByHours {
                daily_average_hours,
                days_with_data,
                total_orders,
                ..
            } => {
                assert_eq!(daily_average_hours, dec("50"));
                assert_eq!(days_with_data, 1);
                assert_eq!(total_orders, 100);
            }
            other => panic!("Expected TieredByHours detail, got {:?}", other),
        }
    }

    #[test]
    fn test_average_outside_bands_uses_last_band_rate() {
        let bands = vec![band("0", "40", "1.0"), band("41", "60", "1.2")];
        let records = vec![record(1, "80", 10)];

        let result = calculate_tiered_commission(&bands, &records).unwrap();

        match result.detail {
            CommissionDetail::TieredByHours { rate_per_order, .. } => {
                assert_eq!(rate_per_order, dec("1.2"));
            }
            other => panic!("Expected TieredByHours detail, got {:?}", other),
        }
        assert_eq!(result.commission, dec("12"));
    }

    #[test]
    fn test_band_bounds_are_inclusive() {
        let bands = vec![band("0", "40", "1.0"), band("41", "60", "1.5")];

        let at_upper = calculate_tiered_commission(&bands, &[record(1, "40", 10)]).unwrap();
        assert_eq!(at_upper.commission, dec("10"));

        let at_lower = calculate_tiered_commission(&bands, &[record(1, "41", 10)]).unwrap();
        assert_eq!(at_lower.commission, dec("15"));
    }

    #[test]
    fn test_empty_bands_is_an_error() {
        let result = calculate_tiered_commission(&[], &[record(1, "50", 10)]);
        match result {
            Err(EngineError::CalculationError { message }) => {
                assert!(message.contains("hour bands"));
            }
            other => panic!("Expected CalculationError, got {:?}", other),
        }
    }

    #[test]
    fn test_no_records_yields_zero_commission() {
        let bands = vec![band("0", "100", "1.0")];
        let result = calculate_tiered_commission(&bands, &[]).unwrap();

        assert_eq!(result.commission, Decimal::ZERO);
        assert!(result.daily_breakdown.is_empty());
    }

    #[test]
    fn test_breakdown_lines_sum_to_commission() {
        let bands = vec![band("0", "100", "1.2")];
        let records = vec![
            record(1, "50", 30),
            record(2, "60", 45),
            record(3, "70", 25),
        ];

        let result = calculate_tiered_commission(&bands, &records).unwrap();

        let line_sum: Decimal = result.daily_breakdown.iter().map(|l| l.commission).sum();
        assert_eq!(line_sum, result.commission);
        assert_eq!(result.daily_breakdown.len(), 3);
        assert!(
            result
                .daily_breakdown
                .iter()
                .all(|l| l.rate_per_order == dec("1.2"))
        );
    }

    #[test]
    fn test_breakdown_is_ordered_by_date() {
        let bands = vec![band("0", "100", "1.0")];
        let records = vec![
            record(15, "50", 10),
            record(3, "50", 10),
            record(9, "50", 10),
        ];

        let result = calculate_tiered_commission(&bands, &records).unwrap();

        let dates: Vec<NaiveDate> = result.daily_breakdown.iter().map(|l| l.date).collect();
        assert_eq!(
            dates,
            vec![date(2025, 6, 3), date(2025, 6, 9), date(2025, 6, 15)]
        );
    }
}
