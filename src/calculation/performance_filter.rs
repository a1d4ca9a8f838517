//! Performance row filtering and per-worker aggregation.
//!
//! This module scans raw performance rows, normalizes their dates, keeps
//! the rows belonging to a worker set and date range, and aggregates the
//! kept records per worker. Rows that cannot be attributed or dated are
//! skipped, never fatal.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{PerformanceRecord, Period, WorkerPerformance};
use crate::source::schema::PerformanceRow;
use crate::source::{CellValue, RawRow};

use super::date_normalizer::normalize_date;

/// Dates before this are treated as corrupted serials and rejected.
fn plausible_min() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid bound")
}

/// Dates after this are treated as corrupted serials and rejected.
fn plausible_max() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 12, 31).expect("valid bound")
}

/// Markers that count as "absent" in the free-text absence column.
///
/// The column is free text filled by hand, so absence detection is an
/// explicit allow-list rather than any kind of boolean cast.
const ABSENT_MARKERS: [&str; 3] = ["نعم", "1", "yes"];

fn is_absent_marker(cell: &CellValue) -> bool {
    let code = cell.as_code().to_lowercase();
    ABSENT_MARKERS.iter().any(|marker| code == *marker)
}

/// Normalizes an acceptance-rate cell to a percentage in `[0, 100]`.
///
/// The source alternates between encoding 95% as `95` and as `0.95`;
/// values in `(0, 1]` are scaled up. Zero stays zero and marks a record
/// with no acceptance figure.
fn normalize_acceptance(cell: &CellValue) -> Decimal {
    let value = cell.as_decimal();
    if value > Decimal::ZERO && value <= Decimal::ONE {
        value * Decimal::from(100)
    } else {
        value
    }
}

/// Filters raw performance rows down to typed records for a worker set
/// and period.
///
/// A row is kept when all of the following hold:
/// - its worker code is in `worker_codes`;
/// - its date cell normalizes to a calendar date;
/// - that date is plausible (2020 through 2030, defending against
///   corrupted serials);
/// - that date lies within the period, both ends inclusive.
///
/// Numeric fields of kept rows parse defensively: missing or non-numeric
/// cells become zero.
pub fn filter_records(
    worker_codes: &HashSet<String>,
    period: &Period,
    rows: &[RawRow],
) -> Vec<PerformanceRecord> {
    let mut records = Vec::new();

    for raw in rows {
        let Some(row) = PerformanceRow::from_row(raw) else {
            continue;
        };

        if !worker_codes.contains(&row.worker_code) {
            continue;
        }

        let Some(date) = normalize_date(&row.date) else {
            debug!(worker = %row.worker_code, "skipping row with unparseable date");
            continue;
        };

        if date < plausible_min() || date > plausible_max() {
            debug!(worker = %row.worker_code, %date, "skipping row with implausible date");
            continue;
        }

        if !period.contains_date(date) {
            continue;
        }

        records.push(PerformanceRecord {
            date,
            worker_code: row.worker_code,
            hours: row.hours.as_decimal(),
            break_minutes: row.break_minutes.as_decimal(),
            delay: row.delay.as_decimal(),
            absent: is_absent_marker(&row.absent),
            orders: row.orders.as_count(),
            acceptance_rate: normalize_acceptance(&row.acceptance_rate),
            debt: row.debt.as_decimal(),
        });
    }

    records
}

/// Aggregates filtered records per worker.
///
/// Sums hours, orders, breaks, delay, and debt; counts absent days; and
/// averages the acceptance rate over records with a non-zero acceptance
/// figure only. A worker with no qualifying records gets acceptance `0`.
///
/// Output is ordered by worker code so identical inputs produce
/// identical output.
pub fn aggregate_by_worker(records: &[PerformanceRecord]) -> Vec<WorkerPerformance> {
    struct Accumulator {
        total_hours: Decimal,
        total_orders: u64,
        total_break_minutes: Decimal,
        total_delay: Decimal,
        days_absent: u32,
        days_recorded: u32,
        total_debt: Decimal,
        acceptance_sum: Decimal,
        acceptance_count: u32,
    }

    let mut by_worker: BTreeMap<String, Accumulator> = BTreeMap::new();

    for record in records {
        let entry = by_worker
            .entry(record.worker_code.clone())
            .or_insert_with(|| Accumulator {
                total_hours: Decimal::ZERO,
                total_orders: 0,
                total_break_minutes: Decimal::ZERO,
                total_delay: Decimal::ZERO,
                days_absent: 0,
                days_recorded: 0,
                total_debt: Decimal::ZERO,
                acceptance_sum: Decimal::ZERO,
                acceptance_count: 0,
            });

        entry.total_hours += record.hours;
        entry.total_orders += u64::from(record.orders);
        entry.total_break_minutes += record.break_minutes;
        entry.total_delay += record.delay;
        entry.total_debt += record.debt;
        entry.days_recorded += 1;
        if record.absent {
            entry.days_absent += 1;
        }
        if record.acceptance_rate > Decimal::ZERO {
            entry.acceptance_sum += record.acceptance_rate;
            entry.acceptance_count += 1;
        }
    }

    by_worker
        .into_iter()
        .map(|(worker_code, acc)| {
            let acceptance_rate = if acc.acceptance_count > 0 {
                acc.acceptance_sum / Decimal::from(acc.acceptance_count)
            } else {
                Decimal::ZERO
            };

            WorkerPerformance {
                worker_code,
                total_hours: acc.total_hours,
                total_orders: acc.total_orders,
                total_break_minutes: acc.total_break_minutes,
                total_delay: acc.total_delay,
                days_absent: acc.days_absent,
                days_recorded: acc.days_recorded,
                total_debt: acc.total_debt,
                acceptance_rate,
            }
        })
        .collect()
}
