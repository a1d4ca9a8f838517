//! Security inquiry cost aggregation.
//!
//! The security log is unstructured: rows mention a supervisor code in
//! whatever column the uploading client used. A supervisor is charged a
//! fixed fee per matching row; there is no itemization beyond the count.

use rust_decimal::Decimal;

use crate::models::{Period, SecurityBreakdown};
use crate::source::{CellValue, RawRow};

use super::date_normalizer::normalize_date;
use super::deduction_window::as_month_number;

/// Finds a row's period indicator: the first bare month number, or the
/// first *text* cell that parses as a date.
///
/// Numeric cells are never date-sniffed here — in an unstructured row a
/// plain amount like `100` would otherwise read as a spreadsheet serial.
fn period_indicator(row: &RawRow, period: &Period) -> Option<bool> {
    for cell in row {
        if let Some(month) = as_month_number(cell) {
            let probe = CellValue::Number(f64::from(month));
            return Some(super::deduction_window::match_window(&probe, period).is_some());
        }
        if matches!(cell, CellValue::Text(_)) {
            if let Some(date) = normalize_date(cell) {
                return Some(period.contains_date(date));
            }
        }
    }
    None
}

/// Counts security inquiries charged to a supervisor within a period.
///
/// A row matches when the supervisor code appears in any of its columns.
/// Rows carrying a recognizable period indicator are window-filtered like
/// the other categories; rows without one count unconditionally.
pub fn aggregate_security_cost(
    supervisor_code: &str,
    period: &Period,
    rows: &[RawRow],
    fee_per_inquiry: Decimal,
) -> SecurityBreakdown {
    let mut inquiry_count: u32 = 0;

    for row in rows {
        let mentions_supervisor = row.iter().any(|cell| cell.as_code() == supervisor_code);
        if !mentions_supervisor {
            continue;
        }

        if let Some(in_window) = period_indicator(row, period) {
            if !in_window {
                continue;
            }
        }

        inquiry_count += 1;
    }

    SecurityBreakdown {
        total: Decimal::from(inquiry_count) * fee_per_inquiry,
        inquiry_count,
        fee_per_inquiry,
    }
}
