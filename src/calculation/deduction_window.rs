//! Period matching for deduction rows.
//!
//! Deduction sheets scope each row to a period in one of three ways: an
//! explicit date, a bare month number meaning "that month of the query's
//! year", or nothing at all. This module is the single place that rule
//! lives.

use chrono::NaiveDate;

use crate::models::Period;
use crate::source::CellValue;

use super::date_normalizer::normalize_date;

/// Label used for rows that match unconditionally.
const UNDATED_LABEL: &str = "period";

/// Reads a cell as a bare month number, if that is what it holds.
///
/// Month numbers are small integers; checking for them before any date
/// parsing keeps them from being misread as spreadsheet serials.
pub fn as_month_number(cell: &CellValue) -> Option<u32> {
    match cell {
        CellValue::Number(n) if n.fract() == 0.0 && (1.0..=12.0).contains(n) => Some(*n as u32),
        CellValue::Text(s) => match s.trim().parse::<u32>() {
            Ok(m) if (1..=12).contains(&m) => Some(m),
            _ => None,
        },
        _ => None,
    }
}

fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((first, next_first.pred_opt()?))
}

/// Decides whether a deduction row's period cell matches the query
/// period, returning a display label when it does.
///
/// - An explicit date matches when it falls within the period.
/// - A bare month number resolves to that month of the query's year and
///   matches when the month interval intersects the period.
/// - A blank or otherwise unusable cell matches unconditionally — the
///   historical default for legacy rows entered without a period, kept
///   for backward compatibility.
pub fn match_window(cell: &CellValue, period: &Period) -> Option<String> {
    if let Some(month) = as_month_number(cell) {
        let (first, last) = month_bounds(period.query_year(), month)?;
        if first <= period.end && last >= period.start {
            return Some(format!("month {}", month));
        }
        return None;
    }

    if let Some(date) = normalize_date(cell) {
        if period.contains_date(date) {
            return Some(date.format("%Y-%m-%d").to_string());
        }
        return None;
    }

    Some(UNDATED_LABEL.to_string())
}
