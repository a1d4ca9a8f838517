//! Cash deduction aggregation (advances and generic deductions).
//!
//! Both cash categories share one shape: rows carrying a supervisor code,
//! a period indicator, an optional reason, and an amount. The aggregator
//! itemizes every matching row so the category total can always be
//! reconciled line by line.

use rust_decimal::Decimal;

use crate::models::{CategoryBreakdown, DeductionLine, Period};
use crate::source::RawRow;
use crate::source::schema::CashDeductionRow;

use super::deduction_window::match_window;

/// Aggregates one cash deduction category for a supervisor and period.
///
/// Rows are included per the shared window rule: explicit dates must fall
/// inside the period, bare month numbers must intersect it, and undated
/// rows always count. The returned total equals the exact sum of the
/// itemized lines.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::aggregate_cash_deductions;
/// use salary_engine::models::Period;
/// use salary_engine::source::CellValue;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let period = Period::new(
///     NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
/// ).unwrap();
///
/// let rows = vec![vec![
///     CellValue::Text("SUP-001".to_string()),
///     CellValue::Text("2025-06-10".to_string()),
///     CellValue::Text("fuel advance".to_string()),
///     CellValue::Number(300.0),
/// ]];
///
/// let breakdown = aggregate_cash_deductions("SUP-001", &period, &rows);
/// assert_eq!(breakdown.total, Decimal::from(300));
/// assert_eq!(breakdown.items.len(), 1);
/// ```
pub fn aggregate_cash_deductions(
    supervisor_code: &str,
    period: &Period,
    rows: &[RawRow],
) -> CategoryBreakdown {
    let mut items = Vec::new();
    let mut total = Decimal::ZERO;

    for raw in rows {
        let Some(row) = CashDeductionRow::from_row(raw) else {
            continue;
        };

        if row.supervisor_code != supervisor_code {
            continue;
        }

        let Some(period_label) = match_window(&row.period, period) else {
            continue;
        };

        let amount = row.amount.as_decimal();
        total += amount;
        items.push(DeductionLine {
            period_label,
            reason: row.reason,
            amount,
        });
    }

    CategoryBreakdown { total, items }
}
