//! Named row schemas for the spreadsheet feeds.
//!
//! Raw rows arrive as positional arrays of loosely-typed cells. Each
//! schema struct names its columns and is built exactly once per row at
//! the ingestion boundary, so the calculation code never indexes `row[n]`
//! or re-guesses column meanings.

use super::{CellValue, RawRow};

fn cell(row: &RawRow, index: usize) -> CellValue {
    row.get(index).cloned().unwrap_or(CellValue::Empty)
}

/// One row of the performance sheet, by column name.
///
/// Column order: date, worker code, hours, break minutes, delay, absence
/// marker, orders, acceptance rate, debt. Rows shorter than the full
/// width are padded with empty cells; a row without a worker code is
/// dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceRow {
    /// The raw date cell, still in whatever format the sheet used.
    pub date: CellValue,
    /// The worker code, normalized to a string.
    pub worker_code: String,
    /// Hours worked.
    pub hours: CellValue,
    /// Break time in minutes.
    pub break_minutes: CellValue,
    /// Accumulated delay in minutes.
    pub delay: CellValue,
    /// Free-text absence marker.
    pub absent: CellValue,
    /// Completed orders.
    pub orders: CellValue,
    /// Acceptance rate, percent or decimal encoded.
    pub acceptance_rate: CellValue,
    /// Outstanding debt.
    pub debt: CellValue,
}

impl PerformanceRow {
    /// Builds a named row from a positional one.
    ///
    /// Returns `None` when the worker-code column is blank; such rows
    /// cannot be attributed to anyone and are skipped.
    pub fn from_row(row: &RawRow) -> Option<Self> {
        let worker_code = cell(row, 1).as_code();
        if worker_code.is_empty() {
            return None;
        }

        Some(Self {
            date: cell(row, 0),
            worker_code,
            hours: cell(row, 2),
            break_minutes: cell(row, 3),
            delay: cell(row, 4),
            absent: cell(row, 5),
            orders: cell(row, 6),
            acceptance_rate: cell(row, 7),
            debt: cell(row, 8),
        })
    }
}

/// One row of a cash deduction sheet (advances or generic deductions).
///
/// Column order: supervisor code, period (an explicit date or a bare
/// month number), reason, amount.
#[derive(Debug, Clone, PartialEq)]
pub struct CashDeductionRow {
    /// The supervisor the deduction is charged to.
    pub supervisor_code: String,
    /// The period cell: an explicit date, a bare month number, or blank.
    pub period: CellValue,
    /// Free-text reason, if recorded.
    pub reason: Option<String>,
    /// The deducted amount.
    pub amount: CellValue,
}

impl CashDeductionRow {
    /// Builds a named row from a positional one.
    ///
    /// Returns `None` when the supervisor-code column is blank.
    pub fn from_row(row: &RawRow) -> Option<Self> {
        let supervisor_code = cell(row, 0).as_code();
        if supervisor_code.is_empty() {
            return None;
        }

        let reason = match cell(row, 2) {
            CellValue::Text(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            _ => None,
        };

        Some(Self {
            supervisor_code,
            period: cell(row, 1),
            reason,
            amount: cell(row, 3),
        })
    }
}

/// One row of the equipment sheet.
///
/// Column order: supervisor code, period, then unit counts for the five
/// equipment kinds: motorcycle box, bicycle box, t-shirt, jacket, helmet.
#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentRow {
    /// The supervisor the equipment is charged to.
    pub supervisor_code: String,
    /// The period cell: an explicit date, a bare month number, or blank.
    pub period: CellValue,
    /// Motorcycle boxes issued.
    pub motorcycle_boxes: u32,
    /// Bicycle boxes issued.
    pub bicycle_boxes: u32,
    /// T-shirts issued.
    pub tshirts: u32,
    /// Jackets issued.
    pub jackets: u32,
    /// Helmets issued.
    pub helmets: u32,
}

impl EquipmentRow {
    /// Builds a named row from a positional one.
    ///
    /// Returns `None` when the supervisor-code column is blank.
    pub fn from_row(row: &RawRow) -> Option<Self> {
        let supervisor_code = cell(row, 0).as_code();
        if supervisor_code.is_empty() {
            return None;
        }

        Some(Self {
            supervisor_code,
            period: cell(row, 1),
            motorcycle_boxes: cell(row, 2).as_count(),
            bicycle_boxes: cell(row, 3).as_count(),
            tshirts: cell(row, 4).as_count(),
            jackets: cell(row, 5).as_count(),
            helmets: cell(row, 6).as_count(),
        })
    }
}
