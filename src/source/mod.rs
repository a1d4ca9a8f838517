//! Ingestion boundary for spreadsheet-shaped data.
//!
//! This module defines the raw cell/row types handed over by external
//! storage, the [`RowSource`] trait the engine fetches through, and an
//! in-memory implementation for tests and demos. Positional rows are
//! converted into named schema structs exactly once, in [`schema`];
//! nothing downstream indexes `row[n]`.

pub mod schema;

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};

use crate::models::WorkerAssignment;

/// A single spreadsheet cell as delivered by the storage layer.
///
/// Source cells are primitive and loosely typed: the same column may hold
/// a number in one row and free text in the next. All typed access goes
/// through the defensive accessors below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// A numeric cell.
    Number(f64),
    /// A text cell.
    Text(String),
    /// An empty cell.
    Empty,
}

impl CellValue {
    /// True for empty cells and blank text.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::Number(_) => false,
        }
    }

    /// The cell as trimmed text, if it is a text cell.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s.trim()),
            _ => None,
        }
    }

    /// The cell rendered as an identifier string.
    ///
    /// Numeric codes lose a trailing `.0` so that a sheet storing worker
    /// code `104` as a number still matches the string `"104"`.
    pub fn as_code(&self) -> String {
        match self {
            CellValue::Text(s) => s.trim().to_string(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            CellValue::Empty => String::new(),
        }
    }

    /// The cell as a decimal, defaulting to zero.
    ///
    /// Text cells are parsed after stripping thousands separators and
    /// percent signs; anything unparseable becomes zero, matching the
    /// skip-don't-fail contract of the pipeline.
    pub fn as_decimal(&self) -> Decimal {
        match self {
            CellValue::Number(n) => Decimal::from_f64(*n).unwrap_or(Decimal::ZERO),
            CellValue::Text(s) => {
                let cleaned: String = s
                    .trim()
                    .chars()
                    .filter(|c| *c != ',' && *c != '%')
                    .collect();
                cleaned
                    .parse::<Decimal>()
                    .ok()
                    .or_else(|| cleaned.parse::<f64>().ok().and_then(Decimal::from_f64))
                    .unwrap_or(Decimal::ZERO)
            }
            CellValue::Empty => Decimal::ZERO,
        }
    }

    /// The cell as a non-negative integer count, defaulting to zero.
    pub fn as_count(&self) -> u32 {
        let value = self.as_decimal();
        if value <= Decimal::ZERO {
            return 0;
        }
        value.trunc().to_u32().unwrap_or(0)
    }
}

/// One spreadsheet row: an ordered list of primitive cells.
pub type RawRow = Vec<CellValue>;

/// The sheets the engine reads rows from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sheet {
    /// Daily worker performance records.
    Performance,
    /// Salary advances paid to supervisors.
    Advances,
    /// Generic deductions charged to supervisors.
    Deductions,
    /// Equipment issued, with per-kind unit counts.
    Equipment,
    /// Security inquiry log.
    SecurityInquiries,
}

/// Abstract row access the engine fetches through.
///
/// Implementations wrap whatever actually stores the data (a spreadsheet
/// service, a database, a file). The contract is degrade-not-fail:
/// `read_rows` returns an empty list on any not-found or transient error
/// rather than erroring, so partial data unavailability never blocks a
/// salary calculation.
pub trait RowSource: Send + Sync {
    /// Returns all data rows of a sheet (header row excluded).
    fn read_rows(&self, sheet: Sheet) -> Vec<RawRow>;

    /// Returns the workers currently assigned to a supervisor.
    fn assigned_workers(&self, supervisor_code: &str) -> Vec<WorkerAssignment>;
}

/// In-memory [`RowSource`] for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    sheets: HashMap<Sheet, Vec<RawRow>>,
    assignments: Vec<WorkerAssignment>,
}

impl MemorySource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the rows of a sheet.
    pub fn with_sheet(mut self, sheet: Sheet, rows: Vec<RawRow>) -> Self {
        self.sheets.insert(sheet, rows);
        self
    }

    /// Replaces the assignment table.
    pub fn with_assignments(mut self, assignments: Vec<WorkerAssignment>) -> Self {
        self.assignments = assignments;
        self
    }
}

impl RowSource for MemorySource {
    fn read_rows(&self, sheet: Sheet) -> Vec<RawRow> {
        self.sheets.get(&sheet).cloned().unwrap_or_default()
    }

    fn assigned_workers(&self, supervisor_code: &str) -> Vec<WorkerAssignment> {
        self.assignments
            .iter()
            .filter(|a| a.supervisor_code == supervisor_code)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_cell_value_untagged_deserialization() {
        let cells: Vec<CellValue> = serde_json::from_str(r#"[7.5, "W-104", null]"#).unwrap();
        assert_eq!(cells[0], CellValue::Number(7.5));
        assert_eq!(cells[1], CellValue::Text("W-104".to_string()));
        assert_eq!(cells[2], CellValue::Empty);
    }

    #[test]
    fn test_as_decimal_parses_numbers_and_text() {
        assert_eq!(CellValue::Number(7.5).as_decimal(), dec("7.5"));
        assert_eq!(CellValue::Text("7.5".to_string()).as_decimal(), dec("7.5"));
        assert_eq!(
            CellValue::Text("1,250.75".to_string()).as_decimal(),
            dec("1250.75")
        );
        assert_eq!(CellValue::Text("95%".to_string()).as_decimal(), dec("95"));
    }

    #[test]
    fn test_as_decimal_defaults_to_zero() {
        assert_eq!(CellValue::Empty.as_decimal(), Decimal::ZERO);
        assert_eq!(
            CellValue::Text("n/a".to_string()).as_decimal(),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_as_code_normalizes_numeric_codes() {
        assert_eq!(CellValue::Number(104.0).as_code(), "104");
        assert_eq!(CellValue::Text(" W-104 ".to_string()).as_code(), "W-104");
        assert_eq!(CellValue::Empty.as_code(), "");
    }

    #[test]
    fn test_as_count_truncates_and_clamps() {
        assert_eq!(CellValue::Number(2.9).as_count(), 2);
        assert_eq!(CellValue::Number(-3.0).as_count(), 0);
        assert_eq!(CellValue::Text("4".to_string()).as_count(), 4);
        assert_eq!(CellValue::Empty.as_count(), 0);
    }

    #[test]
    fn test_is_blank() {
        assert!(CellValue::Empty.is_blank());
        assert!(CellValue::Text("   ".to_string()).is_blank());
        assert!(!CellValue::Number(0.0).is_blank());
        assert!(!CellValue::Text("x".to_string()).is_blank());
    }

    #[test]
    fn test_memory_source_returns_empty_for_missing_sheet() {
        let source = MemorySource::new();
        assert!(source.read_rows(Sheet::Performance).is_empty());
    }

    #[test]
    fn test_memory_source_filters_assignments_by_supervisor() {
        let source = MemorySource::new().with_assignments(vec![
            WorkerAssignment {
                worker_code: "W-1".to_string(),
                supervisor_code: "SUP-001".to_string(),
                active: true,
            },
            WorkerAssignment {
                worker_code: "W-2".to_string(),
                supervisor_code: "SUP-002".to_string(),
                active: true,
            },
        ]);

        let assigned = source.assigned_workers("SUP-001");
        assert_eq!(assigned.len(), 1);
        assert_eq!(assigned[0].worker_code, "W-1");
    }
}
