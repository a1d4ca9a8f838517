//! Query period model.
//!
//! This module contains the [`Period`] type used to define the date window
//! for performance aggregation and salary calculation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents a closed date range for a performance or salary query.
///
/// Both ends are inclusive: a record dated exactly on `start` or `end`
/// belongs to the period.
///
/// # Example
///
/// ```
/// use salary_engine::models::Period;
/// use chrono::NaiveDate;
///
/// let period = Period::new(
///     NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
/// ).unwrap();
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()));
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()));
/// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 5, 31).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// The start date of the period (inclusive).
    pub start: NaiveDate,
    /// The end date of the period (inclusive).
    pub end: NaiveDate,
}

impl Period {
    /// Creates a period, rejecting ranges whose start is after their end.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRange`] when `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> EngineResult<Self> {
        if start > end {
            return Err(EngineError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Checks if a given date falls within this period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// The year bare month numbers on deduction rows resolve against.
    ///
    /// A range spanning a year boundary resolves months against its first
    /// year.
    pub fn query_year(&self) -> i32 {
        use chrono::Datelike;
        self.start.year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_accepts_single_day_range() {
        let period = Period::new(date(2025, 6, 15), date(2025, 6, 15));
        assert!(period.is_ok());
    }

    #[test]
    fn test_new_rejects_inverted_range() {
        let result = Period::new(date(2025, 6, 30), date(2025, 6, 1));
        match result {
            Err(EngineError::InvalidRange { start, end }) => {
                assert_eq!(start, date(2025, 6, 30));
                assert_eq!(end, date(2025, 6, 1));
            }
            other => panic!("Expected InvalidRange, got {:?}", other),
        }
    }

    #[test]
    fn test_contains_date_is_inclusive_at_both_ends() {
        let period = Period::new(date(2025, 6, 1), date(2025, 6, 30)).unwrap();

        assert!(period.contains_date(date(2025, 6, 1)));
        assert!(period.contains_date(date(2025, 6, 15)));
        assert!(period.contains_date(date(2025, 6, 30)));
        assert!(!period.contains_date(date(2025, 5, 31)));
        assert!(!period.contains_date(date(2025, 7, 1)));
    }

    #[test]
    fn test_query_year_uses_start_year() {
        let period = Period::new(date(2024, 12, 20), date(2025, 1, 10)).unwrap();
        assert_eq!(period.query_year(), 2024);
    }

    #[test]
    fn test_serde_round_trip() {
        let period = Period::new(date(2025, 6, 1), date(2025, 6, 30)).unwrap();
        let json = serde_json::to_string(&period).unwrap();
        assert!(json.contains("\"start\":\"2025-06-01\""));
        assert!(json.contains("\"end\":\"2025-06-30\""));

        let back: Period = serde_json::from_str(&json).unwrap();
        assert_eq!(back, period);
    }
}
