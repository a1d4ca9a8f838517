//! Worker performance models.
//!
//! This module defines the per-day [`PerformanceRecord`], the per-worker
//! [`WorkerPerformance`] aggregate, and the [`WorkerAssignment`] linking
//! workers to supervisors.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One worker's metrics for one calendar day.
///
/// Produced by the performance filter from a raw spreadsheet row; immutable
/// once created. All numeric fields were parsed defensively at ingestion
/// (missing or non-numeric cells become zero).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    /// The calendar day this record covers.
    pub date: NaiveDate,
    /// Unique code of the worker.
    pub worker_code: String,
    /// Hours worked on the day.
    pub hours: Decimal,
    /// Break time taken, in minutes.
    pub break_minutes: Decimal,
    /// Accumulated delay, in minutes.
    pub delay: Decimal,
    /// Whether the worker was marked absent.
    pub absent: bool,
    /// Orders completed on the day.
    pub orders: u32,
    /// Acceptance rate as a percentage in `[0, 100]`.
    ///
    /// Zero means no acceptance figure was recorded for the day; such
    /// records are excluded when averaging.
    pub acceptance_rate: Decimal,
    /// Outstanding debt carried by the worker.
    pub debt: Decimal,
}

/// Aggregated performance for one worker over a query period.
///
/// # Example
///
/// ```
/// use salary_engine::models::WorkerPerformance;
/// use rust_decimal::Decimal;
///
/// let summary = WorkerPerformance {
///     worker_code: "W-104".to_string(),
///     total_hours: Decimal::new(1825, 1),   // 182.5
///     total_orders: 312,
///     total_break_minutes: Decimal::from(540),
///     total_delay: Decimal::from(75),
///     days_absent: 2,
///     days_recorded: 26,
///     total_debt: Decimal::ZERO,
///     acceptance_rate: Decimal::from(94),
/// };
/// assert_eq!(summary.total_orders, 312);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerPerformance {
    /// Unique code of the worker.
    pub worker_code: String,
    /// Sum of hours over all kept records.
    pub total_hours: Decimal,
    /// Sum of completed orders.
    pub total_orders: u64,
    /// Sum of break minutes.
    pub total_break_minutes: Decimal,
    /// Sum of delay minutes.
    pub total_delay: Decimal,
    /// Number of days the worker was marked absent.
    pub days_absent: u32,
    /// Number of records that contributed to this aggregate.
    pub days_recorded: u32,
    /// Sum of outstanding debt entries.
    pub total_debt: Decimal,
    /// Average acceptance rate over records with a non-zero acceptance
    /// figure; zero when no record qualified.
    pub acceptance_rate: Decimal,
}

/// Links a worker to the supervisor they currently report to.
///
/// Only the current assignment is known; there is no historical assignment
/// log, so range queries implicitly assume the assignment was stable over
/// the queried period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerAssignment {
    /// Unique code of the worker.
    pub worker_code: String,
    /// Code of the supervisor the worker reports to.
    pub supervisor_code: String,
    /// Whether the assignment is currently active.
    pub active: bool,
}
