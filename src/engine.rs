//! Engine orchestration.
//!
//! [`SalaryEngine`] wires the pipeline together in data-dependency order:
//! performance filtering feeds the commission calculators, the four
//! deduction categories aggregate independently, and the composer folds
//! everything into the final result. The engine holds no mutable state;
//! every call is an independent, deterministic function of the external
//! data snapshot.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::calculation::{
    aggregate_by_worker, aggregate_cash_deductions, aggregate_equipment_cost,
    aggregate_security_cost, compose_salary, compute_commission, filter_records,
};
use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::models::{
    DeductionCategory, DeductionSet, PerformanceRecord, Period, SalaryCalculation,
    WorkerPerformance,
};
use crate::source::{RawRow, RowSource, Sheet};

/// The engine's primary entry point.
///
/// Construction takes the fleet configuration and a row source; both are
/// read-only. The engine itself is cheap to clone and safe to share
/// across threads — concurrent calculations for the same key merely
/// duplicate work, they never corrupt state.
#[derive(Clone)]
pub struct SalaryEngine {
    config: ConfigLoader,
    source: Arc<dyn RowSource>,
}

impl SalaryEngine {
    /// Creates an engine over a configuration and a row source.
    pub fn new(config: ConfigLoader, source: Arc<dyn RowSource>) -> Self {
        Self { config, source }
    }

    /// Returns the engine's configuration.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Resolves the active worker codes currently assigned to a
    /// supervisor.
    fn assigned_worker_codes(&self, supervisor_code: &str) -> HashSet<String> {
        self.source
            .assigned_workers(supervisor_code)
            .into_iter()
            .filter(|a| a.active)
            .map(|a| a.worker_code)
            .collect()
    }

    /// Filters the performance sheet down to a supervisor's records for
    /// a period.
    fn filtered_records(
        &self,
        supervisor_code: &str,
        period: &Period,
    ) -> Vec<PerformanceRecord> {
        let worker_codes = self.assigned_worker_codes(supervisor_code);
        if worker_codes.is_empty() {
            debug!(supervisor = %supervisor_code, "no active workers assigned");
            return Vec::new();
        }

        let rows = self.source.read_rows(Sheet::Performance);
        filter_records(&worker_codes, period, &rows)
    }

    /// Fetches a deduction category's sheet, logging when it comes back
    /// empty — an unavailable feed and a genuinely empty one both
    /// degrade to a zero category.
    fn category_rows(&self, category: DeductionCategory, supervisor_code: &str) -> Vec<RawRow> {
        let sheet = match category {
            DeductionCategory::Advances => Sheet::Advances,
            DeductionCategory::General => Sheet::Deductions,
            DeductionCategory::Equipment => Sheet::Equipment,
            DeductionCategory::Security => Sheet::SecurityInquiries,
        };

        let rows = self.source.read_rows(sheet);
        if rows.is_empty() {
            debug!(
                supervisor = %supervisor_code,
                category = %category,
                "deduction sheet empty or unavailable"
            );
        }
        rows
    }

    /// Aggregates per-worker performance for a supervisor over a period.
    ///
    /// Usable independently of salary computation, e.g. for dashboards.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::InvalidRange`] when
    /// `start > end`. An empty worker set is not an error; it yields an
    /// empty list.
    pub fn aggregate_performance(
        &self,
        supervisor_code: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<WorkerPerformance>> {
        let period = Period::new(start, end)?;
        let records = self.filtered_records(supervisor_code, &period);
        Ok(aggregate_by_worker(&records))
    }

    /// Computes a supervisor's salary for a period.
    ///
    /// Runs the full pipeline: performance filtering, the configured
    /// commission method, all four deduction categories, and final
    /// composition. A sheet that cannot be read contributes an empty
    /// category rather than failing the calculation.
    ///
    /// # Errors
    ///
    /// - [`crate::error::EngineError::InvalidRange`] when `start > end`.
    /// - [`crate::error::EngineError::SalaryConfigNotFound`] when the
    ///   supervisor has no salary configuration — the only data absence
    ///   that fails the operation.
    /// - [`crate::error::EngineError::CalculationError`] for defective
    ///   configuration (a tiered method without hour bands).
    pub fn calculate_supervisor_salary(
        &self,
        supervisor_code: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<SalaryCalculation> {
        let period = Period::new(start, end)?;
        let salary_config = self.config.salary_config(supervisor_code)?;
        let tunables = self.config.tunables();

        let records = self.filtered_records(supervisor_code, &period);
        let outcome = compute_commission(salary_config, tunables, &records)?;

        let advances_rows = self.category_rows(DeductionCategory::Advances, supervisor_code);
        let deduction_rows = self.category_rows(DeductionCategory::General, supervisor_code);
        let equipment_rows = self.category_rows(DeductionCategory::Equipment, supervisor_code);
        let security_rows = self.category_rows(DeductionCategory::Security, supervisor_code);

        let deductions = DeductionSet {
            advances: aggregate_cash_deductions(supervisor_code, &period, &advances_rows),
            general: aggregate_cash_deductions(supervisor_code, &period, &deduction_rows),
            equipment: aggregate_equipment_cost(
                supervisor_code,
                &period,
                &equipment_rows,
                self.config.equipment_pricing(),
            ),
            security: aggregate_security_cost(
                supervisor_code,
                &period,
                &security_rows,
                tunables.security_inquiry_fee,
            ),
        };

        Ok(compose_salary(
            supervisor_code,
            period,
            salary_config.method,
            outcome,
            salary_config.monthly_bonus,
            deductions,
        ))
    }
}
