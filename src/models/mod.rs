//! Core data models for the Supervisor Salary Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod deduction;
mod performance;
mod period;
mod salary;

pub use deduction::{
    CategoryBreakdown, DeductionCategory, DeductionLine, DeductionSet, EquipmentBreakdown,
    EquipmentLine, SecurityBreakdown,
};
pub use performance::{PerformanceRecord, WorkerAssignment, WorkerPerformance};
pub use period::Period;
pub use salary::{CalculationWarning, CommissionDetail, DailyCommissionLine, SalaryCalculation};
