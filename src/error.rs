//! Error types for the Supervisor Salary Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during salary calculation.
//!
//! Most data problems inside the pipeline are deliberately *not* errors:
//! unparseable dates skip their row and an unavailable deduction feed
//! contributes zero. Only configuration absence and an invalid date range
//! abort an operation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Supervisor Salary Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use salary_engine::error::EngineError;
///
/// let error = EngineError::SalaryConfigNotFound {
///     supervisor_code: "SUP-014".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Salary configuration not found for supervisor: SUP-014"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// No salary configuration exists for the supervisor.
    #[error("Salary configuration not found for supervisor: {supervisor_code}")]
    SalaryConfigNotFound {
        /// The supervisor code that has no configuration.
        supervisor_code: String,
    },

    /// The requested date range has a start after its end.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange {
        /// The requested start date.
        start: NaiveDate,
        /// The requested end date.
        end: NaiveDate,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
