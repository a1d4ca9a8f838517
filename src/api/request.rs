//! Request types for the Supervisor Salary Engine API.
//!
//! This module defines the JSON request structures for the
//! `/salary/calculate` and `/performance/aggregate` endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request body for the `/salary/calculate` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SalaryRequest {
    /// The supervisor to compute a salary for.
    pub supervisor_code: String,
    /// The start of the queried period (inclusive).
    pub start_date: NaiveDate,
    /// The end of the queried period (inclusive).
    pub end_date: NaiveDate,
}

/// Request body for the `/performance/aggregate` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceRequest {
    /// The supervisor whose workers to aggregate.
    pub supervisor_code: String,
    /// The start of the queried period (inclusive).
    pub start_date: NaiveDate,
    /// The end of the queried period (inclusive).
    pub end_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salary_request_deserialization() {
        let json = r#"{
            "supervisor_code": "SUP-001",
            "start_date": "2025-06-01",
            "end_date": "2025-06-30"
        }"#;

        let request: SalaryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.supervisor_code, "SUP-001");
        assert_eq!(
            request.start_date,
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
        );
        assert_eq!(
            request.end_date,
            NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
        );
    }

    #[test]
    fn test_salary_request_missing_field_fails() {
        let json = r#"{"supervisor_code": "SUP-001", "start_date": "2025-06-01"}"#;
        let result: Result<SalaryRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_performance_request_round_trip() {
        let request = PerformanceRequest {
            supervisor_code: "SUP-001".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
        };

        let json = serde_json::to_string(&request).unwrap();
        let back: PerformanceRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }
}
