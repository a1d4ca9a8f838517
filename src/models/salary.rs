//! Salary calculation result models.
//!
//! This module contains the [`SalaryCalculation`] type and its associated
//! structures that capture all outputs from a supervisor salary calculation:
//! commission arithmetic, itemized deductions, warnings, and the per-day
//! commission breakdown.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::SalaryMethod;

use super::{DeductionSet, Period};

/// The arithmetic behind a commission figure, kept in full so the result
/// can be reconstructed for audit or display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum CommissionDetail {
    /// Fixed monthly pay; no commission was computed.
    Fixed {
        /// The configured fixed amount.
        fixed_amount: Decimal,
    },
    /// Commission tiered by average daily worked hours.
    TieredByHours {
        /// Orders summed over all kept records.
        total_orders: u64,
        /// Hours summed over all kept records.
        total_hours: Decimal,
        /// Mean of per-day hour sums across days that have data.
        daily_average_hours: Decimal,
        /// Number of distinct days with at least one record.
        days_with_data: u32,
        /// The per-order rate selected from the configured hour bands.
        rate_per_order: Decimal,
    },
    /// Commission as a percentage of estimated receipts.
    ReceiptShare {
        /// Orders summed over all kept records.
        total_orders: u64,
        /// The flat per-order value receipts were estimated with.
        average_order_value: Decimal,
        /// `total_orders * average_order_value`.
        total_receipts: Decimal,
        /// Percentage of receipts forming the base value.
        base_percentage: Decimal,
        /// `total_receipts * base_percentage / 100`.
        base_value: Decimal,
        /// The supervisor's share of the base value, as a percentage.
        supervisor_percentage: Decimal,
    },
}

/// One day's contribution to a tiered commission.
///
/// The rate is the period-level rate, not a per-day recompute, so the line
/// commissions sum exactly to the aggregate commission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCommissionLine {
    /// The calendar day.
    pub date: NaiveDate,
    /// Orders completed across all workers on the day.
    pub orders: u64,
    /// Hours worked across all workers on the day.
    pub hours: Decimal,
    /// The period-level rate per order.
    pub rate_per_order: Decimal,
    /// `orders * rate_per_order`.
    pub commission: Decimal,
}

/// A warning generated during calculation.
///
/// Warnings indicate potential data or configuration issues that don't
/// prevent calculation but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g. "low", "medium", "high").
    pub severity: String,
}

/// The complete result of a supervisor salary calculation.
///
/// Constructed fresh on every invocation; the engine holds no state
/// between calculations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryCalculation {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The supervisor the salary was computed for.
    pub supervisor_code: String,
    /// The queried period.
    pub period: Period,
    /// The salary method that was applied.
    pub method: SalaryMethod,
    /// Fixed base pay (zero for commission methods).
    pub base_amount: Decimal,
    /// Commission earned (zero for the fixed method).
    pub commission: Decimal,
    /// Full arithmetic behind the commission figure.
    pub commission_detail: CommissionDetail,
    /// Flat bonus added on top of base and commission.
    pub bonus: Decimal,
    /// Itemized deductions across all four categories.
    pub deductions: DeductionSet,
    /// `base + commission + bonus - deductions`, before clamping.
    ///
    /// Negative values indicate deductions exceeded earnings and are
    /// surfaced through `warnings` rather than silently hidden.
    pub raw_net: Decimal,
    /// The payable salary: `max(0, raw_net)`.
    pub net_salary: Decimal,
    /// Warnings raised during the calculation.
    pub warnings: Vec<CalculationWarning>,
    /// Per-day commission lines (tiered method only; empty otherwise).
    pub daily_breakdown: Vec<DailyCommissionLine>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryBreakdown, EquipmentBreakdown, SecurityBreakdown};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn empty_deductions() -> DeductionSet {
        DeductionSet {
            advances: CategoryBreakdown::empty(),
            general: CategoryBreakdown::empty(),
            equipment: EquipmentBreakdown::empty(),
            security: SecurityBreakdown::empty(dec("100")),
        }
    }

    fn sample_calculation() -> SalaryCalculation {
        SalaryCalculation {
            calculation_id: Uuid::nil(),
            timestamp: DateTime::parse_from_rfc3339("2025-07-01T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            engine_version: "0.1.0".to_string(),
            supervisor_code: "SUP-003".to_string(),
            period: Period {
                start: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                end: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            },
            method: SalaryMethod::TieredByHours,
            base_amount: Decimal::ZERO,
            commission: dec("500"),
            commission_detail: CommissionDetail::TieredByHours {
                total_orders: 500,
                total_hours: dec("350"),
                daily_average_hours: dec("70"),
                days_with_data: 5,
                rate_per_order: dec("1.0"),
            },
            bonus: Decimal::ZERO,
            deductions: empty_deductions(),
            raw_net: dec("500"),
            net_salary: dec("500"),
            warnings: vec![],
            daily_breakdown: vec![],
        }
    }

    #[test]
    fn test_commission_detail_is_tagged_by_method() {
        let detail = CommissionDetail::Fixed {
            fixed_amount: dec("4500"),
        };
        let json = serde_json::to_string(&detail).unwrap();
        assert!(json.contains("\"method\":\"fixed\""));

        let detail = CommissionDetail::ReceiptShare {
            total_orders: 500,
            average_order_value: dec("50"),
            total_receipts: dec("25000"),
            base_percentage: dec("11"),
            base_value: dec("2750"),
            supervisor_percentage: dec("60"),
        };
        let json = serde_json::to_string(&detail).unwrap();
        assert!(json.contains("\"method\":\"receipt_share\""));
        assert!(json.contains("\"total_receipts\":\"25000\""));
    }

    #[test]
    fn test_daily_line_commission_consistency() {
        let line = DailyCommissionLine {
            date: NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
            orders: 100,
            hours: dec("50"),
            rate_per_order: dec("1.2"),
            commission: dec("120"),
        };

        assert_eq!(
            Decimal::from(line.orders) * line.rate_per_order,
            line.commission
        );
    }

    #[test]
    fn test_salary_calculation_serialization() {
        let calc = sample_calculation();
        let json = serde_json::to_string(&calc).unwrap();

        assert!(json.contains("\"calculation_id\":\"00000000-0000-0000-0000-000000000000\""));
        assert!(json.contains("\"supervisor_code\":\"SUP-003\""));
        assert!(json.contains("\"method\":\"tiered_by_hours\""));
        assert!(json.contains("\"net_salary\":\"500\""));
        assert!(json.contains("\"deductions\":{"));
    }

    #[test]
    fn test_salary_calculation_round_trip() {
        let calc = sample_calculation();
        let json = serde_json::to_string(&calc).unwrap();
        let back: SalaryCalculation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, calc);
    }

    #[test]
    fn test_warning_serialization() {
        let warning = CalculationWarning {
            code: "NEGATIVE_NET".to_string(),
            message: "Deductions exceed earnings by 900".to_string(),
            severity: "high".to_string(),
        };

        let json = serde_json::to_string(&warning).unwrap();
        assert!(json.contains("\"code\":\"NEGATIVE_NET\""));
        assert!(json.contains("\"severity\":\"high\""));
    }
}
