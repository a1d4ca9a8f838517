//! Terminal salary composition.
//!
//! Combines base pay, commission, bonus, and the four deduction
//! categories into the final [`SalaryCalculation`]. The net figure is
//! clamped at zero, but the pre-clamp value is always emitted and a
//! warning is raised when clamping hid a shortfall — deductions
//! exceeding earnings usually indicate a data or configuration problem.

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::SalaryMethod;
use crate::models::{CalculationWarning, DeductionSet, Period, SalaryCalculation};

use super::commission::CommissionOutcome;

/// Warning code raised when a negative net salary was clamped to zero.
pub const NEGATIVE_NET_WARNING: &str = "NEGATIVE_NET";

/// Composes the final salary calculation.
///
/// `raw_net = base + commission + bonus - deductions`; the payable
/// `net_salary` is `max(0, raw_net)`. When the raw figure was negative
/// the shortfall is surfaced as a [`NEGATIVE_NET_WARNING`] rather than
/// silently discarded.
pub fn compose_salary(
    supervisor_code: &str,
    period: Period,
    method: SalaryMethod,
    outcome: CommissionOutcome,
    bonus: Decimal,
    deductions: DeductionSet,
) -> SalaryCalculation {
    let raw_net =
        outcome.base_amount + outcome.commission + bonus - deductions.grand_total();
    let net_salary = raw_net.max(Decimal::ZERO);

    let mut warnings = Vec::new();
    if raw_net < Decimal::ZERO {
        warnings.push(CalculationWarning {
            code: NEGATIVE_NET_WARNING.to_string(),
            message: format!(
                "Deductions exceed earnings by {}; net salary clamped to zero",
                -raw_net
            ),
            severity: "high".to_string(),
        });
    }

    SalaryCalculation {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        supervisor_code: supervisor_code.to_string(),
        period,
        method,
        base_amount: outcome.base_amount,
        commission: outcome.commission,
        commission_detail: outcome.detail,
        bonus,
        deductions,
        raw_net,
        net_salary,
        warnings,
        daily_breakdown: outcome.daily_breakdown,
    }
}
