//! Commission dispatch across the three salary methods.
//!
//! The three methods are mutually exclusive; this module selects the
//! right calculator for a supervisor's configuration and flattens the
//! outcome into one shape the composer consumes.

use rust_decimal::Decimal;

use crate::config::{SalaryConfig, SalaryMethod, Tunables};
use crate::error::EngineResult;
use crate::models::{CommissionDetail, DailyCommissionLine, PerformanceRecord};

use super::receipt_commission::calculate_receipt_commission;
use super::tiered_commission::calculate_tiered_commission;

/// The base/commission outcome of applying a salary method.
#[derive(Debug, Clone)]
pub struct CommissionOutcome {
    /// Fixed base pay (zero for commission methods).
    pub base_amount: Decimal,
    /// Commission earned (zero for the fixed method).
    pub commission: Decimal,
    /// Full arithmetic detail for audit and display.
    pub detail: CommissionDetail,
    /// Per-day commission lines (tiered method only; empty otherwise).
    pub daily_breakdown: Vec<DailyCommissionLine>,
}

/// Applies a supervisor's salary method to their workers' filtered
/// records.
///
/// - [`SalaryMethod::Fixed`]: the configured amount becomes the base;
///   a missing amount reads as zero.
/// - [`SalaryMethod::TieredByHours`]: commission from the tiered
///   calculator, with its per-day breakdown.
/// - [`SalaryMethod::ReceiptShare`]: commission from the receipt-share
///   calculator.
pub fn compute_commission(
    config: &SalaryConfig,
    tunables: &Tunables,
    records: &[PerformanceRecord],
) -> EngineResult<CommissionOutcome> {
    match config.method {
        SalaryMethod::Fixed => {
            let fixed_amount = config.fixed_amount.unwrap_or(Decimal::ZERO);
            Ok(CommissionOutcome {
                base_amount: fixed_amount,
                commission: Decimal::ZERO,
                detail: CommissionDetail::Fixed { fixed_amount },
                daily_breakdown: Vec::new(),
            })
        }
        SalaryMethod::TieredByHours => {
            let result = calculate_tiered_commission(&config.hour_bands, records)?;
            Ok(CommissionOutcome {
                base_amount: Decimal::ZERO,
                commission: result.commission,
                detail: result.detail,
                daily_breakdown: result.daily_breakdown,
            })
        }
        SalaryMethod::ReceiptShare => {
            let result = calculate_receipt_commission(config, tunables, records);
            Ok(CommissionOutcome {
                base_amount: Decimal::ZERO,
                commission: result.commission,
                detail: result.detail,
                daily_breakdown: Vec::new(),
            })
        }
    }
}
