//! Receipt-share commission calculation.
//!
//! The receipt-share method pays the supervisor a percentage of a
//! percentage of estimated worker receipts. No receipts column exists in
//! the source data yet, so receipts are estimated as orders times a flat
//! configured average order value; the estimate is provisional and the
//! result detail spells out every input so the arithmetic stays
//! reconstructible.

use rust_decimal::Decimal;

use crate::config::{SalaryConfig, Tunables};
use crate::models::{CommissionDetail, PerformanceRecord};

/// The result of a receipt-share commission calculation.
#[derive(Debug, Clone)]
pub struct ReceiptCommissionResult {
    /// The commission amount.
    pub commission: Decimal,
    /// Full arithmetic detail for audit and display.
    pub detail: CommissionDetail,
}

/// Computes a receipt-share commission over filtered performance records.
///
/// `total_receipts = total_orders * average_order_value`, then
/// `base_value = total_receipts * base_percentage / 100`, then
/// `commission = base_value * supervisor_percentage / 100`. Percentages
/// omitted from the supervisor's configuration fall back to the fleet
/// tunables.
pub fn calculate_receipt_commission(
    config: &SalaryConfig,
    tunables: &Tunables,
    records: &[PerformanceRecord],
) -> ReceiptCommissionResult {
    let total_orders: u64 = records.iter().map(|r| u64::from(r.orders)).sum();

    let average_order_value = tunables.average_order_value;
    let base_percentage = config
        .base_percentage
        .unwrap_or(tunables.default_base_percentage);
    let supervisor_percentage = config
        .supervisor_percentage
        .unwrap_or(tunables.default_supervisor_percentage);

    let hundred = Decimal::from(100);
    let total_receipts = Decimal::from(total_orders) * average_order_value;
    let base_value = total_receipts * base_percentage / hundred;
    let commission = base_value * supervisor_percentage / hundred;

    ReceiptCommissionResult {
        commission,
        detail: CommissionDetail::ReceiptShare {
            total_orders,
            average_order_value,
            total_receipts,
            base_percentage,
            base_value,
            supervisor_percentage,
        },
    }
}
