//! Deduction models.
//!
//! This module contains the itemized breakdown types for the four deduction
//! categories applied to a supervisor's salary: advances, general
//! deductions, equipment cost, and security-inquiry cost.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The four deduction categories recognized by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionCategory {
    /// Salary advances paid out during the period.
    Advances,
    /// Generic deductions (fines, damages, and similar).
    General,
    /// Cost of equipment issued to the supervisor's workers.
    Equipment,
    /// Fixed-fee security inquiries.
    Security,
}

impl std::fmt::Display for DeductionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeductionCategory::Advances => write!(f, "advances"),
            DeductionCategory::General => write!(f, "general"),
            DeductionCategory::Equipment => write!(f, "equipment"),
            DeductionCategory::Security => write!(f, "security"),
        }
    }
}

/// One itemized line in a cash deduction category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionLine {
    /// Human-readable label for when the deduction applies — an ISO date
    /// for dated rows, `month N` for month-scoped rows, or `period` for
    /// undated rows that match unconditionally.
    pub period_label: String,
    /// Free-text reason recorded against the deduction, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// The deducted amount.
    pub amount: Decimal,
}

/// A cash deduction category (advances or general) with its itemization.
///
/// Invariant: `total` equals the exact sum of `items` amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    /// Sum of all itemized amounts.
    pub total: Decimal,
    /// The individual deduction lines.
    pub items: Vec<DeductionLine>,
}

impl CategoryBreakdown {
    /// An empty breakdown contributing nothing to the salary.
    pub fn empty() -> Self {
        Self {
            total: Decimal::ZERO,
            items: Vec::new(),
        }
    }
}

/// One equipment kind issued during the period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentLine {
    /// Name of the equipment kind (e.g. "motorcycle_box").
    pub name: String,
    /// Units issued.
    pub quantity: u32,
    /// Configured price per unit.
    pub unit_price: Decimal,
    /// `quantity * unit_price`.
    pub line_total: Decimal,
}

/// Equipment cost breakdown: one line per kind with a non-zero quantity.
///
/// Invariant: `total` equals the exact sum of `items` line totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentBreakdown {
    /// Sum of all line totals.
    pub total: Decimal,
    /// The individual equipment lines.
    pub items: Vec<EquipmentLine>,
}

impl EquipmentBreakdown {
    /// An empty breakdown contributing nothing to the salary.
    pub fn empty() -> Self {
        Self {
            total: Decimal::ZERO,
            items: Vec::new(),
        }
    }
}

/// Security-inquiry cost: a matching-row count times a fixed fee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityBreakdown {
    /// `inquiry_count * fee_per_inquiry`.
    pub total: Decimal,
    /// Number of inquiry rows that matched the supervisor.
    pub inquiry_count: u32,
    /// The configured per-inquiry fee.
    pub fee_per_inquiry: Decimal,
}

impl SecurityBreakdown {
    /// An empty breakdown contributing nothing to the salary.
    pub fn empty(fee_per_inquiry: Decimal) -> Self {
        Self {
            total: Decimal::ZERO,
            inquiry_count: 0,
            fee_per_inquiry,
        }
    }
}

/// All four deduction categories for one salary calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionSet {
    /// Salary advances.
    pub advances: CategoryBreakdown,
    /// Generic deductions.
    pub general: CategoryBreakdown,
    /// Equipment cost.
    pub equipment: EquipmentBreakdown,
    /// Security-inquiry cost.
    pub security: SecurityBreakdown,
}

impl DeductionSet {
    /// The grand total across all four categories.
    pub fn grand_total(&self) -> Decimal {
        self.advances.total + self.general.total + self.equipment.total + self.security.total
    }
}
