//! Configuration types for salary calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata about the fleet this configuration belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct FleetMetadata {
    /// Short code identifying the fleet (e.g. "fleet-cairo").
    pub code: String,
    /// The human-readable name of the fleet.
    pub name: String,
    /// The version or effective date of this configuration set.
    pub version: String,
}

/// The salary strategy configured for a supervisor.
///
/// The three methods are mutually exclusive; exactly one applies per
/// supervisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryMethod {
    /// A flat monthly amount; no commission.
    Fixed,
    /// Commission per order, tiered by average daily worked hours.
    TieredByHours,
    /// Commission as a percentage of estimated worker receipts.
    ReceiptShare,
}

/// One tier in a [`SalaryMethod::TieredByHours`] configuration.
///
/// Bands are matched in order; the first band whose inclusive
/// `[min_hours, max_hours]` interval contains the daily average wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursBand {
    /// Lower bound of average daily hours (inclusive).
    pub min_hours: Decimal,
    /// Upper bound of average daily hours (inclusive).
    pub max_hours: Decimal,
    /// Commission paid per completed order within this band.
    pub rate_per_order: Decimal,
}

/// Salary configuration for one supervisor.
///
/// Created and maintained externally; read-only to the engine. Fields not
/// relevant to the configured method are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryConfig {
    /// The salary strategy to apply.
    pub method: SalaryMethod,
    /// Flat monthly amount for [`SalaryMethod::Fixed`].
    #[serde(default)]
    pub fixed_amount: Option<Decimal>,
    /// Ordered hour bands for [`SalaryMethod::TieredByHours`].
    #[serde(default)]
    pub hour_bands: Vec<HoursBand>,
    /// Receipts percentage forming the base value for
    /// [`SalaryMethod::ReceiptShare`]; defaults from [`Tunables`].
    #[serde(default)]
    pub base_percentage: Option<Decimal>,
    /// The supervisor's share of the base value for
    /// [`SalaryMethod::ReceiptShare`]; defaults from [`Tunables`].
    #[serde(default)]
    pub supervisor_percentage: Option<Decimal>,
    /// Flat bonus added on top of base pay and commission.
    #[serde(default)]
    pub monthly_bonus: Decimal,
}

/// Salaries configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct SalariesConfig {
    /// Map of supervisor code to salary configuration.
    pub salaries: HashMap<String, SalaryConfig>,
}

/// Per-unit prices for the five equipment kinds issued to workers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentPricing {
    /// Price of a motorcycle delivery box.
    pub motorcycle_box: Decimal,
    /// Price of a bicycle delivery box.
    pub bicycle_box: Decimal,
    /// Price of a branded t-shirt.
    pub tshirt: Decimal,
    /// Price of a branded jacket.
    pub jacket: Decimal,
    /// Price of a helmet.
    pub helmet: Decimal,
}

/// Equipment configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct EquipmentConfig {
    /// Per-unit equipment prices.
    pub pricing: EquipmentPricing,
}

fn default_average_order_value() -> Decimal {
    Decimal::from(50)
}

fn default_security_inquiry_fee() -> Decimal {
    Decimal::from(100)
}

fn default_base_percentage() -> Decimal {
    Decimal::from(11)
}

fn default_supervisor_percentage() -> Decimal {
    Decimal::from(60)
}

/// Engine tunables with conventional defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Tunables {
    /// Flat per-order value used to estimate receipts for
    /// [`SalaryMethod::ReceiptShare`].
    ///
    /// The receipts figure is `orders * average_order_value` — a
    /// provisional stand-in until the source data carries an actual
    /// receipts column.
    #[serde(default = "default_average_order_value")]
    pub average_order_value: Decimal,
    /// Fixed fee charged per security inquiry.
    #[serde(default = "default_security_inquiry_fee")]
    pub security_inquiry_fee: Decimal,
    /// Base percentage applied when a receipt-share config omits it.
    #[serde(default = "default_base_percentage")]
    pub default_base_percentage: Decimal,
    /// Supervisor percentage applied when a receipt-share config omits it.
    #[serde(default = "default_supervisor_percentage")]
    pub default_supervisor_percentage: Decimal,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            average_order_value: default_average_order_value(),
            security_inquiry_fee: default_security_inquiry_fee(),
            default_base_percentage: default_base_percentage(),
            default_supervisor_percentage: default_supervisor_percentage(),
        }
    }
}

/// Fleet metadata file structure (`fleet.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct FleetFile {
    /// Fleet metadata.
    #[serde(flatten)]
    pub metadata: FleetMetadata,
    /// Engine tunables; all fields optional.
    #[serde(default)]
    pub tunables: Option<Tunables>,
}

/// The complete fleet configuration loaded from YAML files.
///
/// This struct aggregates all configuration loaded from the various
/// YAML files in a fleet configuration directory.
#[derive(Debug, Clone)]
pub struct FleetConfig {
    metadata: FleetMetadata,
    salaries: HashMap<String, SalaryConfig>,
    equipment_pricing: EquipmentPricing,
    tunables: Tunables,
}

impl FleetConfig {
    /// Creates a new FleetConfig from its component parts.
    pub fn new(
        metadata: FleetMetadata,
        salaries: HashMap<String, SalaryConfig>,
        equipment_pricing: EquipmentPricing,
        tunables: Tunables,
    ) -> Self {
        Self {
            metadata,
            salaries,
            equipment_pricing,
            tunables,
        }
    }

    /// Returns the fleet metadata.
    pub fn metadata(&self) -> &FleetMetadata {
        &self.metadata
    }

    /// Returns all salary configurations keyed by supervisor code.
    pub fn salaries(&self) -> &HashMap<String, SalaryConfig> {
        &self.salaries
    }

    /// Returns the equipment pricing.
    pub fn equipment_pricing(&self) -> &EquipmentPricing {
        &self.equipment_pricing
    }

    /// Returns the engine tunables.
    pub fn tunables(&self) -> &Tunables {
        &self.tunables
    }
}
