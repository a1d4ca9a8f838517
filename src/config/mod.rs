//! Configuration loading and types for the Supervisor Salary Engine.
//!
//! Salary methods, equipment pricing, and engine tunables are maintained
//! externally and read from YAML files; the engine treats them as
//! read-only.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    EquipmentConfig, EquipmentPricing, FleetConfig, FleetFile, FleetMetadata, HoursBand,
    SalariesConfig, SalaryConfig, SalaryMethod, Tunables,
};
