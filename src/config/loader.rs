//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading fleet
//! configuration (salary methods, equipment pricing, tunables) from YAML
//! files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{
    EquipmentConfig, EquipmentPricing, FleetConfig, FleetFile, FleetMetadata, SalariesConfig,
    SalaryConfig, Tunables,
};

/// Loads and provides access to fleet configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides methods to query per-supervisor salary configurations and
/// equipment pricing.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/fleet/
/// ├── fleet.yaml      # Fleet metadata and tunables
/// ├── salaries.yaml   # Per-supervisor salary configurations
/// └── equipment.yaml  # Equipment unit prices
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/fleet").unwrap();
///
/// let config = loader.salary_config("SUP-001").unwrap();
/// println!("Method: {:?}", config.method);
///
/// let pricing = loader.equipment_pricing();
/// println!("Helmet price: {}", pricing.helmet);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: FleetConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/fleet")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let fleet_path = path.join("fleet.yaml");
        let fleet_file = Self::load_yaml::<FleetFile>(&fleet_path)?;

        let salaries_path = path.join("salaries.yaml");
        let salaries_config = Self::load_yaml::<SalariesConfig>(&salaries_path)?;

        let equipment_path = path.join("equipment.yaml");
        let equipment_config = Self::load_yaml::<EquipmentConfig>(&equipment_path)?;

        let config = FleetConfig::new(
            fleet_file.metadata,
            salaries_config.salaries,
            equipment_config.pricing,
            fleet_file.tunables.unwrap_or_default(),
        );

        Ok(Self { config })
    }

    /// Wraps an already-built [`FleetConfig`], bypassing the filesystem.
    ///
    /// Used by tests and by callers that source configuration elsewhere.
    pub fn from_config(config: FleetConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying fleet configuration.
    pub fn config(&self) -> &FleetConfig {
        &self.config
    }

    /// Returns the fleet metadata.
    pub fn metadata(&self) -> &FleetMetadata {
        self.config.metadata()
    }

    /// Gets the salary configuration for a supervisor.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::SalaryConfigNotFound`] when no configuration
    /// exists for the supervisor. This is the only data-absence condition
    /// that fails a salary calculation outright.
    pub fn salary_config(&self, supervisor_code: &str) -> EngineResult<&SalaryConfig> {
        self.config.salaries().get(supervisor_code).ok_or_else(|| {
            EngineError::SalaryConfigNotFound {
                supervisor_code: supervisor_code.to_string(),
            }
        })
    }

    /// Returns the equipment pricing.
    pub fn equipment_pricing(&self) -> &EquipmentPricing {
        self.config.equipment_pricing()
    }

    /// Returns the engine tunables.
    pub fn tunables(&self) -> &Tunables {
        self.config.tunables()
    }
}
