//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading planning
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{PlanningConfig, PlanningDefaults, PlanningFile, ShiftType, ShiftsFile};

/// Loads and provides access to planning configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query calculation defaults and the shift catalog.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── planning.yaml   # Calculation defaults, DSR and optimizer constraints
/// └── shifts.yaml     # Shift catalog and shift groups
/// ```
///
/// # Example
///
/// ```no_run
/// use staffing_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let shift = loader.get_shift_type("8:12").unwrap();
/// println!("8:12 shift: {} productive hours", shift.productive_hours());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PlanningConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any value is outside its business range
    ///
    /// # Example
    ///
    /// ```no_run
    /// use staffing_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), staffing_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let planning = Self::load_yaml::<PlanningFile>(&path.join("planning.yaml"))?;
        let shifts = Self::load_yaml::<ShiftsFile>(&path.join("shifts.yaml"))?;

        Self::from_config(PlanningConfig::new(planning, shifts))
    }

    /// Wraps an in-memory configuration after validating it.
    pub fn from_config(config: PlanningConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
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

    /// Returns the underlying planning configuration.
    pub fn config(&self) -> &PlanningConfig {
        &self.config
    }

    /// Returns the calculation defaults.
    pub fn defaults(&self) -> &PlanningDefaults {
        self.config.defaults()
    }

    /// Gets a shift type by its code.
    ///
    /// # Returns
    ///
    /// Returns the shift type if found, or `ShiftTypeNotFound` error.
    pub fn get_shift_type(&self, code: &str) -> EngineResult<&ShiftType> {
        self.config
            .shift_types()
            .iter()
            .find(|s| s.code == code)
            .ok_or_else(|| EngineError::ShiftTypeNotFound {
                code: code.to_string(),
            })
    }

    /// Resolves shift codes to their durations in hours.
    ///
    /// An empty list resolves to the whole catalog, in catalog order.
    pub fn shift_durations_hours(&self, codes: &[String]) -> EngineResult<Vec<f64>> {
        if codes.is_empty() {
            return Ok(self
                .config
                .shift_types()
                .iter()
                .map(ShiftType::duration_hours)
                .collect());
        }

        codes
            .iter()
            .map(|code| self.get_shift_type(code).map(ShiftType::duration_hours))
            .collect()
    }
}
