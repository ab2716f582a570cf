//! Configuration loading and management for the Headcount Dimensioning Engine.
//!
//! This module provides functionality to load planning configurations from YAML
//! files, including calculation defaults, weekly-rest constraints, the shift
//! catalog and shift groups.
//!
//! # Example
//!
//! ```no_run
//! use staffing_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Default SLA: {}%", config.defaults().target_service_level);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    PlanningConfig, PlanningDefaults, PlanningFile, ShiftGroup, ShiftType, ShiftsFile,
};
