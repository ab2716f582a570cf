//! Request types for the Headcount Dimensioning Engine API.
//!
//! This module defines the JSON request structures for the calculation
//! endpoints. Optional fields fall back to the loaded configuration.

use serde::{Deserialize, Serialize};

use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::models::{
    CalculationParameters, DsrConstraints, OptimizationConstraints, PlanningPremise,
    WeeklySchedule,
};

/// Request body for the `/dimension` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionRequest {
    /// The forecast curves.
    pub premise: PlanningPremise,
    /// Overrides the default target service level.
    #[serde(default)]
    pub target_sla: Option<f64>,
    /// Overrides the default target answer time.
    #[serde(default)]
    pub target_answer_time: Option<f64>,
    /// Overrides the premise's unproductivity percentage.
    #[serde(default)]
    pub custom_unproductivity: Option<f64>,
}

impl DimensionRequest {
    /// Resolves the calculation parameters for this request.
    ///
    /// Precedence: request override, then premise (unproductivity only),
    /// then configuration defaults.
    pub fn parameters(&self, config: &ConfigLoader) -> CalculationParameters {
        let defaults = config.defaults();
        CalculationParameters {
            target_service_level: self.target_sla.unwrap_or(defaults.target_service_level),
            target_answer_time: self
                .target_answer_time
                .unwrap_or(defaults.target_answer_time),
            unproductivity_percent: self
                .custom_unproductivity
                .unwrap_or(self.premise.unproductivity_percent),
        }
    }
}

/// Request body for the `/schedule` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Required headcount per interval.
    pub hc_distribution: Vec<u32>,
    /// Overrides the default weekly-rest constraints.
    #[serde(default)]
    pub constraints: Option<DsrConstraints>,
}

/// Request body for the `/optimization` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationRequest {
    /// Required agents per hour.
    pub hc_needs: Vec<u32>,
    /// Shift lengths in hours. Takes precedence over `shift_types`.
    #[serde(default)]
    pub shift_durations: Option<Vec<f64>>,
    /// Shift codes from the catalog; empty or absent means the whole catalog.
    #[serde(default)]
    pub shift_types: Vec<String>,
    /// Overrides the default optimization constraints.
    #[serde(default)]
    pub constraints: Option<OptimizationConstraints>,
}

impl OptimizationRequest {
    /// Resolves the shift durations in hours.
    pub fn durations(&self, config: &ConfigLoader) -> EngineResult<Vec<f64>> {
        match &self.shift_durations {
            Some(durations) => Ok(durations.clone()),
            None => config.shift_durations_hours(&self.shift_types),
        }
    }
}

/// Request body for the `/compliance` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceRequest {
    /// The schedule to check.
    pub schedule: WeeklySchedule,
    /// Overrides the default weekly-rest constraints.
    #[serde(default)]
    pub constraints: Option<DsrConstraints>,
}
