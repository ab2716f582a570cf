//! Calculation parameters and per-interval inputs.
//!
//! This module contains the [`CalculationParameters`] applied to a whole
//! forecast curve and the [`IntervalInput`] describing a single time slot.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Default target answer time, in seconds.
pub const DEFAULT_TARGET_ANSWER_TIME: f64 = 20.0;

fn default_target_answer_time() -> f64 {
    DEFAULT_TARGET_ANSWER_TIME
}

/// Global parameters for a dimensioning calculation.
///
/// # Example
///
/// ```
/// use staffing_engine::models::CalculationParameters;
///
/// let params = CalculationParameters::new(80.0, 10.0);
/// assert_eq!(params.target_answer_time, 20.0);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationParameters {
    /// Percentage of contacts (0-100) to be answered within the target answer time.
    pub target_service_level: f64,
    /// Target answer time in seconds.
    #[serde(default = "default_target_answer_time")]
    pub target_answer_time: f64,
    /// Shrinkage percentage (0-100): paid time not available for handling contacts.
    #[serde(default)]
    pub unproductivity_percent: f64,
}

impl CalculationParameters {
    /// Creates parameters with the default 20 second target answer time.
    pub fn new(target_service_level: f64, unproductivity_percent: f64) -> Self {
        Self {
            target_service_level,
            target_answer_time: DEFAULT_TARGET_ANSWER_TIME,
            unproductivity_percent,
        }
    }

    /// Overrides the target answer time.
    pub fn with_target_answer_time(mut self, seconds: f64) -> Self {
        self.target_answer_time = seconds;
        self
    }

    /// Checks that every parameter is inside its business range.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] when the service level is
    /// outside 0-100, the answer time is negative, or the unproductivity
    /// percentage is outside `[0, 100)`.
    pub fn validate(&self) -> EngineResult<()> {
        validate_percentage("target_service_level", self.target_service_level)?;
        if !self.target_answer_time.is_finite() || self.target_answer_time < 0.0 {
            return Err(EngineError::invalid_configuration(
                "target_answer_time",
                format!(
                    "must be a non-negative number of seconds, got {}",
                    self.target_answer_time
                ),
            ));
        }
        validate_unproductivity(self.unproductivity_percent)
    }
}

/// Inputs for a single interval's headcount need.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalInput {
    /// Contacts offered in the interval, expressed per hour.
    pub volume: f64,
    /// Average handle time (TMI) in seconds.
    pub tmi: f64,
    /// Target service level percentage.
    pub target_sla: f64,
    /// Unproductivity percentage.
    pub unproductivity: f64,
}

/// Rejects percentages outside 0-100.
pub(crate) fn validate_percentage(parameter: &str, value: f64) -> EngineResult<()> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(EngineError::invalid_configuration(
            parameter,
            format!("must be between 0 and 100, got {}", value),
        ));
    }
    Ok(())
}

/// Rejects unproductivity percentages that would make the shrinkage divisor
/// zero or negative.
pub(crate) fn validate_unproductivity(percent: f64) -> EngineResult<()> {
    if !percent.is_finite() || percent < 0.0 {
        return Err(EngineError::invalid_configuration(
            "unproductivity_percent",
            format!("must be a non-negative percentage, got {}", percent),
        ));
    }
    if percent >= 100.0 {
        return Err(EngineError::invalid_configuration(
            "unproductivity_percent",
            format!("must be below 100, got {}", percent),
        ));
    }
    Ok(())
}
