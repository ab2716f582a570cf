//! Configuration types for headcount planning.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::calculation::{
    DEFAULT_INTERVAL_MINUTES, DEFAULT_MAX_ROSTER_SIZE, MINUTES_PER_DAY, is_time_in_window,
    parse_time_of_day,
};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    CalculationParameters, DEFAULT_TARGET_ANSWER_TIME, DsrConstraints, OptimizationConstraints,
    validate_percentage,
};

fn deserialize_hh_mm<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
    let text = String::deserialize(deserializer)?;
    parse_time_of_day("time", &text).map_err(serde::de::Error::custom)
}

fn serialize_hh_mm<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&time.format("%H:%M").to_string())
}

/// Default calculation settings applied when a request leaves them unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningDefaults {
    /// Target service level percentage.
    pub target_service_level: f64,
    /// Target answer time in seconds.
    #[serde(default = "default_target_answer_time")]
    pub target_answer_time: f64,
    /// Unproductivity percentage used when a premise carries none.
    #[serde(default)]
    pub unproductivity_percent: f64,
    /// Width of one curve interval in minutes.
    #[serde(default = "default_interval_minutes")]
    pub interval_minutes: u32,
    /// Largest peak headcount a weekly rotation may be generated for.
    #[serde(default = "default_max_roster_size")]
    pub max_roster_size: u32,
}

fn default_target_answer_time() -> f64 {
    DEFAULT_TARGET_ANSWER_TIME
}

fn default_interval_minutes() -> u32 {
    DEFAULT_INTERVAL_MINUTES
}

fn default_max_roster_size() -> u32 {
    DEFAULT_MAX_ROSTER_SIZE
}

impl Default for PlanningDefaults {
    fn default() -> Self {
        Self {
            target_service_level: 80.0,
            target_answer_time: DEFAULT_TARGET_ANSWER_TIME,
            unproductivity_percent: 0.0,
            interval_minutes: DEFAULT_INTERVAL_MINUTES,
            max_roster_size: DEFAULT_MAX_ROSTER_SIZE,
        }
    }
}

impl PlanningDefaults {
    /// Returns the defaults as calculation parameters.
    pub fn to_parameters(&self) -> CalculationParameters {
        CalculationParameters {
            target_service_level: self.target_service_level,
            target_answer_time: self.target_answer_time,
            unproductivity_percent: self.unproductivity_percent,
        }
    }
}

/// Planning file structure (`planning.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct PlanningFile {
    /// Calculation defaults.
    pub defaults: PlanningDefaults,
    /// Weekly-rest constraints.
    #[serde(default)]
    pub dsr: DsrConstraints,
    /// Shift-allocation constraints.
    #[serde(default)]
    pub optimization: OptimizationConstraints,
}

/// A contracted shift length and its typical unproductive share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftType {
    /// The shift code (e.g., "6:20").
    pub code: String,
    /// Paid length of the shift in minutes.
    pub duration_minutes: u32,
    /// Fraction (0-1) of the shift that is not productive.
    pub unproductivity_rate: f64,
}

impl ShiftType {
    /// Returns the paid length of the shift in hours.
    pub fn duration_hours(&self) -> f64 {
        f64::from(self.duration_minutes) / 60.0
    }

    /// Returns the productive hours of one shift.
    pub fn productive_hours(&self) -> f64 {
        crate::calculation::productive_hours(self.duration_hours(), self.unproductivity_rate)
    }
}

/// A named window of the day (e.g., "Noite" 18:00-23:30).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftGroup {
    /// The group name.
    pub name: String,
    /// Window start, inclusive.
    #[serde(deserialize_with = "deserialize_hh_mm", serialize_with = "serialize_hh_mm")]
    pub start: NaiveTime,
    /// Window end, inclusive. May be earlier than `start` for overnight groups.
    #[serde(deserialize_with = "deserialize_hh_mm", serialize_with = "serialize_hh_mm")]
    pub end: NaiveTime,
}

impl ShiftGroup {
    fn new(name: &str, start: (u32, u32), end: (u32, u32)) -> Self {
        Self {
            name: name.to_string(),
            start: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap_or(NaiveTime::MIN),
            end: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap_or(NaiveTime::MIN),
        }
    }

    /// Returns true if `time` falls inside this group's window.
    pub fn contains(&self, time: NaiveTime) -> bool {
        is_time_in_window(time, self.start, self.end)
    }
}

/// Shifts file structure (`shifts.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftsFile {
    /// The shift catalog.
    pub shift_types: Vec<ShiftType>,
    /// Shift groups used for reporting.
    #[serde(default)]
    pub shift_groups: Vec<ShiftGroup>,
}

/// The complete planning configuration.
///
/// Aggregates the settings of `planning.yaml` and `shifts.yaml`. The
/// [`Default`] value carries the standard catalog (6:20, 8:12 and 4:00 shifts)
/// and the four standard shift groups.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanningConfig {
    defaults: PlanningDefaults,
    dsr: DsrConstraints,
    optimization: OptimizationConstraints,
    shift_types: Vec<ShiftType>,
    shift_groups: Vec<ShiftGroup>,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            defaults: PlanningDefaults::default(),
            dsr: DsrConstraints::default(),
            optimization: OptimizationConstraints::default(),
            shift_types: vec![
                ShiftType {
                    code: "6:20".to_string(),
                    duration_minutes: 380,
                    unproductivity_rate: 0.135,
                },
                ShiftType {
                    code: "8:12".to_string(),
                    duration_minutes: 492,
                    unproductivity_rate: 0.18,
                },
                ShiftType {
                    code: "4:00".to_string(),
                    duration_minutes: 240,
                    unproductivity_rate: 0.0871,
                },
            ],
            shift_groups: vec![
                ShiftGroup::new("Madrugada", (0, 0), (5, 30)),
                ShiftGroup::new("Manhã", (6, 0), (11, 30)),
                ShiftGroup::new("Tarde", (12, 0), (17, 30)),
                ShiftGroup::new("Noite", (18, 0), (23, 30)),
            ],
        }
    }
}

impl PlanningConfig {
    /// Creates a PlanningConfig from the two configuration files.
    pub fn new(planning: PlanningFile, shifts: ShiftsFile) -> Self {
        Self {
            defaults: planning.defaults,
            dsr: planning.dsr,
            optimization: planning.optimization,
            shift_types: shifts.shift_types,
            shift_groups: shifts.shift_groups,
        }
    }

    /// Returns the calculation defaults.
    pub fn defaults(&self) -> &PlanningDefaults {
        &self.defaults
    }

    /// Returns the default weekly-rest constraints.
    pub fn dsr(&self) -> &DsrConstraints {
        &self.dsr
    }

    /// Returns the default shift-allocation constraints.
    pub fn optimization(&self) -> &OptimizationConstraints {
        &self.optimization
    }

    /// Returns the shift catalog.
    pub fn shift_types(&self) -> &[ShiftType] {
        &self.shift_types
    }

    /// Returns the shift groups.
    pub fn shift_groups(&self) -> &[ShiftGroup] {
        &self.shift_groups
    }

    /// Checks every value against its business range.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] for the first value out of range.
    pub fn validate(&self) -> EngineResult<()> {
        self.defaults.to_parameters().validate()?;

        let interval = self.defaults.interval_minutes;
        if interval == 0 || interval > MINUTES_PER_DAY {
            return Err(EngineError::invalid_configuration(
                "interval_minutes",
                format!("must be between 1 and {}, got {}", MINUTES_PER_DAY, interval),
            ));
        }
        if self.defaults.max_roster_size == 0 {
            return Err(EngineError::invalid_configuration(
                "max_roster_size",
                "must be at least 1",
            ));
        }

        validate_fraction("dsr.min_sunday_work", self.dsr.min_sunday_work)?;
        if !(1..=7).contains(&self.dsr.max_weekly_days) {
            return Err(EngineError::invalid_configuration(
                "dsr.max_weekly_days",
                format!("must be between 1 and 7, got {}", self.dsr.max_weekly_days),
            ));
        }

        validate_fraction("optimization.min_sunday_work", self.optimization.min_sunday_work)?;
        if !self.optimization.max_overtime_ratio.is_finite()
            || self.optimization.max_overtime_ratio < 0.0
        {
            return Err(EngineError::invalid_configuration(
                "optimization.max_overtime_ratio",
                format!("must be non-negative, got {}", self.optimization.max_overtime_ratio),
            ));
        }

        for shift in &self.shift_types {
            if shift.duration_minutes == 0 {
                return Err(EngineError::invalid_configuration(
                    "shift_types.duration_minutes",
                    format!("shift '{}' has a zero duration", shift.code),
                ));
            }
            validate_percentage(
                "shift_types.unproductivity_rate",
                shift.unproductivity_rate * 100.0,
            )?;
        }

        Ok(())
    }
}

fn validate_fraction(parameter: &str, value: f64) -> EngineResult<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(EngineError::invalid_configuration(
            parameter,
            format!("must be between 0 and 1, got {}", value),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(PlanningConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_catalog() {
        let config = PlanningConfig::default();
        let codes: Vec<&str> = config.shift_types().iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, vec!["6:20", "8:12", "4:00"]);
        assert_eq!(config.shift_groups().len(), 4);
    }

    #[test]
    fn test_shift_type_hours() {
        let shift = ShiftType {
            code: "8:12".to_string(),
            duration_minutes: 492,
            unproductivity_rate: 0.18,
        };
        assert!((shift.duration_hours() - 8.2).abs() < 1e-9);
        assert!((shift.productive_hours() - 6.724).abs() < 1e-9);
    }

    #[test]
    fn test_shift_group_deserializes_hh_mm() {
        let group: ShiftGroup =
            serde_yaml::from_str("name: Noite\nstart: \"18:00\"\nend: \"05:30\"\n").unwrap();
        assert_eq!(group.start, NaiveTime::from_hms_opt(18, 0, 0).unwrap());
        assert!(group.contains(NaiveTime::from_hms_opt(1, 0, 0).unwrap()));
        assert!(!group.contains(NaiveTime::from_hms_opt(12, 0, 0).unwrap()));
    }

    #[test]
    fn test_shift_group_rejects_bad_time() {
        let result: Result<ShiftGroup, _> =
            serde_yaml::from_str("name: Noite\nstart: \"late\"\nend: \"05:30\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let mut config = PlanningConfig::default();
        config.defaults.interval_minutes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_roster_limit_is_rejected() {
        let mut config = PlanningConfig::default();
        config.defaults.max_roster_size = 0;
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_roster_limit_defaults_when_absent() {
        let defaults: PlanningDefaults =
            serde_yaml::from_str("target_service_level: 80
").unwrap();
        assert_eq!(defaults.max_roster_size, DEFAULT_MAX_ROSTER_SIZE);
    }

    #[test]
    fn test_unproductivity_default_of_100_is_rejected() {
        let mut config = PlanningConfig::default();
        config.defaults.unproductivity_percent = 100.0;
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_max_weekly_days_out_of_range_is_rejected() {
        let mut config = PlanningConfig::default();
        config.dsr.max_weekly_days = 8;
        assert!(config.validate().is_err());
    }
}
