//! Dimensioning result models for the Headcount Dimensioning Engine.
//!
//! This module contains the [`DimensioningResult`] type and its associated
//! structures that capture all outputs from a curve-level dimensioning run:
//! the HC distribution, per-interval occupancy, summary metrics and warnings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CalculationParameters;

/// A warning generated during calculation.
///
/// Warnings indicate potential issues that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// Summary metrics over an HC distribution.
///
/// # Example
///
/// ```
/// use staffing_engine::models::DimensioningMetrics;
///
/// let metrics = DimensioningMetrics {
///     peak_hc: 9,
///     avg_hc: 4.67,
///     peak_intervals: vec![2],
///     avg_occupancy: 50.0,
///     max_occupancy: 62.5,
/// };
/// assert_eq!(metrics.peak_intervals, vec![2]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensioningMetrics {
    /// Highest headcount over all intervals.
    pub peak_hc: u32,
    /// Mean headcount, rounded to two decimals.
    pub avg_hc: f64,
    /// Indices of the intervals at peak headcount.
    pub peak_intervals: Vec<usize>,
    /// Mean occupancy percentage.
    pub avg_occupancy: f64,
    /// Highest occupancy percentage.
    pub max_occupancy: f64,
}

/// Peak headcount inside one shift group's time window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftGroupPeak {
    /// Name of the shift group (e.g. "Madrugada").
    pub name: String,
    /// Highest headcount among the intervals that start inside the group window.
    pub peak_hc: u32,
}

/// The complete result of a dimensioning calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensioningResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Required headcount per interval.
    pub hc_distribution: Vec<u32>,
    /// Occupancy percentage per interval.
    pub occupancy: Vec<f64>,
    /// Start time (`HH:MM`) of each interval.
    pub interval_labels: Vec<String>,
    /// Summary metrics.
    pub metrics: DimensioningMetrics,
    /// Peak headcount per shift group.
    pub shift_group_peaks: Vec<ShiftGroupPeak>,
    /// The parameters the calculation ran with.
    pub parameters: CalculationParameters,
    /// Number of intervals in the curves.
    pub intervals: usize,
    /// Advisory warnings, such as capped agent searches.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

impl DimensioningResult {
    /// Returns true if any interval's agent search stopped at its cap.
    pub fn has_capped_intervals(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| w.code == crate::calculation::SEARCH_BOUND_EXCEEDED)
    }
}
