//! Full dimensioning run over a planning premise.
//!
//! Combines the HC distribution with per-interval occupancy, summary metrics,
//! interval labels, shift-group peaks and warnings for capped agent searches.

use std::time::Instant;

use chrono::Utc;
use uuid::Uuid;

use crate::config::PlanningConfig;
use crate::error::EngineResult;
use crate::models::{
    AuditWarning, CalculationParameters, DimensioningMetrics, DimensioningResult,
    IntervalRequirement, PlanningPremise, ShiftGroupPeak,
};

use super::distribution::calculate_interval_requirements;
use super::erlang::traffic_intensity;
use super::intervals::{interval_label, interval_start};
use super::occupancy::calculate_occupancy;

/// Warning code emitted for intervals whose agent search stopped at its cap.
pub const SEARCH_BOUND_EXCEEDED: &str = "SEARCH_BOUND_EXCEEDED";

/// The engine version stamped on every result.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let len = values.len();
    if len == 0 {
        return 0.0;
    }
    values.sum::<f64>() / len as f64
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Summarizes a distribution and its occupancy curve.
pub fn summarize(hc_distribution: &[u32], occupancy: &[f64]) -> DimensioningMetrics {
    let peak_hc = hc_distribution.iter().copied().max().unwrap_or(0);
    let peak_intervals = if hc_distribution.is_empty() {
        Vec::new()
    } else {
        hc_distribution
            .iter()
            .enumerate()
            .filter(|&(_, &hc)| hc == peak_hc)
            .map(|(index, _)| index)
            .collect()
    };

    DimensioningMetrics {
        peak_hc,
        avg_hc: round_to_cents(mean(hc_distribution.iter().map(|&hc| f64::from(hc)))),
        peak_intervals,
        avg_occupancy: mean(occupancy.iter().copied()),
        max_occupancy: occupancy.iter().copied().fold(0.0, f64::max),
    }
}

fn search_bound_warnings(
    requirements: &[IntervalRequirement],
    interval_minutes: u32,
) -> Vec<AuditWarning> {
    requirements
        .iter()
        .enumerate()
        .filter(|(_, r)| r.search_bound_hit)
        .map(|(index, r)| AuditWarning {
            code: SEARCH_BOUND_EXCEEDED.to_string(),
            message: format!(
                "Interval {} ({}): agent search stopped at {} agents without reaching the target service level",
                index,
                interval_label(index, interval_minutes),
                r.base_agents
            ),
            severity: "high".to_string(),
        })
        .collect()
}

/// Dimensions a premise: headcount, occupancy and metrics per interval.
///
/// `params.unproductivity_percent` is authoritative; the premise's own
/// percentage is only a default for callers building the parameters.
/// Occupancy is measured against the shrinkage-adjusted headcount.
///
/// # Errors
///
/// Returns [`EngineError::LengthMismatch`](crate::error::EngineError::LengthMismatch)
/// if the premise curves differ in length, or
/// [`EngineError::InvalidConfiguration`](crate::error::EngineError::InvalidConfiguration)
/// for out-of-range parameters or curve values.
///
/// # Examples
///
/// ```
/// use staffing_engine::calculation::dimension;
/// use staffing_engine::config::PlanningConfig;
/// use staffing_engine::models::{CalculationParameters, PlanningPremise};
///
/// let premise = PlanningPremise {
///     volume_curve: vec![0.0, 40.0, 100.0],
///     tmi_curve: vec![180.0; 3],
///     tma_curve: vec![],
///     unproductivity_percent: 10.0,
/// };
/// let params = CalculationParameters::new(80.0, 10.0);
///
/// let result = dimension(&premise, &params, &PlanningConfig::default()).unwrap();
/// assert_eq!(result.hc_distribution, vec![0, 5, 9]);
/// assert_eq!(result.metrics.peak_hc, 9);
/// assert_eq!(result.metrics.peak_intervals, vec![2]);
/// ```
pub fn dimension(
    premise: &PlanningPremise,
    params: &CalculationParameters,
    config: &PlanningConfig,
) -> EngineResult<DimensioningResult> {
    let start_time = Instant::now();
    params.validate()?;
    let intervals = premise.interval_count()?;
    let interval_minutes = config.defaults().interval_minutes;

    let requirements =
        calculate_interval_requirements(&premise.volume_curve, &premise.tmi_curve, params)?;
    let hc_distribution: Vec<u32> = requirements.iter().map(|r| r.headcount).collect();

    let occupancy: Vec<f64> = premise
        .volume_curve
        .iter()
        .zip(&premise.tmi_curve)
        .zip(&hc_distribution)
        .map(|((&volume, &tmi), &hc)| {
            calculate_occupancy(traffic_intensity(volume, tmi), f64::from(hc))
        })
        .collect();

    let interval_labels = (0..intervals)
        .map(|index| interval_label(index, interval_minutes))
        .collect();

    let shift_group_peaks = config
        .shift_groups()
        .iter()
        .map(|group| ShiftGroupPeak {
            name: group.name.clone(),
            peak_hc: hc_distribution
                .iter()
                .enumerate()
                .filter(|&(index, _)| group.contains(interval_start(index, interval_minutes)))
                .map(|(_, &hc)| hc)
                .max()
                .unwrap_or(0),
        })
        .collect();

    let metrics = summarize(&hc_distribution, &occupancy);
    let warnings = search_bound_warnings(&requirements, interval_minutes);

    Ok(DimensioningResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        hc_distribution,
        occupancy,
        interval_labels,
        metrics,
        shift_group_peaks,
        parameters: *params,
        intervals,
        warnings,
        duration_us: start_time.elapsed().as_micros() as u64,
    })
}
