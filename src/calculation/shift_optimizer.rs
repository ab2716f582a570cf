//! Shift-allocation heuristic.
//!
//! This is a proportional allocation keyed off the single peak of the hourly
//! needs, not an optimizer over the whole curve. Every shift duration gets
//! `ceil(peak × duration / mean_duration)` heads, regardless of when the need
//! occurs during the day. A coverage-constrained integer program would replace
//! it; until then results must stay reproducible against the heuristic.

use crate::error::{EngineError, EngineResult};
use crate::models::{
    OptimizationConstraints, OptimizationRecommendations, OptimizationResult, ShiftAllocation,
};

/// Hours of a standard shift used by the overtime estimate.
pub const STANDARD_SHIFT_HOURS: f64 = 8.0;

/// Overtime per allocated head below which an allocation counts as cost efficient.
pub const COST_EFFICIENT_OVERTIME_PER_HEAD: f64 = 0.1;

fn headcount_out_of_range(message: String) -> EngineError {
    EngineError::invalid_configuration(
        "hc_needs",
        format!("headcount exceeds the supported range: {}", message),
    )
}

/// Allocates headcount to each shift duration in proportion to its length.
///
/// # Arguments
///
/// * `hourly_needs` - Required agents per hour (only the maximum is used)
/// * `shift_durations` - Shift lengths in hours
/// * `constraints` - Carried for the caller; not read by the heuristic
///
/// # Errors
///
/// Returns [`EngineError::InvalidConfiguration`] if `shift_durations` is empty
/// or holds a non-positive or non-finite duration, or if a shift's allocation
/// or the total does not fit in a `u32` headcount.
///
/// # Examples
///
/// ```
/// use staffing_engine::calculation::optimize_shift_distribution;
/// use staffing_engine::models::OptimizationConstraints;
///
/// let allocation = optimize_shift_distribution(
///     &[3, 10, 7],
///     &[6.0, 8.0, 4.0],
///     &OptimizationConstraints::default(),
/// )
/// .unwrap();
/// assert_eq!(allocation.shift_allocations, vec![10, 14, 7]);
/// assert_eq!(allocation.total_hc, 31);
/// assert_eq!(allocation.overtime_hours, 106.0);
/// ```
pub fn optimize_shift_distribution(
    hourly_needs: &[u32],
    shift_durations: &[f64],
    _constraints: &OptimizationConstraints,
) -> EngineResult<ShiftAllocation> {
    if shift_durations.is_empty() {
        return Err(EngineError::invalid_configuration(
            "shift_durations",
            "at least one shift duration is required",
        ));
    }
    if let Some(bad) = shift_durations
        .iter()
        .find(|d| !d.is_finite() || **d <= 0.0)
    {
        return Err(EngineError::invalid_configuration(
            "shift_durations",
            format!("durations must be positive hours, got {}", bad),
        ));
    }

    let peak_need = f64::from(hourly_needs.iter().copied().max().unwrap_or(0));
    let avg_shift_duration = shift_durations.iter().sum::<f64>() / shift_durations.len() as f64;

    let shift_allocations = shift_durations
        .iter()
        .map(|duration| {
            let heads = (peak_need * duration / avg_shift_duration).ceil();
            if heads > f64::from(u32::MAX) {
                return Err(headcount_out_of_range(format!(
                    "a {}h shift would need {} heads",
                    duration, heads
                )));
            }
            Ok(heads as u32)
        })
        .collect::<EngineResult<Vec<u32>>>()?;

    let total_hc = shift_allocations
        .iter()
        .try_fold(0u32, |total, &heads| total.checked_add(heads))
        .ok_or_else(|| headcount_out_of_range("the total allocation overflows".to_string()))?;
    let overtime_hours =
        (f64::from(total_hc) * avg_shift_duration - peak_need * STANDARD_SHIFT_HOURS).max(0.0);

    Ok(ShiftAllocation {
        shift_allocations,
        total_hc,
        overtime_hours,
    })
}

/// Derives the recommendation flags for an allocation.
pub fn recommend(allocation: &ShiftAllocation) -> OptimizationRecommendations {
    OptimizationRecommendations {
        cost_efficiency: allocation.overtime_hours
            < f64::from(allocation.total_hc) * COST_EFFICIENT_OVERTIME_PER_HEAD,
        shift_balance: allocation.shift_allocations.iter().all(|&a| a > 0),
    }
}

/// Runs the heuristic and bundles the result with its recommendations.
pub fn optimize_with_recommendations(
    hourly_needs: &[u32],
    shift_durations: &[f64],
    constraints: OptimizationConstraints,
) -> EngineResult<OptimizationResult> {
    let optimization = optimize_shift_distribution(hourly_needs, shift_durations, &constraints)?;
    let recommendations = recommend(&optimization);
    Ok(OptimizationResult {
        optimization,
        recommendations,
        constraints,
    })
}
