//! Per-interval headcount need.
//!
//! Converts the agents needed on the phones into the headcount to schedule,
//! scaling up by the unproductive share of paid time.

use crate::error::EngineResult;
use crate::models::{IntervalInput, IntervalRequirement, validate_unproductivity};

use super::required_agents::calculate_required_agents;

/// Scales a base agent count up for shrinkage and rounds up.
///
/// The caller must have validated `unproductivity_percent` to be in `[0, 100)`.
fn adjust_for_unproductivity(base_agents: u32, unproductivity_percent: f64) -> u32 {
    let adjusted = f64::from(base_agents) / (1.0 - unproductivity_percent / 100.0);
    adjusted.ceil() as u32
}

/// Computes the base agents and the shrinkage-adjusted headcount for one interval.
///
/// # Errors
///
/// Returns [`EngineError::InvalidConfiguration`](crate::error::EngineError::InvalidConfiguration)
/// if the unproductivity percentage is negative, non-finite or 100 or more.
pub fn calculate_interval_requirement(
    input: &IntervalInput,
    target_answer_time: f64,
) -> EngineResult<IntervalRequirement> {
    validate_unproductivity(input.unproductivity)?;

    if input.volume <= 0.0 || input.tmi <= 0.0 {
        return Ok(IntervalRequirement::default());
    }

    let requirement =
        calculate_required_agents(input.volume, input.tmi, input.target_sla, target_answer_time);

    Ok(IntervalRequirement {
        base_agents: requirement.agents,
        headcount: adjust_for_unproductivity(requirement.agents, input.unproductivity),
        search_bound_hit: requirement.search_bound_hit,
    })
}

/// Returns the shrinkage-adjusted headcount for one interval, using the
/// default 20 second target answer time.
///
/// # Examples
///
/// ```
/// use staffing_engine::calculation::calculate_hc_need;
/// use staffing_engine::models::IntervalInput;
///
/// let input = IntervalInput { volume: 100.0, tmi: 180.0, target_sla: 80.0, unproductivity: 10.0 };
/// // 8 agents / 0.9 = 8.9, rounded up.
/// assert_eq!(calculate_hc_need(&input).unwrap(), 9);
///
/// let idle = IntervalInput { volume: 0.0, tmi: 100.0, target_sla: 80.0, unproductivity: 10.0 };
/// assert_eq!(calculate_hc_need(&idle).unwrap(), 0);
/// ```
pub fn calculate_hc_need(input: &IntervalInput) -> EngineResult<u32> {
    calculate_interval_requirement(input, crate::models::DEFAULT_TARGET_ANSWER_TIME)
        .map(|r| r.headcount)
}
