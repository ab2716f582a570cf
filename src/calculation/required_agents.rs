//! Required-agents search.
//!
//! Finds the smallest agent count whose Erlang-C service level reaches the
//! target. The search starts at the stability minimum `ceil(traffic)` and
//! walks up one agent at a time while `agents < 3 × traffic`.

use tracing::debug;

use crate::models::AgentRequirement;

use super::erlang::{service_level, traffic_intensity};

/// Multiple of the offered traffic at which the agent search gives up.
pub const SEARCH_CAP_FACTOR: f64 = 3.0;

/// Returns the minimum number of agents meeting `target_service_level`.
///
/// # Arguments
///
/// * `volume` - Contacts offered per hour
/// * `handle_time` - Average handle time in seconds
/// * `target_service_level` - Percentage (0-100) to answer within the target time
/// * `target_answer_time` - Target answer time in seconds (usually
///   [`DEFAULT_TARGET_ANSWER_TIME`](crate::models::DEFAULT_TARGET_ANSWER_TIME))
///
/// Non-positive volume or handle time returns a zero requirement. If no count
/// below `3 × traffic` qualifies, the count the search stopped at is returned
/// and `search_bound_hit` is set when that count still misses the target.
/// The search never goes past `u32::MAX`; traffic beyond that returns
/// `u32::MAX` agents with `search_bound_hit` set.
///
/// # Examples
///
/// ```
/// use staffing_engine::calculation::calculate_required_agents;
///
/// // 100 calls/hour at 3 minutes each is 5 Erlangs.
/// let requirement = calculate_required_agents(100.0, 180.0, 80.0, 20.0);
/// assert_eq!(requirement.agents, 8);
/// assert!(!requirement.search_bound_hit);
/// ```
pub fn calculate_required_agents(
    volume: f64,
    handle_time: f64,
    target_service_level: f64,
    target_answer_time: f64,
) -> AgentRequirement {
    if volume <= 0.0 || handle_time <= 0.0 {
        return AgentRequirement::NONE;
    }

    let traffic = traffic_intensity(volume, handle_time);
    let max_agents = f64::from(u32::MAX);
    let start = traffic.ceil();
    if start > max_agents {
        debug!(traffic, "Offered traffic exceeds the countable agent range");
        return AgentRequirement {
            agents: u32::MAX,
            search_bound_hit: true,
        };
    }

    let cap = (traffic * SEARCH_CAP_FACTOR).min(max_agents);
    let mut agents = start as u32;

    while f64::from(agents) < cap {
        if service_level(agents, traffic, handle_time, target_answer_time) >= target_service_level
        {
            return AgentRequirement {
                agents,
                search_bound_hit: false,
            };
        }
        match agents.checked_add(1) {
            Some(next) => agents = next,
            None => break,
        }
    }

    let achieved = service_level(agents, traffic, handle_time, target_answer_time);
    let search_bound_hit = achieved < target_service_level;
    if search_bound_hit {
        debug!(
            traffic,
            agents,
            achieved_service_level = achieved,
            target_service_level,
            "Agent search stopped at its cap"
        );
    }

    AgentRequirement {
        agents,
        search_bound_hit,
    }
}
