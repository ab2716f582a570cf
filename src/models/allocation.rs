//! Staffing requirement and allocation models.
//!
//! These are the plain value types returned by the calculation layer:
//! agent requirements, shrinkage breakdowns and shift allocations.

use serde::{Deserialize, Serialize};

/// Result of the required-agents search for one load.
///
/// `search_bound_hit` is set when the search stopped at its safety cap and the
/// returned count does not reach the target service level. Callers should
/// treat such a value as under-provisioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AgentRequirement {
    /// Number of agents handling contacts (before shrinkage).
    pub agents: u32,
    /// True if the search cap was reached without meeting the target.
    pub search_bound_hit: bool,
}

impl AgentRequirement {
    /// A zero requirement for intervals with no load.
    pub const NONE: AgentRequirement = AgentRequirement {
        agents: 0,
        search_bound_hit: false,
    };
}

/// Shrinkage-adjusted requirement for one interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IntervalRequirement {
    /// Agents needed on the phones.
    pub base_agents: u32,
    /// Headcount needed once unproductive time is accounted for.
    pub headcount: u32,
    /// Carried over from the agent search.
    pub search_bound_hit: bool,
}

/// Decomposition of a given headcount into productive and unproductive parts.
///
/// # Example
///
/// ```
/// use staffing_engine::calculation::calculate_shrinkage;
///
/// let split = calculate_shrinkage(100, 20.0).unwrap();
/// assert_eq!(split.productive_hc, 80);
/// assert_eq!(split.unproductive_hc, 20);
/// assert_eq!(split.total_required, 125);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShrinkageBreakdown {
    /// Headcount available for productive work, rounded down.
    pub productive_hc: u32,
    /// The remainder of the base headcount.
    pub unproductive_hc: u32,
    /// Headcount needed so that the base headcount is productive, rounded up.
    pub total_required: u32,
}

/// Constraints passed to the shift-allocation heuristic.
///
/// The current heuristic does not read them; they are echoed back to the
/// caller with the result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizationConstraints {
    /// Minimum fraction (0-1) of employees working on Sunday.
    pub min_sunday_work: f64,
    /// Maximum overtime as a fraction of scheduled hours.
    pub max_overtime_ratio: f64,
}

impl Default for OptimizationConstraints {
    fn default() -> Self {
        Self {
            min_sunday_work: 0.75,
            max_overtime_ratio: 0.2,
        }
    }
}

/// Output of the shift-allocation heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftAllocation {
    /// Headcount per shift duration, in the order the durations were given.
    pub shift_allocations: Vec<u32>,
    /// Sum of all allocations.
    pub total_hc: u32,
    /// Estimated overtime hours.
    pub overtime_hours: f64,
}

/// Quick reading of a [`ShiftAllocation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationRecommendations {
    /// Overtime stays under 10% of one hour per allocated head.
    pub cost_efficiency: bool,
    /// Every shift duration received at least one head.
    pub shift_balance: bool,
}

/// A shift allocation with its recommendations and the constraints it was run with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// The allocation itself.
    pub optimization: ShiftAllocation,
    /// Derived recommendations.
    pub recommendations: OptimizationRecommendations,
    /// The constraints supplied by the caller.
    pub constraints: OptimizationConstraints,
}
