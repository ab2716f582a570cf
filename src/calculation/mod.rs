//! Calculation logic for the Headcount Dimensioning Engine.
//!
//! This module contains the staffing calculations: the Erlang-C wait
//! probability, the required-agents search, per-interval and curve-level
//! headcount needs, occupancy, shrinkage decomposition, the proportional
//! shift-allocation heuristic, weekly-rest (DSR) compliance and rotation,
//! interval helpers and the full dimensioning report.
//!
//! Every function here is pure apart from `tracing` output.

mod dimensioning;
mod distribution;
mod dsr;
mod erlang;
mod hc_need;
mod intervals;
mod occupancy;
mod required_agents;
mod rotation;
mod shift_optimizer;
mod shrinkage;

pub use dimensioning::{ENGINE_VERSION, SEARCH_BOUND_EXCEEDED, dimension, summarize};
pub use distribution::{calculate_hc_distribution, calculate_interval_requirements};
pub use dsr::calculate_dsr_compliance;
pub use erlang::{SECONDS_PER_HOUR, erlang_b, erlang_c, service_level, traffic_intensity};
pub use hc_need::{calculate_hc_need, calculate_interval_requirement};
pub use intervals::{
    DEFAULT_INTERVAL_MINUTES, MINUTES_PER_DAY, generate_time_intervals, interval_label,
    interval_start, is_time_in_window, minutes_since_midnight, parse_time_of_day,
};
pub use occupancy::{MAX_OCCUPANCY, calculate_occupancy};
pub use required_agents::{SEARCH_CAP_FACTOR, calculate_required_agents};
pub use rotation::{DEFAULT_MAX_ROSTER_SIZE, ensure_roster_size, generate_weekly_schedule};
pub use shift_optimizer::{
    COST_EFFICIENT_OVERTIME_PER_HEAD, STANDARD_SHIFT_HOURS, optimize_shift_distribution,
    optimize_with_recommendations, recommend,
};
pub use shrinkage::{calculate_shrinkage, productive_hours};
