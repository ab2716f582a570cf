//! Core data models for the Headcount Dimensioning Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod allocation;
mod calculation_result;
mod parameters;
mod premise;
mod schedule;

pub use allocation::{
    AgentRequirement, IntervalRequirement, OptimizationConstraints, OptimizationRecommendations,
    OptimizationResult, ShiftAllocation, ShrinkageBreakdown,
};
pub use calculation_result::{AuditWarning, DimensioningMetrics, DimensioningResult, ShiftGroupPeak};
pub use parameters::{CalculationParameters, DEFAULT_TARGET_ANSWER_TIME, IntervalInput};
pub(crate) use parameters::{validate_percentage, validate_unproductivity};
pub use premise::{PlanningPremise, ensure_same_length};
pub use schedule::{
    DAYS_IN_WEEK, DsrComplianceReport, DsrConstraints, SUNDAY, ScheduleResult, WeekPattern,
    WeeklySchedule,
};
