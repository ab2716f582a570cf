//! HTTP API module for the Headcount Dimensioning Engine.
//!
//! This module provides the REST API endpoints for dimensioning, weekly
//! rotations, shift allocation and weekly-rest compliance checks.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ComplianceRequest, DimensionRequest, OptimizationRequest, ScheduleRequest};
pub use response::ApiError;
pub use state::AppState;
