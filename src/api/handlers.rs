//! HTTP request handlers for the Headcount Dimensioning Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    ENGINE_VERSION, calculate_dsr_compliance, dimension, ensure_roster_size,
    generate_weekly_schedule, optimize_with_recommendations,
};
use crate::error::EngineError;

use super::request::{ComplianceRequest, DimensionRequest, OptimizationRequest, ScheduleRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/dimension", post(dimension_handler))
        .route("/schedule", post(schedule_handler))
        .route("/optimization", post(optimization_handler))
        .route("/compliance", post(compliance_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
}

fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Calculation failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Unwraps a JSON body or builds the 400 response for the rejection.
fn parse_body<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, Response> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err(json_response(StatusCode::BAD_REQUEST, error))
}

/// Handler for GET /health.
async fn health_handler() -> Response {
    json_response(
        StatusCode::OK,
        json!({ "status": "healthy", "engine_version": ENGINE_VERSION }),
    )
}

/// Handler for POST /dimension.
///
/// Dimensions the submitted premise and returns the full report.
async fn dimension_handler(
    State(state): State<AppState>,
    payload: Result<Json<DimensionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing dimensioning request");

    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let config = state.config();
    let params = request.parameters(config);

    match dimension(&request.premise, &params, config.config()) {
        Ok(result) => {
            if result.has_capped_intervals() {
                warn!(
                    correlation_id = %correlation_id,
                    capped_intervals = result.warnings.len(),
                    "Agent search reached its cap below the target service level"
                );
            }
            info!(
                correlation_id = %correlation_id,
                intervals = result.intervals,
                peak_hc = result.metrics.peak_hc,
                duration_us = result.duration_us,
                "Dimensioning completed successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /schedule.
///
/// Builds a weekly rotation for the peak of the submitted distribution.
async fn schedule_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScheduleRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing schedule request");

    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let config = state.config();
    if let Err(err) = ensure_roster_size(&request.hc_distribution, config.defaults().max_roster_size)
    {
        return engine_error_response(correlation_id, err);
    }

    let constraints = request.constraints.unwrap_or(*config.config().dsr());
    let result = generate_weekly_schedule(&request.hc_distribution, &constraints);

    info!(
        correlation_id = %correlation_id,
        total_employees = result.total_employees,
        sunday_workers = result.sunday_workers,
        compliant = result.compliance.compliant,
        "Schedule generated"
    );
    json_response(StatusCode::OK, result)
}

/// Handler for POST /optimization.
///
/// Runs the shift-allocation heuristic over hourly needs.
async fn optimization_handler(
    State(state): State<AppState>,
    payload: Result<Json<OptimizationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing optimization request");

    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let config = state.config();
    let constraints = request
        .constraints
        .unwrap_or(*config.config().optimization());

    let result = request.durations(config).and_then(|durations| {
        optimize_with_recommendations(&request.hc_needs, &durations, constraints)
    });

    match result {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                total_hc = result.optimization.total_hc,
                overtime_hours = result.optimization.overtime_hours,
                "Optimization completed successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /compliance.
///
/// Checks a weekly schedule against the weekly-rest rules.
async fn compliance_handler(
    State(state): State<AppState>,
    payload: Result<Json<ComplianceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing compliance request");

    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let constraints = request
        .constraints
        .unwrap_or(*state.config().config().dsr());
    let report = calculate_dsr_compliance(&request.schedule, &constraints);

    if !report.compliant {
        warn!(
            correlation_id = %correlation_id,
            violations = report.violations.len(),
            "Schedule violates weekly rest rules"
        );
    }
    json_response(StatusCode::OK, report)
}
