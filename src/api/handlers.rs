//! HTTP request handlers for the Workforce Cost Optimization Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    contractor_cost, fte_cost, generate_scenarios, savings_summary, validate_headcount,
};
use crate::error::EngineError;
use crate::models::{EmploymentType, OptimizationResult, RequestSummary};

use super::request::{CostRequest, OptimizeRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/optimize", post(optimize_handler))
        .route("/cost-calculator", post(cost_calculator_handler))
        .route("/job-roles", get(job_roles_handler))
        .route("/locations", get(locations_handler))
        .with_state(state)
}

/// Converts a JSON extraction rejection into an API error body.
fn rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
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
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for POST /optimize endpoint.
///
/// Generates the three comparison scenarios, the savings summary, and
/// the narrative explanation for a staffing request.
async fn optimize_handler(
    State(state): State<AppState>,
    payload: Result<Json<OptimizeRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing optimization request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_error(rejection, correlation_id);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    match perform_optimization(&state, &request) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                job_role = %request.job_role,
                location = %request.location,
                headcount = request.headcount,
                savings = %result.savings.absolute,
                "Optimization completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Optimization failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for POST /cost-calculator endpoint.
///
/// Returns the cost breakdown for one engagement type at one location.
async fn cost_calculator_handler(
    State(state): State<AppState>,
    payload: Result<Json<CostRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing cost calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_error(rejection, correlation_id);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let catalog = state.config().catalog();
    let result = match request.employment_type {
        EmploymentType::Fte => fte_cost(catalog, &request.job_role, &request.location, request.headcount),
        EmploymentType::Contractor => {
            contractor_cost(catalog, &request.job_role, &request.location, request.headcount)
        }
    };

    match result {
        Ok(breakdown) => {
            info!(
                correlation_id = %correlation_id,
                job_role = %request.job_role,
                location = %request.location,
                total_cost = %breakdown.total_cost,
                "Cost calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(breakdown),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Cost calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for GET /job-roles endpoint.
async fn job_roles_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.config().job_roles().to_vec())
}

/// Handler for GET /locations endpoint.
async fn locations_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.config().locations().to_vec())
}

/// Performs the full optimization for a request.
fn perform_optimization(
    state: &AppState,
    request: &OptimizeRequest,
) -> Result<OptimizationResult, EngineError> {
    let catalog = state.config().catalog();

    let scenarios = generate_scenarios(
        catalog,
        &request.job_role,
        &request.location,
        request.headcount,
        request.employment_type,
    )?;

    let savings = savings_summary(&scenarios);
    let role = catalog.job_role(&request.job_role)?;
    let explanation = state.narrator().explain(&scenarios, &savings, role);

    // Already validated by the generator; re-validated here only to
    // narrow the type for the echo.
    let headcount = validate_headcount(request.headcount)?;

    Ok(OptimizationResult {
        analysis_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        scenarios,
        savings,
        explanation,
        metadata: RequestSummary {
            job_role: request.job_role.clone(),
            location: request.location.clone(),
            headcount,
            employment_type: request.employment_type,
        },
    })
}
