//! HTTP request handlers for the Supervisor Salary Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use super::request::{PerformanceRequest, SalaryRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/salary/calculate", post(salary_handler))
        .route("/performance/aggregate", post(performance_handler))
        .with_state(state)
}

fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
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

/// Handler for the POST /salary/calculate endpoint.
///
/// Consults the TTL cache first; a hit skips recomputation entirely. The
/// calculation itself is pure, so a stale miss merely duplicates work.
async fn salary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    if let Some(cached) = state.salary_cache().get(&request) {
        info!(
            correlation_id = %correlation_id,
            supervisor = %request.supervisor_code,
            "Serving salary calculation from cache"
        );
        return (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(cached),
        )
            .into_response();
    }

    match state.engine().calculate_supervisor_salary(
        &request.supervisor_code,
        request.start_date,
        request.end_date,
    ) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                supervisor = %request.supervisor_code,
                net_salary = %result.net_salary,
                warnings = result.warnings.len(),
                "Salary calculation completed"
            );
            state.salary_cache().insert(request, result.clone());
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
                supervisor = %request.supervisor_code,
                error = %err,
                "Salary calculation failed"
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

/// Handler for the POST /performance/aggregate endpoint.
async fn performance_handler(
    State(state): State<AppState>,
    payload: Result<Json<PerformanceRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing performance aggregation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    match state.engine().aggregate_performance(
        &request.supervisor_code,
        request.start_date,
        request.end_date,
    ) {
        Ok(aggregates) => {
            info!(
                correlation_id = %correlation_id,
                supervisor = %request.supervisor_code,
                workers = aggregates.len(),
                "Performance aggregation completed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(aggregates),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                supervisor = %request.supervisor_code,
                error = %err,
                "Performance aggregation failed"
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
