//! HTTP request handlers for the workforce analytics engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compare_to_benchmark, compute_metrics, compute_tenure, run_scenario};
use crate::config::DepartmentCategoryMap;
use crate::models::{
    BenchmarkReference, DEFAULT_HORIZON_MONTHS, EmployeeRecord, ScenarioChange, ScenarioOptions,
};

use super::request::{BenchmarkRequest, MetricsRequest, ScenarioRequest, TenureRequest};
use super::response::{
    ApiError, ApiErrorResponse, BenchmarkReport, MetricsReport, ReportMeta, ScenarioReport,
    TenureReport,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/metrics", post(metrics_handler))
        .route("/tenure", post(tenure_handler))
        .route("/benchmark", post(benchmark_handler))
        .route("/scenario", post(scenario_handler))
        .with_state(state)
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
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
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Handler for POST /metrics.
///
/// Aggregates a roster into a metrics snapshot, optionally including
/// tenure statistics.
async fn metrics_handler(
    State(state): State<AppState>,
    payload: Result<Json<MetricsRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    info!(
        correlation_id = %correlation_id,
        roster_size = request.roster.len(),
        "Processing metrics request"
    );

    let roster: Vec<EmployeeRecord> = request.roster.into_iter().map(Into::into).collect();

    let overrides = request.department_categories.map(DepartmentCategoryMap::new);
    let categories = overrides
        .as_ref()
        .unwrap_or_else(|| state.config().categories());

    let mut snapshot = compute_metrics(&roster, Some(categories), request.total_revenue);
    if request.include_tenure {
        let as_of = request.as_of.unwrap_or_else(|| Utc::now().date_naive());
        snapshot.tenure = Some(compute_tenure(&roster, as_of));
    }

    info!(
        correlation_id = %correlation_id,
        total_cost = %snapshot.summary.total_cost,
        department_count = snapshot.departments.len(),
        "Metrics computed"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(MetricsReport {
            meta: ReportMeta::stamp(),
            snapshot,
        }),
    )
        .into_response()
}

/// Handler for POST /tenure.
async fn tenure_handler(
    State(_state): State<AppState>,
    payload: Result<Json<TenureRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    info!(
        correlation_id = %correlation_id,
        roster_size = request.roster.len(),
        "Processing tenure request"
    );

    let roster: Vec<EmployeeRecord> = request.roster.into_iter().map(Into::into).collect();
    let as_of = request.as_of.unwrap_or_else(|| Utc::now().date_naive());
    let tenure = compute_tenure(&roster, as_of);

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(TenureReport {
            meta: ReportMeta::stamp(),
            tenure,
        }),
    )
        .into_response()
}

/// Handler for POST /benchmark.
///
/// Positions a value against either an inline reference or one resolved
/// from the configured catalog by metric key.
async fn benchmark_handler(
    State(state): State<AppState>,
    payload: Result<Json<BenchmarkRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let reference: BenchmarkReference = if let Some(inline) = request.reference {
        inline.into()
    } else if let Some(metric) = request.metric.as_deref() {
        match state.config().benchmark(metric) {
            Ok(reference) => reference.clone(),
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    metric = metric,
                    "Benchmark metric not found"
                );
                let api_error: ApiErrorResponse = err.into();
                return api_error.into_response();
            }
        }
    } else {
        return (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "application/json")],
            Json(ApiError::validation_error(
                "either 'metric' or 'reference' must be supplied",
            )),
        )
            .into_response();
    };

    let comparison = compare_to_benchmark(request.value, &reference);
    info!(
        correlation_id = %correlation_id,
        actual = %comparison.actual,
        percentile = %comparison.percentile,
        "Benchmark comparison computed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(BenchmarkReport {
            meta: ReportMeta::stamp(),
            comparison,
        }),
    )
        .into_response()
}

/// Handler for POST /scenario.
async fn scenario_handler(
    State(_state): State<AppState>,
    payload: Result<Json<ScenarioRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    info!(
        correlation_id = %correlation_id,
        roster_size = request.roster.len(),
        change_count = request.changes.len(),
        "Processing scenario request"
    );

    let roster: Vec<EmployeeRecord> = request.roster.into_iter().map(Into::into).collect();
    let changes: Vec<ScenarioChange> = request.changes.into_iter().map(Into::into).collect();
    let options = ScenarioOptions {
        horizon_months: request.horizon_months.unwrap_or(DEFAULT_HORIZON_MONTHS),
        starting_cash: request.starting_cash,
        monthly_revenue: request.monthly_revenue,
        revenue_growth_rate: request.revenue_growth_rate,
        now: request.as_of.unwrap_or_else(|| Utc::now().date_naive()),
    };

    match run_scenario(&roster, &changes, &options) {
        Ok(projection) => {
            info!(
                correlation_id = %correlation_id,
                horizon_months = options.horizon_months,
                year_end_savings = %projection.year_end.savings,
                "Scenario simulated"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ScenarioReport {
                    meta: ReportMeta::stamp(),
                    projection,
                }),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Scenario simulation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}
