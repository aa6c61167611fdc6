//! Response types for the workforce analytics engine API.
//!
//! This module defines the report envelopes returned by the endpoints and
//! the error response structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{BenchmarkComparison, MetricsSnapshot, ScenarioProjection, TenureBlock};

/// Metadata attached to every successful analysis response.
///
/// The engine itself is deterministic; the id and timestamp exist only at
/// this layer so responses can be traced and stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Unique identifier for this analysis.
    pub analysis_id: Uuid,
    /// When the analysis was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced it.
    pub engine_version: String,
}

impl ReportMeta {
    /// Stamps fresh metadata for a response.
    pub fn stamp() -> Self {
        Self {
            analysis_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Response body for the `/metrics` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsReport {
    /// Response metadata.
    #[serde(flatten)]
    pub meta: ReportMeta,
    /// The computed metrics snapshot.
    pub snapshot: MetricsSnapshot,
}

/// Response body for the `/tenure` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenureReport {
    /// Response metadata.
    #[serde(flatten)]
    pub meta: ReportMeta,
    /// The computed tenure statistics.
    pub tenure: TenureBlock,
}

/// Response body for the `/benchmark` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Response metadata.
    #[serde(flatten)]
    pub meta: ReportMeta,
    /// The computed benchmark comparison.
    pub comparison: BenchmarkComparison,
}

/// Response body for the `/scenario` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// Response metadata.
    #[serde(flatten)]
    pub meta: ReportMeta,
    /// The simulated projection.
    pub projection: ScenarioProjection,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::UnknownEmployee { id } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNKNOWN_EMPLOYEE",
                    format!("Scenario change references unknown employee: {}", id),
                    "Remove changes must reference an employee present in the baseline roster",
                ),
            },
            EngineError::InvalidChange { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_CHANGE", format!("Invalid scenario change: {}", message)),
            },
            EngineError::InvalidHorizon { months } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new(
                    "INVALID_HORIZON",
                    format!("Scenario horizon must be at least one month, got {}", months),
                ),
            },
            EngineError::BenchmarkNotFound { metric } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "BENCHMARK_NOT_FOUND",
                    format!("Benchmark reference not found for metric: {}", metric),
                    "Supply an inline reference or use a metric key from the configured catalog",
                ),
            },
        }
    }
}
