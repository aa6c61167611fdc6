//! HTTP API module for the workforce analytics engine.
//!
//! This module provides the REST API endpoints for computing roster
//! metrics, tenure statistics, benchmark comparisons, and headcount
//! scenario projections.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    BenchmarkReferenceRequest, BenchmarkRequest, EmployeeRequest, MetricsRequest,
    ScenarioChangeRequest, ScenarioRequest, TenureRequest,
};
pub use response::{
    ApiError, BenchmarkReport, MetricsReport, ReportMeta, ScenarioReport, TenureReport,
};
pub use state::AppState;
