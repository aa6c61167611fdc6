//! Core data models for the workforce analytics engine.
//!
//! This module contains all the domain models used throughout the engine.

mod benchmark;
mod employee;
mod metrics;
mod scenario;
mod tenure;

pub use benchmark::{
    BenchmarkComparison, BenchmarkReference, BenchmarkSeverity, BenchmarkStatus,
};
pub use employee::{EmployeeRecord, EmploymentType, SeniorityLevel};
pub use metrics::{DepartmentSummary, MetricsSnapshot, RatioStats, SummaryStats};
pub use scenario::{
    DEFAULT_HORIZON_MONTHS, MonthlyBurnEntry, RunwayResult, ScenarioChange, ScenarioOptions,
    ScenarioProjection, YearEndProjection,
};
pub use tenure::{RetentionRisk, TenureBlock, TenureDistribution};
