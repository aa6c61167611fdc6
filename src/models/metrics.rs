//! Aggregate metrics models.
//!
//! This module contains the [`MetricsSnapshot`] type and its associated
//! structures produced by the metrics aggregation calculation.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TenureBlock;

/// Per-department rollup, keyed by department name in the snapshot map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentSummary {
    /// Total full-time-equivalent headcount (sum of FTE factors).
    pub fte: Decimal,
    /// Total annual cost (sum of total compensation, not FTE-weighted).
    pub cost: Decimal,
    /// Number of employees in the department.
    pub employee_count: u32,
    /// This department's share of dataset-wide cost, as a percentage.
    pub percent_of_total_cost: Decimal,
    /// Mean annual compensation within the department.
    pub average_compensation: Decimal,
}

/// Dataset-wide summary statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Total full-time-equivalent headcount.
    pub total_fte: Decimal,
    /// Total annual cost across all departments.
    pub total_cost: Decimal,
    /// Annual cost divided by total FTE; zero when the roster is empty.
    pub cost_per_fte: Decimal,
    /// Number of employees in the roster.
    pub employee_count: u32,
    /// Revenue divided by total FTE. Absent (not zero) when no revenue
    /// figure was configured, so callers can distinguish "not configured"
    /// from "genuinely zero".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue_per_fte: Option<Decimal>,
}

/// Organizational shape ratios.
///
/// All ratios are defined as 0 (never NaN or infinity) when their
/// denominator is empty, so downstream comparisons stay well-defined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatioStats {
    /// FTE in R&D-categorized departments over FTE in go-to-market ones.
    pub rd_to_gtm: Decimal,
    /// Employees at Manager level or above over individual contributors.
    /// Employees with an unset level are excluded from both sides.
    pub manager_to_ic: Decimal,
    /// Mean number of direct reports across managers with at least one
    /// report.
    pub average_span_of_control: Decimal,
}

/// A complete aggregate snapshot of one roster.
///
/// Recomputed on demand from a roster and never mutated in place; each
/// aggregation call returns a fresh snapshot so callers never observe
/// partial updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Dataset-wide summary statistics.
    pub summary: SummaryStats,
    /// Organizational shape ratios.
    pub ratios: RatioStats,
    /// Per-department rollups, keyed by department name.
    pub departments: BTreeMap<String, DepartmentSummary>,
    /// Tenure statistics, present when the caller requested them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenure: Option<TenureBlock>,
}
