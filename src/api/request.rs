//! Request types for the workforce analytics engine API.
//!
//! This module defines the JSON request structures for the `/metrics`,
//! `/tenure`, `/benchmark`, and `/scenario` endpoints.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::DepartmentCategory;
use crate::models::{
    BenchmarkReference, EmployeeRecord, EmploymentType, ScenarioChange, SeniorityLevel,
};

/// Employee information in an analysis request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The department name.
    pub department: String,
    /// The employee's role title.
    pub role: String,
    /// Seniority level; may be omitted.
    #[serde(default)]
    pub level: Option<SeniorityLevel>,
    /// The type of employment arrangement.
    pub employment_type: EmploymentType,
    /// Total annual compensation.
    pub annual_compensation: Decimal,
    /// Optional base salary component.
    #[serde(default)]
    pub base_compensation: Option<Decimal>,
    /// Optional bonus component.
    #[serde(default)]
    pub bonus: Option<Decimal>,
    /// Optional annualized equity component.
    #[serde(default)]
    pub equity: Option<Decimal>,
    /// Full-time-equivalent factor in (0, 1].
    pub fte_factor: Decimal,
    /// The date the employee started.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// The date the employee left, when no longer active.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Weak reference to this employee's manager, by roster id.
    #[serde(default)]
    pub manager_id: Option<String>,
}

impl From<EmployeeRequest> for EmployeeRecord {
    fn from(req: EmployeeRequest) -> Self {
        EmployeeRecord {
            id: req.id,
            department: req.department,
            role: req.role,
            level: req.level,
            employment_type: req.employment_type,
            annual_compensation: req.annual_compensation,
            base_compensation: req.base_compensation,
            bonus: req.bonus,
            equity: req.equity,
            fte_factor: req.fte_factor,
            start_date: req.start_date,
            end_date: req.end_date,
            manager_id: req.manager_id,
        }
    }
}

/// Request body for the `/metrics` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsRequest {
    /// The employee roster to aggregate.
    pub roster: Vec<EmployeeRequest>,
    /// Inline department → category overrides. When omitted, the mapping
    /// from the loaded configuration applies.
    #[serde(default)]
    pub department_categories: Option<HashMap<String, DepartmentCategory>>,
    /// Annual revenue for the revenue-per-FTE figure.
    #[serde(default)]
    pub total_revenue: Option<Decimal>,
    /// When true, the snapshot includes a tenure block.
    #[serde(default)]
    pub include_tenure: bool,
    /// Reference date for tenure statistics; defaults to today (UTC).
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Request body for the `/tenure` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenureRequest {
    /// The employee roster to analyze.
    pub roster: Vec<EmployeeRequest>,
    /// Reference date for tenure statistics; defaults to today (UTC).
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Inline percentile reference in a benchmark request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReferenceRequest {
    /// The 25th percentile value.
    pub p25: Decimal,
    /// The 50th percentile (median) value.
    pub p50: Decimal,
    /// The 75th percentile value.
    pub p75: Decimal,
    /// Label for the peer segment.
    pub peer_segment: String,
    /// Label for the company-size bucket.
    pub company_size: String,
}

impl From<BenchmarkReferenceRequest> for BenchmarkReference {
    fn from(req: BenchmarkReferenceRequest) -> Self {
        BenchmarkReference {
            p25: req.p25,
            p50: req.p50,
            p75: req.p75,
            peer_segment: req.peer_segment,
            company_size: req.company_size,
        }
    }
}

/// Request body for the `/benchmark` endpoint.
///
/// Exactly one of `metric` (a catalog key) or `reference` (inline
/// percentile points) should be supplied; an inline reference takes
/// precedence when both are present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkRequest {
    /// The actual computed value to position.
    pub value: Decimal,
    /// Catalog key of a configured reference (e.g., "cost_per_fte").
    #[serde(default)]
    pub metric: Option<String>,
    /// Inline reference percentiles.
    #[serde(default)]
    pub reference: Option<BenchmarkReferenceRequest>,
}

/// A headcount change in a scenario request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScenarioChangeRequest {
    /// Hire a new employee from the effective date onward.
    Add {
        /// The new employee record.
        employee: EmployeeRequest,
        /// The hire date.
        effective_date: NaiveDate,
    },
    /// Remove an existing employee from the effective date onward.
    Remove {
        /// Id of the baseline-roster employee to remove.
        employee_id: String,
        /// The departure date.
        effective_date: NaiveDate,
    },
}

impl From<ScenarioChangeRequest> for ScenarioChange {
    fn from(req: ScenarioChangeRequest) -> Self {
        match req {
            ScenarioChangeRequest::Add {
                employee,
                effective_date,
            } => ScenarioChange::Add {
                employee: employee.into(),
                effective_date,
            },
            ScenarioChangeRequest::Remove {
                employee_id,
                effective_date,
            } => ScenarioChange::Remove {
                employee_id,
                effective_date,
            },
        }
    }
}

/// Request body for the `/scenario` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioRequest {
    /// The baseline employee roster.
    pub roster: Vec<EmployeeRequest>,
    /// Dated headcount changes to simulate.
    #[serde(default)]
    pub changes: Vec<ScenarioChangeRequest>,
    /// Number of months to simulate; defaults to 12.
    #[serde(default)]
    pub horizon_months: Option<u32>,
    /// Starting cash balance for runway projection.
    #[serde(default)]
    pub starting_cash: Option<Decimal>,
    /// Modeled revenue for the first simulated month.
    #[serde(default)]
    pub monthly_revenue: Option<Decimal>,
    /// Month-over-month revenue growth rate in percent.
    #[serde(default)]
    pub revenue_growth_rate: Option<Decimal>,
    /// Reference date anchoring month 0; defaults to today (UTC).
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_request_minimal() {
        let json = r#"{
            "roster": [{
                "id": "emp_001",
                "department": "Engineering",
                "role": "Backend Engineer",
                "employment_type": "full_time",
                "annual_compensation": "120000",
                "fte_factor": "1"
            }]
        }"#;

        let request: MetricsRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.roster.len(), 1);
        assert!(request.department_categories.is_none());
        assert!(request.total_revenue.is_none());
        assert!(!request.include_tenure);
    }

    #[test]
    fn test_employee_request_converts_to_record() {
        let json = r#"{
            "id": "emp_001",
            "department": "Engineering",
            "role": "Backend Engineer",
            "level": "ic",
            "employment_type": "full_time",
            "annual_compensation": "120000",
            "fte_factor": "0.8",
            "start_date": "2023-06-01",
            "manager_id": "emp_000"
        }"#;

        let request: EmployeeRequest = serde_json::from_str(json).unwrap();
        let record: EmployeeRecord = request.into();
        assert_eq!(record.id, "emp_001");
        assert_eq!(record.level, Some(SeniorityLevel::Ic));
        assert_eq!(record.fte_factor, Decimal::new(8, 1));
        assert_eq!(record.manager_id.as_deref(), Some("emp_000"));
    }

    #[test]
    fn test_scenario_request_with_changes() {
        let json = r#"{
            "roster": [],
            "changes": [
                {
                    "action": "remove",
                    "employee_id": "emp_003",
                    "effective_date": "2025-11-01"
                }
            ],
            "horizon_months": 6,
            "starting_cash": "100000",
            "as_of": "2025-09-15"
        }"#;

        let request: ScenarioRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.changes.len(), 1);
        assert_eq!(request.horizon_months, Some(6));

        let change: ScenarioChange = request.changes[0].clone().into();
        assert_eq!(
            change.effective_date(),
            NaiveDate::from_ymd_opt(2025, 11, 1).unwrap()
        );
    }

    #[test]
    fn test_benchmark_request_with_inline_reference() {
        let json = r#"{
            "value": "165000",
            "reference": {
                "p25": "140000",
                "p50": "160000",
                "p75": "185000",
                "peer_segment": "b2b_saas",
                "company_size": "51-200"
            }
        }"#;

        let request: BenchmarkRequest = serde_json::from_str(json).unwrap();
        assert!(request.metric.is_none());
        let reference: BenchmarkReference = request.reference.unwrap().into();
        assert_eq!(reference.p50, Decimal::from(160_000));
    }
}
