//! Employee model and related types.
//!
//! This module defines the EmployeeRecord struct along with the
//! SeniorityLevel and EmploymentType enums used to describe roster members.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the type of employment arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    /// Full-time employment.
    FullTime,
    /// Part-time employment with a reduced FTE factor.
    PartTime,
    /// Contractor engagement.
    Contractor,
}

/// Seniority level on the management track.
///
/// Levels are ordered: `Ic < Manager < Director < Vp < CLevel`. An absent
/// level (roster data often lacks it) is modeled as `Option::None` on the
/// employee record and is excluded from level-based ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeniorityLevel {
    /// Individual contributor.
    Ic,
    /// People manager.
    Manager,
    /// Director.
    Director,
    /// Vice president.
    Vp,
    /// C-level executive.
    CLevel,
}

impl SeniorityLevel {
    /// Returns true for levels counted on the management side of the
    /// manager:IC ratio (Manager and above).
    ///
    /// # Examples
    ///
    /// ```
    /// use workforce_engine::models::SeniorityLevel;
    ///
    /// assert!(SeniorityLevel::Director.is_management());
    /// assert!(!SeniorityLevel::Ic.is_management());
    /// ```
    pub fn is_management(self) -> bool {
        self >= SeniorityLevel::Manager
    }
}

/// An immutable employee snapshot used as analysis input.
///
/// The engine never mutates records; every computation takes a roster slice
/// and returns freshly built value objects.
///
/// The `manager_id` field is a weak back-reference into the same roster. It
/// is not guaranteed to be acyclic or even to resolve, so span-of-control
/// logic must treat it as a one-level lookup rather than walking a tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Unique identifier for the employee.
    pub id: String,
    /// The department name, a key into the department category map.
    pub department: String,
    /// The employee's role title.
    pub role: String,
    /// Seniority level; `None` when unset in the source data.
    #[serde(default)]
    pub level: Option<SeniorityLevel>,
    /// The type of employment arrangement.
    pub employment_type: EmploymentType,
    /// Total annual compensation, always non-negative.
    pub annual_compensation: Decimal,
    /// Optional base salary component of the total.
    #[serde(default)]
    pub base_compensation: Option<Decimal>,
    /// Optional bonus component of the total.
    #[serde(default)]
    pub bonus: Option<Decimal>,
    /// Optional annualized equity component of the total.
    #[serde(default)]
    pub equity: Option<Decimal>,
    /// Full-time-equivalent factor in (0, 1].
    pub fte_factor: Decimal,
    /// The date the employee started; absent for incomplete records.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// The date the employee left, when no longer active.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Weak reference to this employee's manager, by roster id.
    #[serde(default)]
    pub manager_id: Option<String>,
}

impl EmployeeRecord {
    /// Returns true when the employee has no end date.
    pub fn is_active(&self) -> bool {
        self.end_date.is_none()
    }

    /// Monthly slice of the annual compensation.
    ///
    /// Payroll effects are modeled at month granularity, so this is a plain
    /// twelfth with no intra-month proration.
    pub fn monthly_cost(&self) -> Decimal {
        self.annual_compensation / Decimal::from(12)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_employee(level: Option<SeniorityLevel>) -> EmployeeRecord {
        EmployeeRecord {
            id: "emp_001".to_string(),
            department: "Engineering".to_string(),
            role: "Backend Engineer".to_string(),
            level,
            employment_type: EmploymentType::FullTime,
            annual_compensation: Decimal::from(120_000),
            base_compensation: None,
            bonus: None,
            equity: None,
            fte_factor: Decimal::ONE,
            start_date: NaiveDate::from_ymd_opt(2023, 6, 1),
            end_date: None,
            manager_id: None,
        }
    }

    #[test]
    fn test_deserialize_minimal_employee() {
        let json = r#"{
            "id": "emp_001",
            "department": "Engineering",
            "role": "Backend Engineer",
            "employment_type": "full_time",
            "annual_compensation": "120000",
            "fte_factor": "1"
        }"#;

        let employee: EmployeeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "emp_001");
        assert_eq!(employee.department, "Engineering");
        assert_eq!(employee.employment_type, EmploymentType::FullTime);
        assert_eq!(employee.annual_compensation, Decimal::from(120_000));
        assert_eq!(employee.level, None);
        assert_eq!(employee.start_date, None);
        assert_eq!(employee.manager_id, None);
    }

    #[test]
    fn test_deserialize_full_employee() {
        let json = r#"{
            "id": "emp_002",
            "department": "Sales",
            "role": "Account Executive",
            "level": "manager",
            "employment_type": "part_time",
            "annual_compensation": "90000",
            "base_compensation": "70000",
            "bonus": "15000",
            "equity": "5000",
            "fte_factor": "0.8",
            "start_date": "2022-03-15",
            "manager_id": "emp_001"
        }"#;

        let employee: EmployeeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(employee.level, Some(SeniorityLevel::Manager));
        assert_eq!(employee.employment_type, EmploymentType::PartTime);
        assert_eq!(employee.fte_factor, Decimal::new(8, 1));
        assert_eq!(
            employee.start_date,
            NaiveDate::from_ymd_opt(2022, 3, 15)
        );
        assert_eq!(employee.manager_id.as_deref(), Some("emp_001"));
    }

    #[test]
    fn test_serialize_round_trip() {
        let employee = create_test_employee(Some(SeniorityLevel::Director));
        let json = serde_json::to_string(&employee).unwrap();
        let deserialized: EmployeeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
    }

    #[test]
    fn test_seniority_level_ordering() {
        assert!(SeniorityLevel::Ic < SeniorityLevel::Manager);
        assert!(SeniorityLevel::Manager < SeniorityLevel::Director);
        assert!(SeniorityLevel::Director < SeniorityLevel::Vp);
        assert!(SeniorityLevel::Vp < SeniorityLevel::CLevel);
    }

    #[test]
    fn test_is_management() {
        assert!(!SeniorityLevel::Ic.is_management());
        assert!(SeniorityLevel::Manager.is_management());
        assert!(SeniorityLevel::Director.is_management());
        assert!(SeniorityLevel::Vp.is_management());
        assert!(SeniorityLevel::CLevel.is_management());
    }

    #[test]
    fn test_seniority_level_serialization() {
        assert_eq!(
            serde_json::to_string(&SeniorityLevel::Ic).unwrap(),
            "\"ic\""
        );
        assert_eq!(
            serde_json::to_string(&SeniorityLevel::CLevel).unwrap(),
            "\"c_level\""
        );
    }

    #[test]
    fn test_is_active() {
        let mut employee = create_test_employee(None);
        assert!(employee.is_active());

        employee.end_date = NaiveDate::from_ymd_opt(2025, 1, 31);
        assert!(!employee.is_active());
    }

    #[test]
    fn test_monthly_cost_is_one_twelfth() {
        let employee = create_test_employee(None);
        assert_eq!(employee.monthly_cost(), Decimal::from(10_000));
    }

    #[test]
    fn test_monthly_cost_ignores_fte_factor() {
        let mut employee = create_test_employee(None);
        employee.fte_factor = Decimal::new(5, 1);
        // Compensation figures are already annualized, so a 0.5 FTE
        // employee still contributes the full stated amount.
        assert_eq!(employee.monthly_cost(), Decimal::from(10_000));
    }
}
