//! Scenario simulation models.
//!
//! This module contains the input and output types for headcount scenario
//! simulation: dated roster changes, the monthly burn timeline, the
//! year-end aggregate, and the cash-runway result.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EmployeeRecord;

/// Default simulation horizon when the caller does not specify one.
pub const DEFAULT_HORIZON_MONTHS: u32 = 12;

/// A dated headcount change applied on top of a baseline roster.
///
/// A `remove` must reference an employee present in the baseline roster;
/// an `add` carries a fully specified new record with positive
/// compensation and needs no prior history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScenarioChange {
    /// Hire a new employee from the effective date onward.
    Add {
        /// The new employee record.
        employee: EmployeeRecord,
        /// The hire date. Takes effect in the month containing it.
        effective_date: NaiveDate,
    },
    /// Remove an existing employee from the effective date onward.
    Remove {
        /// Id of the baseline-roster employee to remove.
        employee_id: String,
        /// The departure date. Takes effect in the month containing it.
        effective_date: NaiveDate,
    },
}

impl ScenarioChange {
    /// The date this change takes effect.
    pub fn effective_date(&self) -> NaiveDate {
        match self {
            ScenarioChange::Add { effective_date, .. }
            | ScenarioChange::Remove { effective_date, .. } => *effective_date,
        }
    }
}

/// Options controlling a scenario simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOptions {
    /// Number of months to simulate. Must be at least 1.
    pub horizon_months: u32,
    /// Starting cash balance for runway projection. When absent, runway
    /// figures are absent too.
    #[serde(default)]
    pub starting_cash: Option<Decimal>,
    /// Modeled revenue for month 0. When absent, net burn equals gross
    /// cost.
    #[serde(default)]
    pub monthly_revenue: Option<Decimal>,
    /// Flat month-over-month revenue growth rate in percent, compounding
    /// from the month 0 revenue.
    #[serde(default)]
    pub revenue_growth_rate: Option<Decimal>,
    /// The reference "now". Month 0 of the simulation is the calendar
    /// month containing this date.
    pub now: NaiveDate,
}

impl ScenarioOptions {
    /// Creates options with the default horizon and no cash or revenue
    /// modeling.
    pub fn new(now: NaiveDate) -> Self {
        Self {
            horizon_months: DEFAULT_HORIZON_MONTHS,
            starting_cash: None,
            monthly_revenue: None,
            revenue_growth_rate: None,
            now,
        }
    }
}

/// One calendar month of the simulated cost timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyBurnEntry {
    /// First day of the calendar month this entry covers.
    pub month: NaiveDate,
    /// Monthly cost of the unmodified baseline roster.
    pub baseline_cost: Decimal,
    /// Monthly cost of the roster with changes applied up to and
    /// including this month.
    pub scenario_cost: Decimal,
    /// Baseline cost minus scenario cost. Negative when the scenario adds
    /// headcount.
    pub savings: Decimal,
    /// Number of roster members contributing to this month's scenario
    /// cost.
    pub effective_employee_count: u32,
}

/// Cost totals over the remaining months of the current calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearEndProjection {
    /// Number of simulated months falling in the current calendar year.
    pub months_counted: u32,
    /// Baseline cost summed over those months.
    pub baseline_total: Decimal,
    /// Scenario cost summed over those months.
    pub scenario_total: Decimal,
    /// Baseline total minus scenario total.
    pub savings: Decimal,
}

/// Cash-runway projection for both simulation tracks.
///
/// Runway figures are fractional month counts from month 0 and are absent
/// when either no starting cash was supplied or the balance never crosses
/// zero within the horizon. Callers present an absent runway as "exceeds
/// the analysis horizon".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunwayResult {
    /// The starting cash balance the projection ran from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_cash: Option<Decimal>,
    /// Months until the baseline track depletes the starting cash.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_months: Option<Decimal>,
    /// Months until the scenario track depletes the starting cash.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario_months: Option<Decimal>,
    /// Scenario runway minus baseline runway; absent unless both tracks
    /// deplete within the horizon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension_months: Option<Decimal>,
    /// Projected calendar date the baseline track runs out of cash.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_runout_date: Option<NaiveDate>,
    /// Projected calendar date the scenario track runs out of cash.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario_runout_date: Option<NaiveDate>,
}

/// Complete output of a scenario simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioProjection {
    /// One entry per simulated month, in chronological order. The length
    /// always equals the requested horizon.
    pub monthly: Vec<MonthlyBurnEntry>,
    /// Totals over the remaining months of the current calendar year.
    pub year_end: YearEndProjection,
    /// Cash-runway projection for both tracks.
    pub runway: RunwayResult,
}
