//! Headcount scenario simulation.
//!
//! This module applies dated add/remove changes to a baseline roster and
//! produces a monthly cost timeline with a year-end aggregate, delegating
//! cash-runway projection to the runway calculation.

use std::collections::HashSet;

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    EmployeeRecord, MonthlyBurnEntry, ScenarioChange, ScenarioOptions, ScenarioProjection,
    YearEndProjection,
};

use super::month_math::{end_of_month, month_anchor};
use super::runway::project_runway;

/// Simulates the financial effect of headcount changes over a horizon.
///
/// The baseline track is the unmodified active roster (employees with no
/// end date) and is insensitive to the change list, giving a fixed
/// comparison point. The scenario track applies every change whose
/// effective date falls on or before the end of the month being costed;
/// a change dated exactly on a month boundary takes effect in that month.
///
/// Monthly cost is the sum of one-twelfth annual compensation over the
/// roster considered active that month, with no intra-month proration.
/// The output is deterministic for identical inputs: the only clock is
/// the injected `options.now`.
///
/// # Errors
///
/// Fails with `InvalidHorizon` for a zero-month horizon, with
/// `UnknownEmployee` when a remove change references an id absent from
/// the baseline roster, and with `InvalidChange` when an added employee
/// does not carry positive compensation. Degenerate data (an empty
/// roster, an empty change list) is not an error.
pub fn run_scenario(
    roster: &[EmployeeRecord],
    changes: &[ScenarioChange],
    options: &ScenarioOptions,
) -> EngineResult<ScenarioProjection> {
    if options.horizon_months == 0 {
        return Err(EngineError::InvalidHorizon { months: 0 });
    }

    let baseline: Vec<&EmployeeRecord> = roster.iter().filter(|e| e.is_active()).collect();
    validate_changes(&baseline, changes)?;

    let baseline_cost: Decimal = baseline.iter().map(|e| e.monthly_cost()).sum();

    let mut monthly = Vec::with_capacity(options.horizon_months as usize);
    for index in 0..options.horizon_months {
        let month = month_anchor(options.now, index);
        let cutoff = end_of_month(month);

        let removed: HashSet<&str> = changes
            .iter()
            .filter_map(|change| match change {
                ScenarioChange::Remove {
                    employee_id,
                    effective_date,
                } if *effective_date <= cutoff => Some(employee_id.as_str()),
                _ => None,
            })
            .collect();

        let mut scenario_cost = Decimal::ZERO;
        let mut effective_employee_count = 0u32;

        for employee in &baseline {
            if !removed.contains(employee.id.as_str()) {
                scenario_cost += employee.monthly_cost();
                effective_employee_count += 1;
            }
        }

        for change in changes {
            if let ScenarioChange::Add {
                employee,
                effective_date,
            } = change
            {
                if *effective_date <= cutoff {
                    scenario_cost += employee.monthly_cost();
                    effective_employee_count += 1;
                }
            }
        }

        monthly.push(MonthlyBurnEntry {
            month,
            baseline_cost,
            scenario_cost,
            savings: baseline_cost - scenario_cost,
            effective_employee_count,
        });
    }

    let year_end = year_end_projection(&monthly, options.now.year());
    let runway = project_runway(&monthly, options);

    Ok(ScenarioProjection {
        monthly,
        year_end,
        runway,
    })
}

fn validate_changes(
    baseline: &[&EmployeeRecord],
    changes: &[ScenarioChange],
) -> EngineResult<()> {
    let baseline_ids: HashSet<&str> = baseline.iter().map(|e| e.id.as_str()).collect();

    for change in changes {
        match change {
            ScenarioChange::Remove { employee_id, .. } => {
                if !baseline_ids.contains(employee_id.as_str()) {
                    return Err(EngineError::UnknownEmployee {
                        id: employee_id.clone(),
                    });
                }
            }
            ScenarioChange::Add { employee, .. } => {
                if employee.annual_compensation <= Decimal::ZERO {
                    return Err(EngineError::InvalidChange {
                        message: format!(
                            "added employee '{}' requires positive compensation",
                            employee.id
                        ),
                    });
                }
            }
        }
    }

    Ok(())
}

/// Totals over the simulated months that fall in the current calendar
/// year.
fn year_end_projection(monthly: &[MonthlyBurnEntry], year: i32) -> YearEndProjection {
    let mut projection = YearEndProjection {
        months_counted: 0,
        baseline_total: Decimal::ZERO,
        scenario_total: Decimal::ZERO,
        savings: Decimal::ZERO,
    };

    for entry in monthly.iter().filter(|e| e.month.year() == year) {
        projection.months_counted += 1;
        projection.baseline_total += entry.baseline_cost;
        projection.scenario_total += entry.scenario_cost;
    }
    projection.savings = projection.baseline_total - projection.scenario_total;

    projection
}
