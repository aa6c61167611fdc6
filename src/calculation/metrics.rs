//! Roster metrics aggregation.
//!
//! This module rolls a flat employee roster up into department summaries,
//! organizational shape ratios, and dataset-wide totals.

use std::collections::{BTreeMap, HashMap, HashSet};

use rust_decimal::Decimal;

use crate::config::{DepartmentCategory, DepartmentCategoryMap};
use crate::models::{DepartmentSummary, EmployeeRecord, MetricsSnapshot, RatioStats, SummaryStats};

/// Division that yields zero instead of failing on an empty denominator.
///
/// Every ratio the snapshot carries is defined as 0 when its denominator
/// is 0, so downstream numeric comparisons never see NaN or infinity.
fn ratio_or_zero(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        Decimal::ZERO
    } else {
        numerator / denominator
    }
}

#[derive(Default)]
struct DepartmentAccumulator {
    fte: Decimal,
    cost: Decimal,
    employee_count: u32,
}

/// Computes a full metrics snapshot for a roster.
///
/// Department costs sum stated annual compensation without FTE weighting,
/// since compensation figures are already annualized. Departments absent
/// from the category map count as Other and contribute to neither side of
/// the R&D:GTM ratio. Revenue per FTE is only present when a positive
/// revenue figure is supplied.
///
/// An empty roster produces a snapshot with all sums and ratios at zero.
///
/// # Arguments
///
/// * `roster` - The employee records to aggregate
/// * `categories` - Department → category mapping; `None` treats every
///   department as Other
/// * `total_revenue` - Annual revenue for the revenue-per-FTE figure
///
/// # Examples
///
/// ```
/// use workforce_engine::calculation::compute_metrics;
///
/// let snapshot = compute_metrics(&[], None, None);
/// assert_eq!(snapshot.summary.employee_count, 0);
/// assert!(snapshot.ratios.rd_to_gtm.is_zero());
/// ```
pub fn compute_metrics(
    roster: &[EmployeeRecord],
    categories: Option<&DepartmentCategoryMap>,
    total_revenue: Option<Decimal>,
) -> MetricsSnapshot {
    let fallback = DepartmentCategoryMap::default();
    let categories = categories.unwrap_or(&fallback);

    let mut accumulators: BTreeMap<String, DepartmentAccumulator> = BTreeMap::new();
    for employee in roster {
        let entry = accumulators.entry(employee.department.clone()).or_default();
        entry.fte += employee.fte_factor;
        entry.cost += employee.annual_compensation;
        entry.employee_count += 1;
    }

    let total_cost: Decimal = accumulators.values().map(|a| a.cost).sum();
    let total_fte: Decimal = accumulators.values().map(|a| a.fte).sum();

    let departments: BTreeMap<String, DepartmentSummary> = accumulators
        .into_iter()
        .map(|(name, acc)| {
            let summary = DepartmentSummary {
                fte: acc.fte,
                cost: acc.cost,
                employee_count: acc.employee_count,
                percent_of_total_cost: ratio_or_zero(acc.cost, total_cost) * Decimal::ONE_HUNDRED,
                average_compensation: ratio_or_zero(acc.cost, Decimal::from(acc.employee_count)),
            };
            (name, summary)
        })
        .collect();

    let summary = SummaryStats {
        total_fte,
        total_cost,
        cost_per_fte: ratio_or_zero(total_cost, total_fte),
        employee_count: roster.len() as u32,
        revenue_per_fte: total_revenue
            .filter(|revenue| *revenue > Decimal::ZERO)
            .map(|revenue| ratio_or_zero(revenue, total_fte)),
    };

    MetricsSnapshot {
        summary,
        ratios: compute_ratios(roster, categories),
        departments,
        tenure: None,
    }
}

fn compute_ratios(roster: &[EmployeeRecord], categories: &DepartmentCategoryMap) -> RatioStats {
    let mut rd_fte = Decimal::ZERO;
    let mut gtm_fte = Decimal::ZERO;
    let mut manager_count = 0u32;
    let mut ic_count = 0u32;

    for employee in roster {
        match categories.category_for(&employee.department) {
            DepartmentCategory::ResearchAndDevelopment => rd_fte += employee.fte_factor,
            DepartmentCategory::GoToMarket => gtm_fte += employee.fte_factor,
            _ => {}
        }

        if let Some(level) = employee.level {
            if level.is_management() {
                manager_count += 1;
            } else {
                ic_count += 1;
            }
        }
    }

    RatioStats {
        rd_to_gtm: ratio_or_zero(rd_fte, gtm_fte),
        manager_to_ic: ratio_or_zero(Decimal::from(manager_count), Decimal::from(ic_count)),
        average_span_of_control: average_span_of_control(roster),
    }
}

/// Mean direct-report count across managers with at least one report.
///
/// The manager reference is a weak back-reference that may be cyclic or
/// dangling in untrusted input, so this is a one-level index scan: count
/// reports per referenced id, keep only ids that exist in the roster, and
/// average the counts. Managers with zero reports never enter the mean.
fn average_span_of_control(roster: &[EmployeeRecord]) -> Decimal {
    let roster_ids: HashSet<&str> = roster.iter().map(|e| e.id.as_str()).collect();

    let mut report_counts: HashMap<&str, u32> = HashMap::new();
    for employee in roster {
        if let Some(manager_id) = employee.manager_id.as_deref() {
            if roster_ids.contains(manager_id) {
                *report_counts.entry(manager_id).or_insert(0) += 1;
            }
        }
    }

    if report_counts.is_empty() {
        return Decimal::ZERO;
    }

    let total_reports: u32 = report_counts.values().sum();
    Decimal::from(total_reports) / Decimal::from(report_counts.len() as u32)
}
