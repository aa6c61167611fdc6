//! Cash-runway projection.
//!
//! This module walks the simulated monthly timeline with a running cash
//! balance per track and finds the fractional month at which each track
//! first depletes, interpolating within the crossing month.

use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::{MonthlyBurnEntry, RunwayResult, ScenarioOptions};

const PERCENT: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Projects cash runway for both simulation tracks.
///
/// Each track starts from the supplied cash balance and subtracts its net
/// burn month by month; net burn is that month's cost minus modeled
/// revenue, and equals gross cost when no revenue is configured. Revenue
/// starts from `monthly_revenue` in month 0 and compounds by
/// `revenue_growth_rate` percent each month.
///
/// Runway is the fractional month index at which the running balance
/// first reaches zero: a balance entering the crossing month at +50k
/// against a 150k burn yields the month index plus 50/150. Runway is
/// absent when no starting cash was supplied or the balance survives the
/// whole horizon, and the extension delta is only present when both
/// tracks deplete.
pub fn project_runway(monthly: &[MonthlyBurnEntry], options: &ScenarioOptions) -> RunwayResult {
    let mut result = RunwayResult {
        starting_cash: options.starting_cash,
        baseline_months: None,
        scenario_months: None,
        extension_months: None,
        baseline_runout_date: None,
        scenario_runout_date: None,
    };

    let Some(starting_cash) = options.starting_cash else {
        return result;
    };

    let revenues = model_revenues(monthly.len(), options);

    let baseline_burns: Vec<Decimal> = monthly
        .iter()
        .zip(&revenues)
        .map(|(entry, revenue)| entry.baseline_cost - revenue)
        .collect();
    let scenario_burns: Vec<Decimal> = monthly
        .iter()
        .zip(&revenues)
        .map(|(entry, revenue)| entry.scenario_cost - revenue)
        .collect();

    if let Some((months, date)) = depletion_point(starting_cash, &baseline_burns, monthly) {
        result.baseline_months = Some(months);
        result.baseline_runout_date = Some(date);
    }
    if let Some((months, date)) = depletion_point(starting_cash, &scenario_burns, monthly) {
        result.scenario_months = Some(months);
        result.scenario_runout_date = Some(date);
    }

    if let (Some(baseline), Some(scenario)) = (result.baseline_months, result.scenario_months) {
        result.extension_months = Some(scenario - baseline);
    }

    result
}

/// Modeled revenue per month: the month 0 figure compounding by the
/// growth rate, or all zeros when no base revenue is configured.
fn model_revenues(months: usize, options: &ScenarioOptions) -> Vec<Decimal> {
    let base = options.monthly_revenue.unwrap_or(Decimal::ZERO);
    let growth_factor = Decimal::ONE + options.revenue_growth_rate.unwrap_or(Decimal::ZERO) / PERCENT;

    let mut revenues = Vec::with_capacity(months);
    let mut revenue = base;
    for _ in 0..months {
        revenues.push(revenue);
        revenue *= growth_factor;
    }
    revenues
}

/// Finds the fractional month index and calendar date at which a running
/// balance first reaches zero, or `None` if it survives the horizon.
fn depletion_point(
    starting_cash: Decimal,
    burns: &[Decimal],
    monthly: &[MonthlyBurnEntry],
) -> Option<(Decimal, NaiveDate)> {
    let mut balance = starting_cash;

    for (index, (&burn, entry)) in burns.iter().zip(monthly).enumerate() {
        if balance <= Decimal::ZERO {
            return Some((Decimal::from(index as u32), entry.month));
        }

        let next = balance - burn;
        if next <= Decimal::ZERO && burn > Decimal::ZERO {
            let fraction = balance / burn;
            let months = Decimal::from(index as u32) + fraction;
            return Some((months, runout_date(entry.month, fraction)));
        }
        balance = next;
    }

    None
}

/// Calendar date for a fractional position within a month.
fn runout_date(month: NaiveDate, fraction: Decimal) -> NaiveDate {
    let days_in_month = super::month_math::end_of_month(month).day();
    let offset = (fraction * Decimal::from(days_in_month))
        .floor()
        .to_i64()
        .unwrap_or(0)
        .clamp(0, i64::from(days_in_month) - 1);
    month + Duration::days(offset)
}
