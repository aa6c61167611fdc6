//! Tenure distribution and retention-risk analysis.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{EmployeeRecord, RetentionRisk, TenureBlock, TenureDistribution};

use super::month_math::months_between;

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);
const TWO: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Computes tenure statistics for a roster against a reference date.
///
/// Tenure is measured in whole calendar months between the start date and
/// `now`, truncating partial months. Employees without a start date are
/// excluded from every figure rather than counted as zero tenure; a start
/// date after `now` clamps to zero months.
///
/// The reference date is an explicit argument so results are reproducible
/// in tests and never depend on the wall clock.
///
/// # Examples
///
/// ```
/// use workforce_engine::calculation::compute_tenure;
/// use chrono::NaiveDate;
///
/// let now = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
/// let block = compute_tenure(&[], now);
/// assert_eq!(block.distribution.total(), 0);
/// ```
pub fn compute_tenure(roster: &[EmployeeRecord], now: NaiveDate) -> TenureBlock {
    let mut tenures: Vec<(&str, i64)> = roster
        .iter()
        .filter_map(|employee| {
            employee
                .start_date
                .map(|start| (employee.id.as_str(), months_between(start, now).max(0)))
        })
        .collect();

    let mut distribution = TenureDistribution::default();
    let mut retention_risk = RetentionRisk::default();

    for &(id, months) in &tenures {
        match months {
            0..=5 => distribution.under_six_months += 1,
            6..=11 => distribution.six_to_twelve_months += 1,
            12..=23 => distribution.one_to_two_years += 1,
            24..=59 => distribution.two_to_five_years += 1,
            _ => distribution.five_years_plus += 1,
        }

        match months {
            0..=5 => retention_risk.high.push(id.to_string()),
            6..=11 => retention_risk.medium.push(id.to_string()),
            _ => retention_risk.low.push(id.to_string()),
        }
    }

    let (average_months, median_months) = if tenures.is_empty() {
        (Decimal::ZERO, Decimal::ZERO)
    } else {
        let total: i64 = tenures.iter().map(|(_, months)| months).sum();
        let average = Decimal::from(total) / Decimal::from(tenures.len() as u32);

        tenures.sort_by_key(|(_, months)| *months);
        let mid = tenures.len() / 2;
        let median = if tenures.len() % 2 == 1 {
            Decimal::from(tenures[mid].1)
        } else {
            (Decimal::from(tenures[mid - 1].1) + Decimal::from(tenures[mid].1)) / TWO
        };

        (average, median)
    };

    TenureBlock {
        average_months,
        median_months,
        average_years: average_months / MONTHS_PER_YEAR,
        median_years: median_months / MONTHS_PER_YEAR,
        distribution,
        retention_risk,
    }
}
