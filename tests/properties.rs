//! Property-based tests for the calculation engine.
//!
//! These properties hold for arbitrary rosters and references, not just
//! hand-picked fixtures: cost conservation through aggregation, tenure
//! bucket totals, percentile monotonicity, and scenario neutrality when
//! no changes are supplied.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use workforce_engine::calculation::{
    compare_to_benchmark, compute_metrics, compute_tenure, run_scenario,
};
use workforce_engine::models::{
    BenchmarkReference, EmployeeRecord, EmploymentType, ScenarioOptions,
};

fn employee_strategy() -> impl Strategy<Value = EmployeeRecord> {
    (
        0u32..100_000,
        0u64..500_000,
        prop_oneof![Just("Engineering"), Just("Sales"), Just("Finance")],
        0u8..4,
        proptest::option::of((2015i32..2026, 1u32..13, 1u32..29)),
    )
        .prop_map(|(serial, compensation, department, fte_quarter, start)| {
            EmployeeRecord {
                id: format!("emp_{:05}", serial),
                department: department.to_string(),
                role: "Staff".to_string(),
                level: None,
                employment_type: EmploymentType::FullTime,
                annual_compensation: Decimal::from(compensation),
                base_compensation: None,
                bonus: None,
                equity: None,
                fte_factor: Decimal::new(i64::from(fte_quarter) + 1, 0) / Decimal::from(4),
                start_date: start.map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap()),
                end_date: None,
                manager_id: None,
            }
        })
}

fn roster_strategy(max_size: usize) -> impl Strategy<Value = Vec<EmployeeRecord>> {
    prop::collection::vec(employee_strategy(), 0..=max_size)
}

/// Strictly increasing positive percentile points.
fn reference_strategy() -> impl Strategy<Value = BenchmarkReference> {
    (1u64..1_000_000, 1u64..1_000_000, 1u64..1_000_000).prop_map(|(a, b, c)| {
        let mut points = [a, b, c];
        points.sort_unstable();
        BenchmarkReference {
            p25: Decimal::from(points[0]),
            p50: Decimal::from(points[0] + points[1]),
            p75: Decimal::from(points[0] + points[1] + points[2]),
            peer_segment: "b2b_saas".to_string(),
            company_size: "51-200".to_string(),
        }
    })
}

proptest! {
    /// Department costs always sum back to the roster's total compensation.
    #[test]
    fn prop_cost_conservation(roster in roster_strategy(24)) {
        let snapshot = compute_metrics(&roster, None, None);

        let department_total: Decimal = snapshot.departments.values().map(|d| d.cost).sum();
        let roster_total: Decimal = roster.iter().map(|e| e.annual_compensation).sum();
        prop_assert_eq!(department_total, roster_total);
        prop_assert_eq!(snapshot.summary.total_cost, roster_total);
    }

    /// Tenure bucket counts sum to the number of employees with a start date.
    #[test]
    fn prop_tenure_buckets_cover_dated_employees(roster in roster_strategy(24)) {
        let now = NaiveDate::from_ymd_opt(2025, 9, 15).unwrap();
        let block = compute_tenure(&roster, now);

        let dated = roster.iter().filter(|e| e.start_date.is_some()).count();
        prop_assert_eq!(block.distribution.total() as usize, dated);

        let listed = block.retention_risk.high.len()
            + block.retention_risk.medium.len()
            + block.retention_risk.low.len();
        prop_assert_eq!(listed, dated);
    }

    /// The reference median always lands at percentile 50, status within.
    #[test]
    fn prop_median_is_percentile_fifty(reference in reference_strategy()) {
        let comparison = compare_to_benchmark(reference.p50, &reference);
        prop_assert_eq!(comparison.percentile, Decimal::from(50));
        prop_assert_eq!(
            comparison.status,
            workforce_engine::models::BenchmarkStatus::Within
        );
    }

    /// Percentile estimation is monotonic in the actual value.
    #[test]
    fn prop_percentile_is_monotonic(
        reference in reference_strategy(),
        first in 0u64..5_000_000,
        second in 0u64..5_000_000,
    ) {
        let (low, high) = if first <= second {
            (first, second)
        } else {
            (second, first)
        };

        let low_percentile = compare_to_benchmark(Decimal::from(low), &reference).percentile;
        let high_percentile = compare_to_benchmark(Decimal::from(high), &reference).percentile;
        prop_assert!(low_percentile <= high_percentile);
    }

    /// Percentile estimates always land in [0, 100].
    #[test]
    fn prop_percentile_is_bounded(
        reference in reference_strategy(),
        value in 0u64..10_000_000,
    ) {
        let percentile = compare_to_benchmark(Decimal::from(value), &reference).percentile;
        prop_assert!(percentile >= Decimal::ZERO);
        prop_assert!(percentile <= Decimal::from(100));
    }

    /// A scenario without changes never diverges from the baseline.
    #[test]
    fn prop_empty_changes_mean_zero_savings(
        roster in roster_strategy(12),
        horizon in 1u32..25,
    ) {
        let options = {
            let mut options =
                ScenarioOptions::new(NaiveDate::from_ymd_opt(2025, 9, 15).unwrap());
            options.horizon_months = horizon;
            options
        };

        let projection = run_scenario(&roster, &[], &options).unwrap();
        prop_assert_eq!(projection.monthly.len(), horizon as usize);
        for entry in &projection.monthly {
            prop_assert_eq!(entry.savings, Decimal::ZERO);
            prop_assert_eq!(entry.baseline_cost, entry.scenario_cost);
        }
    }

    /// Runway stays absent whenever cash covers the whole horizon's burn.
    #[test]
    fn prop_runway_absent_when_cash_covers_burn(
        roster in roster_strategy(12),
        horizon in 1u32..25,
    ) {
        let now = NaiveDate::from_ymd_opt(2025, 9, 15).unwrap();
        let total_burn: Decimal = roster
            .iter()
            .filter(|e| e.end_date.is_none())
            .map(|e| e.annual_compensation / Decimal::from(12))
            .sum::<Decimal>()
            * Decimal::from(horizon);

        let mut options = ScenarioOptions::new(now);
        options.horizon_months = horizon;
        options.starting_cash = Some(total_burn + Decimal::ONE);

        let projection = run_scenario(&roster, &[], &options).unwrap();
        prop_assert_eq!(projection.runway.baseline_months, None);
        prop_assert_eq!(projection.runway.scenario_months, None);
        prop_assert_eq!(projection.runway.extension_months, None);
    }
}
