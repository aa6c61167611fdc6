//! Benchmark percentile estimation and classification.
//!
//! This module positions a scalar metric against a three-point percentile
//! reference using piecewise-linear interpolation, then classifies the
//! result into a status band and a distance-from-median severity.

use rust_decimal::Decimal;

use crate::models::{
    BenchmarkComparison, BenchmarkReference, BenchmarkSeverity, BenchmarkStatus,
};

const LOWER_QUARTILE: Decimal = Decimal::from_parts(25, 0, 0, false, 0);
const MEDIAN: Decimal = Decimal::from_parts(50, 0, 0, false, 0);
const UPPER_QUARTILE: Decimal = Decimal::from_parts(75, 0, 0, false, 0);
const TOP: Decimal = Decimal::from_parts(100, 0, 0, false, 0);
const QUARTILE_SPAN: Decimal = Decimal::from_parts(25, 0, 0, false, 0);

/// Relative distance from the median below which severity is Low. (10%)
const SEVERITY_MEDIUM_THRESHOLD: Decimal = Decimal::from_parts(10, 0, 0, false, 2);
/// Relative distance from the median above which severity is High. (25%)
const SEVERITY_HIGH_THRESHOLD: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

/// Positions an actual value against a percentile reference.
///
/// The percentile estimate interpolates linearly within each quartile
/// segment and extrapolates flatly beyond the p75 point, saturating 25
/// percentile points past it. The estimate is monotonic in the actual
/// value and always lands in [0, 100].
///
/// # Examples
///
/// ```
/// use workforce_engine::calculation::compare_to_benchmark;
/// use workforce_engine::models::{BenchmarkReference, BenchmarkStatus};
/// use rust_decimal::Decimal;
///
/// let reference = BenchmarkReference {
///     p25: Decimal::from(100),
///     p50: Decimal::from(200),
///     p75: Decimal::from(300),
///     peer_segment: "b2b_saas".to_string(),
///     company_size: "51-200".to_string(),
/// };
///
/// let comparison = compare_to_benchmark(Decimal::from(200), &reference);
/// assert_eq!(comparison.percentile, Decimal::from(50));
/// assert_eq!(comparison.status, BenchmarkStatus::Within);
/// ```
pub fn compare_to_benchmark(
    actual: Decimal,
    reference: &BenchmarkReference,
) -> BenchmarkComparison {
    let percentile = estimate_percentile(actual, reference);

    BenchmarkComparison {
        actual,
        reference: reference.clone(),
        percentile,
        status: classify_status(percentile),
        severity: classify_severity(actual, reference.p50),
    }
}

/// Piecewise-linear percentile estimate across the three known points.
///
/// A degenerate segment (equal adjacent reference points) jumps directly
/// to the segment's boundary percentile instead of dividing by zero.
fn estimate_percentile(value: Decimal, reference: &BenchmarkReference) -> Decimal {
    if value <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let percentile = if value <= reference.p25 {
        if reference.p25.is_zero() {
            LOWER_QUARTILE
        } else {
            QUARTILE_SPAN * value / reference.p25
        }
    } else if value <= reference.p50 {
        let span = reference.p50 - reference.p25;
        if span.is_zero() {
            MEDIAN
        } else {
            LOWER_QUARTILE + QUARTILE_SPAN * (value - reference.p25) / span
        }
    } else if value <= reference.p75 {
        let span = reference.p75 - reference.p50;
        if span.is_zero() {
            UPPER_QUARTILE
        } else {
            MEDIAN + QUARTILE_SPAN * (value - reference.p50) / span
        }
    } else {
        let span = reference.p75 - reference.p25;
        if span.is_zero() {
            UPPER_QUARTILE
        } else {
            let overshoot = ((value - reference.p75) / span).min(Decimal::ONE);
            UPPER_QUARTILE + QUARTILE_SPAN * overshoot
        }
    };

    percentile.clamp(Decimal::ZERO, TOP)
}

fn classify_status(percentile: Decimal) -> BenchmarkStatus {
    if percentile < LOWER_QUARTILE {
        BenchmarkStatus::Below
    } else if percentile <= UPPER_QUARTILE {
        BenchmarkStatus::Within
    } else {
        BenchmarkStatus::Above
    }
}

/// Severity from the relative distance between the actual value and the
/// reference median.
fn classify_severity(actual: Decimal, p50: Decimal) -> BenchmarkSeverity {
    if p50.is_zero() {
        return if actual.is_zero() {
            BenchmarkSeverity::Low
        } else {
            BenchmarkSeverity::High
        };
    }

    let relative_distance = ((actual - p50) / p50).abs();
    if relative_distance <= SEVERITY_MEDIUM_THRESHOLD {
        BenchmarkSeverity::Low
    } else if relative_distance <= SEVERITY_HIGH_THRESHOLD {
        BenchmarkSeverity::Medium
    } else {
        BenchmarkSeverity::High
    }
}
