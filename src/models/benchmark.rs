//! Benchmark reference and comparison models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Three-point percentile reference data for one metric.
///
/// Reference points come from external peer-group data supplied as 25th,
/// 50th, and 75th percentile values, labeled with the peer segment and
/// company-size bucket they were drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkReference {
    /// The 25th percentile value.
    pub p25: Decimal,
    /// The 50th percentile (median) value.
    pub p50: Decimal,
    /// The 75th percentile value.
    pub p75: Decimal,
    /// Label for the peer segment (e.g. "b2b_saas").
    pub peer_segment: String,
    /// Label for the company-size bucket (e.g. "51-200").
    pub company_size: String,
}

/// Position of an actual value relative to the reference band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkStatus {
    /// Estimated percentile below 25.
    Below,
    /// Estimated percentile between 25 and 75 inclusive.
    Within,
    /// Estimated percentile above 75.
    Above,
}

/// How far the actual value sits from the reference median.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkSeverity {
    /// Within 10% of the median.
    Low,
    /// Between 10% and 25% from the median.
    Medium,
    /// More than 25% from the median.
    High,
}

/// The result of positioning a metric against a benchmark reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkComparison {
    /// The actual computed value being compared.
    pub actual: Decimal,
    /// The reference data the value was compared against.
    pub reference: BenchmarkReference,
    /// Estimated percentile in [0, 100], monotonic in the actual value.
    pub percentile: Decimal,
    /// Band classification of the percentile.
    pub status: BenchmarkStatus,
    /// Distance-from-median classification.
    pub severity: BenchmarkSeverity,
}
