//! Tenure statistics models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Counts of employees per tenure bucket.
///
/// Buckets are half-open on the lower end and open-ended at the top:
/// `[0,6)`, `[6,12)`, `[12,24)`, `[24,60)`, and `[60,∞)` months. The five
/// counts sum to the number of employees with a known start date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenureDistribution {
    /// Tenure under six months.
    pub under_six_months: u32,
    /// Tenure of six months up to one year.
    pub six_to_twelve_months: u32,
    /// Tenure of one year up to two years.
    pub one_to_two_years: u32,
    /// Tenure of two years up to five years.
    pub two_to_five_years: u32,
    /// Tenure of five years or more.
    pub five_years_plus: u32,
}

impl TenureDistribution {
    /// Sum of all bucket counts.
    pub fn total(&self) -> u32 {
        self.under_six_months
            + self.six_to_twelve_months
            + self.one_to_two_years
            + self.two_to_five_years
            + self.five_years_plus
    }
}

/// Employee ids grouped by attrition likelihood.
///
/// High risk is tenure under six months, medium is six to twelve months,
/// and low is everything longer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetentionRisk {
    /// Ids of employees with tenure under six months.
    pub high: Vec<String>,
    /// Ids of employees with tenure of six up to twelve months.
    pub medium: Vec<String>,
    /// Ids of all other employees with a known start date.
    pub low: Vec<String>,
}

/// Tenure statistics for one roster.
///
/// Employees without a start date are excluded from every figure here,
/// rather than being treated as zero-tenure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenureBlock {
    /// Mean tenure in whole months.
    pub average_months: Decimal,
    /// Median tenure in months, interpolating between the two middle
    /// values for even counts.
    pub median_months: Decimal,
    /// Mean tenure expressed in years.
    pub average_years: Decimal,
    /// Median tenure expressed in years.
    pub median_years: Decimal,
    /// Bucketed tenure distribution.
    pub distribution: TenureDistribution,
    /// Retention-risk id lists.
    pub retention_risk: RetentionRisk,
}
