//! Configuration types for the workforce analytics engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::BenchmarkReference;

/// Functional category a department rolls up into.
///
/// Categories drive the R&D:GTM ratio; departments missing from the map
/// fall into [`DepartmentCategory::Other`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepartmentCategory {
    /// Research and development (engineering, product, design, data).
    #[serde(rename = "r_and_d")]
    ResearchAndDevelopment,
    /// Go-to-market (sales, marketing, customer success).
    #[serde(rename = "gtm")]
    GoToMarket,
    /// General and administrative (finance, legal, people).
    #[serde(rename = "g_and_a")]
    GeneralAndAdministrative,
    /// Anything not covered by the mapping.
    #[default]
    #[serde(rename = "other")]
    Other,
}

/// Mapping from department name to functional category.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DepartmentCategoryMap {
    /// Map of department name to category.
    departments: HashMap<String, DepartmentCategory>,
}

impl DepartmentCategoryMap {
    /// Builds a map from explicit entries.
    pub fn new(departments: HashMap<String, DepartmentCategory>) -> Self {
        Self { departments }
    }

    /// Category for a department, defaulting to
    /// [`DepartmentCategory::Other`] for unmapped names.
    pub fn category_for(&self, department: &str) -> DepartmentCategory {
        self.departments
            .get(department)
            .copied()
            .unwrap_or_default()
    }

    /// Number of mapped departments.
    pub fn len(&self) -> usize {
        self.departments.len()
    }

    /// True when no departments are mapped.
    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }
}

/// Catalog of benchmark references keyed by metric name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BenchmarkCatalog {
    /// Map of metric key to percentile reference.
    benchmarks: HashMap<String, BenchmarkReference>,
}

impl BenchmarkCatalog {
    /// Looks up the reference for a metric key.
    pub fn get(&self, metric: &str) -> EngineResult<&BenchmarkReference> {
        self.benchmarks
            .get(metric)
            .ok_or_else(|| EngineError::BenchmarkNotFound {
                metric: metric.to_string(),
            })
    }

    /// Metric keys present in the catalog, in arbitrary order.
    pub fn metrics(&self) -> impl Iterator<Item = &str> {
        self.benchmarks.keys().map(String::as_str)
    }
}
