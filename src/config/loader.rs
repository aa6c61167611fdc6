//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::BenchmarkReference;

use super::types::{BenchmarkCatalog, DepartmentCategoryMap};

/// Loads and provides access to engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides methods to query the department category map and benchmark
/// reference catalog.
///
/// # Directory Structure
///
/// ```text
/// config/analytics/
/// ├── departments.yaml  # Department → category mapping
/// └── benchmarks.yaml   # Percentile references keyed by metric
/// ```
///
/// # Example
///
/// ```no_run
/// use workforce_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/analytics")?;
/// let reference = loader.benchmark("cost_per_fte")?;
/// println!("Peer median: {}", reference.p50);
/// # Ok::<(), workforce_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    categories: DepartmentCategoryMap,
    benchmarks: BenchmarkCatalog,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g.,
    ///   "./config/analytics")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if any
    /// required file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let departments_path = path.join("departments.yaml");
        let categories = Self::load_yaml::<DepartmentCategoryMap>(&departments_path)?;

        let benchmarks_path = path.join("benchmarks.yaml");
        let benchmarks = Self::load_yaml::<BenchmarkCatalog>(&benchmarks_path)?;

        Ok(Self {
            categories,
            benchmarks,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the department category map.
    pub fn categories(&self) -> &DepartmentCategoryMap {
        &self.categories
    }

    /// Returns the benchmark catalog.
    pub fn benchmarks(&self) -> &BenchmarkCatalog {
        &self.benchmarks
    }

    /// Looks up the benchmark reference for a metric key.
    ///
    /// # Arguments
    ///
    /// * `metric` - The metric key (e.g., "cost_per_fte")
    ///
    /// # Returns
    ///
    /// Returns the reference if found, or `BenchmarkNotFound` error.
    pub fn benchmark(&self, metric: &str) -> EngineResult<&BenchmarkReference> {
        self.benchmarks.get(metric)
    }
}
