//! Configuration loading and management for the workforce analytics engine.
//!
//! This module provides functionality to load engine configuration from
//! YAML files: the department→category mapping used for R&D:GTM ratios and
//! the benchmark reference catalog used for percentile comparisons.
//!
//! # Example
//!
//! ```no_run
//! use workforce_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/analytics").unwrap();
//! let reference = config.benchmark("cost_per_fte").unwrap();
//! println!("Median peer cost per FTE: {}", reference.p50);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BenchmarkCatalog, DepartmentCategory, DepartmentCategoryMap};
