//! Error types for the workforce analytics engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during analysis.
//!
//! Degenerate data (empty rosters, zero denominators, missing start dates)
//! is never an error; those cases produce explicit zero or absent results.
//! Errors are reserved for caller-contract violations and configuration
//! failures.

use thiserror::Error;

/// The main error type for the workforce analytics engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use workforce_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A scenario change referenced an employee absent from the baseline roster.
    #[error("Scenario change references unknown employee: {id}")]
    UnknownEmployee {
        /// The employee id that was not found in the roster.
        id: String,
    },

    /// A scenario change contained invalid data.
    #[error("Invalid scenario change: {message}")]
    InvalidChange {
        /// A description of what made the change invalid.
        message: String,
    },

    /// The requested simulation horizon was not a positive number of months.
    #[error("Scenario horizon must be at least one month, got {months}")]
    InvalidHorizon {
        /// The rejected horizon length.
        months: u32,
    },

    /// No benchmark reference exists for the requested metric.
    #[error("Benchmark reference not found for metric: {metric}")]
    BenchmarkNotFound {
        /// The metric key that was not found in the catalog.
        metric: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_unknown_employee_displays_id() {
        let error = EngineError::UnknownEmployee {
            id: "emp_042".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Scenario change references unknown employee: emp_042"
        );
    }

    #[test]
    fn test_invalid_change_displays_message() {
        let error = EngineError::InvalidChange {
            message: "compensation must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid scenario change: compensation must not be negative"
        );
    }

    #[test]
    fn test_invalid_horizon_displays_months() {
        let error = EngineError::InvalidHorizon { months: 0 };
        assert_eq!(
            error.to_string(),
            "Scenario horizon must be at least one month, got 0"
        );
    }

    #[test]
    fn test_benchmark_not_found_displays_metric() {
        let error = EngineError::BenchmarkNotFound {
            metric: "cost_per_fte".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Benchmark reference not found for metric: cost_per_fte"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_unknown_employee() -> EngineResult<()> {
            Err(EngineError::UnknownEmployee {
                id: "emp_001".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_unknown_employee()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
