//! Calculation logic for the workforce analytics engine.
//!
//! This module contains the pure computation functions: month-bucket date
//! arithmetic, roster metrics aggregation, tenure analysis, benchmark
//! percentile comparison, headcount scenario simulation, and cash-runway
//! projection.
//!
//! Every function here is a synchronous function of its arguments with no
//! shared state, no I/O, and no wall-clock reads; reference dates are
//! always injected by the caller.

mod benchmark;
mod metrics;
mod month_math;
mod runway;
mod scenario;
mod tenure;

pub use benchmark::compare_to_benchmark;
pub use metrics::compute_metrics;
pub use month_math::{add_months, end_of_month, month_anchor, month_start, months_between};
pub use runway::project_runway;
pub use scenario::run_scenario;
pub use tenure::compute_tenure;
