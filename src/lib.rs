//! Workforce analytics and financial-planning engine.
//!
//! This crate turns a flat employee roster into organizational metrics
//! (department rollups, headcount ratios, tenure statistics), positions
//! computed metrics against industry benchmark percentiles, and simulates
//! the financial effect of dated headcount changes over time, including
//! cash-runway projection.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
