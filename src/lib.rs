//! Payroll calculation engine.
//!
//! This crate computes monthly payroll for employees from attendance,
//! overtime, and leave data: rate derivation, gross earnings, time and
//! leave deductions, statutory contributions, and the final net pay,
//! with degraded-mode warnings when auxiliary data sources are down.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod report;
pub mod store;
