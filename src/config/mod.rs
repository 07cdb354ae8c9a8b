//! Configuration loading and management for the payroll engine.
//!
//! This module provides the contribution schedule types and the YAML
//! loader for overriding the statutory defaults from a file.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::load_schedule;
//!
//! let schedule = load_schedule("./config/contributions.yaml").unwrap();
//! println!("Housing fund cap: {}", schedule.housing_fund.cap);
//! ```

mod loader;
mod types;

pub use loader::load_schedule;
pub use types::{
    ContributionSchedule, HealthInsuranceRule, HousingFundRule, IncomeTaxBracket, IncomeTaxTable,
    SocialInsuranceBracket, SocialInsuranceTable,
};
