//! Configuration loading functionality.
//!
//! This module loads a [`ContributionSchedule`] from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::ContributionSchedule;

/// Loads a contribution schedule from a YAML file.
///
/// Sections omitted from the file fall back to the statutory defaults,
/// so a file can override just one table.
///
/// # Arguments
///
/// * `path` - Path to the schedule file (e.g., "./config/contributions.yaml")
///
/// # Returns
///
/// Returns the parsed schedule on success, or an error if:
/// - The file cannot be read
/// - The file contains invalid YAML
/// - A present section is missing a required field
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::load_schedule;
///
/// let schedule = load_schedule("./config/contributions.yaml")?;
/// println!("{} social insurance tiers", schedule.social_insurance.brackets.len());
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
pub fn load_schedule<P: AsRef<Path>>(path: P) -> EngineResult<ContributionSchedule> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
        path: path_str,
        message: e.to_string(),
    })
}
