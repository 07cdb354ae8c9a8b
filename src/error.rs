//! Error types for the payroll calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all fatal conditions that can occur during a payroll calculation.
//! Degraded-but-recoverable conditions (an optional source being offline,
//! zero attendance, a negative net pay) are reported as warnings on the
//! calculation result instead, never through this type.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the payroll calculation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound { id: 10042 };
/// assert_eq!(error.to_string(), "Employee not found: 10042");
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

    /// The requested employee id failed validation before any lookup.
    #[error("Invalid employee id: {id} (must be greater than zero)")]
    InvalidEmployeeId {
        /// The rejected employee id.
        id: u32,
    },

    /// The pay period ends before it starts.
    #[error("Invalid pay period: end date {end_date} is before start date {start_date}")]
    InvalidPayPeriod {
        /// The start of the rejected period.
        start_date: NaiveDate,
        /// The end of the rejected period.
        end_date: NaiveDate,
    },

    /// No employee record exists for the given id.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee id that was not found.
        id: u32,
    },

    /// The employee's basic salary is zero or negative.
    #[error("Employee {id} has invalid basic salary: {salary}")]
    InvalidSalary {
        /// The employee id.
        id: u32,
        /// The rejected salary value.
        salary: Decimal,
    },

    /// A required data source failed. Only the employee and attendance
    /// sources are required; optional sources degrade to warnings.
    #[error("Data source '{source}' unavailable: {message}")]
    SourceUnavailable {
        /// The name of the failing source.
        ///
        /// Declared with a raw identifier because thiserror treats a field
        /// literally named `source` as the `Error::source()` cause, which
        /// would require it to implement `std::error::Error`. The raw form
        /// keeps the public field name `source` while opting out of that
        /// detection.
        r#source: String,
        /// A description of the failure.
        message: String,
    },

    /// Gross pay came out negative, which indicates corrupt input data.
    #[error("Calculated gross pay is negative: {amount}")]
    NegativeGrossPay {
        /// The negative gross pay amount.
        amount: Decimal,
    },

    /// Total deductions came out negative, which indicates corrupt input data.
    #[error("Calculated total deductions are negative: {amount}")]
    NegativeTotalDeductions {
        /// The negative deduction total.
        amount: Decimal,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/schedule.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/schedule.yaml"
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
    fn test_invalid_employee_id_displays_id() {
        let error = EngineError::InvalidEmployeeId { id: 0 };
        assert_eq!(
            error.to_string(),
            "Invalid employee id: 0 (must be greater than zero)"
        );
    }

    #[test]
    fn test_invalid_pay_period_displays_both_dates() {
        let error = EngineError::InvalidPayPeriod {
            start_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid pay period: end date 2024-06-01 is before start date 2024-06-30"
        );
    }

    #[test]
    fn test_employee_not_found_displays_id() {
        let error = EngineError::EmployeeNotFound { id: 10042 };
        assert_eq!(error.to_string(), "Employee not found: 10042");
    }

    #[test]
    fn test_invalid_salary_displays_id_and_amount() {
        let error = EngineError::InvalidSalary {
            id: 10005,
            salary: Decimal::from_str("-500.00").unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Employee 10005 has invalid basic salary: -500.00"
        );
    }

    #[test]
    fn test_source_unavailable_displays_source_and_message() {
        let error = EngineError::SourceUnavailable {
            source: "attendance".to_string(),
            message: "connection refused".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Data source 'attendance' unavailable: connection refused"
        );
    }

    #[test]
    fn test_negative_gross_pay_displays_amount() {
        let error = EngineError::NegativeGrossPay {
            amount: Decimal::from_str("-120.50").unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Calculated gross pay is negative: -120.50"
        );
    }

    #[test]
    fn test_negative_total_deductions_displays_amount() {
        let error = EngineError::NegativeTotalDeductions {
            amount: Decimal::from_str("-42.00").unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Calculated total deductions are negative: -42.00"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_employee_not_found() -> EngineResult<()> {
            Err(EngineError::EmployeeNotFound { id: 99 })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_employee_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
