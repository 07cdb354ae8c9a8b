//! Employee model and related types.
//!
//! This module defines the Employee struct and EmploymentStatus enum
//! for representing workers in the payroll calculation system.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the employment status of a worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    /// Regular employment (permanent, full benefits).
    Regular,
    /// Probationary employment (within the probation window).
    Probationary,
}

/// Represents an employee subject to payroll calculation.
///
/// Carries only the payroll-relevant profile: the monthly basic salary that
/// drives every derived rate and statutory contribution, plus the three
/// fixed monthly allowances that are added to gross pay untaxed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee. Zero is never a valid id.
    pub employee_id: u32,
    /// The employee's given name.
    pub first_name: String,
    /// The employee's family name.
    pub last_name: String,
    /// The employment status.
    pub status: EmploymentStatus,
    /// The monthly basic salary all rates derive from.
    pub basic_salary: Decimal,
    /// Fixed monthly rice subsidy.
    #[serde(default)]
    pub rice_subsidy: Decimal,
    /// Fixed monthly phone allowance.
    #[serde(default)]
    pub phone_allowance: Decimal,
    /// Fixed monthly clothing allowance.
    #[serde(default)]
    pub clothing_allowance: Decimal,
}

impl Employee {
    /// Returns the employee's full name in "first last" order.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{Employee, EmploymentStatus};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     employee_id: 10001,
    ///     first_name: "Maria".to_string(),
    ///     last_name: "Santos".to_string(),
    ///     status: EmploymentStatus::Regular,
    ///     basic_salary: Decimal::new(20000, 0),
    ///     rice_subsidy: Decimal::ZERO,
    ///     phone_allowance: Decimal::ZERO,
    ///     clothing_allowance: Decimal::ZERO,
    /// };
    /// assert_eq!(employee.full_name(), "Maria Santos");
    /// ```
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the sum of the three fixed monthly allowances.
    pub fn total_allowances(&self) -> Decimal {
        self.rice_subsidy + self.phone_allowance + self.clothing_allowance
    }

    /// Returns true if the employee holds regular status.
    pub fn is_regular(&self) -> bool {
        self.status == EmploymentStatus::Regular
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_employee(status: EmploymentStatus) -> Employee {
        Employee {
            employee_id: 10001,
            first_name: "Maria".to_string(),
            last_name: "Santos".to_string(),
            status,
            basic_salary: Decimal::new(2000000, 2),
            rice_subsidy: Decimal::new(150000, 2),
            phone_allowance: Decimal::new(100000, 2),
            clothing_allowance: Decimal::new(50000, 2),
        }
    }

    #[test]
    fn test_deserialize_regular_employee() {
        let json = r#"{
            "employee_id": 10001,
            "first_name": "Maria",
            "last_name": "Santos",
            "status": "regular",
            "basic_salary": "20000.00",
            "rice_subsidy": "1500.00",
            "phone_allowance": "1000.00",
            "clothing_allowance": "500.00"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.employee_id, 10001);
        assert_eq!(employee.first_name, "Maria");
        assert_eq!(employee.last_name, "Santos");
        assert_eq!(employee.status, EmploymentStatus::Regular);
        assert_eq!(employee.basic_salary, Decimal::new(2000000, 2));
        assert_eq!(employee.rice_subsidy, Decimal::new(150000, 2));
    }

    #[test]
    fn test_deserialize_probationary_employee() {
        let json = r#"{
            "employee_id": 10002,
            "first_name": "Jose",
            "last_name": "Reyes",
            "status": "probationary",
            "basic_salary": "15000.00"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.status, EmploymentStatus::Probationary);
        // Omitted allowances default to zero.
        assert_eq!(employee.rice_subsidy, Decimal::ZERO);
        assert_eq!(employee.phone_allowance, Decimal::ZERO);
        assert_eq!(employee.clothing_allowance, Decimal::ZERO);
    }

    #[test]
    fn test_serialize_employee_round_trip() {
        let employee = create_test_employee(EmploymentStatus::Regular);
        let json = serde_json::to_string(&employee).unwrap();

        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
    }

    #[test]
    fn test_salary_serializes_as_string() {
        let employee = create_test_employee(EmploymentStatus::Regular);
        let json = serde_json::to_string(&employee).unwrap();
        assert!(json.contains("\"basic_salary\":\"20000.00\""));
        assert!(json.contains("\"rice_subsidy\":\"1500.00\""));
    }

    #[test]
    fn test_full_name_joins_first_and_last() {
        let employee = create_test_employee(EmploymentStatus::Regular);
        assert_eq!(employee.full_name(), "Maria Santos");
    }

    #[test]
    fn test_total_allowances_sums_all_three() {
        let employee = create_test_employee(EmploymentStatus::Regular);
        assert_eq!(employee.total_allowances(), Decimal::new(300000, 2));
    }

    #[test]
    fn test_total_allowances_zero_when_none_set() {
        let mut employee = create_test_employee(EmploymentStatus::Regular);
        employee.rice_subsidy = Decimal::ZERO;
        employee.phone_allowance = Decimal::ZERO;
        employee.clothing_allowance = Decimal::ZERO;
        assert_eq!(employee.total_allowances(), Decimal::ZERO);
    }

    #[test]
    fn test_is_regular_returns_true_for_regular() {
        let employee = create_test_employee(EmploymentStatus::Regular);
        assert!(employee.is_regular());
    }

    #[test]
    fn test_is_regular_returns_false_for_probationary() {
        let employee = create_test_employee(EmploymentStatus::Probationary);
        assert!(!employee.is_regular());
    }

    #[test]
    fn test_employment_status_serialization() {
        assert_eq!(
            serde_json::to_string(&EmploymentStatus::Regular).unwrap(),
            "\"regular\""
        );
        assert_eq!(
            serde_json::to_string(&EmploymentStatus::Probationary).unwrap(),
            "\"probationary\""
        );
    }
}
