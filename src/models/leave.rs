//! Leave request model and related types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::PayPeriod;

/// The approval state of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Awaiting supervisor action.
    Pending,
    /// Approved and effective.
    Approved,
    /// Rejected; never deducted.
    Rejected,
}

/// Represents a leave request filed by an employee.
///
/// The leave type is free-form text as entered in the HR system ("Sick",
/// "Vacation", "Unpaid", ...). Only approved requests whose type matches
/// "Unpaid" case-insensitively reduce pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRecord {
    /// The employee who filed the request.
    pub employee_id: u32,
    /// The first day of leave.
    pub start_date: NaiveDate,
    /// The last day of leave.
    pub end_date: NaiveDate,
    /// The leave type as captured by the HR system.
    pub leave_type: String,
    /// The number of leave days the request covers.
    pub days: u32,
    /// The approval state.
    pub status: LeaveStatus,
}

impl LeaveRecord {
    /// Returns true if the request has been approved.
    pub fn is_approved(&self) -> bool {
        self.status == LeaveStatus::Approved
    }

    /// Returns true if the leave type is "Unpaid", compared
    /// case-insensitively to tolerate HR data entry variations.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{LeaveRecord, LeaveStatus};
    /// use chrono::NaiveDate;
    ///
    /// let record = LeaveRecord {
    ///     employee_id: 10001,
    ///     start_date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2024, 6, 11).unwrap(),
    ///     leave_type: "UNPAID".to_string(),
    ///     days: 2,
    ///     status: LeaveStatus::Approved,
    /// };
    /// assert!(record.is_unpaid());
    /// ```
    pub fn is_unpaid(&self) -> bool {
        self.leave_type.eq_ignore_ascii_case("unpaid")
    }

    /// Returns true if the leave dates overlap the given pay period.
    pub fn overlaps(&self, period: &PayPeriod) -> bool {
        self.start_date <= period.end_date && self.end_date >= period.start_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_leave(leave_type: &str, status: LeaveStatus) -> LeaveRecord {
        LeaveRecord {
            employee_id: 10001,
            start_date: make_date("2024-06-10"),
            end_date: make_date("2024-06-11"),
            leave_type: leave_type.to_string(),
            days: 2,
            status,
        }
    }

    /// LV-001: exact-case unpaid type matches
    #[test]
    fn test_is_unpaid_exact_case() {
        let record = create_leave("Unpaid", LeaveStatus::Approved);
        assert!(record.is_unpaid());
    }

    /// LV-002: case variations still match
    #[test]
    fn test_is_unpaid_ignores_case() {
        assert!(create_leave("UNPAID", LeaveStatus::Approved).is_unpaid());
        assert!(create_leave("unpaid", LeaveStatus::Approved).is_unpaid());
        assert!(create_leave("UnPaId", LeaveStatus::Approved).is_unpaid());
    }

    /// LV-003: other leave types never match
    #[test]
    fn test_is_unpaid_rejects_other_types() {
        assert!(!create_leave("Sick", LeaveStatus::Approved).is_unpaid());
        assert!(!create_leave("Vacation", LeaveStatus::Approved).is_unpaid());
        assert!(!create_leave("Unpaid Leave", LeaveStatus::Approved).is_unpaid());
        assert!(!create_leave("", LeaveStatus::Approved).is_unpaid());
    }

    #[test]
    fn test_is_approved_only_for_approved_status() {
        assert!(create_leave("Unpaid", LeaveStatus::Approved).is_approved());
        assert!(!create_leave("Unpaid", LeaveStatus::Pending).is_approved());
        assert!(!create_leave("Unpaid", LeaveStatus::Rejected).is_approved());
    }

    #[test]
    fn test_overlaps_pay_period() {
        let record = create_leave("Unpaid", LeaveStatus::Approved);
        let june = PayPeriod {
            start_date: make_date("2024-06-01"),
            end_date: make_date("2024-06-30"),
        };
        let july = PayPeriod {
            start_date: make_date("2024-07-01"),
            end_date: make_date("2024-07-31"),
        };

        assert!(record.overlaps(&june));
        assert!(!record.overlaps(&july));
    }

    #[test]
    fn test_leave_status_serialization() {
        assert_eq!(
            serde_json::to_string(&LeaveStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&LeaveStatus::Approved).unwrap(),
            "\"approved\""
        );
        assert_eq!(
            serde_json::to_string(&LeaveStatus::Rejected).unwrap(),
            "\"rejected\""
        );
    }

    #[test]
    fn test_leave_record_deserialization() {
        let json = r#"{
            "employee_id": 10001,
            "start_date": "2024-06-10",
            "end_date": "2024-06-11",
            "leave_type": "Unpaid",
            "days": 2,
            "status": "approved"
        }"#;

        let record: LeaveRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.days, 2);
        assert_eq!(record.status, LeaveStatus::Approved);
        assert!(record.is_unpaid());
    }

    #[test]
    fn test_leave_record_round_trip() {
        let record = create_leave("Sick", LeaveStatus::Pending);
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: LeaveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
