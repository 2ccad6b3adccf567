use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::employee::Employee;
use super::validation::{FieldError, blank_as_none, required_text};

pub const STATUS_MAX_CHARS: usize = 20;

/// Statuses offered by the mark-attendance form. Any other text up to
/// [`STATUS_MAX_CHARS`] is accepted as well.
pub const SUGGESTED_STATUSES: [&str; 4] = ["Present", "Absent", "Leave", "Half Day"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = 1)]
    pub employee_id: u64,

    #[schema(example = "2024-01-03", value_type = String, format = "date")]
    pub date: NaiveDate,

    #[schema(example = "Present")]
    pub status: String,

    /// Filled only by joined reads; `None` when the employee row is gone.
    pub employee: Option<Employee>,
}

/// Row to be inserted; the date is decided by the service, never the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAttendance {
    pub employee_id: u64,
    pub date: NaiveDate,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarkAttendanceForm {
    #[serde(default, deserialize_with = "blank_as_none")]
    #[schema(example = 1)]
    pub employee_id: Option<u64>,

    #[serde(default)]
    #[schema(example = "Present")]
    pub status: String,
}

impl MarkAttendanceForm {
    pub fn validate(&self, date: NaiveDate) -> Result<NewAttendance, Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.employee_id.is_none() {
            errors.push(FieldError::new("employeeId", "Employee is required"));
        }
        let status = required_text("status", "Status", &self.status, STATUS_MAX_CHARS, &mut errors);

        match self.employee_id {
            Some(employee_id) if errors.is_empty() => Ok(NewAttendance {
                employee_id,
                date,
                status,
            }),
            _ => Err(errors),
        }
    }
}

/// Selection source for the mark-attendance form.
#[derive(Debug, Serialize, ToSchema)]
pub struct MarkAttendanceView {
    pub employees: Vec<Employee>,
    #[schema(example = json!(["Present", "Absent", "Leave", "Half Day"]))]
    pub statuses: Vec<String>,
}

/// Ordering applied by attendance reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceOrder {
    /// Insertion order.
    Stored,
    /// Latest date first, insertion order within a date.
    NewestFirst,
}
