use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::validation::{FieldError, blank_as_none, required_text};

pub const NAME_MAX_CHARS: usize = 100;
pub const DEPARTMENT_MAX_CHARS: usize = 50;
pub const DESIGNATION_MAX_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "Alice")]
    pub name: String,

    #[schema(example = "Eng")]
    pub department: String,

    #[schema(example = "SWE")]
    pub designation: String,

    #[schema(example = "2023-05-01", value_type = String, format = "date")]
    pub date_of_joining: NaiveDate,
}

/// Create/edit submission as posted by a client.
///
/// Every field defaults, and blank `id`/`dateOfJoining` values decode as
/// absent, so that missing input reaches validation and comes back as a
/// field error instead of a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeForm {
    #[serde(default, deserialize_with = "blank_as_none")]
    #[schema(example = 1)]
    pub id: Option<u64>,

    #[serde(default)]
    #[schema(example = "Alice")]
    pub name: String,

    #[serde(default)]
    #[schema(example = "Eng")]
    pub department: String,

    #[serde(default)]
    #[schema(example = "SWE")]
    pub designation: String,

    #[serde(default, deserialize_with = "blank_as_none")]
    #[schema(example = "2023-05-01", value_type = Option<String>, format = "date")]
    pub date_of_joining: Option<NaiveDate>,
}

/// Validated mutable fields of an employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeFields {
    pub name: String,
    pub department: String,
    pub designation: String,
    pub date_of_joining: NaiveDate,
}

impl EmployeeForm {
    pub fn validate(&self) -> Result<EmployeeFields, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = required_text("name", "Employee name", &self.name, NAME_MAX_CHARS, &mut errors);
        let department = required_text(
            "department",
            "Department",
            &self.department,
            DEPARTMENT_MAX_CHARS,
            &mut errors,
        );
        let designation = required_text(
            "designation",
            "Designation",
            &self.designation,
            DESIGNATION_MAX_CHARS,
            &mut errors,
        );
        if self.date_of_joining.is_none() {
            errors.push(FieldError::new("dateOfJoining", "Date of joining is required"));
        }

        match self.date_of_joining {
            Some(date_of_joining) if errors.is_empty() => Ok(EmployeeFields {
                name,
                department,
                designation,
                date_of_joining,
            }),
            _ => Err(errors),
        }
    }
}
