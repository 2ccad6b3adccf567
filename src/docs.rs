use crate::error::ValidationFailure;
use crate::model::attendance::{Attendance, MarkAttendanceForm, MarkAttendanceView};
use crate::model::employee::{Employee, EmployeeForm};
use crate::model::validation::FieldError;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee Attendance API",
        version = "0.1.0",
        description = r#"
## Employee Attendance Tracker

Records employees, marks a daily attendance status per employee, and lists
or reports those records.

### Key Features
- **Employee Management**
  - Create, edit, view, list and delete employees
- **Attendance Management**
  - Mark today's status for an employee
  - List attendance newest first, or dump the full report

### Submissions
Write endpoints accept JSON or urlencoded form bodies and answer with
`303 See Other` pointing at the relevant listing. Validation failures come
back as `422` with the rejected input and per-field messages.

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::list_employees,
        crate::api::employee::create_form,
        crate::api::employee::create_employee,
        crate::api::employee::edit_form,
        crate::api::employee::update_employee,
        crate::api::employee::employee_details,
        crate::api::employee::delete_employee,

        crate::api::attendance::list_attendance,
        crate::api::attendance::mark_form,
        crate::api::attendance::mark_attendance,
        crate::api::attendance::report
    ),
    components(
        schemas(
            Employee,
            EmployeeForm,
            Attendance,
            MarkAttendanceForm,
            MarkAttendanceView,
            FieldError,
            ValidationFailure
        )
    ),
    tags(
        (name = "Employee", description = "Employee management APIs"),
        (name = "Attendance", description = "Attendance management APIs"),
    )
)]
pub struct ApiDoc;
