use chrono::NaiveDate;
use tracing::{debug, info};

use crate::config::AttendanceDuplicatePolicy;
use crate::error::AppError;
use crate::model::attendance::{
    Attendance, AttendanceOrder, MarkAttendanceForm, MarkAttendanceView, SUGGESTED_STATUSES,
};
use crate::store::AttendanceStore;

/// All attendance rows joined with their employee, newest date first.
pub async fn list_attendance(store: &dyn AttendanceStore) -> Result<Vec<Attendance>, AppError> {
    let records = store.list_attendance(AttendanceOrder::NewestFirst).await?;
    debug!(count = records.len(), "Listed attendance");
    Ok(records)
}

/// Every employee is offered, including those already marked today.
pub async fn mark_attendance_form(
    store: &dyn AttendanceStore,
) -> Result<MarkAttendanceView, AppError> {
    let employees = store.list_employees().await?;
    Ok(MarkAttendanceView {
        employees,
        statuses: SUGGESTED_STATUSES.iter().map(|s| s.to_string()).collect(),
    })
}

/// Records `form.status` for `form.employee_id` dated `today`.
///
/// The employee id is not looked up first; a dangling id fails at the
/// storage foreign key.
pub async fn mark_attendance(
    store: &dyn AttendanceStore,
    policy: AttendanceDuplicatePolicy,
    form: MarkAttendanceForm,
    today: NaiveDate,
) -> Result<u64, AppError> {
    let entry = form
        .validate(today)
        .map_err(|errors| AppError::validation(&form, errors))?;

    if policy == AttendanceDuplicatePolicy::Reject
        && store.attendance_exists(entry.employee_id, entry.date).await?
    {
        return Err(AppError::Conflict(format!(
            "Attendance for employee {} is already marked on {}",
            entry.employee_id, entry.date
        )));
    }

    let id = store.insert_attendance(&entry).await?;
    info!(
        attendance_id = id,
        employee_id = entry.employee_id,
        status = %entry.status,
        "Attendance marked"
    );
    Ok(id)
}

/// Full dump in storage order.
pub async fn report(store: &dyn AttendanceStore) -> Result<Vec<Attendance>, AppError> {
    let records = store.list_attendance(AttendanceOrder::Stored).await?;
    debug!(count = records.len(), "Built attendance report");
    Ok(records)
}
