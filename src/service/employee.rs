use tracing::{debug, info, warn};

use crate::config::EmployeeDeletePolicy;
use crate::error::AppError;
use crate::model::employee::{Employee, EmployeeForm};
use crate::store::AttendanceStore;

const NOT_FOUND: &str = "Employee not found";

pub async fn list_employees(store: &dyn AttendanceStore) -> Result<Vec<Employee>, AppError> {
    let employees = store.list_employees().await?;
    debug!(count = employees.len(), "Listed employees");
    Ok(employees)
}

pub async fn get_employee_for_edit(
    store: &dyn AttendanceStore,
    id: u64,
) -> Result<Employee, AppError> {
    find(store, id).await
}

pub async fn get_employee_details(
    store: &dyn AttendanceStore,
    id: u64,
) -> Result<Employee, AppError> {
    find(store, id).await
}

async fn find(store: &dyn AttendanceStore, id: u64) -> Result<Employee, AppError> {
    store
        .find_employee(id)
        .await?
        .ok_or(AppError::NotFound(NOT_FOUND))
}

/// Validates and inserts a new employee, returning the generated id.
pub async fn create_employee(
    store: &dyn AttendanceStore,
    form: EmployeeForm,
) -> Result<u64, AppError> {
    let fields = form
        .validate()
        .map_err(|errors| AppError::validation(&form, errors))?;

    let id = store.insert_employee(&fields).await?;
    info!(employee_id = id, "Employee created");
    Ok(id)
}

/// Overwrites every mutable field of employee `id`.
///
/// A payload id that disagrees with `id` is treated as not found; a payload
/// without an id is taken to address `id`. No concurrency token is checked.
pub async fn update_employee(
    store: &dyn AttendanceStore,
    id: u64,
    form: EmployeeForm,
) -> Result<(), AppError> {
    if form.id.is_some_and(|payload_id| payload_id != id) {
        warn!(employee_id = id, payload_id = ?form.id, "Employee id mismatch on update");
        return Err(AppError::NotFound(NOT_FOUND));
    }

    find(store, id).await?;

    let fields = form
        .validate()
        .map_err(|errors| AppError::validation(&form, errors))?;

    if !store.update_employee(id, &fields).await? {
        return Err(AppError::NotFound(NOT_FOUND));
    }

    info!(employee_id = id, "Employee updated");
    Ok(())
}

pub async fn delete_employee(
    store: &dyn AttendanceStore,
    policy: EmployeeDeletePolicy,
    id: u64,
) -> Result<(), AppError> {
    let deleted = match policy {
        EmployeeDeletePolicy::Unguarded => store.delete_employee(id).await?,
        EmployeeDeletePolicy::Restrict => {
            find(store, id).await?;
            if store.employee_has_attendance(id).await? {
                return Err(AppError::Conflict(format!(
                    "Employee {id} has attendance records and cannot be deleted"
                )));
            }
            store.delete_employee(id).await?
        }
        EmployeeDeletePolicy::Cascade => store.delete_employee_cascade(id).await?,
    };

    if !deleted {
        return Err(AppError::NotFound(NOT_FOUND));
    }

    info!(employee_id = id, %policy, "Employee deleted");
    Ok(())
}
