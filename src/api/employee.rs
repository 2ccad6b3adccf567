use actix_web::{HttpResponse, web};
use tracing::debug;

use super::{Submission, see_other, submitted};
use crate::error::AppError;
use crate::model::employee::EmployeeForm;
use crate::service::employee as service;
use crate::state::AppState;

/// List employees
#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "All employees in insertion order", body = [crate::model::employee::Employee]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn list_employees(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let employees = service::list_employees(state.store.as_ref()).await?;
    Ok(HttpResponse::Ok().json(employees))
}

/// Blank create form
#[utoipa::path(
    get,
    path = "/employees/create",
    responses(
        (status = 200, description = "Empty employee form", body = EmployeeForm)
    ),
    tag = "Employee"
)]
pub async fn create_form() -> HttpResponse {
    HttpResponse::Ok().json(EmployeeForm::default())
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/employees/create",
    request_body(content = EmployeeForm, content_type = "application/json"),
    responses(
        (status = 303, description = "Created, redirects to /employees"),
        (status = 422, description = "Validation failed", body = crate::error::ValidationFailure),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    state: web::Data<AppState>,
    body: Submission<EmployeeForm>,
) -> Result<HttpResponse, AppError> {
    service::create_employee(state.store.as_ref(), submitted(body)).await?;
    Ok(see_other("/employees"))
}

/// Employee edit form
#[utoipa::path(
    get,
    path = "/employees/edit/{id}",
    params(
        ("id" = u64, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee to edit", body = crate::model::employee::Employee),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn edit_form(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    let employee = service::get_employee_for_edit(state.store.as_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Update Employee
#[utoipa::path(
    post,
    path = "/employees/edit/{id}",
    params(
        ("id" = u64, Path, description = "Employee ID")
    ),
    request_body(content = EmployeeForm, content_type = "application/json"),
    responses(
        (status = 303, description = "Updated, redirects to /employees"),
        (status = 404, description = "Employee not found or id mismatch", body = Object, example = json!({
            "message": "Employee not found"
        })),
        (status = 422, description = "Validation failed", body = crate::error::ValidationFailure),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    body: Submission<EmployeeForm>,
) -> Result<HttpResponse, AppError> {
    service::update_employee(state.store.as_ref(), path.into_inner(), submitted(body)).await?;
    Ok(see_other("/employees"))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/employees/details/{id}",
    params(
        ("id" = u64, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = crate::model::employee::Employee),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn employee_details(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    debug!(employee_id = id, "Fetching employee details");
    let employee = service::get_employee_details(state.store.as_ref(), id).await?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Delete Employee
#[utoipa::path(
    get,
    path = "/employees/delete/{id}",
    params(
        ("id" = u64, Path, description = "Employee ID")
    ),
    responses(
        (status = 303, description = "Deleted, redirects to /employees"),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found"
        })),
        (status = 409, description = "Refused by the restrict delete policy", body = Object),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    service::delete_employee(
        state.store.as_ref(),
        state.policies.employee_delete,
        path.into_inner(),
    )
    .await?;
    Ok(see_other("/employees"))
}
