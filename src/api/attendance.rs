use actix_web::{HttpResponse, web};
use chrono::Local;

use super::{Submission, see_other, submitted};
use crate::error::AppError;
use crate::model::attendance::MarkAttendanceForm;
use crate::service::attendance as service;
use crate::state::AppState;

/// Attendance list
#[utoipa::path(
    get,
    path = "/attendance",
    responses(
        (status = 200, description = "Attendance joined with employees, newest date first", body = [crate::model::attendance::Attendance]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let records = service::list_attendance(state.store.as_ref()).await?;
    Ok(HttpResponse::Ok().json(records))
}

/// Mark attendance form
#[utoipa::path(
    get,
    path = "/attendance/mark",
    responses(
        (status = 200, description = "Employees to choose from", body = crate::model::attendance::MarkAttendanceView),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn mark_form(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let view = service::mark_attendance_form(state.store.as_ref()).await?;
    Ok(HttpResponse::Ok().json(view))
}

/// Mark attendance
///
/// The record is always dated today; a `date` in the body is ignored.
#[utoipa::path(
    post,
    path = "/attendance/mark",
    request_body(content = MarkAttendanceForm, content_type = "application/json"),
    responses(
        (status = 303, description = "Marked, redirects to /attendance"),
        (status = 409, description = "Already marked today (reject policy)", body = Object),
        (status = 422, description = "Validation failed", body = crate::error::ValidationFailure),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    state: web::Data<AppState>,
    body: Submission<MarkAttendanceForm>,
) -> Result<HttpResponse, AppError> {
    service::mark_attendance(
        state.store.as_ref(),
        state.policies.duplicate_attendance,
        submitted(body),
        Local::now().date_naive(),
    )
    .await?;
    Ok(see_other("/attendance"))
}

/// Attendance report
#[utoipa::path(
    get,
    path = "/attendance/report",
    responses(
        (status = 200, description = "Every attendance record in storage order", body = [crate::model::attendance::Attendance]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn report(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let records = service::report(state.store.as_ref()).await?;
    Ok(HttpResponse::Ok().json(records))
}
