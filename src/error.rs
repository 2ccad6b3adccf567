use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

use crate::model::validation::FieldError;
use crate::store::StoreError;

/// Rejected submission, echoed back so the client can redisplay it.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationFailure {
    #[schema(example = "Validation failed")]
    pub message: String,
    #[schema(value_type = Object)]
    pub input: Value,
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed")]
    Validation(ValidationFailure),
    #[error("{0}")]
    NotFound(&'static str),
    #[error("{0}")]
    Conflict(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn validation<T: Serialize>(input: &T, errors: Vec<FieldError>) -> Self {
        AppError::Validation(ValidationFailure {
            message: "Validation failed".to_string(),
            input: serde_json::to_value(input).unwrap_or(Value::Null),
            errors,
        })
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(failure) => HttpResponse::UnprocessableEntity().json(failure),
            AppError::Store(e) => {
                error!(error = %e, "Storage operation failed");
                HttpResponse::InternalServerError().json(json!({
                    "message": "Internal Server Error"
                }))
            }
            other => HttpResponse::build(other.status_code()).json(json!({
                "message": other.to_string()
            })),
        }
    }
}
