//! Storage access for employees and attendance rows.
//!
//! Services receive an explicit `&dyn AttendanceStore` handle; the MySQL
//! adapter is wired in at startup and tests use the in-memory store.

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::model::attendance::{Attendance, AttendanceOrder, NewAttendance};
use crate::model::employee::{Employee, EmployeeFields};

#[cfg(test)]
pub mod memory;
pub mod mysql;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage layer rejected a write that breaks the employee reference.
    #[error("foreign key violation: {0}")]
    ForeignKey(String),
    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_foreign_key_violation() {
                return Self::ForeignKey(db_err.message().to_string());
            }
        }
        Self::Database(err)
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait AttendanceStore: Send + Sync {
    async fn list_employees(&self) -> StoreResult<Vec<Employee>>;

    async fn find_employee(&self, id: u64) -> StoreResult<Option<Employee>>;

    /// Inserts a row and returns its generated id.
    async fn insert_employee(&self, fields: &EmployeeFields) -> StoreResult<u64>;

    /// Overwrites every mutable column. `false` when no row matched.
    async fn update_employee(&self, id: u64, fields: &EmployeeFields) -> StoreResult<bool>;

    /// Deletes the employee row only. `false` when no row matched.
    async fn delete_employee(&self, id: u64) -> StoreResult<bool>;

    /// Deletes the employee and their attendance rows atomically.
    async fn delete_employee_cascade(&self, id: u64) -> StoreResult<bool>;

    async fn employee_has_attendance(&self, employee_id: u64) -> StoreResult<bool>;

    async fn attendance_exists(&self, employee_id: u64, date: NaiveDate) -> StoreResult<bool>;

    /// Inserts a row and returns its generated id.
    async fn insert_attendance(&self, entry: &NewAttendance) -> StoreResult<u64>;

    /// All attendance rows, each joined with its employee when present.
    async fn list_attendance(&self, order: AttendanceOrder) -> StoreResult<Vec<Attendance>>;
}
