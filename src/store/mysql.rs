use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, MySqlPool};
use tracing::debug;

use super::{AttendanceStore, StoreResult};
use crate::model::attendance::{Attendance, AttendanceOrder, NewAttendance};
use crate::model::employee::{Employee, EmployeeFields};

const ATTENDANCE_WITH_EMPLOYEE: &str = r#"
    SELECT
        a.id,
        a.employee_id,
        a.date,
        a.status,
        e.id AS emp_id,
        e.name AS emp_name,
        e.department AS emp_department,
        e.designation AS emp_designation,
        e.date_of_joining AS emp_date_of_joining
    FROM attendances a
    LEFT JOIN employees e ON e.id = a.employee_id
"#;

/// Flat LEFT JOIN row; the employee columns are NULL for orphaned rows.
#[derive(FromRow)]
struct AttendanceRow {
    id: u64,
    employee_id: u64,
    date: NaiveDate,
    status: String,
    emp_id: Option<u64>,
    emp_name: Option<String>,
    emp_department: Option<String>,
    emp_designation: Option<String>,
    emp_date_of_joining: Option<NaiveDate>,
}

impl From<AttendanceRow> for Attendance {
    fn from(row: AttendanceRow) -> Self {
        let employee = match (
            row.emp_id,
            row.emp_name,
            row.emp_department,
            row.emp_designation,
            row.emp_date_of_joining,
        ) {
            (Some(id), Some(name), Some(department), Some(designation), Some(date_of_joining)) => {
                Some(Employee {
                    id,
                    name,
                    department,
                    designation,
                    date_of_joining,
                })
            }
            _ => None,
        };

        Attendance {
            id: row.id,
            employee_id: row.employee_id,
            date: row.date,
            status: row.status,
            employee,
        }
    }
}

#[derive(Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttendanceStore for MySqlStore {
    async fn list_employees(&self) -> StoreResult<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, department, designation, date_of_joining
            FROM employees
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    async fn find_employee(&self, id: u64) -> StoreResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, department, designation, date_of_joining
            FROM employees
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    async fn insert_employee(&self, fields: &EmployeeFields) -> StoreResult<u64> {
        let result = sqlx::query(
            r#"
            INSERT INTO employees (name, department, designation, date_of_joining)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.department)
        .bind(&fields.designation)
        .bind(fields.date_of_joining)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id())
    }

    async fn update_employee(&self, id: u64, fields: &EmployeeFields) -> StoreResult<bool> {
        // sqlx sets CLIENT_FOUND_ROWS, so an unchanged row still counts.
        let result = sqlx::query(
            r#"
            UPDATE employees
            SET name = ?, department = ?, designation = ?, date_of_joining = ?
            WHERE id = ?
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.department)
        .bind(&fields.designation)
        .bind(fields.date_of_joining)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_employee(&self, id: u64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_employee_cascade(&self, id: u64) -> StoreResult<bool> {
        let mut tx = self.pool.begin().await?;

        let removed = sqlx::query("DELETE FROM attendances WHERE employee_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        debug!(employee_id = id, removed, "Removed attendance rows before employee delete");

        let deleted = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if deleted == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;
        Ok(true)
    }

    async fn employee_has_attendance(&self, employee_id: u64) -> StoreResult<bool> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM attendances WHERE employee_id = ?",
        )
        .bind(employee_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    async fn attendance_exists(&self, employee_id: u64, date: NaiveDate) -> StoreResult<bool> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM attendances WHERE employee_id = ? AND date = ?",
        )
        .bind(employee_id)
        .bind(date)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    async fn insert_attendance(&self, entry: &NewAttendance) -> StoreResult<u64> {
        let result = sqlx::query(
            r#"
            INSERT INTO attendances (employee_id, date, status)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(entry.employee_id)
        .bind(entry.date)
        .bind(&entry.status)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id())
    }

    async fn list_attendance(&self, order: AttendanceOrder) -> StoreResult<Vec<Attendance>> {
        let order_by = match order {
            AttendanceOrder::Stored => "ORDER BY a.id",
            AttendanceOrder::NewestFirst => "ORDER BY a.date DESC, a.id",
        };
        let sql = format!("{ATTENDANCE_WITH_EMPLOYEE} {order_by}");
        debug!(sql = %sql, "Fetching attendance");

        let rows = sqlx::query_as::<_, AttendanceRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Attendance::from).collect())
    }
}
