use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use super::{AttendanceStore, StoreError, StoreResult};
use crate::model::attendance::{Attendance, AttendanceOrder, NewAttendance};
use crate::model::employee::{Employee, EmployeeFields};

/// In-memory tables mirroring the MySQL schema, including the
/// `attendances.employee_id` foreign key.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

#[derive(Default)]
struct Tables {
    employees: Vec<Employee>,
    attendances: Vec<StoredAttendance>,
    last_employee_id: u64,
    last_attendance_id: u64,
}

struct StoredAttendance {
    id: u64,
    entry: NewAttendance,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn employee_count(&self) -> usize {
        self.lock().employees.len()
    }

    pub fn attendance_count(&self) -> usize {
        self.lock().attendances.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Tables> {
        self.tables.lock().expect("memory store poisoned")
    }
}

#[async_trait]
impl AttendanceStore for MemoryStore {
    async fn list_employees(&self) -> StoreResult<Vec<Employee>> {
        Ok(self.lock().employees.clone())
    }

    async fn find_employee(&self, id: u64) -> StoreResult<Option<Employee>> {
        Ok(self.lock().employees.iter().find(|e| e.id == id).cloned())
    }

    async fn insert_employee(&self, fields: &EmployeeFields) -> StoreResult<u64> {
        let mut tables = self.lock();
        tables.last_employee_id += 1;
        let id = tables.last_employee_id;
        tables.employees.push(Employee {
            id,
            name: fields.name.clone(),
            department: fields.department.clone(),
            designation: fields.designation.clone(),
            date_of_joining: fields.date_of_joining,
        });
        Ok(id)
    }

    async fn update_employee(&self, id: u64, fields: &EmployeeFields) -> StoreResult<bool> {
        let mut tables = self.lock();
        let Some(employee) = tables.employees.iter_mut().find(|e| e.id == id) else {
            return Ok(false);
        };
        employee.name = fields.name.clone();
        employee.department = fields.department.clone();
        employee.designation = fields.designation.clone();
        employee.date_of_joining = fields.date_of_joining;
        Ok(true)
    }

    async fn delete_employee(&self, id: u64) -> StoreResult<bool> {
        let mut tables = self.lock();
        if tables.attendances.iter().any(|a| a.entry.employee_id == id) {
            return Err(StoreError::ForeignKey(format!(
                "employee {id} is referenced by attendances"
            )));
        }
        let before = tables.employees.len();
        tables.employees.retain(|e| e.id != id);
        Ok(tables.employees.len() < before)
    }

    async fn delete_employee_cascade(&self, id: u64) -> StoreResult<bool> {
        let mut tables = self.lock();
        if !tables.employees.iter().any(|e| e.id == id) {
            return Ok(false);
        }
        tables.attendances.retain(|a| a.entry.employee_id != id);
        tables.employees.retain(|e| e.id != id);
        Ok(true)
    }

    async fn employee_has_attendance(&self, employee_id: u64) -> StoreResult<bool> {
        Ok(self
            .lock()
            .attendances
            .iter()
            .any(|a| a.entry.employee_id == employee_id))
    }

    async fn attendance_exists(&self, employee_id: u64, date: NaiveDate) -> StoreResult<bool> {
        Ok(self
            .lock()
            .attendances
            .iter()
            .any(|a| a.entry.employee_id == employee_id && a.entry.date == date))
    }

    async fn insert_attendance(&self, entry: &NewAttendance) -> StoreResult<u64> {
        let mut tables = self.lock();
        if !tables.employees.iter().any(|e| e.id == entry.employee_id) {
            return Err(StoreError::ForeignKey(format!(
                "employee {} does not exist",
                entry.employee_id
            )));
        }
        tables.last_attendance_id += 1;
        let id = tables.last_attendance_id;
        tables.attendances.push(StoredAttendance {
            id,
            entry: entry.clone(),
        });
        Ok(id)
    }

    async fn list_attendance(&self, order: AttendanceOrder) -> StoreResult<Vec<Attendance>> {
        let tables = self.lock();
        let mut records: Vec<Attendance> = tables
            .attendances
            .iter()
            .map(|row| Attendance {
                id: row.id,
                employee_id: row.entry.employee_id,
                date: row.entry.date,
                status: row.entry.status.clone(),
                employee: tables
                    .employees
                    .iter()
                    .find(|e| e.id == row.entry.employee_id)
                    .cloned(),
            })
            .collect();

        if order == AttendanceOrder::NewestFirst {
            // Stable sort keeps insertion order within a date.
            records.sort_by(|a, b| b.date.cmp(&a.date));
        }
        Ok(records)
    }
}
