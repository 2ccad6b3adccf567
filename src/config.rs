use std::env;
use std::fmt;
use std::str::FromStr;

use anyhow::{Context, anyhow};
use dotenvy::dotenv;
use strum::{Display, EnumString};

/// What to do when an employee already has an attendance row for today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AttendanceDuplicatePolicy {
    /// Every submission inserts a new row.
    #[default]
    Allow,
    /// A second mark for the same employee and day is refused.
    Reject,
}

/// How deleting an employee treats their attendance rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EmployeeDeletePolicy {
    /// Delete the employee row and let the storage constraints decide.
    #[default]
    Unguarded,
    /// Refuse to delete an employee that still has attendance rows.
    Restrict,
    /// Remove the employee's attendance rows together with the employee.
    Cascade,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Policies {
    pub duplicate_attendance: AttendanceDuplicatePolicy,
    pub employee_delete: EmployeeDeletePolicy,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_addr: String,
    pub log_dir: String,
    pub run_migrations: bool,
    pub policies: Policies,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so callers other than the
    /// process environment (tests) can supply values.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            database_url: lookup("DATABASE_URL").context("DATABASE_URL must be set")?,
            server_addr: lookup("SERVER_ADDR").unwrap_or_else(|| "127.0.0.1:8080".to_string()),
            log_dir: lookup("LOG_DIR").unwrap_or_else(|| "logs".to_string()),
            run_migrations: parse_or(&lookup, "RUN_MIGRATIONS", true)?,
            policies: Policies {
                duplicate_attendance: parse_or(
                    &lookup,
                    "ATTENDANCE_DUPLICATE_POLICY",
                    AttendanceDuplicatePolicy::default(),
                )?,
                employee_delete: parse_or(
                    &lookup,
                    "EMPLOYEE_DELETE_POLICY",
                    EmployeeDeletePolicy::default(),
                )?,
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("invalid value {raw:?} for {key}: {e}")),
        None => Ok(default),
    }
}
