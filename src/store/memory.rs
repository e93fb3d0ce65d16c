//! In-memory store with the attendance lifecycle.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use chrono::NaiveDateTime;
use tracing::info;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, AttendanceStatus, Employee, PayWindow};

use super::{AttendanceStore, EmployeeStore};

/// Holds employees and attendance records in memory.
///
/// Employees are fixed at construction. Attendance records grow through
/// [`clock_in`](Self::clock_in) and are completed by the break and
/// clock-out operations. Each employee has at most one record per date and
/// at most one open session.
#[derive(Debug)]
pub struct InMemoryStore {
    employees: BTreeMap<String, Employee>,
    records: RwLock<Vec<AttendanceRecord>>,
}

impl InMemoryStore {
    /// Creates a store seeded with employees and existing records.
    pub fn new(employees: Vec<Employee>, records: Vec<AttendanceRecord>) -> Self {
        let employees = employees.into_iter().map(|e| (e.id.clone(), e)).collect();
        Self {
            employees,
            records: RwLock::new(records),
        }
    }

    fn ensure_employee(&self, employee_id: &str) -> EngineResult<()> {
        if self.employees.contains_key(employee_id) {
            Ok(())
        } else {
            Err(EngineError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            })
        }
    }

    /// Opens a session dated `at.date()`.
    pub fn clock_in(&self, employee_id: &str, at: NaiveDateTime) -> EngineResult<AttendanceRecord> {
        self.ensure_employee(employee_id)?;
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);

        let mine = records.iter().filter(|r| r.employee_id == employee_id);
        for record in mine {
            if record.is_open() {
                return Err(conflict(employee_id, "already clocked in"));
            }
            if record.date == at.date() {
                return Err(conflict(
                    employee_id,
                    &format!("attendance already recorded for {}", record.date),
                ));
            }
        }

        let record = AttendanceRecord {
            id: Uuid::new_v4().to_string(),
            employee_id: employee_id.to_string(),
            date: at.date(),
            time_in: Some(at),
            time_out: None,
            break_start: None,
            break_end: None,
            status: AttendanceStatus::Present,
        };
        records.push(record.clone());

        info!(employee_id, record_id = %record.id, %at, "Clocked in");
        Ok(record)
    }

    /// Starts the break of the open session. One break per session.
    pub fn start_break(&self, employee_id: &str, at: NaiveDateTime) -> EngineResult<AttendanceRecord> {
        self.update_open(employee_id, |record| {
            if record.break_start.is_some() {
                return Err("break already taken for this session");
            }
            if record.time_in.is_some_and(|time_in| at < time_in) {
                return Err("break cannot start before clock-in");
            }
            record.break_start = Some(at);
            Ok(())
        })
        .inspect(|record| info!(employee_id, record_id = %record.id, %at, "Break started"))
    }

    /// Ends the break in progress.
    pub fn end_break(&self, employee_id: &str, at: NaiveDateTime) -> EngineResult<AttendanceRecord> {
        self.update_open(employee_id, |record| {
            let Some(break_start) = record.break_start.filter(|_| record.break_end.is_none()) else {
                return Err("no break in progress");
            };
            if at < break_start {
                return Err("break cannot end before it started");
            }
            record.break_end = Some(at);
            Ok(())
        })
        .inspect(|record| info!(employee_id, record_id = %record.id, %at, "Break ended"))
    }

    /// Closes the open session.
    pub fn clock_out(&self, employee_id: &str, at: NaiveDateTime) -> EngineResult<AttendanceRecord> {
        self.update_open(employee_id, |record| {
            if record.break_in_progress() {
                return Err("end the break before clocking out");
            }
            if record.time_in.is_some_and(|time_in| at < time_in) {
                return Err("clock-out cannot precede clock-in");
            }
            if record.break_end.is_some_and(|break_end| at < break_end) {
                return Err("clock-out cannot precede break end");
            }
            record.time_out = Some(at);
            Ok(())
        })
        .inspect(|record| info!(employee_id, record_id = %record.id, %at, "Clocked out"))
    }

    /// Applies `change` to the employee's open session and returns the
    /// updated record.
    fn update_open<F>(&self, employee_id: &str, change: F) -> EngineResult<AttendanceRecord>
    where
        F: FnOnce(&mut AttendanceRecord) -> Result<(), &'static str>,
    {
        self.ensure_employee(employee_id)?;
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);

        let record = records
            .iter_mut()
            .find(|r| r.employee_id == employee_id && r.is_open())
            .ok_or_else(|| conflict(employee_id, "not clocked in"))?;

        change(record).map_err(|message| conflict(employee_id, message))?;
        Ok(record.clone())
    }
}

fn conflict(employee_id: &str, message: &str) -> EngineError {
    EngineError::AttendanceConflict {
        employee_id: employee_id.to_string(),
        message: message.to_string(),
    }
}

impl EmployeeStore for InMemoryStore {
    fn employee(&self, employee_id: &str) -> EngineResult<Employee> {
        self.employees
            .get(employee_id)
            .cloned()
            .ok_or_else(|| EngineError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            })
    }

    fn employees(&self) -> EngineResult<Vec<Employee>> {
        Ok(self.employees.values().cloned().collect())
    }
}

impl AttendanceStore for InMemoryStore {
    fn records_for(
        &self,
        employee_id: &str,
        window: &PayWindow,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        self.ensure_employee(employee_id)?;
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        Ok(records
            .iter()
            .filter(|r| r.employee_id == employee_id && window.contains_date(r.date))
            .cloned()
            .collect())
    }
}
