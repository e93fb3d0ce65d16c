//! Employee and attendance storage.
//!
//! Reports and handlers read through the [`EmployeeStore`] and
//! [`AttendanceStore`] traits. [`InMemoryStore`] implements both and also
//! owns the attendance lifecycle (clock-in, break, clock-out).

mod memory;

pub use memory::InMemoryStore;

use crate::error::EngineResult;
use crate::models::{AttendanceRecord, Employee, PayWindow};

/// Read access to employees.
pub trait EmployeeStore: Send + Sync {
    /// Looks up one employee, failing with `EmployeeNotFound`.
    fn employee(&self, employee_id: &str) -> EngineResult<Employee>;

    /// All employees, ordered by id.
    fn employees(&self) -> EngineResult<Vec<Employee>>;
}

/// Read access to attendance records.
pub trait AttendanceStore: Send + Sync {
    /// The employee's records whose `date` lies inside `window`.
    fn records_for(
        &self,
        employee_id: &str,
        window: &PayWindow,
    ) -> EngineResult<Vec<AttendanceRecord>>;
}
