//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::Weekday;
use serde::Deserialize;

use crate::calculation::{DEFAULT_BREAK_ALLOWANCE_MINUTES, PayPolicy};
use crate::models::{AttendanceRecord, Employee};

fn default_break_allowance_minutes() -> i64 {
    DEFAULT_BREAK_ALLOWANCE_MINUTES
}

fn default_currency_decimal_places() -> u32 {
    2
}

fn default_week_start() -> Weekday {
    Weekday::Mon
}

/// Payroll policy and display settings from `policy.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PolicyConfig {
    /// Paid break minutes per session before the overage is deducted.
    #[serde(default = "default_break_allowance_minutes")]
    pub break_allowance_minutes: i64,
    /// Decimal places money is rounded to on reports and payslips.
    #[serde(default = "default_currency_decimal_places")]
    pub currency_decimal_places: u32,
    /// First day of the payroll week.
    #[serde(default = "default_week_start")]
    pub week_start: Weekday,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            break_allowance_minutes: default_break_allowance_minutes(),
            currency_decimal_places: default_currency_decimal_places(),
            week_start: default_week_start(),
        }
    }
}

impl PolicyConfig {
    /// The engine rules carried by this configuration.
    pub fn pay_policy(&self) -> PayPolicy {
        PayPolicy {
            break_allowance_minutes: self.break_allowance_minutes,
        }
    }
}

/// Employees configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeesConfig {
    /// The employees known to the system.
    pub employees: Vec<Employee>,
}

/// An attendance file under `attendance/`.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceConfig {
    /// The records in this file.
    #[serde(default)]
    pub records: Vec<AttendanceRecord>,
}

/// The complete configuration loaded from a configuration directory.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    policy: PolicyConfig,
    employees: Vec<Employee>,
    attendance: Vec<AttendanceRecord>,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(
        policy: PolicyConfig,
        employees: Vec<Employee>,
        attendance: Vec<AttendanceRecord>,
    ) -> Self {
        Self {
            policy,
            employees,
            attendance,
        }
    }

    /// Returns the policy settings.
    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// Returns all configured employees.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns all seeded attendance records.
    pub fn attendance(&self) -> &[AttendanceRecord] {
        &self.attendance
    }
}
