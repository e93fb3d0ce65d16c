//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::calculation::PayPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, Employee};

use super::types::{AttendanceConfig, EmployeesConfig, PayrollConfig, PolicyConfig};

/// Upper bound on `currency_decimal_places`; `Decimal` carries at most 28.
const MAX_CURRENCY_DECIMAL_PLACES: u32 = 10;

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── policy.yaml          # Break allowance, rounding, week start
/// ├── employees.yaml       # Employees and hourly rates
/// └── attendance/          # Optional seeded attendance records
///     └── 2026-01-12.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Employees: {}", loader.employees().len());
/// println!("Break allowance: {} min", loader.policy().break_allowance_minutes);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `policy.yaml` or `employees.yaml` is missing,
    /// any file contains invalid YAML, or the loaded data fails validation
    /// (negative allowance, duplicate ids, out-of-range rates, attendance for
    /// unknown employees, two records for one employee on a date, more than
    /// one open session per employee).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy = Self::load_yaml::<PolicyConfig>(&path.join("policy.yaml"))?;
        Self::validate_policy(&policy)?;

        let employees = Self::load_yaml::<EmployeesConfig>(&path.join("employees.yaml"))?.employees;
        Self::validate_employees(&employees)?;

        let attendance = Self::load_attendance(&path.join("attendance"))?;
        Self::validate_attendance(&attendance, &employees)?;

        tracing::debug!(
            path = %path.display(),
            employees = employees.len(),
            records = attendance.len(),
            "Loaded payroll configuration"
        );

        Ok(Self {
            config: PayrollConfig::new(policy, employees, attendance),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every `.yaml` file in the attendance directory, in file name
    /// order. A missing directory means no seeded attendance.
    fn load_attendance(attendance_dir: &Path) -> EngineResult<Vec<AttendanceRecord>> {
        if !attendance_dir.exists() {
            return Ok(Vec::new());
        }

        let dir_str = attendance_dir.display().to_string();
        let entries = fs::read_dir(attendance_dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut files: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                files.push(path);
            }
        }
        files.sort();

        let mut records = Vec::new();
        for file in files {
            records.extend(Self::load_yaml::<AttendanceConfig>(&file)?.records);
        }
        Ok(records)
    }

    fn validate_policy(policy: &PolicyConfig) -> EngineResult<()> {
        if policy.break_allowance_minutes < 0 {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "break_allowance_minutes must not be negative, got {}",
                    policy.break_allowance_minutes
                ),
            });
        }
        if policy.currency_decimal_places > MAX_CURRENCY_DECIMAL_PLACES {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "currency_decimal_places must be at most {}, got {}",
                    MAX_CURRENCY_DECIMAL_PLACES, policy.currency_decimal_places
                ),
            });
        }
        Ok(())
    }

    fn validate_employees(employees: &[Employee]) -> EngineResult<()> {
        let mut seen = HashSet::new();
        for employee in employees {
            employee.validate()?;
            if !seen.insert(employee.id.as_str()) {
                return Err(EngineError::InvalidConfig {
                    message: format!("duplicate employee id '{}'", employee.id),
                });
            }
        }
        Ok(())
    }

    fn validate_attendance(records: &[AttendanceRecord], employees: &[Employee]) -> EngineResult<()> {
        let known: HashSet<&str> = employees.iter().map(|e| e.id.as_str()).collect();
        let mut seen = HashSet::new();
        let mut dates = HashSet::new();
        let mut open = HashSet::new();
        for record in records {
            if !known.contains(record.employee_id.as_str()) {
                return Err(EngineError::InvalidConfig {
                    message: format!(
                        "attendance record '{}' references unknown employee '{}'",
                        record.id, record.employee_id
                    ),
                });
            }
            if !seen.insert(record.id.as_str()) {
                return Err(EngineError::InvalidConfig {
                    message: format!("duplicate attendance record id '{}'", record.id),
                });
            }
            if !dates.insert((record.employee_id.as_str(), record.date)) {
                return Err(EngineError::InvalidConfig {
                    message: format!(
                        "employee '{}' has more than one attendance record on {}",
                        record.employee_id, record.date
                    ),
                });
            }
            if record.is_open() && !open.insert(record.employee_id.as_str()) {
                return Err(EngineError::InvalidConfig {
                    message: format!(
                        "employee '{}' has more than one open session",
                        record.employee_id
                    ),
                });
            }
        }
        Ok(())
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the policy settings.
    pub fn policy(&self) -> &PolicyConfig {
        self.config.policy()
    }

    /// Returns the engine rules derived from the policy settings.
    pub fn pay_policy(&self) -> PayPolicy {
        self.config.policy().pay_policy()
    }

    /// Returns all configured employees.
    pub fn employees(&self) -> &[Employee] {
        self.config.employees()
    }

    /// Returns all seeded attendance records.
    pub fn attendance(&self) -> &[AttendanceRecord] {
        self.config.attendance()
    }

    /// Gets an employee by id.
    pub fn get_employee(&self, employee_id: &str) -> EngineResult<&Employee> {
        self.config
            .employees()
            .iter()
            .find(|e| e.id == employee_id)
            .ok_or_else(|| EngineError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            })
    }
}
