//! Employee model.
//!
//! Only the pay-relevant projection of an employee lives here: identity and
//! the hourly rate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::MAX_HOURLY_RATE;
use crate::error::{EngineError, EngineResult};

/// Represents an employee whose attendance is paid by the hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name used on reports and payslips.
    pub name: String,
    /// Job title, if recorded.
    #[serde(default)]
    pub position: Option<String>,
    /// The hourly pay rate, between zero and [`MAX_HOURLY_RATE`].
    pub hourly_rate: Decimal,
}

impl Employee {
    /// Checks that the employee can be paid.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     name: "Ana Reyes".to_string(),
    ///     position: None,
    ///     hourly_rate: Decimal::new(2000, 2),
    /// };
    /// assert!(employee.validate().is_ok());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        if self.id.trim().is_empty() {
            return Err(EngineError::InvalidEmployee {
                field: "id".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.hourly_rate < Decimal::ZERO {
            return Err(EngineError::InvalidEmployee {
                field: "hourly_rate".to_string(),
                message: format!("must not be negative, got {}", self.hourly_rate),
            });
        }
        if self.hourly_rate > MAX_HOURLY_RATE {
            return Err(EngineError::InvalidEmployee {
                field: "hourly_rate".to_string(),
                message: format!("must be at most {}, got {}", MAX_HOURLY_RATE, self.hourly_rate),
            });
        }
        Ok(())
    }
}
