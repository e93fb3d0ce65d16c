//! Configuration loading for the payroll engine.
//!
//! Loads the pay policy, the employee roster and any seeded attendance
//! from a directory of YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded {} employees", config.employees().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AttendanceConfig, EmployeesConfig, PayrollConfig, PolicyConfig};
