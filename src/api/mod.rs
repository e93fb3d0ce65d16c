//! HTTP API module for the payroll engine.
//!
//! Exposes ad-hoc calculation, the weekly payroll report, employee and
//! portal payslips, and the attendance punch endpoints.

mod context;
mod handlers;
mod request;
mod response;
mod state;

pub use context::{EMPLOYEE_ID_HEADER, EmployeeContext};
pub use handlers::create_router;
pub use request::{
    CalculationRequest, PayslipQuery, PunchRequest, RecordRequest, WeeklyReportQuery,
    WindowRequest,
};
pub use response::{ApiError, ApiErrorResponse, CalculationResponse};
pub use state::AppState;
