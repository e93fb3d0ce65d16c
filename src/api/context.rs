//! Request context for self-service endpoints.

use axum::{async_trait, extract::FromRequestParts, http::StatusCode, http::request::Parts};

use super::response::{ApiError, ApiErrorResponse};

/// Header carrying the signed-in employee's id.
pub const EMPLOYEE_ID_HEADER: &str = "x-employee-id";

/// The employee a portal request is made on behalf of.
///
/// Extracted from the `x-employee-id` header. A missing or blank header
/// rejects the request with 401 `UNAUTHENTICATED`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeContext {
    /// The signed-in employee's id.
    pub employee_id: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for EmployeeContext
where
    S: Send + Sync,
{
    type Rejection = ApiErrorResponse;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(EMPLOYEE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| EmployeeContext {
                employee_id: id.to_string(),
            })
            .ok_or_else(|| ApiErrorResponse {
                status: StatusCode::UNAUTHORIZED,
                error: ApiError::unauthenticated(),
            })
    }
}
