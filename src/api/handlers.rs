//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Local, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{MAX_HOURLY_RATE, compute_breakdown};
use crate::error::EngineResult;
use crate::models::{AttendanceRecord, PayWindow};
use crate::reports::{ENGINE_VERSION, employee_payslip, portal_payslip, weekly_payroll_report};
use crate::store::InMemoryStore;

use super::context::EmployeeContext;
use super::request::{CalculationRequest, PayslipQuery, PunchRequest, WeeklyReportQuery};
use super::response::{ApiError, ApiErrorResponse, CalculationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/payroll/weekly", get(weekly_report_handler))
        .route("/employees/:employee_id/payslip", get(employee_payslip_handler))
        .route("/portal/payslip", get(portal_payslip_handler))
        .route("/employees/:employee_id/attendance/clock-in", post(clock_in_handler))
        .route("/employees/:employee_id/attendance/break-start", post(break_start_handler))
        .route("/employees/:employee_id/attendance/break-end", post(break_end_handler))
        .route("/employees/:employee_id/attendance/clock-out", post(clock_out_handler))
        .with_state(state)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Writes a JSON body on success, or logs and renders the error.
fn respond<T: Serialize>(
    correlation_id: Uuid,
    success: StatusCode,
    result: Result<T, ApiErrorResponse>,
) -> Response {
    match result {
        Ok(body) => (success, Json(body)).into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                status = err.status.as_u16(),
                code = %err.error.code,
                error = %err.error.message,
                "Request failed"
            );
            err.into_response()
        }
    }
}

fn json_rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // serde's message names the offending field
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}

fn query_rejection_error(rejection: QueryRejection) -> ApiErrorResponse {
    ApiErrorResponse::bad_request(ApiError::invalid_query(rejection.body_text()))
}

/// Handler for POST /calculate endpoint.
///
/// Computes a breakdown for the posted records without touching the store.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let result = payload
        .map_err(|rejection| json_rejection_error(correlation_id, rejection))
        .and_then(|Json(request)| perform_calculation(&state, request));

    if let Ok(response) = &result {
        info!(
            correlation_id = %correlation_id,
            records = response.summary.record_count,
            net_pay = %response.summary.net_pay,
            "Calculation completed successfully"
        );
    }
    respond(correlation_id, StatusCode::OK, result)
}

fn perform_calculation(
    state: &AppState,
    request: CalculationRequest,
) -> Result<CalculationResponse, ApiErrorResponse> {
    let start_time = Instant::now();

    if request.hourly_rate < Decimal::ZERO || request.hourly_rate > MAX_HOURLY_RATE {
        return Err(ApiErrorResponse::bad_request(ApiError::invalid_rate(
            request.hourly_rate,
        )));
    }
    let window: PayWindow = request.window.try_into()?;
    let records: Vec<AttendanceRecord> = request.records.into_iter().map(Into::into).collect();

    let breakdown = compute_breakdown(
        &state.config().pay_policy(),
        request.hourly_rate,
        &records,
        &window,
    );

    tracing::debug!(
        duration_us = start_time.elapsed().as_micros() as u64,
        "Breakdown computed"
    );

    Ok(CalculationResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        window,
        lines: breakdown.lines,
        summary: breakdown
            .summary
            .rounded(state.policy().currency_decimal_places),
    })
}

/// Handler for GET /payroll/weekly.
async fn weekly_report_handler(
    State(state): State<AppState>,
    query: Result<Query<WeeklyReportQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let result = query.map_err(query_rejection_error).and_then(|Query(query)| {
        let week_of = query.week_of.unwrap_or_else(today);
        info!(correlation_id = %correlation_id, %week_of, "Building weekly payroll report");
        Ok(weekly_payroll_report(state.store(), state.policy(), week_of)?)
    });
    respond(correlation_id, StatusCode::OK, result)
}

/// Handler for GET /employees/:employee_id/payslip.
async fn employee_payslip_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    query: Result<Query<PayslipQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %employee_id, "Building payslip");

    let result = query.map_err(query_rejection_error).and_then(|Query(query)| {
        let window = query.window()?;
        Ok(employee_payslip(state.store(), state.policy(), &employee_id, window)?)
    });
    respond(correlation_id, StatusCode::OK, result)
}

/// Handler for GET /portal/payslip.
///
/// Serves the signed-in employee's own payslip.
async fn portal_payslip_handler(
    State(state): State<AppState>,
    context: EmployeeContext,
    query: Result<Query<PayslipQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %context.employee_id,
        "Building portal payslip"
    );

    let result = query.map_err(query_rejection_error).and_then(|Query(query)| {
        let window = query.window()?;
        let as_of = query.as_of.unwrap_or_else(today);
        Ok(portal_payslip(
            state.store(),
            state.policy(),
            &context.employee_id,
            window,
            as_of,
        )?)
    });
    respond(correlation_id, StatusCode::OK, result)
}

/// The four attendance punches.
#[derive(Debug, Clone, Copy)]
enum Punch {
    ClockIn,
    BreakStart,
    BreakEnd,
    ClockOut,
}

impl Punch {
    fn apply(
        self,
        store: &InMemoryStore,
        employee_id: &str,
        at: NaiveDateTime,
    ) -> EngineResult<AttendanceRecord> {
        match self {
            Punch::ClockIn => store.clock_in(employee_id, at),
            Punch::BreakStart => store.start_break(employee_id, at),
            Punch::BreakEnd => store.end_break(employee_id, at),
            Punch::ClockOut => store.clock_out(employee_id, at),
        }
    }

    fn success_status(self) -> StatusCode {
        match self {
            Punch::ClockIn => StatusCode::CREATED,
            _ => StatusCode::OK,
        }
    }
}

fn handle_punch(
    state: &AppState,
    punch: Punch,
    employee_id: &str,
    payload: Result<Json<PunchRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        punch = ?punch,
        "Processing attendance punch"
    );

    let result = payload
        .map_err(|rejection| json_rejection_error(correlation_id, rejection))
        .and_then(|Json(request)| Ok(punch.apply(state.store(), employee_id, request.at)?));
    respond(correlation_id, punch.success_status(), result)
}

/// Handler for POST /employees/:employee_id/attendance/clock-in.
async fn clock_in_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    payload: Result<Json<PunchRequest>, JsonRejection>,
) -> Response {
    handle_punch(&state, Punch::ClockIn, &employee_id, payload)
}

/// Handler for POST /employees/:employee_id/attendance/break-start.
async fn break_start_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    payload: Result<Json<PunchRequest>, JsonRejection>,
) -> Response {
    handle_punch(&state, Punch::BreakStart, &employee_id, payload)
}

/// Handler for POST /employees/:employee_id/attendance/break-end.
async fn break_end_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    payload: Result<Json<PunchRequest>, JsonRejection>,
) -> Response {
    handle_punch(&state, Punch::BreakEnd, &employee_id, payload)
}

/// Handler for POST /employees/:employee_id/attendance/clock-out.
async fn clock_out_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    payload: Result<Json<PunchRequest>, JsonRejection>,
) -> Response {
    handle_punch(&state, Punch::ClockOut, &employee_id, payload)
}
