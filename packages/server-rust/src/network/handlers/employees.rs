//! Employee resource handlers.
//!
//! Thin adapters: extract, run the pipeline, map the outcome to a status.
//! Structural absence maps to an empty 404; faults go through
//! [`ServiceError`]'s `IntoResponse`.

use axum::extract::{Request, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use futures_util::StreamExt;
use roster_core::EmployeeDto;

use super::AppState;
use crate::network::extract::{decode_employee, EmployeeId};
use crate::service::ServiceError;

/// Path prefix of the employee collection.
pub const EMPLOYEES_PATH: &str = "/api/employees";

/// `GET /api/employees`
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployeeDto>>, ServiceError> {
    let employees: Vec<EmployeeDto> = state.employees.list().await?.collect().await;
    Ok(Json(employees))
}

/// `GET /api/employees/{id}`
pub async fn get_employee(
    State(state): State<AppState>,
    EmployeeId(id): EmployeeId,
) -> Result<Response, ServiceError> {
    Ok(match state.employees.get(id).await? {
        Some(employee) => Json(employee).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    })
}

/// `POST /api/employees` -- 201 with a `Location` header.
pub async fn create_employee(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, ServiceError> {
    let created = state.employees.create(decode_employee(request)).await?;
    let location = format!("{EMPLOYEES_PATH}/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(created.employee),
    )
        .into_response())
}

/// `PUT /api/employees/{id}`
pub async fn replace_employee(
    State(state): State<AppState>,
    EmployeeId(id): EmployeeId,
    request: Request,
) -> Result<Response, ServiceError> {
    Ok(
        match state.employees.replace(id, decode_employee(request)).await? {
            Some(employee) => Json(employee).into_response(),
            None => StatusCode::NOT_FOUND.into_response(),
        },
    )
}

/// `DELETE /api/employees/{id}`
pub async fn delete_employee(
    State(state): State<AppState>,
    EmployeeId(id): EmployeeId,
) -> Result<StatusCode, ServiceError> {
    Ok(if state.employees.delete(id).await? {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    })
}
