//! Request decoding for employee payloads and path ids.
//!
//! This is the schema layer in front of the pipeline: it turns a raw request
//! into an [`EmployeeDto`] or a validation fault. The pipeline awaits the
//! returned future as its first step.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use roster_core::{EmployeeDto, Validate, ValidationResult, Violation};
use tracing::debug;

use crate::service::ServiceError;

/// Employee id taken from the `{id}` path segment.
///
/// A segment that is not a 64-bit integer is a validation fault with one
/// violation on `id`, so it renders as problem JSON like any other bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployeeId(pub i64);

impl<S> FromRequestParts<S> for EmployeeId
where
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                debug!(reason = %rejection, "employee id rejected");
                ServiceError::from_violations(vec![Violation::new("id", "must be an integer")])
            })?;
        Ok(Self(id))
    }
}

/// Decodes and validates an employee body.
///
/// A body that is not decodable JSON yields a validation fault with the
/// decoder's message and no field violations. A decodable body that breaks
/// field constraints yields one violation per broken rule.
///
/// # Errors
///
/// Returns [`ServiceError::Validation`] in both cases above.
pub async fn decode_employee(request: Request) -> Result<EmployeeDto, ServiceError> {
    let Json(dto) = Json::<EmployeeDto>::from_request(request, &())
        .await
        .map_err(|rejection| {
            debug!(reason = %rejection, "employee body rejected by decoder");
            ServiceError::Validation {
                detail: rejection.body_text(),
                violations: Vec::new(),
            }
        })?;

    match dto.validate() {
        ValidationResult::Valid => Ok(dto),
        ValidationResult::Invalid { violations } => {
            Err(ServiceError::from_violations(violations))
        }
    }
}
