//! Translation of pipeline faults into structured problem payloads.
//!
//! Only argument and validation faults are translated. Everything else is
//! left to the boundary, which reports a bare 500.

use roster_core::Violation;
use serde::{Deserialize, Serialize};

use super::error::ServiceError;

/// Content type for problem payloads.
pub const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

/// Problem type for inconsistent caller data.
pub const BAD_REQUEST_TYPE: &str = "/api/employees/bad-request";
/// Problem type for field-level validation failures.
pub const VALIDATION_ERROR_TYPE: &str = "/api/employees/validation-error";

/// Machine-readable fault body returned for recoverable faults.
///
/// Built once per failed request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDetail {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub violations: Option<Vec<Violation>>,
}

/// Converts a fault into its problem payload.
///
/// Returns `None` for faults that must not be reported as client errors.
#[must_use]
pub fn translate(err: &ServiceError) -> Option<ProblemDetail> {
    match err {
        ServiceError::InvalidArgument(message) => Some(ProblemDetail {
            problem_type: BAD_REQUEST_TYPE.to_string(),
            title: "Invalid Employee Data".to_string(),
            status: 400,
            detail: message.clone(),
            violations: None,
        }),
        ServiceError::Validation { detail, violations } => Some(ProblemDetail {
            problem_type: VALIDATION_ERROR_TYPE.to_string(),
            title: "Validation Error".to_string(),
            status: 400,
            detail: detail.clone(),
            violations: Some(violations.clone()),
        }),
        ServiceError::Internal(_) => None,
    }
}
