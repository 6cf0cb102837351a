//! Boundary conversion of pipeline faults into HTTP responses.

use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::warn;

use crate::service::problem::{translate, PROBLEM_CONTENT_TYPE};
use crate::service::ServiceError;

impl IntoResponse for ServiceError {
    /// Translated faults become their problem payload; anything the
    /// translator declines becomes an empty 500.
    fn into_response(self) -> Response {
        match translate(&self) {
            Some(problem) => {
                let status =
                    StatusCode::from_u16(problem.status).unwrap_or(StatusCode::BAD_REQUEST);
                (status, [(CONTENT_TYPE, PROBLEM_CONTENT_TYPE)], Json(problem)).into_response()
            }
            None => {
                warn!(kind = self.kind(), error = %self, "untranslated fault, responding 500");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
