use roster_core::Violation;

/// Faults that can end an employee pipeline.
///
/// Structural absence is not represented here: lookups that miss resolve to
/// `Ok(None)` or `Ok(false)`.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Caller-supplied data is internally inconsistent.
    #[error("{0}")]
    InvalidArgument(String),
    /// Input failed field-level constraints while being decoded.
    #[error("{detail}")]
    Validation {
        detail: String,
        violations: Vec<Violation>,
    },
    /// Anything else; not recoverable at the request boundary.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ServiceError {
    /// Builds a validation fault from the violations a decoder reported.
    #[must_use]
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        let detail = format!(
            "Invalid request content: {} field error(s)",
            violations.len()
        );
        Self::Validation { detail, violations }
    }

    /// Short label used in logs and span fields.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "invalid_argument",
            Self::Validation { .. } => "validation",
            Self::Internal(_) => "internal",
        }
    }
}
