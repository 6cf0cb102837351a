use serde::{Deserialize, Serialize};

use crate::types::EmployeeDto;

/// Longest accepted employee name, in characters.
pub const NAME_MAX_LEN: usize = 255;

/// A single rejected field and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Name of the rejected field as it appears on the wire.
    pub field: String,
    /// Human-readable reason.
    pub message: String,
}

impl Violation {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result of validating a value against its field constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// The value conforms to every constraint.
    Valid,
    /// The value violates one or more constraints.
    Invalid {
        /// Violations in field declaration order.
        violations: Vec<Violation>,
    },
}

impl ValidationResult {
    /// Builds a result from collected violations: empty means valid.
    #[must_use]
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        if violations.is_empty() {
            Self::Valid
        } else {
            Self::Invalid { violations }
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Field-level constraints checked by the request decoding layer.
pub trait Validate {
    /// Checks every constraint and reports all violations, not just the first.
    fn validate(&self) -> ValidationResult;
}

impl Validate for EmployeeDto {
    fn validate(&self) -> ValidationResult {
        let mut violations = Vec::new();
        if self.name.trim().is_empty() {
            violations.push(Violation::new("name", "must not be blank"));
        }
        if self.name.chars().count() > NAME_MAX_LEN {
            violations.push(Violation::new(
                "name",
                format!("size must be between 1 and {NAME_MAX_LEN}"),
            ));
        }
        ValidationResult::from_violations(violations)
    }
}
