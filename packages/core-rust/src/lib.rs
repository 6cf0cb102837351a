//! Roster Core — employee records, DTO mapping, field validation, and counter events.

pub mod events;
pub mod mapper;
pub mod schema;
pub mod types;

pub use events::{CounterEvent, COUNTER_EVENT_NAME};
pub use schema::{Validate, ValidationResult, Violation, NAME_MAX_LEN};
pub use types::{Employee, EmployeeDraft, EmployeeDto};
