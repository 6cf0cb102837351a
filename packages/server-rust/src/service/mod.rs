//! Employee request pipeline, problem translation, and the counter stream.
//!
//! 1. **Pipeline** (`employees`): store + mapper calls chained per operation
//! 2. **Faults** (`error`): tagged fault values carried through a pipeline
//! 3. **Translation** (`problem`): fault -> problem payload, at the boundary
//! 4. **Counter** (`counter`): bounded, time-paced push stream

pub mod config;
pub mod counter;
pub mod employees;
pub mod error;
pub mod problem;

pub use config::ServerConfig;
pub use counter::{counter_events, CounterConfig};
pub use employees::{Created, EmployeeService};
pub use error::ServiceError;
pub use problem::{translate, ProblemDetail};
