//! Roster Server — employee API and counter event stream over axum.

pub mod network;
pub mod observability;
pub mod service;
pub mod storage;
pub mod traits;

pub use network::NetworkModule;
pub use service::{EmployeeService, ServerConfig, ServiceError};
pub use storage::InMemoryEmployeeStore;
pub use traits::EmployeeStore;
