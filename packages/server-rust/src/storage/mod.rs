//! Employee storage backends.
//!
//! The [`EmployeeStore`](crate::traits::EmployeeStore) trait is the seam;
//! [`InMemoryEmployeeStore`] is the default process-wide backend.

pub mod memory;

pub use memory::*;
