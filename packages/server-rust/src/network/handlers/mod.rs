//! HTTP handlers for the Roster server.
//!
//! Defines `AppState` (shared state carried through axum extractors) and
//! re-exports the handlers used by the router.

pub mod counter;
pub mod employees;
pub mod error;
pub mod health;

pub use counter::counter_handler;
pub use employees::{
    create_employee, delete_employee, get_employee, list_employees, replace_employee,
};
pub use health::{health_handler, liveness_handler, readiness_handler};

use std::sync::Arc;
use std::time::Instant;

use super::ShutdownController;
use crate::service::{CounterConfig, EmployeeService};

/// Shared state passed to all handlers via `State` extraction.
///
/// Holds `Arc`s and cheap clones only.
#[derive(Clone)]
pub struct AppState {
    /// Employee request pipeline.
    pub employees: EmployeeService,
    /// Shutdown controller: health state, in-flight tracking, stream cancellation.
    pub shutdown: Arc<ShutdownController>,
    /// Counter stream pacing.
    pub counter: Arc<CounterConfig>,
    /// Process start time, for uptime.
    pub start_time: Instant,
}
