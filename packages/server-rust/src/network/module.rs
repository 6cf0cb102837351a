//! Server module with deferred startup lifecycle.
//!
//! `new()` wires shared state, `start()` binds the listener, and `serve()`
//! accepts connections until the shutdown future resolves.

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, warn};

use super::handlers::{
    counter_handler, create_employee, delete_employee, get_employee, health_handler,
    list_employees, liveness_handler, readiness_handler, replace_employee, AppState,
};
use super::middleware::build_http_layers;
use super::shutdown::ShutdownController;
use crate::service::{EmployeeService, ServerConfig};
use crate::traits::EmployeeStore;

/// Owns the listener and the state shared by every handler.
///
/// Lifecycle:
/// 1. `new()` -- builds the pipeline around the given store
/// 2. `start()` -- binds the TCP listener
/// 3. `serve()` -- serves until shutdown, then drains open streams
pub struct NetworkModule {
    config: ServerConfig,
    listener: Option<TcpListener>,
    employees: EmployeeService,
    shutdown: Arc<ShutdownController>,
    start_time: Instant,
}

impl NetworkModule {
    #[must_use]
    pub fn new(config: ServerConfig, store: Arc<dyn EmployeeStore>) -> Self {
        Self {
            config,
            listener: None,
            employees: EmployeeService::new(store),
            shutdown: Arc::new(ShutdownController::new()),
            start_time: Instant::now(),
        }
    }

    /// Returns a shared reference to the shutdown controller.
    #[must_use]
    pub fn shutdown_controller(&self) -> Arc<ShutdownController> {
        Arc::clone(&self.shutdown)
    }

    /// Assembles the router with every route and the HTTP middleware.
    ///
    /// Routes:
    /// - `GET|POST /api/employees`
    /// - `GET|PUT|DELETE /api/employees/{id}`
    /// - `GET /api/counter` -- server-sent events
    /// - `GET /health`, `/health/live`, `/health/ready`
    pub fn build_router(&self) -> Router {
        let state = AppState {
            employees: self.employees.clone(),
            shutdown: Arc::clone(&self.shutdown),
            counter: Arc::new(self.config.counter.clone()),
            start_time: self.start_time,
        };

        Router::new()
            .route("/api/employees", get(list_employees).post(create_employee))
            .route(
                "/api/employees/{id}",
                get(get_employee)
                    .put(replace_employee)
                    .delete(delete_employee),
            )
            .route("/api/counter", get(counter_handler))
            .route("/health", get(health_handler))
            .route("/health/live", get(liveness_handler))
            .route("/health/ready", get(readiness_handler))
            .layer(build_http_layers(&self.config.network))
            .with_state(state)
    }

    /// Binds the TCP listener and returns the bound port.
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound.
    pub async fn start(&mut self) -> anyhow::Result<u16> {
        let listener = TcpListener::bind(self.config.network.bind_addr()).await?;
        let port = listener.local_addr()?.port();

        info!(host = %self.config.network.host, port, "TCP listener bound");

        self.listener = Some(listener);
        Ok(port)
    }

    /// Serves until `shutdown` resolves, then drains.
    ///
    /// On shutdown the health state moves to `Draining`, every open counter
    /// stream is cancelled, and in-flight work gets up to the configured
    /// drain timeout to finish.
    ///
    /// # Errors
    ///
    /// Returns an error if `start()` was not called or the server hits a
    /// fatal I/O error.
    pub async fn serve(
        mut self,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> anyhow::Result<()> {
        let listener = self
            .listener
            .take()
            .ok_or_else(|| anyhow::anyhow!("start() must be called before serve()"))?;
        let router = self.build_router();
        let controller = Arc::clone(&self.shutdown);
        let signal_controller = Arc::clone(&self.shutdown);

        controller.set_ready();
        info!("serving employee API");

        // Open event streams end when the controller's token is cancelled.
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                shutdown.await;
                info!("shutdown signal received");
                signal_controller.trigger_shutdown();
            })
            .await?;

        if controller.wait_for_drain(self.config.network.drain_timeout).await {
            info!("all in-flight work drained");
        } else {
            warn!("drain timeout expired with in-flight work remaining");
        }
        Ok(())
    }
}
