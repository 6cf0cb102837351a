//! Roster server binary.
//!
//! Serves the employee API and the counter event stream on the configured
//! address until Ctrl-C / SIGTERM.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use roster_server::network::NetworkConfig;
use roster_server::observability::{init_tracing, LogFormat};
use roster_server::service::CounterConfig;
use roster_server::{EmployeeStore, InMemoryEmployeeStore, NetworkModule, ServerConfig};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "roster-server", about = "Employee API with a counter event stream")]
struct Args {
    /// Address to bind.
    #[arg(long, env = "ROSTER_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on (0 = OS-assigned).
    #[arg(long, env = "ROSTER_PORT", default_value_t = 8080)]
    port: u16,

    /// Allowed CORS origin; repeat for several. Defaults to any.
    #[arg(long = "cors-origin", env = "ROSTER_CORS_ORIGINS", value_delimiter = ',')]
    cors_origins: Vec<String>,

    /// Events per counter subscription.
    #[arg(long, env = "ROSTER_COUNTER_EVENTS", default_value_t = 10)]
    counter_events: u64,

    /// Milliseconds between counter events.
    #[arg(long, env = "ROSTER_COUNTER_INTERVAL_MS", default_value_t = 1000,
          value_parser = clap::value_parser!(u64).range(1..))]
    counter_interval_ms: u64,

    /// Seconds to wait for open requests and streams on shutdown.
    #[arg(long, env = "ROSTER_DRAIN_TIMEOUT_SECS", default_value_t = 30)]
    drain_timeout_secs: u64,

    /// Log line format.
    #[arg(long, env = "ROSTER_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

impl Args {
    fn into_config(self) -> ServerConfig {
        let defaults = ServerConfig::default();
        let cors_origins = if self.cors_origins.is_empty() {
            defaults.network.cors_origins
        } else {
            self.cors_origins
        };
        ServerConfig {
            network: NetworkConfig {
                host: self.host,
                port: self.port,
                cors_origins,
                drain_timeout: Duration::from_secs(self.drain_timeout_secs),
            },
            counter: CounterConfig {
                events: self.counter_events,
                interval: Duration::from_millis(self.counter_interval_ms),
                ..defaults.counter
            },
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_format);

    let config = args.into_config();
    let store = Arc::new(InMemoryEmployeeStore::seeded());
    info!(employees = store.len(), "employee store seeded");

    let mut module = NetworkModule::new(config, store);
    let port = module.start().await?;
    info!(port, "roster server listening");

    module.serve(shutdown_signal()).await
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
