//! HTTP boundary: configuration, routing, request decoding, handlers, and
//! shutdown control.

pub mod config;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod module;
pub mod shutdown;

pub use config::*;
pub use handlers::AppState;
pub use module::NetworkModule;
pub use shutdown::*;
