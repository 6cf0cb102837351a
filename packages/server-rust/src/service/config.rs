use crate::network::NetworkConfig;

use super::counter::CounterConfig;

/// Top-level server configuration assembled by the binary.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// Bind address, port, and CORS settings.
    pub network: NetworkConfig,
    /// Pacing and bounds of the counter event stream.
    pub counter: CounterConfig,
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn server_config_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.network.port, 0);
        assert_eq!(config.counter.events, 10);
        assert_eq!(config.counter.interval, Duration::from_secs(1));
        assert_eq!(config.counter.keep_alive, Duration::from_secs(15));
    }
}
