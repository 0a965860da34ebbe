//! Relay configuration module
//!
//! Provides configuration types for the relay server. The message TTL is not
//! part of the configuration; see [`crate::shared::MESSAGE_TTL`].

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Default listening port
pub const DEFAULT_PORT: u16 = 3000;

/// Default broadcast buffer per subscriber
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// Default interval between push-channel keep-alive comments
pub const DEFAULT_KEEP_ALIVE: Duration = Duration::from_secs(15);

/// Relay configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// Port to listen on (all interfaces)
    pub port: u16,
    /// Directory with the viewer page and its assets
    pub static_dir: PathBuf,
    /// Number of events a slow subscriber may fall behind before skipping
    pub event_capacity: usize,
    /// Keep-alive interval on the push channel
    pub keep_alive: Duration,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            static_dir: PathBuf::from("public"),
            event_capacity: DEFAULT_EVENT_CAPACITY,
            keep_alive: DEFAULT_KEEP_ALIVE,
        }
    }
}

impl RelayConfig {
    /// Create a new RelayConfigBuilder
    pub fn builder() -> RelayConfigBuilder {
        RelayConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.event_capacity == 0 {
            return Err(ConfigError::InvalidCapacity(self.event_capacity));
        }
        if self.keep_alive.is_zero() {
            return Err(ConfigError::MissingValue("keep_alive"));
        }
        Ok(())
    }

    /// Socket address the server binds to
    pub fn listen_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Builder for RelayConfig
#[derive(Debug, Default)]
pub struct RelayConfigBuilder {
    port: Option<u16>,
    static_dir: Option<PathBuf>,
    event_capacity: Option<usize>,
    keep_alive: Option<Duration>,
}

impl RelayConfigBuilder {
    /// Set the listening port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the listening port from its textual form (e.g. the `PORT` variable)
    pub fn port_str(mut self, port: &str) -> Result<Self, ConfigError> {
        let parsed = port
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(port.to_string()))?;
        self.port = Some(parsed);
        Ok(self)
    }

    /// Set the static file directory
    pub fn static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    /// Set the broadcast buffer size
    pub fn event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = Some(capacity);
        self
    }

    /// Set the push-channel keep-alive interval
    pub fn keep_alive(mut self, interval: Duration) -> Self {
        self.keep_alive = Some(interval);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<RelayConfig, ConfigError> {
        let defaults = RelayConfig::default();
        let config = RelayConfig {
            port: self.port.unwrap_or(defaults.port),
            static_dir: self.static_dir.unwrap_or(defaults.static_dir),
            event_capacity: self.event_capacity.unwrap_or(defaults.event_capacity),
            keep_alive: self.keep_alive.unwrap_or(defaults.keep_alive),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid port: {0:?}")]
    InvalidPort(String),
    #[error("invalid event capacity: {0}")]
    InvalidCapacity(usize),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}
