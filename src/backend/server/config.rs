/**
 * Server Configuration
 *
 * This module loads the relay configuration from the environment. `PORT`
 * selects the listening port (default 3000); the server binary loads a
 * `.env` file beforehand if one is present. Everything else keeps its default; the message TTL is
 * compiled in.
 *
 * # Error Handling
 *
 * Unlike optional services, a bad port is a startup error: the server
 * refuses to start rather than listening somewhere unexpected.
 */

use crate::shared::config::{ConfigError, RelayConfig};

/// Environment variable holding the listening port
pub const PORT_VAR: &str = "PORT";

/// Load configuration from the environment
///
/// # Errors
///
/// `ConfigError::InvalidPort` if `PORT` is set but is not a valid port number
pub fn load_config() -> Result<RelayConfig, ConfigError> {
    config_from_port(std::env::var(PORT_VAR).ok().as_deref())
}

/// Build the configuration from an optional `PORT` value
pub fn config_from_port(port: Option<&str>) -> Result<RelayConfig, ConfigError> {
    let builder = RelayConfig::builder();
    let builder = match port {
        Some(port) if !port.trim().is_empty() => builder.port_str(port)?,
        _ => {
            tracing::info!("{} not set, using default port", PORT_VAR);
            builder
        }
    };
    builder.build()
}
