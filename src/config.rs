use std::env;
use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::num::ParseIntError;

use thiserror::Error;

/// Address the server binds when `HOST` is not set.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Port declared by the container image metadata.
pub const DEFAULT_PORT: u16 = 5001;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid HOST '{value}': {source}")]
    InvalidHost {
        value: String,
        source: AddrParseError,
    },
    #[error("invalid PORT '{value}': {source}")]
    InvalidPort {
        value: String,
        source: ParseIntError,
    },
}

/// Listener configuration for the HTTP server.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Load config from the `HOST` and `PORT` environment variables.
    ///
    /// Unset variables fall back to the defaults; variables that are set but
    /// malformed are errors rather than silent fallbacks.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());
        Self::from_values(&host, &port)
    }

    fn from_values(host: &str, port: &str) -> Result<Self, ConfigError> {
        let host = host.parse().map_err(|source| ConfigError::InvalidHost {
            value: host.to_string(),
            source,
        })?;
        let port = port.parse().map_err(|source| ConfigError::InvalidPort {
            value: port.to_string(),
            source,
        })?;
        Ok(Self { host, port })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_image_metadata() {
        let config = ServerConfig::from_values(DEFAULT_HOST, &DEFAULT_PORT.to_string()).unwrap();

        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:5001");
    }

    #[test]
    fn malformed_port_is_rejected() {
        let err = ServerConfig::from_values("0.0.0.0", "not-a-port").unwrap_err();

        assert!(matches!(err, ConfigError::InvalidPort { .. }));
    }

    #[test]
    fn empty_port_is_rejected() {
        let err = ServerConfig::from_values("0.0.0.0", "").unwrap_err();

        assert!(matches!(err, ConfigError::InvalidPort { .. }));
    }

    #[test]
    fn hostname_is_not_a_valid_bind_address() {
        let err = ServerConfig::from_values("example.com", "5001").unwrap_err();

        assert!(matches!(err, ConfigError::InvalidHost { .. }));
    }

    #[test]
    fn port_zero_is_allowed() {
        let config = ServerConfig::from_values("127.0.0.1", "0").unwrap();

        assert_eq!(config.port, 0);
    }
}
