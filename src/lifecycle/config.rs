//! Server configuration read from the environment.

use std::net::SocketAddr;
use thiserror::Error;

pub const ADDR_VAR: &str = "RESTAURANT_API_ADDR";
pub const BUFFER_VAR: &str = "RESTAURANT_API_BUFFER";

pub const DEFAULT_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_BUFFER: usize = 32;

/// Errors raised while reading [`ServerConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("RESTAURANT_API_ADDR is not a socket address: {value}")]
    InvalidAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("RESTAURANT_API_BUFFER is not a number: {value}")]
    InvalidBuffer {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("RESTAURANT_API_BUFFER must be greater than 0")]
    ZeroBuffer,
}

/// Where to listen and how deep each actor mailbox is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub buffer: usize,
}

impl ServerConfig {
    /// Reads the process environment, falling back to the defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr = match lookup(ADDR_VAR) {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidAddr { value, source })?,
            None => Self::default_addr(),
        };
        let buffer = match lookup(BUFFER_VAR) {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidBuffer { value, source })?,
            None => DEFAULT_BUFFER,
        };
        if buffer == 0 {
            return Err(ConfigError::ZeroBuffer);
        }
        Ok(Self { addr, buffer })
    }

    fn default_addr() -> SocketAddr {
        SocketAddr::from(([127, 0, 0, 1], 5000))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: Self::default_addr(),
            buffer: DEFAULT_BUFFER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr.to_string(), DEFAULT_ADDR);
    }

    #[test]
    fn reads_both_variables() {
        let config =
            ServerConfig::from_lookup(lookup(&[(ADDR_VAR, "0.0.0.0:8080"), (BUFFER_VAR, "64")]))
                .unwrap();
        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.buffer, 64);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            ServerConfig::from_lookup(lookup(&[(ADDR_VAR, "nowhere")])),
            Err(ConfigError::InvalidAddr { .. })
        ));
        assert!(matches!(
            ServerConfig::from_lookup(lookup(&[(BUFFER_VAR, "lots")])),
            Err(ConfigError::InvalidBuffer { .. })
        ));
        assert!(matches!(
            ServerConfig::from_lookup(lookup(&[(BUFFER_VAR, "0")])),
            Err(ConfigError::ZeroBuffer)
        ));
    }
}
