//! Server configuration.
//!
//! Settings come from environment variables, falling back to defaults for
//! anything unset or blank.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use crate::decode::{PayloadFormat, UnknownPayloadFormat};

/// Bind address variable.
pub const HOST_VAR: &str = "HTTP_HOST";
/// Listen port variable.
pub const PORT_VAR: &str = "HTTP_PORT";
/// Payload shape variable (`records` or `pairs`).
pub const PAYLOAD_FORMAT_VAR: &str = "PAYLOAD_FORMAT";
/// Per-request deadline variable, in milliseconds.
pub const REQUEST_TIMEOUT_VAR: &str = "REQUEST_TIMEOUT_MS";

/// Errors from loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Host is not an IP address
    #[error("invalid HTTP_HOST '{0}': expected an IP address")]
    InvalidHost(String),

    /// Port is not a number in range
    #[error("invalid HTTP_PORT '{0}': expected a port number")]
    InvalidPort(String),

    /// Timeout is not a positive number of milliseconds
    #[error("invalid REQUEST_TIMEOUT_MS '{0}': expected a positive number of milliseconds")]
    InvalidTimeout(String),

    /// Unknown payload shape
    #[error("invalid PAYLOAD_FORMAT: {0}")]
    InvalidFormat(#[from] UnknownPayloadFormat),
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: IpAddr,

    /// Port to listen on.
    pub port: u16,

    /// Payload shape accepted by `/calculate`.
    pub payload_format: PayloadFormat,

    /// Deadline for decoding and resolving one request.
    pub request_timeout: Duration,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration using `lookup` to read variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = match get(HOST_VAR) {
            Some(v) => v
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(v.clone()))?,
            None => defaults.host,
        };

        let port = match get(PORT_VAR) {
            Some(v) => v
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(v.clone()))?,
            None => defaults.port,
        };

        let payload_format = match get(PAYLOAD_FORMAT_VAR) {
            Some(v) => v.parse::<PayloadFormat>()?,
            None => defaults.payload_format,
        };

        let request_timeout = match get(REQUEST_TIMEOUT_VAR) {
            Some(v) => match v.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => Duration::from_millis(ms),
                _ => return Err(ConfigError::InvalidTimeout(v.clone())),
            },
            None => defaults.request_timeout,
        };

        Ok(Self {
            host,
            port,
            payload_format,
            request_timeout,
        })
    }

    /// Returns the socket address to bind.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            payload_format: PayloadFormat::Records,
            request_timeout: Duration::from_secs(5),
        }
    }
}
