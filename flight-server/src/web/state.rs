//! Application state for the web layer.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;
use crate::decode::PayloadDecoder;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Decoder for request bodies
    pub decoder: Arc<dyn PayloadDecoder>,

    /// Deadline for decoding and resolving one request
    pub request_timeout: Duration,
}

impl AppState {
    /// Create a new app state.
    pub fn new(decoder: Arc<dyn PayloadDecoder>, request_timeout: Duration) -> Self {
        Self {
            decoder,
            request_timeout,
        }
    }

    /// Create app state from server configuration.
    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(config.payload_format.decoder(), config.request_timeout)
    }
}
