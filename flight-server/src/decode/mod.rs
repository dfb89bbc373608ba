//! Payload decoders.
//!
//! Turn a raw request body into an [`Itinerary`]. Two JSON shapes are
//! accepted, selected by [`PayloadFormat`]:
//!
//! - `records`: `[{"source":"IND","destination":"EWR"}, ...]`
//! - `pairs`: `[["IND","EWR"], ...]`
//!
//! Both decode to the same itinerary. An empty list is a valid payload;
//! whether an empty itinerary makes sense is the resolver's call.

mod error;
mod pairs;
mod records;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::domain::{Airport, Itinerary, Leg};

pub use error::DecodeError;
pub use pairs::JsonPairsDecoder;
pub use records::JsonRecordsDecoder;

/// Converts a raw payload into an itinerary.
///
/// This abstraction lets the web layer be tested with any payload shape.
pub trait PayloadDecoder: Send + Sync {
    /// Decode `raw`, giving up with [`DecodeError::Cancelled`] once
    /// `cancel` fires.
    fn decode(&self, raw: &[u8], cancel: &CancellationToken) -> Result<Itinerary, DecodeError>;
}

/// Build a leg from raw tokens, reporting empty tokens by position.
fn build_leg(idx: usize, source: String, destination: String) -> Result<Leg, DecodeError> {
    let source = Airport::new(source).map_err(|_| DecodeError::EmptySource { leg: idx })?;
    let destination =
        Airport::new(destination).map_err(|_| DecodeError::EmptyDestination { leg: idx })?;
    Ok(Leg::new(source, destination))
}

/// Error returned when parsing an unknown payload format name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown payload format '{0}' (expected 'records' or 'pairs')")]
pub struct UnknownPayloadFormat(String);

/// Which payload shape the server accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PayloadFormat {
    /// List of `{"source": .., "destination": ..}` objects
    #[default]
    Records,
    /// List of `[source, destination]` arrays
    Pairs,
}

impl PayloadFormat {
    /// Returns a decoder for this format.
    pub fn decoder(self) -> Arc<dyn PayloadDecoder> {
        match self {
            PayloadFormat::Records => Arc::new(JsonRecordsDecoder::new()),
            PayloadFormat::Pairs => Arc::new(JsonPairsDecoder::new()),
        }
    }

    /// Returns the configuration name of this format.
    pub fn as_str(self) -> &'static str {
        match self {
            PayloadFormat::Records => "records",
            PayloadFormat::Pairs => "pairs",
        }
    }
}

impl FromStr for PayloadFormat {
    type Err = UnknownPayloadFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "records" => Ok(PayloadFormat::Records),
            "pairs" => Ok(PayloadFormat::Pairs),
            _ => Err(UnknownPayloadFormat(s.to_string())),
        }
    }
}

impl fmt::Display for PayloadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
