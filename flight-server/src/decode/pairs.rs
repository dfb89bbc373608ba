//! Decoder for a JSON list of two-element token pairs.

use tokio_util::sync::CancellationToken;

use crate::domain::Itinerary;

use super::{DecodeError, PayloadDecoder, build_leg};

/// Decodes `[["IND","EWR"], ["SFO","ATL"], ...]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPairsDecoder;

impl JsonPairsDecoder {
    /// Create a new decoder.
    pub fn new() -> Self {
        Self
    }
}

impl PayloadDecoder for JsonPairsDecoder {
    fn decode(&self, raw: &[u8], cancel: &CancellationToken) -> Result<Itinerary, DecodeError> {
        let pairs: Vec<Vec<String>> = serde_json::from_slice(raw)?;

        let mut legs = Vec::with_capacity(pairs.len());
        for (idx, pair) in pairs.into_iter().enumerate() {
            if cancel.is_cancelled() {
                return Err(DecodeError::Cancelled);
            }

            let [source, destination]: [String; 2] =
                pair.try_into().map_err(|rest: Vec<String>| DecodeError::WrongArity {
                    leg: idx,
                    found: rest.len(),
                })?;

            legs.push(build_leg(idx, source, destination)?);
        }

        Ok(Itinerary::new(legs))
    }
}
