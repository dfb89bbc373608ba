//! Payload decoding error types.

/// Errors from turning a raw payload into an itinerary.
///
/// Leg positions are zero-based indices into the payload list.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Payload is not valid JSON of the expected shape
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A pair entry does not have exactly two elements
    #[error("leg {leg} must have exactly 2 airports, found {found}")]
    WrongArity { leg: usize, found: usize },

    /// A leg has an empty source token
    #[error("leg {leg} has an empty source")]
    EmptySource { leg: usize },

    /// A leg has an empty destination token
    #[error("leg {leg} has an empty destination")]
    EmptyDestination { leg: usize },

    /// The caller gave up while the payload was being decoded
    #[error("decoding cancelled")]
    Cancelled,
}
