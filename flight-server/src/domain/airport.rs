//! Airport identifier type.

use std::fmt;

use serde::Serialize;

/// Error returned when constructing an invalid airport identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport: {reason}")]
pub struct InvalidAirport {
    reason: &'static str,
}

/// An opaque airport identifier.
///
/// Airports are compared by exact token equality. No registry lookup or
/// format check is performed beyond rejecting the empty token, so `SFO`,
/// `sfo` and `KSFO` are three distinct airports.
///
/// # Examples
///
/// ```
/// use flight_server::domain::Airport;
///
/// let sfo = Airport::new("SFO").unwrap();
/// assert_eq!(sfo.as_str(), "SFO");
///
/// // The empty token is rejected
/// assert!(Airport::new("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Airport(String);

impl Airport {
    /// Create an airport from a token.
    pub fn new(token: impl Into<String>) -> Result<Self, InvalidAirport> {
        let token = token.into();
        if token.is_empty() {
            return Err(InvalidAirport {
                reason: "token must not be empty",
            });
        }
        Ok(Airport(token))
    }

    /// Returns the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Airport({})", self.0)
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
