//! Data transfer objects for web responses.

use serde::Serialize;

use crate::domain::{Airport, ResolvedPath};

/// Response for a resolved itinerary.
#[derive(Debug, Serialize)]
pub struct PathResponse {
    /// Where the journey starts
    pub source: Airport,

    /// Where the journey ends
    pub destination: Airport,
}

impl From<ResolvedPath> for PathResponse {
    fn from(path: ResolvedPath) -> Self {
        Self {
            source: path.origin,
            destination: path.terminus,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
