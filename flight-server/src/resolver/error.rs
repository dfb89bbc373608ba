//! Resolver error types.

use crate::domain::Airport;

/// Errors from itinerary resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// No legs were supplied
    #[error("itinerary has no legs")]
    EmptyItinerary,

    /// The legs do not form exactly one simple path
    #[error("invalid itinerary: {0}")]
    InvalidItinerary(ItineraryFault),

    /// The caller gave up before the scan finished
    #[error("itinerary resolution cancelled")]
    Cancelled,
}

/// Why an itinerary does not form a single path.
///
/// Leg positions are zero-based indices into the input order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItineraryFault {
    /// An airport is departed from more than once
    #[error("'{airport}' departs more than once (legs {first_leg} and {leg})")]
    DuplicateDeparture {
        airport: Airport,
        first_leg: usize,
        leg: usize,
    },

    /// An airport is arrived at more than once
    #[error("'{airport}' is arrived at more than once (legs {first_leg} and {leg})")]
    DuplicateArrival {
        airport: Airport,
        first_leg: usize,
        leg: usize,
    },

    /// Every departure airport is also an arrival airport
    #[error("no airport is only departed from (the legs form a cycle)")]
    NoOrigin,

    /// More than one airport is only departed from
    #[error("more than one starting airport: {}", join(.0))]
    AmbiguousOrigin(Vec<Airport>),

    /// Every arrival airport is also a departure airport
    #[error("no airport is only arrived at (the legs form a cycle)")]
    NoTerminus,

    /// A single start and end exist, but some legs lie off the path between them
    #[error("only {reached} of {total} legs connect the start to the end")]
    Disconnected { reached: usize, total: usize },

    /// More than one airport is only arrived at
    #[error("more than one final airport: {}", join(.0))]
    AmbiguousTerminus(Vec<Airport>),
}

fn join(airports: &[Airport]) -> String {
    airports
        .iter()
        .map(Airport::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
