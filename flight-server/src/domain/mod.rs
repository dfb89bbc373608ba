//! Domain types for the flight path tracker.
//!
//! An itinerary is an unordered bag of directed legs. Airports enforce
//! their only invariant (a non-empty token) at construction time, so the
//! resolver and transport layers can trust any `Airport` they receive.

mod airport;
mod itinerary;

pub use airport::{Airport, InvalidAirport};
pub use itinerary::{Itinerary, Leg, ResolvedPath};
