//! Itinerary resolution.
//!
//! Given an unordered set of legs that should form one simple path, find
//! the airport the traveler started from and the one they finally reached.
//! Malformed input (no legs, branching, cycles, separate components) is an
//! expected outcome and is reported through [`ResolveError`], never a panic.

mod error;
mod resolve;

pub use error::{ItineraryFault, ResolveError};
pub use resolve::{resolve, resolve_cancellable};
