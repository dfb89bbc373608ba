//! Origin/terminus resolution over an unordered set of legs.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::domain::{Airport, Itinerary, ResolvedPath};

use super::error::{ItineraryFault, ResolveError};

/// Number of legs scanned between cancellation checks.
const CANCEL_CHECK_INTERVAL: usize = 256;

/// Resolve the origin and terminus of an itinerary.
///
/// Equivalent to [`resolve_cancellable`] with a token that is never
/// cancelled.
///
/// # Examples
///
/// ```
/// use flight_server::domain::{Airport, Itinerary, Leg};
/// use flight_server::resolver::resolve;
///
/// let leg = |from: &str, to: &str| Leg::new(Airport::new(from).unwrap(), Airport::new(to).unwrap());
/// let itinerary = Itinerary::new(vec![leg("ATL", "GSO"), leg("SFO", "ATL")]);
///
/// let path = resolve(&itinerary).unwrap();
/// assert_eq!(path.origin.as_str(), "SFO");
/// assert_eq!(path.terminus.as_str(), "GSO");
/// ```
pub fn resolve(itinerary: &Itinerary) -> Result<ResolvedPath, ResolveError> {
    resolve_cancellable(itinerary, &CancellationToken::new())
}

/// Resolve the origin and terminus of an itinerary, giving up with
/// [`ResolveError::Cancelled`] once `cancel` fires.
///
/// The legs must form exactly one simple path: no airport departed from
/// twice, no airport arrived at twice, and exactly one airport that is
/// only departed from and one that is only arrived at. Runs in time linear
/// in the number of legs.
pub fn resolve_cancellable(
    itinerary: &Itinerary,
    cancel: &CancellationToken,
) -> Result<ResolvedPath, ResolveError> {
    let legs = itinerary.legs();
    if legs.is_empty() {
        return Err(ResolveError::EmptyItinerary);
    }

    // Airport -> position of the leg that first used it
    let mut sources: HashMap<&Airport, usize> = HashMap::with_capacity(legs.len());
    let mut destinations: HashMap<&Airport, usize> = HashMap::with_capacity(legs.len());

    for (idx, leg) in legs.iter().enumerate() {
        if idx % CANCEL_CHECK_INTERVAL == 0 && cancel.is_cancelled() {
            debug!(scanned = idx, "itinerary resolution cancelled");
            return Err(ResolveError::Cancelled);
        }

        match sources.entry(&leg.source) {
            Entry::Occupied(first) => {
                return Err(reject(ItineraryFault::DuplicateDeparture {
                    airport: leg.source.clone(),
                    first_leg: *first.get(),
                    leg: idx,
                }));
            }
            Entry::Vacant(slot) => {
                slot.insert(idx);
            }
        }

        match destinations.entry(&leg.destination) {
            Entry::Occupied(first) => {
                return Err(reject(ItineraryFault::DuplicateArrival {
                    airport: leg.destination.clone(),
                    first_leg: *first.get(),
                    leg: idx,
                }));
            }
            Entry::Vacant(slot) => {
                slot.insert(idx);
            }
        }
    }

    // Candidates are gathered in input order so the outcome never depends
    // on map iteration order.
    let origins: Vec<&Airport> = legs
        .iter()
        .map(|leg| &leg.source)
        .filter(|airport| !destinations.contains_key(airport))
        .collect();

    let termini: Vec<&Airport> = legs
        .iter()
        .map(|leg| &leg.destination)
        .filter(|airport| !sources.contains_key(airport))
        .collect();

    let origin = match origins.as_slice() {
        [only] => (*only).clone(),
        [] => return Err(reject(ItineraryFault::NoOrigin)),
        many => return Err(reject(ItineraryFault::AmbiguousOrigin(owned(many)))),
    };

    let terminus = match termini.as_slice() {
        [only] => (*only).clone(),
        [] => return Err(reject(ItineraryFault::NoTerminus)),
        many => return Err(reject(ItineraryFault::AmbiguousTerminus(owned(many)))),
    };

    // Uniqueness means the walk from the origin can neither branch nor loop;
    // any leg it does not reach sits on a separate cycle.
    let mut reached = 0;
    let mut at = &origin;
    while let Some(&idx) = sources.get(at) {
        if reached % CANCEL_CHECK_INTERVAL == 0 && cancel.is_cancelled() {
            debug!(walked = reached, "itinerary resolution cancelled");
            return Err(ResolveError::Cancelled);
        }
        at = &legs[idx].destination;
        reached += 1;
    }
    if reached != legs.len() {
        return Err(reject(ItineraryFault::Disconnected {
            reached,
            total: legs.len(),
        }));
    }

    debug!(legs = legs.len(), %origin, %terminus, "resolved itinerary");

    Ok(ResolvedPath { origin, terminus })
}

fn reject(fault: ItineraryFault) -> ResolveError {
    debug!(%fault, "rejected itinerary");
    ResolveError::InvalidItinerary(fault)
}

fn owned(airports: &[&Airport]) -> Vec<Airport> {
    airports.iter().map(|a| (*a).clone()).collect()
}
