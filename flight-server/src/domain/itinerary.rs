//! Legs, itineraries and resolved paths.

use super::Airport;

/// One directed flight from `source` to `destination`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Leg {
    /// Departure airport
    pub source: Airport,
    /// Arrival airport
    pub destination: Airport,
}

impl Leg {
    /// Creates a new leg.
    pub fn new(source: Airport, destination: Airport) -> Self {
        Self {
            source,
            destination,
        }
    }
}

/// The legs of one traveler's journey, in the order they were supplied.
///
/// Input order is not travel order. It is kept only so that errors can
/// point at the position of an offending leg.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Itinerary {
    legs: Vec<Leg>,
}

impl Itinerary {
    /// Creates an itinerary from legs in input order.
    pub fn new(legs: Vec<Leg>) -> Self {
        Self { legs }
    }

    /// Returns the legs in input order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Returns the number of legs.
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// Returns true if there are no legs.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }
}

impl FromIterator<Leg> for Itinerary {
    fn from_iter<I: IntoIterator<Item = Leg>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<Leg>> for Itinerary {
    fn from(legs: Vec<Leg>) -> Self {
        Self::new(legs)
    }
}

/// The overall start and end of an itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    /// Airport with a departing leg but no arriving leg
    pub origin: Airport,
    /// Airport with an arriving leg but no departing leg
    pub terminus: Airport,
}
