use std::fmt;

use crate::Location;

/// A required directed movement between two locations.
///
/// Legs are directional: a leg is not interchangeable with its reverse, and
/// each leg must be traversed exactly once in its given direction. Two legs
/// with the same endpoints are distinct pieces of work; schedulers track them
/// with multiset semantics rather than deduplicating.
///
/// # Examples
/// ```
/// use relay_core::{Leg, Location};
///
/// let leg = Leg::new(Location(1), Location(2));
/// assert_eq!(leg.reversed(), Leg::new(Location(2), Location(1)));
/// assert_ne!(leg, leg.reversed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    /// Where the movement starts.
    pub origin: Location,
    /// Where the movement ends.
    pub destination: Location,
}

impl Leg {
    /// Construct a leg from its endpoints.
    pub const fn new(origin: Location, destination: Location) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// The same movement in the opposite direction.
    ///
    /// This is a different piece of work, not an alternative way to satisfy
    /// the original leg.
    pub const fn reversed(self) -> Self {
        Self::new(self.destination, self.origin)
    }
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.origin, self.destination)
    }
}
