//! Concrete walks through the network.
//!
//! A [`Route`] is an ordered sequence of stops. Consecutive stops need not be
//! directly linked in the network: gaps are closed by shortest-path
//! connectors when the route is priced via
//! [`Network::route_distance`](crate::Network::route_distance).

use crate::Location;

/// An ordered walk through network locations.
///
/// # Examples
/// ```
/// use relay_core::{Location, Route};
///
/// let route = Route::new(vec![Location(1), Location(2), Location(1)]);
/// assert!(route.is_closed_at(Location(1)));
/// assert_eq!(route.edges().count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Stops in traversal order.
    pub stops: Vec<Location>,
}

impl Route {
    /// Construct a route from an ordered list of stops.
    pub const fn new(stops: Vec<Location>) -> Self {
        Self { stops }
    }

    /// Construct a route with no stops.
    pub const fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// First stop, if any.
    pub fn first(&self) -> Option<Location> {
        self.stops.first().copied()
    }

    /// Last stop, if any.
    pub fn last(&self) -> Option<Location> {
        self.stops.last().copied()
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Whether the route has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Append a stop to the end of the route.
    pub fn push(&mut self, stop: Location) {
        self.stops.push(stop);
    }

    /// Consecutive stop pairs in traversal order.
    pub fn edges(&self) -> impl Iterator<Item = (Location, Location)> + '_ {
        self.stops
            .iter()
            .zip(self.stops.iter().skip(1))
            .map(|(&from, &to)| (from, to))
    }

    /// Whether the route starts and ends at `home` and actually goes
    /// somewhere.
    pub fn is_closed_at(&self, home: Location) -> bool {
        self.len() > 1 && self.first() == Some(home) && self.last() == Some(home)
    }
}
