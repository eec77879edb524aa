//! Network oracle trait and shortest-path answer type.

use crate::{Location, Route};

use super::error::NetworkError;

/// A shortest-path answer: the walk taken and its total distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    /// Sum of edge weights along [`ShortestPath::route`].
    pub distance: u64,
    /// The walk itself, from origin to destination inclusive.
    pub route: Route,
}

/// Read-only access to a weighted transport network.
///
/// Implementations must be deterministic and side-effect-free: schedulers
/// interleave many queries per solve and assume repeated calls agree.
///
/// # Examples
///
/// ```rust
/// use relay_core::{Location, Network, NetworkError, Route, ShortestPath};
///
/// /// Two nodes joined by a single directed unit edge.
/// struct UnitEdge;
///
/// impl Network for UnitEdge {
///     fn contains(&self, location: Location) -> bool {
///         matches!(location, Location(1) | Location(2))
///     }
///
///     fn shortest_path(
///         &self,
///         from: Location,
///         to: Location,
///     ) -> Result<ShortestPath, NetworkError> {
///         match (from, to) {
///             (a, b) if a == b => Ok(ShortestPath {
///                 distance: 0,
///                 route: Route::new(vec![a]),
///             }),
///             (Location(1), Location(2)) => Ok(ShortestPath {
///                 distance: 1,
///                 route: Route::new(vec![from, to]),
///             }),
///             _ => Err(NetworkError::NoPath { from, to }),
///         }
///     }
/// }
///
/// let hop = UnitEdge.shortest_path(Location(1), Location(2))?;
/// assert_eq!(hop.distance, 1);
/// assert!(UnitEdge.shortest_path(Location(2), Location(1)).is_err());
/// # Ok::<(), NetworkError>(())
/// ```
pub trait Network {
    /// Whether `location` is a node of this network.
    fn contains(&self, location: Location) -> bool;

    /// Cheapest walk from `from` to `to`.
    ///
    /// Returns [`NetworkError::NoPath`] when `to` is unreachable from
    /// `from`.
    fn shortest_path(&self, from: Location, to: Location)
    -> Result<ShortestPath, NetworkError>;

    /// Total distance of a route, pricing each consecutive stop pair at its
    /// shortest-path distance.
    ///
    /// Consecutive stops need not be adjacent; gaps are priced as
    /// shortest-path connectors. Returns [`NetworkError::NoPath`] if any
    /// pair is unreachable.
    fn route_distance(&self, route: &Route) -> Result<u64, NetworkError> {
        let mut total = 0_u64;
        for (from, to) in route.edges() {
            total = total.saturating_add(self.shortest_path(from, to)?.distance);
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MemoryNetwork, loc};
    use rstest::rstest;

    fn line_network() -> MemoryNetwork {
        // 1 -> 2 -> 3, one-way, weights 2 and 3.
        let mut network = MemoryNetwork::default();
        network.add_edge(loc(1), loc(2), 2);
        network.add_edge(loc(2), loc(3), 3);
        network
    }

    #[rstest]
    fn route_distance_sums_connector_gaps() {
        let network = line_network();
        // 1 -> 3 is not a direct edge; the gap is priced as 1 -> 2 -> 3.
        let route = Route::new(vec![loc(1), loc(3)]);
        assert_eq!(network.route_distance(&route), Ok(5));
    }

    #[rstest]
    fn route_distance_of_trivial_routes_is_zero() {
        let network = line_network();
        assert_eq!(network.route_distance(&Route::empty()), Ok(0));
        assert_eq!(network.route_distance(&Route::new(vec![loc(1)])), Ok(0));
    }

    #[rstest]
    fn route_distance_propagates_no_path() {
        let network = line_network();
        let route = Route::new(vec![loc(3), loc(1)]);
        assert_eq!(
            network.route_distance(&route),
            Err(NetworkError::NoPath {
                from: loc(3),
                to: loc(1),
            })
        );
    }
}
