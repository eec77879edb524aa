//! Test-only, in-memory [`Network`] implementation used by unit and
//! behaviour tests.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::{Leg, Location, Network, NetworkError, Route, ShortestPath};

/// Shorthand [`Location`] constructor for tests.
pub const fn loc(id: u64) -> Location {
    Location(id)
}

/// Shorthand [`Leg`] constructor for tests.
pub const fn leg(origin: u64, destination: u64) -> Leg {
    Leg::new(Location(origin), Location(destination))
}

/// In-memory weighted digraph implementing [`Network`].
///
/// Shortest paths are computed with Dijkstra's algorithm on every query; the
/// graph performs no caching and is intended only for small test networks.
/// Neighbour lists preserve insertion order, so queries are deterministic.
#[derive(Default, Debug, Clone)]
pub struct MemoryNetwork {
    adjacency: HashMap<Location, Vec<(Location, u64)>>,
    nodes: HashSet<Location>,
}

impl MemoryNetwork {
    /// Create a network from directed `(origin, destination, distance)`
    /// edges.
    pub fn with_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (Location, Location, u64)>,
    {
        let mut network = Self::default();
        for (from, to, distance) in edges {
            network.add_edge(from, to, distance);
        }
        network
    }

    /// Add a directed edge.
    pub fn add_edge(&mut self, from: Location, to: Location, distance: u64) {
        self.adjacency.entry(from).or_default().push((to, distance));
        self.nodes.insert(from);
        self.nodes.insert(to);
    }

    /// Add an edge in both directions with the same distance.
    pub fn add_link(&mut self, a: Location, b: Location, distance: u64) {
        self.add_edge(a, b, distance);
        self.add_edge(b, a, distance);
    }

    /// Add an isolated node with no edges.
    pub fn add_location(&mut self, location: Location) {
        self.nodes.insert(location);
    }

    fn neighbours(&self, node: Location) -> &[(Location, u64)] {
        self.adjacency.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Network for MemoryNetwork {
    fn contains(&self, location: Location) -> bool {
        self.nodes.contains(&location)
    }

    fn shortest_path(
        &self,
        from: Location,
        to: Location,
    ) -> Result<ShortestPath, NetworkError> {
        if !self.contains(from) || !self.contains(to) {
            return Err(NetworkError::NoPath { from, to });
        }

        let mut best: HashMap<Location, u64> = HashMap::from([(from, 0)]);
        let mut previous: HashMap<Location, Location> = HashMap::new();
        let mut frontier = BinaryHeap::from([Reverse((0_u64, from))]);

        while let Some(Reverse((distance, node))) = frontier.pop() {
            if best.get(&node).is_some_and(|&known| distance > known) {
                continue;
            }
            if node == to {
                break;
            }
            for &(next, weight) in self.neighbours(node) {
                let candidate = distance.saturating_add(weight);
                if best.get(&next).is_none_or(|&known| candidate < known) {
                    best.insert(next, candidate);
                    previous.insert(next, node);
                    frontier.push(Reverse((candidate, next)));
                }
            }
        }

        let Some(&distance) = best.get(&to) else {
            return Err(NetworkError::NoPath { from, to });
        };

        let mut stops = vec![to];
        let mut cursor = to;
        while cursor != from {
            let Some(&step) = previous.get(&cursor) else {
                return Err(NetworkError::NoPath { from, to });
            };
            stops.push(step);
            cursor = step;
        }
        stops.reverse();

        Ok(ShortestPath {
            distance,
            route: Route::new(stops),
        })
    }
}
