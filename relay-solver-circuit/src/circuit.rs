//! Perfect-circuit detection over the pending leg pool.
//!
//! A perfect circuit is a closed walk starting and ending at home in which
//! every edge is backed by a pending leg. The search runs on a small
//! auxiliary digraph rebuilt from the pool on every call; nothing is cached
//! across calls.

use std::collections::{HashMap, HashSet, VecDeque};

use relay_core::{Leg, Location, Network, NetworkError, Route};

/// Auxiliary digraph over the distinct `(origin, destination)` pairs of the
/// pending legs.
///
/// The graph records feasibility, not multiplicity: duplicate pairs insert a
/// single edge. Neighbour lists preserve insertion order, which fixes the
/// tie-break order of the breadth-first search.
#[derive(Debug, Default)]
struct LegGraph {
    adjacency: HashMap<Location, Vec<Location>>,
    edges: HashSet<(Location, Location)>,
}

impl LegGraph {
    fn from_pending<N: Network>(network: &N, pending: &[Leg]) -> Result<Self, NetworkError> {
        let mut graph = Self::default();
        for pair in pending {
            if graph.edges.insert((pair.origin, pair.destination)) {
                // Confirms the leg is travellable at all; an unreachable
                // destination invalidates the whole request.
                network.shortest_path(pair.origin, pair.destination)?;
                graph
                    .adjacency
                    .entry(pair.origin)
                    .or_default()
                    .push(pair.destination);
            }
        }
        Ok(graph)
    }

    fn neighbours(&self, node: Location) -> &[Location] {
        self.adjacency.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Hop-minimal path from `from` to `to`, ties broken by discovery order.
    fn breadth_first_search(&self, from: Location, to: Location) -> Option<Vec<Location>> {
        let mut previous: HashMap<Location, Location> = HashMap::new();
        let mut seen = HashSet::from([from]);
        let mut queue = VecDeque::from([from]);

        while let Some(node) = queue.pop_front() {
            if node == to {
                return Some(walk_back(&previous, from, to));
            }
            for &next in self.neighbours(node) {
                if seen.insert(next) {
                    previous.insert(next, node);
                    queue.push_back(next);
                }
            }
        }
        None
    }
}

fn walk_back(
    previous: &HashMap<Location, Location>,
    from: Location,
    to: Location,
) -> Vec<Location> {
    let mut stops = vec![to];
    let mut cursor = to;
    while cursor != from {
        let Some(&step) = previous.get(&cursor) else {
            break;
        };
        stops.push(step);
        cursor = step;
    }
    stops.reverse();
    stops
}

/// Find a closed walk from `home` back to `home` whose edges are all backed
/// by pending legs.
///
/// Candidate first steps are the destinations of pending legs starting at
/// `home`, tried in pool order; the first candidate with a way back wins.
/// Returns `Ok(None)` when no circuit exists for this pool.
pub(crate) fn find_circuit<N: Network>(
    network: &N,
    home: Location,
    pending: &[Leg],
) -> Result<Option<Route>, NetworkError> {
    let graph = LegGraph::from_pending(network, pending)?;

    let first_steps = pending
        .iter()
        .filter(|pair| pair.origin == home)
        .map(|pair| pair.destination);

    for candidate in first_steps {
        if let Some(tail) = graph.breadth_first_search(candidate, home) {
            let mut stops = Vec::with_capacity(tail.len() + 1);
            stops.push(home);
            stops.extend(tail);
            return Ok(Some(Route::new(stops)));
        }
    }
    Ok(None)
}
