//! Ordering search for leg pools that form no circuit.
//!
//! [`best_order`] exhaustively prices every permutation of the pool, which is
//! factorial in the pool size and only acceptable for small pools;
//! [`nearest_neighbour_order`] is the polynomial substitute used above the
//! configured cutoff. Both return a concrete travel route; conversion
//! helpers map between routes and leg sequences.

use itertools::Itertools;

use relay_core::{Leg, Location, Network, NetworkError, Route};

/// Build the travel route implied by executing `order` from `home`.
///
/// A connector stop is inserted whenever the next leg's origin differs from
/// the route's current last stop; the connector itself is priced later via
/// [`Network::route_distance`].
pub(crate) fn route_from_order(home: Location, order: &[Leg]) -> Route {
    let mut route = Route::new(vec![home]);
    for pair in order {
        if route.last() != Some(pair.origin) {
            route.push(pair.origin);
        }
        route.push(pair.destination);
    }
    route
}

/// Every consecutive stop pair of `route`, viewed as a leg.
pub(crate) fn legs_from_route(route: &Route) -> impl Iterator<Item = Leg> + '_ {
    route.edges().map(|(from, to)| Leg::new(from, to))
}

/// Exhaustively evaluate every ordering of `pending` and keep the cheapest.
///
/// Ties are broken by enumeration order: the first ordering achieving the
/// minimal distance wins. Returns the winning route, its total distance and
/// the number of orderings priced.
pub(crate) fn best_order<N: Network>(
    network: &N,
    home: Location,
    pending: &[Leg],
) -> Result<(Route, u64, u64), NetworkError> {
    let mut best: Option<(Route, u64)> = None;
    let mut evaluated = 0_u64;

    for order in pending.iter().copied().permutations(pending.len()) {
        let candidate = route_from_order(home, &order);
        let distance = network.route_distance(&candidate)?;
        evaluated = evaluated.saturating_add(1);
        let improves = best
            .as_ref()
            .is_none_or(|&(_, incumbent)| distance < incumbent);
        if improves {
            best = Some((candidate, distance));
        }
    }

    match best {
        Some((route, distance)) => Ok((route, distance, evaluated)),
        // Unreachable with a non-empty pool; kept total for callers.
        None => Ok((Route::new(vec![home]), 0, 0)),
    }
}

/// Greedy ordering: repeatedly execute the pending leg whose origin is
/// cheapest to reach from the current position.
///
/// A deliberate approximation of [`best_order`] for pools too large to
/// enumerate: the result is always a valid ordering of all pending legs, but
/// not necessarily the optimal one. Ties are broken by pool order.
pub(crate) fn nearest_neighbour_order<N: Network>(
    network: &N,
    home: Location,
    pending: &[Leg],
) -> Result<(Route, u64), NetworkError> {
    let mut remaining: Vec<Leg> = pending.to_vec();
    let mut order: Vec<Leg> = Vec::with_capacity(remaining.len());
    let mut position = home;

    while !remaining.is_empty() {
        let mut choice: Option<(usize, u64)> = None;
        for (index, pair) in remaining.iter().enumerate() {
            let approach = network.shortest_path(position, pair.origin)?.distance;
            if choice.is_none_or(|(_, incumbent)| approach < incumbent) {
                choice = Some((index, approach));
            }
        }
        let Some((index, _)) = choice else { break };
        let next = remaining.remove(index);
        order.push(next);
        position = next.destination;
    }

    let route = route_from_order(home, &order);
    let distance = network.route_distance(&route)?;
    Ok((route, distance))
}
