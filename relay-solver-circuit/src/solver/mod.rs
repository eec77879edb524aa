//! `CircuitScheduler` implementation of the circuit-decomposition loop.
//!
//! Each iteration schedules one batch: a perfect circuit when one exists,
//! otherwise the cheapest ordering of the remaining pool (exhaustive up to
//! the configured cutoff, greedy nearest-neighbour beyond it). Consumed legs
//! leave the pool, so the loop runs at most once per input leg.

use std::time::Instant;

use relay_core::{
    Batch, BatchMethod, Diagnostics, Leg, Location, Network, Route, Schedule, ScheduleError,
    ScheduleRequest, ScheduleResponse, Scheduler,
};

use crate::circuit::find_circuit;
use crate::ordering::{best_order, legs_from_route, nearest_neighbour_order};

/// Configuration for [`CircuitScheduler`].
#[derive(Debug, Clone)]
pub struct CircuitSchedulerConfig {
    /// Largest circuit-free pool the exhaustive ordering search will accept.
    ///
    /// The search prices `n!` orderings for a pool of `n` legs; pools larger
    /// than this fall back to a greedy nearest-neighbour ordering, trading
    /// optimality for a polynomial bound.
    pub permutation_cutoff: usize,
}

impl Default for CircuitSchedulerConfig {
    fn default() -> Self {
        Self {
            permutation_cutoff: 8,
        }
    }
}

/// Scheduler that peels perfect circuits off the pending pool and orders the
/// circuit-free remainder by exhaustive search.
///
/// The scheduler is generic over the [`Network`] oracle supplying shortest
/// paths and membership tests. Each call owns its working pool exclusively
/// and runs to completion; no state survives between calls.
pub struct CircuitScheduler<N: Network> {
    network: N,
    config: CircuitSchedulerConfig,
}

impl<N: Network> CircuitScheduler<N> {
    /// Construct a scheduler using default configuration.
    pub fn new(network: N) -> Self {
        Self::with_config(network, CircuitSchedulerConfig::default())
    }

    /// Construct a scheduler with explicit configuration.
    pub const fn with_config(network: N, config: CircuitSchedulerConfig) -> Self {
        Self { network, config }
    }

    fn next_batch(
        &self,
        home: Location,
        pool: &[Leg],
        orderings_evaluated: &mut u64,
    ) -> Result<(Route, BatchMethod, u64), ScheduleError> {
        if let Some(route) = find_circuit(&self.network, home, pool)? {
            let distance = self.network.route_distance(&route)?;
            return Ok((route, BatchMethod::Circuit, distance));
        }
        if pool.len() <= self.config.permutation_cutoff {
            let (route, distance, evaluated) = best_order(&self.network, home, pool)?;
            *orderings_evaluated = orderings_evaluated.saturating_add(evaluated);
            return Ok((route, BatchMethod::Permutation, distance));
        }
        log::info!(
            "{} circuit-free legs exceed the permutation cutoff of {}; \
             substituting nearest-neighbour ordering",
            pool.len(),
            self.config.permutation_cutoff
        );
        let (route, distance) = nearest_neighbour_order(&self.network, home, pool)?;
        Ok((route, BatchMethod::NearestNeighbour, distance))
    }
}

impl<N: Network + Send + Sync> Scheduler for CircuitScheduler<N> {
    fn schedule(&self, request: &ScheduleRequest) -> Result<ScheduleResponse, ScheduleError> {
        validate_locations(&self.network, request)?;
        let started_at = Instant::now();

        let mut pool: Vec<Leg> = request.legs.clone();
        let mut schedule = Schedule::default();
        let mut total_distance = 0_u64;
        let mut batches = 0_u64;
        let mut orderings_evaluated = 0_u64;

        while !pool.is_empty() {
            let (route, method, distance) =
                self.next_batch(request.home, &pool, &mut orderings_evaluated)?;
            let consumed = consume(&mut pool, &route);
            if consumed.is_empty() {
                // Cannot happen: a circuit is seeded by a pending leg out of
                // home and the ordering fallbacks traverse the whole pool.
                log::warn!(
                    "batch consumed no legs; aborting with {} unscheduled",
                    pool.len()
                );
                debug_assert!(false, "batch consumed no legs");
                break;
            }
            total_distance = total_distance.saturating_add(distance);
            batches = batches.saturating_add(1);
            schedule.push(Batch::new(method, consumed));
        }

        Ok(ScheduleResponse {
            schedule,
            total_distance,
            diagnostics: Diagnostics {
                solve_time: started_at.elapsed(),
                batches,
                orderings_evaluated,
            },
        })
    }
}

/// Fail with the first request location the network does not contain.
fn validate_locations<N: Network>(
    network: &N,
    request: &ScheduleRequest,
) -> Result<(), ScheduleError> {
    let mut stops = std::iter::once(request.home).chain(
        request
            .legs
            .iter()
            .flat_map(|pair| [pair.origin, pair.destination]),
    );
    match stops.find(|&stop| !network.contains(stop)) {
        Some(missing) => Err(ScheduleError::InvalidLocation(missing)),
        None => Ok(()),
    }
}

/// Remove one pool instance for every route edge matching a pending leg, in
/// traversal order. Connector edges match nothing and consume nothing.
fn consume(pool: &mut Vec<Leg>, route: &Route) -> Vec<Leg> {
    let mut consumed = Vec::new();
    for edge in legs_from_route(route) {
        if let Some(index) = pool.iter().position(|&pending| pending == edge) {
            pool.remove(index);
            consumed.push(edge);
        }
    }
    consumed
}

#[cfg(test)]
mod tests;
