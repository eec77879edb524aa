//! Tests for the `CircuitScheduler`.

use super::*;
use relay_core::test_support::{MemoryNetwork, leg, loc};
use rstest::rstest;

/// Fully connected three-node network with unit links.
fn triangle() -> MemoryNetwork {
    let mut network = MemoryNetwork::default();
    network.add_link(loc(1), loc(2), 1);
    network.add_link(loc(2), loc(3), 1);
    network.add_link(loc(1), loc(3), 1);
    network
}

fn respond(network: MemoryNetwork, home: u64, legs: Vec<Leg>) -> ScheduleResponse {
    let scheduler = CircuitScheduler::new(network);
    let request = ScheduleRequest {
        home: loc(home),
        legs,
    };
    match scheduler.schedule(&request) {
        Ok(response) => response,
        Err(error) => panic!("expected a schedule, got {error}"),
    }
}

fn sorted(mut legs: Vec<Leg>) -> Vec<Leg> {
    legs.sort_by_key(|pair| (pair.origin.0, pair.destination.0));
    legs
}

#[rstest]
fn out_and_back_pool_resolves_entirely_by_circuits() {
    let legs = vec![leg(1, 2), leg(1, 3), leg(2, 1), leg(3, 1)];
    let response = respond(triangle(), 1, legs.clone());

    assert!(
        response
            .schedule
            .batches
            .iter()
            .all(|batch| batch.method == BatchMethod::Circuit),
        "every batch should be a circuit: {:?}",
        response.schedule
    );
    let scheduled: Vec<Leg> = response.schedule.legs().copied().collect();
    assert_eq!(sorted(scheduled), sorted(legs));
    assert_eq!(response.total_distance, 4);
    assert_eq!(response.diagnostics.orderings_evaluated, 0);
}

#[rstest]
fn single_one_way_leg_falls_back_to_permutation() {
    let mut network = MemoryNetwork::default();
    network.add_edge(loc(1), loc(2), 5);

    let response = respond(network, 1, vec![leg(1, 2)]);

    assert_eq!(response.schedule.batches.len(), 1);
    let batch = response
        .schedule
        .batches
        .first()
        .unwrap_or_else(|| panic!("expected one batch"));
    assert_eq!(batch.method, BatchMethod::Permutation);
    assert_eq!(batch.legs, vec![leg(1, 2)]);
    assert_eq!(response.total_distance, 5);
    assert_eq!(response.diagnostics.orderings_evaluated, 1);
}

#[rstest]
fn unknown_home_is_rejected_before_scheduling() {
    let scheduler = CircuitScheduler::new(triangle());
    let request = ScheduleRequest {
        home: loc(9),
        legs: vec![leg(1, 2)],
    };
    assert_eq!(
        scheduler.schedule(&request),
        Err(ScheduleError::InvalidLocation(loc(9)))
    );
}

#[rstest]
fn unknown_leg_endpoint_is_rejected_before_scheduling() {
    let scheduler = CircuitScheduler::new(triangle());
    let request = ScheduleRequest {
        home: loc(1),
        legs: vec![leg(1, 2), leg(2, 9)],
    };
    assert_eq!(
        scheduler.schedule(&request),
        Err(ScheduleError::InvalidLocation(loc(9)))
    );
}

#[rstest]
fn duplicate_legs_are_both_scheduled() {
    let mut network = MemoryNetwork::default();
    network.add_link(loc(1), loc(2), 1);

    let response = respond(network, 1, vec![leg(1, 2), leg(1, 2)]);

    let scheduled: Vec<Leg> = response.schedule.legs().copied().collect();
    assert_eq!(scheduled, vec![leg(1, 2), leg(1, 2)]);
    assert_eq!(response.schedule.batches.len(), 1);
}

#[rstest]
fn empty_request_yields_empty_schedule() {
    let response = respond(triangle(), 1, Vec::new());
    assert!(response.schedule.is_empty());
    assert_eq!(response.total_distance, 0);
    assert_eq!(response.diagnostics.batches, 0);
}

#[rstest]
fn unreachable_leg_fails_the_whole_request() {
    let mut network = MemoryNetwork::default();
    network.add_edge(loc(1), loc(2), 1);
    network.add_edge(loc(4), loc(5), 1);

    let scheduler = CircuitScheduler::new(network);
    let request = ScheduleRequest {
        home: loc(1),
        legs: vec![leg(2, 4)],
    };
    assert_eq!(
        scheduler.schedule(&request),
        Err(ScheduleError::NoPath {
            from: loc(2),
            to: loc(4),
        })
    );
}

#[rstest]
fn oversized_circuit_free_pool_uses_nearest_neighbour() {
    let scheduler = CircuitScheduler::with_config(
        triangle(),
        CircuitSchedulerConfig {
            permutation_cutoff: 2,
        },
    );
    // No leg starts at home, so no circuit can be seeded.
    let legs = vec![leg(2, 3), leg(3, 2), leg(2, 3)];
    let request = ScheduleRequest {
        home: loc(1),
        legs: legs.clone(),
    };
    let response = match scheduler.schedule(&request) {
        Ok(response) => response,
        Err(error) => panic!("expected a schedule, got {error}"),
    };

    assert_eq!(response.schedule.batches.len(), 1);
    let batch = response
        .schedule
        .batches
        .first()
        .unwrap_or_else(|| panic!("expected one batch"));
    assert_eq!(batch.method, BatchMethod::NearestNeighbour);
    let scheduled: Vec<Leg> = response.schedule.legs().copied().collect();
    assert_eq!(sorted(scheduled), sorted(legs));
    assert_eq!(response.diagnostics.orderings_evaluated, 0);
}

#[rstest]
fn iteration_count_never_exceeds_leg_count() {
    let legs = vec![leg(1, 2), leg(2, 3), leg(3, 1), leg(1, 3), leg(2, 1)];
    let response = respond(triangle(), 1, legs.clone());
    assert!(response.diagnostics.batches <= legs.len() as u64);
    assert_eq!(response.schedule.len(), legs.len());
}

#[rstest]
fn scheduler_state_does_not_leak_between_calls() {
    let scheduler = CircuitScheduler::new(triangle());
    let request = ScheduleRequest {
        home: loc(1),
        legs: vec![leg(1, 2), leg(2, 1)],
    };
    let first = respond_with(&scheduler, &request);
    let second = respond_with(&scheduler, &request);
    // Timings differ between runs; the scheduling outcome must not.
    assert_eq!(first.schedule, second.schedule);
    assert_eq!(first.total_distance, second.total_distance);
}

fn respond_with(
    scheduler: &CircuitScheduler<MemoryNetwork>,
    request: &ScheduleRequest,
) -> ScheduleResponse {
    match scheduler.schedule(request) {
        Ok(response) => response,
        Err(error) => panic!("expected a schedule, got {error}"),
    }
}
