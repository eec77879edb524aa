//! Scheduler seam: request, response, error taxonomy and the trait itself.

use std::time::Duration;

use thiserror::Error;

use crate::{Leg, Location, NetworkError, Schedule};

/// Parameters for a scheduling request.
///
/// The request names the home location the resource starts and ends at, and
/// the legs that must each be traversed exactly once.
///
/// # Examples
/// ```rust
/// use relay_core::{Leg, Location, ScheduleRequest};
///
/// let request = ScheduleRequest {
///     home: Location(1),
///     legs: vec![Leg::new(Location(1), Location(2))],
/// };
/// assert_eq!(request.legs.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRequest {
    /// Where the resource starts and must return to.
    pub home: Location,
    /// Movements to place into the schedule; duplicates are distinct work.
    pub legs: Vec<Leg>,
}

/// Counters describing how a schedule was produced.
///
/// Populated by scheduler implementations for observability; none of the
/// fields affect the schedule itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Diagnostics {
    /// Wall-clock time spent inside the scheduler.
    pub solve_time: Duration,
    /// Top-level iterations performed (bounded by the number of legs).
    pub batches: u64,
    /// Orderings priced by exhaustive search across all fallback batches.
    pub orderings_evaluated: u64,
}

/// Response from a successful schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleResponse {
    /// All input legs, ordered and grouped by resolution batch.
    pub schedule: Schedule,
    /// Total travel distance across all batches, connectors included.
    pub total_distance: u64,
    /// Counters describing the solve.
    pub diagnostics: Diagnostics,
}

/// Errors returned by [`Scheduler::schedule`].
///
/// Both classes are fatal for the whole request: no partial schedule is
/// returned, and there is nothing to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The home location or a leg endpoint is not a node of the network.
    ///
    /// Raised before any scheduling work begins.
    #[error("location {0} is not part of the network")]
    InvalidLocation(Location),
    /// A required connector or leg has no feasible route.
    #[error("no path from {from} to {to}")]
    NoPath {
        /// Where the infeasible movement starts.
        from: Location,
        /// The unreachable destination.
        to: Location,
    },
}

impl From<NetworkError> for ScheduleError {
    fn from(error: NetworkError) -> Self {
        match error {
            NetworkError::NoPath { from, to } => Self::NoPath { from, to },
        }
    }
}

/// Order a set of legs for a single resource, minimising travel distance.
///
/// Implementations must validate the request's locations and fail with
/// [`ScheduleError::InvalidLocation`] rather than panicking. Schedulers must
/// be `Send + Sync` to operate safely across threads; each call owns its own
/// working state and runs to completion.
pub trait Scheduler: Send + Sync {
    /// Schedule a request, producing an ordered schedule or an error.
    fn schedule(&self, request: &ScheduleRequest) -> Result<ScheduleResponse, ScheduleError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Batch, BatchMethod};
    use rstest::rstest;

    struct DummyScheduler;

    impl Scheduler for DummyScheduler {
        fn schedule(
            &self,
            request: &ScheduleRequest,
        ) -> Result<ScheduleResponse, ScheduleError> {
            if request.home == Location(0) {
                return Err(ScheduleError::InvalidLocation(request.home));
            }
            let mut schedule = Schedule::default();
            schedule.push(Batch::new(BatchMethod::Permutation, request.legs.clone()));
            Ok(ScheduleResponse {
                schedule,
                total_distance: 0,
                diagnostics: Diagnostics::default(),
            })
        }
    }

    #[rstest]
    fn returns_schedule_on_valid_request() {
        let request = ScheduleRequest {
            home: Location(1),
            legs: vec![Leg::new(Location(1), Location(2))],
        };
        let response = match DummyScheduler.schedule(&request) {
            Ok(response) => response,
            Err(error) => panic!("expected success, got {error}"),
        };
        assert_eq!(response.schedule.len(), 1);
    }

    #[rstest]
    fn returns_error_on_invalid_home() {
        let request = ScheduleRequest {
            home: Location(0),
            legs: Vec::new(),
        };
        let outcome = DummyScheduler.schedule(&request);
        assert_eq!(outcome, Err(ScheduleError::InvalidLocation(Location(0))));
    }

    #[rstest]
    fn no_path_maps_through_from_network_error() {
        let error: ScheduleError = NetworkError::NoPath {
            from: Location(1),
            to: Location(2),
        }
        .into();
        assert_eq!(
            error,
            ScheduleError::NoPath {
                from: Location(1),
                to: Location(2),
            }
        );
    }
}
