//! Core domain types for the Relay engine.
//!
//! Relay sequences required point-to-point movements ("legs") for a single
//! mobile resource that starts and ends at a home location. This crate holds
//! the vocabulary shared by schedulers and network backends: [`Location`],
//! [`Leg`], [`Route`] and [`Schedule`], the [`Network`] oracle trait, and the
//! [`Scheduler`] seam with its request, response and error types.
//!
//! Scheduler implementations live in separate crates; see the
//! `relay-solver-circuit` crate for the default circuit-decomposition
//! scheduler.

#![forbid(unsafe_code)]

mod leg;
mod location;
pub mod network;
mod route;
mod schedule;
mod scheduler;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use leg::Leg;
pub use location::Location;
pub use network::{Network, NetworkError, ShortestPath};
pub use route::Route;
pub use schedule::{Batch, BatchMethod, Schedule};
pub use scheduler::{
    Diagnostics, ScheduleError, ScheduleRequest, ScheduleResponse, Scheduler,
};
