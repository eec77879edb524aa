//! Facade crate for the Relay leg-sequencing engine.
//!
//! This crate re-exports the core domain types and exposes the circuit
//! scheduler implementation behind a feature flag.

#![forbid(unsafe_code)]

pub use relay_core::{
    Batch, BatchMethod, Diagnostics, Leg, Location, Network, NetworkError, Route, Schedule,
    ScheduleError, ScheduleRequest, ScheduleResponse, Scheduler, ShortestPath,
};

#[cfg(feature = "solver-circuit")]
pub use relay_solver_circuit::{CircuitScheduler, CircuitSchedulerConfig};
