//! Circuit-decomposition scheduler for the Relay engine.
//!
//! This crate provides [`CircuitScheduler`], the default implementation of
//! the [`Scheduler`](relay_core::Scheduler) trait. It repeatedly looks for a
//! "perfect circuit": a closed walk from home back to home in which every
//! edge is backed by a pending leg. When a circuit exists its legs are
//! scheduled as one batch; when none exists the scheduler falls back to an
//! exhaustive ordering search over the remaining legs, or to a greedy
//! nearest-neighbour ordering once the pool is too large to enumerate.
//!
//! The implementation is synchronous and deterministic: ties in the circuit
//! search are broken by pending-leg order, and ties in the ordering search by
//! enumeration order.

#![forbid(unsafe_code)]

mod circuit;
mod ordering;
mod solver;

pub use solver::{CircuitScheduler, CircuitSchedulerConfig};
