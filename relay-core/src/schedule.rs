//! Scheduler output: legs grouped into the batches that resolved them.

use crate::Leg;

/// How a batch of legs was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BatchMethod {
    /// The legs chained into a closed walk back to home.
    Circuit,
    /// Exhaustive ordering search selected the cheapest sequence.
    Permutation,
    /// Greedy nearest-neighbour ordering, used above the permutation cutoff.
    NearestNeighbour,
}

/// One scheduler iteration's worth of legs, in traversal order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Batch {
    /// How the batch was resolved.
    pub method: BatchMethod,
    /// Legs consumed by the batch, preserving traversal order.
    pub legs: Vec<Leg>,
}

impl Batch {
    /// Construct a batch from a resolution method and ordered legs.
    pub const fn new(method: BatchMethod, legs: Vec<Leg>) -> Self {
        Self { method, legs }
    }
}

/// The final ordered sequence of all legs, grouped by batch.
///
/// Batches appear in resolution order and each preserves the order in which
/// its legs were traversed, so flattening with [`Schedule::legs`] yields the
/// full execution sequence.
///
/// # Examples
/// ```
/// use relay_core::{Batch, BatchMethod, Leg, Location, Schedule};
///
/// let mut schedule = Schedule::default();
/// schedule.push(Batch::new(
///     BatchMethod::Circuit,
///     vec![Leg::new(Location(1), Location(2))],
/// ));
/// assert_eq!(schedule.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    /// Batches in resolution order.
    pub batches: Vec<Batch>,
}

impl Schedule {
    /// Append a resolved batch.
    pub fn push(&mut self, batch: Batch) {
        self.batches.push(batch);
    }

    /// All scheduled legs in execution order.
    pub fn legs(&self) -> impl Iterator<Item = &Leg> {
        self.batches.iter().flat_map(|batch| batch.legs.iter())
    }

    /// Total number of scheduled legs across all batches.
    pub fn len(&self) -> usize {
        self.batches.iter().map(|batch| batch.legs.len()).sum()
    }

    /// Whether no legs have been scheduled.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
