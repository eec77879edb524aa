use thiserror::Error;

use crate::Location;

/// Errors from [`crate::network::Network`] queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// No route exists between the two locations.
    ///
    /// Travel infeasibility invalidates the whole scheduling request;
    /// schedulers propagate this error rather than routing around it.
    #[error("no path from {from} to {to}")]
    NoPath {
        /// Where the requested path starts.
        from: Location,
        /// The unreachable destination.
        to: Location,
    },
}
