//! Query the transport network for paths and distances.
//!
//! The [`Network`] trait abstracts the weighted-graph backend supplying
//! shortest paths, route pricing and location membership. Schedulers treat
//! it as a synchronous, side-effect-free oracle; the only error it surfaces
//! is [`NetworkError::NoPath`] when a destination is unreachable.

mod error;
mod oracle;

pub use error::NetworkError;
pub use oracle::{Network, ShortestPath};
