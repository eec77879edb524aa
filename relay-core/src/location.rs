use std::fmt;

/// Opaque identifier of a node in the transport network.
///
/// A location has no internal structure; validity is only decidable through
/// the owning network's membership test
/// ([`Network::contains`](crate::Network::contains)).
///
/// # Examples
/// ```
/// use relay_core::Location;
///
/// let dock = Location(7);
/// assert_eq!(dock.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location(
    /// Numeric node id, meaningful only to the owning network.
    pub u64,
);

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
