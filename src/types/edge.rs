//! Undirected connections between sites, as drawn on the map.

use serde::Serialize;
use std::fmt;

/// Order-insensitive identity of an edge: the two site names, sorted.
///
/// # Examples
///
/// ```
/// use solarnet::EdgeId;
///
/// assert_eq!(EdgeId::new("Utrecht", "Arnhem"), EdgeId::new("Arnhem", "Utrecht"));
/// assert_eq!(EdgeId::new("Utrecht", "Arnhem").to_string(), "Arnhem-Utrecht");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct EdgeId {
    low: String,
    high: String,
}

impl EdgeId {
    /// Builds the identity of the edge between `a` and `b`, in either order.
    pub fn new(a: &str, b: &str) -> Self {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        Self {
            low: low.to_string(),
            high: high.to_string(),
        }
    }

    /// The lexicographically smaller endpoint.
    pub fn low(&self) -> &str {
        &self.low
    }

    /// The lexicographically larger endpoint.
    pub fn high(&self) -> &str {
        &self.high
    }
}

/// Human-readable `low-high` label. Not unique when site names contain `-`:
/// `{"A-B", "C"}` and `{"A", "B-C"}` both read `A-B-C`. Compare `EdgeId`s, or use
/// [`EdgeId::low`] and [`EdgeId::high`], when identity matters.
impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

/// A line between two sites.
///
/// `a` is the site whose neighbor list produced the edge first, `b` the neighbor.
/// `geometry` holds `(lon, lat)` pairs for `a` then `b`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    /// Order-insensitive identity of the pair.
    pub id: EdgeId,
    /// Site whose neighbor list declared the edge first.
    pub a: String,
    /// The neighbor named by `a`.
    pub b: String,
    /// `(lon, lat)` of `a`, then of `b`.
    pub geometry: [(f64, f64); 2],
    /// Great-circle length in kilometers.
    pub length_km: f64,
}
