//! The edge value returned by enumeration.

use serde::Serialize;

use super::DEFAULT_WEIGHT;

/// A directed relationship from one vertex to another, with its weight.
///
/// In an undirected graph an edge and its reverse denote the same
/// relationship; enumeration reports it once, with `from <= to`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge<V> {
    /// Origin vertex.
    pub from: V,
    /// Destination vertex.
    pub to: V,
    /// Edge weight (always 1.0 in an unweighted graph).
    pub weight: f64,
}

impl<V> Edge<V> {
    /// Create a new edge.
    pub fn new(from: V, to: V, weight: f64) -> Self {
        Self { from, to, weight }
    }

    /// Create an edge carrying the default weight.
    pub fn unweighted(from: V, to: V) -> Self {
        Self::new(from, to, DEFAULT_WEIGHT)
    }
}

impl<V: std::fmt::Display> std::fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} : {}", self.from, self.to, self.weight)
    }
}
