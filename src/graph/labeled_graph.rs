//! Core graph structure — direction and weighting rules over the adjacency store.

use std::fmt;

use crate::types::{Edge, GraphError, GraphKind, GraphResult, Label, DEFAULT_WEIGHT};

use super::adjacency::{AdjacencyStore, Neighbors};

/// An in-memory labeled graph, directed or undirected, weighted or not.
///
/// Every public mutation leaves the graph in a state where:
/// - each neighbor entry names an existing vertex,
/// - in an undirected graph `u -> v` and `v -> u` exist together with the
///   same weight (a self-loop is stored once),
/// - in an unweighted graph every weight is [`DEFAULT_WEIGHT`],
/// - no entry appears twice in the same direction.
///
/// Cloning deep-copies all adjacency entries and keeps the flags. Equality
/// compares flags, vertex sets and weighted edges, ignoring enumeration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph<V: Label> {
    kind: GraphKind,
    store: AdjacencyStore<V>,
}

impl<V: Label> Graph<V> {
    /// Create a new empty graph.
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            store: AdjacencyStore::new(),
        }
    }

    /// Create an empty graph from explicit flags.
    pub fn with_flags(directed: bool, weighted: bool) -> Self {
        Self::new(GraphKind::new(directed, weighted))
    }

    /// The flags this graph was built with.
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Whether edges are one-way.
    pub fn is_directed(&self) -> bool {
        self.kind.directed
    }

    /// Whether edge weights are kept.
    pub fn is_weighted(&self) -> bool {
        self.kind.weighted
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.store.len()
    }

    /// Number of edges, counting each undirected edge once.
    pub fn edge_count(&self) -> usize {
        self.enumerate().count()
    }

    /// Whether `vertex` is in the graph.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.store.contains(vertex)
    }

    /// Whether the edge `from -> to` exists. For an undirected graph this is
    /// the same as asking for `to -> from`.
    pub fn contains_edge(&self, from: &V, to: &V) -> bool {
        self.store.has_entry(from, to)
    }

    /// Weight of the edge `from -> to`.
    pub fn weight(&self, from: &V, to: &V) -> Option<f64> {
        self.store.weight(from, to)
    }

    /// Vertices in enumeration order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.store.vertices()
    }

    /// Outgoing neighbors of `vertex` with their weights. Empty when the
    /// vertex is absent.
    pub fn neighbors<'a>(&'a self, vertex: &V) -> impl Iterator<Item = (&'a V, f64)> + 'a {
        self.store
            .neighbors(vertex)
            .into_iter()
            .flat_map(|n| n.iter().map(|(v, &w)| (v, w)))
    }

    /// Iterate over `(vertex, neighbors)` in enumeration order.
    pub fn adjacency(&self) -> impl Iterator<Item = (&V, &Neighbors<V>)> {
        self.store.iter()
    }

    /// Add a vertex with no neighbors. Returns false if it already exists.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        self.store.insert_vertex(vertex)
    }

    /// Remove a vertex and every edge touching it. Returns false if absent.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        self.store.remove_vertex(vertex)
    }

    /// Add an edge `from -> to`.
    ///
    /// In an unweighted graph `weight` is replaced by [`DEFAULT_WEIGHT`]. In
    /// an undirected graph the mirror entry is written too, unless the edge
    /// is a self-loop. Nothing is written when an error is returned.
    pub fn add_edge(&mut self, from: V, to: V, weight: f64) -> GraphResult<()> {
        for vertex in [&from, &to] {
            if !self.store.contains(vertex) {
                return Err(GraphError::VertexNotFound(vertex.to_string()));
            }
        }

        let weight = if self.kind.weighted {
            weight
        } else {
            DEFAULT_WEIGHT
        };

        if self.store.has_entry(&from, &to) {
            return Err(GraphError::DuplicateEdge {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        // The mirror can only exist alone if the store was corrupted.
        if self.mirrors(&from, &to) && self.store.has_entry(&to, &from) {
            return Err(GraphError::ConsistencyError {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        self.link(from, to, weight);
        Ok(())
    }

    /// Remove the edge `from -> to` (and its mirror when undirected).
    /// Returns false if `from` is absent or the edge does not exist.
    pub fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        if !self.store.clear_entry(from, to) {
            return false;
        }
        if self.mirrors(from, to) {
            self.store.clear_entry(to, from);
        }
        true
    }

    /// Every edge once.
    ///
    /// Directed graphs report each entry. Undirected graphs report only the
    /// entry with `from <= to`, so mirrored pairs and self-loops appear once.
    pub fn edge_list(&self) -> Vec<Edge<V>> {
        self.enumerate()
            .map(|(from, to, weight)| Edge::new(from.clone(), to.clone(), weight))
            .collect()
    }

    /// Human-readable dump: flags, vertex count, then one line per vertex.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    fn enumerate(&self) -> impl Iterator<Item = (&V, &V, f64)> {
        let directed = self.kind.directed;
        self.store.iter().flat_map(move |(from, neighbors)| {
            neighbors
                .iter()
                .filter(move |(to, _)| directed || from <= *to)
                .map(move |(to, &weight)| (from, to, weight))
        })
    }

    /// Whether an entry `from -> to` needs a mirror `to -> from`.
    fn mirrors(&self, from: &V, to: &V) -> bool {
        !self.kind.directed && from != to
    }

    /// Write the forward entry and, when needed, its mirror. Callers have
    /// already checked that both endpoints exist.
    fn link(&mut self, from: V, to: V, weight: f64) {
        if self.mirrors(&from, &to) {
            self.store.set_entry(&to, from.clone(), weight);
        }
        self.store.set_entry(&from, to, weight);
    }
}

impl<V: Label> Default for Graph<V> {
    /// An empty undirected, unweighted graph.
    fn default() -> Self {
        Self::new(GraphKind::default())
    }
}

impl<V: Label> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Graph (Directed: {}, Weighted: {})",
            self.kind.directed, self.kind.weighted
        )?;
        writeln!(f, "Vertices: {}", self.store.len())?;
        for (vertex, neighbors) in self.store.iter() {
            write!(f, "{}: ", vertex)?;
            if neighbors.is_empty() {
                writeln!(f, "(isolated)")?;
                continue;
            }
            for (i, (neighbor, weight)) in neighbors.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                if self.kind.weighted {
                    write!(f, "{}({})", neighbor, weight)?;
                } else {
                    write!(f, "{}", neighbor)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
