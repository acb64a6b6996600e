//! Fluent API for building Graph instances.

use crate::types::{Edge, GraphKind, GraphResult, Label, DEFAULT_WEIGHT};

use super::Graph;

/// Fluent builder for constructing a Graph from a vertex set and edges.
///
/// Edges are applied in the order they were given, after every vertex has
/// been added. The first rejected edge aborts the build.
pub struct GraphBuilder<V: Label> {
    kind: GraphKind,
    vertices: Vec<V>,
    edges: Vec<Edge<V>>,
}

impl<V: Label> GraphBuilder<V> {
    /// Create a new builder for a graph of the given kind.
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a vertex. Duplicates are ignored at build time.
    pub fn vertex(&mut self, vertex: V) -> &mut Self {
        self.vertices.push(vertex);
        self
    }

    /// Add several vertices.
    pub fn vertices(&mut self, vertices: impl IntoIterator<Item = V>) -> &mut Self {
        self.vertices.extend(vertices);
        self
    }

    /// Add an edge with an explicit weight.
    pub fn edge(&mut self, from: V, to: V, weight: f64) -> &mut Self {
        self.edges.push(Edge::new(from, to, weight));
        self
    }

    /// Add an edge with the default weight.
    pub fn link(&mut self, from: V, to: V) -> &mut Self {
        self.edge(from, to, DEFAULT_WEIGHT)
    }

    /// Build the final Graph.
    pub fn build(self) -> GraphResult<Graph<V>> {
        let mut graph = Graph::new(self.kind);
        for vertex in self.vertices {
            graph.add_vertex(vertex);
        }
        for edge in self.edges {
            graph.add_edge(edge.from, edge.to, edge.weight)?;
        }
        Ok(graph)
    }
}

impl<V: Label> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new(GraphKind::default())
    }
}
