//! labeled-graph — an in-memory labeled graph with a tolerant text codec.
//!
//! Graphs are directed or undirected, weighted or unweighted, and keep
//! mirrored adjacency entries consistent for undirected edges. They can be
//! dumped to and loaded from a line-oriented text format in two layouts
//! (edge list, adjacency list).

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{GraphReader, GraphWriter, Parsed, SaveFormat};
pub use graph::{AdjacencyStore, Graph, GraphBuilder};
pub use types::{
    Edge, GraphError, GraphKind, GraphResult, Label, ParseWarning, DEFAULT_WEIGHT,
};
