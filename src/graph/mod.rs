//! In-memory graph — the adjacency store and the rules enforced on top of it.

pub mod adjacency;
pub mod builder;
pub mod labeled_graph;

pub use adjacency::{AdjacencyStore, Neighbors};
pub use builder::GraphBuilder;
pub use labeled_graph::Graph;
