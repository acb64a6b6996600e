//! All data types for the labeled-graph library.

pub mod edge;
pub mod error;
pub mod header;

use std::fmt::Display;
use std::hash::Hash;

pub use edge::Edge;
pub use error::{GraphError, GraphResult, ParseWarning};
pub use header::GraphKind;

/// Weight stored for every edge of an unweighted graph, and for weighted
/// edges whose weight is omitted or unreadable.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Capability required of a vertex label.
///
/// `Ord` is only consulted to report each undirected edge once during
/// enumeration. `Hash` keys the adjacency store and `Display` renders the
/// label in messages and dumps.
pub trait Label: Ord + Hash + Clone + Display {}

impl<T: Ord + Hash + Clone + Display> Label for T {}
