//! Error types for the labeled-graph library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// All errors that can occur in the labeled-graph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// An edge operation referenced a vertex that is not in the graph.
    #[error("Vertex {0} does not exist")]
    VertexNotFound(String),

    /// The edge already exists in the direction being added.
    #[error("Edge from {from} to {to} already exists")]
    DuplicateEdge { from: String, to: String },

    /// Mirror entry of an undirected edge present without its forward entry.
    #[error("Edge from {to} to {from} already exists (consistency error)")]
    ConsistencyError { from: String, to: String },

    /// Source file does not exist.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Text source is structurally unusable (missing header or vertex line).
    #[error("Invalid file format: {0}")]
    FileFormat(String),

    /// A token could not be converted into a vertex label.
    #[error("Invalid vertex label: {0:?}")]
    InvalidLabel(String),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// A non-fatal problem with a single line of a parsed graph source.
///
/// The line was skipped (or partially applied, for adjacency lines) and
/// parsing continued with the next one.
#[derive(Debug)]
pub struct ParseWarning {
    /// 1-based line number in the original text, blank lines included.
    pub line: usize,
    /// The error that rejected the line.
    pub error: GraphError,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.error)
    }
}
