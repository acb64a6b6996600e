//! Graph kind flags and the header line of the text format.

use std::fmt;

/// Header token for a directed graph.
pub const DIRECTED_TOKEN: &str = "DIRECTED";
/// Header token for an undirected graph.
pub const UNDIRECTED_TOKEN: &str = "UNDIRECTED";
/// Header token for a weighted graph.
pub const WEIGHTED_TOKEN: &str = "WEIGHTED";
/// Header token for an unweighted graph.
pub const UNWEIGHTED_TOKEN: &str = "UNWEIGHTED";

/// The two flags fixed when a graph is constructed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GraphKind {
    /// Edges are one-way when true; mirrored when false.
    pub directed: bool,
    /// Edge weights are kept when true; forced to 1.0 when false.
    pub weighted: bool,
}

impl GraphKind {
    /// Create a kind from explicit flags.
    pub fn new(directed: bool, weighted: bool) -> Self {
        Self { directed, weighted }
    }

    /// Parse a header line.
    ///
    /// Tokens are matched case-insensitively and in any order. Unknown
    /// tokens are ignored, so a line with no recognized token yields an
    /// undirected, unweighted kind.
    pub fn from_header_line(line: &str) -> Self {
        let mut kind = Self::default();
        for token in line.split_whitespace() {
            if token.eq_ignore_ascii_case(DIRECTED_TOKEN) {
                kind.directed = true;
            } else if token.eq_ignore_ascii_case(WEIGHTED_TOKEN) {
                kind.weighted = true;
            }
        }
        kind
    }

    /// The `DIRECTED`/`UNDIRECTED` header token.
    pub fn direction_token(&self) -> &'static str {
        if self.directed {
            DIRECTED_TOKEN
        } else {
            UNDIRECTED_TOKEN
        }
    }

    /// The `WEIGHTED`/`UNWEIGHTED` header token.
    pub fn weight_token(&self) -> &'static str {
        if self.weighted {
            WEIGHTED_TOKEN
        } else {
            UNWEIGHTED_TOKEN
        }
    }
}

/// Formats as the header line, e.g. `DIRECTED UNWEIGHTED`.
impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.direction_token(), self.weight_token())
    }
}
