//! Writes in-memory graphs to the line-oriented text format.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::graph::Graph;
use crate::types::error::GraphResult;
use crate::types::Label;

/// Body layout of a dumped graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum SaveFormat {
    /// One `from to [weight]` line per enumerated edge.
    #[default]
    EdgeList,
    /// One `label: n1[(w1)] n2[(w2)] ...` line per vertex.
    AdjacencyList,
}

impl SaveFormat {
    /// Return a human-readable name for this layout.
    pub fn name(&self) -> &'static str {
        match self {
            Self::EdgeList => "edge-list",
            Self::AdjacencyList => "adjacency-list",
        }
    }
}

impl fmt::Display for SaveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Writer for graph text files.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphWriter {
    format: SaveFormat,
}

impl GraphWriter {
    /// Create a new writer producing the given layout.
    pub fn new(format: SaveFormat) -> Self {
        Self { format }
    }

    /// Render a graph to a string.
    pub fn serialize<V: Label>(&self, graph: &Graph<V>) -> String {
        self.dump(graph).to_string()
    }

    /// Write a graph to a file, creating or truncating it.
    pub fn write_to_file<V: Label>(&self, graph: &Graph<V>, path: &Path) -> GraphResult<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(graph, &mut writer)?;
        log::debug!(
            "Saved {} as {} ({} vertices, {} edges)",
            path.display(),
            self.format,
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(())
    }

    /// Write a graph to any writer.
    pub fn write_to<V: Label>(&self, graph: &Graph<V>, writer: &mut impl Write) -> GraphResult<()> {
        write!(writer, "{}", self.dump(graph))?;
        writer.flush()?;
        Ok(())
    }

    /// A displayable view of `graph` in this writer's layout.
    pub fn dump<'a, V: Label>(&self, graph: &'a Graph<V>) -> Dump<'a, V> {
        Dump {
            graph,
            format: self.format,
        }
    }
}

/// Display adapter that renders a graph in one layout.
pub struct Dump<'a, V: Label> {
    graph: &'a Graph<V>,
    format: SaveFormat,
}

impl<V: Label> fmt::Display for Dump<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let graph = self.graph;
        let weighted = graph.is_weighted();

        writeln!(f, "{}", graph.kind())?;
        for (i, vertex) in graph.vertices().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", vertex)?;
        }
        writeln!(f)?;

        match self.format {
            SaveFormat::EdgeList => {
                for edge in graph.edge_list() {
                    write!(f, "{} {}", edge.from, edge.to)?;
                    if weighted {
                        write!(f, " {}", edge.weight)?;
                    }
                    writeln!(f)?;
                }
            }
            SaveFormat::AdjacencyList => {
                for (vertex, neighbors) in graph.adjacency() {
                    write!(f, "{}", vertex)?;
                    if !neighbors.is_empty() {
                        write!(f, ":")?;
                        for (neighbor, weight) in neighbors {
                            if weighted {
                                write!(f, " {}({})", neighbor, weight)?;
                            } else {
                                write!(f, " {}", neighbor)?;
                            }
                        }
                    }
                    writeln!(f)?;
                }
            }
        }
        Ok(())
    }
}
