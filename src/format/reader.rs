//! Reads the line-oriented text format into an in-memory graph.

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;
use std::str::FromStr;

use crate::graph::Graph;
use crate::types::error::{GraphError, GraphResult, ParseWarning};
use crate::types::{GraphKind, Label, DEFAULT_WEIGHT};

/// A graph parsed from text, plus the lines that were rejected on the way.
#[derive(Debug)]
pub struct Parsed<V: Label> {
    /// Graph built from every line that was accepted.
    pub graph: Graph<V>,
    /// One entry per rejected line (or adjacency entry), in input order.
    pub warnings: Vec<ParseWarning>,
}

impl<V: Label> Parsed<V> {
    /// Drop the warnings and keep the graph.
    pub fn into_graph(self) -> Graph<V> {
        self.graph
    }

    /// True when every line was accepted.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Reader for graph text files.
///
/// Layout:
/// ```text
/// <DIRECTED|UNDIRECTED> <WEIGHTED|UNWEIGHTED>
/// <vertex1> <vertex2> ... <vertexN>
/// <from> <to> [<weight>]
/// <label>: <n1>[(<w1>)] <n2>[(<w2>)] ...
/// ```
/// Blank lines are ignored everywhere.
pub struct GraphReader;

impl GraphReader {
    /// Read a graph file.
    pub fn read_from_file<V>(path: &Path) -> GraphResult<Parsed<V>>
    where
        V: Label + FromStr,
    {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => GraphError::FileNotFound(path.to_path_buf()),
            _ => GraphError::Io(e),
        })?;
        let parsed = Self::read_from(&mut BufReader::new(file))?;
        log::debug!(
            "Loaded {} ({} vertices, {} edges, {} warnings)",
            path.display(),
            parsed.graph.vertex_count(),
            parsed.graph.edge_count(),
            parsed.warnings.len()
        );
        Ok(parsed)
    }

    /// Read from any reader.
    pub fn read_from<V>(reader: &mut impl Read) -> GraphResult<Parsed<V>>
    where
        V: Label + FromStr,
    {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    /// Parse graph text.
    ///
    /// Fails only when the header or vertex line is missing. Every other
    /// problem rejects just the offending line and is reported in
    /// [`Parsed::warnings`].
    pub fn parse<V>(text: &str) -> GraphResult<Parsed<V>>
    where
        V: Label + FromStr,
    {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line))
            .filter(|(_, line)| !line.trim().is_empty());

        let (Some((_, header)), Some((vertex_line_no, vertex_line))) = (lines.next(), lines.next())
        else {
            return Err(GraphError::FileFormat(
                "too few lines, expected a header and a vertex line".to_string(),
            ));
        };

        let mut parser = LineParser {
            graph: Graph::new(GraphKind::from_header_line(header)),
            warnings: Vec::new(),
        };

        for token in vertex_line.split_whitespace() {
            if let Some(vertex) = parser.label(vertex_line_no, token) {
                parser.graph.add_vertex(vertex);
            }
        }

        for (line_no, line) in lines {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() < 2 {
                continue;
            }
            // A first token that names a vertex as written starts an edge
            // line, even when the label itself ends in ':'.
            match tokens[0].strip_suffix(':') {
                Some(source) if !parser.is_vertex(tokens[0]) => {
                    parser.adjacency_line(line_no, source, &tokens[1..])
                }
                _ => parser.edge_line(line_no, &tokens),
            }
        }

        Ok(Parsed {
            graph: parser.graph,
            warnings: parser.warnings,
        })
    }
}

struct LineParser<V: Label> {
    graph: Graph<V>,
    warnings: Vec<ParseWarning>,
}

impl<V: Label + FromStr> LineParser<V> {
    /// `from to [weight]`
    fn edge_line(&mut self, line: usize, tokens: &[&str]) {
        let (Some(from), Some(to)) = (self.label(line, tokens[0]), self.label(line, tokens[1]))
        else {
            return;
        };
        let weight = tokens.get(2).map_or(DEFAULT_WEIGHT, |t| parse_weight(t));
        if let Err(error) = self.graph.add_edge(from, to, weight) {
            self.warn(line, error);
        }
    }

    /// `label: n1[(w1)] n2[(w2)] ...`
    ///
    /// Weight annotations are only read in weighted graphs; otherwise the
    /// whole entry is the neighbor label.
    fn adjacency_line(&mut self, line: usize, source: &str, entries: &[&str]) {
        let Some(from) = self.label(line, source) else {
            return;
        };
        for entry in entries {
            let (name, weight) = if self.graph.is_weighted() {
                split_entry(entry)
            } else {
                (*entry, DEFAULT_WEIGHT)
            };
            let Some(to) = self.label(line, name) else {
                continue;
            };
            // Undirected dumps list every edge under both endpoints.
            if !self.graph.is_directed() && self.is_listed(&from, &to, weight) {
                continue;
            }
            if let Err(error) = self.graph.add_edge(from.clone(), to, weight) {
                self.warn(line, error);
            }
        }
    }

    fn is_vertex(&self, token: &str) -> bool {
        token
            .parse::<V>()
            .is_ok_and(|vertex| self.graph.contains_vertex(&vertex))
    }

    /// Whether `from -> to` is already stored with `weight`. NaN matches NaN.
    fn is_listed(&self, from: &V, to: &V, weight: f64) -> bool {
        self.graph
            .weight(from, to)
            .is_some_and(|stored| stored == weight || (stored.is_nan() && weight.is_nan()))
    }

    fn label(&mut self, line: usize, token: &str) -> Option<V> {
        match token.parse::<V>() {
            Ok(vertex) => Some(vertex),
            Err(_) => {
                self.warn(line, GraphError::InvalidLabel(token.to_string()));
                None
            }
        }
    }

    fn warn(&mut self, line: usize, error: GraphError) {
        let warning = ParseWarning { line, error };
        log::warn!("Skipping {}", warning);
        self.warnings.push(warning);
    }
}

/// Parse a weight token, falling back to the default weight.
fn parse_weight(token: &str) -> f64 {
    token.parse().unwrap_or(DEFAULT_WEIGHT)
}

/// Split `name(weight)` into its parts. A bare name carries the default
/// weight.
fn split_entry(entry: &str) -> (&str, f64) {
    if let Some(inner) = entry.strip_suffix(')') {
        if let Some(open) = inner.rfind('(') {
            if open > 0 {
                return (&inner[..open], parse_weight(&inner[open + 1..]));
            }
        }
    }
    (entry, DEFAULT_WEIGHT)
}
