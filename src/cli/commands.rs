//! CLI command implementations.
//!
//! Every command loads the graph file, calls core operations, and writes the
//! file back only when the graph changed.

use std::path::Path;

use crate::format::{GraphReader, GraphWriter, SaveFormat};
use crate::graph::Graph;
use crate::types::{GraphKind, GraphResult};

/// Vertex label type used by the command line.
pub type CliGraph = Graph<String>;

fn load(path: &Path) -> GraphResult<CliGraph> {
    let parsed = GraphReader::read_from_file::<String>(path)?;
    if !parsed.is_clean() {
        eprintln!(
            "{}: {} line(s) skipped while loading",
            path.display(),
            parsed.warnings.len()
        );
    }
    Ok(parsed.into_graph())
}

fn save(graph: &CliGraph, path: &Path, layout: SaveFormat) -> GraphResult<()> {
    GraphWriter::new(layout).write_to_file(graph, path)
}

/// Create a new graph file.
///
/// At least one vertex is required: a file without a vertex line cannot be
/// loaded back.
pub fn cmd_create(
    path: &Path,
    kind: GraphKind,
    vertices: &[String],
    layout: SaveFormat,
    json: bool,
) -> GraphResult<()> {
    let mut graph = CliGraph::new(kind);
    for vertex in vertices {
        graph.add_vertex(vertex.clone());
    }
    save(&graph, path, layout)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "file": path.display().to_string(),
                "directed": kind.directed,
                "weighted": kind.weighted,
                "vertices": graph.vertex_count(),
            })
        );
    } else {
        println!(
            "Created {} ({}, {} vertices)",
            path.display(),
            kind,
            graph.vertex_count()
        );
    }
    Ok(())
}

/// Print the adjacency of a graph file.
pub fn cmd_show(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load(path)?;

    if json {
        let adjacency: serde_json::Map<String, serde_json::Value> = graph
            .adjacency()
            .map(|(vertex, neighbors)| {
                let entries: serde_json::Map<String, serde_json::Value> = neighbors
                    .iter()
                    .map(|(n, w)| (n.clone(), serde_json::json!(w)))
                    .collect();
                (vertex.clone(), serde_json::Value::Object(entries))
            })
            .collect();
        let info = serde_json::json!({
            "directed": graph.is_directed(),
            "weighted": graph.is_weighted(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "adjacency": adjacency,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        print!("{}", graph.describe());
    }
    Ok(())
}

/// Add one or more vertices.
pub fn cmd_add_vertex(
    path: &Path,
    labels: &[String],
    layout: SaveFormat,
    json: bool,
) -> GraphResult<()> {
    let mut graph = load(path)?;
    let mut added = Vec::new();
    let mut existing = Vec::new();
    for label in labels {
        if graph.add_vertex(label.clone()) {
            added.push(label.as_str());
        } else {
            existing.push(label.as_str());
        }
    }
    if !added.is_empty() {
        save(&graph, path, layout)?;
    }

    if json {
        println!(
            "{}",
            serde_json::json!({"added": added, "existing": existing})
        );
    } else {
        for label in &added {
            println!("Added vertex {}", label);
        }
        for label in &existing {
            println!("Vertex {} already exists", label);
        }
    }
    Ok(())
}

/// Remove a vertex and its edges.
pub fn cmd_remove_vertex(
    path: &Path,
    label: &str,
    layout: SaveFormat,
    json: bool,
) -> GraphResult<()> {
    let mut graph = load(path)?;
    let removed = graph.remove_vertex(&label.to_string());
    if removed {
        save(&graph, path, layout)?;
    }

    if json {
        println!(
            "{}",
            serde_json::json!({"vertex": label, "removed": removed})
        );
    } else if removed {
        println!("Removed vertex {}", label);
    } else {
        println!("Vertex {} not found", label);
    }
    Ok(())
}

/// Add an edge.
pub fn cmd_add_edge(
    path: &Path,
    from: &str,
    to: &str,
    weight: f64,
    layout: SaveFormat,
    json: bool,
) -> GraphResult<()> {
    let mut graph = load(path)?;
    graph.add_edge(from.to_string(), to.to_string(), weight)?;
    save(&graph, path, layout)?;

    let stored = graph
        .weight(&from.to_string(), &to.to_string())
        .unwrap_or(weight);
    let arrow = if graph.is_directed() { "->" } else { "--" };
    if json {
        println!(
            "{}",
            serde_json::json!({"from": from, "to": to, "weight": stored})
        );
    } else if graph.is_weighted() {
        println!("Added edge {} {} {} ({})", from, arrow, to, stored);
    } else {
        println!("Added edge {} {} {}", from, arrow, to);
    }
    Ok(())
}

/// Remove an edge.
pub fn cmd_remove_edge(
    path: &Path,
    from: &str,
    to: &str,
    layout: SaveFormat,
    json: bool,
) -> GraphResult<()> {
    let mut graph = load(path)?;
    let removed = graph.remove_edge(&from.to_string(), &to.to_string());
    if removed {
        save(&graph, path, layout)?;
    }

    if json {
        println!(
            "{}",
            serde_json::json!({"from": from, "to": to, "removed": removed})
        );
    } else if removed {
        println!("Removed edge {} {}", from, to);
    } else {
        println!("No edge from {} to {}", from, to);
    }
    Ok(())
}

/// List every edge once.
pub fn cmd_edges(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load(path)?;
    let edges = graph.edge_list();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&edges).unwrap_or_default()
        );
    } else {
        for edge in &edges {
            println!("{}", edge);
        }
        println!("{} edge(s)", edges.len());
    }
    Ok(())
}

/// Rewrite a graph file in another layout.
pub fn cmd_convert(path: &Path, out: &Path, layout: SaveFormat, json: bool) -> GraphResult<()> {
    let graph = load(path)?;
    save(&graph, out, layout)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "source": path.display().to_string(),
                "output": out.display().to_string(),
                "layout": layout.name(),
            })
        );
    } else {
        println!("Wrote {} as {}", out.display(), layout);
    }
    Ok(())
}
