//! Phase 1 tests: graph core invariants and mutation rules.

use labeled_graph::graph::{Graph, GraphBuilder};
use labeled_graph::types::{Edge, GraphError, GraphKind, DEFAULT_WEIGHT};

fn graph_with(kind: GraphKind, vertices: &[&str]) -> Graph<String> {
    let mut graph = Graph::new(kind);
    for v in vertices {
        graph.add_vertex(v.to_string());
    }
    graph
}

fn s(label: &str) -> String {
    label.to_string()
}

// ==================== Vertex Tests ====================

#[test]
fn test_add_vertex_idempotent() {
    let mut graph: Graph<String> = Graph::default();
    assert!(graph.add_vertex(s("A")));
    graph.add_vertex(s("B"));
    graph.add_edge(s("A"), s("B"), 1.0).unwrap();
    let before = graph.clone();

    assert!(!graph.add_vertex(s("A")));
    assert_eq!(graph, before);
    assert_eq!(graph.vertex_count(), 2);
    assert!(graph.contains_edge(&s("A"), &s("B")));
}

#[test]
fn test_contains_vertex() {
    let graph = graph_with(GraphKind::default(), &["A"]);
    assert!(graph.contains_vertex(&s("A")));
    assert!(!graph.contains_vertex(&s("Z")));
}

#[test]
fn test_remove_absent_vertex() {
    let mut graph = graph_with(GraphKind::default(), &["A"]);
    assert!(!graph.remove_vertex(&s("B")));
    assert_eq!(graph.vertex_count(), 1);
}

#[test]
fn test_remove_vertex_cascades_directed() {
    let mut graph = graph_with(GraphKind::new(true, false), &["A", "B", "C"]);
    graph.add_edge(s("A"), s("B"), 1.0).unwrap();
    graph.add_edge(s("C"), s("B"), 1.0).unwrap();
    graph.add_edge(s("B"), s("C"), 1.0).unwrap();
    graph.add_edge(s("B"), s("B"), 1.0).unwrap();

    assert!(graph.remove_vertex(&s("B")));
    assert!(!graph.contains_vertex(&s("B")));
    for (vertex, neighbors) in graph.adjacency() {
        assert!(
            !neighbors.contains_key(&s("B")),
            "{} still points at removed vertex",
            vertex
        );
    }
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_remove_vertex_cascades_undirected() {
    let mut graph = graph_with(GraphKind::new(false, true), &["A", "B", "C"]);
    graph.add_edge(s("A"), s("B"), 2.0).unwrap();
    graph.add_edge(s("B"), s("C"), 3.0).unwrap();
    graph.add_edge(s("A"), s("C"), 4.0).unwrap();

    assert!(graph.remove_vertex(&s("B")));
    assert_eq!(graph.edge_list(), vec![Edge::new(s("A"), s("C"), 4.0)]);
    assert_eq!(graph.neighbors(&s("C")).count(), 1);
}

// ==================== Edge Tests ====================

#[test]
fn test_undirected_add_mirrors_weight() {
    let mut graph = graph_with(GraphKind::new(false, true), &["u", "v"]);
    graph.add_edge(s("u"), s("v"), 7.25).unwrap();
    assert_eq!(graph.weight(&s("u"), &s("v")), Some(7.25));
    assert_eq!(graph.weight(&s("v"), &s("u")), Some(7.25));
}

#[test]
fn test_undirected_remove_clears_both_directions() {
    let mut graph = graph_with(GraphKind::new(false, true), &["u", "v"]);
    graph.add_edge(s("u"), s("v"), 7.25).unwrap();

    assert!(graph.remove_edge(&s("v"), &s("u")));
    assert!(!graph.contains_edge(&s("u"), &s("v")));
    assert!(!graph.contains_edge(&s("v"), &s("u")));
    assert!(!graph.remove_edge(&s("u"), &s("v")));
}

#[test]
fn test_directed_add_never_mirrors() {
    let mut graph = graph_with(GraphKind::new(true, true), &["u", "v"]);
    graph.add_edge(s("u"), s("v"), 2.0).unwrap();
    assert!(graph.contains_edge(&s("u"), &s("v")));
    assert!(!graph.contains_edge(&s("v"), &s("u")));

    graph.add_edge(s("v"), s("u"), 5.0).unwrap();
    assert_eq!(graph.weight(&s("u"), &s("v")), Some(2.0));
    assert_eq!(graph.weight(&s("v"), &s("u")), Some(5.0));

    assert!(graph.remove_edge(&s("u"), &s("v")));
    assert!(graph.contains_edge(&s("v"), &s("u")));
}

#[test]
fn test_unweighted_coerces_weight() {
    let mut graph = graph_with(GraphKind::new(false, false), &["u", "v"]);
    graph.add_edge(s("u"), s("v"), 5.0).unwrap();
    assert_eq!(graph.weight(&s("u"), &s("v")), Some(DEFAULT_WEIGHT));
    assert_eq!(graph.weight(&s("v"), &s("u")), Some(DEFAULT_WEIGHT));

    let mut directed = graph_with(GraphKind::new(true, false), &["u", "v"]);
    directed.add_edge(s("u"), s("v"), -3.0).unwrap();
    assert_eq!(directed.weight(&s("u"), &s("v")), Some(DEFAULT_WEIGHT));
}

#[test]
fn test_add_edge_missing_vertex_leaves_graph_unchanged() {
    let mut graph = graph_with(GraphKind::new(false, true), &["A", "B"]);
    graph.add_edge(s("A"), s("B"), 1.0).unwrap();
    let before = graph.clone();

    match graph.add_edge(s("A"), s("Z"), 1.0) {
        Err(GraphError::VertexNotFound(v)) => assert_eq!(v, "Z"),
        other => panic!("Expected VertexNotFound, got {:?}", other),
    }
    match graph.add_edge(s("Y"), s("A"), 1.0) {
        Err(GraphError::VertexNotFound(v)) => assert_eq!(v, "Y"),
        other => panic!("Expected VertexNotFound, got {:?}", other),
    }
    assert_eq!(graph, before);
    assert_eq!(graph.vertex_count(), 2);
}

#[test]
fn test_duplicate_edge_rejected() {
    let mut graph = graph_with(GraphKind::new(true, true), &["A", "B"]);
    graph.add_edge(s("A"), s("B"), 1.0).unwrap();
    match graph.add_edge(s("A"), s("B"), 9.0) {
        Err(GraphError::DuplicateEdge { from, to }) => {
            assert_eq!(from, "A");
            assert_eq!(to, "B");
        }
        other => panic!("Expected DuplicateEdge, got {:?}", other),
    }
    assert_eq!(graph.weight(&s("A"), &s("B")), Some(1.0));
}

#[test]
fn test_undirected_reverse_add_is_duplicate() {
    let mut graph = graph_with(GraphKind::new(false, false), &["A", "B"]);
    graph.add_edge(s("A"), s("B"), 1.0).unwrap();
    assert!(matches!(
        graph.add_edge(s("B"), s("A"), 1.0),
        Err(GraphError::DuplicateEdge { .. })
    ));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_self_loop_undirected() {
    let mut graph = graph_with(GraphKind::new(false, true), &["A", "B"]);
    graph.add_edge(s("A"), s("A"), 3.0).unwrap();
    assert_eq!(graph.edge_list(), vec![Edge::new(s("A"), s("A"), 3.0)]);
    assert!(matches!(
        graph.add_edge(s("A"), s("A"), 3.0),
        Err(GraphError::DuplicateEdge { .. })
    ));
    assert!(graph.remove_edge(&s("A"), &s("A")));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_remove_edge_from_absent_vertex() {
    let mut graph = graph_with(GraphKind::default(), &["A"]);
    assert!(!graph.remove_edge(&s("Q"), &s("A")));
    assert!(!graph.remove_edge(&s("A"), &s("Q")));
}

// ==================== Enumeration Tests ====================

#[test]
fn test_edge_list_undirected_scenario() {
    let mut graph = graph_with(GraphKind::new(false, false), &["A", "B", "C"]);
    graph.add_edge(s("A"), s("B"), 1.0).unwrap();
    graph.add_edge(s("B"), s("C"), 1.0).unwrap();

    assert_eq!(
        graph.edge_list(),
        vec![
            Edge::new(s("A"), s("B"), 1.0),
            Edge::new(s("B"), s("C"), 1.0),
        ]
    );
}

#[test]
fn test_edge_list_undirected_reports_lower_label_first() {
    let mut graph = graph_with(GraphKind::new(false, false), &["C", "B", "A"]);
    graph.add_edge(s("C"), s("A"), 1.0).unwrap();
    let edges = graph.edge_list();
    assert_eq!(edges, vec![Edge::new(s("A"), s("C"), 1.0)]);
}

#[test]
fn test_edge_list_directed_reports_every_entry() {
    let mut graph: Graph<u32> = Graph::with_flags(true, true);
    for v in 1..=3 {
        graph.add_vertex(v);
    }
    graph.add_edge(3, 1, 0.5).unwrap();
    graph.add_edge(1, 3, 1.5).unwrap();
    graph.add_edge(2, 2, 2.5).unwrap();

    let mut edges = graph.edge_list();
    edges.sort_by(|a, b| (a.from, a.to).cmp(&(b.from, b.to)));
    assert_eq!(
        edges,
        vec![Edge::new(1, 3, 1.5), Edge::new(2, 2, 2.5), Edge::new(3, 1, 0.5)]
    );
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_neighbors_of_absent_vertex_is_empty() {
    let graph: Graph<u32> = Graph::default();
    assert_eq!(graph.neighbors(&42).count(), 0);
}

// ==================== Copy / Builder Tests ====================

#[test]
fn test_clone_is_deep() {
    let mut graph = graph_with(GraphKind::new(true, true), &["A", "B"]);
    graph.add_edge(s("A"), s("B"), 2.0).unwrap();

    let mut copy = graph.clone();
    assert_eq!(copy.kind(), graph.kind());
    copy.remove_edge(&s("A"), &s("B"));
    copy.add_vertex(s("C"));

    assert!(graph.contains_edge(&s("A"), &s("B")));
    assert!(!graph.contains_vertex(&s("C")));
}

#[test]
fn test_builder_matches_manual_construction() {
    let mut builder = GraphBuilder::new(GraphKind::new(false, true));
    builder
        .vertices([s("A"), s("B"), s("C")])
        .edge(s("A"), s("B"), 2.0)
        .edge(s("B"), s("C"), 3.0);
    let built = builder.build().unwrap();

    let mut manual = graph_with(GraphKind::new(false, true), &["A", "B", "C"]);
    manual.add_edge(s("A"), s("B"), 2.0).unwrap();
    manual.add_edge(s("C"), s("B"), 3.0).unwrap();

    assert_eq!(built, manual);
}

#[test]
fn test_describe_lists_isolated_vertices() {
    let mut graph = graph_with(GraphKind::new(true, false), &["A", "B", "C"]);
    graph.add_edge(s("A"), s("B"), 1.0).unwrap();
    let text = graph.describe();
    assert!(text.starts_with("Graph (Directed: true, Weighted: false)\nVertices: 3\n"));
    assert!(text.contains("A: B\n"));
    assert!(text.contains("B: (isolated)\n"));
    assert!(text.contains("C: (isolated)\n"));
    assert_eq!(text, graph.to_string());
}
