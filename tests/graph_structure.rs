//! Graph structure tests: labels, edges, neighbors, bounds checking.

use labeled_digraph::graph::{Graph, GraphBuilder};
use labeled_digraph::types::GraphError;

fn is_out_of_bounds<T: std::fmt::Debug>(result: Result<T, GraphError>) -> bool {
    matches!(result, Err(GraphError::IndexOutOfBounds { .. }))
}

#[test]
fn test_set_and_get_label() {
    let mut graph: Graph<&str> = Graph::new(3);
    graph.set_label(0, "A").unwrap();
    graph.set_label(1, "B").unwrap();
    assert_eq!(*graph.get_label(0).unwrap(), "A");
    assert_eq!(*graph.get_label(1).unwrap(), "B");

    graph.set_label(2, "C").unwrap();
    assert_eq!(*graph.get_label(0).unwrap(), "A");
}

#[test]
fn test_unset_label_read_fails() {
    let graph: Graph<&str> = Graph::new(2);
    assert!(matches!(graph.get_label(1), Err(GraphError::LabelNotSet(1))));
}

#[test]
fn test_unset_label_rejected() {
    let mut graph: Graph<&str> = Graph::new(1);
    graph.set_label(0, "A").unwrap();
    let err = graph.set_label(0, None::<&str>).unwrap_err();
    assert!(matches!(err, GraphError::InvalidArgument(_)));
    assert_eq!(*graph.get_label(0).unwrap(), "A");
}

#[test]
fn test_invalid_label_access() {
    let mut graph: Graph<&str> = Graph::new(2);
    assert!(is_out_of_bounds(graph.get_label(2)));
    assert!(is_out_of_bounds(graph.set_label(5, "X")));
}

#[test]
fn test_empty_graph_access() {
    let mut graph: Graph<&str> = Graph::new(0);
    assert_eq!(graph.size(), 0);
    assert!(is_out_of_bounds(graph.set_label(0, "A")));
    assert!(is_out_of_bounds(graph.get_label(0)));
    assert!(is_out_of_bounds(graph.add_edge(0, 0)));
    assert!(is_out_of_bounds(graph.remove_edge(0, 0)));
    assert!(is_out_of_bounds(graph.is_edge(0, 0)));
    assert!(is_out_of_bounds(graph.neighbors(0)));
}

#[test]
fn test_add_and_remove_edge() {
    let mut graph: Graph<&str> = Graph::new(2);
    graph.add_edge(0, 1).unwrap();
    assert!(graph.is_edge(0, 1).unwrap());
    assert!(!graph.is_edge(1, 0).unwrap());

    graph.remove_edge(0, 1).unwrap();
    assert!(!graph.is_edge(0, 1).unwrap());

    // removing again is fine
    graph.remove_edge(0, 1).unwrap();
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_duplicate_edge() {
    let mut graph: Graph<&str> = Graph::new(2);
    graph.add_edge(0, 1).unwrap();
    graph.add_edge(0, 1).unwrap();
    assert!(graph.is_edge(0, 1).unwrap());
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.neighbors(0).unwrap(), vec![1]);
}

#[test]
fn test_add_invalid_edge() {
    let mut graph: Graph<&str> = Graph::new(2);
    let err = graph.add_edge(0, 5).unwrap_err();
    match err {
        GraphError::IndexOutOfBounds { index, size } => {
            assert_eq!(index, 5);
            assert_eq!(size, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
    // nothing was written
    assert!(graph.neighbors(0).unwrap().is_empty());
    assert!(is_out_of_bounds(graph.add_edge(7, 0)));
}

#[test]
fn test_neighbors_ascending() {
    let mut graph: Graph<&str> = Graph::new(5);
    graph.add_edge(2, 4).unwrap();
    graph.add_edge(2, 0).unwrap();
    graph.add_edge(2, 3).unwrap();
    graph.add_edge(2, 2).unwrap();
    assert_eq!(graph.neighbors(2).unwrap(), vec![0, 2, 3, 4]);
    assert!(graph.neighbors(0).unwrap().is_empty());
}

#[test]
fn test_neighbors_match_is_edge() {
    let mut graph: Graph<u8> = Graph::new(6);
    for (s, t) in [(0, 1), (0, 5), (3, 0), (3, 3), (5, 4), (1, 2)] {
        graph.add_edge(s, t).unwrap();
    }
    for v in 0..6 {
        let expected: Vec<usize> = (0..6).filter(|&t| graph.is_edge(v, t).unwrap()).collect();
        assert_eq!(graph.neighbors(v).unwrap(), expected);
    }
}

#[test]
fn test_relabel_vertex() {
    let mut graph: Graph<&str> = Graph::new(2);
    graph.set_label(0, "A").unwrap();
    graph.set_label(1, "Z").unwrap();
    graph.add_edge(0, 1).unwrap();
    graph.add_edge(1, 0).unwrap();

    graph.set_label(0, "B").unwrap();
    assert_eq!(*graph.get_label(0).unwrap(), "B");
    assert!(graph.is_edge(0, 1).unwrap());
    assert!(graph.is_edge(1, 0).unwrap());
}

#[test]
fn test_index_of_first_match_wins() {
    let mut graph: Graph<&str> = Graph::new(3);
    graph.set_label(0, "X").unwrap();
    graph.set_label(1, "Y").unwrap();
    graph.set_label(2, "Y").unwrap();
    assert_eq!(graph.index_of(&"Y"), Some(1));
    assert_eq!(graph.index_of(&"Q"), None);
}

#[test]
fn test_builder_resolves_labels() {
    let graph = GraphBuilder::new()
        .vertices(["A", "B", "C"])
        .edge("A", "C")
        .edge("C", "B")
        .build()
        .unwrap();
    assert_eq!(graph.size(), 3);
    assert!(graph.is_edge(0, 2).unwrap());
    assert!(graph.is_edge(2, 1).unwrap());
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.labels().collect::<Vec<_>>(), vec![Some(&"A"), Some(&"B"), Some(&"C")]);
}

#[test]
fn test_builder_unknown_label() {
    let result = GraphBuilder::new().vertex("A").edge("A", "B").build();
    assert!(matches!(result, Err(GraphError::LabelNotFound(_))));
}
