//! Fluent API for building Graph instances by label.

use std::fmt::Debug;

use crate::types::{GraphError, GraphResult};

use super::Graph;

/// Labels of the demonstration graph, vertex 0 first.
pub const SAMPLE_LABELS: [&str; 9] = ["A", "B", "C", "D", "E", "F", "G", "H", "I"];

/// Directed edges of the demonstration graph.
pub const SAMPLE_EDGES: [(&str, &str); 13] = [
    ("A", "B"),
    ("A", "D"),
    ("A", "E"),
    ("B", "E"),
    ("D", "G"),
    ("E", "F"),
    ("E", "H"),
    ("G", "H"),
    ("F", "C"),
    ("F", "H"),
    ("H", "I"),
    ("C", "B"),
    ("I", "F"),
];

/// Fluent builder for constructing a Graph from labels.
///
/// Vertices get indices in the order they are added. Edges name their
/// endpoints by label and are resolved in `build`.
pub struct GraphBuilder<E> {
    labels: Vec<E>,
    edges: Vec<(E, E)>,
}

impl<E> GraphBuilder<E> {
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add one vertex.
    pub fn vertex(mut self, label: E) -> Self {
        self.labels.push(label);
        self
    }

    /// Add vertices in order.
    pub fn vertices(mut self, labels: impl IntoIterator<Item = E>) -> Self {
        self.labels.extend(labels);
        self
    }

    /// Add a directed edge between two labels.
    pub fn edge(mut self, source: E, target: E) -> Self {
        self.edges.push((source, target));
        self
    }

    /// Add several directed edges.
    pub fn edges(mut self, edges: impl IntoIterator<Item = (E, E)>) -> Self {
        self.edges.extend(edges);
        self
    }
}

impl<E: PartialEq + Debug> GraphBuilder<E> {
    /// Build the graph. Fails if an edge names a label no vertex carries.
    pub fn build(self) -> GraphResult<Graph<E>> {
        let mut graph = Graph::new(self.labels.len());
        for (index, label) in self.labels.into_iter().enumerate() {
            graph.set_label(index, label)?;
        }
        for (source, target) in &self.edges {
            let s = lookup(&graph, source)?;
            let t = lookup(&graph, target)?;
            graph.add_edge(s, t)?;
        }
        log::debug!(
            "Built graph with {} vertices and {} edges",
            graph.size(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

impl<E> Default for GraphBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}

fn lookup<E: PartialEq + Debug>(graph: &Graph<E>, label: &E) -> GraphResult<usize> {
    graph
        .index_of(label)
        .ok_or_else(|| GraphError::LabelNotFound(format!("{:?}", label)))
}

/// The nine-vertex graph used by the `demo` command.
pub fn sample_graph() -> GraphResult<Graph<String>> {
    GraphBuilder::new()
        .vertices(SAMPLE_LABELS.iter().map(|s| s.to_string()))
        .edges(
            SAMPLE_EDGES
                .iter()
                .map(|(s, t)| (s.to_string(), t.to_string())),
        )
        .build()
}
