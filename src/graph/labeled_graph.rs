//! Core graph structure — fixed vertex set, labels, dense adjacency matrix.

use crate::types::{GraphError, GraphResult, TreeEdges};

/// A directed graph over a fixed number of labeled vertices.
///
/// Vertices are the dense indices `0..size`. The edge relation is a
/// row-major `size * size` boolean matrix, so edge queries are O(1) and
/// neighbor enumeration is O(size) in ascending index order.
///
/// The graph also remembers the outcome of the last `breadth_first` and
/// `depth_first` call (visited set, parents, tree edges).
#[derive(Debug, Clone)]
pub struct Graph<E> {
    /// `labels[v]` is the label of vertex `v`, `None` until assigned.
    labels: Vec<Option<E>>,
    /// `edges[s * size + t]` is true when `s -> t` exists.
    edges: Vec<bool>,
    /// Visited flags from the most recent traversal.
    pub(crate) visited: Vec<bool>,
    pub(crate) bfs_parent: Vec<Option<usize>>,
    pub(crate) dfs_parent: Vec<Option<usize>>,
    pub(crate) bfs_tree_edges: TreeEdges<E>,
    pub(crate) dfs_tree_edges: TreeEdges<E>,
}

impl<E> Graph<E> {
    /// Create a graph with `size` unlabeled vertices and no edges.
    pub fn new(size: usize) -> Self {
        let mut labels = Vec::with_capacity(size);
        labels.resize_with(size, || None);
        Self {
            labels,
            edges: vec![false; size * size],
            visited: vec![false; size],
            bfs_parent: vec![None; size],
            dfs_parent: vec![None; size],
            bfs_tree_edges: TreeEdges::new(),
            dfs_tree_edges: TreeEdges::new(),
        }
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.labels.len()
    }

    /// Number of directed edges currently present.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().filter(|&&e| e).count()
    }

    pub(crate) fn check_vertex(&self, index: usize) -> GraphResult<()> {
        if index >= self.size() {
            return Err(GraphError::IndexOutOfBounds {
                index,
                size: self.size(),
            });
        }
        Ok(())
    }

    /// Label of `vertex`.
    pub fn get_label(&self, vertex: usize) -> GraphResult<&E> {
        self.check_vertex(vertex)?;
        self.labels[vertex]
            .as_ref()
            .ok_or(GraphError::LabelNotSet(vertex))
    }

    /// Assign or replace the label of `vertex`.
    ///
    /// Accepts either a label or an `Option`; `None` is rejected with
    /// [`GraphError::InvalidArgument`] since a vertex cannot be unlabeled
    /// once it has a label.
    pub fn set_label(&mut self, vertex: usize, label: impl Into<Option<E>>) -> GraphResult<()> {
        self.check_vertex(vertex)?;
        let label = label
            .into()
            .ok_or_else(|| GraphError::InvalidArgument("Label cannot be unset".to_string()))?;
        self.labels[vertex] = Some(label);
        Ok(())
    }

    /// All labels by vertex index, `None` for vertices never labeled.
    pub fn labels(&self) -> impl Iterator<Item = Option<&E>> + '_ {
        self.labels.iter().map(Option::as_ref)
    }

    /// Add `source -> target`. Adding an existing edge is a no-op.
    pub fn add_edge(&mut self, source: usize, target: usize) -> GraphResult<()> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;
        let slot = self.slot(source, target);
        self.edges[slot] = true;
        Ok(())
    }

    /// Remove `source -> target`. Removing a missing edge is a no-op.
    pub fn remove_edge(&mut self, source: usize, target: usize) -> GraphResult<()> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;
        let slot = self.slot(source, target);
        self.edges[slot] = false;
        Ok(())
    }

    pub fn is_edge(&self, source: usize, target: usize) -> GraphResult<bool> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;
        Ok(self.edges[self.slot(source, target)])
    }

    /// Targets of all edges leaving `vertex`, ascending by index.
    pub fn neighbors(&self, vertex: usize) -> GraphResult<Vec<usize>> {
        self.check_vertex(vertex)?;
        Ok(self.out_neighbors(vertex).collect())
    }

    /// Unchecked neighbor scan; callers have validated `vertex`.
    pub(crate) fn out_neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        let n = self.size();
        self.edges[vertex * n..(vertex + 1) * n]
            .iter()
            .enumerate()
            .filter_map(|(target, &present)| present.then_some(target))
    }

    /// Clear the visited flags left by the last traversal.
    pub fn reset_vertices(&mut self) {
        self.visited.clear();
        self.visited.resize(self.size(), false);
    }

    /// Whether the most recent traversal reached `vertex`.
    pub fn is_visited(&self, vertex: usize) -> GraphResult<bool> {
        self.check_vertex(vertex)?;
        Ok(self.visited[vertex])
    }

    /// Vertex that discovered `vertex` in the last breadth-first run.
    pub fn bfs_parent(&self, vertex: usize) -> GraphResult<Option<usize>> {
        self.check_vertex(vertex)?;
        Ok(self.bfs_parent[vertex])
    }

    /// Vertex that discovered `vertex` in the last depth-first run.
    pub fn dfs_parent(&self, vertex: usize) -> GraphResult<Option<usize>> {
        self.check_vertex(vertex)?;
        Ok(self.dfs_parent[vertex])
    }

    /// Tree edges of the last breadth-first run, in discovery order.
    pub fn bfs_tree_edges(&self) -> &TreeEdges<E> {
        &self.bfs_tree_edges
    }

    /// Tree edges of the last depth-first run, in discovery order.
    pub fn dfs_tree_edges(&self) -> &TreeEdges<E> {
        &self.dfs_tree_edges
    }

    fn slot(&self, source: usize, target: usize) -> usize {
        source * self.size() + target
    }
}

impl<E: PartialEq> Graph<E> {
    /// Index of the first vertex labeled `label`, scanning in index order.
    pub fn index_of(&self, label: &E) -> Option<usize> {
        self.labels
            .iter()
            .position(|candidate| candidate.as_ref() == Some(label))
    }
}

impl<E: Clone> Graph<E> {
    /// Owned copy of a label for traversal output.
    pub(crate) fn owned_label(&self, vertex: usize) -> GraphResult<E> {
        match &self.labels[vertex] {
            Some(label) => Ok(label.clone()),
            None => {
                log::warn!("Traversal reached vertex {} which has no label", vertex);
                Err(GraphError::LabelNotSet(vertex))
            }
        }
    }
}
