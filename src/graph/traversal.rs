//! Graph traversal algorithms (BFS, DFS) with tree-edge tracking.

use std::fmt::Debug;

use crate::queue::Queue;
use crate::types::{GraphError, GraphResult, TraversalKind, TreeEdges};

use super::Graph;

/// Everything one traversal run discovered.
#[derive(Debug, Clone)]
pub struct Traversal<E> {
    /// Which search produced this result.
    pub kind: TraversalKind,
    /// Index of the vertex the search started from.
    pub origin: usize,
    /// Labels in visitation order, origin first.
    pub order: Queue<E>,
    /// Edges along which each non-origin vertex was first reached.
    pub tree_edges: TreeEdges<E>,
    parents: Vec<Option<usize>>,
    visited: Vec<bool>,
}

impl<E> Traversal<E> {
    fn start(kind: TraversalKind, origin: usize, origin_label: E, size: usize) -> Self {
        let mut visited = vec![false; size];
        visited[origin] = true;
        let mut order = Queue::with_capacity(size);
        order.enqueue(origin_label);
        Self {
            kind,
            origin,
            order,
            tree_edges: TreeEdges::new(),
            parents: vec![None; size],
            visited,
        }
    }

    /// Whether `vertex` was reached. Out-of-range indices were never reached.
    pub fn is_visited(&self, vertex: usize) -> bool {
        self.visited.get(vertex).copied().unwrap_or(false)
    }

    /// Vertex whose edge first reached `vertex`; `None` for the origin and unreached vertices.
    pub fn parent(&self, vertex: usize) -> Option<usize> {
        self.parents.get(vertex).copied().flatten()
    }

    /// Number of vertices reached, origin included.
    pub fn visited_count(&self) -> usize {
        self.order.len()
    }

    /// Give up everything but the visitation order.
    pub fn into_order(self) -> Queue<E> {
        self.order
    }
}

impl<E: Clone> Traversal<E> {
    fn discover(&mut self, graph: &Graph<E>, parent: usize, child: usize) -> GraphResult<()> {
        let parent_label = graph.owned_label(parent)?;
        let child_label = graph.owned_label(child)?;
        self.visited[child] = true;
        self.parents[child] = Some(parent);
        self.order.enqueue(child_label.clone());
        self.tree_edges.push(parent_label, child_label);
        log::trace!("{} tree edge {} -> {}", self.kind, parent, child);
        Ok(())
    }
}

/// Resolve a label to the first vertex carrying it.
fn resolve_origin<E: PartialEq + Debug>(graph: &Graph<E>, origin: &E) -> GraphResult<usize> {
    graph
        .index_of(origin)
        .ok_or_else(|| GraphError::LabelNotFound(format!("{:?}", origin)))
}

/// Breadth-first search from the vertex labeled `origin`.
///
/// Neighbors are expanded in ascending index order through a FIFO frontier.
pub fn breadth_first_search<E>(graph: &Graph<E>, origin: &E) -> GraphResult<Traversal<E>>
where
    E: Clone + PartialEq + Debug,
{
    let start = resolve_origin(graph, origin)?;
    log::debug!("BFS from {:?} (vertex {})", origin, start);

    let mut traversal = Traversal::start(
        TraversalKind::Bfs,
        start,
        graph.owned_label(start)?,
        graph.size(),
    );
    let mut frontier = Queue::new();
    frontier.enqueue(start);

    while !frontier.is_empty() {
        let current = frontier.dequeue()?;
        for neighbor in graph.out_neighbors(current) {
            if traversal.is_visited(neighbor) {
                continue;
            }
            traversal.discover(graph, current, neighbor)?;
            frontier.enqueue(neighbor);
        }
    }

    log::debug!(
        "BFS from {:?} visited {} vertices, {} tree edges",
        origin,
        traversal.visited_count(),
        traversal.tree_edges.len()
    );
    Ok(traversal)
}

/// Depth-first search from the vertex labeled `origin`.
///
/// Iterative: the top of the stack is peeked, its first unvisited neighbor
/// (ascending index) is pushed, and the top is popped only once it has no
/// unvisited neighbors left. Discovery order matches recursive pre-order.
pub fn depth_first_search<E>(graph: &Graph<E>, origin: &E) -> GraphResult<Traversal<E>>
where
    E: Clone + PartialEq + Debug,
{
    let start = resolve_origin(graph, origin)?;
    log::debug!("DFS from {:?} (vertex {})", origin, start);

    let mut traversal = Traversal::start(
        TraversalKind::Dfs,
        start,
        graph.owned_label(start)?,
        graph.size(),
    );
    let mut stack = vec![start];

    while let Some(&top) = stack.last() {
        let next = graph
            .out_neighbors(top)
            .find(|&neighbor| !traversal.is_visited(neighbor));
        match next {
            Some(neighbor) => {
                traversal.discover(graph, top, neighbor)?;
                stack.push(neighbor);
            }
            None => {
                stack.pop();
            }
        }
    }

    log::debug!(
        "DFS from {:?} visited {} vertices, {} tree edges",
        origin,
        traversal.visited_count(),
        traversal.tree_edges.len()
    );
    Ok(traversal)
}

impl<E> Graph<E>
where
    E: Clone + PartialEq + Debug,
{
    /// Breadth-first traversal without touching the graph's recorded state.
    pub fn bfs(&self, origin: &E) -> GraphResult<Traversal<E>> {
        breadth_first_search(self, origin)
    }

    /// Depth-first traversal without touching the graph's recorded state.
    pub fn dfs(&self, origin: &E) -> GraphResult<Traversal<E>> {
        depth_first_search(self, origin)
    }

    /// Breadth-first traversal; returns labels in visitation order.
    ///
    /// On success the visited flags, BFS parents and BFS tree edges are
    /// replaced with this run's. On error nothing recorded changes.
    pub fn breadth_first(&mut self, origin: &E) -> GraphResult<Queue<E>> {
        let traversal = breadth_first_search(self, origin)?;
        Ok(self.record(traversal))
    }

    /// Depth-first traversal; returns labels in visitation order.
    ///
    /// On success the visited flags, DFS parents and DFS tree edges are
    /// replaced with this run's. On error nothing recorded changes.
    pub fn depth_first(&mut self, origin: &E) -> GraphResult<Queue<E>> {
        let traversal = depth_first_search(self, origin)?;
        Ok(self.record(traversal))
    }

    fn record(&mut self, traversal: Traversal<E>) -> Queue<E> {
        let Traversal {
            kind,
            order,
            tree_edges,
            parents,
            visited,
            ..
        } = traversal;
        self.visited = visited;
        match kind {
            TraversalKind::Bfs => {
                self.bfs_parent = parents;
                self.bfs_tree_edges = tree_edges;
            }
            TraversalKind::Dfs => {
                self.dfs_parent = parents;
                self.dfs_tree_edges = tree_edges;
            }
        }
        order
    }
}
