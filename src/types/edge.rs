//! Tree edges recorded by traversals, and the traversal kind that produced them.

use std::fmt;

use serde::{Serialize, Serializer};

/// Which search produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalKind {
    /// Breadth-first: FIFO frontier.
    Bfs,
    /// Depth-first: explicit stack, deepen-first.
    Dfs,
}

impl TraversalKind {
    /// Short name used in CLI output ("bfs" / "dfs").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
        }
    }

    /// Parse a traversal kind from its name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bfs" | "breadth" | "breadth_first" => Some(Self::Bfs),
            "dfs" | "depth" | "depth_first" => Some(Self::Dfs),
            _ => None,
        }
    }

    /// Heading used when printing the visitation order.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Bfs => "Breadth-First",
            Self::Dfs => "Depth-First",
        }
    }
}

impl fmt::Display for TraversalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bfs => write!(f, "BFS"),
            Self::Dfs => write!(f, "DFS"),
        }
    }
}

/// An edge along which a traversal first reached a vertex.
///
/// Serializes as a `[parent, child]` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TreeEdge<E> {
    /// Label of the vertex the edge leaves.
    pub parent: E,
    /// Label of the newly discovered vertex.
    pub child: E,
}

impl<E> TreeEdge<E> {
    pub fn new(parent: E, child: E) -> Self {
        Self { parent, child }
    }
}

impl<E: fmt::Display> fmt::Display for TreeEdge<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.parent, self.child)
    }
}

impl<E: Serialize> Serialize for TreeEdge<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.parent, &self.child).serialize(serializer)
    }
}

impl<E> From<(E, E)> for TreeEdge<E> {
    fn from((parent, child): (E, E)) -> Self {
        Self::new(parent, child)
    }
}

/// Tree edges in discovery order.
///
/// Displays as `{ (A,B), (A,D) }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TreeEdges<E>(Vec<TreeEdge<E>>);

impl<E> TreeEdges<E> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub(crate) fn push(&mut self, parent: E, child: E) {
        self.0.push(TreeEdge::new(parent, child));
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TreeEdge<E>> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[TreeEdge<E>] {
        &self.0
    }
}

impl<E> Default for TreeEdges<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, E> IntoIterator for &'a TreeEdges<E> {
    type Item = &'a TreeEdge<E>;
    type IntoIter = std::slice::Iter<'a, TreeEdge<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<E> IntoIterator for TreeEdges<E> {
    type Item = TreeEdge<E>;
    type IntoIter = std::vec::IntoIter<TreeEdge<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<E: fmt::Display> fmt::Display for TreeEdges<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for (i, edge) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", edge)?;
        }
        write!(f, " }}")
    }
}
