//! labeled-digraph — a fixed-size directed graph with labeled vertices.
//!
//! Vertices are dense indices with caller-chosen labels; edges live in a
//! dense adjacency matrix. Breadth-first and depth-first traversals start
//! from a label, return the visitation order as a [`Queue`], and record the
//! tree edges along which each vertex was first discovered.

pub mod cli;
pub mod graph;
pub mod queue;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    breadth_first_search, depth_first_search, sample_graph, Graph, GraphBuilder, Traversal,
};
pub use queue::Queue;
pub use types::{GraphError, GraphResult, TraversalKind, TreeEdge, TreeEdges};
