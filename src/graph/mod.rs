//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod labeled_graph;
pub mod traversal;

pub use builder::{sample_graph, GraphBuilder, SAMPLE_EDGES, SAMPLE_LABELS};
pub use labeled_graph::Graph;
pub use traversal::{breadth_first_search, depth_first_search, Traversal};
