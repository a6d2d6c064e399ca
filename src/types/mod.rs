//! Value types shared by the queue, the graph and the CLI.

pub mod edge;
pub mod error;

pub use edge::{TraversalKind, TreeEdge, TreeEdges};
pub use error::{GraphError, GraphResult};
