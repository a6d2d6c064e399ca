//! Error types for the labeled-digraph library.

use thiserror::Error;

/// All errors that can occur in the labeled-digraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Vertex index outside `[0, size)`.
    #[error("Invalid vertex index: {index} (graph has {size} vertices)")]
    IndexOutOfBounds { index: usize, size: usize },

    /// An argument was rejected before any mutation happened.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Dequeue or front on an empty queue.
    #[error("Queue is empty")]
    EmptyContainer,

    /// No vertex carries the requested label.
    #[error("Label not found: {0}")]
    LabelNotFound(String),

    /// The vertex exists but its label was never assigned.
    #[error("Vertex {0} has no label")]
    LabelNotSet(usize),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
