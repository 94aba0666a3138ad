use crate::graph::VertexId;
use thiserror::Error;

/// Why a checked mutation was rejected.
///
/// The permissive mutators swallow these and leave the graph unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Edge weights must not be negative.
    #[error("negative edge weight: {0}")]
    NegativeWeight(i64),

    /// An edge from a vertex to itself.
    #[error("self-loop on vertex {0}")]
    SelfLoop(String),

    /// A vertex index at or beyond the current vertex count.
    #[error("vertex {vertex} out of range for a graph of {size} vertices")]
    VertexOutOfRange { vertex: VertexId, size: usize },

    /// A label with no vertex behind it.
    #[error("unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("vertex already exists: {0}")]
    DuplicateVertex(String),

    #[error("edge already exists: {0} -- {1}")]
    DuplicateEdge(String, String),

    #[error("no edge between {0} and {1}")]
    MissingEdge(String, String),
}

/// Result of a checked graph mutation.
pub type GraphResult<T> = Result<T, GraphError>;
