//! Error types for the graph-paths library.

use thiserror::Error;

/// All errors that can occur while building or querying a graph.
///
/// Node values are carried in their `Debug` rendering so the error type
/// does not depend on the graph's node type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A node value is not part of the graph.
    #[error("Node {0} not found")]
    NodeNotFound(String),

    /// Self-edge not allowed.
    #[error("Self-edge not allowed on node {0}")]
    SelfEdge(String),

    /// A second edge between the same pair of nodes (multigraphs are not supported).
    #[error("Duplicate edge between {from} and {to}")]
    DuplicateEdge { from: String, to: String },

    /// An edge of an integer-weighted graph carries no weight.
    #[error("Edge between {from} and {to} has no weight")]
    MissingWeight { from: String, to: String },
}

impl GraphError {
    pub(crate) fn not_found<T: std::fmt::Debug>(node: &T) -> Self {
        Self::NodeNotFound(format!("{node:?}"))
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
