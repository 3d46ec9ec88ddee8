//! Path results.

use serde::Serialize;

/// An ordered sequence of node values from source to target.
///
/// An empty path means the target is unreachable.
pub type Path<T> = Vec<T>;

/// A minimum-cost path together with its total cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route<T> {
    /// Node values from source to target, both included.
    pub nodes: Path<T>,
    /// Sum of the edge costs along `nodes`.
    pub cost: u64,
}

impl<T> Route<T> {
    /// Number of edges on the route.
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Drop the cost and keep the node sequence.
    pub fn into_path(self) -> Path<T> {
        self.nodes
    }
}
