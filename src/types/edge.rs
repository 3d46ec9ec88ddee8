//! Edge kinds and the core edge struct.

use serde::Serialize;

/// Whether an edge can be walked in both directions or only from `n1` to `n2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EdgeKind {
    /// Traversable both ways.
    Undirected,
    /// Traversable only from `n1` to `n2`.
    Directed,
}

impl EdgeKind {
    /// Return a human-readable name for this edge kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Undirected => "undirected",
            Self::Directed => "directed",
        }
    }
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A connection between two node values, with an optional label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge<T, U> {
    /// First endpoint (origin of a directed edge).
    pub n1: T,
    /// Second endpoint (destination of a directed edge).
    pub n2: T,
    /// Traversal direction rule.
    pub kind: EdgeKind,
    /// Label; `None` means the edge is unweighted.
    pub label: Option<U>,
}

impl<T: PartialEq, U> Edge<T, U> {
    /// Create an undirected edge.
    pub fn undirected(n1: T, n2: T, label: Option<U>) -> Self {
        Self {
            n1,
            n2,
            kind: EdgeKind::Undirected,
            label,
        }
    }

    /// Create a directed edge from `n1` to `n2`.
    pub fn directed(n1: T, n2: T, label: Option<U>) -> Self {
        Self {
            n1,
            n2,
            kind: EdgeKind::Directed,
            label,
        }
    }

    /// The endpoint reachable from `node` across this edge, if any.
    pub fn target_from(&self, node: &T) -> Option<&T> {
        match self.kind {
            EdgeKind::Undirected if self.n1 == *node => Some(&self.n2),
            EdgeKind::Undirected if self.n2 == *node => Some(&self.n1),
            EdgeKind::Directed if self.n1 == *node => Some(&self.n2),
            _ => None,
        }
    }

    /// True if the endpoints are `{a, b}` in either order.
    pub fn joins(&self, a: &T, b: &T) -> bool {
        (self.n1 == *a && self.n2 == *b) || (self.n1 == *b && self.n2 == *a)
    }

    /// Copy of this edge with its label replaced.
    pub fn with_label<V>(&self, label: Option<V>) -> Edge<T, V>
    where
        T: Clone,
    {
        Edge {
            n1: self.n1.clone(),
            n2: self.n2.clone(),
            kind: self.kind,
            label,
        }
    }
}
