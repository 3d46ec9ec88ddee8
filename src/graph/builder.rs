//! Fluent API for building Graph instances.

use crate::types::{Edge, GraphResult, NodeValue};

use super::Graph;

/// Fluent builder for constructing a Graph.
pub struct GraphBuilder<T, U> {
    nodes: Vec<T>,
    edges: Vec<Edge<T, U>>,
}

impl<T: NodeValue, U> GraphBuilder<T, U> {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a node, possibly without any edge.
    ///
    /// Explicit nodes precede implicit edge endpoints in `Graph::nodes`,
    /// whatever the call order.
    pub fn node(&mut self, value: T) -> &mut Self {
        self.nodes.push(value);
        self
    }

    /// Add an unlabeled undirected edge.
    pub fn edge(&mut self, a: T, b: T) -> &mut Self {
        self.edges.push(Edge::undirected(a, b, None));
        self
    }

    /// Add a labeled undirected edge.
    pub fn labeled_edge(&mut self, a: T, b: T, label: U) -> &mut Self {
        self.edges.push(Edge::undirected(a, b, Some(label)));
        self
    }

    /// Add an unlabeled directed edge.
    pub fn arc(&mut self, from: T, to: T) -> &mut Self {
        self.edges.push(Edge::directed(from, to, None));
        self
    }

    /// Add a labeled directed edge.
    pub fn labeled_arc(&mut self, from: T, to: T, label: U) -> &mut Self {
        self.edges.push(Edge::directed(from, to, Some(label)));
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> GraphResult<Graph<T, U>> {
        Graph::from_parts(self.nodes, self.edges)
    }
}

impl<T: NodeValue, U> Default for GraphBuilder<T, U> {
    fn default() -> Self {
        Self::new()
    }
}
