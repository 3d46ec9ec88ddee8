//! Core graph structure — node values + labeled edges with incidence lists.

use std::collections::HashMap;

use crate::types::{Edge, EdgeKind, GraphError, GraphResult, NodeValue};

/// An immutable graph over node values `T` whose edges carry optional labels `U`.
///
/// Nodes and edges keep their insertion order; a node's neighbor list follows
/// the order in which its incident edges were added.
#[derive(Debug, Clone)]
pub struct Graph<T, U> {
    /// All node values, in insertion order.
    nodes: Vec<T>,
    /// Node value -> position in `nodes`.
    index: HashMap<T, usize>,
    /// All edges, in insertion order.
    edges: Vec<Edge<T, U>>,
    /// Per node position: indices into `edges` of the edges touching that node.
    incidence: Vec<Vec<usize>>,
}

impl<T: NodeValue, U> Graph<T, U> {
    /// Create from node values and edges.
    ///
    /// All of `nodes` come first, in order; edge endpoints missing from
    /// `nodes` follow in the order they are first seen. Self-edges and
    /// parallel edges are rejected.
    pub fn from_parts(nodes: Vec<T>, edges: Vec<Edge<T, U>>) -> GraphResult<Self> {
        let mut graph = Self {
            nodes: Vec::with_capacity(nodes.len()),
            index: HashMap::with_capacity(nodes.len()),
            edges: Vec::with_capacity(edges.len()),
            incidence: Vec::with_capacity(nodes.len()),
        };

        for node in nodes {
            graph.insert_node(node);
        }
        for edge in edges {
            graph.insert_edge(edge)?;
        }

        Ok(graph)
    }

    fn insert_node(&mut self, node: T) -> usize {
        if let Some(&pos) = self.index.get(&node) {
            return pos;
        }
        let pos = self.nodes.len();
        self.index.insert(node.clone(), pos);
        self.nodes.push(node);
        self.incidence.push(Vec::new());
        pos
    }

    fn insert_edge(&mut self, edge: Edge<T, U>) -> GraphResult<()> {
        if edge.n1 == edge.n2 {
            log::warn!("Rejected self-edge on node {:?}", edge.n1);
            return Err(GraphError::SelfEdge(format!("{:?}", edge.n1)));
        }

        let a = self.insert_node(edge.n1.clone());
        let b = self.insert_node(edge.n2.clone());

        if self.incidence[a]
            .iter()
            .any(|&i| overlaps(&self.edges[i], &edge))
        {
            log::warn!("Rejected parallel edge {:?} - {:?}", edge.n1, edge.n2);
            return Err(GraphError::DuplicateEdge {
                from: format!("{:?}", edge.n1),
                to: format!("{:?}", edge.n2),
            });
        }

        let id = self.edges.len();
        self.edges.push(edge);
        self.incidence[a].push(id);
        self.incidence[b].push(id);
        Ok(())
    }

    fn position(&self, node: &T) -> GraphResult<usize> {
        self.index
            .get(node)
            .copied()
            .ok_or_else(|| GraphError::not_found(node))
    }

    fn incident(&self, pos: usize) -> impl Iterator<Item = &Edge<T, U>> + '_ {
        self.incidence[pos].iter().map(move |&i| &self.edges[i])
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True if `node` is part of the graph.
    pub fn contains(&self, node: &T) -> bool {
        self.index.contains_key(node)
    }

    /// Fail with `NodeNotFound` unless `node` is part of the graph.
    pub fn require(&self, node: &T) -> GraphResult<()> {
        self.position(node).map(|_| ())
    }

    /// Get all node values (insertion order).
    pub fn nodes(&self) -> &[T] {
        &self.nodes
    }

    /// Get all edges (insertion order).
    pub fn edges(&self) -> &[Edge<T, U>] {
        &self.edges
    }

    /// Get every edge touching `node`, whatever its direction.
    pub fn edges_of(&self, node: &T) -> GraphResult<Vec<&Edge<T, U>>> {
        let pos = self.position(node)?;
        Ok(self.incident(pos).collect())
    }

    /// Node values reachable from `node` over a single edge, respecting direction.
    pub fn neighbors(&self, node: &T) -> GraphResult<Vec<&T>> {
        let pos = self.position(node)?;
        Ok(self.incidence[pos]
            .iter()
            .filter_map(|&i| self.edges[i].target_from(node))
            .collect())
    }

    /// The edge whose endpoints are `{a, b}` in either order.
    ///
    /// When both `a > b` and `b > a` arcs exist, the one leaving `a` wins.
    pub fn edge_between(&self, a: &T, b: &T) -> GraphResult<Option<&Edge<T, U>>> {
        let pos = self.position(a)?;
        self.position(b)?;

        Ok(self
            .incident(pos)
            .find(|e| e.joins(a, b) && e.target_from(a) == Some(b))
            .or_else(|| self.incident(pos).find(|e| e.joins(a, b))))
    }

    /// Copy of this graph with the same topology and every label replaced by
    /// `label_to(original_label)`.
    pub fn map_labels<V, F>(&self, mut label_to: F) -> Graph<T, V>
    where
        F: FnMut(Option<&U>) -> V,
    {
        Graph {
            nodes: self.nodes.clone(),
            index: self.index.clone(),
            edges: self
                .edges
                .iter()
                .map(|e| e.with_label(Some(label_to(e.label.as_ref()))))
                .collect(),
            incidence: self.incidence.clone(),
        }
    }
}

/// Two edges over the same node pair overlap unless they are opposite arcs.
fn overlaps<T: PartialEq, U>(existing: &Edge<T, U>, new: &Edge<T, U>) -> bool {
    if !existing.joins(&new.n1, &new.n2) {
        return false;
    }
    match (existing.kind, new.kind) {
        (EdgeKind::Directed, EdgeKind::Directed) => existing.n1 == new.n1,
        _ => true,
    }
}
