//! Query executor — path queries with limits and logging.

use crate::graph::{shortest, traversal, Graph};
use crate::types::{GraphResult, NodeValue, Path, PathLimits, Route};

/// Parameters for a path query.
pub struct PathParams<T> {
    /// Source node value.
    pub from: T,
    /// Target node value.
    pub to: T,
}

impl<T> PathParams<T> {
    /// Query from `from` to `to`.
    pub fn new(from: T, to: T) -> Self {
        Self { from, to }
    }
}

/// The query engine runs path queries against any graph it is handed.
///
/// It holds no graph state, so one engine can serve many graphs.
#[derive(Debug, Clone, Default)]
pub struct QueryEngine {
    limits: PathLimits,
}

impl QueryEngine {
    /// Create a new query engine without enumeration limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a query engine that bounds path enumeration.
    pub fn with_limits(limits: PathLimits) -> Self {
        Self { limits }
    }

    /// The enumeration limits in effect.
    pub fn limits(&self) -> &PathLimits {
        &self.limits
    }

    /// Enumerate simple paths, bounded by this engine's limits.
    pub fn all_paths<T: NodeValue, U>(
        &self,
        graph: &Graph<T, U>,
        params: &PathParams<T>,
    ) -> GraphResult<Vec<Path<T>>> {
        log::debug!(
            "all_paths {:?} -> {:?} ({} nodes, {} edges, {:?})",
            params.from,
            params.to,
            graph.node_count(),
            graph.edge_count(),
            self.limits
        );
        let paths = traversal::all_paths_limited(graph, &params.from, &params.to, &self.limits)?;
        log::debug!("all_paths found {} paths", paths.len());
        Ok(paths)
    }

    /// Minimum-cost path over an integer-weighted graph.
    pub fn shortest_path<T: NodeValue>(
        &self,
        graph: &Graph<T, u64>,
        params: &PathParams<T>,
    ) -> GraphResult<Path<T>> {
        Ok(self
            .shortest_route(graph, params)?
            .map(Route::into_path)
            .unwrap_or_default())
    }

    /// Minimum-cost route with its cost over an integer-weighted graph.
    pub fn shortest_route<T: NodeValue>(
        &self,
        graph: &Graph<T, u64>,
        params: &PathParams<T>,
    ) -> GraphResult<Option<Route<T>>> {
        log::debug!("shortest_route {:?} -> {:?}", params.from, params.to);
        let route = shortest::shortest_route(graph, &params.from, &params.to)?;
        match &route {
            Some(r) => log::debug!("shortest_route cost {} over {} hops", r.cost, r.hops()),
            None => log::debug!("shortest_route: {:?} unreachable", params.to),
        }
        Ok(route)
    }

    /// Minimum-cost path after mapping labels to costs.
    pub fn shortest_path_with<T: NodeValue, U, F>(
        &self,
        graph: &Graph<T, U>,
        params: &PathParams<T>,
        label_to_cost: F,
    ) -> GraphResult<Path<T>>
    where
        F: FnMut(Option<&U>) -> u64,
    {
        self.shortest_path(&graph.map_labels(label_to_cost), params)
    }

    /// Fewest-hops path, ignoring labels.
    pub fn shortest_path_unweighted<T: NodeValue, U>(
        &self,
        graph: &Graph<T, U>,
        params: &PathParams<T>,
    ) -> GraphResult<Path<T>> {
        self.shortest_path_with(graph, params, |_| crate::types::DEFAULT_EDGE_COST)
    }
}
