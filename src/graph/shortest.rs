//! Minimum-cost path search (Dijkstra with a linear-scan frontier).

use std::collections::{HashMap, HashSet};

use crate::types::{GraphError, GraphResult, NodeValue, Path, Route, DEFAULT_EDGE_COST};

use super::Graph;

/// Minimum-cost path over integer-weighted edges.
///
/// Returns an empty path when `to` is unreachable and `[from]` when
/// `from == to`.
pub fn shortest_path<T: NodeValue>(
    graph: &Graph<T, u64>,
    from: &T,
    to: &T,
) -> GraphResult<Path<T>> {
    Ok(shortest_route(graph, from, to)?
        .map(Route::into_path)
        .unwrap_or_default())
}

/// Minimum-cost path after mapping every label (or its absence) to a cost.
///
/// The graph itself is left untouched; a relabeled copy is searched.
pub fn shortest_path_with<T: NodeValue, U, F>(
    graph: &Graph<T, U>,
    from: &T,
    to: &T,
    label_to_cost: F,
) -> GraphResult<Path<T>>
where
    F: FnMut(Option<&U>) -> u64,
{
    shortest_path(&graph.map_labels(label_to_cost), from, to)
}

/// Fewest-hops path: every edge costs `DEFAULT_EDGE_COST`, labels are ignored.
pub fn shortest_path_unweighted<T: NodeValue, U>(
    graph: &Graph<T, U>,
    from: &T,
    to: &T,
) -> GraphResult<Path<T>> {
    shortest_path_with(graph, from, to, |_| DEFAULT_EDGE_COST)
}

/// Like [`shortest_route`], after mapping labels to costs.
pub fn shortest_route_with<T: NodeValue, U, F>(
    graph: &Graph<T, U>,
    from: &T,
    to: &T,
    label_to_cost: F,
) -> GraphResult<Option<Route<T>>>
where
    F: FnMut(Option<&U>) -> u64,
{
    shortest_route(&graph.map_labels(label_to_cost), from, to)
}

/// Like [`shortest_route`], with every edge costing `DEFAULT_EDGE_COST`.
pub fn shortest_route_unweighted<T: NodeValue, U>(
    graph: &Graph<T, U>,
    from: &T,
    to: &T,
) -> GraphResult<Option<Route<T>>> {
    shortest_route_with(graph, from, to, |_| DEFAULT_EDGE_COST)
}

/// Minimum-cost route with its total cost, or `None` if `to` is unreachable.
///
/// The frontier keeps discovery order; among equal scores the node that
/// entered it first is expanded first, so results are reproducible.
pub fn shortest_route<T: NodeValue>(
    graph: &Graph<T, u64>,
    from: &T,
    to: &T,
) -> GraphResult<Option<Route<T>>> {
    graph.require(from)?;
    graph.require(to)?;

    let mut frontier: Vec<&T> = vec![from];
    let mut visited: HashSet<&T> = HashSet::new();
    let mut scores: HashMap<&T, u64> = HashMap::from([(from, 0)]);
    let mut predecessors: HashMap<&T, &T> = HashMap::new();

    while let Some(pos) = cheapest(&frontier, &scores) {
        let current = frontier.remove(pos);
        let score = scores.get(current).copied().unwrap_or_default();

        if current == to {
            return Ok(Some(Route {
                nodes: reconstruct(&predecessors, current),
                cost: score,
            }));
        }
        visited.insert(current);

        for neighbor in graph.neighbors(current)? {
            if visited.contains(neighbor) {
                continue;
            }

            // A cost past u64::MAX can never beat a recorded score
            let Some(candidate) = score.checked_add(edge_cost(graph, current, neighbor)?) else {
                log::trace!("Skipped {:?} via {:?}: cost overflow", neighbor, current);
                continue;
            };

            let is_new = !scores.contains_key(neighbor);
            if is_new || scores.get(neighbor).is_some_and(|&known| candidate < known) {
                log::trace!("Relaxed {:?} via {:?} to {}", neighbor, current, candidate);
                predecessors.insert(neighbor, current);
                scores.insert(neighbor, candidate);
                if is_new {
                    frontier.push(neighbor);
                }
            }
        }
    }

    Ok(None)
}

/// Position of the first frontier node with the lowest score.
fn cheapest<T: NodeValue>(frontier: &[&T], scores: &HashMap<&T, u64>) -> Option<usize> {
    frontier
        .iter()
        .enumerate()
        .min_by_key(|&(_, node)| scores.get(node).copied().unwrap_or(u64::MAX))
        .map(|(pos, _)| pos)
}

fn edge_cost<T: NodeValue>(graph: &Graph<T, u64>, from: &T, to: &T) -> GraphResult<u64> {
    graph
        .edge_between(from, to)?
        .and_then(|edge| edge.label)
        .ok_or_else(|| GraphError::MissingWeight {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        })
}

/// Walk predecessor links back from `target`, then reverse.
fn reconstruct<T: NodeValue>(predecessors: &HashMap<&T, &T>, target: &T) -> Path<T> {
    let mut path = vec![target.clone()];
    let mut current = target;
    while let Some(&previous) = predecessors.get(current) {
        path.push(previous.clone());
        current = previous;
    }
    path.reverse();
    path
}
