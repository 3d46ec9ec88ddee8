//! Simple-path enumeration (depth-first).

use std::collections::HashSet;

use crate::types::{GraphResult, NodeValue, Path, PathLimits};

use super::Graph;

/// Every simple path from `from` to `to`.
///
/// Paths come out depth-first in neighbor-list order: paths sharing a prefix
/// appear in the order their diverging edge appears in that prefix's
/// neighbor list. `from == to` yields the single one-node path; an
/// unreachable target yields no paths.
pub fn all_paths<T: NodeValue, U>(
    graph: &Graph<T, U>,
    from: &T,
    to: &T,
) -> GraphResult<Vec<Path<T>>> {
    all_paths_limited(graph, from, to, &PathLimits::unlimited())
}

/// Simple-path enumeration bounded by `limits`.
///
/// Output is the unlimited output restricted to paths of at most
/// `max_depth` edges, truncated after `max_results` paths.
pub fn all_paths_limited<T: NodeValue, U>(
    graph: &Graph<T, U>,
    from: &T,
    to: &T,
    limits: &PathLimits,
) -> GraphResult<Vec<Path<T>>> {
    graph.require(from)?;
    graph.require(to)?;

    let mut paths: Vec<Path<T>> = Vec::new();
    if limits.is_full(0) {
        return Ok(paths);
    }
    if from == to {
        paths.push(vec![from.clone()]);
        return Ok(paths);
    }

    // Current partial path, its members, and one neighbor cursor per path node
    let mut path: Vec<&T> = vec![from];
    let mut on_path: HashSet<&T> = HashSet::from([from]);
    let mut cursors = vec![graph.neighbors(from)?.into_iter()];

    while let Some(cursor) = cursors.last_mut() {
        let Some(next) = cursor.next() else {
            cursors.pop();
            if let Some(done) = path.pop() {
                on_path.remove(done);
            }
            continue;
        };

        if on_path.contains(next) {
            continue;
        }

        if next == to {
            if limits.allows_depth(path.len()) {
                let mut found: Path<T> = path.iter().map(|&n| n.clone()).collect();
                found.push(next.clone());
                log::trace!("Found path {:?}", found);
                paths.push(found);
                if limits.is_full(paths.len()) {
                    break;
                }
            }
            continue;
        }

        // Extending past `next` needs at least one more edge to reach `to`
        if !limits.allows_depth(path.len() + 1) {
            continue;
        }

        path.push(next);
        on_path.insert(next);
        cursors.push(graph.neighbors(next)?.into_iter());
    }

    Ok(paths)
}
