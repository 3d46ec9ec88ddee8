//! graph-paths — path queries over labeled graphs.
//!
//! Two algorithms run over an immutable [`Graph`] whose edges may be
//! directed or undirected and may carry labels: enumeration of every simple
//! path between two nodes, and a minimum-cost path search that maps labels
//! (or their absence) to non-negative integer costs.

pub mod engine;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{PathParams, QueryEngine};
pub use graph::{
    all_paths, all_paths_limited, shortest_path, shortest_path_unweighted, shortest_path_with,
    shortest_route, shortest_route_unweighted, shortest_route_with, Graph, GraphBuilder,
};
pub use types::{
    Edge, EdgeKind, GraphError, GraphResult, NodeValue, Path, PathLimits, Route,
    DEFAULT_EDGE_COST,
};
