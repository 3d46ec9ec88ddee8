//! In-memory graph and the path algorithms that run over it.

pub mod builder;
pub mod labeled_graph;
pub mod shortest;
pub mod traversal;

pub use builder::GraphBuilder;
pub use labeled_graph::Graph;
pub use shortest::{
    shortest_path, shortest_path_unweighted, shortest_path_with, shortest_route,
    shortest_route_unweighted, shortest_route_with,
};
pub use traversal::{all_paths, all_paths_limited};
