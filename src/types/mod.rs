//! All data types for the graph-paths library.

pub mod edge;
pub mod error;
pub mod limits;
pub mod path;

use std::fmt::Debug;
use std::hash::Hash;

pub use edge::{Edge, EdgeKind};
pub use error::{GraphError, GraphResult};
pub use limits::PathLimits;
pub use path::{Path, Route};

/// Cost assigned to every edge of an unlabeled graph.
pub const DEFAULT_EDGE_COST: u64 = 1;

/// Requirements on node values: identity is value equality.
pub trait NodeValue: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> NodeValue for T {}
