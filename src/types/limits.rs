//! Search limits for path enumeration.

/// Bounds on simple-path enumeration.
///
/// The number of simple paths grows combinatorially on dense graphs; these
/// bounds cut the search short. The default is unlimited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathLimits {
    /// Maximum number of edges in a reported path.
    pub max_depth: Option<usize>,
    /// Stop after this many paths have been reported.
    pub max_results: Option<usize>,
}

impl PathLimits {
    /// No limits.
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Set the maximum number of edges per path.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Set the maximum number of reported paths.
    pub fn max_results(mut self, count: usize) -> Self {
        self.max_results = Some(count);
        self
    }

    pub(crate) fn allows_depth(&self, edges: usize) -> bool {
        self.max_depth.map_or(true, |max| edges <= max)
    }

    pub(crate) fn is_full(&self, found: usize) -> bool {
        self.max_results.map_or(false, |max| found >= max)
    }
}
