//! Configuration for the greedy slicer.

/// Switches for the optional stages of [`GreedySlicer`](super::GreedySlicer).
///
/// The defaults run the full heuristic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlicerConfig {
    /// Grow slices into free neighbouring cells after selection.
    pub expand: bool,
    /// Re-slice divisible slices when the selection leaves cells uncovered.
    pub subdivide_remainder: bool,
    /// Deepest recursion level the remainder pass may reach.
    pub max_depth: usize,
}

impl SlicerConfig {
    /// Selection only: no remainder pass and no expansion.
    pub fn selection_only() -> Self {
        Self {
            expand: false,
            subdivide_remainder: false,
            ..Self::default()
        }
    }
}

impl Default for SlicerConfig {
    fn default() -> Self {
        Self {
            expand: true,
            subdivide_remainder: true,
            max_depth: usize::MAX,
        }
    }
}
