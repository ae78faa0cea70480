//! pizza_slicer - greedy rectangular slicing of a two-ingredient grid
//!
//! Cuts a grid of tomato and mushroom cells into non-overlapping rectangular
//! slices, each holding at least `L` of both ingredients and at most `H`
//! cells, trying to cover as many cells as possible.

pub mod algorithms;
pub mod cover;
pub mod grid;
pub mod slice;

pub use algorithms::{GreedySlicer, SlicerConfig, SlicingAlgorithm, SlicingError};
pub use cover::{Cover, CoverError};
pub use grid::{Bounds, Grid, GridError, Limits};
pub use slice::Slice;
