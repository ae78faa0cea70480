pub mod config;
pub mod error;
pub mod greedy;

pub use config::SlicerConfig;
pub use error::SlicingError;
pub use greedy::GreedySlicer;

use crate::cover::Cover;
use crate::grid::Grid;

/// Algorithm for cutting a grid into valid slices.
pub trait SlicingAlgorithm {
    /// Cut `grid` into non-overlapping slices that respect its limits.
    ///
    /// # Arguments
    ///
    /// * `grid` - The grid to cut; its [`Limits`](crate::grid::Limits) bound every slice
    ///
    /// # Returns
    ///
    /// A [`Cover`] over the whole grid. Cells outside every slice stay uncovered.
    fn cut<'g>(&self, grid: &'g Grid) -> Result<Cover<'g>, SlicingError>;
}
