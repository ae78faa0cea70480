//! Greedy size-descending slicing.
//!
//! The algorithm covers the grid in four stages:
//!
//! 1. **Shape enumeration**: for every area from `H` down to `2L`, list the
//!    `height x width` rectangles that fit the grid, tallest first.
//! 2. **Tiling**: for one shape, place rectangles from the top-left corner
//!    down each column block, then right, keeping only valid placements.
//! 3. **Selection**: per area, keep the tiling that adds the most slices
//!    without overlapping the cover so far (first shape wins ties). If cells
//!    remain uncovered, every slice holding at least `2L` of each ingredient
//!    is re-sliced with `H` lowered to its size minus one; the pieces replace
//!    it when they cover it completely.
//! 4. **Expansion**: every slice smaller than `H` grows left, down, right,
//!    up (in that priority) into free cells while it stays within `H`.
//!
//! The result is deterministic: the same grid always gives the same cover,
//! slice for slice and in the same order.
//!
//! # Module Structure
//!
//! - [`shapes`] - Candidate rectangle dimensions per area
//! - [`tiler`] - Canonical tiling of a region by one shape
//! - [`selector`] - Area-descending selection and remainder subdivision
//! - [`expander`] - Growth of slices into neighbouring free cells

pub mod expander;
pub mod selector;
pub mod shapes;
pub mod tiler;

use tracing::{debug, info};

use crate::cover::Cover;
use crate::grid::Grid;

use super::{SlicerConfig, SlicingAlgorithm, SlicingError};

pub use expander::Growth;
pub use shapes::{AreaShapes, Shape};

/// Greedy size-descending slicer.
#[derive(Debug, Clone, Default)]
pub struct GreedySlicer {
    config: SlicerConfig,
}

impl GreedySlicer {
    pub fn new(config: SlicerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SlicerConfig {
        &self.config
    }
}

impl SlicingAlgorithm for GreedySlicer {
    fn cut<'g>(&self, grid: &'g Grid) -> Result<Cover<'g>, SlicingError> {
        let limits = grid.limits();
        limits.validate()?;

        let mut cover = selector::select(grid, grid.region(), &self.config, 0)?;
        debug!(
            slices = cover.len(),
            covered = cover.claimed_cells(),
            "selection finished"
        );

        if self.config.expand {
            let steps = expander::expand(&mut cover, limits.max_cells)?;
            debug!(growths = steps.len(), covered = cover.claimed_cells(), "expansion finished");
        }

        let stats = cover.stats();
        info!(
            rows = grid.rows(),
            columns = grid.columns(),
            slices = stats.slices,
            covered = stats.covered,
            total = stats.total,
            "grid sliced"
        );
        Ok(cover)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Bounds, LabeledRect, Limits};

    fn b(top: usize, left: usize, bottom: usize, right: usize) -> Bounds {
        Bounds::try_from_coords(top, left, bottom, right).unwrap()
    }

    #[test]
    fn default_runs_every_stage() {
        let slicer = GreedySlicer::default();
        assert!(slicer.config().expand);
        assert!(slicer.config().subdivide_remainder);
    }

    #[test]
    fn single_mushroom_gives_one_slice() {
        let grid = Grid::from_rows(Limits::new(1, 9).unwrap(), &["TTT", "TMT", "TTT"]).unwrap();
        let cover = GreedySlicer::default().cut(&grid).unwrap();
        assert_eq!(cover.len(), 1);
        assert_eq!(cover.get(0).map(|s| s.bounds()), Some(b(0, 0, 2, 2)));
        assert_eq!(cover.get(0).map(|s| (s.tomatoes(), s.mushrooms())), Some((8, 1)));
    }

    #[test]
    fn expansion_picks_up_leftover_cells() {
        // Selection covers the 2x2 block (as two dominoes after
        // subdivision); expansion then grows one of them into column 2.
        let grid = Grid::from_rows(Limits::new(1, 4).unwrap(), &["TMT", "MTT"]).unwrap();

        let without = GreedySlicer::new(SlicerConfig {
            expand: false,
            ..SlicerConfig::default()
        })
        .cut(&grid)
        .unwrap();
        assert_eq!(without.claimed_cells(), 4);

        let cover = GreedySlicer::default().cut(&grid).unwrap();
        assert_eq!(cover.claimed_cells(), 6);
        assert!(cover.validate(&grid.limits()).is_ok());
    }
}
