//! Slice size limits and the regions they apply to.

use super::bounds::Bounds;
use super::error::GridError;

/// Per-slice constraints: at least `min_each` of every ingredient and at most
/// `max_cells` cells in total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Limits {
    pub min_each: usize,
    pub max_cells: usize,
}

impl Limits {
    /// Creates limits, rejecting combinations no slice can satisfy.
    pub fn new(min_each: usize, max_cells: usize) -> Result<Self, GridError> {
        let limits = Self {
            min_each,
            max_cells,
        };
        limits.validate()?;
        Ok(limits)
    }

    /// Fails unless `min_each >= 1` and `max_cells >= 2 * min_each`.
    pub fn validate(&self) -> Result<(), GridError> {
        match self.min_each.checked_mul(2) {
            Some(min_area) if self.min_each > 0 && min_area <= self.max_cells => Ok(()),
            _ => Err(GridError::InvalidConfiguration {
                min_each: self.min_each,
                max_cells: self.max_cells,
            }),
        }
    }

    /// Smallest area that can hold `min_each` of both ingredients.
    ///
    /// Saturates for limits that [`validate`](Self::validate) rejects.
    pub const fn min_area(&self) -> usize {
        self.min_each.saturating_mul(2)
    }

    /// Returns true if a slice with these tallies satisfies the limits.
    pub const fn admits(&self, tomatoes: usize, mushrooms: usize) -> bool {
        tomatoes >= self.min_each
            && mushrooms >= self.min_each
            && tomatoes + mushrooms <= self.max_cells
    }

    /// Returns true if a slice with these tallies could be split into two
    /// slices that each satisfy the minimum.
    pub const fn divisible(&self, tomatoes: usize, mushrooms: usize) -> bool {
        let twice = self.min_area();
        tomatoes >= twice && mushrooms >= twice
    }

    /// The same minimum with a smaller cell budget.
    pub const fn with_max_cells(self, max_cells: usize) -> Self {
        Self {
            min_each: self.min_each,
            max_cells,
        }
    }
}

/// A rectangle of the grid and the limits that apply to slices inside it.
///
/// The whole grid is the top-level region. Remainder subdivision works on
/// the region of a single slice with a reduced cell budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub bounds: Bounds,
    pub limits: Limits,
}

impl Region {
    pub const fn new(bounds: Bounds, limits: Limits) -> Self {
        Self { bounds, limits }
    }
}
