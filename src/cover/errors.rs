use thiserror::Error;

use crate::grid::{Bounds, Cell, GridError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoverError {
    /// Slice reaches outside the region the cover is allowed to claim
    #[error("Slice {0} lies outside the cover region")]
    OutsideRegion(Bounds),

    /// Slice would claim a cell another slice already holds
    #[error("Slice {bounds} overlaps an existing slice at {cell}")]
    Overlap { bounds: Bounds, cell: Cell },

    /// Slice lacks the minimum amount of one ingredient
    #[error("Slice {bounds} has {tomatoes} tomatoes and {mushrooms} mushrooms, needs {min_each} of each")]
    Underfilled {
        bounds: Bounds,
        tomatoes: usize,
        mushrooms: usize,
        min_each: usize,
    },

    /// Slice holds more cells than allowed
    #[error("Slice {bounds} has {cells} cells, at most {max_cells} allowed")]
    Oversized {
        bounds: Bounds,
        cells: usize,
        max_cells: usize,
    },

    /// Slice index was not found in the cover
    #[error("No slice at index {0}")]
    UnknownSlice(usize),

    /// A replacement cover does not claim every cell of the slice it replaces
    #[error("Subdivision of slice {0} does not cover it completely")]
    IncompleteSubdivision(usize),

    /// A submission file could not be read
    #[error("Invalid submission at line {line}: {reason}")]
    InvalidSubmission { line: usize, reason: String },

    #[error(transparent)]
    Grid(#[from] GridError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b() -> Bounds {
        Bounds::try_from_coords(0, 1, 2, 3).unwrap()
    }

    #[test]
    fn overlap_display() {
        let e = CoverError::Overlap {
            bounds: b(),
            cell: Cell::new(1, 2),
        };
        assert_eq!(e.to_string(), "Slice 0 1 2 3 overlaps an existing slice at (1, 2)");
    }

    #[test]
    fn oversized_display() {
        let e = CoverError::Oversized {
            bounds: b(),
            cells: 9,
            max_cells: 6,
        };
        assert_eq!(e.to_string(), "Slice 0 1 2 3 has 9 cells, at most 6 allowed");
    }

    #[test]
    fn grid_errors_pass_through() {
        let e: CoverError = GridError::MissingHeader.into();
        assert_eq!(e.to_string(), GridError::MissingHeader.to_string());
    }
}
