use thiserror::Error;

use crate::cover::CoverError;
use crate::grid::GridError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SlicingError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Cover(#[from] CoverError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_error_display_is_forwarded() {
        let e: SlicingError = GridError::InvalidConfiguration {
            min_each: 3,
            max_cells: 5,
        }
        .into();
        assert_eq!(
            e.to_string(),
            "Invalid configuration: a slice of at most 5 cells cannot hold 3 of each ingredient"
        );
    }

    #[test]
    fn cover_error_display_is_forwarded() {
        let e: SlicingError = CoverError::UnknownSlice(7).into();
        assert_eq!(e.to_string(), "No slice at index 7");
    }

    #[test]
    fn from_keeps_variant() {
        let e = SlicingError::from(GridError::MissingHeader);
        assert_eq!(e, SlicingError::Grid(GridError::MissingHeader));
    }
}
