use thiserror::Error;

/// Errors raised while building, parsing or addressing a grid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid configuration: a slice of at most {max_cells} cells cannot hold {min_each} of each ingredient")]
    InvalidConfiguration { min_each: usize, max_cells: usize },

    #[error("Grid must have at least one row and one column, got {rows}x{columns}")]
    EmptyGrid { rows: usize, columns: usize },

    #[error("Grid of {rows}x{columns} cells is too large to address")]
    TooLarge { rows: usize, columns: usize },

    #[error("Expected {expected} cells for the grid, got {found}")]
    CellCount { expected: usize, found: usize },

    #[error("Coordinate ({row}, {column}) lies outside the grid")]
    OutOfGrid { row: isize, column: isize },

    #[error("Input is missing the 'rows columns L H' header line")]
    MissingHeader,

    #[error("Invalid header line: {0}")]
    InvalidHeader(String),

    #[error("Expected {expected} grid rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("Row {row} has {found} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Unknown ingredient {found:?} at ({row}, {column})")]
    UnknownIngredient {
        row: usize,
        column: usize,
        found: char,
    },
}
