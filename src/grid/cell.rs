//! Grid coordinates and the four growth directions.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::error::GridError;
use super::ingredient::Ingredient;

/// A grid coordinate, optionally tagged with the ingredient found there.
///
/// Identity is `(row, column)` only: two cells at the same position compare
/// equal and hash identically whatever their ingredient tag says.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: usize,
    pub column: usize,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub ingredient: Option<Ingredient>,
}

impl Cell {
    /// Creates an untagged cell.
    pub const fn new(row: usize, column: usize) -> Self {
        Self {
            row,
            column,
            ingredient: None,
        }
    }

    /// Creates a cell tagged with its ingredient.
    pub const fn labeled(row: usize, column: usize, ingredient: Ingredient) -> Self {
        Self {
            row,
            column,
            ingredient: Some(ingredient),
        }
    }

    /// Moves the cell by a signed offset.
    ///
    /// Fails with [`GridError::OutOfGrid`] when either coordinate would become
    /// negative. Upper bounds are the caller's business since a cell does not
    /// know its grid. The ingredient tag is dropped.
    pub fn offset(self, d_row: isize, d_column: isize) -> Result<Cell, GridError> {
        let row = self.row as isize + d_row;
        let column = self.column as isize + d_column;
        if row < 0 || column < 0 {
            return Err(GridError::OutOfGrid { row, column });
        }
        Ok(Cell::new(row as usize, column as usize))
    }

    /// The neighbouring cell one step towards `direction`.
    pub fn step(self, direction: Direction) -> Result<Cell, GridError> {
        let (d_row, d_column) = direction.delta();
        self.offset(d_row, d_column)
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.row == other.row && self.column == other.column
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.row.hash(state);
        self.column.hash(state);
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.column).cmp(&(other.row, other.column))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Direction in which a rectangle edge can be pushed outwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Down,
    Right,
    Up,
}

impl Direction {
    /// Expansion priority order.
    pub const PRIORITY: [Direction; 4] = [
        Direction::Left,
        Direction::Down,
        Direction::Right,
        Direction::Up,
    ];

    /// `(d_row, d_column)` of a single step.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Left => (0, -1),
            Direction::Down => (1, 0),
            Direction::Right => (0, 1),
            Direction::Up => (-1, 0),
        }
    }

    /// Index into [`Direction::PRIORITY`].
    pub const fn index(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Down => 1,
            Direction::Right => 2,
            Direction::Up => 3,
        }
    }

    /// True when growing this way adds a column rather than a row.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Down => "down",
            Direction::Right => "right",
            Direction::Up => "up",
        };
        f.write_str(name)
    }
}
