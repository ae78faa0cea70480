//! Inclusive axis-aligned rectangles over grid coordinates.

use std::fmt::Display;

use super::cell::{Cell, Direction};
use super::error::GridError;

/// Rectangle `[upper_left, lower_right]`, both corners inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    upper_left: Cell,
    lower_right: Cell,
}

impl Bounds {
    /// Creates bounds from two corners.
    ///
    /// # Panics
    ///
    /// Panics if `upper_left` lies below or right of `lower_right`.
    pub fn new(upper_left: Cell, lower_right: Cell) -> Self {
        assert!(
            upper_left.row <= lower_right.row && upper_left.column <= lower_right.column,
            "Bounds upper-left corner must not pass the lower-right corner"
        );
        Self {
            upper_left: Cell::new(upper_left.row, upper_left.column),
            lower_right: Cell::new(lower_right.row, lower_right.column),
        }
    }

    /// Non-panicking constructor from `top left bottom right` coordinates.
    pub fn try_from_coords(top: usize, left: usize, bottom: usize, right: usize) -> Option<Self> {
        if top <= bottom && left <= right {
            Some(Self::new(Cell::new(top, left), Cell::new(bottom, right)))
        } else {
            None
        }
    }

    /// Rectangle of `height x width` cells anchored at `origin`.
    ///
    /// # Panics
    ///
    /// Panics if `height` or `width` is zero.
    pub fn with_shape(origin: Cell, height: usize, width: usize) -> Self {
        assert!(height > 0 && width > 0, "Bounds shape must be non-empty");
        Self::new(
            origin,
            Cell::new(origin.row + height - 1, origin.column + width - 1),
        )
    }

    pub const fn upper_left(&self) -> Cell {
        self.upper_left
    }

    pub const fn lower_right(&self) -> Cell {
        self.lower_right
    }

    pub const fn top(&self) -> usize {
        self.upper_left.row
    }

    pub const fn left(&self) -> usize {
        self.upper_left.column
    }

    pub const fn bottom(&self) -> usize {
        self.lower_right.row
    }

    pub const fn right(&self) -> usize {
        self.lower_right.column
    }

    /// Number of rows spanned.
    pub const fn rows(&self) -> usize {
        self.lower_right.row - self.upper_left.row + 1
    }

    /// Number of columns spanned.
    pub const fn columns(&self) -> usize {
        self.lower_right.column - self.upper_left.column + 1
    }

    /// Total number of cells.
    pub const fn area(&self) -> usize {
        self.rows() * self.columns()
    }

    /// Returns true if `cell` lies inside.
    pub fn contains(&self, cell: Cell) -> bool {
        self.top() <= cell.row
            && cell.row <= self.bottom()
            && self.left() <= cell.column
            && cell.column <= self.right()
    }

    /// Returns true if `other` lies entirely inside.
    pub fn contains_bounds(&self, other: &Bounds) -> bool {
        self.contains(other.upper_left) && self.contains(other.lower_right)
    }

    /// Returns true if the two rectangles share at least one cell.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.top() <= other.bottom()
            && other.top() <= self.bottom()
            && self.left() <= other.right()
            && other.left() <= self.right()
    }

    /// Iterates over every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (self.top()..=self.bottom())
            .flat_map(move |row| (self.left()..=self.right()).map(move |col| Cell::new(row, col)))
    }

    /// The one-cell-thick strip just outside the edge facing `direction`.
    ///
    /// Fails with [`GridError::OutOfGrid`] when the strip would sit at a
    /// negative row or column.
    pub fn edge(&self, direction: Direction) -> Result<Bounds, GridError> {
        let (from, to) = match direction {
            Direction::Left => (
                self.upper_left.step(direction)?,
                Cell::new(self.bottom(), self.left()).step(direction)?,
            ),
            Direction::Down => (
                Cell::new(self.bottom(), self.left()).step(direction)?,
                self.lower_right.step(direction)?,
            ),
            Direction::Right => (
                Cell::new(self.top(), self.right()).step(direction)?,
                self.lower_right.step(direction)?,
            ),
            Direction::Up => (
                self.upper_left.step(direction)?,
                Cell::new(self.top(), self.right()).step(direction)?,
            ),
        };
        Ok(Bounds::new(from, to))
    }

    /// These bounds pushed one row or column outwards towards `direction`.
    pub fn grown(&self, direction: Direction) -> Result<Bounds, GridError> {
        let edge = self.edge(direction)?;
        Ok(match direction {
            Direction::Left | Direction::Up => Bounds::new(edge.upper_left, self.lower_right),
            Direction::Down | Direction::Right => Bounds::new(self.upper_left, edge.lower_right),
        })
    }
}

impl Display for Bounds {
    /// Writes `top left bottom right`, the submission line format.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.top(),
            self.left(),
            self.bottom(),
            self.right()
        )
    }
}
