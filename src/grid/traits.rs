//! Read-only capability shared by whole grids and slices.

use super::bounds::Bounds;
use super::cell::Cell;
use super::grid::Grid;
use super::ingredient::Ingredient;

/// A rectangle of labeled cells.
///
/// Implemented by [`Grid`] (the whole layout) and by
/// [`Slice`](crate::slice::Slice) (a sub-rectangle borrowing its grid).
/// Implementors only expose bounds and tallies; label lookup always goes
/// through the backing grid.
pub trait LabeledRect {
    /// The grid that owns the labels.
    fn grid(&self) -> &Grid;

    /// The rectangle covered, in grid coordinates.
    fn bounds(&self) -> Bounds;

    /// Number of cells carrying `ingredient`.
    fn count(&self, ingredient: Ingredient) -> usize;

    fn tomatoes(&self) -> usize {
        self.count(Ingredient::Tomato)
    }

    fn mushrooms(&self) -> usize {
        self.count(Ingredient::Mushroom)
    }

    /// Total number of cells.
    fn cell_count(&self) -> usize {
        self.bounds().area()
    }

    /// The ingredient at `cell`, or `None` when it lies outside the rectangle.
    fn ingredient_at(&self, cell: Cell) -> Option<Ingredient> {
        if self.bounds().contains(cell) {
            self.grid().ingredient(cell.row, cell.column)
        } else {
            None
        }
    }
}
