//! Rectangular slices cut from a grid.

use std::fmt;

use crate::grid::{Bounds, Direction, Grid, GridError, Ingredient, LabeledRect, Limits};

/// A rectangle of a [`Grid`] with running ingredient tallies.
///
/// A slice borrows its grid for label lookup and never mutates it. Its bounds
/// may only grow (see [`Slice::grow`]), and tallies are updated from the
/// newly added cells rather than recounted.
#[derive(Clone)]
pub struct Slice<'g> {
    grid: &'g Grid,
    bounds: Bounds,
    tomatoes: usize,
    mushrooms: usize,
}

impl<'g> Slice<'g> {
    /// Cuts `bounds` out of `grid`.
    ///
    /// Fails with [`GridError::OutOfGrid`] when `bounds` reaches past the
    /// last row or column.
    pub fn new(grid: &'g Grid, bounds: Bounds) -> Result<Self, GridError> {
        if !grid.bounds().contains_bounds(&bounds) {
            return Err(GridError::OutOfGrid {
                row: bounds.bottom() as isize,
                column: bounds.right() as isize,
            });
        }
        Ok(Self {
            grid,
            bounds,
            tomatoes: grid.count_in(&bounds, Ingredient::Tomato),
            mushrooms: grid.count_in(&bounds, Ingredient::Mushroom),
        })
    }

    /// Returns true if the tallies satisfy `limits`.
    pub fn is_valid(&self, limits: &Limits) -> bool {
        limits.admits(self.tomatoes, self.mushrooms)
    }

    /// Returns true if each ingredient reaches twice the minimum, i.e. the
    /// slice might be cut into two valid slices.
    pub fn is_divisible(&self, limits: &Limits) -> bool {
        limits.divisible(self.tomatoes, self.mushrooms)
    }

    /// Cell count after growing one step towards `direction`.
    pub fn grown_cell_count(&self, direction: Direction) -> usize {
        if direction.is_horizontal() {
            self.bounds.rows() * (self.bounds.columns() + 1)
        } else {
            (self.bounds.rows() + 1) * self.bounds.columns()
        }
    }

    /// Pushes one edge outwards and returns the strip of cells added.
    ///
    /// Only the strip is counted. Overlap with other slices is not checked
    /// here; that is the owning cover's job.
    pub fn grow(&mut self, direction: Direction) -> Result<Bounds, GridError> {
        let strip = self.bounds.edge(direction)?;
        if !self.grid.bounds().contains_bounds(&strip) {
            return Err(GridError::OutOfGrid {
                row: strip.bottom() as isize,
                column: strip.right() as isize,
            });
        }
        self.bounds = self.bounds.grown(direction)?;
        self.tomatoes += self.grid.count_in(&strip, Ingredient::Tomato);
        self.mushrooms += self.grid.count_in(&strip, Ingredient::Mushroom);
        Ok(strip)
    }
}

impl LabeledRect for Slice<'_> {
    fn grid(&self) -> &Grid {
        self.grid
    }

    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn count(&self, ingredient: Ingredient) -> usize {
        match ingredient {
            Ingredient::Tomato => self.tomatoes,
            Ingredient::Mushroom => self.mushrooms,
        }
    }
}

impl PartialEq for Slice<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.grid, other.grid)
            && self.bounds == other.bounds
            && self.tomatoes == other.tomatoes
            && self.mushrooms == other.mushrooms
    }
}

impl Eq for Slice<'_> {}

impl fmt::Debug for Slice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slice")
            .field("bounds", &self.bounds)
            .field("tomatoes", &self.tomatoes)
            .field("mushrooms", &self.mushrooms)
            .finish()
    }
}

impl fmt::Display for Slice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bounds)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Slice<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Slice", 4)?;
        s.serialize_field("upper_left", &self.bounds.upper_left())?;
        s.serialize_field("lower_right", &self.bounds.lower_right())?;
        s.serialize_field("tomatoes", &self.tomatoes)?;
        s.serialize_field("mushrooms", &self.mushrooms)?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;

    fn grid() -> Grid {
        Grid::from_rows(Limits::new(1, 6).unwrap(), &["TTMT", "TMMT", "TTTT"]).unwrap()
    }

    fn b(top: usize, left: usize, bottom: usize, right: usize) -> Bounds {
        Bounds::try_from_coords(top, left, bottom, right).unwrap()
    }

    #[test]
    fn counts_on_creation() {
        let grid = grid();
        let slice = Slice::new(&grid, b(0, 1, 1, 2)).unwrap();
        assert_eq!(slice.tomatoes(), 1);
        assert_eq!(slice.mushrooms(), 3);
        assert_eq!(slice.cell_count(), 4);
        assert_eq!(slice.ingredient_at(Cell::new(0, 1)), Some(Ingredient::Tomato));
        assert_eq!(slice.ingredient_at(Cell::new(0, 0)), None);
        assert_eq!(slice.to_string(), "0 1 1 2");
    }

    #[test]
    fn rejects_bounds_past_grid() {
        let grid = grid();
        assert!(matches!(
            Slice::new(&grid, b(2, 0, 3, 0)),
            Err(GridError::OutOfGrid { .. })
        ));
    }

    #[test]
    fn validity_and_divisibility() {
        let grid = grid();
        let limits = grid.limits();
        assert!(Slice::new(&grid, b(0, 1, 1, 2)).unwrap().is_valid(&limits));
        // all tomatoes
        assert!(!Slice::new(&grid, b(2, 0, 2, 3)).unwrap().is_valid(&limits));
        // too big
        assert!(!Slice::new(&grid, b(0, 0, 2, 3)).unwrap().is_valid(&limits));

        assert!(Slice::new(&grid, b(0, 0, 1, 2)).unwrap().is_divisible(&limits));
        assert!(!Slice::new(&grid, b(0, 1, 1, 2)).unwrap().is_divisible(&limits));
    }

    #[test]
    fn grow_updates_tallies_incrementally() {
        let grid = grid();
        let mut slice = Slice::new(&grid, b(0, 1, 1, 2)).unwrap();
        assert_eq!(slice.grown_cell_count(Direction::Left), 6);
        assert_eq!(slice.grown_cell_count(Direction::Down), 6);

        let strip = slice.grow(Direction::Down).unwrap();
        assert_eq!(strip, b(2, 1, 2, 2));
        assert_eq!(slice.bounds(), b(0, 1, 2, 2));
        assert_eq!(slice.tomatoes(), 3);
        assert_eq!(slice.mushrooms(), 3);
        assert_eq!(slice, Slice::new(&grid, b(0, 1, 2, 2)).unwrap());
    }

    #[test]
    fn grow_fails_at_grid_edges() {
        let grid = grid();
        let mut slice = Slice::new(&grid, b(0, 0, 2, 0)).unwrap();
        assert!(slice.grow(Direction::Left).is_err());
        assert!(slice.grow(Direction::Up).is_err());
        assert!(slice.grow(Direction::Down).is_err());
        assert_eq!(slice.bounds(), b(0, 0, 2, 0));
        assert!(slice.grow(Direction::Right).is_ok());
    }
}
