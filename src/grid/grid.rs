//! The immutable ingredient layout.

use std::fmt::Display;

use rand::Rng;

use super::bounds::Bounds;
use super::cell::Cell;
use super::error::GridError;
use super::ingredient::Ingredient;
use super::limits::{Limits, Region};
use super::traits::LabeledRect;

/// An `rows x columns` layout in which every cell holds one ingredient,
/// together with the slice [`Limits`] of the problem.
///
/// The grid is built once and never mutated. A tomato prefix-sum table is
/// kept alongside the labels so that ingredient counts over any rectangle
/// cost O(1).
///
/// # Examples
///
/// ```
/// use pizza_slicer::grid::{Grid, Ingredient, LabeledRect, Limits};
///
/// let grid = Grid::from_rows(Limits::new(1, 6).unwrap(), &["TTT", "TMT"]).unwrap();
/// assert_eq!(grid.rows(), 2);
/// assert_eq!(grid.columns(), 3);
/// assert_eq!(grid.mushrooms(), 1);
/// assert_eq!(grid.ingredient(1, 1), Some(Ingredient::Mushroom));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    limits: Limits,
    cells: Vec<Ingredient>,
    /// `tomato_prefix[r * (columns + 1) + c]` = tomatoes in rows `< r`, columns `< c`.
    tomato_prefix: Vec<usize>,
}

impl Grid {
    /// Builds a grid from row-major labels.
    pub fn new(
        rows: usize,
        columns: usize,
        limits: Limits,
        cells: Vec<Ingredient>,
    ) -> Result<Self, GridError> {
        let expected = cell_total(rows, columns)?;
        limits.validate()?;
        if cells.len() != expected {
            return Err(GridError::CellCount {
                expected,
                found: cells.len(),
            });
        }

        let stride = columns + 1;
        let mut tomato_prefix = vec![0; (rows + 1) * stride];
        for row in 0..rows {
            let mut run = 0;
            for column in 0..columns {
                if cells[row * columns + column] == Ingredient::Tomato {
                    run += 1;
                }
                tomato_prefix[(row + 1) * stride + column + 1] =
                    tomato_prefix[row * stride + column + 1] + run;
            }
        }

        Ok(Self {
            rows,
            columns,
            limits,
            cells,
            tomato_prefix,
        })
    }

    /// Builds a grid from text rows of `T` / `M` characters.
    pub fn from_rows<S: AsRef<str>>(limits: Limits, rows: &[S]) -> Result<Self, GridError> {
        let columns = rows.first().map(|r| r.as_ref().chars().count()).unwrap_or(0);
        let mut cells = Vec::with_capacity(rows.len() * columns);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != columns {
                return Err(GridError::RowLength {
                    row,
                    expected: columns,
                    found,
                });
            }
            for (column, c) in line.chars().enumerate() {
                let ingredient = Ingredient::from_char(c)
                    .ok_or(GridError::UnknownIngredient { row, column, found: c })?;
                cells.push(ingredient);
            }
        }
        Self::new(rows.len(), columns, limits, cells)
    }

    /// Generates a random layout where each cell is a tomato with
    /// probability `tomato_ratio` (clamped to `[0, 1]`).
    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        columns: usize,
        limits: Limits,
        tomato_ratio: f64,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        let p = if tomato_ratio.is_nan() {
            0.5
        } else {
            tomato_ratio.clamp(0.0, 1.0)
        };
        let cells = (0..cell_total(rows, columns)?)
            .map(|_| {
                if rng.gen_bool(p) {
                    Ingredient::Tomato
                } else {
                    Ingredient::Mushroom
                }
            })
            .collect();
        Self::new(rows, columns, limits, cells)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// The whole grid as a region under the global limits.
    pub fn region(&self) -> Region {
        Region::new(self.bounds(), self.limits)
    }

    /// The ingredient at `(row, column)`, if inside the grid.
    pub fn ingredient(&self, row: usize, column: usize) -> Option<Ingredient> {
        if row < self.rows && column < self.columns {
            Some(self.cells[row * self.columns + column])
        } else {
            None
        }
    }

    /// The labeled cell at `(row, column)`, if inside the grid.
    pub fn cell(&self, row: usize, column: usize) -> Option<Cell> {
        self.ingredient(row, column)
            .map(|ingredient| Cell::labeled(row, column, ingredient))
    }

    /// Counts `ingredient` inside `bounds` in O(1).
    ///
    /// Only the part of `bounds` that lies inside the grid is counted.
    pub fn count_in(&self, bounds: &Bounds, ingredient: Ingredient) -> usize {
        if bounds.top() >= self.rows || bounds.left() >= self.columns {
            return 0;
        }
        let bottom = bounds.bottom().min(self.rows - 1);
        let right = bounds.right().min(self.columns - 1);
        let stride = self.columns + 1;
        let at = |row: usize, column: usize| self.tomato_prefix[row * stride + column];

        let tomatoes = at(bottom + 1, right + 1) + at(bounds.top(), bounds.left())
            - at(bounds.top(), right + 1)
            - at(bottom + 1, bounds.left());
        match ingredient {
            Ingredient::Tomato => tomatoes,
            Ingredient::Mushroom => {
                (bottom - bounds.top() + 1) * (right - bounds.left() + 1) - tomatoes
            }
        }
    }
}

/// Cell count of a `rows x columns` grid, rejecting empty grids and sizes
/// whose prefix table cannot be addressed.
fn cell_total(rows: usize, columns: usize) -> Result<usize, GridError> {
    if rows == 0 || columns == 0 {
        return Err(GridError::EmptyGrid { rows, columns });
    }
    let prefix = rows
        .checked_add(1)
        .zip(columns.checked_add(1))
        .and_then(|(r, c)| r.checked_mul(c));
    match prefix {
        Some(_) => Ok(rows * columns),
        None => Err(GridError::TooLarge { rows, columns }),
    }
}

impl LabeledRect for Grid {
    fn grid(&self) -> &Grid {
        self
    }

    fn bounds(&self) -> Bounds {
        Bounds::new(
            Cell::new(0, 0),
            Cell::new(self.rows - 1, self.columns - 1),
        )
    }

    fn count(&self, ingredient: Ingredient) -> usize {
        self.count_in(&self.bounds(), ingredient)
    }
}

impl Display for Grid {
    /// Writes the grid in the input file format.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} {} {} {}",
            self.rows, self.columns, self.limits.min_each, self.limits.max_cells
        )?;
        for row in self.cells.chunks(self.columns) {
            let line: String = row.iter().map(|i| i.as_char()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn limits() -> Limits {
        Limits::new(1, 6).unwrap()
    }

    #[test]
    fn rejects_empty_and_mismatched_grids() {
        assert_eq!(
            Grid::new(0, 3, limits(), vec![]),
            Err(GridError::EmptyGrid {
                rows: 0,
                columns: 3
            })
        );
        assert_eq!(
            Grid::new(2, 2, limits(), vec![Ingredient::Tomato; 3]),
            Err(GridError::CellCount {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        let huge = usize::MAX / 2;
        assert_eq!(
            Grid::new(huge, 3, limits(), vec![]),
            Err(GridError::TooLarge {
                rows: huge,
                columns: 3
            })
        );
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            Grid::random(3, usize::MAX, limits(), 0.5, &mut rng),
            Err(GridError::TooLarge {
                rows: 3,
                columns: usize::MAX
            })
        );
    }

    #[test]
    fn from_rows_reports_bad_input() {
        assert_eq!(
            Grid::from_rows(limits(), &["TM", "T"]),
            Err(GridError::RowLength {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            Grid::from_rows(limits(), &["TM", "TX"]),
            Err(GridError::UnknownIngredient {
                row: 1,
                column: 1,
                found: 'X'
            })
        );
    }

    #[test]
    fn prefix_counts_match_scan() {
        let grid = Grid::from_rows(limits(), &["TMTTM", "MMTTT", "TMMMT", "TTTTM"]).unwrap();
        for top in 0..grid.rows() {
            for bottom in top..grid.rows() {
                for left in 0..grid.columns() {
                    for right in left..grid.columns() {
                        let bounds = Bounds::try_from_coords(top, left, bottom, right).unwrap();
                        let scanned = bounds
                            .cells()
                            .filter(|c| grid.ingredient(c.row, c.column) == Some(Ingredient::Tomato))
                            .count();
                        assert_eq!(grid.count_in(&bounds, Ingredient::Tomato), scanned);
                        assert_eq!(
                            grid.count_in(&bounds, Ingredient::Mushroom),
                            bounds.area() - scanned
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn labeled_rect_for_whole_grid() {
        let grid = Grid::from_rows(limits(), &["TTM", "MTT"]).unwrap();
        assert_eq!(grid.tomatoes(), 4);
        assert_eq!(grid.mushrooms(), 2);
        assert_eq!(grid.cell_count(), 6);
        assert_eq!(grid.ingredient_at(Cell::new(1, 0)), Some(Ingredient::Mushroom));
        assert_eq!(grid.ingredient_at(Cell::new(2, 0)), None);
        assert_eq!(
            grid.cell(0, 2).and_then(|c| c.ingredient),
            Some(Ingredient::Mushroom)
        );
    }

    #[test]
    fn display_writes_input_format() {
        let grid = Grid::from_rows(limits(), &["TTM", "MTT"]).unwrap();
        assert_eq!(grid.to_string(), "2 3 1 6\nTTM\nMTT\n");
    }

    #[test]
    fn random_is_seeded() {
        let a = Grid::random(6, 7, limits(), 0.5, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = Grid::random(6, 7, limits(), 0.5, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);

        let all_tomato = Grid::random(3, 3, limits(), 1.0, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(all_tomato.tomatoes(), 9);
    }
}
