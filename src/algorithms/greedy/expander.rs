//! Greedy growth of selected slices into neighbouring free cells.

use tracing::trace;

use crate::cover::{Cover, CoverError};
use crate::grid::{Direction, LabeledRect};

/// One committed growth step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Growth {
    /// Index of the slice in the cover.
    pub slice: usize,
    pub direction: Direction,
    /// Cell count of the slice after the step.
    pub cells: usize,
}

/// Expands every slice of `cover` that holds fewer than `max_cells` cells.
///
/// Slices are visited in cover order, so earlier slices get first pick of
/// contested free cells. Returns the committed steps in order.
pub fn expand(cover: &mut Cover<'_>, max_cells: usize) -> Result<Vec<Growth>, CoverError> {
    let mut steps = Vec::new();
    for index in 0..cover.len() {
        steps.extend(expand_slice(cover, index, max_cells)?);
    }
    Ok(steps)
}

/// Grows slice `index` until no direction can take another row or column.
///
/// Each round tries left, down, right, up in that order. A direction is
/// switched off for good once its neighbouring strip leaves the cover's
/// region, touches a claimed cell, or would push the slice past
/// `max_cells`. The loop ends when all four are off.
pub fn expand_slice(
    cover: &mut Cover<'_>,
    index: usize,
    max_cells: usize,
) -> Result<Vec<Growth>, CoverError> {
    let mut steps = Vec::new();
    let start = cover
        .get(index)
        .ok_or(CoverError::UnknownSlice(index))?
        .cell_count();
    if start >= max_cells {
        return Ok(steps);
    }

    let mut enabled = [true; 4];
    while enabled.iter().any(|&on| on) {
        for direction in Direction::PRIORITY {
            if !enabled[direction.index()] {
                continue;
            }
            let slice = cover.get(index).ok_or(CoverError::UnknownSlice(index))?;
            let grown = slice.grown_cell_count(direction);
            let blocked = match slice.bounds().edge(direction) {
                Ok(strip) => !cover.is_free(&strip),
                Err(_) => true,
            };
            if blocked || grown > max_cells {
                enabled[direction.index()] = false;
                continue;
            }

            cover.grow(index, direction)?;
            trace!(slice = index, %direction, cells = grown, "slice grown");
            steps.push(Growth {
                slice: index,
                direction,
                cells: grown,
            });
        }
    }
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Bounds, Grid, Limits};
    use crate::slice::Slice;

    fn b(top: usize, left: usize, bottom: usize, right: usize) -> Bounds {
        Bounds::try_from_coords(top, left, bottom, right).unwrap()
    }

    fn cover_with<'g>(grid: &'g Grid, slices: &[Bounds]) -> Cover<'g> {
        let mut cover = Cover::for_grid(grid);
        for &bounds in slices {
            cover.add(Slice::new(grid, bounds).unwrap()).unwrap();
        }
        cover
    }

    #[test]
    fn left_is_tried_before_down() {
        // Slice at the top right corner; row 2 belongs to another slice, so
        // only the cell to the left and the row below are free.
        let grid = Grid::from_rows(Limits::new(1, 6).unwrap(), &["TTM", "MTT", "TMT"]).unwrap();
        let mut cover = cover_with(&grid, &[b(0, 1, 0, 2), b(2, 0, 2, 2)]);

        let steps = expand_slice(&mut cover, 0, 6).unwrap();
        assert_eq!(
            steps,
            vec![
                Growth {
                    slice: 0,
                    direction: Direction::Left,
                    cells: 3
                },
                Growth {
                    slice: 0,
                    direction: Direction::Down,
                    cells: 6
                },
            ]
        );
        assert_eq!(cover.get(0).map(|s| s.bounds()), Some(b(0, 0, 1, 2)));
        assert_eq!(cover.claimed_cells(), 9);
    }

    #[test]
    fn full_slices_are_untouched() {
        let grid = Grid::from_rows(Limits::new(1, 2).unwrap(), &["TMT", "TTT"]).unwrap();
        let mut cover = cover_with(&grid, &[b(0, 0, 0, 1)]);
        assert!(expand(&mut cover, 2).unwrap().is_empty());
        assert_eq!(cover.get(0).map(|s| s.bounds()), Some(b(0, 0, 0, 1)));
    }

    #[test]
    fn growth_stops_at_budget() {
        let grid = Grid::from_rows(Limits::new(1, 5).unwrap(), &["TMTTTTTT"]).unwrap();
        let mut cover = cover_with(&grid, &[b(0, 0, 0, 1)]);
        let steps = expand(&mut cover, 5).unwrap();

        assert_eq!(steps.len(), 3);
        assert!(steps.iter().all(|s| s.direction == Direction::Right));
        assert_eq!(cover.get(0).map(|s| s.bounds()), Some(b(0, 0, 0, 4)));
        assert_eq!(cover.get(0).map(|s| s.tomatoes()), Some(4));
    }

    #[test]
    fn rectangle_growth_that_would_overshoot_is_refused() {
        // Growing a 2x2 slice by a column would make 6 > 5 cells.
        let grid = Grid::from_rows(Limits::new(1, 5).unwrap(), &["TMT", "MTT"]).unwrap();
        let mut cover = cover_with(&grid, &[b(0, 0, 1, 1)]);
        assert!(expand(&mut cover, 5).unwrap().is_empty());
        assert_eq!(cover.claimed_cells(), 4);
    }

    #[test]
    fn earlier_slices_claim_contested_cells() {
        // The middle cell is free and adjacent to both slices.
        let grid = Grid::from_rows(Limits::new(1, 3).unwrap(), &["TMTMT"]).unwrap();
        let mut cover = cover_with(&grid, &[b(0, 3, 0, 4), b(0, 0, 0, 1)]);
        let steps = expand(&mut cover, 3).unwrap();

        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].slice, 0);
        assert_eq!(steps[0].direction, Direction::Left);
        assert_eq!(cover.get(1).map(|s| s.bounds()), Some(b(0, 0, 0, 1)));
    }

    #[test]
    fn growth_keeps_cover_consistent() {
        let grid = Grid::from_rows(
            Limits::new(1, 8).unwrap(),
            &["TMTMTM", "MTMTMT", "TTMMTT", "MMTTMM"],
        )
        .unwrap();
        let mut cover = cover_with(&grid, &[b(1, 1, 1, 2), b(3, 3, 3, 4)]);
        let before = cover.claimed_cells();
        let steps = expand(&mut cover, 8).unwrap();

        let grown: usize = cover.iter().map(|s| s.cell_count()).sum();
        assert_eq!(cover.claimed_cells(), grown);
        assert!(cover.claimed_cells() >= before);
        assert!(cover.validate(&grid.limits()).is_ok());
        for direction in Direction::PRIORITY {
            let per_slice = steps.iter().filter(|s| s.direction == direction && s.slice == 0);
            assert!(per_slice.count() <= 8);
        }
    }

    #[test]
    fn unknown_slice_errors() {
        let grid = Grid::from_rows(Limits::new(1, 2).unwrap(), &["TM"]).unwrap();
        let mut cover = Cover::for_grid(&grid);
        assert_eq!(
            expand_slice(&mut cover, 0, 2),
            Err(CoverError::UnknownSlice(0))
        );
    }
}
