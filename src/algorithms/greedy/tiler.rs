//! Canonical top-left-anchored tiling of a region by one shape.

use crate::grid::{Bounds, Cell, Grid, GridError, LabeledRect, Region};
use crate::slice::Slice;

use super::shapes::Shape;

/// Placement positions for one shape, in tiling order.
///
/// Starts at the region's upper-left cell and walks down in steps of the
/// shape height while another rectangle still fits; then returns to the top
/// row and moves right by the shape width. Stops once a rectangle would reach
/// past the region's right edge.
#[derive(Debug, Clone)]
pub struct Placements {
    region: Bounds,
    shape: Shape,
    next: Option<Cell>,
}

impl Placements {
    pub fn new(region: Bounds, shape: Shape) -> Self {
        let fits = shape.height > 0
            && shape.width > 0
            && shape.height <= region.rows()
            && shape.width <= region.columns();
        Self {
            region,
            shape,
            next: fits.then(|| region.upper_left()),
        }
    }
}

impl Iterator for Placements {
    type Item = Bounds;

    fn next(&mut self) -> Option<Bounds> {
        let origin = self.next?;
        let placed = Bounds::with_shape(origin, self.shape.height, self.shape.width);

        let below = origin.row + self.shape.height;
        let beside = origin.column + self.shape.width;
        self.next = if below + self.shape.height - 1 <= self.region.bottom() {
            Some(Cell::new(below, origin.column))
        } else if beside + self.shape.width - 1 <= self.region.right() {
            Some(Cell::new(self.region.top(), beside))
        } else {
            None
        };
        Some(placed)
    }
}

/// Tiles `region` with `shape` and keeps the placements that satisfy the
/// region's limits, in placement order.
///
/// Invalid placements are dropped silently. Fails only when the region does
/// not lie inside the grid.
pub fn tile<'g>(grid: &'g Grid, region: &Region, shape: Shape) -> Result<Vec<Slice<'g>>, GridError> {
    if !grid.bounds().contains_bounds(&region.bounds) {
        return Err(GridError::OutOfGrid {
            row: region.bounds.bottom() as isize,
            column: region.bounds.right() as isize,
        });
    }

    let mut slices = Vec::new();
    for bounds in Placements::new(region.bounds, shape) {
        let slice = Slice::new(grid, bounds)?;
        if slice.is_valid(&region.limits) {
            slices.push(slice);
        }
    }
    Ok(slices)
}
