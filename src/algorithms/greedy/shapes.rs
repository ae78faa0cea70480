//! Candidate rectangle dimensions, grouped by area.

use std::fmt;

use crate::grid::{GridError, Limits};

/// Dimensions of a candidate rectangle, independent of position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub height: usize,
    pub width: usize,
}

impl Shape {
    pub const fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

/// All shapes of one area that fit the region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaShapes {
    pub area: usize,
    /// Ordered by descending height. May be empty.
    pub shapes: Vec<Shape>,
}

/// Enumerates feasible shapes for every area from `max_cells` down to
/// `2 * min_each`.
///
/// Each area lists its factor pairs `height x width` with
/// `height <= rows` and `width <= columns`, tallest first, so both
/// orientations appear when they differ and a square appears once.
/// Areas larger than the region are skipped; smaller areas without a
/// fitting shape keep an empty list.
///
/// Fails fast when no area can hold the minimum of both ingredients, or when
/// the region is empty.
pub fn feasible_shapes(
    limits: &Limits,
    rows: usize,
    columns: usize,
) -> Result<Vec<AreaShapes>, GridError> {
    limits.validate()?;
    if rows == 0 || columns == 0 {
        return Err(GridError::EmptyGrid { rows, columns });
    }

    let largest = limits.max_cells.min(rows.saturating_mul(columns));
    Ok((limits.min_area()..=largest)
        .rev()
        .map(|area| AreaShapes {
            area,
            shapes: shapes_for_area(area, rows, columns),
        })
        .collect())
}

fn shapes_for_area(area: usize, rows: usize, columns: usize) -> Vec<Shape> {
    (1..=area.min(rows))
        .rev()
        .filter(|height| area % height == 0)
        .map(|height| Shape::new(height, area / height))
        .filter(|shape| shape.width <= columns)
        .collect()
}
