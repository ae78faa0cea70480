//! Size-descending selection of tilings, with remainder subdivision.

use tracing::{debug, trace};

use crate::algorithms::{SlicerConfig, SlicingError};
use crate::cover::Cover;
use crate::grid::{Grid, LabeledRect, Limits, Region};
use crate::slice::Slice;

use super::shapes::feasible_shapes;
use super::tiler::tile;

/// Builds a cover of `region` from the largest area down.
///
/// For every area group, each shape's tiling is filtered against the cover
/// built so far and the largest surviving set is merged in; on equal sizes
/// the shape listed first wins. When cells remain uncovered afterwards, the
/// remainder pass runs (see [`subdivide_divisible`]).
pub fn select<'g>(
    grid: &'g Grid,
    region: Region,
    config: &SlicerConfig,
    depth: usize,
) -> Result<Cover<'g>, SlicingError> {
    let groups = feasible_shapes(&region.limits, region.bounds.rows(), region.bounds.columns())?;
    let mut cover = Cover::new(region.bounds);

    for group in &groups {
        let mut best: Vec<Slice<'g>> = Vec::new();
        let mut best_shape = None;

        for &shape in &group.shapes {
            let fresh: Vec<Slice<'g>> = tile(grid, &region, shape)?
                .into_iter()
                .filter(|slice| cover.is_free(&slice.bounds()))
                .collect();
            if fresh.len() > best.len() {
                best = fresh;
                best_shape = Some(shape);
            }
        }

        if let Some(shape) = best_shape {
            debug!(
                depth,
                area = group.area,
                shape = %shape,
                slices = best.len(),
                "area group selected"
            );
        }
        for slice in best {
            cover.add(slice)?;
        }
    }

    if config.subdivide_remainder && depth < config.max_depth && !cover.is_complete() {
        subdivide_divisible(grid, &mut cover, region.limits, config, depth)?;
    }
    Ok(cover)
}

/// Re-slices every divisible slice of `cover` under a tighter cell budget.
///
/// A slice is divisible when each ingredient reaches twice the minimum. Its
/// own rectangle is run through [`select`] with `max_cells` lowered to one
/// less than its size. The pieces replace the slice only if they claim every
/// one of its cells, so the cover never loses claimed cells; replaced slices
/// leave their position and their pieces are appended at the end. A gappy
/// result is discarded on purpose rather than appended.
///
/// Each level lowers `max_cells` by at least one and divisibility needs
/// `4 * min_each` cells, so the recursion depth stays below the top-level
/// `max_cells`.
pub fn subdivide_divisible<'g>(
    grid: &'g Grid,
    cover: &mut Cover<'g>,
    limits: Limits,
    config: &SlicerConfig,
    depth: usize,
) -> Result<(), SlicingError> {
    let mut parts = Vec::new();
    for (index, slice) in cover.iter().enumerate() {
        if !slice.is_divisible(&limits) {
            continue;
        }
        let budget = limits.with_max_cells(slice.cell_count() - 1);
        let pieces = select(grid, Region::new(slice.bounds(), budget), config, depth + 1)?;
        if pieces.is_complete() {
            trace!(depth, slice = %slice, pieces = pieces.len(), "slice subdivided");
            parts.push((index, pieces));
        } else {
            trace!(
                depth,
                slice = %slice,
                covered = pieces.claimed_cells(),
                "subdivision left gaps, slice kept"
            );
        }
    }

    if !parts.is_empty() {
        debug!(depth, subdivided = parts.len(), "remainder pass");
        cover.subdivide(parts)?;
    }
    Ok(())
}
