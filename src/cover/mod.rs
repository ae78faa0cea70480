use std::fmt;
use std::io;

use crate::grid::{Bounds, Cell, Direction, Grid, LabeledRect, Limits};
use crate::slice::Slice;

pub mod errors;
pub mod submission;
pub use errors::CoverError;


/// Ordered set of non-overlapping slices over a region of the grid.
///
/// A `Cover` keeps its slices in insertion order together with a dense
/// claimed-cell bitmap over its region, so overlap tests cost one lookup per
/// cell. A claimed cell is never released: slices can be added and grown,
/// and a slice can only be replaced by pieces that claim exactly its cells.
///
/// # Internal Structure
/// - `slices`: insertion-ordered slices
/// - `claimed`: row-major bitmap relative to `region`
///
/// # Examples
///
/// ```
/// use pizza_slicer::cover::Cover;
/// use pizza_slicer::grid::{Bounds, Grid, Limits};
/// use pizza_slicer::slice::Slice;
///
/// let grid = Grid::from_rows(Limits::new(1, 3).unwrap(), &["TTMMTT"]).unwrap();
/// let mut cover = Cover::for_grid(&grid);
///
/// let left = Bounds::try_from_coords(0, 0, 0, 2).unwrap();
/// cover.add(Slice::new(&grid, left).unwrap()).unwrap();
///
/// // Overlapping slices are rejected
/// let clash = Bounds::try_from_coords(0, 2, 0, 4).unwrap();
/// assert!(cover.add(Slice::new(&grid, clash).unwrap()).is_err());
///
/// assert_eq!(cover.len(), 1);
/// assert_eq!(cover.claimed_cells(), 3);
/// assert_eq!(cover.to_string(), "1\n0 0 0 2\n");
/// ```
#[derive(Debug, Clone)]
pub struct Cover<'g> {
    region: Bounds,
    slices: Vec<Slice<'g>>,
    claimed: Vec<bool>,
    claimed_count: usize,
}

impl<'g> Cover<'g> {
    /// Creates an empty cover that may claim cells inside `region`.
    pub fn new(region: Bounds) -> Self {
        Self {
            region,
            slices: Vec::new(),
            claimed: vec![false; region.area()],
            claimed_count: 0,
        }
    }

    /// Creates an empty cover over the whole grid.
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.bounds())
    }

    /// Rebuilds a cover from slice bounds, e.g. a parsed submission.
    ///
    /// Every rectangle must lie inside the grid, respect the grid's limits
    /// and not overlap an earlier one. The first violation is returned.
    pub fn from_bounds<I>(grid: &'g Grid, bounds: I) -> Result<Self, CoverError>
    where
        I: IntoIterator<Item = Bounds>,
    {
        let limits = grid.limits();
        let mut cover = Self::for_grid(grid);
        for rect in bounds {
            let slice =
                Slice::new(grid, rect).map_err(|_| CoverError::OutsideRegion(rect))?;
            check_limits(&slice, &limits)?;
            cover.add(slice)?;
        }
        Ok(cover)
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// The rectangle this cover may claim cells in.
    pub fn region(&self) -> Bounds {
        self.region
    }

    fn index_of(&self, cell: Cell) -> Option<usize> {
        if self.region.contains(cell) {
            let row = cell.row - self.region.top();
            let column = cell.column - self.region.left();
            Some(row * self.region.columns() + column)
        } else {
            None
        }
    }

    /// Returns true if some slice holds `cell`. Cells outside the region are
    /// never claimed.
    pub fn is_claimed(&self, cell: Cell) -> bool {
        self.index_of(cell).is_some_and(|i| self.claimed[i])
    }

    fn first_claimed(&self, bounds: &Bounds) -> Option<Cell> {
        bounds.cells().find(|&cell| self.is_claimed(cell))
    }

    /// Returns true if `bounds` lies inside the region and none of its cells
    /// is claimed.
    pub fn is_free(&self, bounds: &Bounds) -> bool {
        self.region.contains_bounds(bounds) && self.first_claimed(bounds).is_none()
    }

    fn claim(&mut self, bounds: &Bounds) {
        for cell in bounds.cells() {
            if let Some(i) = self.index_of(cell) {
                if !self.claimed[i] {
                    self.claimed[i] = true;
                    self.claimed_count += 1;
                }
            }
        }
    }

    /// Appends a slice.
    ///
    /// Requires:
    /// - the slice lies inside the region
    /// - none of its cells is already claimed
    pub fn add(&mut self, slice: Slice<'g>) -> Result<(), CoverError> {
        let bounds = slice.bounds();
        if !self.region.contains_bounds(&bounds) {
            return Err(CoverError::OutsideRegion(bounds));
        }
        if let Some(cell) = self.first_claimed(&bounds) {
            return Err(CoverError::Overlap { bounds, cell });
        }
        self.claim(&bounds);
        self.slices.push(slice);
        Ok(())
    }

    /// Grows slice `index` by one row or column towards `direction`.
    ///
    /// The added strip must be inside the region and unclaimed. Size limits
    /// are not checked here. Returns the strip of newly claimed cells.
    pub fn grow(&mut self, index: usize, direction: Direction) -> Result<Bounds, CoverError> {
        let bounds = self
            .slices
            .get(index)
            .ok_or(CoverError::UnknownSlice(index))?
            .bounds();
        let strip = bounds.edge(direction)?;
        if !self.region.contains_bounds(&strip) {
            return Err(CoverError::OutsideRegion(strip));
        }
        if let Some(cell) = self.first_claimed(&strip) {
            return Err(CoverError::Overlap { bounds: strip, cell });
        }

        self.slices[index].grow(direction)?;
        self.claim(&strip);
        Ok(strip)
    }

    /// Replaces slices by their subdivisions.
    ///
    /// Each `(index, pieces)` pair names a slice and a cover over exactly
    /// that slice's bounds which claims all of its cells. The replaced slices
    /// are removed from their positions and the pieces are appended at the
    /// end, in the order given. The claimed-cell set is unchanged.
    pub fn subdivide(&mut self, parts: Vec<(usize, Cover<'g>)>) -> Result<(), CoverError> {
        for (index, pieces) in &parts {
            let slice = self
                .slices
                .get(*index)
                .ok_or(CoverError::UnknownSlice(*index))?;
            if pieces.region != slice.bounds() || !pieces.is_complete() {
                return Err(CoverError::IncompleteSubdivision(*index));
            }
        }

        let mut replaced = vec![false; self.slices.len()];
        for (index, _) in &parts {
            replaced[*index] = true;
        }
        let mut position = 0;
        self.slices.retain(|_| {
            let keep = !replaced[position];
            position += 1;
            keep
        });
        for (_, pieces) in parts {
            self.slices.extend(pieces.slices);
        }
        Ok(())
    }

    /// Checks every slice against `limits` and re-verifies that no two
    /// slices overlap. Returns the first violation.
    pub fn validate(&self, limits: &Limits) -> Result<(), CoverError> {
        let mut seen = Cover::new(self.region);
        for slice in &self.slices {
            check_limits(slice, limits)?;
            seen.add(slice.clone())?;
        }
        Ok(())
    }

    /// Gets slice `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Slice<'g>> {
        self.slices.get(index)
    }

    /// Returns an iterator over slices in cover order.
    pub fn iter(&self) -> impl Iterator<Item = &Slice<'g>> + '_ {
        self.slices.iter()
    }

    pub fn slices(&self) -> &[Slice<'g>] {
        &self.slices
    }

    /// Number of claimed cells.
    pub fn claimed_cells(&self) -> usize {
        self.claimed_count
    }

    /// Number of cells in the region.
    pub fn total_cells(&self) -> usize {
        self.region.area()
    }

    /// Returns true if every cell of the region is claimed.
    pub fn is_complete(&self) -> bool {
        self.claimed_count == self.region.area()
    }

    /// Iterates over cells of the region that no slice holds, row by row.
    pub fn uncovered_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.region.cells().filter(move |&cell| !self.is_claimed(cell))
    }

    /// Summary of how much of the region is covered.
    pub fn stats(&self) -> CoverStats {
        CoverStats {
            slices: self.len(),
            covered: self.claimed_count,
            total: self.total_cells(),
        }
    }

    /// Writes the cover in the submission format.
    pub fn write_submission<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{self}")?;
        writer.flush()
    }
}

fn check_limits(slice: &Slice<'_>, limits: &Limits) -> Result<(), CoverError> {
    let bounds = slice.bounds();
    if slice.cell_count() > limits.max_cells {
        return Err(CoverError::Oversized {
            bounds,
            cells: slice.cell_count(),
            max_cells: limits.max_cells,
        });
    }
    if !slice.is_valid(limits) {
        return Err(CoverError::Underfilled {
            bounds,
            tomatoes: slice.tomatoes(),
            mushrooms: slice.mushrooms(),
            min_each: limits.min_each,
        });
    }
    Ok(())
}

impl fmt::Display for Cover<'_> {
    /// Writes the slice count followed by one `top left bottom right` line
    /// per slice.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.slices.len())?;
        for slice in &self.slices {
            writeln!(f, "{slice}")?;
        }
        Ok(())
    }
}

/// Coverage summary of a [`Cover`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CoverStats {
    pub slices: usize,
    pub covered: usize,
    pub total: usize,
}

impl CoverStats {
    /// Covered fraction of the region in `[0, 1]`.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.covered as f64 / self.total as f64
        }
    }
}

impl fmt::Display for CoverStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} cells ({:.2}%) in {} slices",
            self.covered,
            self.total,
            self.ratio() * 100.0,
            self.slices
        )
    }
}

// =============================================================================
// Cover Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Cover<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for slice in &self.slices {
            seq.serialize_element(slice)?;
        }
        seq.end()
    }
}
