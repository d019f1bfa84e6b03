use crate::{Bounds, Point2, Result, SamplingError};

use std::f64::consts::SQRT_2;
use std::mem;

/// Cells around the center cell scanned for conflicting points on each axis.
///
/// Must stay at two for a cell size of `min_distance / sqrt(2)`, a point closer
/// than the minimum distance can be up to two cells away along an axis.
const SEARCH_RADIUS: usize = 2;

/// Uniform acceleration grid over some bounds with cells small enough to hold at
/// most one point each, so that proximity checks only need to look at a fixed
/// 5x5 block of cells instead of every accepted point.
///
/// Points are never removed once inserted.
pub struct Grid {
    bounds: Bounds,
    min_distance: f64,
    cell_size: f64,
    cols: usize,
    rows: usize,
    /// Row-major, `None` for empty cells
    cells: Vec<Option<Point2>>,
    occupied: usize,
}

impl Grid {
    /// Creates an empty grid.
    ///
    /// Expects validated bounds and a positive, finite minimum distance, the
    /// sampling entry points check both before getting here. Fails if the grid
    /// would have more cells than can be allocated.
    pub fn new(bounds: Bounds, min_distance: f64) -> Result<Self> {
        debug_assert!(min_distance > 0.0 && min_distance.is_finite());

        let cell_size = min_distance / SQRT_2;
        let (cols, rows) = Self::dimensions_for(&bounds, min_distance)?;

        Ok(Grid {
            bounds,
            min_distance,
            cell_size,
            cols,
            rows,
            cells: vec![None; cols * rows],
            occupied: 0,
        })
    }

    /// Columns and rows of a grid over the bounds, or `GridTooLarge` if the cell
    /// array would not fit into memory addressable by a `Vec`.
    pub fn dimensions_for(bounds: &Bounds, min_distance: f64) -> Result<(usize, usize)> {
        let cell_size = min_distance / SQRT_2;
        // one extra cell on each axis absorbs rounding at the max edges
        let cols = (bounds.width() / cell_size).ceil() + 1.0;
        let rows = (bounds.height() / cell_size).ceil() + 1.0;
        let too_large = SamplingError::GridTooLarge { cols, rows };

        // also false for NaN and infinity
        if !(cols < usize::MAX as f64 && rows < usize::MAX as f64) {
            return Err(too_large);
        }

        let (cols_int, rows_int) = (cols as usize, rows as usize);
        let bytes = cols_int
            .checked_mul(rows_int)
            .and_then(|cells| cells.checked_mul(mem::size_of::<Option<Point2>>()));

        match bytes {
            Some(bytes) if bytes <= isize::MAX as usize => Ok((cols_int, rows_int)),
            _ => Err(too_large),
        }
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Amount of columns and rows.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// Amount of points stored so far.
    pub fn occupied(&self) -> usize {
        self.occupied
    }

    /// Upper bound for the amount of points the grid can ever hold.
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Column and row of the cell the point falls into, or `None` if the point
    /// is outside the bounds.
    pub fn cell_index_of(&self, point: Point2) -> Option<(usize, usize)> {
        if !self.bounds.contains(point) {
            return None;
        }

        let col = ((point.x - self.bounds.min_x) / self.cell_size).floor() as usize;
        let row = ((point.y - self.bounds.min_y) / self.cell_size).floor() as usize;

        Some((col.min(self.cols - 1), row.min(self.rows - 1)))
    }

    /// Stores the point if it is inside the bounds and no stored point is closer
    /// than the minimum distance. Returns whether the point was stored.
    pub fn try_insert(&mut self, point: Point2) -> bool {
        let (col, row) = match self.cell_index_of(point) {
            Some(idx) => idx,
            None => return false,
        };

        if self.has_neighbor_within_min_distance(point, col, row) {
            return false;
        }

        let idx = self.flat_index(col, row);
        if self.cells[idx].is_some() {
            // only reachable through rounding, the neighbor scan covers the own cell
            return false;
        }
        self.cells[idx] = Some(point);
        self.occupied += 1;

        true
    }

    fn has_neighbor_within_min_distance(&self, point: Point2, col: usize, row: usize) -> bool {
        let min_distance_sqr = self.min_distance * self.min_distance;

        let col_start = col.saturating_sub(SEARCH_RADIUS);
        let col_end = (col + SEARCH_RADIUS).min(self.cols - 1);
        let row_start = row.saturating_sub(SEARCH_RADIUS);
        let row_end = (row + SEARCH_RADIUS).min(self.rows - 1);

        (row_start..=row_end).any(|r| {
            (col_start..=col_end).any(|c| match self.cells[self.flat_index(c, r)] {
                Some(stored) => stored.distance2(point) < min_distance_sqr,
                None => false,
            })
        })
    }

    fn flat_index(&self, col: usize, row: usize) -> usize {
        row * self.cols + col
    }
}
