//! Row/column ordering of detected dot centroids.
//!
//! The physical pattern is printed as full rows of ten dots, visually split
//! into a left and a right group of five. Reconstruction recovers that
//! structure from an unordered centroid set:
//!
//! - Stable-sort all points by ascending Y.
//! - Partition the sorted run into contiguous rows of ten; the chunk
//!   position is the row index.
//! - Stable-sort each row by ascending X and split it 5/5: column 0 takes
//!   the smallest-X half, column 1 the largest-X half.
//!
//! A point count that is not a multiple of ten cannot form full rows:
//! a partial row, a missed dot, or a spurious blob survived area filtering.
//! Such input yields the empty `0×0` grid rather than an error;
//! rejecting irregular input outright beats guessing at an ambiguous
//! reconstruction. Both sorts are stable, so ties in Y or X preserve input
//! order and the result is reproducible for a fixed input permutation.

use crate::aggregate::mean_point;
use crate::error::AnalyzeError;
use crate::types::Point;
use log::debug;
use serde::Serialize;
use std::ops::Index;

/// Number of dots in one full printed row.
pub const POINTS_PER_FULL_ROW: usize = 10;
/// Column groups per row.
pub const COLUMNS_PER_ROW: usize = 2;
/// Dots per column group.
pub const POINTS_PER_CELL: usize = POINTS_PER_FULL_ROW / COLUMNS_PER_ROW;

/// The dots assigned to one row and one column group.
#[derive(Clone, Debug, Serialize)]
pub struct RowPoints {
    pub row: usize,
    pub column: usize,
    /// Member points in ascending-X order.
    pub points: Vec<Point>,
}

impl RowPoints {
    pub fn new(row: usize, column: usize, points: Vec<Point>) -> Self {
        Self {
            row,
            column,
            points,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Arithmetic-mean point of the cell. The origin for an empty cell.
    pub fn center(&self) -> Point {
        mean_point(&self.points)
    }
}

/// Rectangular grid of [`RowPoints`] addressed `[row][column]`.
///
/// Stored as a flat row-major arena with a stride of [`COLUMNS_PER_ROW`].
/// The `0×0` grid is the canonical "could not structure input" value; check
/// [`Grid::is_empty`] before indexing.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Grid {
    rows: usize,
    cells: Vec<RowPoints>,
}

impl Grid {
    /// The `0×0` grid.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column count: [`COLUMNS_PER_ROW`] for a populated grid, zero for the
    /// empty one.
    pub fn columns(&self) -> usize {
        if self.rows == 0 {
            0
        } else {
            COLUMNS_PER_ROW
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Checked cell access.
    pub fn cell(&self, row: usize, column: usize) -> Option<&RowPoints> {
        if row >= self.rows || column >= COLUMNS_PER_ROW {
            return None;
        }
        self.cells.get(row * COLUMNS_PER_ROW + column)
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &RowPoints> {
        self.cells.iter()
    }

    /// Mean center of every cell, row-major.
    pub fn cell_centers(&self) -> Vec<Point> {
        self.cells.iter().map(RowPoints::center).collect()
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = RowPoints;

    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        self.cell(row, column)
            .unwrap_or_else(|| panic!("grid index ({row}, {column}) out of bounds"))
    }
}

/// Orders an unstructured centroid set into a row/column [`Grid`].
///
/// `None` fails with [`AnalyzeError::MissingPoints`]. A count that is not a
/// multiple of [`POINTS_PER_FULL_ROW`] returns the empty grid. Given the
/// same points in the same order the output is identical on every call.
pub fn reconstruct_grid(points: Option<&[Point]>) -> Result<Grid, AnalyzeError> {
    let points = points.ok_or(AnalyzeError::MissingPoints)?;
    Ok(reconstruct(points))
}

/// Reconstruction over a collection known to be present.
pub(crate) fn reconstruct(points: &[Point]) -> Grid {
    if points.len() % POINTS_PER_FULL_ROW != 0 {
        debug!(
            "grid: {} points cannot form full rows of {}, returning empty grid",
            points.len(),
            POINTS_PER_FULL_ROW
        );
        return Grid::empty();
    }

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal));

    let rows = sorted.len() / POINTS_PER_FULL_ROW;
    let mut cells = Vec::with_capacity(rows * COLUMNS_PER_ROW);
    for (row, chunk) in sorted.chunks_exact(POINTS_PER_FULL_ROW).enumerate() {
        let mut row_points = chunk.to_vec();
        row_points.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal));

        for column in 0..COLUMNS_PER_ROW {
            let group = row_points[column * POINTS_PER_CELL..(column + 1) * POINTS_PER_CELL].to_vec();
            cells.push(RowPoints::new(row, column, group));
        }
    }

    Grid { rows, cells }
}
