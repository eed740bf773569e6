use nalgebra::DMatrix;
use tracing::debug;

use super::{fill_rows, BatchParams, ValidateRays};
use crate::error::Result;
use crate::geometry::Segment;
use crate::grid::Grid;
use crate::math::clip_2d::clip_with;

/// Computes the length of every ray inside every cell.
pub struct PathLengths<'a> {
    rays: &'a [Segment],
    grid: &'a Grid,
    params: BatchParams,
}

impl<'a> PathLengths<'a> {
    /// Creates a new `PathLengths` operation with default parameters.
    #[must_use]
    pub fn new(rays: &'a [Segment], grid: &'a Grid) -> Self {
        Self {
            rays,
            grid,
            params: BatchParams::default(),
        }
    }

    /// Replaces the batch parameters.
    #[must_use]
    pub fn with_params(mut self, params: BatchParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the operation.
    ///
    /// Returns a `rays x cells` matrix. Entry `(i, j)` is the Euclidean
    /// length of ray `i` inside cell `j`, `0.0` when the ray misses the cell
    /// or only touches it at a point.
    ///
    /// Cells are closed, so a ray lying exactly on an edge shared by two
    /// cells appears in full in both columns and its row sums to more than
    /// its length. Rays that merely cross an edge are split there exactly.
    ///
    /// # Errors
    ///
    /// Returns an error if a ray has a non-finite coordinate.
    pub fn execute(&self) -> Result<DMatrix<f64>> {
        ValidateRays::new(self.rays).execute()?;

        let n_rays = self.rays.len();
        let n_cells = self.grid.len();
        debug!(rays = n_rays, cells = n_cells, arithmetic = ?self.params.arithmetic, "computing path lengths");

        let cells = self.grid.cells();
        let arithmetic = self.params.arithmetic;
        let data = fill_rows(self.rays, n_cells, &self.params, |_, ray, row| {
            for (out, cell) in row.iter_mut().zip(cells) {
                *out = clip_with(ray, cell, arithmetic).length();
            }
        });

        Ok(DMatrix::from_row_slice(n_rays, n_cells, &data))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::Arithmetic;

    #[test]
    fn matrix_shape_and_entries() {
        let grid = Grid::from_edges(&[0.0, 10.0, 20.0], &[0.0, 10.0]).unwrap();
        let rays = [
            Segment::from_coords(-5.0, 5.0, 15.0, 5.0),
            Segment::from_coords(12.0, 2.0, 18.0, 2.0),
        ];
        let m = PathLengths::new(&rays, &grid).execute().unwrap();
        assert_eq!(m.shape(), (2, 2));
        assert_relative_eq!(m[(0, 0)], 10.0);
        assert_relative_eq!(m[(0, 1)], 5.0);
        assert!(m[(1, 0)].abs() < f64::EPSILON);
        assert_relative_eq!(m[(1, 1)], 6.0);
    }

    #[test]
    fn empty_inputs_give_empty_matrix() {
        let grid = Grid::from_cells(Vec::new());
        let rays = [Segment::from_coords(0.0, 0.0, 1.0, 1.0)];
        let m = PathLengths::new(&rays, &grid).execute().unwrap();
        assert_eq!(m.shape(), (1, 0));

        let grid = Grid::from_edges(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
        let m = PathLengths::new(&[], &grid).execute().unwrap();
        assert_eq!(m.shape(), (0, 1));
    }

    #[test]
    fn non_finite_ray_fails_fast() {
        let grid = Grid::from_edges(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
        let rays = [Segment::from_coords(f64::NAN, 0.0, 1.0, 1.0)];
        assert!(PathLengths::new(&rays, &grid).execute().is_err());
    }

    #[test]
    fn fused_arithmetic_is_accepted() {
        let grid = Grid::from_edges(&[0.0, 3.0, 7.0], &[0.0, 5.0]).unwrap();
        let rays = [Segment::from_coords(-1.0, 1.0, 8.0, 4.0)];
        let params = BatchParams {
            arithmetic: Arithmetic::Fused,
            ..BatchParams::default()
        };
        let strict = PathLengths::new(&rays, &grid).execute().unwrap();
        let fused = PathLengths::new(&rays, &grid).with_params(params).execute().unwrap();
        for (a, b) in strict.iter().zip(fused.iter()) {
            assert_relative_eq!(*a, *b, max_relative = Arithmetic::TOLERANCE);
        }
    }
}
