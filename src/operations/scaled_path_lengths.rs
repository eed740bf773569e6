use nalgebra::DMatrix;
use tracing::{debug, warn};

use super::{fill_rows, BatchParams, ValidateDistances, ValidateRays};
use crate::error::Result;
use crate::geometry::Segment;
use crate::grid::Grid;
use crate::math::clip_2d::clip_with;

/// Distributes a per-ray distance over cells in proportion to the fraction
/// of the ray inside each cell.
///
/// Useful when ray coordinates are in map units (e.g. degrees) while the
/// distance to attribute is measured otherwise (e.g. rupture distance in km).
pub struct ScaledPathLengths<'a> {
    rays: &'a [Segment],
    grid: &'a Grid,
    distances: &'a [f64],
    params: BatchParams,
}

impl<'a> ScaledPathLengths<'a> {
    /// Creates a new `ScaledPathLengths` operation with default parameters.
    ///
    /// `distances[i]` is the distance attributed to `rays[i]`.
    #[must_use]
    pub fn new(rays: &'a [Segment], grid: &'a Grid, distances: &'a [f64]) -> Self {
        Self {
            rays,
            grid,
            distances,
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
    /// Entry `(i, j)` is `distances[i] * clipped_len(i, j) / len(i)`.
    /// Zero-length rays contribute `0.0` to every cell. A ray lying on an
    /// edge shared by two cells is scaled into both, as in
    /// [`PathLengths`](super::PathLengths).
    ///
    /// # Errors
    ///
    /// Returns an error if a ray is non-finite, or if the distances do not
    /// match the rays or are negative or non-finite.
    pub fn execute(&self) -> Result<DMatrix<f64>> {
        ValidateRays::new(self.rays).execute()?;
        ValidateDistances::new(self.distances, self.rays.len()).execute()?;

        let n_rays = self.rays.len();
        let n_cells = self.grid.len();
        debug!(rays = n_rays, cells = n_cells, "computing scaled path lengths");

        let degenerate = self.rays.iter().filter(|r| r.is_degenerate()).count();
        if degenerate > 0 {
            warn!(count = degenerate, "zero-length rays contribute no path length");
        }

        let cells = self.grid.cells();
        let distances = self.distances;
        let arithmetic = self.params.arithmetic;
        let data = fill_rows(self.rays, n_cells, &self.params, |i, ray, row| {
            let total = ray.length();
            if total <= 0.0 {
                return;
            }
            let scale = distances[i] / total;
            for (out, cell) in row.iter_mut().zip(cells) {
                *out = clip_with(ray, cell, arithmetic).length() * scale;
            }
        });

        Ok(DMatrix::from_row_slice(n_rays, n_cells, &data))
    }
}
