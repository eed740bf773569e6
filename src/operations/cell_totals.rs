use tracing::debug;

use super::{accumulate, BatchParams, ValidateRays};
use crate::error::Result;
use crate::geometry::Segment;
use crate::grid::Grid;
use crate::math::clip_2d::clip_with;

/// Sums, for each cell, the lengths of all rays inside it.
pub struct CellTotals<'a> {
    rays: &'a [Segment],
    grid: &'a Grid,
    params: BatchParams,
}

impl<'a> CellTotals<'a> {
    /// Creates a new `CellTotals` operation with default parameters.
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

    /// Executes the operation, returning one total per cell in grid order.
    ///
    /// Cells are closed: a ray lying exactly on an edge shared by two cells
    /// is counted in full by both, so the totals then add up to more than
    /// the total ray length.
    ///
    /// Summation order across workers is not fixed, so totals from parallel
    /// runs may differ in the last few bits.
    ///
    /// # Errors
    ///
    /// Returns an error if a ray has a non-finite coordinate.
    pub fn execute(&self) -> Result<Vec<f64>> {
        ValidateRays::new(self.rays).execute()?;

        let n_cells = self.grid.len();
        debug!(rays = self.rays.len(), cells = n_cells, "accumulating cell totals");

        let cells = self.grid.cells();
        let arithmetic = self.params.arithmetic;
        Ok(accumulate(self.rays, n_cells, &self.params, |ray, acc| {
            for (total, cell) in acc.iter_mut().zip(cells) {
                *total += clip_with(ray, cell, arithmetic).length();
            }
        }))
    }
}
