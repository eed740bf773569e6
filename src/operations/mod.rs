//! Batch evaluation of the clipper over every (ray, cell) pair.
//!
//! Work is partitioned statically by ray. Each worker writes its own output
//! rows or accumulates into its own buffer; buffers are merged once at the
//! end, so the per-pair clip never takes a lock. With the `parallel` feature
//! disabled the same code runs on the calling thread.

macro_rules! maybe_par_iter {
    ($slice:expr, $min_len:expr) => {{
        #[cfg(feature = "parallel")]
        {
            $slice.par_iter().with_min_len($min_len)
        }
        #[cfg(not(feature = "parallel"))]
        {
            let _ = $min_len;
            $slice.iter()
        }
    }};
}

mod cell_totals;
mod path_lengths;
mod scaled_path_lengths;
mod validate;

pub use cell_totals::CellTotals;
pub use path_lengths::PathLengths;
pub use scaled_path_lengths::ScaledPathLengths;
pub use validate::{ValidateDistances, ValidateRays};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::geometry::Segment;
use crate::math::Arithmetic;

/// Parameters shared by the batch operations.
#[derive(Debug, Clone, Copy)]
pub struct BatchParams {
    /// Arithmetic used for edge intersections.
    pub arithmetic: Arithmetic,
    /// Smallest number of rays handed to one parallel task.
    pub min_rays_per_task: usize,
}

impl Default for BatchParams {
    fn default() -> Self {
        Self {
            arithmetic: Arithmetic::Strict,
            min_rays_per_task: 16,
        }
    }
}

/// Fills a row-major `rays.len() x n_cells` buffer, one row per ray.
///
/// `row` receives the ray index, the ray and its output row.
fn fill_rows<F>(rays: &[Segment], n_cells: usize, params: &BatchParams, row: F) -> Vec<f64>
where
    F: Fn(usize, &Segment, &mut [f64]) + Sync + Send,
{
    let mut data = vec![0.0; rays.len() * n_cells];
    if n_cells == 0 {
        return data;
    }
    let min_len = params.min_rays_per_task.max(1);

    #[cfg(feature = "parallel")]
    data.par_chunks_mut(n_cells)
        .zip(rays.par_iter())
        .enumerate()
        .with_min_len(min_len)
        .for_each(|(i, (out, ray))| row(i, ray, out));

    #[cfg(not(feature = "parallel"))]
    {
        let _ = min_len;
        for (i, (out, ray)) in data.chunks_mut(n_cells).zip(rays).enumerate() {
            row(i, ray, out);
        }
    }

    data
}

/// Sums per-ray contributions into one `n_cells` buffer.
///
/// Every worker folds into a private buffer; the buffers are added together
/// at the end.
fn accumulate<F>(rays: &[Segment], n_cells: usize, params: &BatchParams, add: F) -> Vec<f64>
where
    F: Fn(&Segment, &mut [f64]) + Sync + Send,
{
    let rays = maybe_par_iter!(rays, params.min_rays_per_task.max(1));

    #[cfg(feature = "parallel")]
    {
        rays.fold(
            || vec![0.0; n_cells],
            |mut acc, ray| {
                add(ray, &mut acc);
                acc
            },
        )
        .reduce(|| vec![0.0; n_cells], merge_totals)
    }

    #[cfg(not(feature = "parallel"))]
    {
        rays.fold(vec![0.0; n_cells], |mut acc, ray| {
            add(ray, &mut acc);
            acc
        })
    }
}

#[cfg(feature = "parallel")]
fn merge_totals(mut a: Vec<f64>, b: Vec<f64>) -> Vec<f64> {
    for (x, y) in a.iter_mut().zip(b) {
        *x += y;
    }
    a
}
