use crate::error::{GridError, Result};
use crate::geometry::Rect;
use crate::math::Point2;

/// An ordered collection of cells that rays are measured against.
///
/// Cells may overlap or leave gaps; a grid built with [`Grid::from_edges`]
/// tiles its extent without either.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Rect>,
    shape: Option<(usize, usize)>,
}

impl Grid {
    /// Creates a grid from an explicit, ordered list of cells.
    #[must_use]
    pub fn from_cells(cells: Vec<Rect>) -> Self {
        Self { cells, shape: None }
    }

    /// Creates a rectilinear grid from the cell edge coordinates along each
    /// axis.
    ///
    /// `xs.len() - 1` columns by `ys.len() - 1` rows. Cell `j = iy * nx + ix`
    /// spans `[xs[ix], xs[ix + 1]] x [ys[iy], ys[iy + 1]]`, so x varies
    /// fastest. Repeated edge values produce degenerate cells.
    ///
    /// # Errors
    ///
    /// Returns an error if an axis has fewer than two edges, or if edges are
    /// non-finite or decreasing.
    pub fn from_edges(xs: &[f64], ys: &[f64]) -> Result<Self> {
        check_edges("x", xs)?;
        check_edges("y", ys)?;

        let nx = xs.len() - 1;
        let ny = ys.len() - 1;
        let mut cells = Vec::with_capacity(nx * ny);
        for y in ys.windows(2) {
            for x in xs.windows(2) {
                cells.push(Rect::new(x[0], x[1], y[0], y[1])?);
            }
        }
        Ok(Self {
            cells,
            shape: Some((nx, ny)),
        })
    }

    /// Returns the cells in index order.
    #[must_use]
    pub fn cells(&self) -> &[Rect] {
        &self.cells
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `(columns, rows)` for grids built from edges.
    #[must_use]
    pub fn shape(&self) -> Option<(usize, usize)> {
        self.shape
    }

    /// Returns the centre of every cell, in index order.
    #[must_use]
    pub fn midpoints(&self) -> Vec<Point2> {
        self.cells.iter().map(Rect::center).collect()
    }
}

fn check_edges(axis: &'static str, edges: &[f64]) -> Result<()> {
    if edges.len() < 2 {
        return Err(GridError::TooFewEdges {
            axis,
            count: edges.len(),
        }
        .into());
    }
    if let Some(index) = edges.iter().position(|e| !e.is_finite()) {
        return Err(GridError::NonFiniteEdge { axis, index }.into());
    }
    for (i, pair) in edges.windows(2).enumerate() {
        if pair[1] < pair[0] {
            return Err(GridError::UnorderedEdges {
                axis,
                index: i + 1,
                value: pair[1],
                previous: pair[0],
            }
            .into());
        }
    }
    Ok(())
}
