use thiserror::Error;

/// Top-level error type for the cellpath crate.
#[derive(Debug, Error)]
pub enum CellPathError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Batch(#[from] BatchError),
}

/// Errors raised when constructing geometric value types.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("non-finite coordinate in {0}")]
    NonFinite(&'static str),

    #[error("inverted bounds on {axis} axis: min {min} > max {max}")]
    InvertedBounds {
        axis: &'static str,
        min: f64,
        max: f64,
    },
}

/// Errors related to grid construction.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("{axis} axis needs at least 2 edges, got {count}")]
    TooFewEdges { axis: &'static str, count: usize },

    #[error("{axis} edges must be non-decreasing: edge {index} = {value} follows {previous}")]
    UnorderedEdges {
        axis: &'static str,
        index: usize,
        value: f64,
        previous: f64,
    },

    #[error("{axis} edge {index} is not finite")]
    NonFiniteEdge { axis: &'static str, index: usize },
}

/// Errors detected at the batch-driver boundary.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("ray {index} has a non-finite coordinate")]
    NonFiniteRay { index: usize },

    #[error("expected {expected} per-ray distances, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("distance for ray {index} must be finite and non-negative, got {value}")]
    InvalidDistance { index: usize, value: f64 },
}

/// Convenience type alias for results using [`CellPathError`].
pub type Result<T> = std::result::Result<T, CellPathError>;
