use crate::math::{Point2, Vector2};

/// A directed straight segment from `p0` to `p1`, e.g. a source-to-site ray.
///
/// May be degenerate (`p0 == p1`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub p0: Point2,
    pub p1: Point2,
}

impl Segment {
    /// Creates a new segment. Coordinates are not checked.
    #[must_use]
    pub const fn new(p0: Point2, p1: Point2) -> Self {
        Self { p0, p1 }
    }

    /// Creates a segment from raw endpoint coordinates.
    #[must_use]
    pub fn from_coords(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(Point2::new(x0, y0), Point2::new(x1, y1))
    }

    /// Returns `p1 - p0`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.p1 - self.p0
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(&self) -> f64 {
        let d = self.direction();
        d.x.hypot(d.y)
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.p0 == self.p1
    }

    /// Returns the segment with its endpoints swapped.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.p1, self.p0)
    }

    /// Returns `true` if all four coordinates are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.p0.x.is_finite() && self.p0.y.is_finite() && self.p1.x.is_finite() && self.p1.y.is_finite()
    }
}
