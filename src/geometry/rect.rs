use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// An axis-aligned grid cell.
///
/// Bounds satisfy `xmin <= xmax` and `ymin <= ymax`. Zero width or height is
/// allowed and represents a line or point cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
}

impl Rect {
    /// Creates a new cell from its bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if any bound is not finite or if a minimum exceeds
    /// its maximum.
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Result<Self> {
        if !(xmin.is_finite() && xmax.is_finite() && ymin.is_finite() && ymax.is_finite()) {
            return Err(GeometryError::NonFinite("rectangle bounds").into());
        }
        if xmin > xmax {
            return Err(GeometryError::InvertedBounds {
                axis: "x",
                min: xmin,
                max: xmax,
            }
            .into());
        }
        if ymin > ymax {
            return Err(GeometryError::InvertedBounds {
                axis: "y",
                min: ymin,
                max: ymax,
            }
            .into());
        }
        Ok(Self {
            xmin,
            xmax,
            ymin,
            ymax,
        })
    }

    #[must_use]
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    #[must_use]
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    #[must_use]
    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    #[must_use]
    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Returns the centre of the cell.
    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(
            (self.xmin + self.xmax) / 2.0,
            (self.ymin + self.ymax) / 2.0,
        )
    }

    /// Returns `true` if the cell has zero width or zero height.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_degenerate(&self) -> bool {
        self.xmin == self.xmax || self.ymin == self.ymax
    }

    /// Returns `true` if `point` lies inside the cell or on its boundary.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        crate::math::outcode::classify(point, self).is_inside()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::CellPathError;

    #[test]
    fn new_with_valid_bounds() {
        let r = Rect::new(0.0, 4.0, -1.0, 1.0).unwrap();
        assert!((r.width() - 4.0).abs() < f64::EPSILON);
        assert!((r.height() - 2.0).abs() < f64::EPSILON);
        assert_eq!(r.center(), Point2::new(2.0, 0.0));
        assert!(!r.is_degenerate());
    }

    #[test]
    fn degenerate_bounds_are_allowed() {
        let r = Rect::new(1.0, 1.0, 0.0, 5.0).unwrap();
        assert!(r.is_degenerate());
        assert!(r.contains(&Point2::new(1.0, 2.0)));
        assert!(!r.contains(&Point2::new(1.5, 2.0)));
    }

    #[test]
    fn inverted_bounds_fail() {
        let result = Rect::new(2.0, 1.0, 0.0, 1.0);
        assert!(matches!(
            result,
            Err(CellPathError::Geometry(GeometryError::InvertedBounds { axis: "x", .. }))
        ));
        let result = Rect::new(0.0, 1.0, 3.0, 1.0);
        assert!(matches!(
            result,
            Err(CellPathError::Geometry(GeometryError::InvertedBounds { axis: "y", .. }))
        ));
    }

    #[test]
    fn non_finite_bounds_fail() {
        assert!(Rect::new(f64::NAN, 1.0, 0.0, 1.0).is_err());
        assert!(Rect::new(0.0, f64::INFINITY, 0.0, 1.0).is_err());
    }
}
