use crate::error::{BatchError, Result};
use crate::geometry::Segment;

/// Checks that every ray has finite coordinates.
///
/// The clipper assumes finite input; batch operations run this before
/// entering the hot loop.
pub struct ValidateRays<'a> {
    rays: &'a [Segment],
}

impl<'a> ValidateRays<'a> {
    /// Creates a new `ValidateRays` check.
    #[must_use]
    pub fn new(rays: &'a [Segment]) -> Self {
        Self { rays }
    }

    /// Executes the check.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::NonFiniteRay`] naming the first offending ray.
    pub fn execute(&self) -> Result<()> {
        match self.rays.iter().position(|r| !r.is_finite()) {
            Some(index) => Err(BatchError::NonFiniteRay { index }.into()),
            None => Ok(()),
        }
    }
}

/// Checks a per-ray distance vector against its rays.
pub struct ValidateDistances<'a> {
    distances: &'a [f64],
    expected: usize,
}

impl<'a> ValidateDistances<'a> {
    /// Creates a new `ValidateDistances` check for `expected` rays.
    #[must_use]
    pub fn new(distances: &'a [f64], expected: usize) -> Self {
        Self {
            distances,
            expected,
        }
    }

    /// Executes the check.
    ///
    /// # Errors
    ///
    /// Returns an error if the lengths differ or a distance is negative or
    /// not finite.
    pub fn execute(&self) -> Result<()> {
        if self.distances.len() != self.expected {
            return Err(BatchError::LengthMismatch {
                expected: self.expected,
                actual: self.distances.len(),
            }
            .into());
        }
        for (index, &value) in self.distances.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(BatchError::InvalidDistance { index, value }.into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CellPathError;

    #[test]
    fn finite_rays_pass() {
        let rays = [
            Segment::from_coords(0.0, 0.0, 1.0, 1.0),
            Segment::from_coords(2.0, 2.0, 2.0, 2.0),
        ];
        assert!(ValidateRays::new(&rays).execute().is_ok());
        assert!(ValidateRays::new(&[]).execute().is_ok());
    }

    #[test]
    fn non_finite_ray_is_reported_by_index() {
        let rays = [
            Segment::from_coords(0.0, 0.0, 1.0, 1.0),
            Segment::from_coords(0.0, 0.0, f64::INFINITY, 1.0),
        ];
        let result = ValidateRays::new(&rays).execute();
        assert!(matches!(
            result,
            Err(CellPathError::Batch(BatchError::NonFiniteRay { index: 1 }))
        ));
    }

    #[test]
    fn distance_count_must_match() {
        let result = ValidateDistances::new(&[1.0], 2).execute();
        assert!(matches!(
            result,
            Err(CellPathError::Batch(BatchError::LengthMismatch {
                expected: 2,
                actual: 1
            }))
        ));
    }

    #[test]
    fn negative_or_nan_distance_fails() {
        assert!(ValidateDistances::new(&[1.0, -0.5], 2).execute().is_err());
        assert!(ValidateDistances::new(&[f64::NAN], 1).execute().is_err());
        assert!(ValidateDistances::new(&[0.0, 3.0], 2).execute().is_ok());
    }
}
