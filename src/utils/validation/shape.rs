//! Shape validation utilities
//!
//! Dimension normalization and sample-count checks for sample collections.

use crate::error::{Result, ValidationError};

/// Validator for sample collection shapes
pub struct ShapeValidator;

impl ShapeValidator {
    /// Normalize a shape to `[n, p]`
    ///
    /// A 1-D shape `[n]` becomes `[n, 1]`; a 2-D shape is returned as is.
    pub fn promote_to_2d(shape: &[usize], name: &str) -> Result<(usize, usize)> {
        match *shape {
            [n] => Ok((n, 1)),
            [n, p] => Ok((n, p)),
            _ => Err(ValidationError::shape(format!(
                "Expected a 2-D array `{}`, found shape {:?}",
                name, shape
            ))),
        }
    }

    /// Validate that `x`, `y` and `z` share the same number of samples
    ///
    /// Returns the shared sample count.
    pub fn check_sample_agreement(
        x: (usize, usize),
        y: (usize, usize),
        z: (usize, usize),
    ) -> Result<usize> {
        let (nx, _) = x;
        let (ny, _) = y;
        let (nz, _) = z;

        if nx != ny || ny != nz {
            return Err(ValidationError::shape(format!(
                "Shape mismatch, x, y, and z must have shape [n, p], [n, q], [n, r]; \
                 got [{}, {}], [{}, {}], [{}, {}]",
                x.0, x.1, y.0, y.1, z.0, z.1
            )));
        }

        Ok(nx)
    }

    /// Validate that a collection has at least `min_samples` samples
    pub fn check_min_samples(n: usize, name: &str, min_samples: usize) -> Result<()> {
        if n < min_samples {
            return Err(ValidationError::insufficient_data(format!(
                "Number of samples is too low: `{}` has {} samples, at least {} required",
                name, n, min_samples
            )));
        }
        Ok(())
    }
}
