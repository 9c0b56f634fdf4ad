//! Numeric validation utilities
//!
//! NaN detection, precision normalization, variance checks and repetition
//! count validation.

use crate::error::{Result, ValidationError};
use crate::types::SampleArray;
use ndarray::Array2;

/// Validator for numeric content of sample collections
pub struct NumericValidator;

impl NumericValidator {
    /// Validate that an array contains no NaN values
    ///
    /// Integer buffers cannot hold NaN and are accepted without a scan.
    pub fn check_no_nan(array: &SampleArray, name: &str) -> Result<()> {
        if !array.dtype().is_float() {
            return Ok(());
        }

        if let Some(index) = array.data().first_nan() {
            return Err(ValidationError::data_quality(format!(
                "Input `{}` contains NaNs (first at flat index {})",
                name, index
            )));
        }
        Ok(())
    }

    /// Convert an array-like to a 64-bit float matrix of shape `(n, p)`
    ///
    /// The shape must describe the same number of elements as the buffer,
    /// which holds for any array that passed
    /// [`ArrayValidator::check_structure`](super::ArrayValidator::check_structure)
    /// and was normalized by [`ShapeValidator::promote_to_2d`](super::ShapeValidator::promote_to_2d).
    pub fn convert_to_f64(array: &SampleArray, shape: (usize, usize)) -> Result<Array2<f64>> {
        Array2::from_shape_vec(shape, array.data().to_f64_vec()).map_err(|e| {
            ValidationError::shape(format!(
                "Cannot view {} buffer of length {} as [{}, {}]: {}",
                array.dtype(),
                array.data().len(),
                shape.0,
                shape.1,
                e
            ))
        })
    }

    /// Population variance (ddof = 0) over every element of the array
    ///
    /// Returns `None` for arrays without elements.
    pub fn flat_variance(array: &Array2<f64>) -> Option<f64> {
        if array.is_empty() {
            return None;
        }
        Some(array.var(0.0))
    }

    /// Validate that the flattened array has non-zero variance
    #[allow(clippy::float_cmp)]
    pub fn check_variance(array: &Array2<f64>, name: &str) -> Result<()> {
        match Self::flat_variance(array) {
            Some(variance) if variance != 0.0 => Ok(()),
            Some(_) => Err(ValidationError::degenerate_data(format!(
                "Test cannot be run, `{}` has 0 variance",
                name
            ))),
            None => Err(ValidationError::degenerate_data(format!(
                "Test cannot be run, `{}` has no elements (shape [{}, {}])",
                name,
                array.nrows(),
                array.ncols()
            ))),
        }
    }

    /// Validate a permutation repetition count
    ///
    /// Counts in `1..=max_reps` are accepted. Counts below
    /// `low_reps_threshold` are accepted with a warning.
    pub fn check_reps(reps: i64, max_reps: i64, low_reps_threshold: i64) -> Result<i64> {
        if reps < 1 || reps > max_reps {
            return Err(ValidationError::parameter_value_error(
                "repetition count",
                reps,
                &format!("1-{}", max_reps),
            ));
        }

        if reps < low_reps_threshold {
            log::warn!(
                "The number of replications is low (under {}), and p-value calculations \
                 may be unreliable. Use the p-value result with caution (got {})",
                low_reps_threshold,
                reps
            );
        }

        Ok(reps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SampleBuffer;
    use ndarray::arr2;

    #[test]
    fn test_check_no_nan() {
        let clean = SampleArray::from_shape_vec(vec![3], vec![1.0_f64, 2.0, f64::INFINITY]);
        assert!(NumericValidator::check_no_nan(&clean, "x").is_ok());

        let ints = SampleArray::from_shape_vec(vec![3], vec![1_i32, 2, 3]);
        assert!(NumericValidator::check_no_nan(&ints, "x").is_ok());

        let dirty = SampleArray::from_shape_vec(vec![3], vec![1.0_f32, f32::NAN, 3.0]);
        let err = NumericValidator::check_no_nan(&dirty, "y").unwrap_err();
        assert!(matches!(err, ValidationError::DataQuality(_)));
        assert!(err.to_string().contains("`y` contains NaNs"));
        assert!(err.to_string().contains("index 1"));
    }

    #[test]
    fn test_check_no_nan_accepts_integer_buffers() {
        for array in [
            SampleArray::from_shape_vec(vec![2, 2], vec![i32::MIN, 0, 1, i32::MAX]),
            SampleArray::from_shape_vec(vec![3], vec![0_u64, 1, u64::MAX]),
            SampleArray::from_shape_vec(vec![0], Vec::<i64>::new()),
        ] {
            assert!(!array.dtype().is_float());
            assert!(NumericValidator::check_no_nan(&array, "x").is_ok());
        }
    }

    #[test]
    fn test_convert_to_f64() {
        let array = SampleArray::from_shape_vec(vec![2, 2], vec![1_u32, 2, 3, 4]);
        let converted = NumericValidator::convert_to_f64(&array, (2, 2)).unwrap();
        assert_eq!(converted, arr2(&[[1.0, 2.0], [3.0, 4.0]]));

        let array = SampleArray::from_shape_vec(vec![3], vec![0.5_f32, 1.5, 2.5]);
        let converted = NumericValidator::convert_to_f64(&array, (3, 1)).unwrap();
        assert_eq!(converted, arr2(&[[0.5], [1.5], [2.5]]));
    }

    #[test]
    fn test_convert_to_f64_rejects_wrong_shape() {
        let array = SampleArray::from_parts(vec![3], SampleBuffer::Float64(vec![1.0, 2.0]));
        let err = NumericValidator::convert_to_f64(&array, (3, 1)).unwrap_err();
        assert!(matches!(err, ValidationError::Shape(_)));
    }

    #[test]
    fn test_flat_variance() {
        let array = arr2(&[[1.0], [2.0], [3.0], [4.0], [5.0]]);
        let variance = NumericValidator::flat_variance(&array).unwrap();
        assert!((variance - 2.0).abs() < 1e-12);

        // Flattened: columns are not considered separately
        let array = arr2(&[[1.0, 7.0], [1.0, 8.0], [1.0, 9.0]]);
        assert!(NumericValidator::flat_variance(&array).unwrap() > 0.0);

        let empty = Array2::<f64>::zeros((5, 0));
        assert_eq!(NumericValidator::flat_variance(&empty), None);
    }

    #[test]
    fn test_check_variance() {
        let varied = arr2(&[[1.0], [1.0], [2.0], [2.0], [3.0]]);
        assert!(NumericValidator::check_variance(&varied, "z").is_ok());

        let constant = Array2::from_elem((6, 2), 3.25);
        let err = NumericValidator::check_variance(&constant, "z").unwrap_err();
        assert!(matches!(err, ValidationError::DegenerateData(_)));
        assert!(err.to_string().contains("`z` has 0 variance"));

        let empty = Array2::<f64>::zeros((5, 0));
        let err = NumericValidator::check_variance(&empty, "x").unwrap_err();
        assert!(matches!(err, ValidationError::DegenerateData(_)));
    }

    #[test]
    fn test_check_reps() {
        assert_eq!(NumericValidator::check_reps(1000, 100_000, 1000).unwrap(), 1000);
        assert_eq!(NumericValidator::check_reps(100_000, 100_000, 1000).unwrap(), 100_000);

        // Low counts pass with a warning
        assert_eq!(NumericValidator::check_reps(10, 100_000, 1000).unwrap(), 10);

        let err = NumericValidator::check_reps(-1, 100_000, 1000).unwrap_err();
        assert!(matches!(err, ValidationError::Parameter(_)));
        assert!(err.to_string().contains("-1"));

        assert!(NumericValidator::check_reps(0, 100_000, 1000).is_err());
        assert!(NumericValidator::check_reps(100_001, 100_000, 1000).is_err());
    }
}
