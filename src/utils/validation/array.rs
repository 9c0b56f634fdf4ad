//! Array-like compatibility validation
//!
//! Rejects array-likes whose shape and buffer disagree before any of their
//! values are inspected.

use crate::error::{Result, ValidationError};
use crate::types::SampleArray;

/// Validator for structural consistency of array-likes
pub struct ArrayValidator;

impl ArrayValidator {
    /// Validate that a single array-like is a well-formed numeric array
    pub fn check_structure(array: &SampleArray, name: &str) -> Result<()> {
        let actual = array.data().len();
        let Some(expected) = array.expected_len() else {
            return Err(ValidationError::compatibility(format!(
                "`{}` is not a valid {} array: shape {:?} describes more elements than fit in memory",
                name,
                array.dtype(),
                array.shape()
            )));
        };

        if expected != actual {
            return Err(ValidationError::compatibility(format!(
                "`{}` is not a valid {} array: shape {:?} requires {} elements, buffer holds {}",
                name,
                array.dtype(),
                array.shape(),
                expected,
                actual
            )));
        }

        Ok(())
    }

    /// Validate that two array-likes can be compared as numeric arrays
    pub fn check_compatible_pair(
        first: &SampleArray,
        first_name: &str,
        second: &SampleArray,
        second_name: &str,
    ) -> Result<()> {
        Self::check_structure(first, first_name)?;
        Self::check_structure(second, second_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SampleBuffer;

    #[test]
    fn test_check_structure() {
        let valid = SampleArray::from_shape_vec(vec![2, 2], vec![1.0_f64, 2.0, 3.0, 4.0]);
        assert!(ArrayValidator::check_structure(&valid, "x").is_ok());

        // 0-D arrays hold exactly one element
        let scalar = SampleArray::from_shape_vec(Vec::new(), vec![1_i32]);
        assert!(ArrayValidator::check_structure(&scalar, "x").is_ok());

        let empty = SampleArray::from_shape_vec(vec![0], Vec::<f64>::new());
        assert!(ArrayValidator::check_structure(&empty, "x").is_ok());
    }

    #[test]
    fn test_check_structure_rejects_mismatched_buffer() {
        let broken = SampleArray::from_parts(vec![3, 2], SampleBuffer::Int64(vec![1, 2, 3]));
        let err = ArrayValidator::check_structure(&broken, "y").unwrap_err();
        assert!(matches!(err, ValidationError::Compatibility(_)));

        let message = err.to_string();
        assert!(message.contains("`y`"));
        assert!(message.contains("[3, 2]"));
        assert!(message.contains("int64"));
    }

    #[test]
    fn test_check_structure_rejects_overflowing_shape() {
        let broken = SampleArray::from_parts(
            vec![1 << 32, 1 << 32],
            SampleBuffer::Float64(vec![1.0, 2.0, 3.0, 4.0]),
        );
        let err = ArrayValidator::check_structure(&broken, "z").unwrap_err();
        assert!(matches!(err, ValidationError::Compatibility(_)));
        assert!(err.to_string().contains("`z`"));
        assert!(err.to_string().contains("[4294967296, 4294967296]"));
    }

    #[test]
    fn test_check_compatible_pair() {
        let good = SampleArray::from_shape_vec(vec![3], vec![1.0_f32, 2.0, 3.0]);
        let other = SampleArray::from_shape_vec(vec![3, 1], vec![4_u32, 5, 6]);
        assert!(ArrayValidator::check_compatible_pair(&good, "x", &other, "y").is_ok());

        let broken = SampleArray::from_parts(vec![4], SampleBuffer::Float64(vec![1.0]));
        let err = ArrayValidator::check_compatible_pair(&good, "y", &broken, "z").unwrap_err();
        assert!(err.to_string().contains("`z`"));
    }
}
