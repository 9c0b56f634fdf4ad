//! Input validation pipeline for conditional independence tests
//!
//! This module provides the `InputValidator` that every conditional
//! independence test runs before computing a statistic. It checks and
//! normalizes the sample triple `(x, y, z)` and an optional repetition count
//! in a fixed order, stopping at the first failure:
//!
//! 1. `x`/`y` and `y`/`z` are well-formed numeric array-likes
//! 2. `x` and `y` contain no NaN values
//! 3. 1-D inputs are promoted to `[n, 1]`; other non-2-D inputs are rejected
//! 4. all three inputs share the same number of samples
//! 5. all three inputs are converted to `f64`
//! 6. every input has at least `min_samples` samples
//! 7. every input has non-zero variance over all of its elements
//! 8. the repetition count, when supplied, is in range
//!
//! `z` is deliberately not scanned for NaN values.

use crate::{
    config::ValidationConfig,
    error::Result,
    types::{SampleArray, ValidatedSamples, ValidationStage},
    utils::{ArrayValidator, NumericValidator, ShapeValidator},
};
use ndarray::Array2;
use tracing::{debug, instrument, trace};

/// Precondition gate for conditional independence tests
///
/// Holds only its thresholds; every call to [`validate`](Self::validate) is
/// independent and borrows its inputs, so one validator can be shared across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct InputValidator {
    config: ValidationConfig,
}

impl InputValidator {
    /// Create a validator with custom thresholds
    ///
    /// # Errors
    /// - `ValidationError::InvalidConfig` if the configuration is inconsistent
    pub fn new(config: ValidationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate and normalize a sample triple
    ///
    /// # Arguments
    ///
    /// * `x`, `y`, `z` - 1-D or 2-D numeric samples with a shared sample count
    /// * `reps` - Optional permutation count; `None` and `Some(0)` skip the check
    ///
    /// # Returns
    ///
    /// The triple as 2-D `f64` matrices of shape `[n, p]`, `[n, q]`, `[n, r]`
    ///
    /// # Errors
    ///
    /// The error of the first failing check:
    /// - `Compatibility` for a malformed array-like
    /// - `DataQuality` for NaN values in `x` or `y`
    /// - `Shape` for inputs that are not 1-D or 2-D, or mismatched sample counts
    /// - `InsufficientData` for fewer than `min_samples` samples
    /// - `DegenerateData` for an input with zero variance
    /// - `Parameter` for an out-of-range repetition count
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cindep_validate::{InputValidator, SampleArray};
    /// use ndarray::{arr1, arr2};
    ///
    /// let x = SampleArray::from(&arr1(&[1.0, 2.0, 3.0, 4.0, 5.0]));
    /// let y = SampleArray::from(&arr2(&[[2], [1], [4], [3], [5]]));
    /// let z = SampleArray::from(&arr2(&[[1.0_f32], [1.0], [2.0], [2.0], [3.0]]));
    ///
    /// let samples = InputValidator::default().validate(&x, &y, &z, None).unwrap();
    /// assert_eq!(samples.x.shape(), &[5, 1]);
    /// assert_eq!(samples.n_samples(), 5);
    /// ```
    #[instrument(
        skip_all,
        fields(
            x_shape = ?x.shape(),
            y_shape = ?y.shape(),
            z_shape = ?z.shape(),
            reps = ?reps
        )
    )]
    pub fn validate(
        &self,
        x: &SampleArray,
        y: &SampleArray,
        z: &SampleArray,
        reps: Option<i64>,
    ) -> Result<ValidatedSamples> {
        checkpoint(ValidationStage::Compatibility, check_compatibility(x, y, z))?;
        checkpoint(ValidationStage::MissingValues, check_missing_values(x, y))?;

        let (x_shape, y_shape, z_shape) =
            checkpoint(ValidationStage::Dimensions, normalize_dimensions(x, y, z))?;
        let n = checkpoint(
            ValidationStage::SampleAgreement,
            ShapeValidator::check_sample_agreement(x_shape, y_shape, z_shape),
        )?;

        let samples = checkpoint(
            ValidationStage::Precision,
            convert_precision(x, x_shape, y, y_shape, z, z_shape),
        )?;

        checkpoint(ValidationStage::SampleSize, self.check_sample_size(&samples))?;
        checkpoint(ValidationStage::Variance, check_variance(&samples))?;

        if let Some(reps) = reps.filter(|&reps| reps != 0) {
            checkpoint(
                ValidationStage::Repetitions,
                NumericValidator::check_reps(
                    reps,
                    self.config.max_reps,
                    self.config.low_reps_threshold,
                ),
            )?;
        }

        debug!(
            n_samples = n,
            p = samples.x.ncols(),
            q = samples.y.ncols(),
            r = samples.z.ncols(),
            "Input validation passed"
        );

        Ok(samples)
    }

    fn check_sample_size(&self, samples: &ValidatedSamples) -> Result<()> {
        for (name, array) in named(samples) {
            ShapeValidator::check_min_samples(array.nrows(), name, self.config.min_samples)?;
        }
        Ok(())
    }
}

/// Log the outcome of one pipeline stage and pass the result through
fn checkpoint<T>(stage: ValidationStage, result: Result<T>) -> Result<T> {
    match &result {
        Ok(_) => trace!(%stage, "Validation stage passed"),
        Err(e) => debug!(%stage, error = %e, "Input validation rejected"),
    }
    result
}

fn named(samples: &ValidatedSamples) -> [(&'static str, &Array2<f64>); 3] {
    [("x", &samples.x), ("y", &samples.y), ("z", &samples.z)]
}

fn check_compatibility(x: &SampleArray, y: &SampleArray, z: &SampleArray) -> Result<()> {
    ArrayValidator::check_compatible_pair(x, "x", y, "y")?;
    ArrayValidator::check_compatible_pair(y, "y", z, "z")
}

fn check_missing_values(x: &SampleArray, y: &SampleArray) -> Result<()> {
    NumericValidator::check_no_nan(x, "x")?;
    NumericValidator::check_no_nan(y, "y")
}

type Shape2 = (usize, usize);

fn normalize_dimensions(
    x: &SampleArray,
    y: &SampleArray,
    z: &SampleArray,
) -> Result<(Shape2, Shape2, Shape2)> {
    Ok((
        ShapeValidator::promote_to_2d(x.shape(), "x")?,
        ShapeValidator::promote_to_2d(y.shape(), "y")?,
        ShapeValidator::promote_to_2d(z.shape(), "z")?,
    ))
}

fn convert_precision(
    x: &SampleArray,
    x_shape: Shape2,
    y: &SampleArray,
    y_shape: Shape2,
    z: &SampleArray,
    z_shape: Shape2,
) -> Result<ValidatedSamples> {
    Ok(ValidatedSamples {
        x: NumericValidator::convert_to_f64(x, x_shape)?,
        y: NumericValidator::convert_to_f64(y, y_shape)?,
        z: NumericValidator::convert_to_f64(z, z_shape)?,
    })
}

fn check_variance(samples: &ValidatedSamples) -> Result<()> {
    for (name, array) in named(samples) {
        NumericValidator::check_variance(array, name)?;
    }
    Ok(())
}
