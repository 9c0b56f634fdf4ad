#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]

//! # Conditional Independence Input Validation
//!
//! A precondition gate for conditional independence tests (`X ⟂ Y | Z`).
//! Every test statistic in this family assumes the same things about its
//! inputs; this crate checks those assumptions up front and hands back the
//! samples in a single normalized representation, so test routines fail fast
//! with a precise message instead of producing numerical garbage.
//!
//! ## What is checked
//!
//! - `x`/`y` and `y`/`z` are well-formed numeric array-likes
//! - `x` and `y` contain no NaN values
//! - each input is 1-D (promoted to `[n, 1]`) or 2-D
//! - all inputs share the same sample count `n`
//! - all inputs are converted to `f64`
//! - `n` is at least 4 (configurable)
//! - each input has non-zero variance over all of its elements
//! - the optional permutation count is a positive, bounded integer
//!
//! Checks run in that order and the first failure is returned.
//!
//! ## Quick Start
//!
//! ```rust
//! use cindep_validate::validate;
//! use ndarray::arr2;
//!
//! # fn main() -> cindep_validate::Result<()> {
//! let x = arr2(&[[1.0], [2.0], [3.0], [4.0], [5.0]]);
//! let y = arr2(&[[2.0], [1.0], [4.0], [3.0], [5.0]]);
//! let z = arr2(&[[1_i64], [1], [2], [2], [3]]);
//!
//! let samples = validate(&x, &y, &z, Some(1000))?;
//! assert_eq!(samples.z.shape(), &[5, 1]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom thresholds
//!
//! ```rust
//! use cindep_validate::{InputValidator, SampleArray, ValidationConfig};
//!
//! # fn main() -> cindep_validate::Result<()> {
//! let config = ValidationConfig::builder().min_samples(10).build()?;
//! let validator = InputValidator::new(config)?;
//!
//! let x = SampleArray::from(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
//! assert!(validator.validate(&x, &x, &x, None).is_err());
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! The crate emits `tracing` events for each pipeline stage and `log`
//! warnings for low permutation counts. It never installs a subscriber or
//! logger; that is left to the application.

pub mod config;
pub mod error;
pub mod types;
pub mod utils;
pub mod validator;

pub use config::{ValidationConfig, ValidationConfigBuilder};
pub use error::{Result, ValidationError};
pub use types::{DType, Element, SampleArray, SampleBuffer, ValidatedSamples, ValidationStage};
pub use utils::{ArrayValidator, NumericValidator, ShapeValidator};
pub use validator::InputValidator;

/// Validate a sample triple with the default thresholds
///
/// Accepts anything convertible into a [`SampleArray`]: `ndarray` arrays and
/// views of any supported element type (by value or by reference), plain
/// vectors (treated as 1-D), or `SampleArray`s themselves.
///
/// # Arguments
///
/// * `x`, `y`, `z` - Samples of shape `[n]` or `[n, p]`
/// * `reps` - Optional permutation count for the downstream test
///
/// # Returns
///
/// The normalized triple as 2-D `f64` matrices
///
/// # Examples
///
/// ```rust
/// use cindep_validate::{validate, ValidationError};
///
/// let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// let y = vec![2.0, 1.0, 4.0, 3.0, 5.0];
/// let z = vec![1.0, 1.0, 2.0, 2.0, 3.0];
///
/// let err = validate(x, y, z, Some(-1)).unwrap_err();
/// assert!(matches!(err, ValidationError::Parameter(_)));
/// ```
pub fn validate(
    x: impl Into<SampleArray>,
    y: impl Into<SampleArray>,
    z: impl Into<SampleArray>,
    reps: Option<i64>,
) -> Result<ValidatedSamples> {
    InputValidator::default().validate(&x.into(), &y.into(), &z.into(), reps)
}
