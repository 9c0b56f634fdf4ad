//! Core types for sample collections and validation results

use crate::error::Result;
use ndarray::{Array2, ArrayBase, Data, Dimension};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Element precision of a supplied sample collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DType {
    Float32,
    Float64,
    Int32,
    Int64,
    UInt32,
    UInt64,
}

impl DType {
    /// Whether elements of this type can hold NaN
    #[must_use]
    pub fn is_float(self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float32 => write!(f, "float32"),
            Self::Float64 => write!(f, "float64"),
            Self::Int32 => write!(f, "int32"),
            Self::Int64 => write!(f, "int64"),
            Self::UInt32 => write!(f, "uint32"),
            Self::UInt64 => write!(f, "uint64"),
        }
    }
}

/// Numeric element types accepted as samples
pub trait Element: Copy + fmt::Debug + 'static {
    /// Precision tag for this element type
    const DTYPE: DType;

    /// Widen to 64-bit floating point
    fn to_f64(self) -> f64;

    /// Whether this value is NaN (never true for integers)
    fn is_nan(self) -> bool {
        false
    }

    /// Wrap a flat buffer of this element type
    fn into_buffer(values: Vec<Self>) -> SampleBuffer;
}

impl Element for f32 {
    const DTYPE: DType = DType::Float32;

    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }

    fn into_buffer(values: Vec<Self>) -> SampleBuffer {
        SampleBuffer::Float32(values)
    }
}

impl Element for f64 {
    const DTYPE: DType = DType::Float64;

    fn to_f64(self) -> f64 {
        self
    }

    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }

    fn into_buffer(values: Vec<Self>) -> SampleBuffer {
        SampleBuffer::Float64(values)
    }
}

macro_rules! impl_integer_element {
    ($($t:ty => $dtype:ident),* $(,)?) => {
        $(
            impl Element for $t {
                const DTYPE: DType = DType::$dtype;

                #[allow(clippy::cast_lossless)]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn into_buffer(values: Vec<Self>) -> SampleBuffer {
                    SampleBuffer::$dtype(values)
                }
            }
        )*
    };
}

impl_integer_element!(i32 => Int32, i64 => Int64, u32 => UInt32, u64 => UInt64);

/// Flat row-major sample buffer tagged with its precision
///
/// Serialized as `{"dtype": "float64", "values": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "dtype", content = "values", rename_all = "lowercase")]
pub enum SampleBuffer {
    Float32(Vec<f32>),
    Float64(Vec<f64>),
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    UInt32(Vec<u32>),
    UInt64(Vec<u64>),
}

fn position_nan<T: Element>(values: &[T]) -> Option<usize> {
    values.iter().position(|&v| Element::is_nan(v))
}

fn widen<T: Element>(values: &[T]) -> Vec<f64> {
    values.iter().map(|&v| v.to_f64()).collect()
}

impl SampleBuffer {
    /// Element precision of this buffer
    #[must_use]
    pub fn dtype(&self) -> DType {
        match self {
            Self::Float32(_) => DType::Float32,
            Self::Float64(_) => DType::Float64,
            Self::Int32(_) => DType::Int32,
            Self::Int64(_) => DType::Int64,
            Self::UInt32(_) => DType::UInt32,
            Self::UInt64(_) => DType::UInt64,
        }
    }

    /// Number of stored elements
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Float32(v) => v.len(),
            Self::Float64(v) => v.len(),
            Self::Int32(v) => v.len(),
            Self::Int64(v) => v.len(),
            Self::UInt32(v) => v.len(),
            Self::UInt64(v) => v.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flat index of the first NaN, if any
    #[must_use]
    pub fn first_nan(&self) -> Option<usize> {
        match self {
            Self::Float32(v) => position_nan(v),
            Self::Float64(v) => position_nan(v),
            Self::Int32(v) => position_nan(v),
            Self::Int64(v) => position_nan(v),
            Self::UInt32(v) => position_nan(v),
            Self::UInt64(v) => position_nan(v),
        }
    }

    /// Copy every element into a new 64-bit float buffer
    #[must_use]
    pub fn to_f64_vec(&self) -> Vec<f64> {
        match self {
            Self::Float32(v) => widen(v),
            Self::Float64(v) => v.clone(),
            Self::Int32(v) => widen(v),
            Self::Int64(v) => widen(v),
            Self::UInt32(v) => widen(v),
            Self::UInt64(v) => widen(v),
        }
    }
}

/// A numeric array-like: a shape plus a flat row-major buffer
///
/// Shape and buffer are carried independently, so a `SampleArray` built from
/// raw parts or deserialized from JSON may be structurally inconsistent. The
/// validator rejects such arrays before looking at their contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleArray {
    shape: Vec<usize>,
    data: SampleBuffer,
}

impl SampleArray {
    /// Assemble an array-like from a shape and a buffer without checking them
    #[must_use]
    pub fn from_parts(shape: Vec<usize>, data: SampleBuffer) -> Self {
        Self { shape, data }
    }

    /// Assemble an array-like from a shape and a typed flat vector
    #[must_use]
    pub fn from_shape_vec<T: Element>(shape: Vec<usize>, values: Vec<T>) -> Self {
        Self::from_parts(shape, T::into_buffer(values))
    }

    /// Parse an array-like from its JSON representation
    ///
    /// ```rust
    /// use cindep_validate::{DType, SampleArray};
    ///
    /// let json = r#"{"shape": [2, 1], "data": {"dtype": "int64", "values": [1, 2]}}"#;
    /// let samples = SampleArray::from_json_str(json).unwrap();
    /// assert_eq!(samples.shape(), &[2, 1]);
    /// assert_eq!(samples.dtype(), DType::Int64);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    #[must_use]
    pub fn dtype(&self) -> DType {
        self.data.dtype()
    }

    #[must_use]
    pub fn data(&self) -> &SampleBuffer {
        &self.data
    }

    /// Number of elements implied by the shape (1 for a 0-D array)
    ///
    /// `None` when the product of the dimensions overflows `usize`.
    #[must_use]
    pub fn expected_len(&self) -> Option<usize> {
        self.shape
            .iter()
            .try_fold(1_usize, |acc, &dim| acc.checked_mul(dim))
    }
}

impl<A, S, D> From<&ArrayBase<S, D>> for SampleArray
where
    A: Element,
    S: Data<Elem = A>,
    D: Dimension,
{
    fn from(array: &ArrayBase<S, D>) -> Self {
        Self::from_shape_vec(array.shape().to_vec(), array.iter().copied().collect())
    }
}

impl<A, S, D> From<ArrayBase<S, D>> for SampleArray
where
    A: Element,
    S: Data<Elem = A>,
    D: Dimension,
{
    fn from(array: ArrayBase<S, D>) -> Self {
        Self::from(&array)
    }
}

impl<T: Element> From<Vec<T>> for SampleArray {
    fn from(values: Vec<T>) -> Self {
        Self::from_shape_vec(vec![values.len()], values)
    }
}

impl From<&SampleArray> for SampleArray {
    fn from(array: &SampleArray) -> Self {
        array.clone()
    }
}

/// Normalized output of a successful validation
///
/// All three arrays are 2-D, 64-bit floating point and share the same
/// number of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSamples {
    pub x: Array2<f64>,
    pub y: Array2<f64>,
    pub z: Array2<f64>,
}

impl ValidatedSamples {
    /// Shared sample count `n`
    #[must_use]
    pub fn n_samples(&self) -> usize {
        self.x.nrows()
    }
}

/// Steps of the validation pipeline, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationStage {
    /// Pairwise array-like compatibility of `x`/`y` and `y`/`z`
    Compatibility,
    /// NaN scan of `x` and `y`
    MissingValues,
    /// Promotion of 1-D inputs to 2-D
    Dimensions,
    /// Equal sample counts across inputs
    SampleAgreement,
    /// Conversion to 64-bit floating point
    Precision,
    /// Minimum number of samples
    SampleSize,
    /// Non-zero variance
    Variance,
    /// Repetition count check
    Repetitions,
}

impl fmt::Display for ValidationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Compatibility => "compatibility",
            Self::MissingValues => "missing_values",
            Self::Dimensions => "dimensions",
            Self::SampleAgreement => "sample_agreement",
            Self::Precision => "precision",
            Self::SampleSize => "sample_size",
            Self::Variance => "variance",
            Self::Repetitions => "repetitions",
        };
        write!(f, "{}", name)
    }
}
