//! Utility modules for common operations
//!
//! Holds the predicate helpers the validation pipeline is assembled from.

pub mod validation;

pub use validation::{ArrayValidator, NumericValidator, ShapeValidator};
