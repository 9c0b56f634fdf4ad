//! Consolidated validation utilities
//!
//! Each validator is a stateless namespace of checks used by
//! [`InputValidator`](crate::InputValidator). They can also be called
//! directly by test routines that only need a single check.

pub mod array;
pub mod numeric;
pub mod shape;

pub use array::ArrayValidator;
pub use numeric::NumericValidator;
pub use shape::ShapeValidator;
