//! Two dimensional vector value type
//!
//! Arithmetic, geometric and conversion operations on a plain `(x, y)` pair
//!
//! Most operations come in two forms, a pure one returning a new Vector and
//! an in-place one (`i` prefixed) writing into one of its operands

#[macro_use]
pub mod vec_error;
pub mod vec_model;

pub use vec_error::{VectorError, VectorErrorKind};
pub use vec_model::{Vector, EPSILON};
