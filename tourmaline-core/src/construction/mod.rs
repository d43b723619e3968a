//! Builds the distance inputs consumed by the ordering algorithms.

mod matrix;
pub use self::matrix::*;
