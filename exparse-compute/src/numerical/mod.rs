//! Numerical evaluation of expression trees.
//!
//! Numbers are evaluated as [`f64`]s and follow IEEE 754 semantics, so dividing by zero produces
//! an infinity or NaN instead of an error. Raising a negative number to a fractional power
//! produces a complex number, represented with [`num_complex::Complex64`].

pub mod error;
pub mod eval;
pub mod value;
