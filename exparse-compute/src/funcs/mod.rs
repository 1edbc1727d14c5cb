//! Numerical functions used by the evaluator.

pub mod combinatoric;
