use crate::primitive::complex;
use num_complex::Complex64;
use std::fmt::{Display, Formatter, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of evaluating an expression.
///
/// Evaluation stays in the real numbers until an operation leaves them, such as raising a
/// negative number to a fractional power, after which the result is complex.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// A real number.
    Real(f64),

    /// A complex number.
    Complex(Complex64),
}

impl Value {
    /// Returns the typename of the value.
    pub fn typename(&self) -> &'static str {
        match self {
            Value::Real(_) => "real",
            Value::Complex(_) => "complex",
        }
    }

    /// Returns true if the value is a [`Value::Real`].
    pub fn is_real(&self) -> bool {
        matches!(self, Value::Real(_))
    }

    /// Returns the value as a real number, if it has no imaginary part.
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Value::Real(n) => Some(*n),
            Value::Complex(c) if c.im == 0.0 => Some(c.re),
            Value::Complex(_) => None,
        }
    }

    /// Converts the value into a complex number.
    pub fn into_complex(self) -> Complex64 {
        match self {
            Value::Real(n) => complex(n, 0.0),
            Value::Complex(c) => c,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Real(n)
    }
}

impl From<Complex64> for Value {
    fn from(c: Complex64) -> Self {
        Value::Complex(c)
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        self.as_real() == Some(*other)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Value::Real(n) => write!(f, "{}", n),
            Value::Complex(c) => {
                let sign = if c.im.is_sign_negative() { '-' } else { '+' };
                write!(f, "{} {} {}i", c.re, sign, c.im.abs())
            },
        }
    }
}
