use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A number literal, stored as the text it was written with.
///
/// The text is only interpreted as a number when it is evaluated, so a literal such as `1.2.3` is
/// accepted by the parser and rejected by the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitNum {
    /// The digits of the literal, including a leading `-` sign if it is negative.
    pub text: String,
}

impl LitNum {
    /// Creates a new number literal with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl From<f64> for LitNum {
    fn from(value: f64) -> Self {
        Self::new(value.to_string())
    }
}

impl From<&str> for LitNum {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for LitNum {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

macro_rules! lit_num_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for LitNum {
                fn from(value: $ty) -> Self {
                    Self::new(value.to_string())
                }
            }
        )*
    };
}

lit_num_from_int!(i32, i64, u32, u64);

impl fmt::Display for LitNum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A reference to a variable, such as `x`.
///
/// Two references with the same name are only equal if they are also bound to the same value (or
/// are both unbound).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitVar {
    /// The name of the variable.
    pub name: char,

    /// The value the variable is currently bound to, if any.
    pub value: Option<LitNum>,
}

impl LitVar {
    /// Creates a new, unbound variable reference.
    pub fn new(name: char) -> Self {
        Self { name, value: None }
    }

    /// Returns true if the variable is bound to a value.
    pub fn is_bound(&self) -> bool {
        self.value.is_some()
    }
}

impl fmt::Display for LitVar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
