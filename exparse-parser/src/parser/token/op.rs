//! Structs to help build binary and unary operators.

use crate::tokenizer::TokenKind;
use std::fmt::{Display, Formatter, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The unary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOpKind {
    Factorial,
}

impl UnaryOpKind {
    /// Returns the weight of the unary operation. Unary operators bind tighter than any binary
    /// operator.
    pub fn weight(&self) -> u8 {
        match self {
            Self::Factorial => 4,
        }
    }

    /// Returns the symbol used to write the operation.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Factorial => "!",
        }
    }

    /// Returns the unary operation the token represents, if any.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Factorial => Some(Self::Factorial),
            _ => None,
        }
    }
}

impl Display for UnaryOpKind {
    fn fmt(&self, f: &mut Formatter) -> Result {
        f.write_str(self.symbol())
    }
}

/// The binary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOpKind {
    Exp,
    Mul,
    Div,
    Add,
    Sub,
}

impl BinOpKind {
    /// Returns the weight of the binary operation. A higher weight binds tighter.
    pub fn weight(&self) -> u8 {
        match self {
            Self::Exp => 3,
            Self::Mul | Self::Div => 2,
            Self::Add | Self::Sub => 1,
        }
    }

    /// Returns the symbol used to write the operation.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Exp => "^",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Add => "+",
            Self::Sub => "-",
        }
    }

    /// Returns true if a chain of this operation at equal weight nests to the right, so that
    /// `a + b + c` is built as `a + (b + c)`.
    ///
    /// This holds for the operations where regrouping does not change the result (`+` and `*`),
    /// and for `^`, which is right-associative. `-` and `/` nest to the left.
    pub fn nests_right(&self) -> bool {
        matches!(self, Self::Add | Self::Mul | Self::Exp)
    }

    /// Returns the binary operation the token represents, if any.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Exp => Some(Self::Exp),
            TokenKind::Mul => Some(Self::Mul),
            TokenKind::Div => Some(Self::Div),
            TokenKind::Add => Some(Self::Add),
            TokenKind::Sub => Some(Self::Sub),
            _ => None,
        }
    }
}

impl Display for BinOpKind {
    fn fmt(&self, f: &mut Formatter) -> Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_are_ordered() {
        assert!(BinOpKind::Add.weight() == BinOpKind::Sub.weight());
        assert!(BinOpKind::Mul.weight() == BinOpKind::Div.weight());
        assert!(BinOpKind::Add.weight() < BinOpKind::Mul.weight());
        assert!(BinOpKind::Mul.weight() < BinOpKind::Exp.weight());
        assert!(BinOpKind::Exp.weight() < UnaryOpKind::Factorial.weight());
    }

    #[test]
    fn from_token() {
        assert_eq!(BinOpKind::from_token(TokenKind::Exp), Some(BinOpKind::Exp));
        assert_eq!(BinOpKind::from_token(TokenKind::Factorial), None);
        assert_eq!(UnaryOpKind::from_token(TokenKind::Factorial), Some(UnaryOpKind::Factorial));
        assert_eq!(UnaryOpKind::from_token(TokenKind::Sub), None);
    }
}
