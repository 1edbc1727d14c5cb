use crate::parser::{ast::node::Node, token::op::BinOpKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary expression, such as `1 + 2`. Binary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Node>,

    /// The operator of the binary expression.
    pub kind: BinOpKind,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Node>,
}

impl Binary {
    /// Creates a new binary expression.
    pub fn new(lhs: Node, kind: BinOpKind, rhs: Node) -> Self {
        Self {
            lhs: Box::new(lhs),
            kind,
            rhs: Box::new(rhs),
        }
    }

    /// Returns the weight of the operator.
    pub fn weight(&self) -> u8 {
        self.kind.weight()
    }
}
