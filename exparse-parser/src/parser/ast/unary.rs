use crate::parser::{ast::node::Node, token::op::UnaryOpKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A unary expression, such as `3!`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unary {
    /// The operand of the unary expression.
    pub operand: Box<Node>,

    /// The operator of the unary expression.
    pub kind: UnaryOpKind,
}

impl Unary {
    /// Creates a new unary expression.
    pub fn new(operand: Node, kind: UnaryOpKind) -> Self {
        Self {
            operand: Box::new(operand),
            kind,
        }
    }

    /// Returns the weight of the operator.
    pub fn weight(&self) -> u8 {
        self.kind.weight()
    }
}
