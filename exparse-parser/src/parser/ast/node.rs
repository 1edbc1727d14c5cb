use crate::parser::{
    ast::{binary::Binary, literal::{LitNum, LitVar}, unary::Unary},
    fmt::{FormatOptions, Notation, NodeFormatter},
};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node of an expression tree.
///
/// Every node exclusively owns its children. Two nodes are equal if they have the same shape and
/// the same kind, value, and name at every position, including the values bound to variables.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node {
    /// A number literal, such as `2` or `0.5`.
    Number(LitNum),

    /// A reference to a variable, such as `x`.
    Variable(LitVar),

    /// A binary expression, such as `1 + 2`.
    Binary(Binary),

    /// A unary expression, such as `3!`.
    Unary(Unary),
}

impl Node {
    /// Returns the weight of the node's operator. Leaves bind tighter than any operator, so they
    /// never need to be grouped.
    pub fn weight(&self) -> u8 {
        match self {
            Node::Number(_) | Node::Variable(_) => u8::MAX,
            Node::Binary(binary) => binary.weight(),
            Node::Unary(unary) => unary.weight(),
        }
    }

    /// Returns true if the node is a number or a variable.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Number(_) | Node::Variable(_))
    }

    /// Returns the node as a binary expression, if it is one.
    pub fn as_binary(&self) -> Option<&Binary> {
        match self {
            Node::Binary(binary) => Some(binary),
            _ => None,
        }
    }

    /// Binds every reference to the variable `name` in this subtree to `value`.
    pub fn set_variable(&mut self, name: char, value: &LitNum) {
        match self {
            Node::Number(_) => (),
            Node::Variable(var) => {
                if var.name == name {
                    var.value = Some(value.clone());
                }
            },
            Node::Binary(binary) => {
                binary.lhs.set_variable(name, value);
                binary.rhs.set_variable(name, value);
            },
            Node::Unary(unary) => unary.operand.set_variable(name, value),
        }
    }

    /// Clears the value bound to every reference to the variable `name` in this subtree.
    pub fn unset_variable(&mut self, name: char) {
        match self {
            Node::Number(_) => (),
            Node::Variable(var) => {
                if var.name == name {
                    var.value = None;
                }
            },
            Node::Binary(binary) => {
                binary.lhs.unset_variable(name);
                binary.rhs.unset_variable(name);
            },
            Node::Unary(unary) => unary.operand.unset_variable(name),
        }
    }

    /// Returns true if this subtree references a variable that is not bound to a value.
    pub fn has_unbound_variable(&self) -> bool {
        match self {
            Node::Number(_) => false,
            Node::Variable(var) => !var.is_bound(),
            Node::Binary(binary) => {
                binary.lhs.has_unbound_variable() || binary.rhs.has_unbound_variable()
            },
            Node::Unary(unary) => unary.operand.has_unbound_variable(),
        }
    }

    /// Wraps the node in a [`NodeFormatter`], which implements [`Display`] in the given notation.
    ///
    /// [`Display`]: std::fmt::Display
    pub fn display(&self, notation: Notation, options: FormatOptions) -> NodeFormatter<'_> {
        NodeFormatter::new(self, notation, options)
    }
}

impl From<LitNum> for Node {
    fn from(num: LitNum) -> Self {
        Node::Number(num)
    }
}

impl From<LitVar> for Node {
    fn from(var: LitVar) -> Self {
        Node::Variable(var)
    }
}

impl From<Binary> for Node {
    fn from(binary: Binary) -> Self {
        Node::Binary(binary)
    }
}

impl From<Unary> for Node {
    fn from(unary: Unary) -> Self {
        Node::Unary(unary)
    }
}

/// Formats the node in infix notation.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.display(Notation::Infix, FormatOptions::default()).fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::token::op::BinOpKind;
    use pretty_assertions::assert_eq;

    fn x_plus_x() -> Node {
        Binary::new(LitVar::new('x').into(), BinOpKind::Add, LitVar::new('x').into()).into()
    }

    #[test]
    fn set_every_occurrence() {
        let mut node = x_plus_x();
        node.set_variable('x', &LitNum::new("1"));

        let bound = Node::Variable(LitVar { name: 'x', value: Some(LitNum::new("1")) });
        assert_eq!(node, Binary::new(bound.clone(), BinOpKind::Add, bound).into());
        assert!(!node.has_unbound_variable());
    }

    #[test]
    fn unset_restores_equality() {
        let mut node = x_plus_x();
        node.set_variable('x', &LitNum::new("1"));
        assert_ne!(node, x_plus_x());

        node.unset_variable('x');
        assert_eq!(node, x_plus_x());
        assert!(node.has_unbound_variable());
    }

    #[test]
    fn other_names_untouched() {
        let mut node = x_plus_x();
        node.set_variable('y', &LitNum::new("1"));
        assert_eq!(node, x_plus_x());
    }
}
