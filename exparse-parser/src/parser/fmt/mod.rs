//! Options for printing expression trees in infix, prefix, and postfix notation.

mod render;

use crate::parser::ast::node::Node;
use std::fmt::{Display, Formatter, Result};

/// The notation to print an expression tree in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// The operator is written between its operands, such as `1 + 2`.
    ///
    /// This is the default option.
    #[default]
    Infix,

    /// The operator is written before its operands (Polish notation), such as `+ 1 2`.
    Prefix,

    /// The operator is written after its operands (reverse Polish notation), such as `1 2 +`.
    Postfix,
}

/// Formatting options for expression trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// When to wrap a child expression in parentheses in prefix and postfix notation.
    ///
    /// Infix notation always groups by precedence, since it would be ambiguous otherwise.
    pub grouping: Grouping,

    /// How to print chains of the same operator in prefix and postfix notation.
    pub chains: Chains,

    /// Whether to write multiplication by a variable as adjacency in infix notation, such as `3x`
    /// instead of `3 * x`.
    pub implicit_mul: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            grouping: Grouping::default(),
            chains: Chains::default(),
            implicit_mul: true,
        }
    }
}

impl FormatOptions {
    /// Wraps the given [`FormatOptions`] into a builder for further customization.
    pub fn into_builder(self) -> FormatOptionsBuilder {
        FormatOptionsBuilder(self)
    }
}

/// When to wrap a child expression in parentheses in prefix and postfix notation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// Never add parentheses. Prefix and postfix notation are unambiguous without them, as every
    /// operator has a fixed number of operands.
    ///
    /// This is the default option.
    #[default]
    Minimal,

    /// Wrap a child in parentheses when its operator binds looser than its parent's operator,
    /// such as `(3 4 +) 5 *`.
    Precedence,
}

impl Grouping {
    /// Utility function to create a new [`FormatOptions`] with the same formating options as the
    /// given [`FormatOptions`], but with the grouping set to this value.
    pub fn inside(self, options: FormatOptions) -> FormatOptions {
        FormatOptions {
            grouping: self,
            ..options
        }
    }
}

/// How to print chains of the same operator in prefix and postfix notation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Chains {
    /// Print one operator per node of the tree, such as `1 1 1 + +`.
    ///
    /// This is the default option.
    #[default]
    Binary,

    /// Drop the operator of a child that has the same operator as its parent, approximating an
    /// operator that takes any number of operands, such as `1 1 1 +`.
    Elide,
}

impl Chains {
    /// Utility function to create a new [`FormatOptions`] with the same formating options as the
    /// given [`FormatOptions`], but with the chain format set to this value.
    pub fn inside(self, options: FormatOptions) -> FormatOptions {
        FormatOptions {
            chains: self,
            ..options
        }
    }
}

/// Helper struct to build a [`FormatOptions`] struct.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptionsBuilder(FormatOptions);

impl FormatOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the grouping. See [`Grouping`] for more information.
    pub fn grouping(mut self, grouping: Grouping) -> Self {
        self.0.grouping = grouping;
        self
    }

    /// Sets the chain format. See [`Chains`] for more information.
    pub fn chains(mut self, chains: Chains) -> Self {
        self.0.chains = chains;
        self
    }

    /// Sets whether to write multiplication by a variable as adjacency.
    pub fn implicit_mul(mut self, implicit_mul: bool) -> Self {
        self.0.implicit_mul = implicit_mul;
        self
    }

    /// Builds the [`FormatOptions`] struct.
    pub fn build(self) -> FormatOptions {
        self.0
    }
}

/// A wrapper type that implements [`Display`] for a [`Node`] in a given notation.
#[derive(Debug, Clone, Copy)]
pub struct NodeFormatter<'a> {
    node: &'a Node,
    notation: Notation,
    options: FormatOptions,
}

impl<'a> NodeFormatter<'a> {
    /// Creates a formatter for the given node.
    pub fn new(node: &'a Node, notation: Notation, options: FormatOptions) -> Self {
        Self { node, notation, options }
    }
}

impl Display for NodeFormatter<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let rendered = match self.notation {
            Notation::Infix => render::infix(self.node, self.options),
            Notation::Prefix | Notation::Postfix => {
                render::polish(self.node, self.notation, self.options, false)
            },
        };
        f.write_str(&rendered)
    }
}
