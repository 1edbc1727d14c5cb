use crate::parser::{
    ast::{literal::LitNum, node::Node},
    error::Error,
    fmt::{FormatOptions, Notation},
    Parser,
};
use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A complete expression tree.
///
/// A tree is built from a string with [`Tree::parse`] (or [`str::parse`]), after which it can be
/// printed, have its variables bound, and be handed to the evaluator, simplifier, or factoring
/// engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tree {
    root: Node,
}

impl Tree {
    /// Creates a tree with the given root.
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    /// Parses the given expression into a tree.
    pub fn parse(input: &str) -> Result<Self, Error> {
        Parser::new(input)?.build().map(Self::new)
    }

    /// Returns the root of the tree.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Returns a mutable reference to the root of the tree.
    pub fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }

    /// Consumes the tree, returning its root.
    pub fn into_root(self) -> Node {
        self.root
    }

    /// Binds every occurrence of the variable `name` to `value`.
    pub fn set_variable(&mut self, name: char, value: impl Into<LitNum>) {
        self.root.set_variable(name, &value.into());
    }

    /// Clears the value bound to every occurrence of the variable `name`.
    pub fn unset_variable(&mut self, name: char) {
        self.root.unset_variable(name);
    }

    /// Formats the tree in the given notation with the given options.
    pub fn fmt_with(&self, notation: Notation, options: FormatOptions) -> String {
        self.root.display(notation, options).to_string()
    }

    /// Formats the tree in infix notation, such as `3x + 2`.
    pub fn to_infix(&self) -> String {
        self.fmt_with(Notation::Infix, FormatOptions::default())
    }

    /// Formats the tree in prefix (Polish) notation, such as `+ * 3 x 2`.
    pub fn to_prefix(&self) -> String {
        self.fmt_with(Notation::Prefix, FormatOptions::default())
    }

    /// Formats the tree in postfix (reverse Polish) notation, such as `3 x * 2 +`.
    pub fn to_postfix(&self) -> String {
        self.fmt_with(Notation::Postfix, FormatOptions::default())
    }
}

impl From<Node> for Tree {
    fn from(root: Node) -> Self {
        Self::new(root)
    }
}

impl FromStr for Tree {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Formats the tree in infix notation.
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.root.fmt(f)
    }
}
