mod binary;
mod literal;
mod unary;

use exparse_parser::parser::ast::{node::Node, tree::Tree};
use super::{error::Error, value::Value};

/// Any type that can be evaluated to produce a value.
///
/// Evaluation never modifies the expression. Variables evaluate to the value bound to them, and
/// the first error encountered anywhere in the expression is returned.
pub trait Eval {
    /// Evaluate the expression to produce a value.
    fn eval(&self) -> Result<Value, Error>;
}

impl Eval for Node {
    fn eval(&self) -> Result<Value, Error> {
        match self {
            Node::Number(num) => num.eval(),
            Node::Variable(var) => var.eval(),
            Node::Binary(binary) => binary.eval(),
            Node::Unary(unary) => unary.eval(),
        }
    }
}

impl Eval for Tree {
    fn eval(&self) -> Result<Value, Error> {
        self.root().eval()
    }
}
