//! Structural manipulation of expression trees.
//!
//! # Simplification
//!
//! [`simplify()`] folds every part of an expression that does not depend on an unbound variable
//! into a single number, leaving the rest of the tree intact:
//!
//! ```
//! use exparse_compute::symbolic::Symbolic;
//! use exparse_parser::parse;
//!
//! let mut tree = parse("(6/3)*x + 2").unwrap();
//! assert!(!tree.simplify());
//! assert_eq!(tree, parse("2*x + 2").unwrap());
//!
//! tree.set_variable('x', 4);
//! assert!(tree.simplify());
//! assert_eq!(tree.to_infix(), "10");
//! ```
//!
//! # Factoring
//!
//! [`factor()`] pulls a common operand out of a sum, difference, product, or quotient. See the
//! [`mod@factor`] module for more information.
//!
//! ```
//! use exparse_compute::symbolic::Symbolic;
//! use exparse_parser::parse;
//!
//! let tree = parse("x*y + x*z").unwrap();
//! assert_eq!(tree.factor(), parse("x*(y + z)").unwrap());
//! ```

pub mod factor;
pub mod simplify;
pub mod step_collector;

use crate::numerical::{eval::Eval, value::Value};
use exparse_parser::parser::ast::{Node, Tree};
use step_collector::StepCollector;

pub use factor::{factor, factor_with_steps, step::Step};
pub use simplify::simplify;

/// Symbolic operations on a complete expression tree.
pub trait Symbolic {
    /// Simplifies the tree in place, folding every part of it that does not depend on an unbound
    /// variable.
    ///
    /// Returns true if the whole tree folded into a single number. Otherwise, the partially
    /// folded tree is kept, and false is returned.
    fn simplify(&mut self) -> bool;

    /// Returns a factored copy of the tree.
    fn factor(&self) -> Self;

    /// Returns a factored copy of the tree, collecting the rules applied in `step_collector`.
    fn factor_with_steps(&self, step_collector: &mut dyn StepCollector<Step>) -> Self;
}

impl Symbolic for Tree {
    fn simplify(&mut self) -> bool {
        let simplified = simplify(self.root());
        let folded = matches!(simplified, Node::Number(_))
            && matches!(simplified.eval(), Ok(Value::Real(_)));
        *self.root_mut() = simplified;
        folded
    }

    fn factor(&self) -> Self {
        Tree::new(factor(self.root()))
    }

    fn factor_with_steps(&self, step_collector: &mut dyn StepCollector<Step>) -> Self {
        Tree::new(factor_with_steps(self.root(), step_collector))
    }
}
