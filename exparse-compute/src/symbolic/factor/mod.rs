//! Structural factoring.
//!
//! Factoring looks for a sum, difference, product, or quotient whose two operands are built from
//! the same operator, and share a common operand. The common operand is pulled out, exposing the
//! structure of the expression:
//!
//! ```
//! use exparse_compute::symbolic::factor;
//! use exparse_parser::parse;
//!
//! let tree = parse("x*y + x*z").unwrap();
//! assert_eq!(factor(tree.root()), parse("x*(y + z)").unwrap().into_root());
//! ```
//!
//! Operands are compared structurally, so `2*x + 2*y` factors, but `(1+1)*x + 2*y` does not. A
//! bound variable only matches a variable with the same name bound to the same value.
//!
//! See [`rules`] for the patterns that are recognized.

pub mod rules;
pub mod step;

use exparse_parser::parser::ast::{Binary, Node, Unary};
use log::debug;
use crate::symbolic::step_collector::StepCollector;
use step::Step;

/// Applies the factoring rules to the binary expression, whose children must already be
/// factored.
fn factor_binary(binary: Binary, step_collector: &mut dyn StepCollector<Step>) -> Node {
    let Some(factored) = rules::all(&binary, step_collector) else {
        return binary.into();
    };
    debug!("factored into `{}`", factored);

    // the combined operands form a new expression that may factor again
    match factored {
        Node::Binary(outer) => Binary::new(
            factor_again(*outer.lhs, step_collector),
            outer.kind,
            factor_again(*outer.rhs, step_collector),
        ).into(),
        other => other,
    }
}

/// Re-applies the factoring rules to a node whose children are already factored.
fn factor_again(node: Node, step_collector: &mut dyn StepCollector<Step>) -> Node {
    match node {
        Node::Binary(binary) => factor_binary(binary, step_collector),
        other => other,
    }
}

/// Factors the given subtree, collecting the rules applied in `step_collector`.
///
/// Children are factored before their parents. A subtree that no rule applies to is returned
/// unchanged.
pub fn factor_with_steps(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Node {
    match node {
        Node::Number(_) | Node::Variable(_) => node.clone(),
        Node::Binary(binary) => {
            let lhs = factor_with_steps(&binary.lhs, step_collector);
            let rhs = factor_with_steps(&binary.rhs, step_collector);
            factor_binary(Binary::new(lhs, binary.kind, rhs), step_collector)
        },
        Node::Unary(unary) => {
            Unary::new(factor_with_steps(&unary.operand, step_collector), unary.kind).into()
        },
    }
}

/// Factors the given subtree.
pub fn factor(node: &Node) -> Node {
    factor_with_steps(node, &mut ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use exparse_parser::{parse, parser::token::op::BinOpKind};
    use pretty_assertions::assert_eq;

    /// Asserts that factoring `input` produces the same tree as parsing `expected`.
    fn assert_factors(input: &str, expected: &str) {
        let factored = factor(parse(input).unwrap().root());
        assert_eq!(factored, parse(expected).unwrap().into_root(), "{}", input);
    }

    /// Asserts that factoring `input` leaves it unchanged.
    fn assert_unchanged(input: &str) {
        assert_factors(input, input);
    }

    #[test]
    fn add_mul() {
        assert_factors("x*y+x*z", "x*(y+z)");
        assert_factors("x*y+z*x", "x*(y+z)");
        assert_factors("y*x+x*z", "(y+z)*x");
        assert_factors("y*x+z*x", "(y+z)*x");
    }

    #[test]
    fn sub_mul() {
        assert_factors("x*y-x*z", "x*(y-z)");
        assert_factors("x*y-z*x", "x*(y-z)");
        assert_factors("y*x-x*z", "(y-z)*x");
        assert_factors("y*x-z*x", "(y-z)*x");
    }

    #[test]
    fn add_div() {
        assert_factors("x/y+x/z", "x/(y+z)");
        assert_unchanged("x/y+z/x");
        assert_unchanged("y/x+x/z");
        assert_factors("y/x+z/x", "(y+z)/x");
    }

    #[test]
    fn sub_div() {
        assert_factors("x/y-x/z", "x/(y-z)");
        assert_unchanged("x/y-z/x");
        assert_unchanged("y/x-x/z");
        assert_factors("y/x-z/x", "(y-z)/x");
    }

    #[test]
    fn add_sub_exp() {
        for input in [
            "x^y+x^z", "x^y+z^x", "y^x+x^z", "y^x+z^x",
            "x^y-x^z", "x^y-z^x", "y^x-x^z", "y^x-z^x",
        ] {
            assert_unchanged(input);
        }
    }

    #[test]
    fn mul_exp() {
        assert_factors("x^y*x^z", "x^(y+z)");
        assert_unchanged("x^y*z^x");
        assert_unchanged("y^x*x^z");
        assert_factors("y^x*z^x", "(y*z)^x");
    }

    #[test]
    fn div_exp() {
        assert_factors("x^y/x^z", "x^(y-z)");
        assert_unchanged("x^y/z^x");
        assert_unchanged("y^x/x^z");
        assert_factors("y^x/z^x", "(y/z)^x");
    }

    #[test]
    fn no_common_factor() {
        assert_unchanged("x*y+z*w");
        assert_unchanged("x+y");
        assert_unchanged("x*y+z");
        assert_unchanged("3!");
    }

    #[test]
    fn bound_variables_differ() {
        let mut tree = parse("x*y+x*z").unwrap();
        tree.set_variable('x', 1);
        let mut expected = parse("x*(y+z)").unwrap();
        expected.set_variable('x', 1);
        assert_eq!(factor(tree.root()), expected.into_root());

        // `x` is bound to different values in each product
        let mut rhs = parse("x*z").unwrap();
        rhs.set_variable('x', 2);
        let mixed = Node::from(Binary::new(
            parse("x*y").unwrap().into_root(),
            BinOpKind::Add,
            rhs.into_root(),
        ));
        assert_eq!(factor(&mixed), mixed);
    }

    #[test]
    fn nested() {
        // children are factored before their parent
        assert_factors("(x*y+x*z)!", "(x*(y+z))!");
        assert_factors("a*(x*y+x*z)+a*w", "a*(x*(y+z)+w)");
    }

    #[test]
    fn factors_combined_operands() {
        // `a(bc) + a(bd)` pulls out `a`, then `b` from what remains
        assert_factors("a*(b*c)+a*(b*d)", "a*(b*(c+d))");
    }

    #[test]
    fn idempotent() {
        for input in [
            "x*y+x*z",
            "a*(b*c)+a*(b*d)",
            "x^y*x^z",
            "y/x-z/x",
            "x*y+z*w",
        ] {
            let once = factor(parse(input).unwrap().root());
            assert_eq!(factor(&once), once, "{}", input);
        }
    }

    #[test]
    fn steps() {
        let tree = parse("a*(b*c)+a*(b*d)").unwrap();
        let mut steps = Vec::new();
        factor_with_steps(tree.root(), &mut steps);
        assert_eq!(steps, vec![Step::CommonFactor, Step::CommonFactor]);

        let tree = parse("x^y/x^z").unwrap();
        let mut steps = Vec::new();
        factor_with_steps(tree.root(), &mut steps);
        assert_eq!(steps, vec![Step::SubtractExponents]);
    }
}
