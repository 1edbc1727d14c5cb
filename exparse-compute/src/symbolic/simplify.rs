//! Constant folding.
//!
//! Simplification works bottom-up. A subtree whose operands are all number literals is replaced
//! with the number it evaluates to, while a subtree that references an unbound variable is kept,
//! with its children replaced by their simplified forms. For example, `(6/3)x + 2` simplifies to
//! `2x + 2`.
//!
//! Subtrees that evaluate to a complex number, an infinity, or NaN are kept as they are, since
//! those values have no number literal that parses back to them.

use exparse_parser::parser::ast::{Binary, LitNum, Node, Unary};
use log::debug;
use crate::numerical::{eval::Eval, value::Value};

/// Returns true if every operand of the node is a number literal.
fn has_literal_operands(node: &Node) -> bool {
    match node {
        Node::Binary(binary) => {
            matches!(*binary.lhs, Node::Number(_)) && matches!(*binary.rhs, Node::Number(_))
        },
        Node::Unary(unary) => matches!(*unary.operand, Node::Number(_)),
        Node::Number(_) | Node::Variable(_) => false,
    }
}

/// Replaces the node with the literal it evaluates to, if its operands are already literals and
/// it evaluates to a real number.
fn fold(node: Node) -> Node {
    if !has_literal_operands(&node) {
        return node;
    }

    match node.eval() {
        Ok(Value::Real(value)) if value.is_finite() => {
            debug!("folding `{}` into `{}`", node, value);
            LitNum::from(value).into()
        },
        Ok(Value::Real(value)) => {
            debug!("not folding `{}`: its value `{}` has no literal form", node, value);
            node
        },
        Ok(Value::Complex(value)) => {
            debug!("not folding `{}`: its value `{}` is complex", node, value);
            node
        },
        Err(err) => {
            debug!("not folding `{}`: {}", node, err);
            node
        },
    }
}

/// Simplifies the given subtree by folding every part of it that does not depend on an unbound
/// variable into a number literal.
///
/// Bound variables are replaced by the literal they are bound to.
pub fn simplify(node: &Node) -> Node {
    match node {
        Node::Number(_) => node.clone(),
        Node::Variable(var) => match &var.value {
            Some(value) => value.clone().into(),
            None => node.clone(),
        },
        Node::Binary(binary) => fold(Binary::new(
            simplify(&binary.lhs),
            binary.kind,
            simplify(&binary.rhs),
        ).into()),
        Node::Unary(unary) => fold(Unary::new(simplify(&unary.operand), unary.kind).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exparse_parser::parse;
    use pretty_assertions::assert_eq;

    fn simplified(input: &str) -> Node {
        simplify(parse(input).unwrap().root())
    }

    #[test]
    fn literal_is_unchanged() {
        assert_eq!(simplified("4"), LitNum::new("4").into());
    }

    #[test]
    fn fold_whole_tree() {
        assert_eq!(simplified("4 + 1"), LitNum::new("5").into());
        assert_eq!(simplified("2*(1+3)"), LitNum::new("8").into());
        assert_eq!(simplified("3!"), LitNum::new("6").into());
        assert_eq!(simplified("1/4"), LitNum::new("0.25").into());
    }

    #[test]
    fn partial_fold() {
        assert_eq!(simplified("(6/3)*x+2"), parse("2*x+2").unwrap().into_root());
        assert_eq!(simplified("x*(2+3)"), parse("x*5").unwrap().into_root());
    }

    #[test]
    fn unbound_variable_kept() {
        assert_eq!(simplified("x"), parse("x").unwrap().into_root());
        assert_eq!(simplified("x + y"), parse("x + y").unwrap().into_root());
    }

    #[test]
    fn bound_variable_folds() {
        let mut tree = parse("x").unwrap();
        tree.set_variable('x', 5);
        assert_eq!(simplify(tree.root()), LitNum::new("5").into());

        let mut tree = parse("x*y+1").unwrap();
        tree.set_variable('x', 2);
        assert_eq!(simplify(tree.root()), parse("2*y+1").unwrap().into_root());
    }

    #[test]
    fn invalid_subtree_kept() {
        assert_eq!(simplified("(0-1)!+x"), parse("(-1)!+x").unwrap().into_root());
        assert_eq!(simplified("-4^0.5"), parse("-4^0.5").unwrap().into_root());
        assert_eq!(simplified("1/0+x"), parse("1/0+x").unwrap().into_root());
        assert_eq!(simplified("(0/0)*2"), parse("(0/0)*2").unwrap().into_root());
    }

    #[test]
    fn idempotent() {
        for input in ["(6/3)*x+2", "x^(1+1)*(2+y)", "1+2*3", "(0-1)!"] {
            let once = simplified(input);
            assert_eq!(simplify(&once), once, "{}", input);
        }
    }
}
