//! Implementation of the factoring rules.
//!
//! Each rule takes a binary expression whose children have already been factored, and returns
//! `Some(node)` with the factored expression if the rule applies, or `None` if it does not.
//!
//! Every rule looks for a grandchild that is shared between the two children of the expression,
//! called the common factor. The children must be binary expressions of the same kind, binding
//! exactly one level tighter than the expression itself.

use exparse_parser::parser::{ast::{Binary, Node}, token::op::BinOpKind};
use crate::symbolic::step_collector::StepCollector;
use super::step::Step;

/// The side of a child expression that the common factor was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// A grandchild shared between the two children of an expression.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Common<'a> {
    /// The shared grandchild.
    pub factor: &'a Node,

    /// The remaining operand of the left child.
    pub left: &'a Node,

    /// The remaining operand of the right child.
    pub right: &'a Node,

    /// The side the common factor was found on in the left child.
    pub left_side: Side,

    /// The side the common factor was found on in the right child.
    pub right_side: Side,
}

impl Common<'_> {
    /// Returns the side the common factor is on, if it is on the same side in both children.
    pub fn same_side(&self) -> Option<Side> {
        (self.left_side == self.right_side).then_some(self.left_side)
    }
}

/// If both children of the expression are binary expressions of the kind `child`, one weight
/// above the expression, finds the first common factor between them, checking the pairs
/// `LL = RL`, `LL = RR`, `LR = RL`, `LR = RR` in order.
pub(crate) fn find_common(binary: &Binary, child: BinOpKind) -> Option<Common> {
    let (Node::Binary(lhs), Node::Binary(rhs)) = (&*binary.lhs, &*binary.rhs) else {
        return None;
    };

    if lhs.kind != child || rhs.kind != child || child.weight() != binary.weight() + 1 {
        return None;
    }

    let (ll, lr, rl, rr) = (&*lhs.lhs, &*lhs.rhs, &*rhs.lhs, &*rhs.rhs);
    let (factor, left, right, left_side, right_side) = if ll == rl {
        (ll, lr, rr, Side::Left, Side::Left)
    } else if ll == rr {
        (ll, lr, rl, Side::Left, Side::Right)
    } else if lr == rl {
        (lr, ll, rr, Side::Right, Side::Left)
    } else if lr == rr {
        (lr, ll, rl, Side::Right, Side::Right)
    } else {
        return None;
    };

    Some(Common { factor, left, right, left_side, right_side })
}

/// Places the common factor on the given side of `inner`, joined by `outer`.
fn attach(outer: BinOpKind, factor: &Node, side: Side, inner: Node) -> Node {
    match side {
        Side::Left => Binary::new(factor.clone(), outer, inner).into(),
        Side::Right => Binary::new(inner, outer, factor.clone()).into(),
    }
}

/// Combines the remaining operands of both children with the given operator.
fn combine(kind: BinOpKind, common: &Common) -> Node {
    Binary::new(common.left.clone(), kind, common.right.clone()).into()
}

/// `ab + ac = a(b + c)`
/// `ab + ca = a(b + c)`
/// `ba + ac = (b + c)a`
/// `ba + ca = (b + c)a`
///
/// Also applies to subtraction. Since multiplication is commutative, the common factor may be on
/// either side of each product.
pub fn common_factor(binary: &Binary, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let common = find_common(binary, BinOpKind::Mul)?;

    step_collector.push(Step::CommonFactor);
    Some(attach(BinOpKind::Mul, common.factor, common.left_side, combine(binary.kind, &common)))
}

/// `a/b + a/c = a/(b + c)`
/// `b/a + c/a = (b + c)/a`
///
/// Also applies to subtraction. The common factor must be on the same side of both quotients.
pub fn common_division(binary: &Binary, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let common = find_common(binary, BinOpKind::Div)?;
    let side = common.same_side()?;

    step_collector.push(Step::CommonDivision);
    Some(attach(BinOpKind::Div, common.factor, side, combine(binary.kind, &common)))
}

/// `a^b * a^c = a^(b + c)`
/// `a^b / a^c = a^(b - c)`
pub fn common_base(binary: &Binary, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let common = find_common(binary, BinOpKind::Exp)?;
    if common.same_side()? != Side::Left {
        return None;
    }

    let (exponents, step) = match binary.kind {
        BinOpKind::Mul => (BinOpKind::Add, Step::AddExponents),
        BinOpKind::Div => (BinOpKind::Sub, Step::SubtractExponents),
        _ => return None,
    };

    step_collector.push(step);
    Some(attach(BinOpKind::Exp, common.factor, Side::Left, combine(exponents, &common)))
}

/// `b^a * c^a = (bc)^a`
/// `b^a / c^a = (b/c)^a`
pub fn common_exponent(binary: &Binary, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let common = find_common(binary, BinOpKind::Exp)?;
    if common.same_side()? != Side::Right {
        return None;
    }

    step_collector.push(Step::CommonExponent);
    Some(attach(BinOpKind::Exp, common.factor, Side::Right, combine(binary.kind, &common)))
}

/// Applies the first rule that matches.
pub fn all(binary: &Binary, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    common_factor(binary, step_collector)
        .or_else(|| common_division(binary, step_collector))
        .or_else(|| common_base(binary, step_collector))
        .or_else(|| common_exponent(binary, step_collector))
}
