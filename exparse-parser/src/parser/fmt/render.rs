use crate::parser::{
    ast::{binary::Binary, node::Node},
    fmt::{Chains, FormatOptions, Grouping, Notation},
    token::op::BinOpKind,
};

/// The side of a binary operator a child is written on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Wraps the rendered child in parentheses if `group` is true.
fn group_if(rendered: String, group: bool) -> String {
    if group {
        format!("({})", rendered)
    } else {
        rendered
    }
}

/// Returns true if a child written on the given side of an infix `parent` must be grouped.
///
/// A child whose operator binds looser than its parent's is always grouped. A child of equal
/// weight is grouped when reading it back without parentheses would regroup it: the right side of
/// `-` and `/`, and the left side of `^`.
fn needs_infix_group(parent: BinOpKind, child: &Node, side: Side) -> bool {
    let (parent_weight, child_weight) = (parent.weight(), child.weight());
    if parent_weight != child_weight {
        return parent_weight > child_weight;
    }

    match side {
        Side::Left => parent == BinOpKind::Exp,
        Side::Right => !parent.nests_right(),
    }
}

/// Returns true if a product can be written by placing its operands next to each other, like
/// `3x`, without changing how it reads back.
fn can_juxtapose(binary: &Binary, lhs: &str, rhs: &str) -> bool {
    let has_variable = matches!(*binary.lhs, Node::Variable(_))
        || matches!(*binary.rhs, Node::Variable(_));

    // `3!x` does not read back as a product, and `x-2` reads back as subtraction
    has_variable && !lhs.ends_with('!') && !rhs.starts_with('-')
}

/// Renders the node in infix notation.
pub(super) fn infix(node: &Node, options: FormatOptions) -> String {
    match node {
        Node::Number(num) => num.text.clone(),
        Node::Variable(var) => var.name.to_string(),
        Node::Unary(unary) => {
            let operand = infix(&unary.operand, options);
            let operand = group_if(operand, unary.weight() > unary.operand.weight());
            format!("{}{}", operand, unary.kind)
        },
        Node::Binary(binary) => {
            let lhs = group_if(
                infix(&binary.lhs, options),
                needs_infix_group(binary.kind, &binary.lhs, Side::Left),
            );
            let rhs = group_if(
                infix(&binary.rhs, options),
                needs_infix_group(binary.kind, &binary.rhs, Side::Right),
            );

            if binary.kind == BinOpKind::Mul
                && options.implicit_mul
                && can_juxtapose(binary, &lhs, &rhs)
            {
                format!("{}{}", lhs, rhs)
            } else {
                format!("{} {} {}", lhs, binary.kind, rhs)
            }
        },
    }
}

/// Renders a child of an operator of the given weight and kind in prefix or postfix notation.
fn polish_child(
    parent_weight: u8,
    parent_kind: Option<BinOpKind>,
    child: &Node,
    notation: Notation,
    options: FormatOptions,
) -> String {
    let elide = options.chains == Chains::Elide
        && matches!(child, Node::Binary(binary) if Some(binary.kind) == parent_kind);
    let rendered = polish(child, notation, options, elide);

    group_if(
        rendered,
        options.grouping == Grouping::Precedence && parent_weight > child.weight(),
    )
}

/// Joins an operator symbol and its rendered operands in prefix or postfix order.
fn join(notation: Notation, symbol: &str, operands: &[String]) -> String {
    let operands = operands.join(" ");
    match notation {
        Notation::Prefix => format!("{} {}", symbol, operands),
        _ => format!("{} {}", operands, symbol),
    }
}

/// Renders the node in prefix or postfix notation. If `elide_symbol` is true and the node is a
/// binary expression, its own operator is left out.
pub(super) fn polish(
    node: &Node,
    notation: Notation,
    options: FormatOptions,
    elide_symbol: bool,
) -> String {
    match node {
        Node::Number(num) => num.text.clone(),
        Node::Variable(var) => var.name.to_string(),
        Node::Unary(unary) => {
            let operand = polish_child(unary.weight(), None, &unary.operand, notation, options);
            join(notation, unary.kind.symbol(), &[operand])
        },
        Node::Binary(binary) => {
            let operands = [&binary.lhs, &binary.rhs]
                .map(|child| polish_child(binary.weight(), Some(binary.kind), child, notation, options));

            if elide_symbol {
                operands.join(" ")
            } else {
                join(notation, binary.kind.symbol(), &operands)
            }
        },
    }
}
