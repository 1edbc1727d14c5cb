pub mod ast;
pub mod error;
pub mod fmt;
pub mod token;

use ast::{Binary, LitNum, LitVar, Node, Tree, Unary};
use error::{kind, Error};
use log::trace;
use std::{mem, ops::Range};
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use token::op::{BinOpKind, UnaryOpKind};

/// A binary operator on the right spine of a [`Frame`], waiting for its right-hand side.
#[derive(Debug)]
struct Pending {
    /// The left-hand side of the operator.
    lhs: Node,

    /// The kind of operator.
    kind: BinOpKind,

    /// The region of the source code that the operator was parsed from.
    span: Range<usize>,
}

impl Pending {
    /// Completes the operator with the given right-hand side.
    fn complete(self, rhs: Node) -> Node {
        Binary::new(self.lhs, self.kind, rhs).into()
    }
}

/// The state of the tree under construction at one depth of parentheses.
///
/// The tree is held as its right spine: the operators from the root of the frame down to the most
/// recently placed operator, each missing only its right-hand side. The right-hand side of the
/// bottom operator is `operand`, once it has been read.
#[derive(Debug, Default)]
struct Frame {
    /// The right spine, root first.
    spine: Vec<Pending>,

    /// The most recently read operand, not yet attached to an operator.
    operand: Option<Node>,

    /// The region of the opening parenthesis that started this frame, if any.
    open: Option<Range<usize>>,
}

impl Frame {
    /// Creates a frame for a group opened by the parenthesis at the given region.
    fn opened_at(span: Range<usize>) -> Self {
        Self {
            open: Some(span),
            ..Self::default()
        }
    }

    /// Reads an operand.
    fn push_operand(&mut self, node: Node, span: Range<usize>) -> Result<(), Error> {
        if self.operand.is_some() {
            return Err(Error::new(vec![span], kind::UnexpectedOperand));
        }

        self.operand = Some(node);
        Ok(())
    }

    /// Places a binary operator, taking the most recent operand as its left-hand side.
    ///
    /// An operator that binds tighter than the bottom of the spine is spliced below it. Otherwise,
    /// the operator climbs the spine past every operator that binds at least as tightly, which are
    /// completed and become its left-hand side.
    fn push_binary(&mut self, kind: BinOpKind, span: Range<usize>) -> Result<(), Error> {
        let Some(mut lhs) = self.operand.take() else {
            return Err(Error::new(vec![span], kind::MissingOperand));
        };

        let prev_kind = self.spine.last().map(|prev| prev.kind);
        match prev_kind {
            Some(prev) if kind.weight() > prev.weight()
                || (kind.weight() == prev.weight() && prev.nests_right()) => {
                trace!("splicing `{}` below `{}`", kind, prev);
            },
            _ => {
                let keep = self.spine
                    .iter()
                    .rposition(|prev| prev.kind.weight() < kind.weight())
                    .map_or(0, |idx| idx + 1);
                trace!("`{}` climbs past {} operator(s)", kind, self.spine.len() - keep);

                for prev in self.spine.drain(keep..).rev() {
                    lhs = prev.complete(lhs);
                }
            },
        }

        self.spine.push(Pending { lhs, kind, span });
        Ok(())
    }

    /// Places a unary operator around the most recent operand.
    fn push_unary(&mut self, kind: UnaryOpKind, span: Range<usize>) -> Result<(), Error> {
        let Some(operand) = self.operand.take() else {
            return Err(Error::new(vec![span], kind::MissingOperand));
        };

        self.operand = Some(Unary::new(operand, kind).into());
        Ok(())
    }

    /// Completes every operator on the spine, returning the root of the frame. `span` is reported
    /// if the frame is empty.
    fn finish(mut self, span: Range<usize>) -> Result<Node, Error> {
        let Some(operand) = self.operand.take() else {
            return Err(match self.spine.pop() {
                Some(prev) => Error::new(vec![prev.span], kind::MissingOperand),
                None => Error::new(vec![span], kind::EmptyExpression),
            });
        };

        Ok(self.spine
            .into_iter()
            .rev()
            .fold(operand, |rhs, prev| prev.complete(rhs)))
    }
}

/// Builds an expression tree from the tokens of an expression in a single left-to-right pass.
///
/// There is no grammar and no lookahead: each token is placed by comparing the weight of its
/// operator against the operators already placed. Parenthesized groups suspend the current
/// [`Frame`] and build the group in a fresh one, which becomes a single operand of the suspended
/// frame once it is closed.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens to build the tree from.
    tokens: Vec<Token<'source>>,

    /// The length of the source code.
    source_len: usize,
}

impl<'source> Parser<'source> {
    /// Tokenizes the given source, ready to build.
    pub fn new(source: &'source str) -> Result<Self, Error> {
        Ok(Self {
            tokens: tokenize_complete(source)?,
            source_len: source.len(),
        })
    }

    /// Builds the tree, returning its root.
    pub fn build(self) -> Result<Node, Error> {
        let mut suspended: Vec<Frame> = Vec::new();
        let mut frame = Frame::default();

        for token in self.tokens {
            match token.kind {
                TokenKind::Number => {
                    frame.push_operand(LitNum::new(token.text()).into(), token.span)?;
                },
                TokenKind::Variable => {
                    let Some(name) = token.lexeme.chars().next() else {
                        return Err(Error::new(vec![token.span], kind::UnknownOperator {
                            symbol: token.lexeme.to_string(),
                        }));
                    };
                    frame.push_operand(LitVar::new(name).into(), token.span)?;
                },
                TokenKind::OpenParen => {
                    if frame.operand.is_some() {
                        return Err(Error::new(vec![token.span], kind::UnexpectedOperand));
                    }

                    trace!("suspending at depth {}", suspended.len());
                    suspended.push(mem::replace(&mut frame, Frame::opened_at(token.span)));
                },
                TokenKind::CloseParen => {
                    let Some(outer) = suspended.pop() else {
                        return Err(Error::new(
                            vec![token.span],
                            kind::UnmatchedParenthesis { unclosed: false },
                        ));
                    };

                    let group_start = frame.open.as_ref().map_or(token.span.start, |open| open.start);
                    let group = mem::replace(&mut frame, outer).finish(group_start..token.span.end)?;
                    trace!("resuming at depth {}", suspended.len());
                    frame.push_operand(group, token.span)?;
                },
                other => {
                    if let Some(kind) = BinOpKind::from_token(other) {
                        frame.push_binary(kind, token.span)?;
                    } else if let Some(kind) = UnaryOpKind::from_token(other) {
                        frame.push_unary(kind, token.span)?;
                    } else {
                        return Err(Error::new(vec![token.span], kind::UnknownOperator {
                            symbol: token.lexeme.to_string(),
                        }));
                    }
                },
            }
        }

        if !suspended.is_empty() {
            let span = frame.open.unwrap_or(0..self.source_len);
            return Err(Error::new(vec![span], kind::UnmatchedParenthesis { unclosed: true }));
        }

        frame.finish(0..self.source_len)
    }
}

/// Parses the given expression into a tree.
pub fn parse(input: &str) -> Result<Tree, Error> {
    Tree::parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use exparse_error::ErrorCategory;
    use pretty_assertions::assert_eq;

    fn num(text: &str) -> Node {
        LitNum::new(text).into()
    }

    fn var(name: char) -> Node {
        LitVar::new(name).into()
    }

    fn bin(lhs: Node, kind: BinOpKind, rhs: Node) -> Node {
        Binary::new(lhs, kind, rhs).into()
    }

    fn fact(operand: Node) -> Node {
        Unary::new(operand, UnaryOpKind::Factorial).into()
    }

    fn root(input: &str) -> Node {
        parse(input).unwrap().into_root()
    }

    #[test]
    fn single_number() {
        assert_eq!(root("42"), num("42"));
        assert_eq!(root("-4"), num("-4"));
        assert_eq!(root("(((7)))"), num("7"));
    }

    #[test]
    fn implicit_mul() {
        assert_eq!(root("3x"), bin(num("3"), BinOpKind::Mul, var('x')));
        assert_eq!(
            root("(1+1)(1+1)"),
            bin(
                bin(num("1"), BinOpKind::Add, num("1")),
                BinOpKind::Mul,
                bin(num("1"), BinOpKind::Add, num("1")),
            ),
        );
    }

    #[test]
    fn equal_weight_chains() {
        assert_eq!(
            root("1+1+1"),
            bin(num("1"), BinOpKind::Add, bin(num("1"), BinOpKind::Add, num("1"))),
        );
        assert_eq!(
            root("1-2-3"),
            bin(bin(num("1"), BinOpKind::Sub, num("2")), BinOpKind::Sub, num("3")),
        );
        assert_eq!(
            root("8/4/2"),
            bin(bin(num("8"), BinOpKind::Div, num("4")), BinOpKind::Div, num("2")),
        );
        assert_eq!(
            root("2^3^2"),
            bin(num("2"), BinOpKind::Exp, bin(num("3"), BinOpKind::Exp, num("2"))),
        );
    }

    #[test]
    fn tighter_operator_splices() {
        assert_eq!(
            root("3+4*5"),
            bin(num("3"), BinOpKind::Add, bin(num("4"), BinOpKind::Mul, num("5"))),
        );
    }

    #[test]
    fn looser_operator_reroots() {
        assert_eq!(
            root("4*5+3"),
            bin(bin(num("4"), BinOpKind::Mul, num("5")), BinOpKind::Add, num("3")),
        );
    }

    #[test]
    fn climbs_only_as_far_as_needed() {
        assert_eq!(
            root("1+2^3*4"),
            bin(
                num("1"),
                BinOpKind::Add,
                bin(bin(num("2"), BinOpKind::Exp, num("3")), BinOpKind::Mul, num("4")),
            ),
        );
    }

    #[test]
    fn group_captured_by_tighter_operator() {
        assert_eq!(
            root("1+2*(3+4)^2"),
            bin(
                num("1"),
                BinOpKind::Add,
                bin(
                    num("2"),
                    BinOpKind::Mul,
                    bin(bin(num("3"), BinOpKind::Add, num("4")), BinOpKind::Exp, num("2")),
                ),
            ),
        );
    }

    #[test]
    fn redundant_parens_ignored() {
        assert_eq!(parse("2*4+5").unwrap(), parse("(2*4)+5").unwrap());
        assert_eq!(parse("1+2*3").unwrap(), parse("1+(2*3)").unwrap());
    }

    #[test]
    fn factorial() {
        assert_eq!(root("3!"), fact(num("3")));
        assert_eq!(root("(4+1)!"), fact(bin(num("4"), BinOpKind::Add, num("1"))));
        assert_eq!(root("2^3!"), bin(num("2"), BinOpKind::Exp, fact(num("3"))));
        assert_eq!(root("3!!"), fact(fact(num("3"))));
        assert_eq!(root("-1!"), fact(num("-1")));
    }

    #[test]
    fn tokenize_errors() {
        for input in ["1+(2+3", "1+(2+3))", ")("] {
            let err = parse(input).unwrap_err();
            assert_eq!(err.category(), ErrorCategory::Tokenize, "{}", input);
        }
    }

    #[test]
    fn empty_expression() {
        let err = parse("").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Parse);
        assert!(err.is::<kind::EmptyExpression>());

        let err = parse("1+()").unwrap_err();
        assert!(err.is::<kind::EmptyExpression>());
        assert_eq!(err.spans, vec![2..4]);
    }

    #[test]
    fn missing_operand() {
        for input in ["1+", "*2", "(+)", "1++2", "!3", "-x"] {
            let err = parse(input).unwrap_err();
            assert_eq!(err.category(), ErrorCategory::Parse, "{}", input);
            assert!(err.is::<kind::MissingOperand>(), "{}", input);
        }
    }

    #[test]
    fn unexpected_operand() {
        let err = parse("3!4").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Parse);
        assert!(err.is::<kind::UnexpectedOperand>());
        assert_eq!(err.spans, vec![2..3]);
    }
}
