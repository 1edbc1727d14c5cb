//! Tokenizer, tree builder, and notation printers for arithmetic expressions.
//!
//! An expression is made of numbers, single-character variables, the binary operators `+`, `-`,
//! `*`, `/`, and `^`, the postfix factorial operator `!`, and parentheses. Multiplication can be
//! written by placing operands next to each other, as in `3x`, `xy`, or `(1 + 2)(3 + 4)`.
//!
//! # Parsing
//!
//! Use [`parse`] (or [`Tree::parse`], or [`str::parse`]) to build a [`Tree`] from a string:
//!
//! ```
//! use exparse_parser::{parse, parser::ast::{Binary, LitNum, LitVar, Node}};
//! use exparse_parser::parser::token::op::BinOpKind;
//!
//! let tree = parse("3x").unwrap();
//! assert_eq!(
//!     tree.root(),
//!     &Node::Binary(Binary::new(
//!         LitNum::new("3").into(),
//!         BinOpKind::Mul,
//!         LitVar::new('x').into(),
//!     )),
//! );
//! ```
//!
//! Parsing happens in two stages. The [`tokenizer`] splits the input into tokens, checks that
//! parentheses balance, recognizes negative numbers, and makes implicit multiplication explicit.
//! The [`parser`] then builds the tree in a single pass, placing each operator by comparing its
//! weight against the operators already placed. Operators of higher weight bind tighter:
//!
//! | operator   | weight |
//! | ---------- | ------ |
//! | `+`, `-`   | 1      |
//! | `*`, `/`   | 2      |
//! | `^`        | 3      |
//! | `!`        | 4      |
//!
//! Errors are reported as [`exparse_error::Error`]s, which can be rendered with
//! [`ariadne`] to point at the offending part of the input.
//!
//! # Printing
//!
//! A tree can be printed in infix, prefix (Polish), or postfix (reverse Polish) notation:
//!
//! ```
//! use exparse_parser::parse;
//!
//! let tree = parse("(3+4)*(5+6)").unwrap();
//! assert_eq!(tree.to_infix(), "(3 + 4) * (5 + 6)");
//! assert_eq!(tree.to_prefix(), "* + 3 4 + 5 6");
//! assert_eq!(tree.to_postfix(), "3 4 + 5 6 + *");
//! ```
//!
//! Use [`Tree::fmt_with`] and [`FormatOptions`] to change how the output is grouped.
//!
//! # Variables
//!
//! Variables are unbound when parsed. Binding a variable updates every occurrence of it:
//!
//! ```
//! use exparse_parser::parse;
//!
//! let mut tree = parse("x + 1 + x").unwrap();
//! tree.set_variable('x', 1);
//! ```
//!
//! Evaluating, simplifying, and factoring trees is provided by the `exparse-compute` crate.
//!
//! [`FormatOptions`]: parser::fmt::FormatOptions

pub mod parser;
pub mod tokenizer;

pub use parser::{ast::Tree, parse};
