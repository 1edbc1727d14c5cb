use logos::Logos;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenKind {
    #[regex(r"\s+")]
    Whitespace,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("^")]
    Exp,

    #[token("!")]
    Factorial,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    /// A run of digits and decimal points. Whether the run is a valid number is only checked when
    /// the number is evaluated.
    #[regex(r"[0-9.]+")]
    Number,

    /// Any other single character names a variable.
    #[regex(r".", priority = 0)]
    Variable,
}

impl TokenKind {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }

    /// Returns true if the token is one of the binary operators.
    pub fn is_binary_op(self) -> bool {
        matches!(
            self,
            TokenKind::Add | TokenKind::Sub | TokenKind::Mul | TokenKind::Div | TokenKind::Exp
        )
    }

    /// Returns true if the token can end an operand, meaning a following operand would be
    /// multiplied with it.
    pub fn ends_operand(self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::Variable | TokenKind::CloseParen)
    }

    /// Returns true if the token can begin an operand.
    pub fn begins_operand(self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::Variable | TokenKind::OpenParen)
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    ///
    /// A number may be made of several runs of digits that were separated by whitespace in the
    /// source, in which case the lexeme includes that whitespace. Use [`Token::text`] to get the
    /// lexeme without it.
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }

    /// Returns the lexeme with any whitespace removed.
    pub fn text(&self) -> String {
        self.lexeme.chars().filter(|c| !c.is_whitespace()).collect()
    }
}
