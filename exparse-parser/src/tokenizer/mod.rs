pub mod token;

use crate::parser::error::{kind, Error};
use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Lexes the input, dropping whitespace.
fn lex(input: &str) -> Result<Vec<Token>, Error> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let lexeme = lexer.slice();
        let Ok(kind) = result else {
            return Err(Error::new(vec![span], kind::UnknownOperator {
                symbol: lexeme.to_string(),
            }));
        };

        if !kind.is_whitespace() {
            tokens.push(Token { span, kind, lexeme });
        }
    }

    Ok(tokens)
}

/// Joins numbers that were separated only by whitespace into a single number, so that `1 2` reads
/// the same as `12`.
fn join_numbers<'source>(input: &'source str, tokens: Vec<Token<'source>>) -> Vec<Token<'source>> {
    let mut joined: Vec<Token<'source>> = Vec::with_capacity(tokens.len());

    for token in tokens {
        match joined.last_mut() {
            Some(last) if last.kind == TokenKind::Number && token.kind == TokenKind::Number => {
                last.span.end = token.span.end;
                last.lexeme = &input[last.span.clone()];
            },
            _ => joined.push(token),
        }
    }

    joined
}

/// Merges a `-` into the number that follows it when the `-` cannot be subtraction: at the start
/// of the input, after an opening parenthesis, or after another binary operator.
fn merge_signs<'source>(input: &'source str, tokens: Vec<Token<'source>>) -> Vec<Token<'source>> {
    let mut merged: Vec<Token<'source>> = Vec::with_capacity(tokens.len());
    let mut iter = tokens.into_iter().peekable();

    while let Some(token) = iter.next() {
        let is_sign_position = token.kind == TokenKind::Sub
            && merged.last().map_or(true, |prev| {
                prev.kind == TokenKind::OpenParen || prev.kind.is_binary_op()
            });
        let number = if is_sign_position {
            iter.next_if(|next| next.kind == TokenKind::Number)
        } else {
            None
        };

        match number {
            Some(number) => {
                let span = token.span.start..number.span.end;
                merged.push(Token {
                    lexeme: &input[span.clone()],
                    span,
                    kind: TokenKind::Number,
                });
            },
            None => merged.push(token),
        }
    }

    merged
}

/// Checks that every opening parenthesis has a matching closing parenthesis, and vice versa.
fn check_parens(tokens: &[Token]) -> Result<(), Error> {
    let mut open = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::OpenParen => open.push(token.span.clone()),
            TokenKind::CloseParen => {
                if open.pop().is_none() {
                    return Err(Error::new(
                        vec![token.span.clone()],
                        kind::UnmatchedParenthesis { unclosed: false },
                    ));
                }
            },
            _ => (),
        }
    }

    match open.pop() {
        Some(span) => Err(Error::new(vec![span], kind::UnmatchedParenthesis { unclosed: true })),
        None => Ok(()),
    }
}

/// Inserts a multiplication token between every pair of adjacent tokens where an operand is
/// directly followed by another operand, such as `3x`, `xy`, `2(`, `)x`, or `)(`.
fn insert_implicit_mul(tokens: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());

    for token in tokens {
        let boundary = out.last()
            .filter(|prev| prev.kind.ends_operand() && token.kind.begins_operand())
            .map(|prev| prev.span.end);

        if let Some(at) = boundary {
            out.push(Token {
                span: at..at,
                kind: TokenKind::Mul,
                lexeme: "",
            });
        }

        out.push(token);
    }

    out
}

/// Returns an owned array containing all of the tokens in the input, ready to be built into a
/// tree.
///
/// Whitespace is dropped, negative number literals are recognized, parentheses are checked for
/// balance, and implicit multiplication is made explicit.
pub fn tokenize_complete(input: &str) -> Result<Vec<Token>, Error> {
    let tokens = lex(input)?;
    let tokens = join_numbers(input, tokens);
    let tokens = merge_signs(input, tokens);
    check_parens(&tokens)?;
    Ok(insert_implicit_mul(tokens))
}

#[cfg(test)]
mod tests {
    use super::*;
    use exparse_error::ErrorCategory;
    use pretty_assertions::assert_eq;

    /// Compares the tokens produced by the lexer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    /// Compares the kinds and whitespace-free text of the complete token stream.
    fn compare_complete<const N: usize>(input: &str, expected: [(TokenKind, &str); N]) {
        let tokens = tokenize_complete(input).unwrap();
        let actual = tokens.iter()
            .map(|token| (token.kind, token.text()))
            .collect::<Vec<_>>();
        let expected = expected.into_iter()
            .map(|(kind, text)| (kind, text.to_string()))
            .collect::<Vec<_>>();
        assert_eq!(actual, expected);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + 2",
            [
                (TokenKind::Number, "1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Number, "2"),
            ],
        );
    }

    #[test]
    fn every_symbol() {
        compare_tokens(
            "3.5x-(y^2)!/z*$",
            [
                (TokenKind::Number, "3.5"),
                (TokenKind::Variable, "x"),
                (TokenKind::Sub, "-"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Variable, "y"),
                (TokenKind::Exp, "^"),
                (TokenKind::Number, "2"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Factorial, "!"),
                (TokenKind::Div, "/"),
                (TokenKind::Variable, "z"),
                (TokenKind::Mul, "*"),
                (TokenKind::Variable, "$"),
            ],
        );
    }

    #[test]
    fn whitespace_joins_digits() {
        compare_complete("1 2 + 3", [
            (TokenKind::Number, "12"),
            (TokenKind::Add, "+"),
            (TokenKind::Number, "3"),
        ]);
    }

    #[test]
    fn implicit_mul_number_variable() {
        compare_complete("3x", [
            (TokenKind::Number, "3"),
            (TokenKind::Mul, ""),
            (TokenKind::Variable, "x"),
        ]);
        compare_complete("x3", [
            (TokenKind::Variable, "x"),
            (TokenKind::Mul, ""),
            (TokenKind::Number, "3"),
        ]);
        compare_complete("xy", [
            (TokenKind::Variable, "x"),
            (TokenKind::Mul, ""),
            (TokenKind::Variable, "y"),
        ]);
    }

    #[test]
    fn implicit_mul_parens() {
        compare_complete("(1)(2)", [
            (TokenKind::OpenParen, "("),
            (TokenKind::Number, "1"),
            (TokenKind::CloseParen, ")"),
            (TokenKind::Mul, ""),
            (TokenKind::OpenParen, "("),
            (TokenKind::Number, "2"),
            (TokenKind::CloseParen, ")"),
        ]);
        compare_complete("2(x)y", [
            (TokenKind::Number, "2"),
            (TokenKind::Mul, ""),
            (TokenKind::OpenParen, "("),
            (TokenKind::Variable, "x"),
            (TokenKind::CloseParen, ")"),
            (TokenKind::Mul, ""),
            (TokenKind::Variable, "y"),
        ]);
    }

    #[test]
    fn negative_numbers() {
        compare_complete("-4^0.5", [
            (TokenKind::Number, "-4"),
            (TokenKind::Exp, "^"),
            (TokenKind::Number, "0.5"),
        ]);
        compare_complete("2*-3", [
            (TokenKind::Number, "2"),
            (TokenKind::Mul, "*"),
            (TokenKind::Number, "-3"),
        ]);
        compare_complete("(- 1)", [
            (TokenKind::OpenParen, "("),
            (TokenKind::Number, "-1"),
            (TokenKind::CloseParen, ")"),
        ]);
    }

    #[test]
    fn subtraction_is_not_a_sign() {
        compare_complete("x-1", [
            (TokenKind::Variable, "x"),
            (TokenKind::Sub, "-"),
            (TokenKind::Number, "1"),
        ]);
        compare_complete("(2)-1", [
            (TokenKind::OpenParen, "("),
            (TokenKind::Number, "2"),
            (TokenKind::CloseParen, ")"),
            (TokenKind::Sub, "-"),
            (TokenKind::Number, "1"),
        ]);
        compare_complete("3!-1", [
            (TokenKind::Number, "3"),
            (TokenKind::Factorial, "!"),
            (TokenKind::Sub, "-"),
            (TokenKind::Number, "1"),
        ]);
    }

    #[test]
    fn unclosed_paren() {
        let err = tokenize_complete("1+(2+3").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Tokenize);
        assert_eq!(err.spans, vec![2..3]);
        assert!(err.is::<kind::UnmatchedParenthesis>());
    }

    #[test]
    fn unopened_paren() {
        let err = tokenize_complete("1+(2+3))").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Tokenize);
        assert_eq!(err.spans, vec![7..8]);
    }

    #[test]
    fn reversed_parens() {
        let err = tokenize_complete(")1+2(").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Tokenize);
        assert_eq!(err.spans, vec![0..1]);
    }
}
