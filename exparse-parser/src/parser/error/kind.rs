use ariadne::Fmt;
use exparse_attrs::ErrorKind;
use exparse_error::EXPR;

/// A parenthesis was opened but never closed, or closed without being opened.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Tokenize,
    message = "unmatched parenthesis",
    labels = [if *unclosed {
        "this parenthesis is never closed"
    } else {
        "this parenthesis has no matching opening parenthesis"
    }],
    help = if *unclosed {
        format!("add a closing parenthesis {} to the end of the group", ")".fg(EXPR))
    } else {
        format!("remove it, or add an opening parenthesis {} before it", "(".fg(EXPR))
    },
)]
pub struct UnmatchedParenthesis {
    /// The parenthesis is an opening parenthesis that is never closed. (Otherwise, it is a
    /// closing parenthesis with no matching opening parenthesis.)
    pub unclosed: bool,
}

/// A symbol reached the tree builder that is not an operator it knows how to place.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Parse,
    message = format!("unknown operator `{}`", symbol),
    labels = ["this symbol"],
    help = "you should never see this error; please report this as a bug",
)]
pub struct UnknownOperator {
    /// The symbol that was found.
    pub symbol: String,
}

/// There was nothing to parse, either in the whole input or inside a pair of parentheses.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Parse,
    message = "empty expression",
    labels = [format!("I expected an {} here", "expression".fg(EXPR))],
)]
pub struct EmptyExpression;

/// An operator is missing one of its operands.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Parse,
    message = "missing operand",
    labels = ["this operator is missing an operand"],
    help = format!("add an {} on each side of the operator", "expression".fg(EXPR)),
)]
pub struct MissingOperand;

/// Two operands appeared next to each other without an operator between them.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Parse,
    message = "unexpected operand",
    labels = ["I did not expect this operand here"],
    help = format!("add an {} before it", "operator".fg(EXPR)),
)]
pub struct UnexpectedOperand;
