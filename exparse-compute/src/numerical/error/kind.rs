use ariadne::Fmt;
use exparse_attrs::ErrorKind;
use exparse_error::EXPR;

/// The variable is not bound to a value.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Eval,
    message = format!("`{}` has no value", name),
    help = format!("bind a value to `{}` before evaluating", name.fg(EXPR)),
)]
pub struct UnboundVariable {
    /// The name of the variable.
    pub name: char,
}

/// The factorial operator was applied to a value that is not a non-negative integer.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Eval,
    message = format!("cannot take the factorial of `{}`", operand),
    help = format!("the factorial is only defined for {}", "non-negative integers".fg(EXPR)),
)]
pub struct InvalidFactorial {
    /// The value the operand evaluated to.
    pub operand: String,
}

/// A number literal could not be read as a number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Eval,
    message = format!("`{}` is not a valid number", text),
    help = "a number can contain at most one decimal point",
)]
pub struct InvalidNumber {
    /// The text of the literal.
    pub text: String,
}
