use exparse_attrs::ErrorKind;
use exparse_error::Error;
use std::ops::Range;

/// A variable name in a `let` or `unset` command is not a single character.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Parse,
    message = "invalid variable name",
    labels = ["this name"],
    help = "variable names are a single character, such as `x`",
)]
pub struct InvalidVariableName;

/// A `let` command has no `=`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Parse,
    message = "missing `=` in `let` command",
    labels = ["this command"],
    help = "write it as `let x = 5`",
)]
pub struct MissingAssign;

/// The value assigned in a `let` command is not a real number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Eval,
    message = format!("cannot bind the complex value `{}` to a variable", value),
    labels = ["this expression"],
    help = "only real numbers can be bound to variables",
)]
pub struct ComplexBinding {
    /// The value the expression evaluated to.
    pub value: String,
}

/// Returns the region `part` occupies in `line`. `part` must be a subslice of `line`.
pub fn span_of(line: &str, part: &str) -> Range<usize> {
    let start = (part.as_ptr() as usize).saturating_sub(line.as_ptr() as usize);
    start..start + part.len()
}

/// Moves the spans of an error by `offset`, so that an error raised for a part of a line points
/// into the whole line.
pub fn shift(mut err: Error, offset: usize) -> Error {
    for span in &mut err.spans {
        span.start += offset;
        span.end += offset;
    }
    err
}
