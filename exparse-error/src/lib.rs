//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.
//!
//! Every error produced while tokenizing, parsing, or evaluating an expression is an [`Error`],
//! which pairs the regions of the input that caused it with a boxed [`ErrorKind`]. The kind
//! decides how the error is rendered, and which [`ErrorCategory`] it falls into.

// lets `#[derive(ErrorKind)]` refer to this crate by name from within its own tests
extern crate self as exparse_error;

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::{self, Debug, Display, Formatter}, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// The stage of processing in which an error occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The input could not be split into tokens, such as when parentheses do not balance.
    Tokenize,

    /// The tokens could not be assembled into an expression tree.
    Parse,

    /// The expression tree could not be evaluated.
    Eval,
}

impl Display for ErrorCategory {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Tokenize => write!(f, "tokenize error"),
            Self::Parse => write!(f, "parse error"),
            Self::Eval => write!(f, "evaluation error"),
        }
    }
}

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Returns `self` as [`Any`], so that callers can check for a specific kind of error.
    fn as_any(&self) -> &dyn Any;

    /// The stage of processing this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    ///
    /// Evaluation errors are raised against the expression tree rather than the source text, so
    /// this is empty for them.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// The stage of processing this error belongs to.
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    /// Returns true if the kind of this error is `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Returns the kind of this error as `K`, if it is one.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Renders the report for this error to standard error, using `input` as the source text.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) {
        // a failure to write to stderr has nowhere else to be reported
        let _ = self.build_report(src_id).eprint((src_id, Source::from(input)));
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}: {:?}", self.category(), self.kind)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use exparse_attrs::ErrorKind;

    /// The parentheses are not balanced.
    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(
        category = Tokenize,
        message = "unbalanced parentheses",
        labels = ["this parenthesis"],
        help = "add the missing parenthesis",
    )]
    struct Unbalanced;

    /// A variable had no value.
    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(
        category = Eval,
        message = format!("no value bound to `{}`", name),
    )]
    struct Unbound {
        name: char,
    }

    /// A variable was used twice.
    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(
        category = Parse,
        message = "repeated variable",
        labels = [format!("`{}` first used here", name), String::new()],
    )]
    struct Repeated {
        name: char,
    }

    fn render(error: &Error, input: &str) -> String {
        let mut buf = Vec::new();
        error.build_report("input")
            .write(("input", Source::from(input)), &mut buf)
            .unwrap();
        String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
    }

    #[test]
    fn category_and_downcast() {
        let error = Error::new(vec![0..1], Unbalanced);
        assert_eq!(error.category(), ErrorCategory::Tokenize);
        assert!(error.is::<Unbalanced>());
        assert!(!error.is::<Unbound>());
        assert_eq!(error.downcast_ref::<Unbalanced>(), Some(&Unbalanced));
    }

    #[test]
    fn report_with_span() {
        let error = Error::new(vec![2..3], Unbalanced);
        let rendered = render(&error, "1+(2");
        assert!(rendered.contains("unbalanced parentheses"));
        assert!(rendered.contains("this parenthesis"));
        assert!(rendered.contains("add the missing parenthesis"));
    }

    #[test]
    fn report_without_span() {
        let error = Error::new(vec![], Unbound { name: 'x' });
        assert_eq!(error.category(), ErrorCategory::Eval);
        let rendered = render(&error, "x+1");
        assert!(rendered.contains("no value bound to `x`"));
    }

    #[test]
    fn report_labels_from_fields() {
        let error = Error::new(vec![0..1, 2..3, 4..5], Repeated { name: 'x' });
        assert_eq!(error.category(), ErrorCategory::Parse);
        let rendered = render(&error, "x+x+x");
        assert!(rendered.contains("repeated variable"));
        assert!(rendered.contains("`x` first used here"));
    }
}
