use crate::error::{shift, span_of, ComplexBinding, InvalidVariableName, MissingAssign};
use exparse_compute::{numerical::error::Error, symbolic::{Step, Symbolic}, Eval, Value};
use exparse_parser::parser::{
    ast::{LitNum, Tree},
    fmt::{FormatOptions, Notation},
};
use std::collections::BTreeMap;

/// State kept between lines of an interactive session.
#[derive(Debug, Default)]
pub struct Session {
    /// Variables bound with `let`, applied to every expression parsed afterwards.
    bindings: BTreeMap<char, LitNum>,

    /// Notation used by `print`, `simplify`, and `factor`.
    pub notation: Notation,

    /// Options used whenever a tree is printed.
    pub options: FormatOptions,
}

impl Session {
    /// Creates a session with no bindings that prints trees with the given options.
    pub fn new(notation: Notation, options: FormatOptions) -> Self {
        Self { bindings: BTreeMap::new(), notation, options }
    }

    /// Parses the part `expr` of `line`, then binds every session variable in it.
    fn parse(&self, line: &str, expr: &str) -> Result<Tree, Error> {
        let mut tree = Tree::parse(expr).map_err(|err| shift(err, span_of(line, expr).start))?;
        for (name, value) in &self.bindings {
            tree.set_variable(*name, value.clone());
        }
        Ok(tree)
    }

    /// Reads a single-character variable name out of `line`.
    fn name(line: &str, part: &str) -> Result<char, Error> {
        let name = part.trim();
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_ascii_digit() => Ok(c),
            _ => Err(Error::new(vec![span_of(line, name)], InvalidVariableName)),
        }
    }

    /// Runs one line of input, returning the text to print, if any.
    pub fn execute(&mut self, line: &str) -> Result<Option<String>, Error> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim_start();
        let print = |tree: &Tree, notation: Notation| Some(tree.fmt_with(notation, self.options));

        match command {
            "let" => {
                let (name, value) = rest.split_once('=')
                    .ok_or_else(|| Error::new(vec![0..line.len()], MissingAssign))?;
                let name = Self::name(line, name)?;
                let value = value.trim();
                let tree = self.parse(line, value)?;
                let number = match tree.eval().map_err(|err| shift(err, span_of(line, value).start))? {
                    Value::Real(n) => LitNum::from(n),
                    complex => return Err(Error::new(
                        vec![span_of(line, value)],
                        ComplexBinding { value: complex.to_string() },
                    )),
                };
                log::debug!("binding `{}` to {}", name, number.text);
                let output = format!("{} = {}", name, number.text);
                self.bindings.insert(name, number);
                Ok(Some(output))
            },
            "unset" => {
                let name = Self::name(line, rest)?;
                self.bindings.remove(&name);
                Ok(None)
            },
            "simplify" => {
                let mut tree = self.parse(line, rest)?;
                tree.simplify();
                Ok(print(&tree, self.notation))
            },
            "factor" => {
                let mut steps: Vec<Step> = Vec::new();
                let tree = self.parse(line, rest)?.factor_with_steps(&mut steps);
                for step in steps {
                    log::debug!("applied {:?}", step);
                }
                Ok(print(&tree, self.notation))
            },
            "print" => Ok(print(&self.parse(line, rest)?, self.notation)),
            "infix" => Ok(print(&self.parse(line, rest)?, Notation::Infix)),
            "prefix" => Ok(print(&self.parse(line, rest)?, Notation::Prefix)),
            "postfix" => Ok(print(&self.parse(line, rest)?, Notation::Postfix)),
            _ => Ok(Some(self.parse(line, line)?.eval()?.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exparse_parser::parser::error::kind::EmptyExpression;
    use pretty_assertions::assert_eq;

    fn run(session: &mut Session, line: &str) -> Option<String> {
        session.execute(line).unwrap()
    }

    #[test]
    fn evaluate() {
        let mut session = Session::default();
        assert_eq!(run(&mut session, "1+2*3"), Some("7".to_string()));
        assert_eq!(run(&mut session, "   "), None);
    }

    #[test]
    fn bind_and_unset() {
        let mut session = Session::default();
        assert_eq!(run(&mut session, "let x = 2*3"), Some("x = 6".to_string()));
        assert_eq!(run(&mut session, "x+1"), Some("7".to_string()));
        assert_eq!(run(&mut session, "unset x"), None);
        assert!(session.execute("x+1").is_err());
    }

    #[test]
    fn bad_binding() {
        let mut session = Session::default();
        let err = session.execute("let xy = 2").unwrap_err();
        assert!(err.is::<InvalidVariableName>());
        assert_eq!(err.spans, vec![4..6]);

        assert!(session.execute("let x 2").unwrap_err().is::<MissingAssign>());
        assert!(session.execute("let x = -4^0.5").unwrap_err().is::<ComplexBinding>());
    }

    #[test]
    fn symbolic_commands() {
        let mut session = Session::new(Notation::Postfix, FormatOptions::default());
        assert_eq!(run(&mut session, "simplify 2*3 + x"), Some("6 x +".to_string()));
        assert_eq!(run(&mut session, "factor x*y + x*z"), Some("x y z + *".to_string()));
        assert_eq!(run(&mut session, "infix x*y + x*z"), Some("xy + xz".to_string()));
        assert_eq!(run(&mut session, "prefix 1+1+1"), Some("+ 1 + 1 1".to_string()));
    }

    #[test]
    fn error_spans_point_into_line() {
        let mut session = Session::default();
        let err = session.execute("simplify 1+()").unwrap_err();
        assert!(err.is::<EmptyExpression>());
        assert_eq!(err.spans, vec![11..13]);
    }
}
