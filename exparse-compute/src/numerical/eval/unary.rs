use exparse_parser::parser::{ast::unary::Unary, token::op::UnaryOpKind};
use crate::funcs::combinatoric::factorial;
use crate::numerical::{
    error::{kind::InvalidFactorial, Error},
    eval::Eval,
    value::Value,
};
use crate::primitive::is_integer;

/// Evaluates the factorial of the value, which must be a non-negative integer.
fn eval_factorial(operand: Value) -> Result<Value, Error> {
    match operand.as_real() {
        Some(n) if is_integer(n) && n >= 0.0 => Ok(Value::Real(factorial(n as u64))),
        _ => Err(Error::new(vec![], InvalidFactorial { operand: operand.to_string() })),
    }
}

impl Eval for Unary {
    fn eval(&self) -> Result<Value, Error> {
        let operand = self.operand.eval()?;
        match self.kind {
            UnaryOpKind::Factorial => eval_factorial(operand),
        }
    }
}
