use exparse_parser::parser::{ast::binary::Binary, token::op::BinOpKind};
use num_complex::Complex64;
use crate::numerical::{error::Error, eval::Eval, value::Value};
use crate::primitive::{complex, is_integer};

/// Evaluates a binary expression with two real operands.
fn eval_real_operands(op: BinOpKind, left: f64, right: f64) -> Value {
    match op {
        // a negative base has no real root, so take the principal complex one
        BinOpKind::Exp if left < 0.0 && right.is_finite() && !is_integer(right) => {
            Value::Complex(complex(left, 0.0).powf(right))
        },
        BinOpKind::Exp => Value::Real(left.powf(right)),
        BinOpKind::Mul => Value::Real(left * right),
        BinOpKind::Div => Value::Real(left / right),
        BinOpKind::Add => Value::Real(left + right),
        BinOpKind::Sub => Value::Real(left - right),
    }
}

/// Evaluates a binary expression with two complex operands.
fn eval_complex_operands(op: BinOpKind, left: Complex64, right: Complex64) -> Value {
    Value::Complex(match op {
        BinOpKind::Exp => left.powc(right),
        BinOpKind::Mul => left * right,
        BinOpKind::Div => left / right,
        BinOpKind::Add => left + right,
        BinOpKind::Sub => left - right,
    })
}

/// Evaluates a binary expression, promoting both operands to complex numbers if either is one.
fn eval_operands(op: BinOpKind, left: Value, right: Value) -> Value {
    match (left, right) {
        (Value::Real(left), Value::Real(right)) => eval_real_operands(op, left, right),
        (left, right) => eval_complex_operands(op, left.into_complex(), right.into_complex()),
    }
}

impl Eval for Binary {
    fn eval(&self) -> Result<Value, Error> {
        let left = self.lhs.eval()?;
        let right = self.rhs.eval()?;
        Ok(eval_operands(self.kind, left, right))
    }
}
