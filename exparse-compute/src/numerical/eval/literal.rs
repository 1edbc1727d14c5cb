use exparse_parser::parser::ast::literal::{LitNum, LitVar};
use crate::numerical::{
    error::{kind::{InvalidNumber, UnboundVariable}, Error},
    eval::Eval,
    value::Value,
};
use crate::primitive::float_from_str;

impl Eval for LitNum {
    fn eval(&self) -> Result<Value, Error> {
        float_from_str(&self.text)
            .map(Value::Real)
            .ok_or_else(|| Error::new(vec![], InvalidNumber { text: self.text.clone() }))
    }
}

impl Eval for LitVar {
    fn eval(&self) -> Result<Value, Error> {
        match &self.value {
            Some(value) => value.eval(),
            None => Err(Error::new(vec![], UnboundVariable { name: self.name })),
        }
    }
}
