//! Numeric comparison and structural equality.

use crate::environment::Environment;
use crate::errors::EvalResult;
use crate::interpreter::Interpreter;
use crate::value::Value;

use super::{expect_number, finish, take_args};

#[derive(Clone, Copy, Debug)]
pub(super) enum CompareOp {
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
    Ne,
}

impl CompareOp {
    fn symbol(self) -> &'static str {
        match self {
            CompareOp::Lt => "<",
            CompareOp::Gt => ">",
            CompareOp::Le => "<=",
            CompareOp::Ge => ">=",
            CompareOp::Eq => "=",
            CompareOp::Ne => "!=",
        }
    }

    fn holds(self, lhs: i64, rhs: i64) -> bool {
        match self {
            CompareOp::Lt => lhs < rhs,
            CompareOp::Gt => lhs > rhs,
            CompareOp::Le => lhs <= rhs,
            CompareOp::Ge => lhs >= rhs,
            CompareOp::Eq => lhs == rhs,
            CompareOp::Ne => lhs != rhs,
        }
    }
}

/// Compare exactly two numbers.
pub(super) fn compare(op: CompareOp, args: Vec<Value>) -> EvalResult<Value> {
    let [lhs, rhs] = take_args::<2>(op.symbol(), args)?;
    let lhs = expect_number(op.symbol(), &lhs)?;
    let rhs = expect_number(op.symbol(), &rhs)?;
    Ok(Value::Boolean(op.holds(lhs, rhs)))
}

pub(super) fn lt(_: &mut Interpreter, _: &Environment, args: Vec<Value>) -> Value {
    finish(compare(CompareOp::Lt, args))
}

pub(super) fn gt(_: &mut Interpreter, _: &Environment, args: Vec<Value>) -> Value {
    finish(compare(CompareOp::Gt, args))
}

pub(super) fn le(_: &mut Interpreter, _: &Environment, args: Vec<Value>) -> Value {
    finish(compare(CompareOp::Le, args))
}

pub(super) fn ge(_: &mut Interpreter, _: &Environment, args: Vec<Value>) -> Value {
    finish(compare(CompareOp::Ge, args))
}

pub(super) fn ne(_: &mut Interpreter, _: &Environment, args: Vec<Value>) -> Value {
    finish(compare(CompareOp::Ne, args))
}

/// `eqv?`: structural equality of any two values.
pub(super) fn eqv(_: &mut Interpreter, _: &Environment, args: Vec<Value>) -> Value {
    finish(take_args::<2>("eqv?", args).map(|[lhs, rhs]| Value::Boolean(lhs == rhs)))
}
