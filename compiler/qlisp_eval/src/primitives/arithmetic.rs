//! `+ - * / % ^` over 64-bit integers. Overflow is an error, never a wrap.

use crate::environment::Environment;
use crate::errors::{
    arity_mismatch, division_by_zero, integer_overflow, negative_exponent, EvalResult,
};
use crate::interpreter::Interpreter;
use crate::value::Value;

use super::{expect_number, finish};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

impl ArithOp {
    fn symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
            ArithOp::Rem => "%",
            ArithOp::Pow => "^",
        }
    }

    fn operation(self) -> &'static str {
        match self {
            ArithOp::Add => "addition",
            ArithOp::Sub => "subtraction",
            ArithOp::Mul => "multiplication",
            ArithOp::Div => "division",
            ArithOp::Rem => "remainder",
            ArithOp::Pow => "exponentiation",
        }
    }

    fn apply(self, lhs: i64, rhs: i64) -> EvalResult<i64> {
        let overflow = || integer_overflow(self.operation());
        match self {
            ArithOp::Add => lhs.checked_add(rhs).ok_or_else(overflow),
            ArithOp::Sub => lhs.checked_sub(rhs).ok_or_else(overflow),
            ArithOp::Mul => lhs.checked_mul(rhs).ok_or_else(overflow),
            ArithOp::Div if rhs == 0 => Err(division_by_zero()),
            ArithOp::Div => lhs.checked_div(rhs).ok_or_else(overflow),
            ArithOp::Rem if rhs == 0 => Err(division_by_zero()),
            ArithOp::Rem => lhs.checked_rem(rhs).ok_or_else(overflow),
            ArithOp::Pow => power(lhs, rhs),
        }
    }
}

/// Left fold of `op` over the operands. A lone operand of `-` is negated.
fn arithmetic(op: ArithOp, args: &[Value]) -> EvalResult<Value> {
    let numbers = args
        .iter()
        .map(|arg| expect_number(op.symbol(), arg))
        .collect::<EvalResult<Vec<i64>>>()?;

    let Some((&first, rest)) = numbers.split_first() else {
        return Err(arity_mismatch(op.symbol(), 1, 0));
    };

    if op == ArithOp::Sub && rest.is_empty() {
        return first
            .checked_neg()
            .map(Value::Number)
            .ok_or_else(|| integer_overflow("negation"));
    }

    rest.iter()
        .try_fold(first, |acc, &n| op.apply(acc, n))
        .map(Value::Number)
}

/// `base` raised to `exp` by repeated squaring.
fn power(base: i64, exp: i64) -> EvalResult<i64> {
    if exp < 0 {
        return Err(negative_exponent());
    }
    let overflow = || integer_overflow("exponentiation");
    let mut result: i64 = 1;
    let mut base = base;
    let mut exp = exp;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result.checked_mul(base).ok_or_else(overflow)?;
        }
        exp = exp.wrapping_shr(1);
        if exp > 0 {
            base = base.checked_mul(base).ok_or_else(overflow)?;
        }
    }
    Ok(result)
}

pub(super) fn add(_: &mut Interpreter, _: &Environment, args: Vec<Value>) -> Value {
    finish(arithmetic(ArithOp::Add, &args))
}

pub(super) fn sub(_: &mut Interpreter, _: &Environment, args: Vec<Value>) -> Value {
    finish(arithmetic(ArithOp::Sub, &args))
}

pub(super) fn mul(_: &mut Interpreter, _: &Environment, args: Vec<Value>) -> Value {
    finish(arithmetic(ArithOp::Mul, &args))
}

pub(super) fn div(_: &mut Interpreter, _: &Environment, args: Vec<Value>) -> Value {
    finish(arithmetic(ArithOp::Div, &args))
}

pub(super) fn rem(_: &mut Interpreter, _: &Environment, args: Vec<Value>) -> Value {
    finish(arithmetic(ArithOp::Rem, &args))
}

pub(super) fn pow(_: &mut Interpreter, _: &Environment, args: Vec<Value>) -> Value {
    finish(arithmetic(ArithOp::Pow, &args))
}
