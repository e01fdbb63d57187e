//! Definitions, lambda, conditionals and `load`.

use std::path::Path;

use crate::environment::Environment;
use crate::errors::{arity_mismatch, wrong_type, EvalResult};
use crate::interpreter::Interpreter;
use crate::value::{Name, Value};

use super::compare::{compare, CompareOp};
use super::{expect_quoted, finish, take_args};

#[derive(Clone, Copy, Debug)]
enum Target {
    /// Root of the environment chain (`def`).
    Global,
    /// Innermost scope (`=`).
    Local,
}

/// Symbols of a quoted list, in order.
fn symbols(name: &str, items: Vec<Value>) -> EvalResult<Vec<Name>> {
    items
        .into_iter()
        .map(|item| match item {
            Value::Symbol(symbol) => Ok(symbol),
            other => Err(wrong_type(name, "symbol", other.type_name())),
        })
        .collect()
}

/// `{a b ...} va vb ...`: bind each symbol to the value at the same position.
fn define(name: &str, target: Target, env: &Environment, args: Vec<Value>) -> EvalResult<Value> {
    let mut args = args.into_iter();
    let Some(first) = args.next() else {
        return Err(arity_mismatch(name, 1, 0));
    };
    let names = symbols(name, expect_quoted(name, first)?)?;
    let values: Vec<Value> = args.collect();
    if names.len() != values.len() {
        return Err(arity_mismatch(name, names.len(), values.len()));
    }

    for (symbol, value) in names.into_iter().zip(values) {
        tracing::debug!(name = %symbol, ?target, "define");
        match target {
            Target::Global => env.define_global(symbol, value),
            Target::Local => env.define_local(symbol, value),
        }
    }
    Ok(Value::empty())
}

/// `def`: global definition.
pub(super) fn def(_: &mut Interpreter, env: &Environment, args: Vec<Value>) -> Value {
    finish(define("def", Target::Global, env, args))
}

/// `=`: local definition when given a symbol list, numeric equality otherwise.
pub(super) fn put_or_equal(_: &mut Interpreter, env: &Environment, args: Vec<Value>) -> Value {
    if matches!(args.first(), Some(Value::QuotedList(_))) {
        finish(define("=", Target::Local, env, args))
    } else {
        finish(compare(CompareOp::Eq, args))
    }
}

/// `\`: build a closure from a formals list and a body list.
pub(super) fn lambda(_: &mut Interpreter, _: &Environment, args: Vec<Value>) -> Value {
    finish(take_args::<2>("\\", args).and_then(|[formals, body]| {
        let formals = symbols("\\", expect_quoted("\\", formals)?)?;
        let body = expect_quoted("\\", body)?;
        Ok(Value::closure(formals, body))
    }))
}

/// `if`: evaluate only the branch selected by the condition.
pub(super) fn if_(interpreter: &mut Interpreter, env: &Environment, args: Vec<Value>) -> Value {
    let selected = take_args::<3>("if", args).and_then(|[condition, then, otherwise]| {
        let condition = condition
            .as_boolean()
            .ok_or_else(|| wrong_type("if", "boolean", condition.type_name()))?;
        let then = expect_quoted("if", then)?;
        let otherwise = expect_quoted("if", otherwise)?;
        Ok(if condition { then } else { otherwise })
    });
    match selected {
        Ok(branch) => interpreter.evaluate(env, Value::evaluable(branch)),
        Err(err) => Value::from(err),
    }
}

/// `load`: evaluate every form of a file in the calling environment.
pub(super) fn load(interpreter: &mut Interpreter, env: &Environment, args: Vec<Value>) -> Value {
    let path = match take_args::<1>("load", args) {
        Ok([Value::Str(path)]) => path,
        Ok([other]) => return Value::from(wrong_type("load", "string", other.type_name())),
        Err(err) => return Value::from(err),
    };
    interpreter.load_file(env, Path::new(&path))
}
