//! List primitives. All of them operate on quoted lists.

use crate::environment::Environment;
use crate::errors::{arity_mismatch, empty_list, EvalResult};
use crate::interpreter::Interpreter;
use crate::value::Value;

use super::{expect_quoted, finish, take_args};

/// The single argument of `name` as a non-empty quoted list.
fn single_list(name: &str, args: Vec<Value>) -> EvalResult<Vec<Value>> {
    let [list] = take_args::<1>(name, args)?;
    let items = expect_quoted(name, list)?;
    if items.is_empty() {
        return Err(empty_list(name));
    }
    Ok(items)
}

/// `list`: the arguments as a quoted list.
pub(super) fn list(_: &mut Interpreter, _: &Environment, args: Vec<Value>) -> Value {
    Value::quoted(args)
}

/// `head`: a list holding only the first element.
pub(super) fn head(_: &mut Interpreter, _: &Environment, args: Vec<Value>) -> Value {
    finish(single_list("head", args).map(|mut items| {
        items.truncate(1);
        Value::quoted(items)
    }))
}

/// `tail`: everything but the first element.
pub(super) fn tail(_: &mut Interpreter, _: &Environment, args: Vec<Value>) -> Value {
    finish(single_list("tail", args).map(|mut items| {
        items.remove(0);
        Value::quoted(items)
    }))
}

/// `init`: everything but the last element.
pub(super) fn init(_: &mut Interpreter, _: &Environment, args: Vec<Value>) -> Value {
    finish(single_list("init", args).map(|mut items| {
        items.pop();
        Value::quoted(items)
    }))
}

/// `join`: concatenation of one or more lists.
pub(super) fn join(_: &mut Interpreter, _: &Environment, args: Vec<Value>) -> Value {
    if args.is_empty() {
        return Value::from(arity_mismatch("join", 1, 0));
    }
    let mut joined = Vec::new();
    for arg in args {
        match expect_quoted("join", arg) {
            Ok(items) => joined.extend(items),
            Err(err) => return Value::from(err),
        }
    }
    Value::quoted(joined)
}

/// `cons`: prepend a value to a list.
pub(super) fn cons(_: &mut Interpreter, _: &Environment, args: Vec<Value>) -> Value {
    finish(take_args::<2>("cons", args).and_then(|[value, list]| {
        let mut items = expect_quoted("cons", list)?;
        items.insert(0, value);
        Ok(Value::quoted(items))
    }))
}

/// `eval`: evaluate a quoted list as code in the calling environment.
pub(super) fn eval(interpreter: &mut Interpreter, env: &Environment, args: Vec<Value>) -> Value {
    let items = match take_args::<1>("eval", args).and_then(|[list]| expect_quoted("eval", list)) {
        Ok(items) => items,
        Err(err) => return Value::from(err),
    };
    interpreter.evaluate(env, Value::evaluable(items))
}
