//! The primitive library.
//!
//! Every primitive receives its evaluated arguments by value together with
//! the calling environment. A precondition failure drops the arguments and
//! returns an error value.

mod arithmetic;
mod compare;
mod define;
mod list;

use crate::environment::Environment;
use crate::errors::{arity_mismatch, wrong_type, EvalResult};
use crate::value::{BuiltinFn, Value};

/// Bind a native operation under `name` in `env`.
pub fn register(env: &Environment, name: &'static str, op: BuiltinFn) {
    env.define_local(name, Value::builtin(name, op));
}

/// Install the standard primitives into `env`.
pub fn install(env: &Environment) {
    // Lists
    register(env, "list", list::list);
    register(env, "head", list::head);
    register(env, "tail", list::tail);
    register(env, "init", list::init);
    register(env, "join", list::join);
    register(env, "cons", list::cons);
    register(env, "eval", list::eval);

    // Arithmetic
    register(env, "+", arithmetic::add);
    register(env, "-", arithmetic::sub);
    register(env, "*", arithmetic::mul);
    register(env, "/", arithmetic::div);
    register(env, "%", arithmetic::rem);
    register(env, "^", arithmetic::pow);

    // Comparison
    register(env, "<", compare::lt);
    register(env, ">", compare::gt);
    register(env, "<=", compare::le);
    register(env, ">=", compare::ge);
    register(env, "!=", compare::ne);
    register(env, "eqv?", compare::eqv);

    // Definitions, functions and control
    register(env, "def", define::def);
    register(env, "=", define::put_or_equal);
    register(env, "\\", define::lambda);
    register(env, "if", define::if_);
    register(env, "load", define::load);
}

/// Move exactly `N` arguments out of `args`.
fn take_args<const N: usize>(name: &str, args: Vec<Value>) -> EvalResult<[Value; N]> {
    let got = args.len();
    <[Value; N]>::try_from(args).map_err(|_| arity_mismatch(name, N, got))
}

/// Unwrap a quoted list argument.
fn expect_quoted(name: &str, value: Value) -> EvalResult<Vec<Value>> {
    match value {
        Value::QuotedList(items) => Ok(items.into_vec()),
        other => Err(wrong_type(name, "quoted list", other.type_name())),
    }
}

fn expect_number(name: &str, value: &Value) -> EvalResult<i64> {
    value
        .as_number()
        .ok_or_else(|| wrong_type(name, "number", value.type_name()))
}

/// Turn a primitive's result into a value.
fn finish(result: EvalResult<Value>) -> Value {
    result.unwrap_or_else(Value::from)
}
