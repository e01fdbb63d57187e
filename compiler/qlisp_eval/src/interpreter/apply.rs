//! Function application.
//!
//! A closure consumes its formals front to back. Supplying fewer arguments
//! than formals yields a partial application: a closure holding the bindings
//! made so far and the formals still unbound. Only a fully bound closure runs
//! its body, and it runs with the caller's environment as parent.

use crate::environment::Environment;
use crate::errors::{arity_mismatch, malformed_form, stack_overflow};
use crate::value::{Closure, Function, Value, VARIADIC_MARKER};

use super::Interpreter;

const BAD_VARIADIC: &str = "'&' must be followed by exactly one symbol";

impl Interpreter {
    /// Apply `function` to already-evaluated `args`, called from `env`.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(function = function.name(), args = args.len())
    )]
    pub fn apply(&mut self, env: &Environment, function: Function, args: Vec<Value>) -> Value {
        match function {
            Function::Builtin(builtin) => builtin.call(self, env, args),
            Function::Closure(closure) => self.apply_closure(env, closure, args),
        }
    }

    fn apply_closure(&mut self, caller: &Environment, mut closure: Closure, args: Vec<Value>) -> Value {
        let given = args.len();
        let expected = closure.formals.len();
        let mut formals = std::mem::take(&mut closure.formals).into_iter();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let Some(formal) = formals.next() else {
                return Value::from(arity_mismatch("", expected, given));
            };
            if formal == VARIADIC_MARKER {
                let rest = match (formals.next(), formals.next()) {
                    (Some(rest), None) => rest,
                    _ => return Value::from(malformed_form(BAD_VARIADIC)),
                };
                let captured: Vec<Value> = std::iter::once(arg).chain(args.by_ref()).collect();
                closure.env.define_local(rest, Value::quoted(captured));
                break;
            }
            closure.env.define_local(formal, arg);
        }

        let mut remaining: Vec<_> = formals.collect();
        if remaining.first().is_some_and(|formal| formal == VARIADIC_MARKER) {
            if remaining.len() != 2 {
                return Value::from(malformed_form(BAD_VARIADIC));
            }
            if let Some(rest) = remaining.pop() {
                closure.env.define_local(rest, Value::quoted(Vec::new()));
            }
            remaining.clear();
        }

        if !remaining.is_empty() {
            tracing::debug!(unbound = remaining.len(), "partial application");
            closure.formals = remaining;
            return Value::Function(Function::Closure(closure));
        }

        self.run_body(caller, closure)
    }

    /// Evaluate a fully bound closure's body with `caller` as parent scope.
    fn run_body(&mut self, caller: &Environment, mut closure: Closure) -> Value {
        if let Some(limit) = self.max_call_depth {
            if self.call_depth >= limit {
                return Value::from(stack_overflow(limit));
            }
        }

        closure.env.set_parent(Some(caller));
        let body = std::mem::take(&mut closure.body);

        self.call_depth = self.call_depth.saturating_add(1);
        tracing::trace!(
            depth = self.call_depth,
            remaining_stack = ?qlisp_stack::remaining_stack(),
            "enter body"
        );
        let result = self.evaluate(&closure.env, Value::evaluable(body));
        self.call_depth = self.call_depth.saturating_sub(1);

        result
    }
}
