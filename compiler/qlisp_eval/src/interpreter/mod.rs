//! The evaluator.
//!
//! Evaluation is a plain recursive walk over owned values. Every recursion
//! step goes through [`ensure_sufficient_stack`], so deep programs grow the
//! stack instead of crashing; an optional call-depth limit turns runaway
//! recursion into an error value.

mod apply;
mod builder;
mod load;

use qlisp_stack::ensure_sufficient_stack;

pub use builder::InterpreterBuilder;

use crate::environment::Environment;
use crate::errors::not_a_function;
use crate::print_handler::SharedPrintHandler;
use crate::value::Value;

/// Evaluation state: the root environment plus host configuration.
pub struct Interpreter {
    global: Environment,
    print_handler: SharedPrintHandler,
    max_call_depth: Option<usize>,
    /// Closure applications currently in progress.
    call_depth: usize,
}

impl Interpreter {
    /// An interpreter with the standard primitives installed, reporting to stdout.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// The root environment.
    #[inline]
    pub fn global(&self) -> &Environment {
        &self.global
    }

    #[inline]
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    #[inline]
    pub fn max_call_depth(&self) -> Option<usize> {
        self.max_call_depth
    }

    #[inline]
    pub fn call_depth(&self) -> usize {
        self.call_depth
    }

    /// Evaluate `value` in the root environment.
    pub fn eval(&mut self, value: Value) -> Value {
        let global = self.global.clone();
        self.evaluate(&global, value)
    }

    /// Evaluate `value` in `env`.
    ///
    /// Symbols resolve through `env`; evaluable lists are reduced; everything
    /// else evaluates to itself.
    pub fn evaluate(&mut self, env: &Environment, value: Value) -> Value {
        match value {
            Value::Symbol(name) => {
                tracing::trace!(%name, "resolve");
                env.lookup(&name).unwrap_or_else(Value::from)
            }
            Value::EvaluableList(items) => {
                ensure_sufficient_stack(|| self.evaluate_list(env, items.into_vec()))
            }
            Value::Number(_)
            | Value::Boolean(_)
            | Value::Str(_)
            | Value::Error(_)
            | Value::QuotedList(_)
            | Value::Function(_) => value,
        }
    }

    /// Reduce `( ... )`.
    ///
    /// All elements are evaluated left to right before anything is checked,
    /// so side effects of elements after a failing one still happen. The first
    /// error wins.
    fn evaluate_list(&mut self, env: &Environment, items: Vec<Value>) -> Value {
        let mut values: Vec<Value> = items
            .into_iter()
            .map(|item| self.evaluate(env, item))
            .collect();

        if let Some(pos) = values.iter().position(Value::is_error) {
            return values.swap_remove(pos);
        }

        let mut values = values.into_iter();
        let Some(head) = values.next() else {
            return Value::empty();
        };
        let args: Vec<Value> = values.collect();
        if args.is_empty() {
            return head;
        }

        match head {
            Value::Function(function) => self.apply(env, function, args),
            other => Value::from(not_a_function(other.type_name())),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
