//! Runtime values.
//!
//! `Value` is a closed sum type. Every value is owned: cloning is a deep copy,
//! including the environment captured by a closure, so two clones never share
//! mutable state. Errors are ordinary values ([`Value::Error`]) and flow
//! through evaluation like any other result.

mod display;
mod list;

use std::fmt;

use crate::environment::Environment;
use crate::errors::EvalError;
use crate::interpreter::Interpreter;

pub use display::escape;
pub use list::ValueList;

/// Symbol name.
pub type Name = String;

/// Native operation signature: owned arguments, calling environment.
pub type BuiltinFn = fn(&mut Interpreter, &Environment, Vec<Value>) -> Value;

/// Formal that captures all remaining arguments into a quoted list.
pub const VARIADIC_MARKER: &str = "&";

/// A named native operation.
///
/// Two builtins are the same function when they were registered under the
/// same name.
#[derive(Clone, Copy)]
pub struct Builtin {
    name: &'static str,
    op: BuiltinFn,
}

impl Builtin {
    pub fn new(name: &'static str, op: BuiltinFn) -> Self {
        Builtin { name, op }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Invoke the operation.
    #[inline]
    pub fn call(&self, interpreter: &mut Interpreter, env: &Environment, args: Vec<Value>) -> Value {
        (self.op)(interpreter, env, args)
    }
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Builtin({})", self.name)
    }
}

/// A user-defined function.
///
/// `env` holds the bindings made so far by partial application. It never has
/// a parent while the closure is stored; the parent is attached only for the
/// duration of a call.
pub struct Closure {
    pub(crate) formals: Vec<Name>,
    pub(crate) body: Vec<Value>,
    pub(crate) env: Environment,
}

impl Closure {
    /// A closure with a fresh, empty environment.
    pub fn new(formals: Vec<Name>, body: Vec<Value>) -> Self {
        Closure {
            formals,
            body,
            env: Environment::new(),
        }
    }

    /// Formals not yet bound.
    pub fn formals(&self) -> &[Name] {
        &self.formals
    }

    pub fn body(&self) -> &[Value] {
        &self.body
    }

    /// Bindings accumulated by partial application.
    pub fn env(&self) -> &Environment {
        &self.env
    }
}

impl Clone for Closure {
    fn clone(&self) -> Self {
        Closure {
            formals: self.formals.clone(),
            body: self.body.clone(),
            env: self.env.copy(),
        }
    }
}

/// Captured environment is not part of a closure's identity.
impl PartialEq for Closure {
    fn eq(&self, other: &Self) -> bool {
        self.formals == other.formals && self.body == other.body
    }
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("formals", &self.formals)
            .field("body", &self.body)
            .field("bound", &self.env.names())
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Function {
    Builtin(Builtin),
    Closure(Closure),
}

impl Function {
    /// Name used in logs: the registered name, or `\` for closures.
    pub fn name(&self) -> &str {
        match self {
            Function::Builtin(builtin) => builtin.name(),
            Function::Closure(_) => "\\",
        }
    }
}

/// Runtime value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(i64),
    Boolean(bool),
    Str(String),
    Symbol(Name),
    /// Failed computation, carried as data.
    Error(EvalError),
    /// `( ... )`: reduced by the evaluator.
    EvaluableList(ValueList),
    /// `{ ... }`: self-evaluating; also the syntax of lambda formals and bodies.
    QuotedList(ValueList),
    Function(Function),
}

impl Value {
    // Factory methods

    #[inline]
    pub fn number(n: i64) -> Self {
        Value::Number(n)
    }

    #[inline]
    pub fn boolean(b: bool) -> Self {
        Value::Boolean(b)
    }

    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    pub fn symbol(name: impl Into<Name>) -> Self {
        Value::Symbol(name.into())
    }

    pub fn quoted(items: Vec<Value>) -> Self {
        Value::QuotedList(items.into())
    }

    pub fn evaluable(items: Vec<Value>) -> Self {
        Value::EvaluableList(items.into())
    }

    /// `()`, the result of definitions and loading.
    pub fn empty() -> Self {
        Value::EvaluableList(ValueList::new())
    }

    pub fn builtin(name: &'static str, op: BuiltinFn) -> Self {
        Value::Function(Function::Builtin(Builtin::new(name, op)))
    }

    pub fn closure(formals: Vec<Name>, body: Vec<Value>) -> Self {
        Value::Function(Function::Closure(Closure::new(formals, body)))
    }

    // Queries

    /// Type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Boolean(_) => "boolean",
            Value::Str(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Error(_) => "error",
            Value::EvaluableList(_) => "evaluable list",
            Value::QuotedList(_) => "quoted list",
            Value::Function(_) => "function",
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_error(&self) -> Option<&EvalError> {
        match self {
            Value::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Elements of either list flavor.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::EvaluableList(items) | Value::QuotedList(items) => Some(items.as_slice()),
            _ => None,
        }
    }
}

impl From<EvalError> for Value {
    fn from(err: EvalError) -> Self {
        Value::Error(err)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

#[cfg(test)]
mod tests;
