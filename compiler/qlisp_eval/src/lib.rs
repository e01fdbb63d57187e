#![deny(clippy::arithmetic_side_effects)]
//! qlisp Eval - evaluation core of the qlisp interpreter.
//!
//! # Architecture
//!
//! - [`Value`]: closed sum of runtime values; errors are values too
//! - [`Environment`]: chained scopes with local and global definition
//! - [`reader`]: builds values from a [`qlisp_ir::SyntaxNode`] tree
//! - [`primitives`]: the native operations installed into each root environment
//! - [`Interpreter`]: evaluation, function application and source loading
//!
//! ```text
//! let mut interpreter = Interpreter::new();
//! interpreter.eval_line("def {square} (\\ {x} {* x x})")?;
//! assert_eq!(interpreter.eval_line("square 5")?, Value::Number(25));
//! ```

mod environment;
pub mod errors;
pub mod interpreter;
mod print_handler;
pub mod primitives;
pub mod reader;
mod value;

pub use environment::{Environment, LocalScope, Scope};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandler, SharedPrintHandler,
};
pub use value::{
    escape, Builtin, BuiltinFn, Closure, Function, Name, Value, ValueList, VARIADIC_MARKER,
};

