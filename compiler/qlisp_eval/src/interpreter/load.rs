//! Evaluating source text and files.

use std::path::Path;

use qlisp_ir::SyntaxNode;
use qlisp_parse::ParseError;

use crate::environment::Environment;
use crate::errors::parse_failure;
use crate::reader;
use crate::value::Value;

use super::Interpreter;

impl Interpreter {
    /// Parse `source` and load it like [`Interpreter::load_tree`].
    ///
    /// Returns `()`, or a `ParseFailure` error if the source does not parse.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
    pub fn load_source(&mut self, env: &Environment, source: &str) -> Value {
        match qlisp_parse::parse(source) {
            Ok(tree) => self.load_tree(env, &tree),
            Err(err) => Value::from(parse_failure(format!("could not load library: {err}"))),
        }
    }

    /// Evaluate the top-level forms of a parsed program in order in `env`.
    ///
    /// A form that evaluates to an error is reported through the print
    /// handler and loading moves on to the next form. Returns `()`.
    pub fn load_tree(&mut self, env: &Environment, tree: &SyntaxNode) -> Value {
        for form in reader::read_forms(tree) {
            let result = self.evaluate(env, form);
            if let Value::Error(err) = &result {
                tracing::warn!(error = %err, "form failed while loading");
                self.print_handler.println(&result.to_string());
            }
        }
        Value::empty()
    }

    /// Read `path` and load it like [`Interpreter::load_source`].
    #[tracing::instrument(level = "debug", skip(self, env))]
    pub fn load_file(&mut self, env: &Environment, path: &Path) -> Value {
        match std::fs::read_to_string(path) {
            Ok(source) => self.load_source(env, &source),
            Err(err) => Value::from(parse_failure(format!(
                "could not load library '{}': {err}",
                path.display()
            ))),
        }
    }

    /// Parse one line of input and evaluate it as a single list in the root
    /// environment, the way the REPL treats a line.
    pub fn eval_line(&mut self, line: &str) -> Result<Value, ParseError> {
        let tree = qlisp_parse::parse(line)?;
        Ok(self.eval(reader::read(&tree)))
    }
}
