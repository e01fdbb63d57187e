//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use crate::environment::Environment;
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::primitives;

use super::Interpreter;

/// Builder for creating Interpreter instances.
///
/// Defaults: fresh root environment with the standard primitives, loader
/// reports to stdout, no call-depth limit.
pub struct InterpreterBuilder {
    env: Option<Environment>,
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: Option<usize>,
    with_primitives: bool,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self {
            env: None,
            print_handler: None,
            max_call_depth: None,
            with_primitives: true,
        }
    }

    /// Use an existing root environment instead of a fresh one.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Set where loader error reports go.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Limit nested closure applications. `None` means unlimited.
    #[must_use]
    pub fn max_call_depth(mut self, depth: Option<usize>) -> Self {
        self.max_call_depth = depth;
        self
    }

    /// Whether to install the standard primitives into the root environment.
    #[must_use]
    pub fn with_primitives(mut self, install: bool) -> Self {
        self.with_primitives = install;
        self
    }

    pub fn build(self) -> Interpreter {
        let global = self.env.unwrap_or_default();
        if self.with_primitives {
            primitives::install(&global);
        }
        tracing::debug!(
            bindings = global.len(),
            max_call_depth = ?self.max_call_depth,
            "interpreter ready"
        );
        Interpreter {
            global,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            max_call_depth: self.max_call_depth,
            call_depth: 0,
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
