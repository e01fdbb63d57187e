//! Output sink for messages the interpreter reports on its own.
//!
//! The loader prints the error of every failing top-level form instead of
//! stopping; where those lines go depends on the host:
//! - the CLI writes them to stdout,
//! - tests capture them in a buffer,
//! - embedders that only want values can silence them.

use std::sync::Arc;

use parking_lot::Mutex;

/// Destination of interpreter-reported output. Enum dispatch, no vtable.
pub enum PrintHandler {
    /// Writes to stdout (default).
    Stdout,
    /// Captures output in memory.
    Buffer(Mutex<String>),
    /// Discards everything.
    Silent,
}

impl PrintHandler {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout => println!("{msg}"),
            Self::Buffer(buffer) => {
                let mut buffer = buffer.lock();
                buffer.push_str(msg);
                buffer.push('\n');
            }
            Self::Silent => {}
        }
    }

    /// Everything captured so far. Empty unless this is a buffer handler.
    pub fn output(&self) -> String {
        match self {
            Self::Buffer(buffer) => buffer.lock().clone(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }
}

/// Shared print handler, cloned into every interpreter that reports through it.
pub type SharedPrintHandler = Arc<PrintHandler>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Stdout)
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Buffer(Mutex::new(String::new())))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Silent)
}
