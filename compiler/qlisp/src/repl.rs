//! The interactive prompt.
//!
//! Each line is evaluated as one list, so `+ 1 2` and `(+ 1 2)` are the
//! same input. Errors are printed and the prompt continues.

use qlisp_eval::Interpreter;
use rustyline::error::ReadlineError;

use crate::diagnostics::render_parse_error;

const PROMPT: &str = "qlisp> ";

/// Evaluate one line and return what the prompt prints for it.
pub fn eval_line(interpreter: &mut Interpreter, line: &str, color: bool) -> String {
    match interpreter.eval_line(line) {
        Ok(value) => value.to_string(),
        Err(err) => render_parse_error("<repl>", line, &err, color),
    }
}

/// Read, evaluate and print until end of input.
pub fn run(interpreter: &mut Interpreter) {
    let mut editor = match rustyline::DefaultEditor::new() {
        Ok(editor) => editor,
        Err(err) => {
            eprintln!("error: could not start line editor: {err}");
            return;
        }
    };

    println!("qlisp {}", env!("CARGO_PKG_VERSION"));
    println!("Press Ctrl+D to exit\n");

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line.as_str());
                println!("{}", eval_line(interpreter, &line, true));
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("error: {err}");
                break;
            }
        }
    }
}
