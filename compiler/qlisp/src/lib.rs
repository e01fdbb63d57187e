//! qlisp CLI library: option parsing, file loading, the interactive prompt
//! and logging setup. `main.rs` only wires these together.

pub mod diagnostics;
pub mod options;
pub mod repl;
pub mod tracing_setup;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use qlisp_eval::Interpreter;

pub use options::{parse_args, Command, Options, OptionsError};

/// Why a file given on the command line could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("could not read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Parse failure, already rendered as a diagnostic.
    #[error("{rendered}")]
    Parse { rendered: String },
}

/// Load `path` into the interpreter's root environment.
///
/// Errors of individual forms are reported by the interpreter and do not
/// fail the load; only unreadable or unparsable files do.
pub fn load_path(interpreter: &mut Interpreter, path: &Path, color: bool) -> Result<(), LoadError> {
    let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let tree = qlisp_parse::parse(&source).map_err(|err| {
        let name = path.display().to_string();
        LoadError::Parse {
            rendered: diagnostics::render_parse_error(&name, &source, &err, color),
        }
    })?;

    tracing::info!(path = %path.display(), "loading");
    let env = interpreter.global().clone();
    interpreter.load_tree(&env, &tree);
    Ok(())
}

/// Run the interpreter as configured: load every file, then start the prompt.
pub fn run(options: &Options) -> ExitCode {
    let mut interpreter = Interpreter::builder()
        .max_call_depth(options.max_call_depth)
        .build();

    let mut failed = false;
    for path in &options.files {
        if let Err(err) = load_path(&mut interpreter, path, true) {
            eprintln!("{err}");
            failed = true;
        }
    }

    if options.repl {
        repl::run(&mut interpreter);
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
