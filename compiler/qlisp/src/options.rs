//! Command-line options, parsed by hand.

use std::path::PathBuf;

/// What the command line asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run(Options),
    Help,
    Version,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Start the interactive prompt after loading files.
    pub repl: bool,
    /// Nested closure application limit; `None` is unlimited.
    pub max_call_depth: Option<usize>,
    /// Files to load, in order.
    pub files: Vec<PathBuf>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            repl: true,
            max_call_depth: None,
            files: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("invalid call depth '{0}': expected a positive integer")]
    InvalidDepth(String),
}

/// Parse arguments (program name excluded).
///
/// `--help` and `--version` win over everything else on the line.
pub fn parse_args(args: &[String]) -> Result<Command, OptionsError> {
    let mut options = Options::default();

    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--no-repl" => options.repl = false,
            _ => {
                if let Some(depth) = arg.strip_prefix("--max-depth=") {
                    options.max_call_depth = Some(parse_depth(depth)?);
                } else if arg.starts_with('-') && arg != "-" {
                    return Err(OptionsError::UnknownOption(arg.clone()));
                } else {
                    options.files.push(PathBuf::from(arg));
                }
            }
        }
    }

    Ok(Command::Run(options))
}

fn parse_depth(text: &str) -> Result<usize, OptionsError> {
    match text.parse::<usize>() {
        Ok(depth) if depth > 0 => Ok(depth),
        _ => Err(OptionsError::InvalidDepth(text.to_string())),
    }
}

pub fn print_usage() {
    eprintln!("Usage: qlisp [options] [FILE]...");
    eprintln!();
    eprintln!("Loads each FILE in order, then starts the interactive prompt.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --no-repl          Exit after loading files");
    eprintln!("  --max-depth=<n>    Limit nested function calls to n");
    eprintln!("  -h, --help         Show this help");
    eprintln!("  -V, --version      Show version");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QLISP_LOG          Log filter (falls back to RUST_LOG), e.g. qlisp_eval=debug");
}
