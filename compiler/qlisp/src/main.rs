//! qlisp command-line entry point.

use std::process::ExitCode;

use qlisp::options::print_usage;
use qlisp::{parse_args, Command};

fn main() -> ExitCode {
    qlisp::tracing_setup::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match parse_args(&args) {
        Ok(Command::Run(options)) => qlisp::run(&options),
        Ok(Command::Help) => {
            print_usage();
            ExitCode::SUCCESS
        }
        Ok(Command::Version) => {
            println!("qlisp {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            print_usage();
            ExitCode::FAILURE
        }
    }
}
