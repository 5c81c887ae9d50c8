//! Patternbook - Command-line tool for running design pattern demonstrations

use std::process::ExitCode;

use patternbook::cli;

fn main() -> ExitCode {
    cli::run()
}
