//! get-diff: report the files changed by a pull request or push.
//!
//! This is the main entry point for the `get-diff` CLI. It parses arguments,
//! dispatches to the command handler, and maps errors to exit codes.

mod cli;
mod commands;
pub mod classify;
pub mod config;
pub mod context;
pub mod diff;
pub mod error;
pub mod event;
pub mod exit_codes;
pub mod git;
pub mod logging;
pub mod output;
pub mod refs;
pub mod report;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init_tracing();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
