//! imgmirror CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, run, and map
//! invocation-level errors to exit status 1. For programmatic use, prefer
//! the library API (`imgmirror::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
