//! Command Line Interface (CLI) layer for imgmirror.
//!
//! Defines argument parsing (`args`), invocation-level errors (`errors`) and
//! the orchestration logic (`runner`) for single-file and directory runs. The
//! runner owns the user-facing output lines; the mirroring itself lives in
//! `imgmirror::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
