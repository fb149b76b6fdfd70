//! quill binary entry point
//!
//! Thin wrapper around the library's `run_cli()`.

use std::process::ExitCode;

use anyhow::Result;
use quill_cli::run_cli;

fn main() -> Result<ExitCode> {
    run_cli()
}
