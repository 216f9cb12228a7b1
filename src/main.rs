//! Lanzar CLI
//!
//! Single-command launch entry point for the lanzar library.
//!
//! # Usage
//!
//! ```bash
//! # Launch the built-in training job
//! lanzar launch
//!
//! # Launch with overrides
//! lanzar launch --learning-rate 0.0002 --batch-size 32
//!
//! # Launch a job described by a manifest
//! lanzar launch job.yaml
//!
//! # Print the command without running it
//! lanzar launch --dry-run
//!
//! # Show the effective job spec
//! lanzar show --format yaml
//!
//! # Validate a manifest
//! lanzar validate job.yaml
//! ```

use clap::Parser;
use lanzar::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
