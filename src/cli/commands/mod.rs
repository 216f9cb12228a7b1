//! CLI command implementations

mod init;
mod launch;
mod show;
mod validate;

use crate::cli::LogLevel;
use crate::config::{Cli, Command};
use std::process::ExitCode;

/// Execute a CLI command based on the parsed arguments.
///
/// `launch` yields the trainer's own exit status; every other command
/// yields success unless it errors.
pub fn run_command(cli: Cli) -> Result<ExitCode, String> {
    // Configure output based on verbose/quiet flags
    let log_level = if cli.quiet {
        LogLevel::Quiet
    } else if cli.verbose {
        LogLevel::Verbose
    } else {
        LogLevel::Normal
    };

    match cli.command {
        Command::Launch(args) => launch::run_launch(args, log_level),
        Command::Show(args) => show::run_show(args, log_level).map(|()| ExitCode::SUCCESS),
        Command::Validate(args) => {
            validate::run_validate(args, log_level).map(|()| ExitCode::SUCCESS)
        }
        Command::Init(args) => init::run_init(args, log_level).map(|()| ExitCode::SUCCESS),
    }
}
