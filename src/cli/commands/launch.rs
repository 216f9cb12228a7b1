//! Launch command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{apply_overrides, load_spec, JobSpec, LaunchArgs};
use crate::launch::{render_command_line, spawn_trainer};
use std::process::ExitCode;

pub fn run_launch(args: LaunchArgs, level: LogLevel) -> Result<ExitCode, String> {
    // Built-in job unless a manifest is given
    let mut spec = match &args.config {
        Some(path) => load_spec(path).map_err(|e| format!("Config error: {e}"))?,
        None => JobSpec::default(),
    };

    // Apply command-line overrides
    apply_overrides(&mut spec, &args);

    log(
        level,
        LogLevel::Normal,
        &format!(
            "Lanzar: launching {} {}",
            spec.trainer.python,
            spec.trainer.script.display()
        ),
    );
    log(
        level,
        LogLevel::Verbose,
        &format!("  Datasets: {}", spec.corpus.dataset_paths.len()),
    );
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "  Optimizer: {} (lr={})",
            spec.optimizer.name, spec.optimizer.lr
        ),
    );
    log(
        level,
        LogLevel::Verbose,
        &format!("  Total steps: {}", spec.run.total_steps),
    );

    if args.dry_run {
        println!("{}", render_command_line(&spec));
        return Ok(ExitCode::SUCCESS);
    }

    // The trainer's status is our status, untranslated.
    let status = spawn_trainer(&spec).map_err(|e| format!("Launch error: {e}"))?;

    match status.code() {
        Some(code) => {
            log(
                level,
                LogLevel::Verbose,
                &format!("Trainer exited with status {code}"),
            );
            Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
        }
        None => Err("Trainer terminated by signal".to_string()),
    }
}
