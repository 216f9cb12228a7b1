//! Init command implementation
//!
//! Writes the built-in job as an editable YAML manifest, so a variant can be
//! launched with `lanzar launch <manifest>`.

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{InitArgs, JobSpec};
use crate::error::LanzarError;
use std::fs;

pub fn run_init(args: InitArgs, level: LogLevel) -> Result<(), String> {
    if args.output.exists() && !args.force {
        return Err(LanzarError::WouldOverwrite { path: args.output }.to_string());
    }

    let yaml = serde_yaml::to_string(&JobSpec::default())
        .map_err(|e| format!("YAML serialization error: {e}"))?;

    fs::write(&args.output, yaml)
        .map_err(|e| {
            LanzarError::io(format!("writing manifest {}", args.output.display()), e).to_string()
        })?;

    log(
        level,
        LogLevel::Normal,
        &format!("Wrote default job manifest to {}", args.output.display()),
    );

    Ok(())
}
