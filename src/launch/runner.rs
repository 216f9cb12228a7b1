//! Trainer process spawning
//!
//! One synchronous spawn, then wait. The trainer's exit status is surfaced
//! untranslated; a missing interpreter fails immediately through the spawn
//! error. No retry, no validation, no recovery.

use super::argv::build_argv;
use crate::config::JobSpec;
use crate::error::{LanzarError, Result};
use std::process::{Command, ExitStatus};

/// Spawn the external trainer and wait for it to exit.
pub fn spawn_trainer(spec: &JobSpec) -> Result<ExitStatus> {
    Command::new(&spec.trainer.python)
        .arg(&spec.trainer.script)
        .args(build_argv(spec))
        .status()
        .map_err(|e| LanzarError::spawn(&spec.trainer.python, e))
}
