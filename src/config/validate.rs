//! Opt-in job spec validation
//!
//! The launch path spawns the trainer without any checks; everything here
//! runs only when the user asks for it via `lanzar validate`.

use super::schema::JobSpec;
use crate::error::{LanzarError, Result};

/// Optimizer names the trainer recognizes.
const KNOWN_OPTIMIZERS: &[&str] = &["sgd", "adam", "adamw"];

/// Loss function names the trainer recognizes.
const KNOWN_LOSSES: &[&str] = &["l1", "l2", "huber"];

/// Validate a job spec.
///
/// Checks the dataset/calibration pairing invariant and basic value sanity.
/// Calibration entries may legitimately repeat (one empty-scene recording
/// serving several captures), so duplicates are not flagged.
pub fn validate_spec(spec: &JobSpec) -> Result<()> {
    if spec.corpus.dataset_paths.len() != spec.corpus.calibration_paths.len() {
        return Err(value_error(
            "corpus.calibration_paths",
            format!(
                "{} calibration paths for {} dataset paths",
                spec.corpus.calibration_paths.len(),
                spec.corpus.dataset_paths.len()
            ),
            "provide one calibration path per dataset path, in matching order",
        ));
    }

    if spec.corpus.dataset_paths.is_empty() {
        return Err(value_error(
            "corpus.dataset_paths",
            "no dataset paths given",
            "list at least one capture directory",
        ));
    }

    if spec.corpus.batch_size == 0 {
        return Err(value_error(
            "corpus.batch_size",
            "batch size must be > 0",
            "use a positive batch size such as 16",
        ));
    }

    if spec.run.total_steps == 0 {
        return Err(value_error(
            "run.total_steps",
            "training duration must be > 0 steps",
            "use a positive step count such as 10000",
        ));
    }

    if !(spec.optimizer.lr > 0.0 && spec.optimizer.lr.is_finite()) {
        return Err(value_error(
            "optimizer.lr",
            format!("learning rate must be positive and finite, got {}", spec.optimizer.lr),
            "use a small positive value such as 1e-4",
        ));
    }

    if !KNOWN_OPTIMIZERS.contains(&spec.optimizer.name.to_lowercase().as_str()) {
        return Err(value_error(
            "optimizer.name",
            format!("unknown optimizer '{}'", spec.optimizer.name),
            "supported: SGD, Adam, AdamW",
        ));
    }

    if !(spec.schedule.gamma > 0.0 && spec.schedule.gamma <= 1.0) {
        return Err(value_error(
            "schedule.gamma",
            format!("decay factor must be in (0, 1], got {}", spec.schedule.gamma),
            "use a fractional decay such as 0.5",
        ));
    }

    if !KNOWN_LOSSES.contains(&spec.run.loss_type.to_lowercase().as_str()) {
        return Err(value_error(
            "run.loss_type",
            format!("unknown loss '{}'", spec.run.loss_type),
            "supported: l1, l2, huber",
        ));
    }

    Ok(())
}

fn value_error(field: &str, message: impl Into<String>, suggestion: &str) -> LanzarError {
    LanzarError::ConfigValue {
        field: field.to_string(),
        message: message.into(),
        suggestion: suggestion.to_string(),
    }
}
