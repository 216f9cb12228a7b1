//! Trainer argument-vector assembly
//!
//! The external trainer consumes a flat flag surface: two variable-length,
//! space-separated path lists (each terminated by the next flag) followed by
//! scalar hyperparameters. [`build_argv`] produces exactly that shape, in a
//! fixed order, from literal spec values only. Two calls on the same spec
//! yield byte-for-byte identical vectors.

use crate::config::JobSpec;
use std::fmt::Display;
use std::path::Path;

/// Build the argument vector handed to the training script.
///
/// Path lists are rendered positionally paired: entry *i* of
/// `--dataset_paths` is calibrated with entry *i* of `--calibration_paths`.
/// No validation happens here; the vector reflects the spec as given.
pub fn build_argv(spec: &JobSpec) -> Vec<String> {
    let mut argv = Vec::with_capacity(
        4 + spec.corpus.dataset_paths.len() + spec.corpus.calibration_paths.len() + 26,
    );

    argv.push("--dataset_paths".to_string());
    argv.extend(spec.corpus.dataset_paths.iter().map(|p| path_arg(p)));

    argv.push("--calibration_paths".to_string());
    argv.extend(spec.corpus.calibration_paths.iter().map(|p| path_arg(p)));

    push_flag(&mut argv, "--learning_rate", spec.optimizer.lr);
    push_flag(&mut argv, "--batch_size", spec.corpus.batch_size);
    push_flag(&mut argv, "--num_workers", spec.corpus.num_workers);
    push_flag(&mut argv, "--total_steps", spec.run.total_steps);
    push_flag(&mut argv, "--weight_decay", spec.optimizer.weight_decay);
    push_flag(&mut argv, "--optimizer", &spec.optimizer.name);
    push_flag(&mut argv, "--step_size", spec.schedule.step_size);
    push_flag(&mut argv, "--gamma", spec.schedule.gamma);
    push_flag(&mut argv, "--save_dir", spec.run.save_dir.display());
    push_flag(&mut argv, "--visualization_stride", spec.run.visualization_stride);
    push_flag(&mut argv, "--gpus", spec.run.gpus);
    push_flag(&mut argv, "--log_dir", spec.run.log_dir.display());
    push_flag(&mut argv, "--loss_type", &spec.run.loss_type);

    argv
}

/// Build the full invocation vector: interpreter, script, then trainer args.
pub fn build_invocation(spec: &JobSpec) -> Vec<String> {
    let mut invocation = vec![
        spec.trainer.python.clone(),
        path_arg(&spec.trainer.script),
    ];
    invocation.extend(build_argv(spec));
    invocation
}

/// Render the invocation as a single display line (for `--dry-run`).
pub fn render_command_line(spec: &JobSpec) -> String {
    build_invocation(spec).join(" ")
}

fn push_flag<T: Display>(argv: &mut Vec<String>, name: &str, value: T) {
    argv.push(name.to_string());
    argv.push(value.to_string());
}

fn path_arg(path: &Path) -> String {
    path.display().to_string()
}
