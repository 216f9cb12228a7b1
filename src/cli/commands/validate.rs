//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_spec, validate_spec, JobSpec, ValidateArgs};

/// Format trainer information as a string
pub fn format_trainer_info(spec: &JobSpec) -> String {
    format!(
        "  Interpreter: {}\n  Script: {}",
        spec.trainer.python,
        spec.trainer.script.display()
    )
}

/// Format corpus configuration as a string
pub fn format_corpus_info(spec: &JobSpec) -> String {
    let mut lines = vec![format!(
        "  Corpus: {} capture/calibration pairs",
        spec.corpus.dataset_paths.len()
    )];
    for (dataset, calibration) in spec
        .corpus
        .dataset_paths
        .iter()
        .zip(&spec.corpus.calibration_paths)
    {
        lines.push(format!(
            "    {} <- {}",
            dataset.display(),
            calibration.display()
        ));
    }
    lines.push(format!("  Batch size: {}", spec.corpus.batch_size));
    lines.push(format!("  Workers: {}", spec.corpus.num_workers));
    lines.join("\n")
}

/// Format optimizer configuration as a string
pub fn format_optimizer_info(spec: &JobSpec) -> String {
    format!(
        "  Optimizer: {}\n  Learning rate: {}\n  Weight decay: {}",
        spec.optimizer.name, spec.optimizer.lr, spec.optimizer.weight_decay
    )
}

/// Format schedule configuration as a string
pub fn format_schedule_info(spec: &JobSpec) -> String {
    format!(
        "  LR decay: x{} every {} steps",
        spec.schedule.gamma, spec.schedule.step_size
    )
}

/// Format run parameters as a string
pub fn format_run_info(spec: &JobSpec) -> String {
    [
        format!("  Total steps: {}", spec.run.total_steps),
        format!("  Loss: {}", spec.run.loss_type),
        format!("  Checkpoints: {}", spec.run.save_dir.display()),
        format!("  Logs: {}", spec.run.log_dir.display()),
        format!("  Visualization stride: {}", spec.run.visualization_stride),
        format!("  GPUs: {}", spec.run.gpus),
    ]
    .join("\n")
}

/// Print detailed job summary
pub fn print_detailed_summary(spec: &JobSpec) {
    println!();
    println!("Job Summary:");
    println!("{}", format_trainer_info(spec));
    println!();
    println!("{}", format_corpus_info(spec));
    println!();
    println!("{}", format_optimizer_info(spec));
    println!();
    println!("{}", format_schedule_info(spec));
    println!();
    println!("{}", format_run_info(spec));
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    let spec = match &args.config {
        Some(path) => {
            log(
                level,
                LogLevel::Normal,
                &format!("Validating manifest: {}", path.display()),
            );
            load_spec(path).map_err(|e| format!("Config error: {e}"))?
        }
        None => {
            log(level, LogLevel::Normal, "Validating built-in job");
            JobSpec::default()
        }
    };

    validate_spec(&spec).map_err(|e| format!("Validation failed: {e}"))?;

    log(level, LogLevel::Normal, "Job spec is valid");

    if args.detailed {
        print_detailed_summary(&spec);
    }

    Ok(())
}
