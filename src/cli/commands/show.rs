//! Show command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_spec, JobSpec, OutputFormat, ShowArgs};
use crate::launch::build_invocation;

pub fn run_show(args: ShowArgs, level: LogLevel) -> Result<(), String> {
    let spec = match &args.config {
        Some(path) => load_spec(path).map_err(|e| format!("Config error: {e}"))?,
        None => JobSpec::default(),
    };

    if args.argv {
        for arg in build_invocation(&spec) {
            println!("{arg}");
        }
        return Ok(());
    }

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Normal, "Job Info:");
            println!();
            println!(
                "Trainer: {} {}",
                spec.trainer.python,
                spec.trainer.script.display()
            );
            println!(
                "Corpus: {} datasets, {} calibration recordings",
                spec.corpus.dataset_paths.len(),
                spec.corpus.calibration_paths.len()
            );
            println!(
                "Optimizer: {} (lr={}, weight_decay={})",
                spec.optimizer.name, spec.optimizer.lr, spec.optimizer.weight_decay
            );
            println!(
                "Schedule: decay x{} every {} steps",
                spec.schedule.gamma, spec.schedule.step_size
            );
            println!("Total steps: {}", spec.run.total_steps);
            println!("Loss: {}", spec.run.loss_type);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&spec)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&spec)
                .map_err(|e| format!("YAML serialization error: {e}"))?;
            println!("{yaml}");
        }
    }

    Ok(())
}
