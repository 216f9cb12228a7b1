//! CLI argument types - Cli, Command, and per-command argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Lanzar: Training Job Launcher
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "lanzar")]
#[command(version)]
#[command(about = "Launch the CFAR RNN trainer with a fixed dataset/calibration corpus")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Launch the external trainer
    Launch(LaunchArgs),

    /// Show the effective job spec or argument vector
    Show(ShowArgs),

    /// Validate a job spec without launching
    Validate(ValidateArgs),

    /// Write the default job spec as an editable YAML manifest
    Init(InitArgs),
}

/// Arguments for the launch command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct LaunchArgs {
    /// Optional YAML job manifest (built-in job when omitted)
    #[arg(value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the trainer interpreter
    #[arg(long)]
    pub python: Option<String>,

    /// Override the trainer script path
    #[arg(long)]
    pub trainer_script: Option<PathBuf>,

    /// Override learning rate
    #[arg(short, long)]
    pub learning_rate: Option<f64>,

    /// Override batch size
    #[arg(short, long)]
    pub batch_size: Option<usize>,

    /// Override training duration in steps
    #[arg(long)]
    pub total_steps: Option<usize>,

    /// Override checkpoint output directory
    #[arg(long)]
    pub save_dir: Option<PathBuf>,

    /// Override log output directory
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Override accelerator count
    #[arg(long)]
    pub gpus: Option<usize>,

    /// Print the trainer command without spawning it
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the show command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ShowArgs {
    /// Optional YAML job manifest (built-in job when omitted)
    #[arg(value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Print the raw trainer argument vector, one element per line
    #[arg(long)]
    pub argv: bool,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Optional YAML job manifest (built-in job when omitted)
    #[arg(value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Show detailed job summary
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for the init command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InitArgs {
    /// Manifest path to write
    #[arg(value_name = "OUTPUT", default_value = "lanzar.yaml")]
    pub output: PathBuf,

    /// Overwrite an existing manifest
    #[arg(short, long)]
    pub force: bool,
}

/// Output format for the show command
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            _ => Err(format!(
                "Unknown output format: {s}. Valid formats: text, json, yaml"
            )),
        }
    }
}

/// Parse CLI arguments from an iterator (for testing)
pub fn parse_args_from<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line overrides to a JobSpec
pub fn apply_overrides(spec: &mut crate::config::JobSpec, args: &LaunchArgs) {
    if let Some(python) = &args.python {
        spec.trainer.python = python.clone();
    }
    if let Some(script) = &args.trainer_script {
        spec.trainer.script = script.clone();
    }
    if let Some(lr) = args.learning_rate {
        spec.optimizer.lr = lr;
    }
    if let Some(batch_size) = args.batch_size {
        spec.corpus.batch_size = batch_size;
    }
    if let Some(total_steps) = args.total_steps {
        spec.run.total_steps = total_steps;
    }
    if let Some(save_dir) = &args.save_dir {
        spec.run.save_dir = save_dir.clone();
    }
    if let Some(log_dir) = &args.log_dir {
        spec.run.log_dir = log_dir.clone();
    }
    if let Some(gpus) = args.gpus {
        spec.run.gpus = gpus;
    }
}
