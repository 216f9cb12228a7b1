//! Job configuration: schema, manifest loading, CLI types, validation

mod cli;
mod loader;
mod schema;
mod validate;


pub use cli::{
    apply_overrides, parse_args_from, Cli, Command, InitArgs, LaunchArgs, OutputFormat, ShowArgs,
    ValidateArgs,
};
pub use loader::load_spec;
pub use schema::{CorpusConfig, JobSpec, OptimSpec, RunParams, ScheduleSpec, TrainerRef};
pub use validate::validate_spec;
