//! Launcher integration tests
//!
//! Validates the end-to-end contract: a no-argument `launch` assembles the
//! exact trainer argument list, the list parses back to the job it came
//! from, and assembly is reproducible.

use lanzar::config::{apply_overrides, load_spec, parse_args_from, Command, JobSpec};
use lanzar::launch::{build_argv, build_invocation};
use std::collections::HashMap;

/// Consume an argv the way the trainer's argument parser does: every element
/// up to the next `--flag` belongs to the preceding flag.
fn parse_back(argv: &[String]) -> HashMap<String, Vec<String>> {
    let mut parsed: HashMap<String, Vec<String>> = HashMap::new();
    let mut current: Option<String> = None;
    for arg in argv {
        if let Some(flag) = arg.strip_prefix("--") {
            current = Some(flag.to_string());
            parsed.entry(flag.to_string()).or_default();
        } else if let Some(flag) = &current {
            parsed.get_mut(flag).unwrap().push(arg.clone());
        }
    }
    parsed
}

#[test]
fn no_argument_launch_resolves_to_builtin_job() {
    let cli = parse_args_from(["lanzar", "launch"]).unwrap();
    let Command::Launch(args) = cli.command else {
        panic!("expected launch command");
    };

    let mut spec = match &args.config {
        Some(path) => load_spec(path).unwrap(),
        None => JobSpec::default(),
    };
    apply_overrides(&mut spec, &args);

    assert_eq!(spec, JobSpec::default());
}

#[test]
fn builtin_argv_parses_back_to_the_job() {
    let parsed = parse_back(&build_argv(&JobSpec::default()));

    assert_eq!(parsed["dataset_paths"].len(), 8);
    assert_eq!(parsed["calibration_paths"].len(), 8);
    assert_eq!(parsed["dataset_paths"].len(), parsed["calibration_paths"].len());

    assert_eq!(parsed["learning_rate"][0].parse::<f64>().unwrap(), 0.0001);
    assert_eq!(parsed["optimizer"], vec!["AdamW"]);
    assert_eq!(parsed["batch_size"], vec!["16"]);
    assert_eq!(parsed["num_workers"], vec!["4"]);
    assert_eq!(parsed["total_steps"], vec!["10000"]);
    assert_eq!(parsed["weight_decay"], vec!["0.01"]);
    assert_eq!(parsed["step_size"], vec!["1000"]);
    assert_eq!(parsed["gamma"], vec!["0.5"]);
    assert_eq!(parsed["save_dir"], vec!["./checkpoints"]);
    assert_eq!(parsed["visualization_stride"], vec!["100"]);
    assert_eq!(parsed["gpus"], vec!["1"]);
    assert_eq!(parsed["log_dir"], vec!["./logs"]);
    assert_eq!(parsed["loss_type"], vec!["l1"]);
}

#[test]
fn repeated_assembly_is_byte_identical() {
    let spec = JobSpec::default();

    let first = build_invocation(&spec);
    let second = build_invocation(&spec);

    assert_eq!(first, second);
    assert_eq!(first.join("\u{0}"), second.join("\u{0}"));
}

#[test]
fn manifest_round_trip_preserves_the_job() {
    let spec = JobSpec::default();
    let yaml = serde_yaml::to_string(&spec).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("job.yaml");
    std::fs::write(&path, yaml).unwrap();

    let loaded = load_spec(&path).unwrap();
    assert_eq!(loaded, spec);
    assert_eq!(build_argv(&loaded), build_argv(&spec));
}
