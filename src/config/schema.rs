//! Job spec schema for the training launcher
//!
//! A [`JobSpec`] describes one invocation of the external RNN training
//! program: which interpreter and script to run, which dataset captures to
//! train on, which calibration recordings pair with them, and the fixed
//! hyperparameter set handed through on the command line.
//!
//! `JobSpec::default()` is the job this launcher exists to run. Every field
//! is a literal; nothing is derived from the environment, so two default
//! specs are always identical.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete specification of one training launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JobSpec {
    /// External trainer program reference
    pub trainer: TrainerRef,

    /// Dataset/calibration corpus and loading options
    pub corpus: CorpusConfig,

    /// Optimizer configuration
    pub optimizer: OptimSpec,

    /// Learning-rate schedule configuration
    pub schedule: ScheduleSpec,

    /// Run duration, loss, and output locations
    pub run: RunParams,
}

/// Reference to the external training program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerRef {
    /// Interpreter used to run the trainer
    pub python: String,

    /// Path to the training script
    pub script: PathBuf,
}

impl Default for TrainerRef {
    fn default() -> Self {
        Self {
            python: "python".to_string(),
            script: PathBuf::from("rnn_train.py"),
        }
    }
}

/// Dataset captures, their paired calibration recordings, and loading hints.
///
/// The two path lists are positionally paired: entry *i* of
/// `dataset_paths` is calibrated with entry *i* of `calibration_paths`.
/// Calibration entries may repeat; one empty-scene recording can serve
/// several captures of the same scene. The launch path never checks the
/// pairing; `lanzar validate` reports it on request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Training data capture directories, in order
    pub dataset_paths: Vec<PathBuf>,

    /// Calibration recording directories, paired by position
    pub calibration_paths: Vec<PathBuf>,

    /// Samples per training step
    pub batch_size: usize,

    /// Data-loading parallelism hint
    pub num_workers: usize,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            dataset_paths: default_dataset_paths(),
            calibration_paths: default_calibration_paths(),
            batch_size: 16,
            num_workers: 4,
        }
    }
}

/// Optimizer specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimSpec {
    /// Optimizer name as understood by the trainer (e.g. "AdamW")
    pub name: String,

    /// Learning rate
    pub lr: f64,

    /// Weight decay (decoupled L2 regularization)
    pub weight_decay: f64,
}

impl Default for OptimSpec {
    fn default() -> Self {
        Self {
            name: "AdamW".to_string(),
            lr: 1e-4,
            weight_decay: 1e-2,
        }
    }
}

/// Step-decay learning-rate schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleSpec {
    /// Decay the learning rate every `step_size` steps
    pub step_size: usize,

    /// Multiplicative decay factor
    pub gamma: f64,
}

impl Default for ScheduleSpec {
    fn default() -> Self {
        Self { step_size: 1000, gamma: 0.5 }
    }
}

/// Run duration, loss selection, and output locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunParams {
    /// Training duration in steps
    pub total_steps: usize,

    /// Loss function name as understood by the trainer
    pub loss_type: String,

    /// Checkpoint output directory (created by the trainer)
    pub save_dir: PathBuf,

    /// Log output directory (created by the trainer)
    pub log_dir: PathBuf,

    /// Steps between visualization/logging events
    pub visualization_stride: usize,

    /// Accelerator count requested
    pub gpus: usize,
}

impl Default for RunParams {
    fn default() -> Self {
        Self {
            total_steps: 10_000,
            loss_type: "l1".to_string(),
            save_dir: PathBuf::from("./checkpoints"),
            log_dir: PathBuf::from("./logs"),
            visualization_stride: 100,
            gpus: 1,
        }
    }
}

/// The eight capture directories of the training corpus, in order.
fn default_dataset_paths() -> Vec<PathBuf> {
    [
        "/home/lucayu/lss-cfar/dataset/2023-10-26_lab_single_walk",
        "/home/lucayu/lss-cfar/dataset/2023-10-26_lab_double_walk",
        "/home/lucayu/lss-cfar/dataset/2023-10-27_hallway_single_walk",
        "/home/lucayu/lss-cfar/dataset/2023-10-27_hallway_double_walk",
        "/home/lucayu/lss-cfar/dataset/2023-11-02_parking_single_walk",
        "/home/lucayu/lss-cfar/dataset/2023-11-02_parking_double_walk",
        "/home/lucayu/lss-cfar/dataset/2023-11-03_stairwell_single_walk",
        "/home/lucayu/lss-cfar/dataset/2023-11-03_stairwell_double_walk",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

/// The paired calibration recordings. Each empty-scene recording serves the
/// two walks captured in that scene, so consecutive entries repeat.
fn default_calibration_paths() -> Vec<PathBuf> {
    [
        "/home/lucayu/lss-cfar/calibration/2023-10-26_lab_empty",
        "/home/lucayu/lss-cfar/calibration/2023-10-26_lab_empty",
        "/home/lucayu/lss-cfar/calibration/2023-10-27_hallway_empty",
        "/home/lucayu/lss-cfar/calibration/2023-10-27_hallway_empty",
        "/home/lucayu/lss-cfar/calibration/2023-11-02_parking_empty",
        "/home/lucayu/lss-cfar/calibration/2023-11-02_parking_empty",
        "/home/lucayu/lss-cfar/calibration/2023-11-03_stairwell_empty",
        "/home/lucayu/lss-cfar/calibration/2023-11-03_stairwell_empty",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_corpus_has_eight_paired_entries() {
        let spec = JobSpec::default();
        assert_eq!(spec.corpus.dataset_paths.len(), 8);
        assert_eq!(
            spec.corpus.dataset_paths.len(),
            spec.corpus.calibration_paths.len()
        );
    }

    #[test]
    fn test_default_corpus_order_is_literal() {
        let spec = JobSpec::default();
        assert_eq!(
            spec.corpus.dataset_paths[0],
            PathBuf::from("/home/lucayu/lss-cfar/dataset/2023-10-26_lab_single_walk")
        );
        assert_eq!(
            spec.corpus.dataset_paths[7],
            PathBuf::from("/home/lucayu/lss-cfar/dataset/2023-11-03_stairwell_double_walk")
        );
    }

    #[test]
    fn test_calibration_repeats_are_preserved() {
        let spec = JobSpec::default();
        // One empty-scene recording per scene, shared by both walks.
        assert_eq!(
            spec.corpus.calibration_paths[0],
            spec.corpus.calibration_paths[1]
        );
        assert_eq!(
            spec.corpus.calibration_paths[6],
            spec.corpus.calibration_paths[7]
        );
        assert_ne!(
            spec.corpus.calibration_paths[1],
            spec.corpus.calibration_paths[2]
        );
    }

    #[test]
    fn test_default_hyperparameters_are_literal() {
        let spec = JobSpec::default();
        assert_eq!(spec.optimizer.name, "AdamW");
        assert_eq!(spec.optimizer.lr, 1e-4);
        assert_eq!(spec.optimizer.weight_decay, 1e-2);
        assert_eq!(spec.corpus.batch_size, 16);
        assert_eq!(spec.corpus.num_workers, 4);
        assert_eq!(spec.schedule.step_size, 1000);
        assert_eq!(spec.schedule.gamma, 0.5);
        assert_eq!(spec.run.total_steps, 10_000);
        assert_eq!(spec.run.loss_type, "l1");
        assert_eq!(spec.run.save_dir, PathBuf::from("./checkpoints"));
        assert_eq!(spec.run.log_dir, PathBuf::from("./logs"));
        assert_eq!(spec.run.visualization_stride, 100);
        assert_eq!(spec.run.gpus, 1);
    }

    #[test]
    fn test_yaml_round_trip_is_identity() {
        let spec = JobSpec::default();
        let yaml = serde_yaml::to_string(&spec).unwrap();
        let back: JobSpec = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(spec, back);
    }

    #[test]
    fn test_deserialize_partial_manifest_fills_defaults() {
        let yaml = r"
optimizer:
  lr: 0.0003
";
        let spec: JobSpec = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(spec.optimizer.lr, 3e-4);
        assert_eq!(spec.optimizer.name, "AdamW");
        assert_eq!(spec.corpus.dataset_paths.len(), 8);
        assert_eq!(spec.trainer.python, "python");
    }
}
