//! Lanzar: configuration launcher for CFAR RNN training jobs.
//!
//! This library provides the CLI parsing, job configuration schema and
//! validation, and trainer invocation used by the `lanzar` binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod launch;
