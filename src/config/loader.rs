//! Load job specs from YAML manifests

use super::schema::JobSpec;
use crate::error::{LanzarError, Result};
use std::fs;
use std::path::Path;

/// Load a job spec from a YAML manifest file.
///
/// A missing file is reported as [`LanzarError::ConfigNotFound`]; malformed
/// YAML as [`LanzarError::ConfigParsing`]. Sections absent from the manifest
/// fall back to the built-in job's values.
pub fn load_spec<P: AsRef<Path>>(path: P) -> Result<JobSpec> {
    let path = path.as_ref();

    let yaml = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LanzarError::ConfigNotFound { path: path.to_path_buf() }
        } else {
            LanzarError::io(format!("reading manifest {}", path.display()), e)
        }
    })?;

    serde_yaml::from_str(&yaml).map_err(|e| LanzarError::ConfigParsing {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
