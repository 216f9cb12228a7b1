//! Error types with actionable diagnostics.
//!
//! All errors include contextual information to help users resolve issues
//! without needing to consult external documentation. The launch path itself
//! performs no validation; these errors cover manifest loading, manifest
//! writing, and the spawn boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for lanzar operations.
pub type Result<T> = std::result::Result<T, LanzarError>;

/// Errors that can occur in the lanzar CLI.
#[derive(Error, Debug)]
pub enum LanzarError {
    /// Job manifest not found at expected path.
    #[error("Job manifest not found: {path}\n  → Run `lanzar init` to write the default manifest, or check the path")]
    ConfigNotFound { path: PathBuf },

    /// Job manifest has invalid syntax.
    #[error("Invalid manifest syntax in {path}:\n  {message}\n  → Check YAML syntax at the indicated line")]
    ConfigParsing { path: PathBuf, message: String },

    /// Job spec value is invalid.
    #[error("Invalid job value for '{field}': {message}\n  → {suggestion}")]
    ConfigValue { field: String, message: String, suggestion: String },

    /// Refusing to overwrite an existing file.
    #[error("Refusing to overwrite existing file: {path}\n  → Pass --force to overwrite")]
    WouldOverwrite { path: PathBuf },

    /// Trainer process could not be spawned.
    #[error("Failed to spawn trainer '{program}': {source}\n  → Check that the interpreter is installed and on PATH")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Serialization/deserialization error.
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl LanzarError {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }

    /// Create a spawn error for the given trainer program.
    pub fn spawn(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn { program: program.into(), source }
    }

    /// Check if this error is user-recoverable.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. }
                | Self::ConfigParsing { .. }
                | Self::ConfigValue { .. }
                | Self::WouldOverwrite { .. }
                | Self::Spawn { .. }
        )
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigNotFound { .. } => "E001",
            Self::ConfigParsing { .. } => "E002",
            Self::ConfigValue { .. } => "E003",
            Self::WouldOverwrite { .. } => "E004",
            Self::Spawn { .. } => "E010",
            Self::Io { .. } => "E050",
            Self::Serialization { .. } => "E051",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all_errors() -> Vec<LanzarError> {
        vec![
            LanzarError::ConfigNotFound { path: "job.yaml".into() },
            LanzarError::ConfigParsing { path: "job.yaml".into(), message: "bad".into() },
            LanzarError::ConfigValue {
                field: "gamma".into(),
                message: "out of range".into(),
                suggestion: "use a value in (0, 1]".into(),
            },
            LanzarError::WouldOverwrite { path: "job.yaml".into() },
            LanzarError::spawn("python", std::io::Error::from(std::io::ErrorKind::NotFound)),
            LanzarError::io("reading manifest", std::io::Error::from(std::io::ErrorKind::Other)),
            LanzarError::Serialization { message: "bad".into() },
        ]
    }

    #[test]
    fn test_error_codes_are_unique() {
        let codes: HashSet<&str> = all_errors().iter().map(LanzarError::code).collect();
        assert_eq!(codes.len(), all_errors().len());
    }

    #[test]
    fn test_user_error_classification() {
        let spawn = LanzarError::spawn("python", std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(spawn.is_user_error());

        let io = LanzarError::io("ctx", std::io::Error::from(std::io::ErrorKind::Other));
        assert!(!io.is_user_error());
    }

    #[test]
    fn test_spawn_error_names_program() {
        let e = LanzarError::spawn("python", std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(e.to_string().contains("python"));
    }
}
