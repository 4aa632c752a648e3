//! Error types and exit codes for traipse
//!
//! Exit codes:
//! - 0: Success (including both game outcomes: goal reached and stuck)
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: World-data error (missing/invalid world definition, bad graph)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the traipse CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// World-data error - missing or invalid world definition (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during traipse operations
#[derive(Error, Debug)]
pub enum TraipseError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // World-data errors (exit code 3)
    #[error("world file not found: {path:?}")]
    WorldFileNotFound { path: PathBuf },

    #[error("invalid world definition in {path:?}: {reason}")]
    InvalidWorldFile { path: PathBuf, reason: String },

    #[error("unknown node: {name}")]
    UnknownNode { name: String },

    #[error("duplicate node name: {name}")]
    DuplicateNode { name: String },

    #[error("node {name} cannot connect to itself")]
    SelfConnection { name: String },

    #[error("negative weight {weight} on connection {from} -> {to}")]
    NegativeWeight { from: String, to: String, weight: i64 },

    #[error("node {name} has more than {max} outgoing connections, which cannot be labelled A-Z")]
    TooManyChoices { name: String, max: usize },

    #[error("start and goal must be distinct nodes (both are {name})")]
    StartIsGoal { name: String },

    #[error("world has no nodes")]
    EmptyWorld,

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl TraipseError {
    /// Map this error to its process exit code
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TraipseError::UnknownFormat(_) | TraipseError::UsageError(_) => ExitCode::Usage,

            TraipseError::WorldFileNotFound { .. }
            | TraipseError::InvalidWorldFile { .. }
            | TraipseError::UnknownNode { .. }
            | TraipseError::DuplicateNode { .. }
            | TraipseError::SelfConnection { .. }
            | TraipseError::NegativeWeight { .. }
            | TraipseError::TooManyChoices { .. }
            | TraipseError::StartIsGoal { .. }
            | TraipseError::EmptyWorld => ExitCode::Data,

            TraipseError::Io(_)
            | TraipseError::Toml(_)
            | TraipseError::Json(_)
            | TraipseError::Other(_) => ExitCode::Failure,
        }
    }

    /// Stable machine-readable error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            TraipseError::UnknownFormat(_) => "unknown_format",
            TraipseError::UsageError(_) => "usage_error",
            TraipseError::WorldFileNotFound { .. } => "world_file_not_found",
            TraipseError::InvalidWorldFile { .. } => "invalid_world_file",
            TraipseError::UnknownNode { .. } => "unknown_node",
            TraipseError::DuplicateNode { .. } => "duplicate_node",
            TraipseError::SelfConnection { .. } => "self_connection",
            TraipseError::NegativeWeight { .. } => "negative_weight",
            TraipseError::TooManyChoices { .. } => "too_many_choices",
            TraipseError::StartIsGoal { .. } => "start_is_goal",
            TraipseError::EmptyWorld => "empty_world",
            TraipseError::Io(_) => "io_error",
            TraipseError::Toml(_) => "toml_error",
            TraipseError::Json(_) => "json_error",
            TraipseError::Other(_) => "other",
        }
    }

    /// Render a structured error envelope for `--format json`
    pub fn to_json(&self) -> String {
        let error_obj = serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        });
        error_obj.to_string()
    }
}

/// Result type alias for traipse operations
pub type Result<T> = std::result::Result<T, TraipseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::Failure), 1);
        assert_eq!(i32::from(ExitCode::Usage), 2);
        assert_eq!(i32::from(ExitCode::Data), 3);
    }

    #[test]
    fn test_construction_errors_are_data_errors() {
        let err = TraipseError::SelfConnection {
            name: "Beach".to_string(),
        };
        assert_eq!(err.exit_code(), ExitCode::Data);

        let err = TraipseError::NegativeWeight {
            from: "Beach".to_string(),
            to: "Jungle".to_string(),
            weight: -2,
        };
        assert_eq!(err.exit_code(), ExitCode::Data);
    }

    #[test]
    fn test_json_envelope_shape() {
        let err = TraipseError::UsageError("bad flag".to_string());
        let json = err.to_json();
        assert!(json.contains("\"type\":\"usage_error\""));
        assert!(json.contains("\"code\":2"));
        assert!(json.contains("bad flag"));
    }
}
