//! Error types and exit codes for shelfpath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing ontology, unknown node, malformed document)
//!
//! The search core itself never fails: unreachable goals and unknown states
//! are ordinary outcomes. These errors only come from the I/O surface.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the shelfpath binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing ontology, unknown node (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur outside the search core
#[derive(Error, Debug)]
pub enum ShelfpathError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("unknown heuristic: {0} (expected: null, base, taxonomy or distance)")]
    UnknownHeuristic(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("ontology not found: {path:?}")]
    OntologyNotFound { path: PathBuf },

    #[error("invalid ontology in {path:?}: {reason}")]
    InvalidOntology { path: PathBuf, reason: String },

    #[error("node not found: {id}")]
    NodeNotFound { id: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),

    #[error("experiment interrupted after {completed} runs")]
    Interrupted { completed: usize },
}

impl ShelfpathError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        ShelfpathError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        ShelfpathError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        ShelfpathError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ShelfpathError::UnknownFormat(_)
            | ShelfpathError::UnknownHeuristic(_)
            | ShelfpathError::UsageError(_)
            | ShelfpathError::InvalidValue { .. }
            | ShelfpathError::Unsupported { .. } => ExitCode::Usage,

            ShelfpathError::OntologyNotFound { .. }
            | ShelfpathError::InvalidOntology { .. }
            | ShelfpathError::NodeNotFound { .. } => ExitCode::Data,

            ShelfpathError::Io(_)
            | ShelfpathError::Yaml(_)
            | ShelfpathError::Json(_)
            | ShelfpathError::Toml(_)
            | ShelfpathError::FailedOperationWithTarget { .. }
            | ShelfpathError::Other(_)
            | ShelfpathError::Interrupted { .. } => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            ShelfpathError::UnknownFormat(_) => "unknown_format",
            ShelfpathError::UnknownHeuristic(_) => "unknown_heuristic",
            ShelfpathError::UsageError(_) => "usage_error",
            ShelfpathError::InvalidValue { .. } => "invalid_value",
            ShelfpathError::Unsupported { .. } => "unsupported",
            ShelfpathError::OntologyNotFound { .. } => "ontology_not_found",
            ShelfpathError::InvalidOntology { .. } => "invalid_ontology",
            ShelfpathError::NodeNotFound { .. } => "node_not_found",
            ShelfpathError::Io(_) => "io_error",
            ShelfpathError::Yaml(_) => "yaml_error",
            ShelfpathError::Json(_) => "json_error",
            ShelfpathError::Toml(_) => "toml_error",
            ShelfpathError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            ShelfpathError::Other(_) => "other",
            ShelfpathError::Interrupted { .. } => "interrupted",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for shelfpath operations
pub type Result<T> = std::result::Result<T, ShelfpathError>;
