//! Error types and exit codes for graphkit
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (bad graph file, node out of range, missing weight)

mod macros;

use thiserror::Error;

use crate::graph::NodeId;

/// Exit codes used by the graphkit binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - bad graph input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graphkit operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("{operation} requires an undirected graph")]
    RequiresUndirected { operation: String },

    // Data errors (exit code 3)
    #[error("node {node} out of range (graph has {node_count} nodes)")]
    NodeOutOfRange { node: NodeId, node_count: usize },

    #[error("no weight for edge ({from}, {to})")]
    MissingWeight { from: NodeId, to: NodeId },

    // Generic failures (exit code 1)
    #[error("priority queue is empty")]
    EmptyQueue,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for a node id outside `[0, node_count)`
    pub fn out_of_range(node: NodeId, node_count: usize) -> Self {
        GraphError::NodeOutOfRange { node, node_count }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an algorithm that only runs on undirected graphs
    pub fn requires_undirected(operation: &str) -> Self {
        GraphError::RequiresUndirected {
            operation: operation.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_)
            | GraphError::UsageError(_)
            | GraphError::InvalidValue { .. }
            | GraphError::RequiresUndirected { .. } => ExitCode::Usage,

            GraphError::NodeOutOfRange { .. }
            | GraphError::MissingWeight { .. }
            | GraphError::Json(_)
            | GraphError::Toml(_) => ExitCode::Data,

            GraphError::EmptyQueue | GraphError::Io(_) | GraphError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::RequiresUndirected { .. } => "requires_undirected",
            GraphError::NodeOutOfRange { .. } => "node_out_of_range",
            GraphError::MissingWeight { .. } => "missing_weight",
            GraphError::EmptyQueue => "empty_queue",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Other(_) => "other",
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

/// Result type alias for graphkit operations
pub type Result<T> = std::result::Result<T, GraphError>;
