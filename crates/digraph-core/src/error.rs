//! Error types and exit codes for digraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Graph error (vertex out of range, missing edge, empty graph)

mod macros;

use thiserror::Error;

use crate::graph::types::Vertex;

/// Process exit codes for the digraph CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Graph error - a precondition on the graph was violated (3)
    Graph = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during digraph operations
#[derive(Error, Debug)]
pub enum DigraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Graph precondition violations (exit code 3)
    #[error("a graph needs at least one vertex")]
    EmptyGraph,

    #[error("vertex {vertex} out of range (expected 1..={vertex_count})")]
    VertexOutOfRange { vertex: Vertex, vertex_count: usize },

    #[error("no edge from {from} to {to}")]
    EdgeNotFound { from: Vertex, to: Vertex },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl DigraphError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        DigraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a vertex outside `1..=vertex_count`
    pub fn vertex_out_of_range(vertex: Vertex, vertex_count: usize) -> Self {
        DigraphError::VertexOutOfRange {
            vertex,
            vertex_count,
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            DigraphError::UnknownFormat(_)
            | DigraphError::UsageError(_)
            | DigraphError::InvalidValue { .. } => ExitCode::Usage,

            DigraphError::EmptyGraph
            | DigraphError::VertexOutOfRange { .. }
            | DigraphError::EdgeNotFound { .. } => ExitCode::Graph,

            DigraphError::Io(_) | DigraphError::Json(_) | DigraphError::Toml(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            DigraphError::UnknownFormat(_) => "unknown_format",
            DigraphError::UsageError(_) => "usage_error",
            DigraphError::InvalidValue { .. } => "invalid_value",
            DigraphError::EmptyGraph => "empty_graph",
            DigraphError::VertexOutOfRange { .. } => "vertex_out_of_range",
            DigraphError::EdgeNotFound { .. } => "edge_not_found",
            DigraphError::Io(_) => "io_error",
            DigraphError::Json(_) => "json_error",
            DigraphError::Toml(_) => "toml_error",
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

/// Result type alias for digraph operations
pub type Result<T> = std::result::Result<T, DigraphError>;
