//! Unified error handling for rosmodel
//!
//! A single error type for the whole tool, so every layer reports failures
//! the same way and the CLI can map them to user-facing messages.

use thiserror::Error;

/// Main error type for rosmodel operations
#[derive(Debug, Error)]
pub enum ModelError {
    /// I/O related errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The requested node has no live match in the graph
    #[error("Unable to find node '{0}'")]
    NodeNotFound(String),

    /// Graph backend errors (unreadable graph directory, malformed records)
    #[error("Graph error: {0}")]
    Graph(String),

    /// Parameter service errors
    #[error("Parameter error: {0}")]
    Parameter(String),

    /// Template registration or rendering errors
    #[error("Render error: {0}")]
    Render(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/Deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience type alias for Results using ModelError
pub type ModelResult<T> = std::result::Result<T, ModelError>;

/// Short alias — `Result<T>` is equivalent to `ModelResult<T>`
pub type Result<T> = ModelResult<T>;

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::Serialization(err.to_string())
    }
}

// Helper methods
impl ModelError {
    /// Create a graph backend error with a custom message
    pub fn graph<S: Into<String>>(msg: S) -> Self {
        ModelError::Graph(msg.into())
    }

    /// Create a parameter service error
    pub fn parameter<S: Into<String>>(msg: S) -> Self {
        ModelError::Parameter(msg.into())
    }

    /// Create a render error
    pub fn render<S: Into<String>>(msg: S) -> Self {
        ModelError::Render(msg.into())
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ModelError::Config(msg.into())
    }
}
