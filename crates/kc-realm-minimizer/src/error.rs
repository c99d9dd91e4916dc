//! Realm minimizer error types.

use std::path::PathBuf;

use thiserror::Error;

/// Realm minimizer error type.
#[derive(Debug, Error)]
pub enum MinimizerError {
    /// Wrong command-line usage.
    #[error("usage error: {0}")]
    Usage(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error on a specific file.
    #[error("IO error on '{}': {source}", .path.display())]
    Io {
        /// File being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The input is not a parseable realm document.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// An entity lacks a required key.
    #[error("schema error: {entity} #{index} has no string '{key}'")]
    Schema {
        /// Kind of entity (client, role, user, or the realm itself).
        entity: &'static str,
        /// Position of the entity in its collection.
        index: usize,
        /// Missing key.
        key: &'static str,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MinimizerError {
    /// Wraps an IO error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a schema error for a missing key.
    #[must_use]
    pub fn schema(entity: &'static str, index: usize, key: &'static str) -> Self {
        Self::Schema { entity, index, key }
    }
}

/// Realm minimizer result type.
pub type MinimizerResult<T> = Result<T, MinimizerError>;
