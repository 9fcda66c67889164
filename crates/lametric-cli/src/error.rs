//! CLI error type.

use std::path::PathBuf;

use lametric_client::ClientError;
use lametric_model::ModelError;
use thiserror::Error;

/// Errors reported by the `lametric` command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Talking to the device failed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Building the notification failed, or the device rejected it.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// A file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// A notification document is not valid YAML for the expected shape.
    #[error("invalid notification document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A notification document is well formed but inconsistent.
    #[error("invalid notification document: {0}")]
    Document(String),

    /// Rendering JSON output failed.
    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
