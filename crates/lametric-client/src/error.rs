//! Error types for the client crate.

use lametric_model::ModelError;
use thiserror::Error;

/// Errors that can occur when pushing to a device.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The device address does not form a valid request URL.
    #[error("invalid device address {host:?}: {reason}")]
    InvalidHostUrl {
        /// Address as given.
        host: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Encoding the payload or decoding the reply failed.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// HTTP request error.
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure reported by a custom [`Transport`](crate::Transport).
    #[error("transport error: {0}")]
    Transport(Box<dyn std::error::Error + Send + Sync>),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
