//! Model error types.

use thiserror::Error;

/// Errors that can occur while building, encoding or decoding payloads.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// An image icon could not be downscaled or re-encoded.
    #[error("image encoding failed: {0}")]
    ImageEncodingFailed(String),

    /// The payload could not be serialized to JSON.
    #[error("failed to serialize payload: {0}")]
    Serialize(String),

    /// The device reply matched neither the `success` nor the `errors` shape.
    #[error("malformed device response: {0}")]
    Decode(String),

    /// The device answered with a structured `errors` body.
    #[error("device rejected notification: {}", messages.join("; "))]
    DeviceRejected {
        /// Messages reported by the device, in order.
        messages: Vec<String>,
    },

    /// `repeat` was applied to a producer with no frames.
    #[error("cannot repeat a producer that yields no frames")]
    NothingToRepeat,

    /// `repeat` was applied to a producer with more than one frame.
    #[error("repeat expects exactly one frame, got {frames}")]
    RepeatNeedsSingleFrame {
        /// Number of frames the producer yielded.
        frames: usize,
    },

    /// Icon string is not of the form `i<id>` or `a<id>`.
    #[error("unknown icon: {0:?}")]
    UnknownIcon(String),

    /// Sound id is not part of the device catalog.
    #[error("unknown sound: {0:?}")]
    UnknownSound(String),

    /// Unknown priority name.
    #[error("unknown priority: {0:?}")]
    UnknownPriority(String),

    /// Unknown icon type name.
    #[error("unknown icon type: {0:?}")]
    UnknownIconType(String),
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
