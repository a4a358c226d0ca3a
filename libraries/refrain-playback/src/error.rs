//! Error types for the playback transport

use thiserror::Error;

/// Playback transport errors
#[derive(Debug, Error)]
pub enum TransportError {
    /// Audio resource command failed
    #[error("Audio resource error: {0}")]
    Resource(String),

    /// Invalid seek position
    #[error("Invalid seek position: {0:?}")]
    InvalidSeekPosition(std::time::Duration),

    /// Stream source could not be resolved
    #[error("Source resolution error: {0}")]
    Source(#[from] refrain_core::CoreError),
}

/// Result type for transport operations
pub type Result<T> = std::result::Result<T, TransportError>;
