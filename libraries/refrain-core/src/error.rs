//! Core error types for Refrain

use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Refrain
#[derive(Error, Debug)]
pub enum CoreError {
    /// The configured API base is not a usable absolute URL
    #[error("Invalid API base '{base}': {reason}")]
    InvalidApiBase {
        /// The offending base string
        base: String,
        /// Why it was rejected
        reason: String,
    },

    /// URL construction errors
    #[error(transparent)]
    Url(#[from] url::ParseError),

    /// Serialization errors (catalog payloads)
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Create an invalid API base error
    pub fn invalid_api_base(base: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidApiBase {
            base: base.into(),
            reason: reason.into(),
        }
    }
}
