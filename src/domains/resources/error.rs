//! Resource-specific error types.

use thiserror::Error;

/// Failures when resolving a module resource URI.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The URI names a module that is not in the index.
    #[error("Module resource not found: {0}")]
    NotFound(String),

    /// The URI is not an `endstone://module/` URI.
    #[error("Not a module resource URI: {0}")]
    InvalidUri(String),
}

impl ResourceError {
    pub fn not_found(uri: impl Into<String>) -> Self {
        Self::NotFound(uri.into())
    }

    pub fn invalid_uri(uri: impl Into<String>) -> Self {
        Self::InvalidUri(uri.into())
    }
}
