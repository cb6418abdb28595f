//! Prompt-specific error types.

use thiserror::Error;

/// Failures when looking up a guide.
#[derive(Debug, Error)]
pub enum PromptError {
    /// No guide is registered under this name.
    #[error("Unknown prompt: {0}")]
    NotFound(String),
}

impl PromptError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }
}
