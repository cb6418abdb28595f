//! Tool-specific error types.
//!
//! User input problems (missing module name, unknown event...) are not
//! errors: the tools answer them with explanatory text. These variants
//! cover calls that never reach a tool's logic.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    /// No tool is registered under this name.
    #[error("Unknown tool: {0}")]
    NotFound(String),

    /// The arguments do not decode into the tool's params struct.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

impl ToolError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}
