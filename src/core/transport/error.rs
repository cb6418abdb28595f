//! Transport error types.

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors that end a transport's run loop.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Failed to bind the listening socket.
    #[cfg_attr(not(any(feature = "tcp", feature = "http")), allow(dead_code))]
    #[error("Failed to bind to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The rmcp service could not complete initialization.
    #[error("Server initialization error: {0}")]
    Init(String),

    /// The rmcp service stopped with an error.
    #[error("Service error: {0}")]
    Service(String),

    /// The HTTP server stopped with an error.
    #[cfg(feature = "http")]
    #[error("HTTP error: {0}")]
    Http(String),
}

impl TransportError {
    #[cfg(any(feature = "tcp", feature = "http"))]
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::Bind {
            address: address.into(),
            source,
        }
    }

    pub fn init(msg: impl Into<String>) -> Self {
        Self::Init(msg.into())
    }

    pub fn service(msg: impl Into<String>) -> Self {
        Self::Service(msg.into())
    }

    #[cfg(feature = "http")]
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TransportError::init("handshake failed");
        assert_eq!(err.to_string(), "Server initialization error: handshake failed");

        let err = TransportError::service("connection closed");
        assert_eq!(err.to_string(), "Service error: connection closed");
    }
}
