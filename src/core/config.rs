//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (and a `.env` file) or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default directory holding the reference sources.
pub const DEFAULT_REFERENCE_PATH: &str = "reference/endstone";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Reference source location.
    pub reference: ReferenceConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the reference module index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceConfig {
    /// Directory containing the Endstone reference `.py` files.
    pub base_path: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from(DEFAULT_REFERENCE_PATH),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "endstone-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            reference: ReferenceConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Runs before logging is initialized, so nothing here is logged.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_REFERENCE_PATH`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(path) = std::env::var("MCP_REFERENCE_PATH") {
            config.reference.base_path = PathBuf::from(path);
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_reference_path_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_REFERENCE_PATH", "/opt/endstone/reference");
        }
        let config = Config::from_env();
        assert_eq!(
            config.reference.base_path,
            PathBuf::from("/opt/endstone/reference")
        );
        unsafe {
            std::env::remove_var("MCP_REFERENCE_PATH");
        }
    }

    #[test]
    fn test_reference_path_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("MCP_REFERENCE_PATH");
        }
        let config = Config::from_env();
        assert_eq!(
            config.reference.base_path,
            PathBuf::from(DEFAULT_REFERENCE_PATH)
        );
    }

    #[test]
    fn test_server_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "endstone-test");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "endstone-test");
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server.name, "endstone-mcp");
        assert_eq!(config.logging.level, "info");
    }
}
