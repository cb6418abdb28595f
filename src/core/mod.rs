//! Server infrastructure shared by every domain.
//!
//! - `config`: environment-driven settings
//! - `error`: the crate-wide error type
//! - `server`: the rmcp handler owning the module index
//! - `transport`: STDIO, TCP and HTTP front ends

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
