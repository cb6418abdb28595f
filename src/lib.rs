//! Endstone MCP Server
//!
//! A Model Context Protocol server that answers questions about the
//! Endstone Python plugin API and scaffolds new plugins.
//!
//! At startup the server reads the Endstone reference sources, extracts each
//! module's `__all__` export list and keeps the result in an immutable
//! [`ModuleIndex`](domains::reference::ModuleIndex). Tools, resources and
//! prompts are then served from that index.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the rmcp server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **reference**: export extraction, the module catalog and index, report texts
//!   - **codegen**: plugin template generation
//!   - **tools**: the MCP tools exposed to clients
//!   - **resources**: module sources readable as `endstone://module/{module}`
//!   - **prompts**: static plugin development guides
//!
//! # Example
//!
//! ```rust,no_run
//! use endstone_mcp_server::{Config, McpServer};
//!
//! let config = Config::from_env();
//! let server = McpServer::new(config);
//! println!("{} modules indexed", server.index().len());
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
