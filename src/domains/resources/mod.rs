//! Resources domain module.
//!
//! Exposes the raw text of every indexed reference module as a readable
//! MCP resource.
//!
//! ## Architecture
//!
//! - `registry.rs` - URI scheme and resource templates
//! - `service.rs` - Resource service for listing and reading

mod error;
mod registry;
mod service;

pub use error::ResourceError;
pub use registry::{MODULE_MIME_TYPE, MODULE_URI_PREFIX, module_from_uri, module_uri};
pub use service::ResourceService;
