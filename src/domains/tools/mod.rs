//! Tools domain module.
//!
//! The four tools clients call: three queries over the reference module
//! index (`get_module_info`, `search_exports`, `get_event_info`) and the
//! plugin scaffold generator (`generate_plugin_template`).
//!
//! Each file in `definitions/` owns one tool: its params struct, its
//! metadata, the shared `execute()` and the two transport adapters
//! (`create_route()` for rmcp, `http_handler()` for HTTP). `router.rs` and
//! `registry.rs` list the same tools in the same order; a new tool must be
//! added to both.

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
