//! Prompts domain module.
//!
//! Prompts are static development guides (plugin structure, event
//! handling, command creation) returned verbatim to the client.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual guide definitions (one file per prompt)
//! - `registry.rs` - Central prompt registration
//! - `service.rs` - Prompt service for listing and retrieval

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::{GuidePrompt, PromptDefinition};
pub use error::PromptError;
pub use registry::get_all_prompts;
pub use service::PromptService;
