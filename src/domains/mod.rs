//! Domains module containing business logic organized by bounded contexts.
//!
//! - **reference**: export extraction and the module index
//! - **codegen**: plugin template generation
//! - **tools**: MCP tools over the index and the generator
//! - **prompts**: static development guides
//! - **resources**: raw module sources

pub mod codegen;
pub mod prompts;
pub mod reference;
pub mod resources;
pub mod tools;
