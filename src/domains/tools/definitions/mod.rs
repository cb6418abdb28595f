//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod common;
pub mod event_info;
pub mod module_info;
pub mod plugin_template;
pub mod search_exports;

pub use event_info::{GetEventInfoParams, GetEventInfoTool};
pub use module_info::{GetModuleInfoParams, GetModuleInfoTool};
pub use plugin_template::{GeneratePluginTemplateParams, GeneratePluginTemplateTool};
pub use search_exports::{SearchExportsParams, SearchExportsTool};
