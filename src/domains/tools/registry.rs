//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

#[cfg(feature = "http")]
use super::ToolError;
use super::definitions::{
    GeneratePluginTemplateTool, GetEventInfoTool, GetModuleInfoTool, SearchExportsTool,
};
use crate::domains::reference::ModuleIndex;

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    index: Arc<ModuleIndex>,
}

impl ToolRegistry {
    /// Create a new tool registry over the given module index.
    pub fn new(index: Arc<ModuleIndex>) -> Self {
        Self { index }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            GetModuleInfoTool::NAME,
            SearchExportsTool::NAME,
            GeneratePluginTemplateTool::NAME,
            GetEventInfoTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            GetModuleInfoTool::to_tool(),
            SearchExportsTool::to_tool(),
            GeneratePluginTemplateTool::to_tool(),
            GetEventInfoTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let result = match name {
            GetModuleInfoTool::NAME => GetModuleInfoTool::http_handler(arguments, self.index.clone()),
            SearchExportsTool::NAME => SearchExportsTool::http_handler(arguments, self.index.clone()),
            GeneratePluginTemplateTool::NAME => GeneratePluginTemplateTool::http_handler(arguments),
            GetEventInfoTool::NAME => GetEventInfoTool::http_handler(arguments, self.index.clone()),
            _ => {
                warn!("Unknown tool requested: {}", name);
                return Err(ToolError::not_found(name));
            }
        };
        result.map_err(ToolError::invalid_arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_index() -> Arc<ModuleIndex> {
        Arc::new(ModuleIndex::default())
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new(test_index());
        let names = registry.tool_names();
        assert_eq!(
            names,
            vec![
                "get_module_info",
                "search_exports",
                "generate_plugin_template",
                "get_event_info"
            ]
        );
    }

    #[test]
    fn test_get_all_tools_matches_names() {
        let registry = ToolRegistry::new(test_index());
        let tools = ToolRegistry::get_all_tools();
        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert_eq!(names, registry.tool_names());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_template() {
        let registry = ToolRegistry::new(test_index());
        let result = registry
            .call_tool(
                "generate_plugin_template",
                serde_json::json!({ "plugin_name": "Demo" }),
            )
            .unwrap();
        assert_eq!(result["isError"], false);
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_unknown() {
        let registry = ToolRegistry::new(test_index());
        let err = registry.call_tool("unknown", serde_json::json!({})).unwrap_err();
        assert_eq!(err.to_string(), "Unknown tool: unknown");
    }
}
