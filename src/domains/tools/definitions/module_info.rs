//! Module info tool definition.
//!
//! Describes one indexed reference module: source file and exports.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::common::{error_result, parse_arguments, text_result};
use crate::domains::reference::{ModuleIndex, report};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the module info tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetModuleInfoParams {
    /// Name of the Endstone module (e.g., 'endstone.event', 'endstone.plugin')
    #[serde(default)]
    pub module_name: Option<String>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Module info tool - reports the exports of one reference module.
pub struct GetModuleInfoTool;

impl GetModuleInfoTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_module_info";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get information about an Endstone module including its exports and documentation";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(module = ?params.module_name))]
    pub fn execute(params: &GetModuleInfoParams, index: &ModuleIndex) -> CallToolResult {
        info!("Module info tool called for: {:?}", params.module_name);
        text_result(report::module_info(index, params.module_name.as_deref()))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        index: Arc<ModuleIndex>,
    ) -> Result<serde_json::Value, String> {
        let result = match parse_arguments::<GetModuleInfoParams>(arguments) {
            Ok(params) => Self::execute(&params, &index),
            Err(e) => error_result(Self::NAME, &e),
        };
        Ok(super::common::to_http_value(result))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetModuleInfoParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(index: Arc<ModuleIndex>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let index = index.clone();
            async move {
                let result = match parse_arguments::<GetModuleInfoParams>(args.into()) {
                    Ok(params) => Self::execute(&params, &index),
                    Err(e) => error_result(Self::NAME, &e),
                };
                Ok::<_, McpError>(result)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::reference::ModuleRecord;
    use crate::domains::tools::definitions::common::result_text;

    fn test_index() -> ModuleIndex {
        ModuleIndex::from_records(
            [(
                "endstone.plugin",
                ModuleRecord::from_content(
                    "reference/endstone/plugin.py",
                    "__all__ = [\n    \"Plugin\",\n    \"PluginLoader\",\n]\n",
                ),
            )],
            "endstone.event",
        )
    }

    #[test]
    fn test_module_info_execute() {
        let params = GetModuleInfoParams {
            module_name: Some("endstone.plugin".to_string()),
        };
        let result = GetModuleInfoTool::execute(&params, &test_index());
        assert!(!result.is_error.unwrap_or(false));

        let text = result_text(&result);
        assert!(text.contains("# endstone.plugin"));
        assert!(text.contains("**Exports:** 2 items"));
        assert!(text.contains("- `PluginLoader`"));
    }

    #[test]
    fn test_module_info_unknown_is_not_an_error() {
        let params = GetModuleInfoParams {
            module_name: Some("nope.module".to_string()),
        };
        let result = GetModuleInfoTool::execute(&params, &test_index());
        assert!(!result.is_error.unwrap_or(false));
        assert!(result_text(&result).contains("Available modules: endstone.plugin"));
    }

    #[test]
    fn test_module_info_missing_argument() {
        let result = GetModuleInfoTool::execute(&GetModuleInfoParams::default(), &test_index());
        assert_eq!(result_text(&result), "Module name is required");
    }

    #[test]
    fn test_to_tool() {
        let tool = GetModuleInfoTool::to_tool();
        assert_eq!(tool.name, "get_module_info");
        assert!(tool.input_schema.contains_key("properties"));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_module_info_http_handler() {
        let args = serde_json::json!({ "module_name": "endstone.plugin" });
        let result = GetModuleInfoTool::http_handler(args, Arc::new(test_index())).unwrap();
        assert_eq!(result["isError"], false);
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_module_info_http_handler_bad_argument() {
        let args = serde_json::json!({ "module_name": 7 });
        let result = GetModuleInfoTool::http_handler(args, Arc::new(test_index())).unwrap();
        assert_eq!(result["isError"], true);
    }
}
