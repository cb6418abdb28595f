//! Plugin template tool definition.
//!
//! Generates a Python plugin skeleton. Does not read the module index.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument, warn};

use super::common::{error_result, parse_arguments, text_result};
use crate::domains::codegen::{generate_plugin_template, supported_features};

/// Parameters for the plugin template tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GeneratePluginTemplateParams {
    /// Name of the plugin
    #[serde(default)]
    pub plugin_name: Option<String>,

    /// List of features to include (e.g., 'commands', 'events')
    #[serde(default)]
    pub features: Vec<String>,
}

impl GeneratePluginTemplateParams {
    /// Requested features the generator does not recognize.
    pub fn unknown_features(&self) -> Vec<&str> {
        self.features
            .iter()
            .map(String::as_str)
            .filter(|f| !supported_features().any(|known| known == *f))
            .collect()
    }
}

/// Plugin template tool - scaffolds a new Endstone plugin.
pub struct GeneratePluginTemplateTool;

impl GeneratePluginTemplateTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "generate_plugin_template";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Generate a basic Endstone plugin template with specified features";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(plugin = ?params.plugin_name))]
    pub fn execute(params: &GeneratePluginTemplateParams) -> CallToolResult {
        info!(
            "Plugin template tool called for {:?} with features {:?}",
            params.plugin_name, params.features
        );
        let unknown = params.unknown_features();
        if !unknown.is_empty() {
            warn!("Ignoring unsupported plugin features: {:?}", unknown);
        }
        text_result(generate_plugin_template(
            params.plugin_name.as_deref(),
            params.features.as_slice(),
        ))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let result = match parse_arguments::<GeneratePluginTemplateParams>(arguments) {
            Ok(params) => Self::execute(&params),
            Err(e) => error_result(Self::NAME, &e),
        };
        Ok(super::common::to_http_value(result))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GeneratePluginTemplateParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let result = match parse_arguments::<GeneratePluginTemplateParams>(args.into()) {
                    Ok(params) => Self::execute(&params),
                    Err(e) => error_result(Self::NAME, &e),
                };
                Ok::<_, McpError>(result)
            }
            .boxed()
        })
    }
}
