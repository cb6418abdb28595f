//! Event info tool definition.
//!
//! Lists the event types of the event module, or shows a handler example
//! for one of them.

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

/// Parameters for the event info tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetEventInfoParams {
    /// Specific event type to get info about (optional)
    #[serde(default)]
    pub event_type: Option<String>,
}

/// Event info tool - event listing and handler usage examples.
pub struct GetEventInfoTool;

impl GetEventInfoTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_event_info";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get detailed information about Endstone events and event handling";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(event_type = ?params.event_type))]
    pub fn execute(params: &GetEventInfoParams, index: &ModuleIndex) -> CallToolResult {
        info!("Event info tool called for: {:?}", params.event_type);
        text_result(report::event_info(index, params.event_type.as_deref()))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        index: Arc<ModuleIndex>,
    ) -> Result<serde_json::Value, String> {
        let result = match parse_arguments::<GetEventInfoParams>(arguments) {
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
            input_schema: cached_schema_for_type::<GetEventInfoParams>(),
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
                let result = match parse_arguments::<GetEventInfoParams>(args.into()) {
                    Ok(params) => Self::execute(&params, &index),
                    Err(e) => error_result(Self::NAME, &e),
                };
                Ok::<_, McpError>(result)
            }
            .boxed()
        })
    }
}
