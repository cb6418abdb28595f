//! Shared helpers for tool definitions.
//!
//! Every tool decodes its arguments and reports failures the same way, so
//! the boundary between the transport and the tool logic lives here.

use rmcp::model::{CallToolResult, Content};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::domains::tools::ToolError;

/// Decode tool arguments into a params struct.
pub fn parse_arguments<P: DeserializeOwned>(arguments: serde_json::Value) -> Result<P, ToolError> {
    let arguments = match arguments {
        serde_json::Value::Null => serde_json::Value::Object(Default::default()),
        other => other,
    };
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Log a tool failure and turn it into an error result for the client.
pub fn error_result(tool: &str, error: &ToolError) -> CallToolResult {
    warn!("Error in tool {}: {}", tool, error);
    CallToolResult::error(vec![Content::text(format!("Error: {}", error))])
}

/// Successful plain-text result.
pub fn text_result(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// JSON shape of a tool result on the HTTP transport.
#[cfg(feature = "http")]
pub fn to_http_value(result: CallToolResult) -> serde_json::Value {
    serde_json::json!({
        "content": result.content,
        "isError": result.is_error.unwrap_or(false)
    })
}

/// Text of the first content item of a result.
#[cfg(test)]
pub fn result_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}
