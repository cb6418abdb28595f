//! Export search tool definition.
//!
//! Case-insensitive substring search across the exports of every indexed
//! module.

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

/// Parameters for the export search tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct SearchExportsParams {
    /// Search term (class name, function name, etc.)
    #[serde(default)]
    pub query: Option<String>,
}

/// Export search tool - finds classes, functions and constants by name.
pub struct SearchExportsTool;

impl SearchExportsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_exports";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Search for specific classes, functions, or constants across Endstone modules";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(query = ?params.query))]
    pub fn execute(params: &SearchExportsParams, index: &ModuleIndex) -> CallToolResult {
        info!("Search exports tool called with query: {:?}", params.query);
        text_result(report::search_exports(index, params.query.as_deref()))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        index: Arc<ModuleIndex>,
    ) -> Result<serde_json::Value, String> {
        let result = match parse_arguments::<SearchExportsParams>(arguments) {
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
            input_schema: cached_schema_for_type::<SearchExportsParams>(),
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
                let result = match parse_arguments::<SearchExportsParams>(args.into()) {
                    Ok(params) => Self::execute(&params, &index),
                    Err(e) => error_result(Self::NAME, &e),
                };
                Ok::<_, McpError>(result)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::reference::ModuleRecord;
    use crate::domains::tools::definitions::common::result_text;

    fn test_index() -> ModuleIndex {
        ModuleIndex::from_records(
            [
                (
                    "endstone.form",
                    ModuleRecord::from_content(
                        "form.py",
                        r#"__all__ = ["ActionForm", "ModalForm", "Dropdown"]"#,
                    ),
                ),
                (
                    "endstone.level",
                    ModuleRecord::from_content("level.py", r#"__all__ = ["Level", "Platform"]"#),
                ),
            ],
            "endstone.event",
        )
    }

    #[test]
    fn test_search_tags_module() {
        let params = SearchExportsParams {
            query: Some("form".to_string()),
        };
        let result = SearchExportsTool::execute(&params, &test_index());
        let text = result_text(&result);

        let lines: Vec<_> = text.lines().filter(|l| l.starts_with("- ")).collect();
        assert_eq!(
            lines,
            vec![
                "- `ActionForm` from `endstone.form`",
                "- `ModalForm` from `endstone.form`",
                "- `Platform` from `endstone.level`",
            ]
        );
    }

    #[test]
    fn test_search_requires_query() {
        let result = SearchExportsTool::execute(&SearchExportsParams::default(), &test_index());
        assert!(!result.is_error.unwrap_or(false));
        assert!(result_text(&result).to_lowercase().contains("required"));
    }

    #[test]
    fn test_search_no_matches() {
        let params = SearchExportsParams {
            query: Some("scoreboard".to_string()),
        };
        let result = SearchExportsTool::execute(&params, &test_index());
        assert_eq!(
            result_text(&result),
            "No exports found matching 'scoreboard'"
        );
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_search_http_handler() {
        let args = serde_json::json!({ "query": "level" });
        let result = SearchExportsTool::http_handler(args, Arc::new(test_index())).unwrap();
        assert_eq!(result["isError"], false);
    }
}
