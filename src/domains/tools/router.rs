//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! This module builds the ToolRouter for STDIO/TCP transport by delegating
//! to the tool definitions themselves. Each tool knows how to create its own route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{
    GeneratePluginTemplateTool, GetEventInfoTool, GetModuleInfoTool, SearchExportsTool,
};
use crate::domains::reference::ModuleIndex;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(index: Arc<ModuleIndex>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(GetModuleInfoTool::create_route(index.clone()))
        .with_route(SearchExportsTool::create_route(index.clone()))
        .with_route(GeneratePluginTemplateTool::create_route())
        .with_route(GetEventInfoTool::create_route(index))
}
