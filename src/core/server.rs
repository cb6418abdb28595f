//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to domain-specific services.
//!
//! The reference module index is built exactly once, when the server is
//! constructed, and shared read-only with every tool, resource and HTTP
//! handler through an `Arc`.
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! The ToolRouter is built in `domains/tools/router.rs`.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result as CoreResult;
use crate::domains::{
    prompts::PromptService,
    reference::{ModuleCatalog, ModuleIndex},
    resources::ResourceService,
    tools::{ToolRegistry, build_tool_router},
};

/// Instructions reported to clients on initialization.
pub const INSTRUCTIONS: &str = "Endstone development assistant. Use get_module_info and \
    search_exports to explore the Endstone Python API, get_event_info to list events and \
    handler examples, and generate_plugin_template to scaffold a plugin.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and coordinates
/// between different domain services to handle MCP protocol messages.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Reference module index, immutable after construction.
    index: Arc<ModuleIndex>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Service for handling prompt-related requests.
    prompt_service: Arc<PromptService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server, indexing the Endstone reference sources
    /// found under the configured reference path.
    pub fn new(config: Config) -> Self {
        let index = ModuleIndex::build(&ModuleCatalog::endstone(), &config.reference.base_path);
        Self::with_index(config, index)
    }

    /// Create a new MCP server around an already-built index.
    pub fn with_index(config: Config, index: ModuleIndex) -> Self {
        let config = Arc::new(config);
        let index = Arc::new(index);

        let resource_service = Arc::new(ResourceService::new(index.clone()));
        let prompt_service = Arc::new(PromptService::new());

        Self {
            tool_router: build_tool_router::<Self>(index.clone()),
            config,
            index,
            resource_service,
            prompt_service,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the reference module index.
    pub fn index(&self) -> &Arc<ModuleIndex> {
        &self.index
    }

    fn tools_result(&self) -> ListToolsResult {
        ListToolsResult {
            tools: ToolRegistry::get_all_tools(),
            next_cursor: None,
            meta: None,
        }
    }

    async fn resources_result(&self) -> ListResourcesResult {
        ListResourcesResult {
            resources: self.resource_service.list_resources().await,
            next_cursor: None,
            meta: None,
        }
    }

    async fn resource_templates_result(&self) -> ListResourceTemplatesResult {
        ListResourceTemplatesResult {
            resource_templates: self.resource_service.list_resource_templates().await,
            next_cursor: None,
            meta: None,
        }
    }

    async fn prompts_result(&self) -> ListPromptsResult {
        ListPromptsResult {
            prompts: self.prompt_service.list_prompts().await,
            next_cursor: None,
            meta: None,
        }
    }

    // JSON views of the same results, for the HTTP transport.

    /// `tools/list` result, tools in registration order.
    pub fn list_tools(&self) -> CoreResult<serde_json::Value> {
        Ok(serde_json::to_value(self.tools_result())?)
    }

    /// `tools/call` result for the named tool.
    #[cfg(feature = "http")]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> CoreResult<serde_json::Value> {
        let registry = ToolRegistry::new(self.index.clone());
        Ok(registry.call_tool(name, arguments)?)
    }

    /// `resources/list` result.
    pub async fn list_resources(&self) -> CoreResult<serde_json::Value> {
        Ok(serde_json::to_value(self.resources_result().await)?)
    }

    /// `resources/templates/list` result.
    pub async fn list_resource_templates(&self) -> CoreResult<serde_json::Value> {
        Ok(serde_json::to_value(self.resource_templates_result().await)?)
    }

    /// `resources/read` result for a module URI.
    pub async fn read_resource(&self, uri: &str) -> CoreResult<serde_json::Value> {
        let result = self.resource_service.read_resource(uri).await?;
        Ok(serde_json::to_value(result)?)
    }

    /// `prompts/list` result.
    pub async fn list_prompts(&self) -> CoreResult<serde_json::Value> {
        Ok(serde_json::to_value(self.prompts_result().await)?)
    }

    /// `prompts/get` result for the named guide.
    pub async fn get_prompt(&self, name: &str) -> CoreResult<serde_json::Value> {
        let result = self.prompt_service.get_prompt(name).await?;
        Ok(serde_json::to_value(result)?)
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        Ok(self.resources_result().await)
    }

    #[instrument(skip(self, _context))]
    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourceTemplatesResult, McpError> {
        info!("Listing resource templates");
        Ok(self.resource_templates_result().await)
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(|e| McpError::resource_not_found(e.to_string(), None))
    }

    #[instrument(skip(self, _context))]
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListPromptsResult, McpError> {
        info!("Listing prompts");
        Ok(self.prompts_result().await)
    }

    #[instrument(skip(self, _context))]
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<GetPromptResult, McpError> {
        info!("Getting prompt: {}", request.name);
        self.prompt_service
            .get_prompt(&request.name)
            .await
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::reference::ModuleRecord;
    use rmcp::ServiceExt;
    use serde_json::json;
    use tokio::io::{
        AsyncBufReadExt, AsyncWriteExt, BufReader, DuplexStream, Lines, ReadHalf,
    };

    fn test_server() -> McpServer {
        let index = ModuleIndex::from_records(
            [(
                "endstone.event",
                ModuleRecord::from_content(
                    "event.py",
                    r#"__all__ = ["PlayerJoinEvent", "event_handler"]"#,
                ),
            )],
            "endstone.event",
        );
        McpServer::with_index(Config::default(), index)
    }

    #[test]
    fn test_server_identity() {
        let server = test_server();
        assert_eq!(server.name(), "endstone-mcp");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
        assert_eq!(server.index().len(), 1);
    }

    #[test]
    fn test_list_tools() {
        let value = test_server().list_tools().unwrap();
        let tools = value["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 4);
        assert_eq!(tools[0]["name"], "get_module_info");
        assert!(tools.iter().all(|t| t["inputSchema"].is_object()));
    }

    #[test]
    fn test_get_info_enables_capabilities() {
        let info = test_server().get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.prompts.is_some());
        assert!(info.capabilities.resources.is_some());
    }

    #[tokio::test]
    async fn test_read_resource_json() {
        let server = test_server();
        let value = server
            .read_resource("endstone://module/endstone.event")
            .await
            .unwrap();
        assert!(value["contents"][0]["text"]
            .as_str()
            .unwrap()
            .contains("PlayerJoinEvent"));

        assert!(server.read_resource("endstone://module/nope").await.is_err());
    }

    #[tokio::test]
    async fn test_get_prompt_json() {
        let server = test_server();
        let value = server.get_prompt("command_creation").await.unwrap();
        assert_eq!(value["description"], "Endstone command_creation guide");
        assert!(server.get_prompt("missing").await.is_err());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_call_tool() {
        let server = test_server();
        let value = server
            .call_tool("get_event_info", serde_json::json!({}))
            .unwrap();
        assert_eq!(value["isError"], false);
        assert!(server.call_tool("nope", serde_json::json!({})).is_err());
    }

    async fn send(io: &mut (impl AsyncWriteExt + Unpin), message: serde_json::Value) {
        let mut line = message.to_string();
        line.push('\n');
        io.write_all(line.as_bytes()).await.unwrap();
    }

    async fn response_to(
        lines: &mut Lines<BufReader<ReadHalf<DuplexStream>>>,
        id: u64,
    ) -> serde_json::Value {
        loop {
            let line = lines.next_line().await.unwrap().expect("session closed");
            let message: serde_json::Value = serde_json::from_str(&line).unwrap();
            if message["id"] == id {
                return message;
            }
        }
    }

    #[tokio::test]
    async fn test_tool_routes_over_session() {
        let (server_io, client_io) = tokio::io::duplex(64 * 1024);
        let server = test_server();
        tokio::spawn(async move {
            if let Ok(running) = server.serve(server_io).await {
                let _ = running.waiting().await;
            }
        });

        let (read, mut write) = tokio::io::split(client_io);
        let mut lines = BufReader::new(read).lines();

        send(
            &mut write,
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "initialize",
                "params": {
                    "protocolVersion": "2024-11-05",
                    "capabilities": {},
                    "clientInfo": { "name": "test-client", "version": "0.0.0" }
                }
            }),
        )
        .await;
        let init = response_to(&mut lines, 1).await;
        assert!(init["result"]["capabilities"]["tools"].is_object());
        send(
            &mut write,
            json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }),
        )
        .await;

        send(
            &mut write,
            json!({
                "jsonrpc": "2.0",
                "id": 2,
                "method": "tools/call",
                "params": {
                    "name": "generate_plugin_template",
                    "arguments": { "plugin_name": "Foo", "features": "events" }
                }
            }),
        )
        .await;
        let bad = response_to(&mut lines, 2).await;
        assert_eq!(bad["result"]["isError"], true);
        assert!(bad["result"]["content"][0]["text"]
            .as_str()
            .unwrap()
            .starts_with("Error: Invalid arguments"));

        send(
            &mut write,
            json!({
                "jsonrpc": "2.0",
                "id": 3,
                "method": "tools/call",
                "params": { "name": "get_event_info", "arguments": {} }
            }),
        )
        .await;
        let good = response_to(&mut lines, 3).await;
        assert_ne!(good["result"]["isError"], true);
        assert!(good["result"]["content"][0]["text"]
            .as_str()
            .unwrap()
            .contains("`PlayerJoinEvent`"));
    }

    #[test]
    fn test_new_with_missing_reference_dir() {
        let mut config = Config::default();
        config.reference.base_path = "/nonexistent/endstone/reference".into();
        let server = McpServer::new(config);
        assert!(server.index().is_empty());
    }
}
