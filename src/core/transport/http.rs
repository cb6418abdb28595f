//! HTTP transport implementation.
//!
//! JSON-RPC 2.0 over `POST {rpc_path}`, plus `GET /health` and `GET /`.
//! Each request is answered independently; the only state kept between
//! requests is the name of the last client that sent `initialize`.

use axum::{
    Json, Router,
    extract::State,
    response::IntoResponse,
    routing::{get, post},
};
use http::StatusCode;
use rmcp::ServerHandler;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::{Error, McpServer};

const JSONRPC_VERSION: &str = "2.0";

const INVALID_REQUEST: i32 = -32600;
const METHOD_NOT_FOUND: i32 = -32601;
const INVALID_PARAMS: i32 = -32602;
const INTERNAL_ERROR: i32 = -32603;

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// JSON-RPC request structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

/// JSON-RPC response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

impl JsonRpcResponse {
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
            }),
        }
    }

    fn invalid_params(id: Option<Value>, message: impl Into<String>) -> Self {
        Self::error(id, INVALID_PARAMS, message)
    }

    /// Domain lookup failures are caller mistakes; anything else is ours.
    fn from_error(id: Option<Value>, err: Error) -> Self {
        match err {
            Error::Tool(e) => Self::invalid_params(id, e.to_string()),
            Error::Resource(e) => Self::invalid_params(id, e.to_string()),
            Error::Prompt(e) => Self::invalid_params(id, e.to_string()),
            other => Self::error(id, INTERNAL_ERROR, other.to_string()),
        }
    }
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
struct AppState {
    server: McpServer,
    rpc_path: String,
    client: Arc<RwLock<Option<String>>>,
}

impl HttpTransport {
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Serve HTTP until the listener fails.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.config.address();
        let app = router(server, &self.config);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!(
            "Ready - listening on {} (JSON-RPC at POST {}, CORS {})",
            addr,
            self.config.rpc_path,
            if self.config.enable_cors { "enabled" } else { "disabled" }
        );

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))
    }
}

/// Build the axum router serving `server`.
pub fn router(server: McpServer, config: &HttpConfig) -> Router {
    let state = AppState {
        server,
        rpc_path: config.rpc_path.clone(),
        client: Arc::new(RwLock::new(None)),
    };

    let app = Router::new()
        .route(&config.rpc_path, post(handle_rpc))
        .route("/health", get(health_check))
        .route("/", get(root_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if config.enable_cors {
        app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        app
    }
}

async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "transport": "HTTP",
        "protocol": "JSON-RPC 2.0",
        "modules": state.server.index().len(),
        "endpoints": {
            "rpc": state.rpc_path,
            "health": "/health"
        }
    }))
}

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "modules": state.server.index().len(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[instrument(skip_all, fields(method))]
async fn handle_rpc(
    State(state): State<AppState>,
    Json(request): Json<JsonRpcRequest>,
) -> impl IntoResponse {
    tracing::Span::current().record("method", request.method.as_str());
    info!("Received JSON-RPC request");
    (StatusCode::OK, Json(dispatch(&state, request).await))
}

async fn dispatch(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    if request.jsonrpc != JSONRPC_VERSION {
        return JsonRpcResponse::error(request.id, INVALID_REQUEST, "Invalid Request");
    }

    let JsonRpcRequest {
        id, method, params, ..
    } = request;
    let server = &state.server;

    match method.as_str() {
        "initialize" => initialize(state, id, params).await,

        "tools/list" => respond(id, server.list_tools()),

        "tools/call" => {
            let Some(name) = string_param(&params, "name") else {
                return JsonRpcResponse::invalid_params(id, "Missing tool name");
            };
            let arguments = params
                .as_ref()
                .and_then(|p| p.get("arguments"))
                .cloned()
                .unwrap_or_else(|| json!({}));
            respond(id, server.call_tool(&name, arguments))
        }

        "resources/list" => respond(id, server.list_resources().await),

        "resources/templates/list" => respond(id, server.list_resource_templates().await),

        "resources/read" => {
            let Some(uri) = string_param(&params, "uri") else {
                return JsonRpcResponse::invalid_params(id, "Missing resource URI");
            };
            respond(id, server.read_resource(&uri).await)
        }

        "prompts/list" => respond(id, server.list_prompts().await),

        "prompts/get" => {
            let Some(name) = string_param(&params, "name") else {
                return JsonRpcResponse::invalid_params(id, "Missing prompt name");
            };
            respond(id, server.get_prompt(&name).await)
        }

        m if m.starts_with("notifications/") => {
            if m == "notifications/initialized" {
                let client = state.client.read().await;
                info!(
                    "Client {} finished initialization",
                    client.as_deref().unwrap_or("<unknown>")
                );
            } else {
                info!("Received notification: {}", m);
            }
            JsonRpcResponse::success(id, Value::Null)
        }

        _ => {
            warn!("Unknown method: {}", method);
            JsonRpcResponse::error(id, METHOD_NOT_FOUND, "Method not found")
        }
    }
}

async fn initialize(state: &AppState, id: Option<Value>, params: Option<Value>) -> JsonRpcResponse {
    let client = params
        .as_ref()
        .and_then(|p| p.pointer("/clientInfo/name"))
        .and_then(Value::as_str)
        .map(str::to_string);
    info!(
        "Initializing session for {}",
        client.as_deref().unwrap_or("<unknown>")
    );
    *state.client.write().await = client;

    let mut info = state.server.get_info();
    info.server_info.name = state.server.name().to_string();
    info.server_info.version = state.server.version().to_string();

    respond(id, serde_json::to_value(info).map_err(Error::from))
}

fn respond(id: Option<Value>, result: crate::core::Result<Value>) -> JsonRpcResponse {
    match result {
        Ok(value) => JsonRpcResponse::success(id, value),
        Err(e) => JsonRpcResponse::from_error(id, e),
    }
}

fn string_param(params: &Option<Value>, key: &str) -> Option<String> {
    params
        .as_ref()?
        .get(key)?
        .as_str()
        .map(str::to_string)
}
