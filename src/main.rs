//! Endstone MCP server entry point.
//!
//! Loads configuration, initializes logging, indexes the reference sources
//! and runs the configured transport.

use anyhow::Result;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use endstone_mcp_server::core::{Config, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    let reference_path = &config.reference.base_path;
    if reference_path.is_dir() {
        info!("Reference sources: {}", reference_path.display());
    } else {
        warn!(
            "Reference directory {} does not exist, the module index will be empty. \
             Set MCP_REFERENCE_PATH to the Endstone reference sources.",
            reference_path.display()
        );
    }

    let server = McpServer::new(config.clone());

    let index = server.index();
    info!(
        "Indexed {} modules with {} exports",
        index.len(),
        index.total_exports()
    );

    TransportService::new(config.transport).run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the tracing subscriber.
///
/// Output always goes to stderr so the STDIO transport keeps stdout for
/// protocol messages.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
