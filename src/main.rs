//! MCP Server Entry Point
//!
//! Loads configuration, initializes logging, and serves the MCP protocol
//! over the configured transport until the client disconnects or the
//! process is interrupted.

use std::time::Duration;

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use polypizza_mcp_server::core::{Config, McpServer, TransportService};

/// How long runtime shutdown waits for blocking tasks.
///
/// The stdin reader sits in a blocking read that only returns on input, so
/// after an interrupt it is abandoned instead of joined.
const SHUTDOWN_GRACE: Duration = Duration::from_millis(500);

fn main() -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let outcome = runtime.block_on(run());
    runtime.shutdown_timeout(SHUTDOWN_GRACE);
    outcome
}

async fn run() -> Result<()> {
    // Fails fast when POLYPIZZA_AUTH_TOKEN is missing
    let config = Config::from_env()?;

    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    let transport = TransportService::new(config.transport.clone());
    let server = McpServer::new(config)?;

    info!("Server initialized");

    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout carries the MCP protocol.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
