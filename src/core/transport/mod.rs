//! Transport layer for the MCP server.
//!
//! This module provides different transport implementations:
//! - **STDIO**: Standard input/output (default for MCP) - feature: `stdio`
//! - **TCP**: Raw TCP socket with JSON-RPC messages - feature: `tcp`
//!
//! Message framing and the MCP session lifecycle belong to rmcp. The
//! transports here only bind the channel, hand it to the server, and close it
//! again when the process is interrupted.

mod config;
mod error;
mod service;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

use tracing::{info, warn};

/// Resolve once the process receives an interrupt (Ctrl+C / SIGINT).
///
/// If the signal handler cannot be installed the future never resolves, so
/// the transport keeps running until the client disconnects.
pub(crate) async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Interrupt received, shutting down"),
        Err(e) => {
            warn!("Failed to listen for interrupt signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
