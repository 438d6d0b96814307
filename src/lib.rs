//! Poly Pizza MCP Server Library
//!
//! This crate exposes the read-only Poly Pizza 3D model API as a set of
//! Model Context Protocol (MCP) tools. Each tool call becomes one GET
//! request against the API; the JSON answer is returned to the client as
//! pretty-printed text, and failures come back as error-flagged results.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and
//!   transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: the five API operations and the upstream client
//!   - **resources**: category and license reference tables
//!
//! # Example
//!
//! ```rust,no_run
//! use polypizza_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
