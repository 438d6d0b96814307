//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Each tool maps one `tools/call` onto one GET against the Poly Pizza API
//! and returns the JSON body as text.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool definitions (one file per tool)
//! - `call.rs` - Typed decoding of incoming calls
//! - `client.rs` - Upstream HTTP client and endpoint construction
//! - `registry.rs` - Tool listing and the dispatch boundary
//! - `error.rs` - Tool-specific error types

mod call;
pub mod client;
pub mod definitions;
mod error;
mod registry;

pub use call::ToolCall;
pub use client::{Endpoint, PolyPizzaClient};
pub use definitions::ToolDefinition;
pub use error::ToolError;
pub use registry::ToolRegistry;
