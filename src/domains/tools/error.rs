//! Tool-specific error types.
//!
//! Every variant is recoverable: the registry turns it into an error-flagged
//! envelope (`Error: <message>`) instead of failing the MCP request.

use thiserror::Error;

/// Errors that can occur while executing a single tool call.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool is not part of the registry.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The argument bag does not match the tool's parameter shape.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The upstream API answered with a non-success status.
    #[error("API request failed: {}", status_line(*status, reason.as_deref()))]
    Upstream { status: u16, reason: Option<String> },

    /// The upstream API could not be reached.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The upstream body was not valid JSON.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The outgoing URL or query string could not be built.
    #[error("Failed to encode request: {0}")]
    Encode(String),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "upstream error" from an HTTP status.
    pub fn upstream(status: reqwest::StatusCode) -> Self {
        Self::Upstream {
            status: status.as_u16(),
            reason: status.canonical_reason().map(str::to_string),
        }
    }

    /// Create a new "encode error".
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Short name of the failure category, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownTool(_) => "unknown tool",
            Self::InvalidArguments(_) => "invalid arguments",
            Self::Upstream { .. } => "upstream error",
            Self::Network(_) => "network error",
            Self::Decode(_) => "decode error",
            Self::Encode(_) => "encode error",
        }
    }
}

/// `404 Not Found`, or just `599` when the status has no standard reason.
fn status_line(status: u16, reason: Option<&str>) -> String {
    match reason {
        Some(reason) => format!("{status} {reason}"),
        None => status.to_string(),
    }
}
