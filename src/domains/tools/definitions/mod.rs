//! Tool definitions module.
//!
//! Each tool is defined in its own file with:
//! - a parameters struct (deserialized from the call, and the schema source)
//! - its name and description
//! - the rule that turns parameters into an upstream [`Endpoint`]
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file (e.g., `my_tool.rs`)
//! 2. Implement the `ToolDefinition` trait
//! 3. Export it here
//! 4. Add a variant to `ToolCall` and register it in `registry.rs`

use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

use super::client::Endpoint;
use super::error::ToolError;

pub mod common;
pub mod get_list;
pub mod get_model;
pub mod get_user;
pub mod search_models;
pub mod search_models_by_keyword;

pub use common::SearchFilters;
pub use get_list::{GetListParams, GetListTool};
pub use get_model::{GetModelParams, GetModelTool};
pub use get_user::{GetUserParams, GetUserTool};
pub use search_models::{SearchModelsParams, SearchModelsTool};
pub use search_models_by_keyword::{SearchModelsByKeywordParams, SearchModelsByKeywordTool};

/// Trait for tool definitions.
///
/// Each tool must implement this trait to provide its metadata and the
/// mapping from typed parameters to an upstream request.
pub trait ToolDefinition {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Typed arguments accepted by the tool.
    type Params: DeserializeOwned + JsonSchema + 'static;

    /// Build the upstream request for a call.
    fn endpoint(params: &Self::Params) -> Result<Endpoint, ToolError>;

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        common::build_tool::<Self::Params>(Self::NAME, Self::DESCRIPTION)
    }
}
