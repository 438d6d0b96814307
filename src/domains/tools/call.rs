//! Typed tool calls.
//!
//! Incoming `tools/call` requests carry a name and an untyped argument bag.
//! [`ToolCall::parse`] resolves both into one variant per tool, so the rest
//! of the pipeline only ever sees well-shaped parameters.

use rmcp::model::JsonObject;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::client::Endpoint;
use super::definitions::{
    GetListParams, GetListTool, GetModelParams, GetModelTool, GetUserParams, GetUserTool,
    SearchModelsByKeywordParams, SearchModelsByKeywordTool, SearchModelsParams, SearchModelsTool,
    ToolDefinition,
};
use super::error::ToolError;

/// A decoded tool invocation.
#[derive(Debug, Clone)]
pub enum ToolCall {
    GetModel(GetModelParams),
    GetList(GetListParams),
    SearchModels(SearchModelsParams),
    SearchModelsByKeyword(SearchModelsByKeywordParams),
    GetUser(GetUserParams),
}

impl ToolCall {
    /// Resolve a tool name and its arguments into a typed call.
    ///
    /// Missing arguments are treated as an empty object.
    pub fn parse(name: &str, arguments: Option<JsonObject>) -> Result<Self, ToolError> {
        let arguments = Value::Object(arguments.unwrap_or_default());

        match name {
            GetModelTool::NAME => decode(arguments).map(Self::GetModel),
            GetListTool::NAME => decode(arguments).map(Self::GetList),
            SearchModelsTool::NAME => decode(arguments).map(Self::SearchModels),
            SearchModelsByKeywordTool::NAME => decode(arguments).map(Self::SearchModelsByKeyword),
            GetUserTool::NAME => decode(arguments).map(Self::GetUser),
            _ => Err(ToolError::unknown_tool(name)),
        }
    }

    /// Name of the tool this call targets.
    pub fn name(&self) -> &'static str {
        match self {
            Self::GetModel(_) => GetModelTool::NAME,
            Self::GetList(_) => GetListTool::NAME,
            Self::SearchModels(_) => SearchModelsTool::NAME,
            Self::SearchModelsByKeyword(_) => SearchModelsByKeywordTool::NAME,
            Self::GetUser(_) => GetUserTool::NAME,
        }
    }

    /// Build the upstream request for this call.
    pub fn endpoint(&self) -> Result<Endpoint, ToolError> {
        match self {
            Self::GetModel(params) => GetModelTool::endpoint(params),
            Self::GetList(params) => GetListTool::endpoint(params),
            Self::SearchModels(params) => SearchModelsTool::endpoint(params),
            Self::SearchModelsByKeyword(params) => SearchModelsByKeywordTool::endpoint(params),
            Self::GetUser(params) => GetUserTool::endpoint(params),
        }
    }
}

fn decode<P: DeserializeOwned>(arguments: Value) -> Result<P, ToolError> {
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}
