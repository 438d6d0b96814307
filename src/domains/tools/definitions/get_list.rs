//! List lookup tool.
//!
//! Fetches a curated collection and its models: `GET /list/{id}`.

use schemars::JsonSchema;
use serde::Deserialize;

use super::ToolDefinition;
use crate::domains::tools::{client::Endpoint, error::ToolError};

/// Parameters for fetching a list.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetListParams {
    #[schemars(description = "The unique identifier of the list")]
    pub id: String,
}

/// Poly Pizza list lookup tool.
#[derive(Debug, Clone)]
pub struct GetListTool;

impl ToolDefinition for GetListTool {
    const NAME: &'static str = "get_list";
    const DESCRIPTION: &'static str =
        "Fetch all models within a curated collection/list by its ID";

    type Params = GetListParams;

    fn endpoint(params: &GetListParams) -> Result<Endpoint, ToolError> {
        Ok(Endpoint::new(["list", params.id.as_str()]))
    }
}
