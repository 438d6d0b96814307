//! Keyword model search tool.
//!
//! `GET /search/{keyword}` plus the same optional filters as
//! `search_models`. The keyword is sent as a single percent-encoded path
//! segment (`fire hydrant` becomes `fire%20hydrant`).

use schemars::JsonSchema;
use serde::Deserialize;

use super::{SearchFilters, ToolDefinition};
use crate::domains::tools::{client::Endpoint, error::ToolError};

/// Parameters for a keyword search.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchModelsByKeywordParams {
    #[schemars(description = "Search keyword (will be URL-encoded)")]
    pub keyword: String,

    #[serde(flatten)]
    pub filters: SearchFilters,
}

/// Poly Pizza keyword search tool.
#[derive(Debug, Clone)]
pub struct SearchModelsByKeywordTool;

impl ToolDefinition for SearchModelsByKeywordTool {
    const NAME: &'static str = "search_models_by_keyword";
    const DESCRIPTION: &'static str = "Search for 3D models by keyword with optional filters";

    type Params = SearchModelsByKeywordParams;

    fn endpoint(params: &SearchModelsByKeywordParams) -> Result<Endpoint, ToolError> {
        Ok(Endpoint::new(["search", params.keyword.as_str()])
            .with_query(params.filters.to_query()?))
    }
}
