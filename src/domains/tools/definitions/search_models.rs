//! Filtered model search tool.
//!
//! Searches without a keyword: `GET /search?category=..&license=..`. The
//! API expects at least one filter, but that is left to the caller.

use schemars::JsonSchema;
use serde::Deserialize;

use super::{SearchFilters, ToolDefinition};
use crate::domains::tools::{client::Endpoint, error::ToolError};

/// Parameters for a filtered search.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct SearchModelsParams {
    #[serde(flatten)]
    pub filters: SearchFilters,
}

/// Poly Pizza filtered search tool.
#[derive(Debug, Clone)]
pub struct SearchModelsTool;

impl ToolDefinition for SearchModelsTool {
    const NAME: &'static str = "search_models";
    const DESCRIPTION: &'static str = "Search for 3D models using filters (category, license, animated status). At least one filter is required.";

    type Params = SearchModelsParams;

    fn endpoint(params: &SearchModelsParams) -> Result<Endpoint, ToolError> {
        Ok(Endpoint::new(["search"]).with_query(params.filters.to_query()?))
    }
}
