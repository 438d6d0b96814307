//! User profile tool.
//!
//! `GET /user/{username}` with optional `limit`/`page` paging of the user's
//! models.

use schemars::JsonSchema;
use serde::Deserialize;

use super::ToolDefinition;
use super::common::{QueryParams, integral, non_zero};
use crate::domains::tools::{client::Endpoint, error::ToolError};

/// Parameters for fetching a user profile.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetUserParams {
    #[schemars(description = "The username to look up")]
    pub username: String,

    #[schemars(description = "Maximum number of results")]
    #[serde(default, deserialize_with = "integral")]
    pub limit: Option<u32>,

    #[schemars(description = "Page number for pagination")]
    #[serde(default, deserialize_with = "integral")]
    pub page: Option<u32>,
}

/// Poly Pizza user profile tool.
#[derive(Debug, Clone)]
pub struct GetUserTool;

impl ToolDefinition for GetUserTool {
    const NAME: &'static str = "get_user";
    const DESCRIPTION: &'static str = "Retrieve all models and lists created by a specific user";

    type Params = GetUserParams;

    fn endpoint(params: &GetUserParams) -> Result<Endpoint, ToolError> {
        let query = QueryParams {
            limit: non_zero(params.limit),
            page: non_zero(params.page),
            ..Default::default()
        }
        .encode()?;

        Ok(Endpoint::new(["user", params.username.as_str()]).with_query(query))
    }
}
