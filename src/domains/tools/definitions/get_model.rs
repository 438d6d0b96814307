//! Model lookup tool.
//!
//! Fetches a single 3D model record by id: `GET /model/{id}`.

use schemars::JsonSchema;
use serde::Deserialize;

use super::ToolDefinition;
use crate::domains::tools::{client::Endpoint, error::ToolError};

/// Parameters for fetching a model.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetModelParams {
    #[schemars(description = "The unique identifier of the model")]
    pub id: String,
}

/// Poly Pizza model lookup tool.
#[derive(Debug, Clone)]
pub struct GetModelTool;

impl ToolDefinition for GetModelTool {
    const NAME: &'static str = "get_model";
    const DESCRIPTION: &'static str = "Retrieve a single 3D model by its ID";

    type Params = GetModelParams;

    fn endpoint(params: &GetModelParams) -> Result<Endpoint, ToolError> {
        Ok(Endpoint::new(["model", params.id.as_str()]))
    }
}
