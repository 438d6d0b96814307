//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The static list of tools answered on discovery
//! - The dispatch boundary: every call ends in a response envelope, never in
//!   a protocol error

use rmcp::model::{CallToolResult, JsonObject, Tool};
use serde_json::Value;
use tracing::{info, instrument};

use super::call::ToolCall;
use super::client::PolyPizzaClient;
use super::definitions::{
    GetListTool, GetModelTool, GetUserTool, SearchModelsByKeywordTool, SearchModelsTool,
    ToolDefinition, common::envelope,
};
use super::error::ToolError;

/// Tool registry - lists tools and executes calls against the upstream API.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    client: PolyPizzaClient,
}

impl ToolRegistry {
    /// Create a new tool registry backed by `client`.
    pub fn new(client: PolyPizzaClient) -> Self {
        Self { client }
    }

    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            GetModelTool::NAME,
            GetListTool::NAME,
            SearchModelsTool::NAME,
            SearchModelsByKeywordTool::NAME,
            GetUserTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// The list is fixed; discovery always returns it unchanged.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            GetModelTool::to_tool(),
            GetListTool::to_tool(),
            SearchModelsTool::to_tool(),
            SearchModelsByKeywordTool::to_tool(),
            GetUserTool::to_tool(),
        ]
    }

    /// Execute a tool call and wrap the outcome in a response envelope.
    ///
    /// Unknown tools, bad arguments and upstream failures all come back as
    /// error-flagged envelopes.
    #[instrument(skip(self, arguments))]
    pub async fn call_tool(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        envelope(self.dispatch(name, arguments).await)
    }

    /// Execute a tool call, returning the upstream JSON untouched.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<Value, ToolError> {
        let call = ToolCall::parse(name, arguments)?;
        let endpoint = call.endpoint()?;
        info!("Calling tool {}", call.name());
        self.client.get(&endpoint).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{CredentialsConfig, UpstreamConfig};
    use crate::domains::tools::definitions::common::MAX_SEARCH_LIMIT;
    use mockito::Matcher;
    use rmcp::model::RawContent;
    use serde_json::json;

    fn registry_for(base_url: &str) -> ToolRegistry {
        let client = PolyPizzaClient::new(
            &UpstreamConfig {
                base_url: base_url.to_string(),
            },
            &CredentialsConfig {
                auth_token: "test-token".to_string(),
            },
        )
        .unwrap();
        ToolRegistry::new(client)
    }

    fn args(value: Value) -> Option<JsonObject> {
        value.as_object().cloned()
    }

    fn text_of(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            other => panic!("expected text content, got {:?}", other),
        }
    }

    fn required_fields(tool: &Tool) -> Vec<String> {
        let mut required: Vec<String> = tool
            .input_schema
            .get("required")
            .and_then(|r| r.as_array())
            .map(|r| {
                r.iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();
        required.sort();
        required
    }

    fn tool(name: &str) -> Tool {
        ToolRegistry::get_all_tools()
            .into_iter()
            .find(|t| t.name == name)
            .unwrap()
    }

    #[test]
    fn test_registry_tool_names() {
        let names = ToolRegistry::tool_names();
        assert_eq!(
            names,
            [
                "get_model",
                "get_list",
                "search_models",
                "search_models_by_keyword",
                "get_user"
            ]
        );
    }

    #[test]
    fn test_one_schema_per_tool() {
        let tools = ToolRegistry::get_all_tools();
        assert_eq!(tools.len(), 5);
        for name in ToolRegistry::tool_names() {
            assert_eq!(tools.iter().filter(|t| t.name == name).count(), 1);
        }
        assert!(tools.iter().all(|t| t.description.is_some()));
    }

    #[test]
    fn test_required_fields() {
        assert_eq!(required_fields(&tool("get_model")), ["id"]);
        assert_eq!(required_fields(&tool("get_list")), ["id"]);
        assert!(required_fields(&tool("search_models")).is_empty());
        assert_eq!(required_fields(&tool("search_models_by_keyword")), ["keyword"]);
        assert_eq!(required_fields(&tool("get_user")), ["username"]);
    }

    #[test]
    fn test_search_schemas_advertise_limit_maximum() {
        for name in ["search_models", "search_models_by_keyword"] {
            let tool = tool(name);
            let properties = tool.input_schema["properties"].as_object().unwrap();
            for field in ["category", "license", "animated", "limit", "page"] {
                assert!(properties.contains_key(field), "{name} is missing {field}");
            }
            assert_eq!(
                properties["limit"]["maximum"].as_f64(),
                Some(f64::from(MAX_SEARCH_LIMIT))
            );
        }
    }

    #[tokio::test]
    async fn test_get_model_success_envelope() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/model/abc")
            .match_header("x-auth-token", "test-token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"abc","title":"Cube"}"#)
            .expect(1)
            .create_async()
            .await;

        let registry = registry_for(&server.url());
        let result = registry.call_tool("get_model", args(json!({"id": "abc"}))).await;

        mock.assert_async().await;
        assert_ne!(result.is_error, Some(true));
        assert_eq!(result.content.len(), 1);
        assert_eq!(
            text_of(&result),
            serde_json::to_string_pretty(&json!({"id": "abc", "title": "Cube"})).unwrap()
        );
    }

    #[tokio::test]
    async fn test_search_models_forwards_filters() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", Matcher::Regex(r"^/search(\?.*)?$".to_string()))
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("category".into(), "3".into()),
                Matcher::UrlEncoded("limit".into(), "40".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"total":0,"results":[]}"#)
            .expect(1)
            .create_async()
            .await;

        let registry = registry_for(&server.url());
        let result = registry
            .call_tool("search_models", args(json!({"category": "3", "limit": 40})))
            .await;

        mock.assert_async().await;
        assert_ne!(result.is_error, Some(true));
    }

    #[tokio::test]
    async fn test_keyword_search_encodes_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/search/fire%20hydrant")
            .with_status(200)
            .with_body(r#"{"total":1,"results":[{"id":"h1"}]}"#)
            .expect(1)
            .create_async()
            .await;

        let registry = registry_for(&server.url());
        let result = registry
            .call_tool("search_models_by_keyword", args(json!({"keyword": "fire hydrant"})))
            .await;

        mock.assert_async().await;
        assert!(text_of(&result).contains("h1"));
    }

    #[tokio::test]
    async fn test_get_user_forwards_paging() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock(
                "GET",
                Matcher::Regex(r"^/user/Quaternius(\?.*)?$".to_string()),
            )
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("limit".into(), "5".into()),
                Matcher::UrlEncoded("page".into(), "1".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"username":"Quaternius","models":[],"lists":[]}"#)
            .expect(1)
            .create_async()
            .await;

        let registry = registry_for(&server.url());
        let result = registry
            .call_tool(
                "get_user",
                args(json!({"username": "Quaternius", "limit": 5, "page": 1})),
            )
            .await;

        mock.assert_async().await;
        assert!(text_of(&result).contains("Quaternius"));
    }

    #[tokio::test]
    async fn test_upstream_404_is_error_envelope() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/list/missing")
            .with_status(404)
            .create_async()
            .await;

        let registry = registry_for(&server.url());
        let result = registry.call_tool("get_list", args(json!({"id": "missing"}))).await;

        assert_eq!(result.is_error, Some(true));
        let text = text_of(&result);
        assert!(text.starts_with("Error: "));
        assert!(text.contains("404"));
    }

    #[tokio::test]
    async fn test_unknown_tool_is_error_envelope() {
        let registry = registry_for("http://127.0.0.1:1");
        let result = registry.call_tool("delete_model", None).await;

        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).contains("Unknown tool"));
    }

    #[tokio::test]
    async fn test_invalid_arguments_is_error_envelope() {
        let registry = registry_for("http://127.0.0.1:1");
        let result = registry.call_tool("get_model", args(json!({"id": 7}))).await;

        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).starts_with("Error: Invalid arguments"));
    }

    #[tokio::test]
    async fn test_network_failure_is_error_envelope() {
        let registry = registry_for("http://127.0.0.1:1");
        let result = registry.call_tool("get_model", args(json!({"id": "abc"}))).await;

        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).starts_with("Error: Network error"));
    }
}
