//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to domain-specific services.
//!
//! ## Tool calls
//!
//! `tools/call` never fails at the protocol level. Unknown tool names,
//! malformed arguments and upstream failures are all answered with an
//! error-flagged [`CallToolResult`] produced by the [`ToolRegistry`].

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result;
use crate::domains::{
    resources::ResourceService,
    tools::{PolyPizzaClient, ToolRegistry},
};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and coordinates
/// between different domain services to handle MCP protocol messages.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool listing and dispatch.
    tools: Arc<ToolRegistry>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails only if the upstream client cannot be built from the
    /// configuration (for example an unparseable base URL).
    pub fn new(config: Config) -> Result<Self> {
        let client = PolyPizzaClient::new(&config.upstream, &config.credentials)?;
        info!("Forwarding tool calls to {}", client.base_url());

        Ok(Self {
            config: Arc::new(config),
            tools: Arc::new(ToolRegistry::new(client)),
            resource_service: Arc::new(ResourceService::new()),
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the tool registry.
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo {
            instructions: Some(
                "Poly Pizza 3D model library. Use get_model, get_list, search_models, \
                 search_models_by_keyword and get_user to browse models. Category and \
                 license codes are available as resources."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        };
        info.server_info.name = self.name().to_string();
        info.server_info.version = self.version().to_string();
        info
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: ToolRegistry::get_all_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, request, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        Ok(self.tools.call_tool(&request.name, request.arguments).await)
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(|e| McpError::resource_not_found(e.to_string(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;

    #[test]
    fn test_server_info() {
        let server = McpServer::new(Config::new("test-token")).unwrap();
        let info = server.get_info();

        assert_eq!(info.server_info.name, "polypizza-mcp");
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
        assert!(info.capabilities.prompts.is_none());
    }

    #[test]
    fn test_custom_server_name() {
        let mut config = Config::new("test-token");
        config.server.name = "models".to_string();
        let server = McpServer::new(config).unwrap();
        assert_eq!(server.get_info().server_info.name, "models");
    }

    #[test]
    fn test_invalid_base_url_prevents_construction() {
        let result = McpServer::new(Config::new("test-token").with_base_url("::nonsense"));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    /// Send one JSON-RPC line and read the next line back.
    async fn exchange<R, W>(reader: &mut R, writer: &mut W, message: serde_json::Value) -> serde_json::Value
    where
        R: tokio::io::AsyncBufRead + Unpin,
        W: tokio::io::AsyncWrite + Unpin,
    {
        use tokio::io::{AsyncBufReadExt, AsyncWriteExt};

        writer.write_all(format!("{message}\n").as_bytes()).await.unwrap();
        writer.flush().await.unwrap();

        let mut line = String::new();
        reader.read_line(&mut line).await.unwrap();
        serde_json::from_str(&line).unwrap()
    }

    #[tokio::test]
    async fn test_unknown_tool_through_server() {
        use rmcp::ServiceExt;
        use serde_json::json;
        use tokio::io::{AsyncWriteExt, BufReader, duplex, split};

        let server =
            McpServer::new(Config::new("test-token").with_base_url("http://127.0.0.1:1")).unwrap();

        let (client_io, server_io) = duplex(64 * 1024);
        let running = tokio::spawn(async move { server.serve(split(server_io)).await });

        let (client_read, mut writer) = split(client_io);
        let mut reader = BufReader::new(client_read);

        let init = exchange(
            &mut reader,
            &mut writer,
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "initialize",
                "params": {
                    "protocolVersion": "2024-11-05",
                    "capabilities": {},
                    "clientInfo": {"name": "test-client", "version": "0.0.0"}
                }
            }),
        )
        .await;
        assert_eq!(init["result"]["serverInfo"]["name"], "polypizza-mcp");

        writer
            .write_all(b"{\"jsonrpc\":\"2.0\",\"method\":\"notifications/initialized\"}\n")
            .await
            .unwrap();
        writer.flush().await.unwrap();
        let service = running.await.unwrap().unwrap();

        let response = exchange(
            &mut reader,
            &mut writer,
            json!({
                "jsonrpc": "2.0",
                "id": 2,
                "method": "tools/call",
                "params": {"name": "get_models", "arguments": {}}
            }),
        )
        .await;

        assert_eq!(response["id"], 2);
        assert!(response.get("error").is_none());
        assert_eq!(response["result"]["isError"], true);
        assert_eq!(
            response["result"]["content"][0]["text"],
            "Error: Unknown tool: get_models"
        );

        service.cancel().await.unwrap();
    }
}
