// Stdio transport for the MCP server
//
// Reads newline-delimited JSON-RPC requests from stdin, routes them to the
// tool and resource registries, and writes responses to stdout. Requests are
// processed one at a time, in arrival order; the only state shared between
// them is the immutable registries and settings.
//
// Tool failures come back inside a successful JSON-RPC response with the
// error flag set; resource failures come back as JSON-RPC errors. The host
// protocol mandates that split; internally both subsystems return Results,
// and this module is the adapter.

use std::sync::Arc;

use log::{debug, error, info};
use serde_json::{json, Value};
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::config::Settings;
use crate::errors::ServerError;
use crate::protocol::error_codes::{
    INTERNAL_ERROR, INVALID_PARAMS, METHOD_NOT_FOUND, PARSE_ERROR,
};
use crate::protocol::{
    CallToolParams, InitializeResult, JsonRpcRequest, JsonRpcResponse, ListResourcesResult,
    ListToolsResult, ReadResourceParams, ReadResourceResult, RequestId, ServerCapabilities,
    ServerInfo,
};
use crate::resources::{self, ResourceRegistry};
use crate::tools::{self, ToolContext, ToolRegistry};
use crate::github::GithubClient;

/// The MCP server: registries, settings, and the upstream client handle.
pub struct McpServer {
    settings: Arc<Settings>,
    tools: Arc<ToolRegistry>,
    resources: Arc<ResourceRegistry>,
    github: Arc<GithubClient>,
}

impl McpServer {
    pub fn new(
        settings: Arc<Settings>,
        tools: Arc<ToolRegistry>,
        resources: Arc<ResourceRegistry>,
        github: Arc<GithubClient>,
    ) -> Self {
        Self {
            settings,
            tools,
            resources,
            github,
        }
    }

    fn context(&self) -> ToolContext {
        ToolContext {
            repository: self.settings.repository.clone(),
            github: self.github.clone(),
        }
    }

    /// Serve requests until stdin closes.
    pub async fn run(&self) -> Result<(), ServerError> {
        let stdin = io::stdin();
        let mut lines = BufReader::new(stdin).lines();
        let mut stdout = io::stdout();

        info!("GitHub MCP server running on stdio");

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let Some(response) = self.handle_line(line).await else {
                continue;
            };
            let payload = serde_json::to_string(&response)
                .map_err(|e| ServerError::Protocol(e.to_string()))?;
            stdout.write_all(payload.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }

        info!("Transport closed, shutting down");
        Ok(())
    }

    /// Parse and dispatch one request line. Returns `None` for
    /// notifications, which must not be answered.
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(err) => {
                return Some(JsonRpcResponse::error(
                    None,
                    PARSE_ERROR,
                    format!("Parse error: {}", err),
                ));
            }
        };

        if request.id.is_none() {
            debug!("Ignoring notification: {}", request.method);
            return None;
        }

        Some(self.dispatch(request).await)
    }

    async fn dispatch(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let JsonRpcRequest {
            method, params, id, ..
        } = request;

        debug!("Dispatching method {}", method);
        match method.as_str() {
            "initialize" => self.initialize(id),
            "ping" => JsonRpcResponse::ok(id, json!({})),
            "tools/list" => self.tools_list(id),
            "tools/call" => self.tools_call(id, params).await,
            "resources/list" => self.resources_list(id),
            "resources/read" => self.resources_read(id, params).await,
            other => JsonRpcResponse::error(
                id,
                METHOD_NOT_FOUND,
                format!("Method not found: {}", other),
            ),
        }
    }

    fn initialize(&self, id: Option<RequestId>) -> JsonRpcResponse {
        let result = InitializeResult {
            protocol_version: crate::MCP_PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities::default(),
            server_info: ServerInfo {
                name: crate::SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };
        Self::respond(id, &result)
    }

    fn tools_list(&self, id: Option<RequestId>) -> JsonRpcResponse {
        let result = ListToolsResult {
            tools: self.tools.descriptors(),
        };
        Self::respond(id, &result)
    }

    async fn tools_call(&self, id: Option<RequestId>, params: Value) -> JsonRpcResponse {
        let params: CallToolParams = match serde_json::from_value(params) {
            Ok(params) => params,
            Err(err) => {
                return JsonRpcResponse::error(id, INVALID_PARAMS, format!("Invalid params: {}", err));
            }
        };

        let result =
            tools::execute_tool(&self.tools, &params.name, params.arguments, self.context()).await;
        if result.failed() {
            debug!("Tool {} returned an error envelope", params.name);
        }
        Self::respond(id, &result)
    }

    fn resources_list(&self, id: Option<RequestId>) -> JsonRpcResponse {
        let result = ListResourcesResult {
            resources: self.resources.list(),
        };
        Self::respond(id, &result)
    }

    async fn resources_read(&self, id: Option<RequestId>, params: Value) -> JsonRpcResponse {
        let params: ReadResourceParams = match serde_json::from_value(params) {
            Ok(params) => params,
            Err(err) => {
                return JsonRpcResponse::error(id, INVALID_PARAMS, format!("Invalid params: {}", err));
            }
        };

        match resources::read_resource(&self.resources, &params.uri, self.context()).await {
            Ok(contents) => Self::respond(
                id,
                &ReadResourceResult {
                    contents: vec![contents],
                },
            ),
            Err(err) => {
                error!("Resource read failed for {}: {}", params.uri, err);
                JsonRpcResponse::error(
                    id,
                    INTERNAL_ERROR,
                    format!("Failed to read resource: {}", err),
                )
            }
        }
    }

    fn respond<T: serde::Serialize>(id: Option<RequestId>, result: &T) -> JsonRpcResponse {
        match serde_json::to_value(result) {
            Ok(value) => JsonRpcResponse::ok(id, value),
            Err(err) => JsonRpcResponse::error(id, INTERNAL_ERROR, err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GithubSettings, RepositorySettings, Settings};
    use pretty_assertions::assert_eq;

    fn server_with_api(api_url: Option<String>) -> McpServer {
        let settings = Settings {
            repository: RepositorySettings {
                owner: "octocat".to_string(),
                name: "Hello-World".to_string(),
            },
            github: GithubSettings {
                api_url: api_url.unwrap_or_else(|| "http://127.0.0.1:1".to_string()),
                user_agent: "github-mcp-tests".to_string(),
            },
        };
        let github = Arc::new(GithubClient::new(&settings.github, "test-token".to_string()));
        McpServer::new(
            Arc::new(settings),
            tools::init_registry(),
            resources::init_registry(),
            github,
        )
    }

    #[tokio::test]
    async fn malformed_json_yields_parse_error() {
        let server = server_with_api(None);
        let response = server.handle_line("{not json").await.unwrap();
        assert_eq!(response.error.unwrap().code, PARSE_ERROR);
    }

    #[tokio::test]
    async fn unknown_method_yields_method_not_found() {
        let server = server_with_api(None);
        let response = server
            .handle_line(r#"{"jsonrpc": "2.0", "method": "prompts/list", "id": 1}"#)
            .await
            .unwrap();
        let error = response.error.unwrap();
        assert_eq!(error.code, METHOD_NOT_FOUND);
        assert_eq!(error.message, "Method not found: prompts/list");
    }

    #[tokio::test]
    async fn notifications_are_not_answered() {
        let server = server_with_api(None);
        let response = server
            .handle_line(r#"{"jsonrpc": "2.0", "method": "notifications/initialized"}"#)
            .await;
        assert!(response.is_none());
    }

    #[tokio::test]
    async fn initialize_advertises_protocol_and_capabilities() {
        let server = server_with_api(None);
        let response = server
            .handle_line(r#"{"jsonrpc": "2.0", "method": "initialize", "id": 1}"#)
            .await
            .unwrap();
        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], crate::MCP_PROTOCOL_VERSION);
        assert_eq!(result["serverInfo"]["name"], crate::SERVER_NAME);
        assert_eq!(result["capabilities"]["tools"], json!({}));
    }

    #[tokio::test]
    async fn tools_list_returns_the_full_catalog() {
        let server = server_with_api(None);
        let response = server
            .handle_line(r#"{"jsonrpc": "2.0", "method": "tools/list", "id": 2}"#)
            .await
            .unwrap();
        let tools = response.result.unwrap()["tools"].as_array().unwrap().clone();
        assert_eq!(tools.len(), 10);
        let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
        assert!(names.contains(&"get_repository_info"));
        assert!(names.contains(&"create_or_update_file"));
        assert!(tools[0].get("inputSchema").is_some());
    }

    #[tokio::test]
    async fn resources_list_returns_the_fixed_set() {
        let server = server_with_api(None);
        let response = server
            .handle_line(r#"{"jsonrpc": "2.0", "method": "resources/list", "id": 3}"#)
            .await
            .unwrap();
        let resources = response.result.unwrap()["resources"]
            .as_array()
            .unwrap()
            .clone();
        assert_eq!(resources.len(), 3);
    }

    #[tokio::test]
    async fn unknown_tool_comes_back_as_error_envelope() {
        let server = server_with_api(None);
        let response = server
            .handle_line(
                r#"{"jsonrpc": "2.0", "method": "tools/call", "id": 4,
                    "params": {"name": "does_not_exist", "arguments": {}}}"#,
            )
            .await
            .unwrap();

        // A tool-level failure is not a JSON-RPC error.
        assert!(response.error.is_none());
        let result = response.result.unwrap();
        assert_eq!(result["isError"], true);
        assert_eq!(
            result["content"][0]["text"],
            "Unknown tool: does_not_exist"
        );
    }

    #[tokio::test]
    async fn unknown_resource_is_a_prefixed_rpc_error() {
        let server = server_with_api(None);
        let response = server
            .handle_line(
                r#"{"jsonrpc": "2.0", "method": "resources/read", "id": 5,
                    "params": {"uri": "github://nope"}}"#,
            )
            .await
            .unwrap();
        let error = response.error.unwrap();
        assert_eq!(error.code, INTERNAL_ERROR);
        assert_eq!(
            error.message,
            "Failed to read resource: Unknown resource: github://nope"
        );
    }

    #[tokio::test]
    async fn ping_returns_empty_object() {
        let server = server_with_api(None);
        let response = server
            .handle_line(r#"{"jsonrpc": "2.0", "method": "ping", "id": 6}"#)
            .await
            .unwrap();
        assert_eq!(response.result.unwrap(), json!({}));
    }

    #[tokio::test]
    async fn resource_read_round_trips_through_the_server() {
        let mut upstream = mockito::Server::new_async().await;
        let _mock = upstream
            .mock("GET", "/repos/octocat/Hello-World")
            .with_status(200)
            .with_body(r#"{"full_name": "octocat/Hello-World"}"#)
            .create_async()
            .await;

        let server = server_with_api(Some(upstream.url()));
        let response = server
            .handle_line(
                r#"{"jsonrpc": "2.0", "method": "resources/read", "id": 7,
                    "params": {"uri": "github://repository"}}"#,
            )
            .await
            .unwrap();
        let contents = &response.result.unwrap()["contents"][0];
        assert_eq!(contents["uri"], "github://repository");
        assert_eq!(contents["mimeType"], "application/json");
        assert!(contents["text"]
            .as_str()
            .unwrap()
            .contains("octocat/Hello-World"));
    }
}
