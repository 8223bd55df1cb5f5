// Tools module for the MCP server
//
// This module implements the tool registration and execution system. Every
// tool is stateless: it reads its arguments, makes at most two upstream
// calls, and reshapes the response into the success payload.

pub mod commits;
pub mod issues;
mod params;
pub mod pulls;
pub mod repo;
mod registry;

pub use registry::{
    Tool, ToolDefinition, ToolOutput, ToolParameter, ToolRegistry, ToolResult,
};

use std::sync::Arc;

use serde_json::Value;

use crate::config::RepositorySettings;
use crate::errors::ToolError;
use crate::github::GithubClient;
use crate::protocol::CallToolResult;

/// ToolContext holds the fixed repository identity and the upstream client
/// handle. Constructed once at startup and cloned per invocation; tools
/// share nothing else between calls.
#[derive(Clone)]
pub struct ToolContext {
    /// Repository the server is bound to
    pub repository: RepositorySettings,
    /// Upstream API client
    pub github: Arc<GithubClient>,
}

/// Build the full tool catalog.
pub fn init_registry() -> Arc<ToolRegistry> {
    let mut registry = ToolRegistry::new();

    // Register repository tools
    repo::register_tools(&mut registry);

    // Register commit tools
    commits::register_tools(&mut registry);

    // Register issue tools
    issues::register_tools(&mut registry);

    // Register pull request tools
    pulls::register_tools(&mut registry);

    Arc::new(registry)
}

/// Execute a tool by name, converting every failure into an error envelope.
///
/// This function never fails at the transport level: unknown names,
/// validation failures and upstream errors all come back as a result with
/// the error flag set.
pub async fn execute_tool(
    registry: &ToolRegistry,
    name: &str,
    arguments: Value,
    context: ToolContext,
) -> CallToolResult {
    let Some(tool) = registry.get_tool(name) else {
        return CallToolResult::error(ToolError::Unknown(name.to_string()).to_string());
    };

    match tool.execute(arguments, context).await {
        Ok(ToolOutput::Json(value)) => match serde_json::to_string_pretty(&value) {
            Ok(text) => CallToolResult::text(text),
            Err(err) => {
                CallToolResult::error(ToolError::ExecutionFailed(err.to_string()).to_string())
            }
        },
        Ok(ToolOutput::Text(text)) => CallToolResult::text(text),
        Err(err) => CallToolResult::error(err.to_string()),
    }
}
