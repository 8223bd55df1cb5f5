// Pull request listing tool
//
// Lists pull requests filtered by state, with their head and base branches.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::defaults;
use crate::errors::ToolError;
use crate::tools::params::{optional_str, optional_u32};
use crate::tools::{
    Tool, ToolContext, ToolDefinition, ToolOutput, ToolParameter, ToolRegistry, ToolResult,
};

pub struct ListPullRequestsTool;

impl ListPullRequestsTool {
    /// Register this tool with the registry
    pub fn register(registry: &mut ToolRegistry) -> Result<(), ToolError> {
        registry.register_tool(Arc::new(Self))
    }
}

#[async_trait]
impl Tool for ListPullRequestsTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "list_pull_requests".to_string(),
            description: "List pull requests in the repository".to_string(),
            parameters: vec![
                ToolParameter::optional(
                    "state",
                    "string",
                    "PR state: open, closed, or all (default: open)",
                    Some(json!(defaults::STATE)),
                )
                .with_enum(&["open", "closed", "all"]),
                ToolParameter::optional(
                    "limit",
                    "number",
                    "Number of PRs to return (default: 10)",
                    Some(json!(defaults::LIMIT)),
                ),
            ],
        }
    }

    async fn execute(&self, params: Value, context: ToolContext) -> ToolResult {
        self.validate_params(&params)?;

        let state = optional_str(&params, "state", defaults::STATE);
        let limit = optional_u32(&params, "limit", defaults::LIMIT);

        let repo = &context.repository;
        let pulls = context
            .github
            .list_pulls(&repo.owner, &repo.name, state, limit)
            .await?;

        let projection: Vec<Value> = pulls
            .iter()
            .map(|pull| {
                json!({
                    "number": pull.number,
                    "title": pull.title,
                    "state": pull.state,
                    "body": pull.body,
                    "head": pull.head.name,
                    "base": pull.base.name,
                    "created_at": pull.created_at,
                    "updated_at": pull.updated_at,
                    "url": pull.html_url,
                })
            })
            .collect();

        Ok(ToolOutput::Json(Value::Array(projection)))
    }
}
