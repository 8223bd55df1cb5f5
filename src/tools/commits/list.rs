// Commit listing tool
//
// Lists recent commits on a branch, projected down to the fields a client
// actually reads.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::defaults;
use crate::errors::ToolError;
use crate::tools::params::{optional_str, optional_u32};
use crate::tools::{
    Tool, ToolContext, ToolDefinition, ToolOutput, ToolParameter, ToolRegistry, ToolResult,
};

pub struct ListCommitsTool;

impl ListCommitsTool {
    /// Register this tool with the registry
    pub fn register(registry: &mut ToolRegistry) -> Result<(), ToolError> {
        registry.register_tool(Arc::new(Self))
    }
}

#[async_trait]
impl Tool for ListCommitsTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "list_commits".to_string(),
            description: "List recent commits in the repository".to_string(),
            parameters: vec![
                ToolParameter::optional(
                    "limit",
                    "number",
                    "Number of commits to return (default: 10)",
                    Some(json!(defaults::LIMIT)),
                ),
                ToolParameter::optional(
                    "branch",
                    "string",
                    "Branch name (default: main)",
                    Some(json!(defaults::BRANCH)),
                ),
            ],
        }
    }

    async fn execute(&self, params: Value, context: ToolContext) -> ToolResult {
        self.validate_params(&params)?;

        let limit = optional_u32(&params, "limit", defaults::LIMIT);
        let branch = optional_str(&params, "branch", defaults::BRANCH);

        let repo = &context.repository;
        let commits = context
            .github
            .list_commits(&repo.owner, &repo.name, branch, limit)
            .await?;

        let projection: Vec<Value> = commits
            .iter()
            .map(|commit| {
                let author = commit.commit.author.as_ref();
                json!({
                    "sha": commit.sha,
                    "message": commit.commit.message,
                    "author": author.and_then(|a| a.name.clone()),
                    "date": author.and_then(|a| a.date.clone()),
                    "url": commit.html_url,
                })
            })
            .collect();

        Ok(ToolOutput::Json(Value::Array(projection)))
    }
}
