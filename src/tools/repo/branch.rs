// Branch info tool
//
// Returns a curated view of one branch: its head commit and protection flag.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::defaults;
use crate::errors::ToolError;
use crate::tools::params::optional_str;
use crate::tools::{
    Tool, ToolContext, ToolDefinition, ToolOutput, ToolParameter, ToolRegistry, ToolResult,
};

pub struct BranchInfoTool;

impl BranchInfoTool {
    /// Register this tool with the registry
    pub fn register(registry: &mut ToolRegistry) -> Result<(), ToolError> {
        registry.register_tool(Arc::new(Self))
    }
}

#[async_trait]
impl Tool for BranchInfoTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "get_branch_info".to_string(),
            description: "Get information about a branch".to_string(),
            parameters: vec![ToolParameter::optional(
                "branch",
                "string",
                "Branch name (default: main)",
                Some(json!(defaults::BRANCH)),
            )],
        }
    }

    async fn execute(&self, params: Value, context: ToolContext) -> ToolResult {
        self.validate_params(&params)?;

        let branch = optional_str(&params, "branch", defaults::BRANCH);

        let repo = &context.repository;
        let details = context
            .github
            .get_branch(&repo.owner, &repo.name, branch)
            .await?;

        let author = details.commit.commit.author.as_ref();
        Ok(ToolOutput::Json(json!({
            "name": details.name,
            "sha": details.commit.sha,
            "message": details.commit.commit.message,
            "author": author.and_then(|a| a.name.clone()),
            "date": author.and_then(|a| a.date.clone()),
            "protected": details.protected,
        })))
    }
}
