// Commit detail tool
//
// Fetches one commit and projects its metadata, per-file changes and stats.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::errors::ToolError;
use crate::tools::params::required_str;
use crate::tools::{
    Tool, ToolContext, ToolDefinition, ToolOutput, ToolParameter, ToolRegistry, ToolResult,
};

pub struct GetCommitTool;

impl GetCommitTool {
    /// Register this tool with the registry
    pub fn register(registry: &mut ToolRegistry) -> Result<(), ToolError> {
        registry.register_tool(Arc::new(Self))
    }
}

#[async_trait]
impl Tool for GetCommitTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "get_commit".to_string(),
            description: "Get details of a specific commit".to_string(),
            parameters: vec![ToolParameter::required("sha", "string", "Commit SHA")],
        }
    }

    async fn execute(&self, params: Value, context: ToolContext) -> ToolResult {
        self.validate_params(&params)?;

        let sha = required_str(&params, "sha")?;

        let repo = &context.repository;
        let commit = context
            .github
            .get_commit(&repo.owner, &repo.name, sha)
            .await?;

        let author = commit.commit.author.as_ref();
        let files: Option<Vec<Value>> = commit.files.as_ref().map(|files| {
            files
                .iter()
                .map(|file| {
                    json!({
                        "filename": file.filename,
                        "status": file.status,
                        "additions": file.additions,
                        "deletions": file.deletions,
                    })
                })
                .collect()
        });

        Ok(ToolOutput::Json(json!({
            "sha": commit.sha,
            "message": commit.commit.message,
            "author": author.and_then(|a| a.name.clone()),
            "date": author.and_then(|a| a.date.clone()),
            "files": files,
            "stats": commit.stats,
            "url": commit.html_url,
        })))
    }
}
