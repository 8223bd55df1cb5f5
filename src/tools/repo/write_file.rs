// File write tool
//
// Creates or updates a single file. The write is shaped like a compare-and-
// swap against the upstream: the current blob sha is resolved first, and the
// write carries it so the API can reject a stale update. A missing file is
// the expected create case; any other probe failure aborts before the write.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::defaults;
use crate::errors::{GithubError, ToolError};
use crate::github::{encode_content, FileWrite};
use crate::tools::params::{optional_str, required_str};
use crate::tools::{
    Tool, ToolContext, ToolDefinition, ToolOutput, ToolParameter, ToolRegistry, ToolResult,
};

pub struct WriteFileTool;

impl WriteFileTool {
    /// Register this tool with the registry
    pub fn register(registry: &mut ToolRegistry) -> Result<(), ToolError> {
        registry.register_tool(Arc::new(Self))
    }
}

#[async_trait]
impl Tool for WriteFileTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "create_or_update_file".to_string(),
            description: "Create or update a file in the repository".to_string(),
            parameters: vec![
                ToolParameter::required("path", "string", "Path to the file"),
                ToolParameter::required("content", "string", "File content (plain text)"),
                ToolParameter::optional(
                    "message",
                    "string",
                    "Commit message (default: \"Update <path>\")",
                    None,
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

        let path = required_str(&params, "path")?;
        let content = required_str(&params, "content")?;
        let branch = optional_str(&params, "branch", defaults::BRANCH);
        let default_message = format!("Update {}", path);
        let message = optional_str(&params, "message", &default_message);

        let repo = &context.repository;

        // Resolve the current blob sha; without it the upstream would treat
        // an update of an existing file as a conflicting create.
        let sha = match context
            .github
            .get_file(&repo.owner, &repo.name, path, Some(branch))
            .await
        {
            Ok(file) => Some(file.sha),
            Err(GithubError::NotFound(_)) => None,
            Err(err) => return Err(err.into()),
        };

        let write = FileWrite {
            message: message.to_string(),
            content: encode_content(content),
            branch: branch.to_string(),
            sha,
        };
        let response = context
            .github
            .put_file(&repo.owner, &repo.name, path, &write)
            .await?;

        Ok(ToolOutput::Json(json!({
            "path": response.content.as_ref().map(|c| c.path.clone()),
            "sha": response.content.as_ref().map(|c| c.sha.clone()),
            "branch": branch,
            "commit": {
                "sha": response.commit.sha,
                "message": response.commit.message,
            },
            "url": response.content.as_ref().and_then(|c| c.html_url.clone()),
        })))
    }
}
