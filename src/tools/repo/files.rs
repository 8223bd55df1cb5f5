// File listing tool
//
// Lists the entries at a path in the repository tree, passing the upstream
// listing through unmodified.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::errors::ToolError;
use crate::tools::params::optional_str;
use crate::tools::{
    Tool, ToolContext, ToolDefinition, ToolOutput, ToolParameter, ToolRegistry, ToolResult,
};

pub struct ListFilesTool;

impl ListFilesTool {
    /// Register this tool with the registry
    pub fn register(registry: &mut ToolRegistry) -> Result<(), ToolError> {
        registry.register_tool(Arc::new(Self))
    }
}

#[async_trait]
impl Tool for ListFilesTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "list_files".to_string(),
            description: "List files in the repository".to_string(),
            parameters: vec![
                ToolParameter::optional(
                    "path",
                    "string",
                    "Path to list files from (default: root)",
                    None,
                ),
                ToolParameter::optional(
                    "recursive",
                    "boolean",
                    "Whether to list files recursively",
                    Some(json!(false)),
                ),
            ],
        }
    }

    async fn execute(&self, params: Value, context: ToolContext) -> ToolResult {
        self.validate_params(&params)?;

        let path = optional_str(&params, "path", "");

        let repo = &context.repository;
        let listing = context
            .github
            .get_contents(&repo.owner, &repo.name, path, None)
            .await?;
        Ok(ToolOutput::Json(listing))
    }
}
