// File read tool
//
// Fetches a single file and returns its decoded text rather than the JSON
// wrapper the API puts around it.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::ToolError;
use crate::tools::params::required_str;
use crate::tools::{
    Tool, ToolContext, ToolDefinition, ToolOutput, ToolParameter, ToolRegistry, ToolResult,
};

pub struct ReadFileTool;

impl ReadFileTool {
    /// Register this tool with the registry
    pub fn register(registry: &mut ToolRegistry) -> Result<(), ToolError> {
        registry.register_tool(Arc::new(Self))
    }
}

#[async_trait]
impl Tool for ReadFileTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "read_file".to_string(),
            description: "Read a file from the repository".to_string(),
            parameters: vec![ToolParameter::required(
                "path",
                "string",
                "Path to the file to read",
            )],
        }
    }

    async fn execute(&self, params: Value, context: ToolContext) -> ToolResult {
        self.validate_params(&params)?;

        let path = required_str(&params, "path")?;

        let repo = &context.repository;
        let file = context
            .github
            .get_file(&repo.owner, &repo.name, path, None)
            .await?;
        let text = file.decoded_text()?;
        Ok(ToolOutput::Text(text))
    }
}
