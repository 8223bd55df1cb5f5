// Repository info tool
//
// Returns the repository metadata exactly as the upstream API reports it.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::ToolError;
use crate::tools::{Tool, ToolContext, ToolDefinition, ToolOutput, ToolRegistry, ToolResult};

pub struct RepositoryInfoTool;

impl RepositoryInfoTool {
    /// Register this tool with the registry
    pub fn register(registry: &mut ToolRegistry) -> Result<(), ToolError> {
        registry.register_tool(Arc::new(Self))
    }
}

#[async_trait]
impl Tool for RepositoryInfoTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "get_repository_info".to_string(),
            description: "Get information about the GitHub repository".to_string(),
            parameters: vec![],
        }
    }

    async fn execute(&self, params: Value, context: ToolContext) -> ToolResult {
        self.validate_params(&params)?;

        let repo = &context.repository;
        let info = context.github.get_repository(&repo.owner, &repo.name).await?;
        Ok(ToolOutput::Json(info))
    }
}
