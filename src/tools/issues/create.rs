// Issue creation tool
//
// The one write operation on issues; returns only the fields that identify
// the created issue.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::errors::ToolError;
use crate::github::NewIssue;
use crate::tools::params::{optional_str, optional_str_list, required_str};
use crate::tools::{
    Tool, ToolContext, ToolDefinition, ToolOutput, ToolParameter, ToolRegistry, ToolResult,
};

pub struct CreateIssueTool;

impl CreateIssueTool {
    /// Register this tool with the registry
    pub fn register(registry: &mut ToolRegistry) -> Result<(), ToolError> {
        registry.register_tool(Arc::new(Self))
    }
}

#[async_trait]
impl Tool for CreateIssueTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "create_issue".to_string(),
            description: "Create a new issue".to_string(),
            parameters: vec![
                ToolParameter::required("title", "string", "Issue title"),
                ToolParameter::optional("body", "string", "Issue body/description", None),
                ToolParameter::optional("labels", "array", "Labels to add to the issue", None)
                    .with_items("string"),
            ],
        }
    }

    async fn execute(&self, params: Value, context: ToolContext) -> ToolResult {
        self.validate_params(&params)?;

        let title = required_str(&params, "title")?;
        let body = optional_str(&params, "body", "");
        let labels = optional_str_list(&params, "labels");

        let new_issue = NewIssue {
            title: title.to_string(),
            body: body.to_string(),
            labels,
        };

        let repo = &context.repository;
        let issue = context
            .github
            .create_issue(&repo.owner, &repo.name, &new_issue)
            .await?;

        Ok(ToolOutput::Json(json!({
            "number": issue.number,
            "title": issue.title,
            "state": issue.state,
            "url": issue.html_url,
        })))
    }
}
