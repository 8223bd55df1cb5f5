// Issue listing tool
//
// Lists issues filtered by state, projected to a curated subset of fields.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::defaults;
use crate::errors::ToolError;
use crate::github::Label;
use crate::tools::params::{optional_str, optional_u32};
use crate::tools::{
    Tool, ToolContext, ToolDefinition, ToolOutput, ToolParameter, ToolRegistry, ToolResult,
};

pub struct ListIssuesTool;

impl ListIssuesTool {
    /// Register this tool with the registry
    pub fn register(registry: &mut ToolRegistry) -> Result<(), ToolError> {
        registry.register_tool(Arc::new(Self))
    }
}

#[async_trait]
impl Tool for ListIssuesTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "list_issues".to_string(),
            description: "List issues in the repository".to_string(),
            parameters: vec![
                ToolParameter::optional(
                    "state",
                    "string",
                    "Issue state: open, closed, or all (default: open)",
                    Some(json!(defaults::STATE)),
                )
                .with_enum(&["open", "closed", "all"]),
                ToolParameter::optional(
                    "limit",
                    "number",
                    "Number of issues to return (default: 10)",
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
        let issues = context
            .github
            .list_issues(&repo.owner, &repo.name, state, limit)
            .await?;

        let projection: Vec<Value> = issues
            .iter()
            .map(|issue| {
                let labels: Vec<&str> = issue.labels.iter().map(Label::name).collect();
                json!({
                    "number": issue.number,
                    "title": issue.title,
                    "state": issue.state,
                    "body": issue.body,
                    "labels": labels,
                    "created_at": issue.created_at,
                    "updated_at": issue.updated_at,
                    "url": issue.html_url,
                })
            })
            .collect();

        Ok(ToolOutput::Json(Value::Array(projection)))
    }
}
