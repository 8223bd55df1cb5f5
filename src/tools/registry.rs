// Tool registry module
//
// This module defines the registry mapping tool names to their definitions
// and handlers. The discovery listing and the dispatch lookup are both
// derived from the same registrations, so the advertised catalog cannot
// drift from the implemented one.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::errors::ToolError;
use crate::protocol::ToolDescriptor;
use crate::tools::ToolContext;

/// ToolParameter defines a parameter for a tool
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Name of the parameter
    pub name: String,
    /// Description of the parameter
    pub description: String,
    /// Whether the parameter is required
    pub required: bool,
    /// JSON type of the parameter (string, number, boolean, array)
    pub parameter_type: String,
    /// Default value applied when the caller omits the parameter
    pub default: Option<Value>,
    /// Allowed values for the parameter (if restricted)
    pub enum_values: Option<Vec<Value>>,
    /// Element type for array parameters
    pub item_type: Option<String>,
}

impl ToolParameter {
    /// A required parameter with no default
    pub fn required(name: &str, parameter_type: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            required: true,
            parameter_type: parameter_type.to_string(),
            default: None,
            enum_values: None,
            item_type: None,
        }
    }

    /// An optional parameter, with or without a declared default
    pub fn optional(
        name: &str,
        parameter_type: &str,
        description: &str,
        default: Option<Value>,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            required: false,
            parameter_type: parameter_type.to_string(),
            default,
            enum_values: None,
            item_type: None,
        }
    }

    pub fn with_enum(mut self, values: &[&str]) -> Self {
        self.enum_values = Some(values.iter().map(|v| json!(v)).collect());
        self
    }

    pub fn with_items(mut self, item_type: &str) -> Self {
        self.item_type = Some(item_type.to_string());
        self
    }
}

/// ToolDefinition defines a tool available in the catalog
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Name of the tool
    pub name: String,
    /// Description of the tool
    pub description: String,
    /// Parameters for the tool
    pub parameters: Vec<ToolParameter>,
}

impl ToolDefinition {
    /// Render the parameter list as the JSON-Schema object advertised on
    /// the wire.
    pub fn input_schema(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();
        for param in &self.parameters {
            let mut prop = Map::new();
            prop.insert("type".to_string(), json!(param.parameter_type));
            prop.insert("description".to_string(), json!(param.description));
            if let Some(item_type) = &param.item_type {
                prop.insert("items".to_string(), json!({ "type": item_type }));
            }
            if let Some(default) = &param.default {
                prop.insert("default".to_string(), default.clone());
            }
            if let Some(values) = &param.enum_values {
                prop.insert("enum".to_string(), json!(values));
            }
            properties.insert(param.name.clone(), Value::Object(prop));
            if param.required {
                required.push(json!(param.name));
            }
        }

        let mut schema = Map::new();
        schema.insert("type".to_string(), json!("object"));
        schema.insert("properties".to_string(), Value::Object(properties));
        if !required.is_empty() {
            schema.insert("required".to_string(), Value::Array(required));
        }
        Value::Object(schema)
    }

    /// Wire descriptor for tools/list
    pub fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: self.name.clone(),
            description: self.description.clone(),
            input_schema: self.input_schema(),
        }
    }
}

/// Payload produced by a successful tool execution
#[derive(Clone, Debug, PartialEq)]
pub enum ToolOutput {
    /// Structured payload, rendered to the client as pretty-printed JSON
    Json(Value),
    /// Raw text payload (decoded file contents)
    Text(String),
}

/// Type alias for tool execution results
pub type ToolResult = Result<ToolOutput, ToolError>;

/// Tool trait for implementing tool functionality
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool definition
    fn definition(&self) -> ToolDefinition;

    /// Execute the tool with the given parameters and context
    async fn execute(&self, params: Value, context: ToolContext) -> ToolResult;

    /// Validate the parameters for the tool.
    ///
    /// Checks presence of required parameters only; no upstream call is
    /// made before this passes. A `null` value counts as missing.
    fn validate_params(&self, params: &Value) -> Result<(), ToolError> {
        let definition = self.definition();

        for param in definition.parameters.iter().filter(|p| p.required) {
            match params {
                Value::Object(map) => match map.get(&param.name) {
                    None | Some(Value::Null) => {
                        return Err(ToolError::MissingParameter(param.name.clone()));
                    }
                    Some(_) => {}
                },
                _ => {
                    return Err(ToolError::InvalidParameters(
                        "Parameters must be an object".to_string(),
                    ));
                }
            }
        }

        Ok(())
    }
}

/// ToolRegistry maps each tool name to its definition and handler
pub struct ToolRegistry {
    tools: BTreeMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            tools: BTreeMap::new(),
        }
    }

    /// Register a tool with the registry
    pub fn register_tool(&mut self, tool: Arc<dyn Tool>) -> Result<(), ToolError> {
        let name = tool.definition().name;

        if self.tools.contains_key(&name) {
            return Err(ToolError::RegistrationFailed(format!(
                "Tool with name '{}' already registered",
                name
            )));
        }

        self.tools.insert(name, tool);
        Ok(())
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// List all registered tool definitions, in name order
    pub fn list_tools(&self) -> Vec<ToolDefinition> {
        self.tools.values().map(|tool| tool.definition()).collect()
    }

    /// Wire descriptors for tools/list
    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.tools
            .values()
            .map(|tool| tool.definition().descriptor())
            .collect()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct NoopTool {
        name: &'static str,
    }

    #[async_trait]
    impl Tool for NoopTool {
        fn definition(&self) -> ToolDefinition {
            ToolDefinition {
                name: self.name.to_string(),
                description: "does nothing".to_string(),
                parameters: vec![
                    ToolParameter::required("path", "string", "Path to act on"),
                    ToolParameter::optional(
                        "state",
                        "string",
                        "State filter",
                        Some(json!("open")),
                    )
                    .with_enum(&["open", "closed", "all"]),
                ],
            }
        }

        async fn execute(&self, params: Value, _context: ToolContext) -> ToolResult {
            self.validate_params(&params)?;
            Ok(ToolOutput::Json(json!({"ok": true})))
        }
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = ToolRegistry::new();
        registry
            .register_tool(Arc::new(NoopTool { name: "noop" }))
            .unwrap();
        let err = registry
            .register_tool(Arc::new(NoopTool { name: "noop" }))
            .unwrap_err();
        assert!(matches!(err, ToolError::RegistrationFailed(_)));
    }

    #[test]
    fn listing_derives_from_registrations() {
        let mut registry = ToolRegistry::new();
        registry
            .register_tool(Arc::new(NoopTool { name: "b_tool" }))
            .unwrap();
        registry
            .register_tool(Arc::new(NoopTool { name: "a_tool" }))
            .unwrap();

        let names: Vec<String> = registry.list_tools().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["a_tool".to_string(), "b_tool".to_string()]);
        assert!(registry.get_tool("a_tool").is_some());
        assert!(registry.get_tool("missing").is_none());
    }

    #[test]
    fn validate_params_flags_missing_required() {
        let tool = NoopTool { name: "noop" };

        let err = tool.validate_params(&json!({})).unwrap_err();
        assert_eq!(err.to_string(), "Missing required parameter: path");

        // Explicit null counts as missing.
        let err = tool.validate_params(&json!({"path": null})).unwrap_err();
        assert_eq!(err.to_string(), "Missing required parameter: path");

        assert!(tool.validate_params(&json!({"path": "src"})).is_ok());
    }

    #[test]
    fn validate_params_rejects_non_object_bags() {
        let tool = NoopTool { name: "noop" };
        let err = tool.validate_params(&json!(["path"])).unwrap_err();
        assert!(matches!(err, ToolError::InvalidParameters(_)));
    }

    #[test]
    fn input_schema_carries_defaults_enums_and_required() {
        let tool = NoopTool { name: "noop" };
        let schema = tool.definition().input_schema();

        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["path"]["type"], "string");
        assert_eq!(schema["properties"]["state"]["default"], "open");
        assert_eq!(
            schema["properties"]["state"]["enum"],
            json!(["open", "closed", "all"])
        );
        assert_eq!(schema["required"], json!(["path"]));
    }
}
