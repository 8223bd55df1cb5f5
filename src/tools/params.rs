// Argument extraction helpers shared by the tool handlers.
//
// `validate_params` guarantees required keys are present before a handler
// runs; these helpers re-check anyway so each extraction is total.

use serde_json::Value;

use crate::errors::ToolError;

/// Extract a required string argument.
pub fn required_str<'a>(params: &'a Value, name: &str) -> Result<&'a str, ToolError> {
    match params.get(name) {
        None | Some(Value::Null) => Err(ToolError::MissingParameter(name.to_string())),
        Some(Value::String(value)) => Ok(value),
        Some(_) => Err(ToolError::InvalidParameters(format!(
            "Parameter '{}' must be a string",
            name
        ))),
    }
}

/// Extract an optional string argument, falling back to the declared default.
pub fn optional_str<'a>(params: &'a Value, name: &str, default: &'a str) -> &'a str {
    params.get(name).and_then(Value::as_str).unwrap_or(default)
}

/// Extract an optional numeric argument, falling back to the declared default.
pub fn optional_u32(params: &Value, name: &str, default: u32) -> u32 {
    params
        .get(name)
        .and_then(Value::as_u64)
        .map(|value| value as u32)
        .unwrap_or(default)
}

/// Extract an optional list of strings; non-string entries are ignored.
pub fn optional_str_list(params: &Value, name: &str) -> Vec<String> {
    params
        .get(name)
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn required_str_distinguishes_missing_from_mistyped() {
        let params = json!({"path": "src/lib.rs", "limit": 5});

        assert_eq!(required_str(&params, "path").unwrap(), "src/lib.rs");

        let err = required_str(&params, "branch").unwrap_err();
        assert_eq!(err.to_string(), "Missing required parameter: branch");

        let err = required_str(&params, "limit").unwrap_err();
        assert_eq!(err.to_string(), "Invalid tool parameters: Parameter 'limit' must be a string");
    }

    #[test]
    fn optional_extractors_apply_defaults() {
        let params = json!({});
        assert_eq!(optional_str(&params, "branch", "main"), "main");
        assert_eq!(optional_u32(&params, "limit", 10), 10);
        assert!(optional_str_list(&params, "labels").is_empty());

        let params = json!({"branch": "dev", "limit": 3, "labels": ["bug", 7, "ui"]});
        assert_eq!(optional_str(&params, "branch", "main"), "dev");
        assert_eq!(optional_u32(&params, "limit", 10), 3);
        assert_eq!(optional_str_list(&params, "labels"), vec!["bug", "ui"]);
    }
}
