//! Structural validation and decoding of a sanitized JSON candidate.

use super::types::AutomationBlueprint;
use serde_json::{Map, Value};
use thiserror::Error;

/// Required top-level text fields, in the order they are checked.
pub const REQUIRED_TEXT_FIELDS: [&str; 4] = [
    "industry",
    "pain_point",
    "solution_title",
    "solution_description",
];

/// Errors that can occur while turning a JSON candidate into a blueprint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The candidate is not syntactically valid JSON.
    #[error("Malformed JSON at line {line}, column {column}: {message}")]
    MalformedJson {
        line: usize,
        column: usize,
        message: String,
    },

    /// A required field is missing or has the wrong kind. `field` is the
    /// first offending path, e.g. `workflow_steps[1].description`.
    #[error("Schema mismatch at '{field}': expected {expected}")]
    SchemaMismatch {
        field: String,
        expected: &'static str,
    },
}

impl DecodeError {
    fn mismatch(field: impl Into<String>, expected: &'static str) -> Self {
        DecodeError::SchemaMismatch {
            field: field.into(),
            expected,
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::MalformedJson {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

/// Parses, shape-checks and normalizes a JSON candidate.
///
/// Pure: the same input always yields the same blueprint or the same error.
/// Optional fields that are absent or `null` come back as empty strings or
/// empty vectors.
pub fn decode_blueprint(candidate: &str) -> Result<AutomationBlueprint, DecodeError> {
    let value: Value = serde_json::from_str(candidate)?;
    check_shape(&value)?;

    // Shape already checked; a failure here means the two disagree.
    serde_json::from_value(value).map_err(|e| DecodeError::SchemaMismatch {
        field: format!("$ ({e})"),
        expected: "a blueprint object",
    })
}

fn check_shape(value: &Value) -> Result<(), DecodeError> {
    let root = value
        .as_object()
        .ok_or_else(|| DecodeError::mismatch("$", "an object"))?;

    for field in REQUIRED_TEXT_FIELDS {
        require_string(root, field, field.to_string())?;
    }

    let steps = match root.get("workflow_steps") {
        Some(Value::Array(steps)) if !steps.is_empty() => steps,
        _ => return Err(DecodeError::mismatch("workflow_steps", "a non-empty array")),
    };
    for (i, step) in steps.iter().enumerate() {
        let path = format!("workflow_steps[{i}]");
        let step = step
            .as_object()
            .ok_or_else(|| DecodeError::mismatch(path.clone(), "an object"))?;
        require_string(step, "tool_name", format!("{path}.tool_name"))?;
        optional_string(step, "action", format!("{path}.action"))?;
        require_string(step, "description", format!("{path}.description"))?;
    }

    let stack = match root.get("saas_stack") {
        None | Some(Value::Null) => return Ok(()),
        Some(Value::Array(stack)) => stack,
        Some(_) => return Err(DecodeError::mismatch("saas_stack", "an array or null")),
    };
    for (i, tool) in stack.iter().enumerate() {
        let path = format!("saas_stack[{i}]");
        let tool = tool
            .as_object()
            .ok_or_else(|| DecodeError::mismatch(path.clone(), "an object"))?;
        require_string(tool, "tool_name", format!("{path}.tool_name"))?;
        require_string(tool, "role", format!("{path}.role"))?;
        optional_string(tool, "connection_type", format!("{path}.connection_type"))?;
    }

    Ok(())
}

fn require_string(object: &Map<String, Value>, key: &str, path: String) -> Result<(), DecodeError> {
    match object.get(key) {
        Some(Value::String(_)) => Ok(()),
        _ => Err(DecodeError::mismatch(path, "a string")),
    }
}

fn optional_string(
    object: &Map<String, Value>,
    key: &str,
    path: String,
) -> Result<(), DecodeError> {
    match object.get(key) {
        None | Some(Value::Null) | Some(Value::String(_)) => Ok(()),
        Some(_) => Err(DecodeError::mismatch(path, "a string or null")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid() -> Value {
        json!({
            "industry": "Retail",
            "pain_point": "manual entry",
            "solution_title": "Auto-sync",
            "solution_description": "syncs orders",
            "workflow_steps": [
                {"tool_name": "Gmail", "description": "watch inbox"},
                {"tool_name": "Sheets", "action": "Append row", "description": "log order"}
            ],
            "saas_stack": [
                {"tool_name": "Gmail", "role": "intake", "connection_type": "Native"}
            ]
        })
    }

    fn decode_value(value: &Value) -> Result<AutomationBlueprint, DecodeError> {
        decode_blueprint(&value.to_string())
    }

    #[test]
    fn test_decodes_and_normalizes() {
        let blueprint = decode_value(&valid()).unwrap();
        assert_eq!(blueprint.industry, "Retail");
        assert_eq!(blueprint.step_count(), 2);
        assert_eq!(blueprint.workflow_steps[0].action, "");
        assert_eq!(blueprint.workflow_steps[1].action, "Append row");
        assert_eq!(blueprint.saas_stack[0].connection_type, "Native");
    }

    #[test]
    fn test_missing_or_null_stack_becomes_empty() {
        let mut value = valid();
        value.as_object_mut().unwrap().remove("saas_stack");
        assert!(decode_value(&value).unwrap().saas_stack.is_empty());

        value["saas_stack"] = Value::Null;
        assert!(decode_value(&value).unwrap().saas_stack.is_empty());
    }

    #[test]
    fn test_malformed_json_carries_position() {
        let err = decode_blueprint("{\"industry\": \"Retail\",\n  oops}").unwrap_err();
        match err {
            DecodeError::MalformedJson { line, column, .. } => {
                assert_eq!(line, 2);
                assert!(column > 0);
            }
            other => panic!("expected MalformedJson, got {other:?}"),
        }
    }

    #[test]
    fn test_non_object_root() {
        assert_eq!(
            decode_blueprint("[1, 2]"),
            Err(DecodeError::mismatch("$", "an object"))
        );
    }

    #[test]
    fn test_first_offending_top_level_field_is_named() {
        assert_eq!(
            decode_blueprint(r#"{"industry":"Retail"}"#),
            Err(DecodeError::mismatch("pain_point", "a string"))
        );

        let mut value = valid();
        value["solution_title"] = json!(42);
        value["solution_description"] = Value::Null;
        assert_eq!(
            decode_value(&value),
            Err(DecodeError::mismatch("solution_title", "a string"))
        );
    }

    #[test]
    fn test_workflow_steps_must_be_non_empty_array() {
        let mut value = valid();
        value["workflow_steps"] = json!([]);
        assert_eq!(
            decode_value(&value),
            Err(DecodeError::mismatch("workflow_steps", "a non-empty array"))
        );

        value["workflow_steps"] = json!({"tool_name": "Gmail"});
        assert_eq!(
            decode_value(&value),
            Err(DecodeError::mismatch("workflow_steps", "a non-empty array"))
        );
    }

    #[test]
    fn test_nested_paths_are_reported() {
        let mut value = valid();
        value["workflow_steps"][1]
            .as_object_mut()
            .unwrap()
            .remove("description");
        assert_eq!(
            decode_value(&value),
            Err(DecodeError::mismatch(
                "workflow_steps[1].description",
                "a string"
            ))
        );

        let mut value = valid();
        value["workflow_steps"][0]["action"] = json!(["not", "text"]);
        assert_eq!(
            decode_value(&value),
            Err(DecodeError::mismatch(
                "workflow_steps[0].action",
                "a string or null"
            ))
        );

        let mut value = valid();
        value["saas_stack"] = json!(["Zapier"]);
        assert_eq!(
            decode_value(&value),
            Err(DecodeError::mismatch("saas_stack[0]", "an object"))
        );
    }

    #[test]
    fn test_decoding_is_deterministic() {
        let inputs = [
            valid().to_string(),
            r#"{"industry":"Retail"}"#.to_string(),
            "{not json".to_string(),
        ];
        for input in inputs {
            assert_eq!(decode_blueprint(&input), decode_blueprint(&input));
        }
    }
}
