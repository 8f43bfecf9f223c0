//! Required-field checks run before typed decoding

use serde_json::{Map, Value};

use crate::error::DecodeError;

/// JSON kind a required field must carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireKind {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
}

impl WireKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WireKind::String => "string",
            WireKind::Number => "number",
            WireKind::Integer => "integer",
            WireKind::Boolean => "boolean",
            WireKind::Array => "array",
            WireKind::Object => "object",
        }
    }

    fn matches(&self, value: &Value) -> bool {
        match self {
            WireKind::String => value.is_string(),
            WireKind::Number => value.is_number(),
            WireKind::Integer => value.is_i64() || value.is_u64(),
            WireKind::Boolean => value.is_boolean(),
            WireKind::Array => value.is_array(),
            WireKind::Object => value.is_object(),
        }
    }
}

/// A wire key that must be present and non-null
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredField {
    pub name: &'static str,
    pub kind: WireKind,
}

impl RequiredField {
    pub const fn new(name: &'static str, kind: WireKind) -> Self {
        Self { name, kind }
    }
}

/// Name of a value's JSON kind, for error messages
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Fails on the first required field that is absent, null, or of the wrong kind.
pub(crate) fn check(required: &[RequiredField], map: &Map<String, Value>) -> Result<(), DecodeError> {
    for field in required {
        match map.get(field.name) {
            None | Some(Value::Null) => return Err(DecodeError::MissingRequiredField(field.name)),
            Some(value) if !field.kind.matches(value) => {
                return Err(DecodeError::InvalidRequiredField {
                    field: field.name,
                    expected: field.kind.as_str(),
                    found: json_kind(value),
                });
            }
            Some(_) => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FIELDS: &[RequiredField] = &[
        RequiredField::new("type", WireKind::String),
        RequiredField::new("workflow_id", WireKind::String),
    ];

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_all_present() {
        let map = object(json!({"type": "run_workflow", "workflow_id": "w"}));
        assert!(check(FIELDS, &map).is_ok());
    }

    #[test]
    fn test_first_missing_field_reported() {
        let map = object(json!({}));
        let err = check(FIELDS, &map).unwrap_err();
        assert!(matches!(err, DecodeError::MissingRequiredField("type")));
    }

    #[test]
    fn test_null_counts_as_missing() {
        let map = object(json!({"type": "run_workflow", "workflow_id": null}));
        let err = check(FIELDS, &map).unwrap_err();
        assert!(matches!(err, DecodeError::MissingRequiredField("workflow_id")));
    }

    #[test]
    fn test_wrong_kind() {
        let map = object(json!({"type": "run_workflow", "workflow_id": ["w"]}));
        let err = check(FIELDS, &map).unwrap_err();
        match err {
            DecodeError::InvalidRequiredField {
                field,
                expected,
                found,
            } => {
                assert_eq!(field, "workflow_id");
                assert_eq!(expected, "string");
                assert_eq!(found, "array");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_integer_kind_rejects_floats() {
        assert!(WireKind::Integer.matches(&json!(3)));
        assert!(!WireKind::Integer.matches(&json!(3.5)));
        assert!(WireKind::Number.matches(&json!(3.5)));
    }

    #[test]
    fn test_no_required_fields() {
        assert!(check(&[], &Map::new()).is_ok());
    }
}
