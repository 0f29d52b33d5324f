//! Structural input schemas for tools.
//!
//! A schema is a list of required fields, each either a free string or one
//! of a fixed set of strings. It renders to JSON Schema for `list_tools` and
//! validates incoming arguments before a handler runs.

use rmcp::model::JsonObject;
use serde_json::{Value, json};

use super::error::{ToolError, ToolOutcome};

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    String,
    OneOf(&'static [&'static str]),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SchemaField {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: FieldKind,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSchema {
    fields: Vec<SchemaField>,
}

impl InputSchema {
    /// A schema with no fields.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a required string field.
    pub fn string(mut self, name: &'static str, description: &'static str) -> Self {
        self.fields.push(SchemaField {
            name,
            description,
            kind: FieldKind::String,
        });
        self
    }

    /// Add a required field restricted to `allowed`.
    pub fn one_of(
        mut self,
        name: &'static str,
        description: &'static str,
        allowed: &'static [&'static str],
    ) -> Self {
        self.fields.push(SchemaField {
            name,
            description,
            kind: FieldKind::OneOf(allowed),
        });
        self
    }

    pub fn fields(&self) -> &[SchemaField] {
        &self.fields
    }

    /// JSON Schema object advertised in `list_tools`.
    pub fn to_json_object(&self) -> JsonObject {
        let mut schema = JsonObject::new();
        schema.insert("type".to_string(), json!("object"));

        let mut properties = serde_json::Map::new();
        for field in &self.fields {
            let property = match &field.kind {
                FieldKind::String => json!({
                    "type": "string",
                    "description": field.description,
                }),
                FieldKind::OneOf(allowed) => json!({
                    "type": "string",
                    "enum": allowed,
                    "description": field.description,
                }),
            };
            properties.insert(field.name.to_string(), property);
        }

        let required: Vec<&str> = self.fields.iter().map(|f| f.name).collect();
        schema.insert("properties".to_string(), Value::Object(properties));
        schema.insert("required".to_string(), json!(required));
        schema
    }

    /// Check `args` against the schema.
    ///
    /// Fields are checked in declaration order and the first violation is
    /// reported. Arguments the schema does not mention are dropped.
    pub fn validate(&self, args: &JsonObject) -> ToolOutcome<ToolArguments> {
        let mut validated = JsonObject::new();
        for field in &self.fields {
            let value = args
                .get(field.name)
                .ok_or_else(|| ToolError::invalid_argument(field.name, "required field is missing"))?;

            let s = value.as_str().ok_or_else(|| {
                ToolError::invalid_argument(
                    field.name,
                    format!("expected a string, got {}", json_type_name(value)),
                )
            })?;

            if let FieldKind::OneOf(allowed) = &field.kind {
                if !allowed.contains(&s) {
                    return Err(ToolError::invalid_argument(
                        field.name,
                        format!("expected one of {}, got {:?}", allowed.join(", "), s),
                    ));
                }
            }

            validated.insert(field.name.to_string(), value.clone());
        }
        Ok(ToolArguments(validated))
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Arguments that passed schema validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolArguments(JsonObject);

impl ToolArguments {
    /// A validated string argument.
    pub fn str(&self, name: &str) -> ToolOutcome<&str> {
        self.0
            .get(name)
            .and_then(Value::as_str)
            .ok_or_else(|| ToolError::invalid_argument(name, "required field is missing"))
    }

    pub fn as_object(&self) -> &JsonObject {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    fn scroll_schema() -> InputSchema {
        InputSchema::empty()
            .one_of("direction", "Scroll direction", &["up", "down"])
            .one_of("speed", "Scroll speed", &["slow", "normal", "fast"])
    }

    #[test]
    fn test_json_schema_shape() {
        let schema = InputSchema::empty().string("ticker", "Stock ticker").to_json_object();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["ticker"]["type"], "string");
        assert_eq!(schema["required"], json!(["ticker"]));
    }

    #[test]
    fn test_enum_rendered() {
        let schema = scroll_schema().to_json_object();
        assert_eq!(schema["properties"]["speed"]["enum"], json!(["slow", "normal", "fast"]));
        assert_eq!(schema["required"], json!(["direction", "speed"]));
    }

    #[test]
    fn test_empty_schema_accepts_anything() {
        let validated = InputSchema::empty().validate(&args(json!({"extra": 1}))).unwrap();
        assert!(validated.as_object().is_empty());
    }

    #[test]
    fn test_missing_field() {
        let err = InputSchema::empty()
            .string("title", "New title")
            .validate(&JsonObject::new())
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments { ref field, .. } if field == "title"));
    }

    #[test]
    fn test_wrong_type() {
        let schema = InputSchema::empty().string("ticker", "Stock ticker");
        let err = schema.validate(&args(json!({"ticker": 42}))).unwrap_err();
        assert_eq!(err, ToolError::invalid_argument("ticker", "expected a string, got number"));

        let err = schema.validate(&args(json!({"ticker": null}))).unwrap_err();
        assert_eq!(err, ToolError::invalid_argument("ticker", "expected a string, got null"));
    }

    #[test]
    fn test_enum_violation_lists_allowed_values() {
        let err = scroll_schema()
            .validate(&args(json!({"direction": "sideways", "speed": "slow"})))
            .unwrap_err();
        assert_eq!(
            err,
            ToolError::invalid_argument("direction", "expected one of up, down, got \"sideways\"")
        );
    }

    #[test]
    fn test_first_violation_wins() {
        let err = scroll_schema().validate(&JsonObject::new()).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments { ref field, .. } if field == "direction"));
    }

    #[test]
    fn test_valid_arguments_are_readable() {
        let validated = scroll_schema()
            .validate(&args(json!({"direction": "up", "speed": "fast", "ignored": true})))
            .unwrap();
        assert_eq!(validated.str("direction").unwrap(), "up");
        assert_eq!(validated.str("speed").unwrap(), "fast");
        assert!(validated.str("ignored").is_err());
    }
}
