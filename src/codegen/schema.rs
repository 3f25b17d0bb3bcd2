//! API definition model and JSON schema parsing.

use crate::error::{AgentkitError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

fn default_service() -> String {
    "agentkit".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiDefinition {
    /// Service key used by `ServiceClient` for endpoint resolution.
    #[serde(default = "default_service")]
    pub service: String,
    pub client: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub version: String,
    pub actions: BTreeMap<String, ActionDef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionDef {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub request: Option<Value>,
    #[serde(default)]
    pub response: Option<Value>,
}

/// A resolved schema node.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    String,
    Integer,
    Number,
    Boolean,
    /// Object without declared properties, or a schema with no type.
    Any,
    Array(Box<Schema>),
    Object(ObjectSchema),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectSchema {
    /// Explicit type name (`title`), overriding the derived one.
    pub title: Option<String>,
    pub description: Option<String>,
    pub properties: Vec<Property>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: String,
    pub schema: Schema,
    pub required: bool,
    pub description: Option<String>,
}

impl ApiDefinition {
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: Value = serde_json::from_str(text)?;
        if raw.get("actions").is_none() {
            return Err(AgentkitError::Codegen("missing 'actions' object".to_string()));
        }
        let def: ApiDefinition = serde_json::from_value(raw)?;
        if def.client.trim().is_empty() {
            return Err(AgentkitError::Codegen("'client' must not be empty".to_string()));
        }
        Ok(def)
    }
}

/// Parse one schema node; `path` is used for error messages.
pub fn parse(value: &Value, path: &str) -> Result<Schema> {
    let obj = value
        .as_object()
        .ok_or_else(|| AgentkitError::Codegen(format!("{}: schema must be an object", path)))?;

    if obj.contains_key("$ref") {
        return Err(AgentkitError::Codegen(format!("{}: $ref is not supported", path)));
    }

    let ty = match obj.get("type") {
        None => return Ok(Schema::Any),
        Some(Value::String(s)) => s.as_str(),
        Some(other) => {
            return Err(AgentkitError::Codegen(format!(
                "{}: 'type' must be a string, got {}",
                path, other
            )))
        }
    };

    match ty {
        "string" => Ok(Schema::String),
        "integer" => Ok(Schema::Integer),
        "number" => Ok(Schema::Number),
        "boolean" => Ok(Schema::Boolean),
        "array" => {
            let items = obj
                .get("items")
                .ok_or_else(|| AgentkitError::Codegen(format!("{}: array without 'items'", path)))?;
            Ok(Schema::Array(Box::new(parse(items, &format!("{}[]", path))?)))
        }
        "object" => parse_object(obj, path),
        other => Err(AgentkitError::Codegen(format!("{}: unknown type '{}'", path, other))),
    }
}

fn parse_object(obj: &serde_json::Map<String, Value>, path: &str) -> Result<Schema> {
    let properties = match obj.get("properties").and_then(Value::as_object) {
        Some(props) => props,
        None => return Ok(Schema::Any),
    };

    let required: Vec<&str> = obj
        .get("required")
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let mut parsed = Vec::with_capacity(properties.len());
    for (name, prop) in properties {
        let prop_path = format!("{}.{}", path, name);
        parsed.push(Property {
            name: name.clone(),
            schema: parse(prop, &prop_path)?,
            required: required.contains(&name.as_str()),
            description: prop.get("description").and_then(Value::as_str).map(str::to_string),
        });
    }

    Ok(Schema::Object(ObjectSchema {
        title: obj.get("title").and_then(Value::as_str).map(str::to_string),
        description: obj.get("description").and_then(Value::as_str).map(str::to_string),
        properties: parsed,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_primitives_and_nesting() {
        let schema = parse(
            &json!({
                "type": "object",
                "required": ["Name"],
                "properties": {
                    "Name": {"type": "string"},
                    "Envs": {"type": "array", "items": {"type": "object", "properties": {"Key": {"type": "string"}}}},
                    "Extra": {"type": "object"}
                }
            }),
            "CreateRuntime.request",
        )
        .unwrap();

        let Schema::Object(obj) = schema else {
            panic!("expected object");
        };
        let name = obj.properties.iter().find(|p| p.name == "Name").unwrap();
        assert!(name.required);
        assert_eq!(name.schema, Schema::String);
        let extra = obj.properties.iter().find(|p| p.name == "Extra").unwrap();
        assert_eq!(extra.schema, Schema::Any);
        let envs = obj.properties.iter().find(|p| p.name == "Envs").unwrap();
        assert!(matches!(envs.schema, Schema::Array(_)));
    }

    #[test]
    fn test_unknown_type_names_path() {
        let err = parse(&json!({"type": "object", "properties": {"A": {"type": "date"}}}), "X.request")
            .unwrap_err();
        assert!(err.to_string().contains("X.request.A"));
        assert!(err.to_string().contains("date"));
    }

    #[test]
    fn test_missing_actions() {
        let err = ApiDefinition::from_json(r#"{"client": "C"}"#).unwrap_err();
        assert!(err.to_string().contains("actions"));
    }

    #[test]
    fn test_ref_rejected() {
        assert!(parse(&json!({"$ref": "#/defs/A"}), "A").is_err());
    }
}
