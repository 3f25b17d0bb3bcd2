use super::naming;
use super::schema::{ApiDefinition, ObjectSchema, Schema};
use crate::error::{AgentkitError, Result};
use std::collections::BTreeMap;
use std::fmt::Write;

pub const HEADER: &str = "// Auto-generated from API JSON definition\n// Do not edit manually\n";

/// Path prefix the generated code uses to reach this crate.
#[derive(Debug, Clone)]
pub struct EmitOptions {
    pub crate_path: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            crate_path: "agentkit".to_string(),
        }
    }
}

struct TypeDef {
    /// Everything after the struct name; equal shapes share one definition.
    shape: String,
    body: String,
}

/// Which half of an action a nested type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    /// `<Path>For<Action>`, every property on the way down: `EnvsItemForCreateRuntime`.
    Request,
    /// `<Property>For<Action>`, last property only: `KeyAuthForGetRuntime`.
    Response,
}

/// Where a schema sits: full property path and the nearest property name.
#[derive(Debug, Clone, Copy)]
struct Position<'a> {
    path: &'a str,
    leaf: &'a str,
    action: &'a str,
    side: Side,
}

/// Collects struct definitions, children before parents, each name once.
#[derive(Default)]
struct TypeCollector {
    order: Vec<TypeDef>,
    seen: BTreeMap<String, usize>,
}

impl TypeCollector {
    /// Whether `name` is free or already holds exactly `shape`.
    fn fits(&self, name: &str, shape: &str) -> bool {
        self.seen
            .get(name)
            .map_or(true, |&index| self.order[index].shape == shape)
    }

    fn add(&mut self, name: String, obj: &ObjectSchema, fields: &str) -> Result<()> {
        let shape = shape(obj, fields);
        if let Some(&index) = self.seen.get(&name) {
            if self.order[index].shape != shape {
                return Err(AgentkitError::Codegen(format!(
                    "type '{}' is defined twice with different fields",
                    name
                )));
            }
            return Ok(());
        }
        let body = definition(&name, obj, fields);
        self.seen.insert(name.clone(), self.order.len());
        self.order.push(TypeDef { shape, body });
        Ok(())
    }

    /// Rust type for `schema`, registering any nested structs.
    fn rust_type(&mut self, schema: &Schema, pos: Position) -> Result<String> {
        Ok(match schema {
            Schema::String => "String".to_string(),
            Schema::Integer => "i64".to_string(),
            Schema::Number => "f64".to_string(),
            Schema::Boolean => "bool".to_string(),
            Schema::Any => "serde_json::Value".to_string(),
            Schema::Array(items) => {
                let path = format!("{}Item", pos.path);
                let inner = self.rust_type(items, Position { path: &path, ..pos })?;
                format!("Vec<{}>", inner)
            }
            Schema::Object(obj) => {
                let fields = self.fields(obj, pos)?;
                let name = match (&obj.title, pos.side) {
                    (Some(title), _) => title.clone(),
                    (None, Side::Request) => format!("{}For{}", pos.path, pos.action),
                    (None, Side::Response) => {
                        let leaf = format!("{}For{}", pos.leaf, pos.action);
                        if self.fits(&leaf, &shape(obj, &fields)) {
                            leaf
                        } else {
                            // same property name, different fields elsewhere in the action
                            format!("{}For{}Response", pos.path, pos.action)
                        }
                    }
                };
                self.add(name.clone(), obj, &fields)?;
                name
            }
        })
    }

    /// Field lines of `obj`, registering nested structs first.
    fn fields(&mut self, obj: &ObjectSchema, pos: Position) -> Result<String> {
        let mut body = String::new();
        for prop in &obj.properties {
            let segment = naming::type_segment(&prop.name);
            let path = format!("{}{}", pos.path, segment);
            let ty = self.rust_type(
                &prop.schema,
                Position {
                    path: &path,
                    leaf: &segment,
                    ..pos
                },
            )?;
            let snake = naming::snake_case(&prop.name);
            let ident = naming::field_ident(&snake);

            if let Some(doc) = &prop.description {
                for line in doc.lines() {
                    let _ = writeln!(body, "    /// {}", line.trim());
                }
            }
            if naming::needs_rename(&prop.name, &snake) || naming::is_renamed_ident(&snake) {
                let _ = writeln!(body, "    #[serde(rename = \"{}\")]", prop.name);
            }
            if prop.required {
                let _ = writeln!(body, "    pub {}: {},", ident, ty);
            } else {
                let _ = writeln!(body, "    #[serde(skip_serializing_if = \"Option::is_none\")]");
                let _ = writeln!(body, "    pub {}: Option<{}>,", ident, ty);
            }
        }
        Ok(body)
    }

    /// Top-level request/response type; a missing schema becomes an empty struct.
    fn root(&mut self, name: &str, schema: Option<&Schema>, action: &str, side: Side) -> Result<()> {
        let pos = Position {
            path: "",
            leaf: "",
            action,
            side,
        };
        let obj = match schema {
            Some(Schema::Object(obj)) => ObjectSchema {
                title: None,
                ..obj.clone()
            },
            Some(Schema::Any) | None => ObjectSchema::default(),
            Some(_) => {
                return Err(AgentkitError::Codegen(format!(
                    "{}: request and response schemas must be objects",
                    name
                )))
            }
        };
        let fields = self.fields(&obj, pos)?;
        self.add(name.to_string(), &obj, &fields)
    }
}

fn shape(obj: &ObjectSchema, fields: &str) -> String {
    format!("{}\n{}", obj.description.as_deref().unwrap_or_default(), fields)
}

fn definition(name: &str, obj: &ObjectSchema, fields: &str) -> String {
    let mut def = String::new();
    if let Some(doc) = &obj.description {
        for line in doc.lines() {
            let _ = writeln!(def, "/// {}", line.trim());
        }
    }
    def.push_str("#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]\n");
    def.push_str("#[serde(rename_all = \"PascalCase\", default)]\n");
    if fields.is_empty() {
        let _ = writeln!(def, "pub struct {} {{}}", name);
    } else {
        let _ = write!(def, "pub struct {} {{\n{}}}\n", name, fields);
    }
    def
}

/// Render a complete Rust module for `def`.
pub fn render(def: &ApiDefinition, options: &EmitOptions) -> Result<String> {
    let mut types = TypeCollector::default();

    for (action, action_def) in &def.actions {
        let request = action_def
            .request
            .as_ref()
            .map(|v| super::schema::parse(v, &format!("{}.request", action)))
            .transpose()?;
        let response = action_def
            .response
            .as_ref()
            .map(|v| super::schema::parse(v, &format!("{}.response", action)))
            .transpose()?;
        types.root(&format!("{}Request", action), request.as_ref(), action, Side::Request)?;
        types.root(&format!("{}Response", action), response.as_ref(), action, Side::Response)?;
    }

    let krate = &options.crate_path;
    let mut out = String::from(HEADER);
    out.push('\n');
    if !def.description.is_empty() {
        let _ = writeln!(out, "//! {}", def.description);
        if !def.version.is_empty() {
            let _ = writeln!(out, "//!\n//! API version {}.", def.version);
        }
        out.push('\n');
    }
    let _ = writeln!(out, "use {}::client::ServiceClient;", krate);
    let _ = writeln!(out, "use {}::error::Result;", krate);
    let _ = writeln!(out, "use {}::platform::PlatformContext;", krate);
    out.push_str("use serde::{Deserialize, Serialize};\n\n");

    out.push_str(&render_client(def));

    for ty in &types.order {
        out.push('\n');
        out.push_str(&ty.body);
    }
    Ok(out)
}

fn render_client(def: &ApiDefinition) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "pub struct {} {{\n    inner: ServiceClient,\n}}\n", def.client);
    let _ = writeln!(out, "impl {} {{", def.client);
    let _ = writeln!(out, "    pub const SERVICE: &'static str = \"{}\";\n", def.service);
    out.push_str("    pub fn new(ctx: &PlatformContext) -> Result<Self> {\n");
    out.push_str("        Ok(Self {\n            inner: ServiceClient::new(Self::SERVICE, ctx)?,\n        })\n    }\n\n");
    out.push_str("    pub fn from_client(inner: ServiceClient) -> Self {\n        Self { inner }\n    }\n");

    for (action, action_def) in &def.actions {
        out.push('\n');
        if !action_def.description.is_empty() {
            let _ = writeln!(out, "    /// {}", action_def.description.trim());
        }
        let method = naming::field_ident(&naming::snake_case(action));
        let _ = writeln!(
            out,
            "    pub fn {}(&self, request: &{}Request) -> Result<{}Response> {{",
            method, action, action
        );
        let _ = writeln!(out, "        self.inner.invoke(\"{}\", request)", action);
        out.push_str("    }\n");
    }
    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(json: &str) -> ApiDefinition {
        ApiDefinition::from_json(json).unwrap()
    }

    #[test]
    fn test_nested_names_and_mapping() {
        let def = definition(
            r#"{
                "client": "RuntimeClient",
                "actions": {
                    "CreateRuntime": {
                        "request": {
                            "type": "object",
                            "required": ["Name"],
                            "properties": {
                                "Name": {"type": "string"},
                                "CpuMilli": {"type": "integer"},
                                "Ratio": {"type": "number"},
                                "ApmplusEnable": {"type": "boolean"},
                                "MCPToolsetId": {"type": "string"},
                                "Envs": {"type": "array", "items": {
                                    "type": "object", "required": ["Key"],
                                    "properties": {"Key": {"type": "string"}, "Value": {"type": "string"}}
                                }},
                                "Authorizer": {"type": "object", "properties": {
                                    "KeyAuth": {"type": "object", "properties": {"ApiKeyName": {"type": "string"}}}
                                }}
                            }
                        },
                        "response": {"type": "object", "properties": {"RuntimeId": {"type": "string"}}}
                    }
                }
            }"#,
        );
        let code = render(&def, &EmitOptions::default()).unwrap();

        assert!(code.starts_with(HEADER));
        assert!(code.contains("pub struct CreateRuntimeRequest {"));
        assert!(code.contains("pub struct EnvsItemForCreateRuntime {"));
        assert!(code.contains("pub struct AuthorizerKeyAuthForCreateRuntime {"));
        assert!(code.contains("pub struct AuthorizerForCreateRuntime {"));
        assert!(code.contains("    pub name: String,"));
        assert!(code.contains("    pub cpu_milli: Option<i64>,"));
        assert!(code.contains("    pub ratio: Option<f64>,"));
        assert!(code.contains("    pub apmplus_enable: Option<bool>,"));
        assert!(code.contains("    pub envs: Option<Vec<EnvsItemForCreateRuntime>>,"));
        assert!(code.contains("#[serde(rename = \"MCPToolsetId\")]"));
        assert!(code.contains("self.inner.invoke(\"CreateRuntime\", request)"));

        // children are emitted before the structs that use them
        let key_auth = code.find("pub struct AuthorizerKeyAuthForCreateRuntime").unwrap();
        let authorizer = code.find("pub struct AuthorizerForCreateRuntime").unwrap();
        assert!(key_auth < authorizer);
    }

    #[test]
    fn test_response_types_use_leaf_names() {
        let def = definition(
            r#"{
                "client": "RuntimeClient",
                "actions": {
                    "GetRuntime": {
                        "request": {"type": "object", "properties": {"RuntimeId": {"type": "string"}}},
                        "response": {"type": "object", "properties": {
                            "AuthorizerConfiguration": {"type": "object", "properties": {
                                "KeyAuth": {"type": "object", "properties": {"ApiKey": {"type": "string"}}}
                            }},
                            "Envs": {"type": "array", "items": {
                                "type": "object", "properties": {"Key": {"type": "string"}}
                            }}
                        }}
                    }
                }
            }"#,
        );
        let code = render(&def, &EmitOptions::default()).unwrap();
        assert!(code.contains("pub struct KeyAuthForGetRuntime {"));
        assert!(code.contains("pub struct AuthorizerConfigurationForGetRuntime {"));
        assert!(code.contains("pub key_auth: Option<KeyAuthForGetRuntime>,"));
        assert!(code.contains("pub struct EnvsForGetRuntime {"));
        assert!(code.contains("pub envs: Option<Vec<EnvsForGetRuntime>>,"));
        assert!(!code.contains("AuthorizerConfigurationKeyAuthForGetRuntime"));
    }

    #[test]
    fn test_request_and_response_share_property_name() {
        let def = definition(
            r#"{
                "client": "C",
                "actions": {
                    "CreateThing": {
                        "request": {"type": "object", "properties": {
                            "Tags": {"type": "array", "items": {"type": "object", "properties": {
                                "Key": {"type": "string"}
                            }}}
                        }},
                        "response": {"type": "object", "properties": {
                            "Tags": {"type": "array", "items": {"type": "object", "properties": {
                                "Key": {"type": "string"}, "Value": {"type": "string"}
                            }}}
                        }}
                    }
                }
            }"#,
        );
        let code = render(&def, &EmitOptions::default()).unwrap();
        assert!(code.contains("pub struct TagsItemForCreateThing {"));
        assert!(code.contains("pub struct TagsForCreateThing {"));
        assert!(code.contains("pub tags: Option<Vec<TagsItemForCreateThing>>,"));
        assert!(code.contains("pub tags: Option<Vec<TagsForCreateThing>>,"));
    }

    #[test]
    fn test_response_leaf_clash_falls_back_to_path() {
        let def = definition(
            r#"{
                "client": "C",
                "actions": {
                    "GetThing": {"response": {"type": "object", "properties": {
                        "Tags": {"type": "array", "items": {"type": "object", "properties": {"Key": {"type": "string"}}}},
                        "Zone": {"type": "object", "properties": {
                            "Tags": {"type": "array", "items": {"type": "object", "properties": {"Name": {"type": "string"}}}}
                        }}
                    }}}
                }
            }"#,
        );
        let code = render(&def, &EmitOptions::default()).unwrap();
        assert!(code.contains("pub struct TagsForGetThing {"));
        assert!(code.contains("pub struct ZoneTagsItemForGetThingResponse {"));
        assert!(code.contains("pub tags: Option<Vec<ZoneTagsItemForGetThingResponse>>,"));
    }

    #[test]
    fn test_path_keyword_fields() {
        let def = definition(
            r#"{
                "client": "C",
                "actions": {
                    "GetThing": {"response": {"type": "object", "properties": {
                        "Crate": {"type": "string"},
                        "Self": {"type": "string"},
                        "Type": {"type": "string"}
                    }}}
                }
            }"#,
        );
        let code = render(&def, &EmitOptions::default()).unwrap();
        assert!(code.contains("    #[serde(rename = \"Crate\")]\n    #[serde(skip_serializing_if = \"Option::is_none\")]\n    pub crate_: Option<String>,"));
        assert!(code.contains("    #[serde(rename = \"Self\")]\n    #[serde(skip_serializing_if = \"Option::is_none\")]\n    pub self_: Option<String>,"));
        assert!(code.contains("    pub r#type: Option<String>,"));
        assert!(!code.contains("r#crate"));
    }

    #[test]
    fn test_title_and_dedup() {
        let def = definition(
            r#"{
                "client": "C",
                "actions": {
                    "GetA": {"response": {"type": "object", "properties": {
                        "Tags": {"type": "array", "items": {"title": "Tag", "type": "object", "properties": {"Key": {"type": "string"}}}}
                    }}},
                    "GetB": {"response": {"type": "object", "properties": {
                        "Tags": {"type": "array", "items": {"title": "Tag", "type": "object", "properties": {"Key": {"type": "string"}}}}
                    }}}
                }
            }"#,
        );
        let code = render(&def, &EmitOptions::default()).unwrap();
        assert_eq!(code.matches("pub struct Tag {").count(), 1);
        assert!(code.contains("pub struct GetARequest {}"));
    }

    #[test]
    fn test_conflicting_title_fails() {
        let def = definition(
            r#"{
                "client": "C",
                "actions": {
                    "GetA": {"response": {"type": "object", "properties": {
                        "X": {"title": "Shared", "type": "object", "properties": {"A": {"type": "string"}}}
                    }}},
                    "GetB": {"response": {"type": "object", "properties": {
                        "X": {"title": "Shared", "type": "object", "properties": {"B": {"type": "string"}}}
                    }}}
                }
            }"#,
        );
        let err = render(&def, &EmitOptions::default()).unwrap_err();
        assert!(err.to_string().contains("Shared"));
    }

    #[test]
    fn test_crate_path_option() {
        let def = definition(r#"{"client": "C", "actions": {"Ping": {}}}"#);
        let code = render(
            &def,
            &EmitOptions {
                crate_path: "crate".to_string(),
            },
        )
        .unwrap();
        assert!(code.contains("use crate::client::ServiceClient;"));
        assert!(code.contains("pub fn ping(&self, request: &PingRequest) -> Result<PingResponse>"));
    }
}
