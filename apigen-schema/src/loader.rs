//! JSON document loader.
//!
//! Loads a discovery-style document into a [`SchemaArena`]. Every schema
//! position of the document (a JSON pointer) is loaded at most once, so all
//! `$ref`s that point at the same location resolve to the same [`SchemaId`].
//! Ids are reserved before descending into a schema, which makes `$ref`
//! cycles terminate.

use crate::error::ParseError;
use crate::resource::{Resource, ResourceMethod};
use crate::types::{Property, SchemaArena, SchemaId, SchemaKind, SchemaNode, SchemaRef};
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};

/// A loaded document: the schema arena plus the resource tree.
#[derive(Debug, Clone, Default)]
pub struct SchemaDocument {
    /// Document (service) name.
    pub name: String,
    /// All schemas reachable from the document.
    pub arena: SchemaArena,
    /// Top-level schemas in document order.
    pub schemas: Vec<(String, SchemaId)>,
    /// Top-level resources in document order.
    pub resources: Vec<Resource>,
}

impl SchemaDocument {
    /// Looks up a top-level schema id by name.
    #[must_use]
    pub fn schema(&self, name: &str) -> Option<SchemaId> {
        self.schemas
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, id)| *id)
    }

    /// Looks up a top-level schema by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<SchemaRef<'_>> {
        self.schema(name).and_then(|id| self.arena.get(id))
    }

    /// Returns true if a top-level schema with the given name exists.
    #[must_use]
    pub fn has_schema(&self, name: &str) -> bool {
        self.schema(name).is_some()
    }
}

/// Loads a document from a JSON string.
///
/// # Arguments
/// * `json` - Document content
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed, a schema has an invalid
/// shape, or a `$ref` cannot be resolved.
pub fn load_document(json: &str) -> Result<SchemaDocument, ParseError> {
    let root: Value = serde_json::from_str(json)?;
    let Some(top) = root.as_object() else {
        return Err(ParseError::invalid_value("", "document", json_type(&root)));
    };

    let name = top
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let mut loader = Loader::new(&root);
    let mut schemas = Vec::new();
    if let Some(defs) = top.get("schemas") {
        let defs = defs
            .as_object()
            .ok_or_else(|| ParseError::invalid_value("/schemas", "schemas", json_type(defs)))?;
        for (key, value) in defs {
            let pointer = format!("/schemas/{}", escape_pointer(key));
            let id = loader.load_value(&pointer, value)?;
            schemas.push((key.clone(), id));
        }
    }

    let resources = match top.get("resources") {
        Some(value) => load_resources("/resources", value)?,
        None => Vec::new(),
    };

    tracing::debug!(
        "Loaded document '{}': {} top-level schemas, {} schema nodes, {} resources",
        name,
        schemas.len(),
        loader.arena.len(),
        resources.len()
    );

    Ok(SchemaDocument {
        name,
        arena: loader.arena,
        schemas,
        resources,
    })
}

/// Loads a document from a file.
///
/// # Errors
/// Returns `ParseError` if reading or loading fails.
pub fn load_document_file(path: &std::path::Path) -> Result<SchemaDocument, ParseError> {
    let json = std::fs::read_to_string(path)?;
    load_document(&json)
}

struct Loader<'a> {
    root: &'a Value,
    arena: SchemaArena,
    /// Document location -> identity.
    memo: HashMap<String, SchemaId>,
    /// `$ref` locations currently being followed.
    following: HashSet<String>,
}

impl<'a> Loader<'a> {
    fn new(root: &'a Value) -> Self {
        Self {
            root,
            arena: SchemaArena::new(),
            memo: HashMap::new(),
            following: HashSet::new(),
        }
    }

    fn load_value(&mut self, pointer: &str, value: &'a Value) -> Result<SchemaId, ParseError> {
        if let Some(&id) = self.memo.get(pointer) {
            return Ok(id);
        }
        let obj = value
            .as_object()
            .ok_or_else(|| ParseError::invalid_value(pointer, "schema", json_type(value)))?;

        if let Some(reference) = obj.get("$ref") {
            let id = self.follow_reference(pointer, reference)?;
            self.memo.insert(pointer.to_string(), id);
            return Ok(id);
        }

        let id = self.arena.alloc(SchemaNode::default());
        self.memo.insert(pointer.to_string(), id);

        let name = top_level_name(pointer)
            .or_else(|| obj.get("id").and_then(Value::as_str).map(String::from));
        let description = obj
            .get("description")
            .and_then(Value::as_str)
            .map(String::from);
        let kind = self.load_kind(pointer, obj)?;

        if let Some(node) = self.arena.node_mut(id) {
            *node = SchemaNode {
                name,
                description,
                kind,
            };
        }
        Ok(id)
    }

    fn follow_reference(&mut self, pointer: &str, reference: &Value) -> Result<SchemaId, ParseError> {
        let reference = reference
            .as_str()
            .ok_or_else(|| ParseError::invalid_value(pointer, "$ref", reference.to_string()))?;
        let target = reference_pointer(reference);
        let root = self.root;
        let Some(value) = root.pointer(&target) else {
            return Err(ParseError::unresolved(pointer, reference));
        };
        if !self.following.insert(pointer.to_string()) {
            return Err(ParseError::invalid_value(pointer, "$ref", reference));
        }
        let result = self.load_value(&target, value);
        self.following.remove(pointer);
        result
    }

    fn load_kind(&mut self, pointer: &str, obj: &'a Map<String, Value>) -> Result<SchemaKind, ParseError> {
        let type_name = match obj.get("type") {
            Some(t) => t
                .as_str()
                .ok_or_else(|| ParseError::invalid_value(pointer, "type", t.to_string()))?,
            None if obj.contains_key("properties") || obj.contains_key("additionalProperties") => {
                "object"
            }
            None if obj.contains_key("items") => "array",
            None => "any",
        };

        let kind = match type_name {
            "any" => SchemaKind::Any,
            "boolean" => SchemaKind::Boolean,
            "integer" => SchemaKind::Integer,
            "number" => SchemaKind::Number,
            "string" => SchemaKind::String,
            "array" => {
                let items = match obj.get("items") {
                    Some(items) => Some(self.load_value(&format!("{}/items", pointer), items)?),
                    None => None,
                };
                SchemaKind::Array { items }
            }
            "object" => {
                let mut properties = Vec::new();
                if let Some(props) = obj.get("properties") {
                    let props = props.as_object().ok_or_else(|| {
                        ParseError::invalid_value(pointer, "properties", json_type(props))
                    })?;
                    for (key, child) in props {
                        let child_pointer =
                            format!("{}/properties/{}", pointer, escape_pointer(key));
                        let schema = self.load_value(&child_pointer, child)?;
                        properties.push(Property {
                            name: key.clone(),
                            schema,
                        });
                    }
                }
                // `additionalProperties: true|false` carries no shape.
                let additional_properties = match obj.get("additionalProperties") {
                    Some(value) if value.is_object() => Some(
                        self.load_value(&format!("{}/additionalProperties", pointer), value)?,
                    ),
                    _ => None,
                };
                SchemaKind::Object {
                    properties,
                    additional_properties,
                }
            }
            other => return Err(ParseError::invalid_value(pointer, "type", other)),
        };
        Ok(kind)
    }
}

fn load_resources(pointer: &str, value: &Value) -> Result<Vec<Resource>, ParseError> {
    let map = value
        .as_object()
        .ok_or_else(|| ParseError::invalid_value(pointer, "resources", json_type(value)))?;

    let mut resources = Vec::with_capacity(map.len());
    for (name, body) in map {
        let resource_pointer = format!("{}/{}", pointer, escape_pointer(name));
        let body = body.as_object().ok_or_else(|| {
            ParseError::invalid_value(&resource_pointer, "resource", json_type(body))
        })?;
        let mut resource = Resource::new(name.clone());

        if let Some(methods) = body.get("methods") {
            let methods_pointer = format!("{}/methods", resource_pointer);
            let methods = methods.as_object().ok_or_else(|| {
                ParseError::invalid_value(&methods_pointer, "methods", json_type(methods))
            })?;
            for (method_name, method) in methods {
                let method_pointer = format!("{}/{}", methods_pointer, escape_pointer(method_name));
                resource.add_method(load_method(&method_pointer, method_name, method)?);
            }
        }

        if let Some(subs) = body.get("resources") {
            resource.resources = load_resources(&format!("{}/resources", resource_pointer), subs)?;
        }
        resources.push(resource);
    }
    Ok(resources)
}

fn load_method(pointer: &str, name: &str, value: &Value) -> Result<ResourceMethod, ParseError> {
    let http_method = value
        .get("httpMethod")
        .and_then(Value::as_str)
        .ok_or_else(|| ParseError::missing_field(pointer, "httpMethod"))?;

    let mut method = ResourceMethod::new(name, http_method.to_uppercase());
    if let Some(path) = value.get("path").and_then(Value::as_str) {
        method = method.with_path(path);
    }
    if let Some(response) = value
        .get("response")
        .and_then(|r| r.get("$ref"))
        .and_then(Value::as_str)
    {
        method = method.with_response(response);
    }
    Ok(method)
}

/// Returns the name of a `/schemas/<name>` location.
fn top_level_name(pointer: &str) -> Option<String> {
    let rest = pointer.strip_prefix("/schemas/")?;
    if rest.contains('/') {
        return None;
    }
    Some(unescape_pointer(rest))
}

/// Maps `$ref` text to a JSON pointer: `#/a/b` is a pointer, anything else
/// names a top-level schema.
fn reference_pointer(reference: &str) -> String {
    match reference.strip_prefix('#') {
        Some(pointer) => pointer.to_string(),
        None => format!("/schemas/{}", escape_pointer(reference)),
    }
}

fn escape_pointer(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

fn unescape_pointer(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
