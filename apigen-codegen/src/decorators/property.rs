//! Property decorator.

use crate::decorator::{NestedClassProvider, NestedClassSchemaDecorator, SchemaDecorator};
use crate::dom::{ClassDeclaration, FieldDecl, TypeReference};
use crate::error::DecoratorError;
use apigen_schema::naming::{class_name, member_name};
use apigen_schema::{SchemaId, SchemaKind, SchemaRef};
use std::collections::HashSet;

/// Adds one field per object property.
///
/// Named sub-schemas are referenced by their class name; anonymous object
/// sub-schemas are handed to the [`NestedClassProvider`] and become nested
/// classes. A field whose struct would end up containing the class itself is
/// typed `Option<Box<T>>`.
pub struct PropertyDecorator;

impl PropertyDecorator {
    fn add_properties(
        class: &mut ClassDeclaration,
        schema: SchemaRef<'_>,
        provider: &mut dyn NestedClassProvider,
    ) {
        for (json_name, property) in schema.properties() {
            let name = unique_member_name(class, &member_name(json_name));
            let mut ty = field_type(property, provider, &mut Vec::new());
            if is_inline(property) && reaches(property, schema.id()) {
                ty = TypeReference::generic("Option", vec![TypeReference::generic("Box", vec![ty])]);
            }
            let mut field = FieldDecl::new(name, ty);
            if field.name.trim_start_matches("r#") != json_name {
                field.serialized_name = Some(json_name.to_string());
            }
            field.doc = property.description().map(|d| d.trim().to_string());
            class.add_field(field);
        }
    }
}

impl SchemaDecorator for PropertyDecorator {
    fn name(&self) -> &str {
        "PropertyDecorator"
    }

    fn decorate_class(
        &self,
        class: &mut ClassDeclaration,
        schema: SchemaRef<'_>,
        provider: &mut dyn NestedClassProvider,
    ) -> Result<(), DecoratorError> {
        Self::add_properties(class, schema, provider);
        Ok(())
    }

    fn as_nested(&self) -> Option<&dyn NestedClassSchemaDecorator> {
        Some(self)
    }
}

impl NestedClassSchemaDecorator for PropertyDecorator {
    fn decorate_nested_class(
        &self,
        class: &mut ClassDeclaration,
        _class_name: &str,
        schema: SchemaRef<'_>,
        provider: &mut dyn NestedClassProvider,
    ) -> Result<(), DecoratorError> {
        Self::add_properties(class, schema, provider);
        Ok(())
    }
}

/// Maps a property schema to a field type.
///
/// `path` holds the array/map schemas currently being unwrapped so that a
/// container whose items contain itself maps to an untyped value.
fn field_type(
    schema: SchemaRef<'_>,
    provider: &mut dyn NestedClassProvider,
    path: &mut Vec<SchemaId>,
) -> TypeReference {
    match schema.kind() {
        SchemaKind::Any => TypeReference::new("serde_json::Value"),
        SchemaKind::Boolean => TypeReference::new("bool"),
        SchemaKind::Integer => TypeReference::new("i64"),
        SchemaKind::Number => TypeReference::new("f64"),
        SchemaKind::String => TypeReference::new("String"),
        SchemaKind::Array { .. } => {
            let item = match schema.items() {
                Some(item) => unwrap_container(schema, item, provider, path),
                None => TypeReference::new("serde_json::Value"),
            };
            TypeReference::generic("Vec", vec![item])
        }
        SchemaKind::Object { properties, .. } => {
            if let Some(name) = schema.name().and_then(class_name) {
                return TypeReference::new(name);
            }
            if properties.is_empty() {
                if let Some(values) = schema.additional_properties() {
                    let value = unwrap_container(schema, values, provider, path);
                    return TypeReference::generic(
                        "HashMap",
                        vec![TypeReference::new("String"), value],
                    );
                }
            }
            provider.class_reference(schema)
        }
    }
}

fn unwrap_container(
    container: SchemaRef<'_>,
    inner: SchemaRef<'_>,
    provider: &mut dyn NestedClassProvider,
    path: &mut Vec<SchemaId>,
) -> TypeReference {
    if path.contains(&container.id()) {
        return TypeReference::new("serde_json::Value");
    }
    path.push(container.id());
    let ty = field_type(inner, provider, path);
    path.pop();
    ty
}

/// Returns true if the property maps to a struct stored inline, as opposed
/// to a primitive or a heap-backed container.
fn is_inline(schema: SchemaRef<'_>) -> bool {
    match schema.kind() {
        SchemaKind::Object {
            properties,
            additional_properties,
        } => {
            schema.name().and_then(class_name).is_some()
                || !properties.is_empty()
                || additional_properties.is_none()
        }
        _ => false,
    }
}

/// Returns true if `target` is reachable from `from` through inline fields.
///
/// Such a field would make the generated struct contain itself, so it needs
/// a `Box`.
fn reaches(from: SchemaRef<'_>, target: SchemaId) -> bool {
    let mut stack = vec![from];
    let mut visited = HashSet::new();
    while let Some(schema) = stack.pop() {
        if schema.id() == target {
            return true;
        }
        if !visited.insert(schema.id()) {
            continue;
        }
        stack.extend(schema.properties().map(|(_, p)| p).filter(|p| is_inline(*p)));
    }
    false
}

/// Appends `_2`, `_3`, ... until the name is free in the class.
fn unique_member_name(class: &ClassDeclaration, base: &str) -> String {
    if !class.has_member(base) {
        return base.to_string();
    }
    (2..)
        .map(|n| format!("{}_{}", base, n))
        .find(|candidate| !class.has_member(candidate))
        .unwrap_or_else(|| base.to_string())
}
