//! Document validation utilities.
//!
//! Checks the parts of a loaded document that the generators rely on:
//! unique names, resolvable response schemas, and usable class names.

use crate::error::SchemaError;
use crate::loader::SchemaDocument;
use crate::naming::class_name;
use crate::resource::Resource;
use std::collections::HashSet;

/// Validates a loaded document.
///
/// # Arguments
/// * `document` - The document to validate
///
/// # Errors
/// Returns `SchemaError` if validation fails.
pub fn validate_document(document: &SchemaDocument) -> Result<(), SchemaError> {
    validate_schemas(document)?;
    validate_resources(document, &document.resources)?;
    validate_service_name(document)?;
    Ok(())
}

/// Resource classes hold a handle typed after the service, so a document
/// with resources needs a usable name.
fn validate_service_name(document: &SchemaDocument) -> Result<(), SchemaError> {
    if !document.resources.is_empty() && class_name(&document.name).is_none() {
        return Err(SchemaError::Validation {
            message: format!(
                "Document name '{}' does not produce a service name",
                document.name
            ),
        });
    }
    Ok(())
}

/// Validates top-level schema names.
fn validate_schemas(document: &SchemaDocument) -> Result<(), SchemaError> {
    let mut seen_names = HashSet::new();
    let mut seen_classes = HashSet::new();

    for (name, id) in &document.schemas {
        if !seen_names.insert(name.as_str()) {
            return Err(SchemaError::duplicate("schema", name));
        }
        if document.arena.get(*id).is_none() {
            return Err(SchemaError::Validation {
                message: format!("Schema '{}' points outside the document arena", name),
            });
        }
        let Some(class) = class_name(name) else {
            return Err(SchemaError::Validation {
                message: format!("Schema name '{}' does not produce a class name", name),
            });
        };
        if !seen_classes.insert(class.clone()) {
            return Err(SchemaError::Validation {
                message: format!(
                    "Schema '{}' produces class name '{}' which is already taken",
                    name, class
                ),
            });
        }
    }

    Ok(())
}

/// Validates sibling resources and their method responses.
fn validate_resources(document: &SchemaDocument, resources: &[Resource]) -> Result<(), SchemaError> {
    let mut seen_names = HashSet::new();

    for resource in resources {
        if !seen_names.insert(resource.name.as_str()) {
            return Err(SchemaError::duplicate("resource", &resource.name));
        }

        for method in &resource.methods {
            let Some(response) = &method.response else {
                continue;
            };
            if !document.has_schema(response) {
                return Err(SchemaError::UnknownSchema {
                    name: response.clone(),
                    referenced_by: format!("{}.{}", resource.name, method.name),
                });
            }
        }

        validate_resources(document, &resource.resources)?;
    }

    Ok(())
}
