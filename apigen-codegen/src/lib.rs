//! # apigen Codegen
//!
//! Class generation from API schema documents.
//!
//! This crate provides:
//! - The decorator-driven schema class generator and its nested class resolver
//! - Resource class generation
//! - The standard member decorators
//! - A Rust source printer for the generated declarations

pub mod config;
pub mod decorator;
pub mod decorators;
pub mod dom;
pub mod error;
pub mod printer;
pub mod resource_generator;
pub mod schema_generator;

pub use config::GeneratorConfig;
pub use decorator::{
    NestedClassProvider, NestedClassSchemaDecorator, ResourceContext, ResourceDecorator,
    SchemaDecorator,
};
pub use dom::ClassDeclaration;
pub use error::{CodegenError, DecoratorError};
pub use printer::RustPrinter;
pub use resource_generator::ResourceClassGenerator;
pub use schema_generator::{NestedClassResolver, SchemaGenerator};

use apigen_schema::SchemaDocument;
use std::collections::HashSet;

const HEADER: &str = "\
// Generated by apigen. Do not edit.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

";

/// Generates Rust code from a JSON API document string.
///
/// # Arguments
/// * `json` - API document content
///
/// # Returns
/// Generated Rust code as a string.
///
/// # Errors
/// Returns `CodegenError` if loading, validation, or generation fails.
pub fn generate_from_json(json: &str) -> Result<String, CodegenError> {
    let document = apigen_schema::load_document(json)?;
    let config = GeneratorConfig::default();
    let schema_decorators = decorators::standard_schema_decorators(&config);
    let resource_decorators = decorators::standard_resource_decorators();
    let classes = generate_with(&document, config, schema_decorators, resource_decorators)?;

    let mut output = String::from(HEADER);
    output.push_str(&RustPrinter::new().print_all(&classes));
    Ok(output)
}

/// Generates Rust code from a JSON API document file.
///
/// # Errors
/// Returns `CodegenError` if reading, loading, validation, or generation fails.
pub fn generate_from_file(path: &std::path::Path) -> Result<String, CodegenError> {
    let json = std::fs::read_to_string(path)?;
    generate_from_json(&json)
}

/// Generates one class per top-level object schema and one per resource.
///
/// Non-object top-level schemas produce no class; properties referencing
/// them map to their value type instead.
///
/// # Errors
/// Returns `CodegenError` if the document is invalid, two top-level classes
/// share a name, or a decorator fails.
pub fn generate_with(
    document: &SchemaDocument,
    config: GeneratorConfig,
    schema_decorators: Vec<Box<dyn SchemaDecorator>>,
    resource_decorators: Vec<Box<dyn ResourceDecorator>>,
) -> Result<Vec<ClassDeclaration>, CodegenError> {
    apigen_schema::validate_document(document)?;

    let schema_generator = SchemaGenerator::with_config(schema_decorators, config.clone());
    let resource_generator =
        ResourceClassGenerator::with_config(&document.name, resource_decorators, config);

    let mut classes = Vec::new();
    let mut names = HashSet::new();

    for (name, id) in &document.schemas {
        let is_object = document.arena.get(*id).is_some_and(|s| s.is_object());
        if !is_object {
            tracing::debug!("Skipping non-object schema {}", name);
            continue;
        }
        let class = schema_generator.create_class(&document.arena, *id)?;
        if !names.insert(class.name.clone()) {
            return Err(CodegenError::generation(format!(
                "class name '{}' is generated twice",
                class.name
            )));
        }
        classes.push(class);
    }

    for resource in &document.resources {
        let class = resource_generator.create_class(resource)?;
        if !names.insert(class.name.clone()) {
            return Err(CodegenError::generation(format!(
                "class name '{}' is generated twice",
                class.name
            )));
        }
        classes.push(class);
    }

    tracing::info!(
        "Generated {} top-level classes ({} declarations) for '{}'",
        classes.len(),
        classes.iter().map(ClassDeclaration::count_declarations).sum::<usize>(),
        document.name
    );
    Ok(classes)
}
