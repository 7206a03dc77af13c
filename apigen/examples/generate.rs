//! Example generation run with a custom decorator next to the standard ones.
//!
//! Run with: `RUST_LOG=debug cargo run --example generate [path/to/document.json]`

use apigen::prelude::*;

const DOCUMENT: &str = r##"{
    "name": "petstore",
    "schemas": {
        "Pet": {
            "description": "A pet for sale.",
            "properties": {
                "id": { "type": "integer" },
                "name": { "type": "string" },
                "owner": {
                    "type": "object",
                    "properties": {
                        "email": { "type": "string" },
                        "address": {
                            "type": "object",
                            "properties": { "city": { "type": "string" } }
                        }
                    }
                },
                "previousOwners": {
                    "type": "array",
                    "items": { "$ref": "#/schemas/Pet/properties/owner" }
                }
            }
        }
    },
    "resources": {
        "pets": {
            "methods": {
                "get": { "httpMethod": "GET", "path": "pets/{petId}", "response": { "$ref": "Pet" } }
            }
        }
    }
}"##;

/// Rejects unknown JSON fields on every generated class, nested ones included.
struct StrictDecorator;

impl SchemaDecorator for StrictDecorator {
    fn name(&self) -> &str {
        "StrictDecorator"
    }

    fn decorate_class(
        &self,
        class: &mut ClassDeclaration,
        _schema: SchemaRef<'_>,
        _provider: &mut dyn NestedClassProvider,
    ) -> Result<(), DecoratorError> {
        class.add_attribute("serde(deny_unknown_fields)");
        Ok(())
    }

    fn as_nested(&self) -> Option<&dyn NestedClassSchemaDecorator> {
        Some(self)
    }
}

impl NestedClassSchemaDecorator for StrictDecorator {
    fn decorate_nested_class(
        &self,
        class: &mut ClassDeclaration,
        _class_name: &str,
        schema: SchemaRef<'_>,
        provider: &mut dyn NestedClassProvider,
    ) -> Result<(), DecoratorError> {
        self.decorate_class(class, schema, provider)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let document = match std::env::args().nth(1) {
        Some(path) => load_document_file(std::path::Path::new(&path))?,
        None => load_document(DOCUMENT)?,
    };

    let config = GeneratorConfig::new().derives(["Debug", "Clone", "PartialEq"]);
    let mut schema_decorators = standard_schema_decorators(&config);
    schema_decorators.push(Box::new(StrictDecorator));

    let classes = generate_with(
        &document,
        config,
        schema_decorators,
        standard_resource_decorators(),
    )?;

    println!("{}", RustPrinter::new().print_all(&classes));
    Ok(())
}
