//! Derive attribute decorator.

use crate::decorator::{NestedClassProvider, NestedClassSchemaDecorator, SchemaDecorator};
use crate::dom::ClassDeclaration;
use crate::error::DecoratorError;
use apigen_schema::SchemaRef;

/// Adds a `derive(...)` attribute to every schema class.
pub struct DeriveDecorator {
    derives: Vec<String>,
}

impl DeriveDecorator {
    /// Creates a decorator emitting the given derives.
    #[must_use]
    pub fn new(derives: Vec<String>) -> Self {
        Self { derives }
    }
}

impl SchemaDecorator for DeriveDecorator {
    fn name(&self) -> &str {
        "DeriveDecorator"
    }

    fn decorate_class(
        &self,
        class: &mut ClassDeclaration,
        _schema: SchemaRef<'_>,
        _provider: &mut dyn NestedClassProvider,
    ) -> Result<(), DecoratorError> {
        if !self.derives.is_empty() {
            class.add_attribute(format!("derive({})", self.derives.join(", ")));
        }
        Ok(())
    }

    fn as_nested(&self) -> Option<&dyn NestedClassSchemaDecorator> {
        Some(self)
    }
}

impl NestedClassSchemaDecorator for DeriveDecorator {
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
