//! Doc comment decorator.

use crate::decorator::{NestedClassProvider, NestedClassSchemaDecorator, SchemaDecorator};
use crate::dom::ClassDeclaration;
use crate::error::DecoratorError;
use apigen_schema::SchemaRef;

/// Copies the schema description to the class doc comment.
pub struct DocDecorator;

impl SchemaDecorator for DocDecorator {
    fn name(&self) -> &str {
        "DocDecorator"
    }

    fn decorate_class(
        &self,
        class: &mut ClassDeclaration,
        schema: SchemaRef<'_>,
        _provider: &mut dyn NestedClassProvider,
    ) -> Result<(), DecoratorError> {
        if let Some(description) = schema.description() {
            class.doc = Some(description.trim().to_string());
        }
        Ok(())
    }

    fn as_nested(&self) -> Option<&dyn NestedClassSchemaDecorator> {
        Some(self)
    }
}

impl NestedClassSchemaDecorator for DocDecorator {
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
