//! Decorator contracts.
//!
//! Generators decide the shape and naming of the class tree; decorators
//! decide what goes inside each class. A schema decorator runs on every
//! top-level class. It takes part in nested-class decoration only if it
//! also implements [`NestedClassSchemaDecorator`] and returns itself from
//! [`SchemaDecorator::as_nested`].

use crate::dom::{ClassDeclaration, TypeReference};
use crate::error::DecoratorError;
use apigen_schema::{Resource, SchemaRef};

/// Naming capability handed to schema decorators.
///
/// Asking for a reference only reserves a name; the class body is
/// generated after every decorator of the current class has finished.
pub trait NestedClassProvider {
    /// Returns the type name for an anonymous sub-schema.
    ///
    /// The same schema identity always yields the same name for the
    /// lifetime of the provider.
    fn class_reference(&mut self, schema: SchemaRef<'_>) -> TypeReference;
}

/// Decorator applied to schema-generated classes.
pub trait SchemaDecorator: Send + Sync {
    /// Returns the decorator name used in error reports and logs.
    fn name(&self) -> &str;

    /// Decorates a top-level class generated for `schema`.
    ///
    /// # Arguments
    /// * `class` - Declaration being built
    /// * `schema` - Schema the class is generated for
    /// * `provider` - Naming capability for anonymous sub-schemas
    ///
    /// # Errors
    /// Returns `DecoratorError` to abort the generation run.
    fn decorate_class(
        &self,
        class: &mut ClassDeclaration,
        schema: SchemaRef<'_>,
        provider: &mut dyn NestedClassProvider,
    ) -> Result<(), DecoratorError>;

    /// Returns the nested-class capability, if this decorator has one.
    fn as_nested(&self) -> Option<&dyn NestedClassSchemaDecorator> {
        None
    }
}

/// Decorator that also runs on generated nested classes.
pub trait NestedClassSchemaDecorator: SchemaDecorator {
    /// Decorates a nested class generated for an anonymous sub-schema.
    ///
    /// # Arguments
    /// * `class` - Declaration being built
    /// * `class_name` - Name assigned to the nested class
    /// * `schema` - Sub-schema the class is generated for
    /// * `provider` - Naming capability one level further down
    ///
    /// # Errors
    /// Returns `DecoratorError` to abort the generation run.
    fn decorate_nested_class(
        &self,
        class: &mut ClassDeclaration,
        class_name: &str,
        schema: SchemaRef<'_>,
        provider: &mut dyn NestedClassProvider,
    ) -> Result<(), DecoratorError>;
}

/// Context handed to resource decorators.
#[derive(Debug, Clone, Copy)]
pub struct ResourceContext<'a> {
    /// Service (document) name.
    pub service_name: &'a str,
    /// Dotted path of resource names from the top level.
    pub path: &'a str,
}

/// Decorator applied to resource classes.
pub trait ResourceDecorator: Send + Sync {
    /// Returns the decorator name used in error reports and logs.
    fn name(&self) -> &str;

    /// Decorates the class generated for `resource`.
    ///
    /// # Errors
    /// Returns `DecoratorError` to abort the generation run.
    fn decorate_class(
        &self,
        class: &mut ClassDeclaration,
        resource: &Resource,
        context: ResourceContext<'_>,
    ) -> Result<(), DecoratorError>;
}
