//! Response marker decorator.

use crate::decorator::{NestedClassProvider, SchemaDecorator};
use crate::dom::{ClassDeclaration, TypeReference};
use crate::error::DecoratorError;
use apigen_schema::SchemaRef;

/// Marks top-level schema classes as direct API responses.
///
/// Only top-level classes can be returned by a method, so this decorator has
/// no nested-class capability and is skipped for nested classes.
pub struct ResponseTraitDecorator {
    trait_name: String,
}

impl ResponseTraitDecorator {
    /// Creates a decorator adding the given trait.
    #[must_use]
    pub fn new(trait_name: impl Into<String>) -> Self {
        Self {
            trait_name: trait_name.into(),
        }
    }
}

impl Default for ResponseTraitDecorator {
    fn default() -> Self {
        Self::new("DirectResponseSchema")
    }
}

impl SchemaDecorator for ResponseTraitDecorator {
    fn name(&self) -> &str {
        "ResponseTraitDecorator"
    }

    fn decorate_class(
        &self,
        class: &mut ClassDeclaration,
        _schema: SchemaRef<'_>,
        _provider: &mut dyn NestedClassProvider,
    ) -> Result<(), DecoratorError> {
        let base = TypeReference::new(self.trait_name.clone());
        if !class.base_types.contains(&base) {
            class.base_types.push(base);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decorators::PropertyDecorator;
    use crate::schema_generator::SchemaGenerator;
    use apigen_schema::{SchemaArena, SchemaKind, SchemaNode};

    #[test]
    fn test_only_root_gets_response_trait() {
        let mut arena = SchemaArena::new();
        let root = arena.alloc(SchemaNode::named("Pet", SchemaKind::object()));
        let owner = arena.alloc(SchemaNode::new(SchemaKind::object()));
        let email = arena.alloc(SchemaNode::new(SchemaKind::String));
        arena.add_property(owner, "email", email);
        arena.add_property(root, "owner", owner);

        let generator = SchemaGenerator::new(vec![
            Box::new(ResponseTraitDecorator::default()),
            Box::new(PropertyDecorator),
        ]);
        let class = generator.create_class(&arena, root).expect("generate");

        assert_eq!(class.base_types, vec![TypeReference::new("DirectResponseSchema")]);
        let nested = class.find_nested("NestedClass1").expect("nested");
        assert!(nested.base_types.is_empty());
        assert!(nested.find_field("email").is_some());
    }
}
