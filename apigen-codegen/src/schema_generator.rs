//! Schema class generation.
//!
//! [`SchemaGenerator`] builds one class per top-level schema. Anonymous
//! sub-schemas found while decorating become nested classes, named
//! `NestedClass<uniquefier><n>` and generated in a second pass once every
//! decorator of the enclosing class has run.

use crate::config::GeneratorConfig;
use crate::decorator::{NestedClassProvider, SchemaDecorator};
use crate::dom::{ClassDeclaration, TypeReference, Visibility};
use crate::error::CodegenError;
use apigen_schema::naming::class_name;
use apigen_schema::{SchemaArena, SchemaId, SchemaRef};
use std::collections::HashMap;

/// Generator for schema classes.
pub struct SchemaGenerator {
    decorators: Vec<Box<dyn SchemaDecorator>>,
    config: GeneratorConfig,
}

impl SchemaGenerator {
    /// Creates a generator with default configuration.
    #[must_use]
    pub fn new(decorators: Vec<Box<dyn SchemaDecorator>>) -> Self {
        Self::with_config(decorators, GeneratorConfig::default())
    }

    /// Creates a generator with the given configuration.
    #[must_use]
    pub fn with_config(decorators: Vec<Box<dyn SchemaDecorator>>, config: GeneratorConfig) -> Self {
        Self { decorators, config }
    }

    /// Returns the decorators in invocation order.
    #[must_use]
    pub fn decorators(&self) -> &[Box<dyn SchemaDecorator>] {
        &self.decorators
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates the class for a named schema, including its nested classes.
    ///
    /// # Arguments
    /// * `arena` - Arena owning the schema
    /// * `id` - Schema to generate
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidArgument` if the schema is not in the
    /// arena or has no usable name, and the first decorator error verbatim
    /// if any decorator fails.
    pub fn create_class(&self, arena: &SchemaArena, id: SchemaId) -> Result<ClassDeclaration, CodegenError> {
        let schema = arena.get(id).ok_or_else(|| {
            CodegenError::invalid_argument(format!("schema {} is not part of the arena", id))
        })?;
        let name = schema.name().and_then(class_name).ok_or_else(|| {
            CodegenError::invalid_argument(format!("schema {} has no usable class name", id))
        })?;

        let mut class = ClassDeclaration::new(name.clone());
        let mut resolver = NestedClassResolver::new(arena, &self.decorators, &self.config, String::new());
        resolver.enclose(id, name);

        for decorator in &self.decorators {
            decorator.decorate_class(&mut class, schema, &mut resolver)?;
        }

        for nested in resolver.generate_nested_classes()? {
            class.add_nested(nested);
        }

        tracing::debug!(
            "Generated class {} with {} nested declarations",
            class.name,
            class.count_declarations() - 1
        );
        Ok(class)
    }
}

/// Per-level naming registry and nested-class emitter.
///
/// A resolver is created for one class, hands out names while that class is
/// being decorated, and afterwards emits one nested declaration per distinct
/// schema it named, in the order the names were first requested.
pub struct NestedClassResolver<'a> {
    arena: &'a SchemaArena,
    decorators: &'a [Box<dyn SchemaDecorator>],
    config: &'a GeneratorConfig,
    /// Makes names unique across nesting levels.
    uniquefier: String,
    /// Schema -> sequence number (1-based).
    schema_order: HashMap<SchemaId, usize>,
    /// Schemas in registration order.
    registered: Vec<SchemaId>,
    /// Names already bound on the path from the root class.
    enclosing: HashMap<SchemaId, String>,
    /// References to schemas from another arena.
    foreign: Vec<SchemaId>,
}

impl<'a> NestedClassResolver<'a> {
    /// Creates a resolver for one class level.
    #[must_use]
    pub fn new(
        arena: &'a SchemaArena,
        decorators: &'a [Box<dyn SchemaDecorator>],
        config: &'a GeneratorConfig,
        uniquefier: String,
    ) -> Self {
        Self {
            arena,
            decorators,
            config,
            uniquefier,
            schema_order: HashMap::new(),
            registered: Vec::new(),
            enclosing: HashMap::new(),
            foreign: Vec::new(),
        }
    }

    /// Binds a schema to a name declared by an enclosing class.
    ///
    /// References to it resolve to that name and are never registered.
    pub fn enclose(&mut self, id: SchemaId, name: impl Into<String>) {
        self.enclosing.insert(id, name.into());
    }

    /// Returns the uniquefier of this level.
    #[must_use]
    pub fn uniquefier(&self) -> &str {
        &self.uniquefier
    }

    /// Returns the schemas registered so far, in sequence-number order.
    #[must_use]
    pub fn registered(&self) -> &[SchemaId] {
        &self.registered
    }

    /// Returns the sequence number assigned to a schema, if registered here.
    #[must_use]
    pub fn sequence_number(&self, id: SchemaId) -> Option<usize> {
        self.schema_order.get(&id).copied()
    }

    fn nested_name(&self, number: usize) -> String {
        self.config.nested_class_name(&self.uniquefier, number)
    }

    /// Emits one nested declaration per registered schema.
    ///
    /// Consumes the resolver: decoration of its level must be complete.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidArgument` if a decorator referenced a
    /// schema from another arena, and decorator errors verbatim.
    pub fn generate_nested_classes(self) -> Result<Vec<ClassDeclaration>, CodegenError> {
        if let Some(id) = self.foreign.first() {
            return Err(CodegenError::invalid_argument(format!(
                "schema {} referenced from another document",
                id
            )));
        }

        // Everything named at this level is visible to the levels below.
        let mut enclosing = self.enclosing.clone();
        for (index, id) in self.registered.iter().enumerate() {
            enclosing.insert(*id, self.nested_name(index + 1));
        }

        let mut classes = Vec::with_capacity(self.registered.len());
        for (index, id) in self.registered.iter().enumerate() {
            classes.push(self.generate_nested_class(*id, index + 1, &enclosing)?);
        }
        Ok(classes)
    }

    /// Generates the nested declaration for one registered schema.
    fn generate_nested_class(
        &self,
        id: SchemaId,
        order: usize,
        enclosing: &HashMap<SchemaId, String>,
    ) -> Result<ClassDeclaration, CodegenError> {
        let schema = self.arena.get(id).ok_or_else(|| {
            CodegenError::invalid_argument(format!("schema {} is not part of the arena", id))
        })?;
        let class_name = self.nested_name(order);

        let mut class = ClassDeclaration::new(class_name.clone());
        class.visibility = Visibility::Public;

        let mut resolver = NestedClassResolver::new(
            self.arena,
            self.decorators,
            self.config,
            format!("{}{}_", self.uniquefier, order),
        );
        resolver.enclosing = enclosing.clone();

        for decorator in self.decorators {
            if let Some(nested_decorator) = decorator.as_nested() {
                tracing::debug!(
                    "Found nested class decorator {} - decorating {}",
                    decorator.name(),
                    class_name
                );
                nested_decorator.decorate_nested_class(&mut class, &class_name, schema, &mut resolver)?;
            }
        }

        for nested in resolver.generate_nested_classes()? {
            class.add_nested(nested);
        }

        Ok(class)
    }
}

impl NestedClassProvider for NestedClassResolver<'_> {
    fn class_reference(&mut self, schema: SchemaRef<'_>) -> TypeReference {
        let id = schema.id();

        if !std::ptr::eq(schema.arena(), self.arena) {
            tracing::warn!("Schema {} belongs to another document", id);
            self.foreign.push(id);
            return TypeReference::new(self.nested_name(0));
        }

        if let Some(name) = self.enclosing.get(&id) {
            tracing::trace!("Schema {} resolves to enclosing class {}", id, name);
            return TypeReference::new(name.clone());
        }

        if let Some(&number) = self.schema_order.get(&id) {
            tracing::trace!("Schema {} already registered as #{}", id, number);
            return TypeReference::new(self.nested_name(number));
        }

        let number = self.registered.len() + 1;
        self.schema_order.insert(id, number);
        self.registered.push(id);
        let name = self.nested_name(number);
        tracing::debug!("Registered schema {} as {}", id, name);
        TypeReference::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decorator::NestedClassSchemaDecorator;
    use crate::dom::FieldDecl;
    use crate::error::DecoratorError;
    use apigen_schema::{SchemaKind, SchemaNode};
    use std::sync::Mutex;

    /// Adds one field per object property, typed by the provider.
    struct ReferenceDecorator;

    impl ReferenceDecorator {
        fn decorate(
            class: &mut ClassDeclaration,
            schema: SchemaRef<'_>,
            provider: &mut dyn NestedClassProvider,
        ) {
            for (name, property) in schema.properties() {
                let ty = if property.is_object() {
                    provider.class_reference(property)
                } else {
                    TypeReference::new("String")
                };
                class.add_field(FieldDecl::new(name, ty));
            }
        }
    }

    impl SchemaDecorator for ReferenceDecorator {
        fn name(&self) -> &str {
            "ReferenceDecorator"
        }

        fn decorate_class(
            &self,
            class: &mut ClassDeclaration,
            schema: SchemaRef<'_>,
            provider: &mut dyn NestedClassProvider,
        ) -> Result<(), DecoratorError> {
            Self::decorate(class, schema, provider);
            Ok(())
        }

        fn as_nested(&self) -> Option<&dyn NestedClassSchemaDecorator> {
            Some(self)
        }
    }

    impl NestedClassSchemaDecorator for ReferenceDecorator {
        fn decorate_nested_class(
            &self,
            class: &mut ClassDeclaration,
            _class_name: &str,
            schema: SchemaRef<'_>,
            provider: &mut dyn NestedClassProvider,
        ) -> Result<(), DecoratorError> {
            Self::decorate(class, schema, provider);
            Ok(())
        }
    }

    /// Root-only decorator recording every class it sees.
    #[derive(Default)]
    struct RootOnlyDecorator {
        seen: Mutex<Vec<String>>,
    }

    impl SchemaDecorator for RootOnlyDecorator {
        fn name(&self) -> &str {
            "RootOnlyDecorator"
        }

        fn decorate_class(
            &self,
            class: &mut ClassDeclaration,
            _schema: SchemaRef<'_>,
            _provider: &mut dyn NestedClassProvider,
        ) -> Result<(), DecoratorError> {
            self.seen.lock().expect("lock").push(class.name.clone());
            class.add_field(FieldDecl::new("etag", TypeReference::new("String")));
            Ok(())
        }
    }

    /// References the given schemas, in order, through the provider.
    struct ReferencesInOrder(Vec<SchemaId>);

    impl SchemaDecorator for ReferencesInOrder {
        fn name(&self) -> &str {
            "ReferencesInOrder"
        }

        fn decorate_class(
            &self,
            class: &mut ClassDeclaration,
            schema: SchemaRef<'_>,
            provider: &mut dyn NestedClassProvider,
        ) -> Result<(), DecoratorError> {
            for id in &self.0 {
                let target = schema.arena().get(*id).expect("schema in arena");
                let ty = provider.class_reference(target);
                class.add_field(FieldDecl::new(format!("f{}", class.members.len()), ty));
            }
            Ok(())
        }
    }

    struct FailingDecorator;

    impl SchemaDecorator for FailingDecorator {
        fn name(&self) -> &str {
            "FailingDecorator"
        }

        fn decorate_class(
            &self,
            class: &mut ClassDeclaration,
            _schema: SchemaRef<'_>,
            _provider: &mut dyn NestedClassProvider,
        ) -> Result<(), DecoratorError> {
            Err(DecoratorError::new(self.name(), &class.name, "unsupported schema"))
        }
    }

    fn object(arena: &mut SchemaArena) -> SchemaId {
        arena.alloc(SchemaNode::new(SchemaKind::object()))
    }

    fn named(arena: &mut SchemaArena, name: &str) -> SchemaId {
        arena.alloc(SchemaNode::named(name, SchemaKind::object()))
    }

    fn field_type<'c>(class: &'c ClassDeclaration, name: &str) -> &'c str {
        class.find_field(name).expect("field").ty.base_type()
    }

    fn nested_names(class: &ClassDeclaration) -> Vec<&str> {
        class.nested_types().map(|c| c.name.as_str()).collect()
    }

    fn generator() -> SchemaGenerator {
        SchemaGenerator::new(vec![Box::new(ReferenceDecorator)])
    }

    #[test]
    fn test_shared_schema_yields_one_nested_class() {
        let mut arena = SchemaArena::new();
        let root = named(&mut arena, "Pet");
        let x = object(&mut arena);
        let leaf = arena.alloc(SchemaNode::new(SchemaKind::String));
        arena.add_property(x, "email", leaf);
        arena.add_property(root, "owner", x);
        arena.add_property(root, "previousOwner", x);

        let class = generator().create_class(&arena, root).expect("generate");

        assert_eq!(nested_names(&class), vec!["NestedClass1"]);
        assert_eq!(field_type(&class, "owner"), "NestedClass1");
        assert_eq!(field_type(&class, "previousOwner"), "NestedClass1");
        let nested = class.find_nested("NestedClass1").expect("nested");
        assert_eq!(nested.visibility, Visibility::Public);
        assert!(nested.find_field("email").is_some());
    }

    #[test]
    fn test_structurally_identical_schemas_get_distinct_names() {
        let mut arena = SchemaArena::new();
        let root = named(&mut arena, "Pet");
        let a = object(&mut arena);
        let b = object(&mut arena);
        arena.add_property(root, "a", a);
        arena.add_property(root, "b", b);
        assert_eq!(arena.node(a), arena.node(b));

        let class = generator().create_class(&arena, root).expect("generate");

        assert_eq!(nested_names(&class), vec!["NestedClass1", "NestedClass2"]);
        assert_eq!(field_type(&class, "a"), "NestedClass1");
        assert_eq!(field_type(&class, "b"), "NestedClass2");
    }

    #[test]
    fn test_sequence_follows_first_encounter_across_decorators() {
        let mut arena = SchemaArena::new();
        let root = named(&mut arena, "Pet");
        let s1 = object(&mut arena);
        let s2 = object(&mut arena);
        let s3 = object(&mut arena);

        let generator = SchemaGenerator::new(vec![
            Box::new(ReferencesInOrder(vec![s2])),
            Box::new(ReferencesInOrder(vec![s1, s2, s3, s1])),
        ]);

        let config = GeneratorConfig::default();
        let mut resolver = NestedClassResolver::new(&arena, generator.decorators(), &config, String::new());
        let mut class = ClassDeclaration::new("Pet");
        let schema = arena.get(root).expect("root");
        for decorator in generator.decorators() {
            decorator
                .decorate_class(&mut class, schema, &mut resolver)
                .expect("decorate");
        }

        assert_eq!(resolver.registered(), &[s2, s1, s3]);
        assert_eq!(resolver.sequence_number(s2), Some(1));
        assert_eq!(resolver.sequence_number(s1), Some(2));
        assert_eq!(resolver.sequence_number(s3), Some(3));

        let types: Vec<_> = class.fields().map(|f| f.ty.base_type().to_string()).collect();
        assert_eq!(
            types,
            vec!["NestedClass1", "NestedClass2", "NestedClass1", "NestedClass3", "NestedClass2"]
        );

        let nested = resolver.generate_nested_classes().expect("nested");
        let names: Vec<_> = nested.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["NestedClass1", "NestedClass2", "NestedClass3"]);
    }

    #[test]
    fn test_idempotent_naming() {
        let mut arena = SchemaArena::new();
        let x = object(&mut arena);
        let config = GeneratorConfig::default();
        let decorators: Vec<Box<dyn SchemaDecorator>> = Vec::new();
        let mut resolver = NestedClassResolver::new(&arena, &decorators, &config, "4_".to_string());

        let schema = arena.get(x).expect("x");
        let first = resolver.class_reference(schema);
        let second = resolver.class_reference(schema);

        assert_eq!(first, second);
        assert_eq!(first.base_type(), "NestedClass4_1");
        assert_eq!(resolver.registered().len(), 1);
        assert_eq!(resolver.uniquefier(), "4_");
    }

    #[test]
    fn test_uniquefier_accumulates_per_level() {
        let mut arena = SchemaArena::new();
        let root = named(&mut arena, "Pet");
        let a = object(&mut arena);
        let b = object(&mut arena);
        let a_child = object(&mut arena);
        let b_child = object(&mut arena);
        let b_grandchild = object(&mut arena);
        arena.add_property(root, "a", a);
        arena.add_property(root, "b", b);
        arena.add_property(a, "inner", a_child);
        arena.add_property(b, "inner", b_child);
        arena.add_property(b_child, "deeper", b_grandchild);

        let class = generator().create_class(&arena, root).expect("generate");

        let first = class.find_nested("NestedClass1").expect("1");
        let second = class.find_nested("NestedClass2").expect("2");
        assert_eq!(nested_names(first), vec!["NestedClass1_1"]);
        assert_eq!(nested_names(second), vec!["NestedClass2_1"]);
        assert_eq!(field_type(second, "inner"), "NestedClass2_1");

        let inner = second.find_nested("NestedClass2_1").expect("2_1");
        assert_eq!(nested_names(inner), vec!["NestedClass2_1_1"]);
        assert_eq!(class.count_declarations(), 6);
    }

    #[test]
    fn test_self_reference_terminates() {
        let mut arena = SchemaArena::new();
        let root = named(&mut arena, "Tree");
        let node = object(&mut arena);
        arena.add_property(node, "next", node);
        arena.add_property(root, "head", node);

        let class = generator().create_class(&arena, root).expect("generate");

        assert_eq!(class.count_declarations(), 2);
        let nested = class.find_nested("NestedClass1").expect("nested");
        assert_eq!(field_type(nested, "next"), "NestedClass1");
        assert_eq!(nested.nested_types().count(), 0);
    }

    #[test]
    fn test_mutual_recursion_terminates() {
        let mut arena = SchemaArena::new();
        let root = named(&mut arena, "Graph");
        let y = object(&mut arena);
        let z = object(&mut arena);
        arena.add_property(y, "other", z);
        arena.add_property(z, "back", y);
        arena.add_property(root, "start", y);

        let class = generator().create_class(&arena, root).expect("generate");

        let y_class = class.find_nested("NestedClass1").expect("y");
        let z_class = y_class.find_nested("NestedClass1_1").expect("z");
        assert_eq!(field_type(y_class, "other"), "NestedClass1_1");
        assert_eq!(field_type(z_class, "back"), "NestedClass1");
        assert_eq!(class.count_declarations(), 3);
    }

    #[test]
    fn test_reference_to_root_resolves_to_root_name() {
        let mut arena = SchemaArena::new();
        let root = arena.alloc(SchemaNode::named("Folder", SchemaKind::object()));
        let listing = object(&mut arena);
        arena.add_property(listing, "parent", root);
        arena.add_property(root, "listing", listing);

        let class = generator().create_class(&arena, root).expect("generate");

        let nested = class.find_nested("NestedClass1").expect("listing");
        assert_eq!(field_type(nested, "parent"), "Folder");
        assert_eq!(class.count_declarations(), 2);
    }

    #[test]
    fn test_reference_to_sibling_reuses_sibling_name() {
        let mut arena = SchemaArena::new();
        let root = named(&mut arena, "Pet");
        let a = object(&mut arena);
        let b = object(&mut arena);
        let leaf = arena.alloc(SchemaNode::new(SchemaKind::String));
        arena.add_property(b, "label", leaf);
        arena.add_property(a, "b", b);
        arena.add_property(root, "a", a);
        arena.add_property(root, "b", b);

        let class = generator().create_class(&arena, root).expect("generate");

        assert_eq!(nested_names(&class), vec!["NestedClass1", "NestedClass2"]);
        let a_class = class.find_nested("NestedClass1").expect("a");
        assert_eq!(field_type(a_class, "b"), "NestedClass2");
        assert_eq!(a_class.nested_types().count(), 0);
        assert_eq!(class.count_declarations(), 3);
    }

    #[test]
    fn test_no_decorators_yields_empty_named_class() {
        let mut arena = SchemaArena::new();
        let root = named(&mut arena, "empty_thing");
        let child = object(&mut arena);
        arena.add_property(root, "child", child);

        let generator = SchemaGenerator::new(Vec::new());
        let class = generator.create_class(&arena, root).expect("generate");

        assert_eq!(class.name, "EmptyThing");
        assert!(class.members.is_empty());
    }

    #[test]
    fn test_class_without_sub_schemas_has_no_nested_classes() {
        let mut arena = SchemaArena::new();
        let root = named(&mut arena, "Tag");
        let label = arena.alloc(SchemaNode::new(SchemaKind::String));
        arena.add_property(root, "label", label);

        let class = generator().create_class(&arena, root).expect("generate");

        assert_eq!(class.name, "Tag");
        assert_eq!(class.nested_types().count(), 0);
        assert_eq!(class.fields().count(), 1);
    }

    #[test]
    fn test_root_only_decorator_skipped_for_nested_classes() {
        let mut arena = SchemaArena::new();
        let root = named(&mut arena, "Pet");
        let owner = object(&mut arena);
        arena.add_property(root, "owner", owner);

        let root_only = std::sync::Arc::new(RootOnlyDecorator::default());

        struct Shared(std::sync::Arc<RootOnlyDecorator>);
        impl SchemaDecorator for Shared {
            fn name(&self) -> &str {
                self.0.name()
            }
            fn decorate_class(
                &self,
                class: &mut ClassDeclaration,
                schema: SchemaRef<'_>,
                provider: &mut dyn NestedClassProvider,
            ) -> Result<(), DecoratorError> {
                self.0.decorate_class(class, schema, provider)
            }
        }

        let generator = SchemaGenerator::new(vec![
            Box::new(ReferenceDecorator),
            Box::new(Shared(root_only.clone())),
        ]);
        let class = generator.create_class(&arena, root).expect("generate");

        assert_eq!(*root_only.seen.lock().expect("lock"), vec!["Pet".to_string()]);
        assert!(class.find_field("etag").is_some());
        let nested = class.find_nested("NestedClass1").expect("nested");
        assert!(nested.find_field("etag").is_none());
    }

    #[test]
    fn test_decorator_order_is_observable() {
        let mut arena = SchemaArena::new();
        let root = named(&mut arena, "Pet");
        let name = arena.alloc(SchemaNode::new(SchemaKind::String));
        arena.add_property(root, "name", name);

        let generator = SchemaGenerator::new(vec![
            Box::new(RootOnlyDecorator::default()),
            Box::new(ReferenceDecorator),
        ]);
        let class = generator.create_class(&arena, root).expect("generate");

        let names: Vec<_> = class.members.iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["etag", "name"]);
    }

    #[test]
    fn test_decorator_failure_aborts_generation() {
        let mut arena = SchemaArena::new();
        let root = named(&mut arena, "Pet");

        let generator = SchemaGenerator::new(vec![
            Box::new(ReferenceDecorator),
            Box::new(FailingDecorator),
        ]);
        let err = generator.create_class(&arena, root).expect_err("should fail");

        match err {
            CodegenError::Decorator(e) => {
                assert_eq!(e.decorator, "FailingDecorator");
                assert_eq!(e.class_name, "Pet");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_schema_is_invalid_argument() {
        let mut other = SchemaArena::new();
        other.alloc(SchemaNode::default());
        let foreign = other.alloc(SchemaNode::default());

        let arena = SchemaArena::new();
        let result = generator().create_class(&arena, foreign);
        assert!(matches!(result, Err(CodegenError::InvalidArgument { .. })));
    }

    #[test]
    fn test_unnamed_root_is_invalid_argument() {
        let mut arena = SchemaArena::new();
        let root = object(&mut arena);

        let result = generator().create_class(&arena, root);
        assert!(matches!(result, Err(CodegenError::InvalidArgument { .. })));
    }

    #[test]
    fn test_foreign_reference_is_invalid_argument() {
        let mut other = SchemaArena::new();
        let foreign = object(&mut other);

        let mut arena = SchemaArena::new();
        let root = named(&mut arena, "Pet");
        let config = GeneratorConfig::default();
        let decorators: Vec<Box<dyn SchemaDecorator>> = Vec::new();
        let mut resolver = NestedClassResolver::new(&arena, &decorators, &config, String::new());

        resolver.class_reference(other.get(foreign).expect("foreign"));
        assert!(resolver.registered().is_empty());
        assert!(arena.get(root).is_some());
        assert!(matches!(
            resolver.generate_nested_classes(),
            Err(CodegenError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_custom_prefix() {
        let mut arena = SchemaArena::new();
        let root = named(&mut arena, "Pet");
        let owner = object(&mut arena);
        arena.add_property(root, "owner", owner);

        let generator = SchemaGenerator::with_config(
            vec![Box::new(ReferenceDecorator)],
            GeneratorConfig::new().nested_class_prefix("Inner"),
        );
        let class = generator.create_class(&arena, root).expect("generate");

        assert_eq!(nested_names(&class), vec!["Inner1"]);
    }

    #[test]
    fn test_independent_runs_in_parallel() {
        let mut arena = SchemaArena::new();
        let pet = named(&mut arena, "Pet");
        let tag = named(&mut arena, "Tag");
        for root in [pet, tag] {
            let a = object(&mut arena);
            let b = object(&mut arena);
            arena.add_property(root, "a", a);
            arena.add_property(root, "b", b);
        }
        let generator = generator();

        let (pet_class, tag_class) = std::thread::scope(|s| {
            let pet_run = s.spawn(|| generator.create_class(&arena, pet));
            let tag_run = s.spawn(|| generator.create_class(&arena, tag));
            (
                pet_run.join().expect("join").expect("pet"),
                tag_run.join().expect("join").expect("tag"),
            )
        });

        assert_eq!(nested_names(&pet_class), vec!["NestedClass1", "NestedClass2"]);
        assert_eq!(nested_names(&tag_class), vec!["NestedClass1", "NestedClass2"]);
    }

    #[test]
    fn test_output_is_deterministic() {
        let mut arena = SchemaArena::new();
        let root = named(&mut arena, "Pet");
        for i in 0..16 {
            let child = object(&mut arena);
            arena.add_property(root, format!("p{}", i), child);
        }

        let first = generator().create_class(&arena, root).expect("first");
        let second = generator().create_class(&arena, root).expect("second");

        assert_eq!(first, second);
        assert_eq!(field_type(&first, "p15"), "NestedClass16");
    }
}
