//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use apigen::prelude::*;
//! ```

// Schema types
pub use apigen_schema::{
    ParseError, Resource, ResourceMethod, SchemaArena, SchemaDocument, SchemaError, SchemaId,
    SchemaKind, SchemaNode, SchemaRef, load_document, load_document_file, validate_document,
};

// Generators
pub use apigen_codegen::{
    GeneratorConfig, NestedClassResolver, ResourceClassGenerator, RustPrinter, SchemaGenerator,
    generate_from_file, generate_from_json, generate_with,
};

// Decorator seams
pub use apigen_codegen::decorators::{standard_resource_decorators, standard_schema_decorators};
pub use apigen_codegen::{
    NestedClassProvider, NestedClassSchemaDecorator, ResourceContext, ResourceDecorator,
    SchemaDecorator,
};

// Declarations and errors
pub use apigen_codegen::dom::{ClassDeclaration, FieldDecl, MethodDecl, TypeReference};
pub use apigen_codegen::{CodegenError, DecoratorError};
