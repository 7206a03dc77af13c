//! # apigen
//!
//! Schema-driven API client class generator for Rust.
//!
//! An API document describes schemas and resources. apigen turns every
//! top-level schema into a class, every anonymous object it reaches into a
//! nested class, and every resource into a resource class. What ends up
//! inside a class is decided by pluggable decorators.
//!
//! ## Features
//!
//! - **Identity-based nesting** - a sub-schema reached several times becomes one nested class
//! - **Deterministic naming** - `NestedClass1`, `NestedClass1_1`, ... in first-encounter order
//! - **Pluggable decorators** - decorators opt into nested classes explicitly
//! - **Rust output** - generated declarations print as serde-ready structs
//!
//! ## Quick Start
//!
//! ```ignore
//! use apigen::prelude::*;
//!
//! let code = generate_from_json(&std::fs::read_to_string("petstore.json")?)?;
//! println!("{}", code);
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Schema model, document loading and validation
//! - [`codegen`] - Class generation, decorators and printing

pub mod prelude;

/// Schema model, document loading and validation.
pub mod schema {
    pub use apigen_schema::*;
}

/// Class generation from schema documents.
pub mod codegen {
    pub use apigen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use apigen_codegen::{
    CodegenError, GeneratorConfig, ResourceClassGenerator, SchemaGenerator, generate_from_file,
    generate_from_json, generate_with,
};
pub use apigen_schema::{SchemaDocument, load_document, load_document_file};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports() {
        let code = generate_from_json(
            r#"{ "name": "mini", "schemas": { "Item": { "properties": { "id": { "type": "string" } } } } }"#,
        )
        .expect("Failed to generate");
        assert!(code.contains("pub struct Item {"));

        let document = schema::load_document("{}").expect("Failed to load");
        assert!(document.schemas.is_empty());
        let classes = codegen::generate_with(&document, GeneratorConfig::default(), Vec::new(), Vec::new())
            .expect("Failed to generate");
        assert!(classes.is_empty());
    }
}
