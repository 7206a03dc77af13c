//! # apigen Schema
//!
//! Schema model and document loading for the apigen class generator.
//!
//! This crate provides:
//! - An arena of schema nodes addressed by identity handles
//! - The resource tree of an API surface
//! - A JSON document loader that preserves identity per document location
//! - Document validation
//! - Naming helpers shared by the generators

pub mod error;
pub mod loader;
pub mod naming;
pub mod resource;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use loader::{SchemaDocument, load_document, load_document_file};
pub use resource::{Resource, ResourceMethod};
pub use types::{Property, SchemaArena, SchemaId, SchemaKind, SchemaNode, SchemaRef};
pub use validation::validate_document;
