//! Error types for document loading and validation.

use thiserror::Error;

/// Error type for document loading operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON syntax error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Missing required field.
    #[error("missing required field '{field}' at '{location}'")]
    MissingField {
        /// Document location (JSON pointer).
        location: String,
        /// Field name.
        field: String,
    },

    /// Invalid field value.
    #[error("invalid value '{value}' for field '{field}' at '{location}'")]
    InvalidValue {
        /// Document location (JSON pointer).
        location: String,
        /// Field name.
        field: String,
        /// Invalid value.
        value: String,
    },

    /// `$ref` pointing at a location that does not exist.
    #[error("unresolved reference '{reference}' at '{location}'")]
    UnresolvedReference {
        /// Document location of the `$ref`.
        location: String,
        /// Reference text.
        reference: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for document validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Duplicate definition.
    #[error("duplicate {kind} definition: '{name}'")]
    DuplicateDefinition {
        /// Kind of definition (schema, resource).
        kind: String,
        /// Name of the duplicate.
        name: String,
    },

    /// Schema not found.
    #[error("schema '{name}' not found (referenced by '{referenced_by}')")]
    UnknownSchema {
        /// Schema name.
        name: String,
        /// Referencing element.
        referenced_by: String,
    },

    /// Validation error.
    #[error("validation error: {message}")]
    Validation {
        /// Error message.
        message: String,
    },
}

impl ParseError {
    /// Creates a missing field error.
    pub fn missing_field(location: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            location: location.into(),
            field: field.into(),
        }
    }

    /// Creates an invalid value error.
    pub fn invalid_value(
        location: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            location: location.into(),
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates an unresolved reference error.
    pub fn unresolved(location: impl Into<String>, reference: impl Into<String>) -> Self {
        Self::UnresolvedReference {
            location: location.into(),
            reference: reference.into(),
        }
    }
}

impl SchemaError {
    /// Creates a duplicate definition error.
    pub fn duplicate(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateDefinition {
            kind: kind.into(),
            name: name.into(),
        }
    }
}
