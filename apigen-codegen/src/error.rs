//! Error types for code generation.

use thiserror::Error;

/// Error raised by a decorator while decorating a class.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("decorator '{decorator}' failed on '{class_name}': {message}")]
pub struct DecoratorError {
    /// Name of the failing decorator.
    pub decorator: String,
    /// Class being decorated.
    pub class_name: String,
    /// Error message.
    pub message: String,
}

impl DecoratorError {
    /// Creates a decorator error.
    pub fn new(
        decorator: impl Into<String>,
        class_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            decorator: decorator.into(),
            class_name: class_name.into(),
            message: message.into(),
        }
    }
}

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Document parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] apigen_schema::ParseError),

    /// Document validation error.
    #[error("schema error: {0}")]
    Schema(#[from] apigen_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A required argument is absent or does not belong to the document.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Error message.
        message: String,
    },

    /// A decorator failed; the whole generation run is aborted.
    #[error(transparent)]
    Decorator(#[from] DecoratorError),

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates an invalid argument error with the given message.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }
}
