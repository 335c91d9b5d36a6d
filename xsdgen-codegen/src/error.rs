//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Type graph error.
    #[error("schema error: {0}")]
    Schema(#[from] xsdgen_schema::SchemaError),

    /// Default literal has no construction rule for the resolved type.
    #[error("resolving default value '{literal}' for {type_name} is not supported")]
    UnsupportedDefault {
        /// Literal from the schema.
        literal: String,
        /// Name of the resolved type.
        type_name: String,
    },

    /// Default or fixed literal that does not parse as the resolved type.
    #[error("invalid literal '{literal}', expected {expected}")]
    InvalidLiteral {
        /// Literal from the schema.
        literal: String,
        /// Expected lexical form.
        expected: String,
    },

    /// Default literal that names no member of the enum.
    #[error("'{literal}' is not a value of enum '{enum_name}'")]
    UnknownEnumLiteral {
        /// Literal from the schema.
        literal: String,
        /// Enum name.
        enum_name: String,
    },

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Creates an unsupported default error.
    pub fn unsupported_default(literal: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::UnsupportedDefault {
            literal: literal.into(),
            type_name: type_name.into(),
        }
    }

    /// Creates an invalid literal error.
    pub fn invalid_literal(literal: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InvalidLiteral {
            literal: literal.into(),
            expected: expected.into(),
        }
    }
}
