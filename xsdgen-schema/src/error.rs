//! Error types for type graph construction and validation.

use thiserror::Error;

/// Error type for the schema-derived type graph.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Type id outside the graph's type table.
    #[error("unknown type id {index}")]
    UnknownType {
        /// Raw table index.
        index: usize,
    },

    /// Type not found by name.
    #[error("type '{name}' not found")]
    TypeNotFound {
        /// Type name.
        name: String,
    },

    /// Base type of the wrong kind.
    #[error("type '{type_name}' cannot derive from '{base_name}'")]
    InvalidBase {
        /// Derived type name.
        type_name: String,
        /// Base type name.
        base_name: String,
    },

    /// Circular base type chain.
    #[error("circular type reference detected: {path}")]
    CircularReference {
        /// Path of the circular reference.
        path: String,
    },

    /// Duplicate definition.
    #[error("duplicate {kind} definition: '{name}'")]
    DuplicateDefinition {
        /// Kind of definition (type, enum member, etc.).
        kind: String,
        /// Name of the duplicate.
        name: String,
    },

    /// Invalid enum value.
    #[error("invalid enum value '{value}' for enum '{enum_name}'")]
    InvalidEnumValue {
        /// Enum name.
        enum_name: String,
        /// Invalid value.
        value: String,
    },

    /// Validation error.
    #[error("validation error: {message}")]
    Validation {
        /// Error message.
        message: String,
    },
}

impl SchemaError {
    /// Creates an invalid base error.
    pub fn invalid_base(type_name: impl Into<String>, base_name: impl Into<String>) -> Self {
        Self::InvalidBase {
            type_name: type_name.into(),
            base_name: base_name.into(),
        }
    }

    /// Creates a duplicate definition error.
    pub fn duplicate(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateDefinition {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Creates a type not found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::TypeNotFound { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SchemaError::invalid_base("Order", "Kind").to_string(),
            "type 'Order' cannot derive from 'Kind'"
        );
        assert_eq!(
            SchemaError::duplicate("enum member", "Red").to_string(),
            "duplicate enum member definition: 'Red'"
        );
        assert_eq!(
            SchemaError::UnknownType { index: 9 }.to_string(),
            "unknown type id 9"
        );
    }
}
