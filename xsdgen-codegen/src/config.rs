//! Generator configuration.

use serde::{Deserialize, Serialize};
use xsdgen_schema::{IntegerOverride, ResolverOptions};

/// Default collection type used for repeating members.
pub const DEFAULT_COLLECTION: &str = "System.Collections.ObjectModel.Collection";

/// Container used for repeating members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum CollectionKind {
    /// Generic collection type, optionally with a distinct implementation
    /// type used when creating instances.
    #[serde(rename_all = "camelCase")]
    Generic {
        /// Collection type used in declarations.
        definition: String,
        /// Collection type instantiated by initializers.
        implementation: Option<String>,
    },
    /// Raw array.
    Array,
}

impl Default for CollectionKind {
    fn default() -> Self {
        Self::Generic {
            definition: DEFAULT_COLLECTION.to_string(),
            implementation: None,
        }
    }
}

impl CollectionKind {
    /// Collection type name for declarations or initializers.
    #[must_use]
    pub fn type_name(&self, for_init: bool) -> Option<&str> {
        match self {
            Self::Generic {
                definition,
                implementation,
            } => Some(match (for_init, implementation) {
                (true, Some(implementation)) => implementation.as_str(),
                _ => definition.as_str(),
            }),
            Self::Array => None,
        }
    }

    /// Returns true for raw arrays.
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array)
    }
}

/// Setter policy for collection members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CollectionSettersMode {
    /// Private setter, initialized in the constructor.
    #[default]
    Private,
    /// Public setter, initialized in the constructor.
    Public,
    /// Public setter, left uninitialized.
    PublicWithoutConstructorInitialization,
}

/// Validation annotations emitted on members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DataAnnotationMode {
    /// None.
    None,
    /// Required, length and range annotations.
    #[default]
    Partial,
    /// Partial plus pattern annotations.
    All,
}

/// Frozen options bundle for one generation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorConfig {
    /// Type resolution options.
    pub resolver: ResolverOptions,
    /// Emit nullable wrapper members for optional value types.
    pub generate_nullables: bool,
    /// Emit should-serialize query methods instead of specified flags on
    /// elements.
    pub use_should_serialize: bool,
    /// Container for repeating members.
    pub collection: CollectionKind,
    /// Setter policy for collection members.
    pub collection_setters: CollectionSettersMode,
    /// Emit change-notifying accessors.
    pub enable_data_binding: bool,
    /// Fold single-collection wrapper classes into array members.
    pub use_array_item_attribute: bool,
    /// Emit substitution group members as separate properties.
    pub separate_substitutes: bool,
    /// Emit entity keys and mapping annotations.
    pub entity_framework: bool,
    /// Name of the text member of simple-content classes; `None` omits it.
    pub text_value_property_name: Option<String>,
    /// Prefix of backing field names.
    pub private_member_prefix: String,
    /// Validation annotations.
    pub data_annotation_mode: DataAnnotationMode,
    /// Mark generated types serializable.
    pub generate_serializable: bool,
    /// Omit `IsNullable` on nillable members that are also optional.
    pub do_not_force_is_nullable: bool,
    /// Emit allow-null/maybe-null annotations on nullable references.
    pub enable_nullable_reference_attributes: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            resolver: ResolverOptions::default(),
            generate_nullables: false,
            use_should_serialize: false,
            collection: CollectionKind::default(),
            collection_setters: CollectionSettersMode::default(),
            enable_data_binding: false,
            use_array_item_attribute: true,
            separate_substitutes: false,
            entity_framework: false,
            text_value_property_name: Some("Value".to_string()),
            private_member_prefix: "_".to_string(),
            data_annotation_mode: DataAnnotationMode::default(),
            generate_serializable: false,
            do_not_force_is_nullable: false,
            enable_nullable_reference_attributes: false,
        }
    }
}

impl GeneratorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fixed integer host type.
    #[must_use]
    pub fn integer_override(mut self, integer_override: Option<IntegerOverride>) -> Self {
        self.resolver.integer_override = integer_override;
        self
    }

    /// Maps `xs:dateTime` to the offset-aware host type.
    #[must_use]
    pub fn date_time_offset(mut self, enabled: bool) -> Self {
        self.resolver.date_time_offset = enabled;
        self
    }

    /// Maps `xs:duration` to the host duration type.
    #[must_use]
    pub fn native_duration(mut self, enabled: bool) -> Self {
        self.resolver.native_duration = enabled;
        self
    }

    /// Enables nullable wrapper members.
    #[must_use]
    pub fn generate_nullables(mut self, enabled: bool) -> Self {
        self.generate_nullables = enabled;
        self
    }

    /// Enables should-serialize query methods.
    #[must_use]
    pub fn use_should_serialize(mut self, enabled: bool) -> Self {
        self.use_should_serialize = enabled;
        self
    }

    /// Sets the collection container.
    #[must_use]
    pub fn collection(mut self, collection: CollectionKind) -> Self {
        self.collection = collection;
        self
    }

    /// Sets the collection setter policy.
    #[must_use]
    pub fn collection_setters(mut self, mode: CollectionSettersMode) -> Self {
        self.collection_setters = mode;
        self
    }

    /// Enables change-notifying accessors.
    #[must_use]
    pub fn enable_data_binding(mut self, enabled: bool) -> Self {
        self.enable_data_binding = enabled;
        self
    }

    /// Enables array folding of single-collection wrapper classes.
    #[must_use]
    pub fn use_array_item_attribute(mut self, enabled: bool) -> Self {
        self.use_array_item_attribute = enabled;
        self
    }

    /// Emits substitution group members as separate properties.
    #[must_use]
    pub fn separate_substitutes(mut self, enabled: bool) -> Self {
        self.separate_substitutes = enabled;
        self
    }

    /// Enables entity key synthesis and mapping annotations.
    #[must_use]
    pub fn entity_framework(mut self, enabled: bool) -> Self {
        self.entity_framework = enabled;
        self
    }

    /// Sets the text member name of simple-content classes.
    #[must_use]
    pub fn text_value_property_name(mut self, name: Option<&str>) -> Self {
        self.text_value_property_name = name.map(str::to_string);
        self
    }

    /// Sets the backing field prefix.
    #[must_use]
    pub fn private_member_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.private_member_prefix = prefix.into();
        self
    }

    /// Sets the validation annotation mode.
    #[must_use]
    pub fn data_annotation_mode(mut self, mode: DataAnnotationMode) -> Self {
        self.data_annotation_mode = mode;
        self
    }

    /// Marks generated types serializable.
    #[must_use]
    pub fn generate_serializable(mut self, enabled: bool) -> Self {
        self.generate_serializable = enabled;
        self
    }

    /// Omits `IsNullable` on optional nillable members.
    #[must_use]
    pub fn do_not_force_is_nullable(mut self, enabled: bool) -> Self {
        self.do_not_force_is_nullable = enabled;
        self
    }

    /// Emits nullable reference annotations.
    #[must_use]
    pub fn enable_nullable_reference_attributes(mut self, enabled: bool) -> Self {
        self.enable_nullable_reference_attributes = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xsdgen_schema::HostType;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.private_member_prefix, "_");
        assert_eq!(config.text_value_property_name.as_deref(), Some("Value"));
        assert_eq!(config.collection.type_name(false), Some(DEFAULT_COLLECTION));
        assert_eq!(config.collection_setters, CollectionSettersMode::Private);
        assert!(config.use_array_item_attribute);
        assert!(!config.generate_nullables);
    }

    #[test]
    fn test_builder() {
        let config = GeneratorConfig::new()
            .generate_nullables(true)
            .use_should_serialize(true)
            .date_time_offset(true)
            .private_member_prefix("m_")
            .collection(CollectionKind::Array);

        assert!(config.generate_nullables);
        assert!(config.use_should_serialize);
        assert!(config.resolver.date_time_offset);
        assert_eq!(config.private_member_prefix, "m_");
        assert!(config.collection.is_array());
        assert_eq!(config.collection.type_name(true), None);
    }

    #[test]
    fn test_collection_implementation_name() {
        let kind = CollectionKind::Generic {
            definition: "IList".to_string(),
            implementation: Some("List".to_string()),
        };
        assert_eq!(kind.type_name(false), Some("IList"));
        assert_eq!(kind.type_name(true), Some("List"));
    }

    #[test]
    fn test_deserialize_from_json() {
        let json = r#"{
            "generateNullables": true,
            "collectionSetters": "publicWithoutConstructorInitialization",
            "collection": { "kind": "generic", "definition": "IList", "implementation": "List" },
            "resolver": {
                "dateTimeOffset": true,
                "integerOverride": { "hostType": "i64", "fallbackOnly": true }
            },
            "textValuePropertyName": null
        }"#;

        let config: GeneratorConfig = serde_json::from_str(json).unwrap();
        assert!(config.generate_nullables);
        assert_eq!(
            config.collection_setters,
            CollectionSettersMode::PublicWithoutConstructorInitialization
        );
        assert_eq!(config.collection.type_name(true), Some("List"));
        assert!(config.resolver.date_time_offset);
        assert_eq!(
            config.resolver.integer_override,
            Some(IntegerOverride {
                host_type: HostType::I64,
                fallback_only: true
            })
        );
        assert_eq!(config.text_value_property_name, None);
        assert_eq!(config.private_member_prefix, "_");
    }
}
