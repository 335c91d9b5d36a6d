//! Schema-derived type graph.
//!
//! Types live in a single table owned by [`TypeGraph`]; namespaces map local
//! names to [`TypeId`]s and every cross-type relation (base class, derived
//! types, implemented interfaces, property types) is an id into that table.
//! Derived-type lists are back-references only and never keep a type alive.

use crate::datatype::{Datatype, HostType};
use crate::error::SchemaError;
use crate::naming;
use crate::restriction::RestrictionSet;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Index of a type in the graph's type table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(usize);

impl TypeId {
    /// Returns the raw table index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Index of a namespace in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NamespaceId(usize);

impl NamespaceId {
    /// Returns the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Qualified XML name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct QualifiedName {
    /// Local name.
    pub name: String,
    /// Namespace URI, empty for no namespace.
    pub namespace: String,
}

impl QualifiedName {
    /// Creates a qualified name.
    #[must_use]
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
        }
    }

    /// Returns true if the local name is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

/// Namespace qualification form of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Form {
    /// Not specified in the schema.
    #[default]
    None,
    /// Qualified.
    Qualified,
    /// Unqualified.
    Unqualified,
}

/// Documentation entry from `xs:annotation/xs:documentation`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Documentation {
    /// Language tag (`xml:lang`), if any.
    pub language: Option<String>,
    /// Text.
    pub text: String,
}

impl Documentation {
    /// Creates a documentation entry.
    #[must_use]
    pub fn new(language: Option<&str>, text: impl Into<String>) -> Self {
        Self {
            language: language.map(str::to_string),
            text: text.into(),
        }
    }
}

/// Schema namespace mapped to a host namespace.
#[derive(Debug, Clone)]
pub struct NamespaceModel {
    /// Host namespace name.
    pub name: String,
    /// XML namespace URI.
    pub xml_namespace: String,
    /// True when a type name here collides with one visible from an
    /// enclosing or sibling namespace.
    pub is_ambiguous: bool,
    types: IndexMap<String, TypeId>,
}

impl NamespaceModel {
    fn new(name: String, xml_namespace: String) -> Self {
        Self {
            name,
            xml_namespace,
            is_ambiguous: false,
            types: IndexMap::new(),
        }
    }

    /// Looks up a type by local name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<TypeId> {
        self.types.get(name).copied()
    }

    /// Returns true if a type with the given name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Returns the registered types in insertion order.
    pub fn types(&self) -> impl Iterator<Item = (&str, TypeId)> {
        self.types.iter().map(|(n, id)| (n.as_str(), *id))
    }

    /// Returns the number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if no type is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// A schema-derived type.
#[derive(Debug, Clone)]
pub struct TypeModel {
    /// Host type name, unique within the namespace.
    pub name: String,
    /// Owning namespace; `None` for detached built-in value carriers.
    pub namespace: Option<NamespaceId>,
    /// Qualified schema name.
    pub xml_name: Option<QualifiedName>,
    /// Root element this type is the type of, if any.
    pub root_element: Option<QualifiedName>,
    /// Anonymous type flag.
    pub is_anonymous: bool,
    /// Documentation entries.
    pub documentation: Vec<Documentation>,
    /// Variant data.
    pub kind: TypeKind,
}

impl TypeModel {
    /// Creates a type model.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            xml_name: None,
            root_element: None,
            is_anonymous: false,
            documentation: Vec::new(),
            kind,
        }
    }

    /// Sets the qualified schema name, builder style.
    #[must_use]
    pub fn with_xml_name(mut self, name: impl Into<String>, namespace: impl Into<String>) -> Self {
        self.xml_name = Some(QualifiedName::new(name, namespace));
        self
    }

    /// Returns true if the type derives from another class or simple type.
    #[must_use]
    pub fn is_subtype(&self) -> bool {
        matches!(&self.kind, TypeKind::Class(c) if c.base.is_some())
    }

    /// Returns the class data if this is a class.
    #[must_use]
    pub fn as_class(&self) -> Option<&ClassModel> {
        match &self.kind {
            TypeKind::Class(c) => Some(c),
            _ => None,
        }
    }

    /// Returns the interface data if this is an interface.
    #[must_use]
    pub fn as_interface(&self) -> Option<&InterfaceModel> {
        match &self.kind {
            TypeKind::Interface(i) => Some(i),
            _ => None,
        }
    }

    /// Returns the enum data if this is an enum.
    #[must_use]
    pub fn as_enum(&self) -> Option<&EnumModel> {
        match &self.kind {
            TypeKind::Enum(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the simple type data if this is a value carrier.
    #[must_use]
    pub fn as_simple(&self) -> Option<&SimpleModel> {
        match &self.kind {
            TypeKind::Simple(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true for value carriers.
    #[must_use]
    pub const fn is_simple(&self) -> bool {
        matches!(self.kind, TypeKind::Simple(_))
    }

    /// Declared properties of a class or interface.
    #[must_use]
    pub fn properties(&self) -> &[PropertyModel] {
        match &self.kind {
            TypeKind::Class(c) => &c.properties,
            TypeKind::Interface(i) => &i.properties,
            _ => &[],
        }
    }

    /// Implemented interfaces of a class or interface.
    #[must_use]
    pub fn interfaces(&self) -> &[TypeId] {
        match &self.kind {
            TypeKind::Class(c) => &c.interfaces,
            TypeKind::Interface(i) => &i.interfaces,
            _ => &[],
        }
    }

    /// Short kind name for diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self.kind {
            TypeKind::Class(_) => "class",
            TypeKind::Interface(_) => "interface",
            TypeKind::Enum(_) => "enum",
            TypeKind::Simple(_) => "simple type",
        }
    }
}

/// Type model variants.
#[derive(Debug, Clone)]
pub enum TypeKind {
    /// Complex type rendered as a class.
    Class(ClassModel),
    /// Substitution-group head rendered as an interface.
    Interface(InterfaceModel),
    /// Enumeration.
    Enum(EnumModel),
    /// Scalar value carrier with no declaration of its own.
    Simple(SimpleModel),
}

/// Class data.
#[derive(Debug, Clone, Default)]
pub struct ClassModel {
    /// Base class or simple-content base type.
    pub base: Option<TypeId>,
    /// Declared properties in schema order.
    pub properties: Vec<PropertyModel>,
    /// Directly derived classes (back-references).
    pub derived_types: Vec<TypeId>,
    /// Implemented interfaces.
    pub interfaces: Vec<TypeId>,
    /// Abstract flag.
    pub is_abstract: bool,
    /// Mixed content flag.
    pub is_mixed: bool,
    /// Substitution group member flag.
    pub is_substitution: bool,
}

/// Interface data for a substitution-group head.
#[derive(Debug, Clone, Default)]
pub struct InterfaceModel {
    /// Properties common to all group members.
    pub properties: Vec<PropertyModel>,
    /// Directly derived reference types (back-references).
    pub derived_types: Vec<TypeId>,
    /// Base interfaces.
    pub interfaces: Vec<TypeId>,
}

/// Enumeration data.
#[derive(Debug, Clone, Default)]
pub struct EnumModel {
    /// Members in declaration order.
    pub values: Vec<EnumValue>,
}

impl EnumModel {
    /// Looks up a member by its schema literal.
    #[must_use]
    pub fn value_for_literal(&self, literal: &str) -> Option<&EnumValue> {
        self.values.iter().find(|v| v.value == literal)
    }
}

/// Enumeration member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    /// Host member name.
    pub name: String,
    /// Schema literal.
    pub value: String,
    /// Deprecated flag.
    pub is_deprecated: bool,
    /// Documentation entries.
    pub documentation: Vec<Documentation>,
}

impl EnumValue {
    /// Creates an enum member.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            is_deprecated: false,
            documentation: Vec::new(),
        }
    }
}

/// Scalar value carrier.
#[derive(Debug, Clone)]
pub struct SimpleModel {
    /// Declared host type, used when no datatype descriptor is attached.
    pub value_type: HostType,
    /// Schema datatype, if the carrier was derived from one.
    pub datatype: Option<Datatype>,
    /// Facets.
    pub restrictions: RestrictionSet,
}

impl SimpleModel {
    /// Creates a carrier for a schema datatype.
    #[must_use]
    pub fn from_datatype(datatype: Datatype, restrictions: RestrictionSet) -> Self {
        Self {
            value_type: datatype.value_type.clone(),
            datatype: Some(datatype),
            restrictions,
        }
    }

    /// Creates a carrier for a plain host type.
    #[must_use]
    pub fn host(value_type: HostType) -> Self {
        Self {
            value_type,
            datatype: None,
            restrictions: RestrictionSet::new(),
        }
    }

    /// Returns true if the datatype is an `xs:list`.
    #[must_use]
    pub fn is_list(&self) -> bool {
        self.datatype.as_ref().is_some_and(Datatype::is_list)
    }
}

/// Substitution-group member folded into a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitute {
    /// Element name.
    pub element: QualifiedName,
    /// Concrete type.
    pub type_id: TypeId,
}

/// Schema-derived property of a class or interface.
#[derive(Debug, Clone)]
pub struct PropertyModel {
    /// Host property name.
    pub name: String,
    /// Name before any disambiguation.
    pub original_name: String,
    /// Declaring type; set when the property is added to the graph.
    pub owning_type: Option<TypeId>,
    /// Referenced type.
    pub type_id: TypeId,
    /// Attribute (as opposed to element).
    pub is_attribute: bool,
    /// Optional in the schema (`minOccurs=0`, optional attribute).
    pub is_nullable: bool,
    /// `nillable="true"`.
    pub is_nillable: bool,
    /// Repeating (`maxOccurs>1`).
    pub is_collection: bool,
    /// Wildcard (`xs:any`, `xs:anyAttribute`).
    pub is_any: bool,
    /// Entity key.
    pub is_key: bool,
    /// Deprecated.
    pub is_deprecated: bool,
    /// Default literal.
    pub default_value: Option<String>,
    /// Fixed literal.
    pub fixed_value: Option<String>,
    /// Qualification form.
    pub form: Form,
    /// Explicit namespace when it differs from the owner's.
    pub xml_namespace: Option<String>,
    /// Schema element or attribute name.
    pub xml_name: Option<QualifiedName>,
    /// Explicit sibling order.
    pub order: Option<u32>,
    /// Documentation entries.
    pub documentation: Vec<Documentation>,
    /// Folded substitution-group members.
    pub substitutes: Vec<Substitute>,
}

impl PropertyModel {
    /// Creates a property referencing the given type.
    #[must_use]
    pub fn new(name: impl Into<String>, type_id: TypeId) -> Self {
        let name = name.into();
        Self {
            original_name: name.clone(),
            name,
            owning_type: None,
            type_id,
            is_attribute: false,
            is_nullable: false,
            is_nillable: false,
            is_collection: false,
            is_any: false,
            is_key: false,
            is_deprecated: false,
            default_value: None,
            fixed_value: None,
            form: Form::None,
            xml_namespace: None,
            xml_name: None,
            order: None,
            documentation: Vec::new(),
            substitutes: Vec::new(),
        }
    }

    /// Sets the schema name, builder style.
    #[must_use]
    pub fn with_xml_name(mut self, name: impl Into<String>, namespace: impl Into<String>) -> Self {
        self.xml_name = Some(QualifiedName::new(name, namespace));
        self
    }
}

/// The schema-derived object model.
#[derive(Debug, Clone, Default)]
pub struct TypeGraph {
    namespaces: Vec<NamespaceModel>,
    types: Vec<TypeModel>,
}

impl TypeGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a namespace, returning the existing one for a repeated host name.
    pub fn add_namespace(
        &mut self,
        name: impl Into<String>,
        xml_namespace: impl Into<String>,
    ) -> NamespaceId {
        let name = name.into();
        if let Some(idx) = self.namespaces.iter().position(|n| n.name == name) {
            return NamespaceId(idx);
        }
        self.namespaces
            .push(NamespaceModel::new(name, xml_namespace.into()));
        NamespaceId(self.namespaces.len() - 1)
    }

    /// Returns a namespace.
    #[must_use]
    pub fn namespace(&self, id: NamespaceId) -> &NamespaceModel {
        &self.namespaces[id.0]
    }

    /// Returns a namespace mutably.
    pub fn namespace_mut(&mut self, id: NamespaceId) -> &mut NamespaceModel {
        &mut self.namespaces[id.0]
    }

    /// Iterates over all namespaces.
    pub fn namespaces(&self) -> impl Iterator<Item = (NamespaceId, &NamespaceModel)> {
        self.namespaces
            .iter()
            .enumerate()
            .map(|(i, n)| (NamespaceId(i), n))
    }

    /// Registers a type in a namespace.
    ///
    /// A type whose qualified schema name is already registered in the
    /// namespace yields the existing id unchanged. Otherwise the name is made
    /// unique within the namespace before insertion.
    pub fn add_type(&mut self, namespace: NamespaceId, mut model: TypeModel) -> TypeId {
        if let Some(xml_name) = &model.xml_name {
            let existing = self.namespaces[namespace.0].types.values().copied().find(|id| {
                let t = &self.types[id.0];
                t.xml_name.as_ref() == Some(xml_name) && t.kind_name() == model.kind_name()
            });
            if let Some(id) = existing {
                return id;
            }
        }

        let name = naming::unique_type_name(self, namespace, &model.name);
        if name != model.name {
            tracing::debug!(
                "Type name {} taken in {}, renamed to {}",
                model.name,
                self.namespaces[namespace.0].name,
                name
            );
        }
        model.name = name.clone();
        model.namespace = Some(namespace);

        let id = TypeId(self.types.len());
        self.types.push(model);
        self.namespaces[namespace.0].types.insert(name, id);
        id
    }

    /// Adds a value carrier that belongs to no namespace.
    pub fn add_detached(&mut self, model: TypeModel) -> TypeId {
        let id = TypeId(self.types.len());
        self.types.push(model);
        id
    }

    /// Returns the detached carrier for a host type, creating it on first use.
    pub fn builtin(&mut self, host: HostType) -> TypeId {
        let found = self.types.iter().position(|t| {
            t.namespace.is_none()
                && matches!(&t.kind, TypeKind::Simple(s) if s.datatype.is_none() && s.value_type == host)
        });
        match found {
            Some(idx) => TypeId(idx),
            None => {
                let name = format!("{host:?}");
                self.add_detached(TypeModel::new(name, TypeKind::Simple(SimpleModel::host(host))))
            }
        }
    }

    /// Returns a type.
    #[must_use]
    pub fn get(&self, id: TypeId) -> &TypeModel {
        &self.types[id.0]
    }

    /// Returns a type mutably.
    pub fn get_mut(&mut self, id: TypeId) -> &mut TypeModel {
        &mut self.types[id.0]
    }

    /// Returns the type if the id is in range.
    #[must_use]
    pub fn try_get(&self, id: TypeId) -> Option<&TypeModel> {
        self.types.get(id.0)
    }

    /// Iterates over the whole type table.
    pub fn types(&self) -> impl Iterator<Item = (TypeId, &TypeModel)> {
        self.types.iter().enumerate().map(|(i, t)| (TypeId(i), t))
    }

    /// Returns the number of types in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Sets the base type of a class and records the derived back-reference.
    ///
    /// # Errors
    /// Returns `SchemaError` if `derived` is not a class, `base` is neither a
    /// class nor a simple type, or the link would close a derivation cycle.
    pub fn set_base(&mut self, derived: TypeId, base: TypeId) -> Result<(), SchemaError> {
        self.check_id(derived)?;
        self.check_id(base)?;

        let derived_model = &self.types[derived.0];
        if derived_model.as_class().is_none() {
            return Err(SchemaError::invalid_base(
                &derived_model.name,
                &self.types[base.0].name,
            ));
        }
        let base_model = &self.types[base.0];
        if !matches!(base_model.kind, TypeKind::Class(_) | TypeKind::Simple(_)) {
            return Err(SchemaError::invalid_base(&derived_model.name, &base_model.name));
        }

        let mut path = vec![derived_model.name.clone()];
        let mut cursor = Some(base);
        while let Some(current) = cursor {
            path.push(self.types[current.0].name.clone());
            if current == derived {
                return Err(SchemaError::CircularReference {
                    path: path.join(" -> "),
                });
            }
            cursor = self.types[current.0].as_class().and_then(|c| c.base);
        }

        if let TypeKind::Class(c) = &mut self.types[derived.0].kind {
            c.base = Some(base);
        }
        if let TypeKind::Class(c) = &mut self.types[base.0].kind {
            if !c.derived_types.contains(&derived) {
                c.derived_types.push(derived);
            }
        }
        Ok(())
    }

    /// Adds implemented interfaces to a class or interface.
    ///
    /// Interfaces already present and self references are skipped; every new
    /// link records the back-reference on the interface.
    ///
    /// # Errors
    /// Returns `SchemaError` if the target is not a reference type or an id
    /// does not name an interface.
    pub fn add_interfaces(&mut self, target: TypeId, interfaces: &[TypeId]) -> Result<(), SchemaError> {
        self.check_id(target)?;
        for &iface in interfaces {
            self.check_id(iface)?;
            if self.types[iface.0].as_interface().is_none() {
                return Err(SchemaError::Validation {
                    message: format!("'{}' is not an interface", self.types[iface.0].name),
                });
            }
            if iface == target {
                continue;
            }
            let added = match &mut self.types[target.0].kind {
                TypeKind::Class(c) if !c.interfaces.contains(&iface) => {
                    c.interfaces.push(iface);
                    true
                }
                TypeKind::Interface(i) if !i.interfaces.contains(&iface) => {
                    i.interfaces.push(iface);
                    true
                }
                TypeKind::Class(_) | TypeKind::Interface(_) => false,
                _ => {
                    return Err(SchemaError::Validation {
                        message: format!(
                            "{} '{}' cannot implement interfaces",
                            self.types[target.0].kind_name(),
                            self.types[target.0].name
                        ),
                    });
                }
            };
            if added {
                if let TypeKind::Interface(i) = &mut self.types[iface.0].kind {
                    i.derived_types.push(target);
                }
            }
        }
        Ok(())
    }

    /// Appends a property to a class or interface as-is.
    ///
    /// # Errors
    /// Returns `SchemaError` if the owner is not a reference type or the
    /// property references an unknown type.
    pub fn add_property(
        &mut self,
        owner: TypeId,
        mut property: PropertyModel,
    ) -> Result<usize, SchemaError> {
        self.check_id(owner)?;
        self.check_id(property.type_id)?;
        property.owning_type = Some(owner);
        let owner_model = &mut self.types[owner.0];
        let properties = match &mut owner_model.kind {
            TypeKind::Class(c) => &mut c.properties,
            TypeKind::Interface(i) => &mut i.properties,
            _ => {
                return Err(SchemaError::Validation {
                    message: format!(
                        "{} '{}' cannot own properties",
                        owner_model.kind_name(),
                        owner_model.name
                    ),
                });
            }
        };
        properties.push(property);
        Ok(properties.len() - 1)
    }

    /// Appends a property after making its name unique among the owner's own
    /// and inherited properties.
    ///
    /// A property whose schema name and attribute flag match one already on
    /// the owner is not added again; the existing index is returned.
    ///
    /// # Errors
    /// Same as [`TypeGraph::add_property`].
    pub fn add_property_unique(
        &mut self,
        owner: TypeId,
        mut property: PropertyModel,
    ) -> Result<usize, SchemaError> {
        self.check_id(owner)?;
        if property.xml_name.is_some() {
            let existing = self.types[owner.0].properties().iter().position(|p| {
                p.xml_name == property.xml_name && p.is_attribute == property.is_attribute
            });
            if let Some(idx) = existing {
                return Ok(idx);
            }
        }
        property.name = naming::unique_property_name(self, owner, &property.name);
        self.add_property(owner, property)
    }

    /// Base classes of a class, nearest first. Simple bases are not included.
    #[must_use]
    pub fn all_base_classes(&self, id: TypeId) -> Vec<TypeId> {
        self.all_base_types(id)
            .into_iter()
            .filter(|b| self.types[b.0].as_class().is_some())
            .collect()
    }

    /// Base types of a class, nearest first, ending with a simple base if any.
    #[must_use]
    pub fn all_base_types(&self, id: TypeId) -> Vec<TypeId> {
        let mut result = Vec::new();
        let mut cursor = self.types[id.0].as_class().and_then(|c| c.base);
        while let Some(base) = cursor {
            if result.contains(&base) {
                break;
            }
            result.push(base);
            cursor = self.types[base.0].as_class().and_then(|c| c.base);
        }
        result
    }

    /// Transitively derived classes: direct ones first, then their descendants.
    #[must_use]
    pub fn all_derived_types(&self, id: TypeId) -> Vec<TypeId> {
        let mut result: Vec<TypeId> = Vec::new();
        let mut seen = HashSet::new();
        let mut next = 0;
        if let Some(c) = self.types[id.0].as_class() {
            for &d in &c.derived_types {
                if seen.insert(d) {
                    result.push(d);
                }
            }
        }
        while next < result.len() {
            let current = result[next];
            next += 1;
            if let Some(c) = self.types[current.0].as_class() {
                for &d in &c.derived_types {
                    if seen.insert(d) {
                        result.push(d);
                    }
                }
            }
        }
        result
    }

    /// All reference types reachable through an interface's derived links,
    /// including classes derived from implementing classes.
    #[must_use]
    pub fn all_derived_reference_types(&self, id: TypeId) -> Vec<TypeId> {
        let mut result = Vec::new();
        let mut seen = HashSet::new();
        let mut stack: Vec<TypeId> = match self.types[id.0].as_interface() {
            Some(i) => i.derived_types.iter().rev().copied().collect(),
            None => return result,
        };

        while let Some(current) = stack.pop() {
            if !seen.insert(current) {
                continue;
            }
            result.push(current);
            match &self.types[current.0].kind {
                TypeKind::Interface(i) => {
                    stack.extend(i.derived_types.iter().rev().copied());
                }
                TypeKind::Class(_) => {
                    for d in self.all_derived_types(current) {
                        if seen.insert(d) {
                            result.push(d);
                        }
                    }
                }
                _ => {}
            }
        }
        result
    }

    /// Names of all properties visible on a class: own, inherited from base
    /// classes and declared by implemented interfaces.
    #[must_use]
    pub fn visible_property_names(&self, id: TypeId) -> Vec<&str> {
        let mut owners = vec![id];
        owners.extend(self.all_base_classes(id));

        let mut interfaces: Vec<TypeId> = Vec::new();
        let mut stack: Vec<TypeId> = owners
            .iter()
            .flat_map(|o| self.types[o.0].interfaces().iter().copied())
            .collect();
        while let Some(iface) = stack.pop() {
            if interfaces.contains(&iface) {
                continue;
            }
            interfaces.push(iface);
            stack.extend(self.types[iface.0].interfaces().iter().copied());
        }
        owners.extend(interfaces);

        owners
            .iter()
            .flat_map(|o| self.types[o.0].properties().iter().map(|p| p.name.as_str()))
            .collect()
    }

    fn check_id(&self, id: TypeId) -> Result<(), SchemaError> {
        if id.0 < self.types.len() {
            Ok(())
        } else {
            Err(SchemaError::UnknownType { index: id.0 })
        }
    }
}
