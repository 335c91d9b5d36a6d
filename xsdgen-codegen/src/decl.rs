//! Declaration requests handed to a rendering backend.
//!
//! Every value here is fully decided: a backend renders it without making
//! further choices about nullability, naming or annotation shape.

use xsdgen_schema::{Documentation, Form, HostType, TypeId};

/// How a reference to a schema-derived type is qualified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Qualification {
    /// Referenced from its own namespace.
    Local,
    /// Qualified with the namespace name.
    Namespace,
    /// Qualified from the global root because the namespace is ambiguous.
    Global,
}

/// Framework types referenced by generated members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WellKnownType {
    /// Property change event handler.
    PropertyChangedEventHandler,
    /// Change notification interface.
    NotifyPropertyChanged,
}

/// Reference to a type in a member or annotation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// Host value type.
    Host(HostType),
    /// Schema-derived type.
    Named {
        /// Namespace name.
        namespace: String,
        /// Type name.
        name: String,
        /// Qualification.
        qualification: Qualification,
    },
    /// Nullable wrapper around a value type.
    Nullable(Box<TypeRef>),
    /// Generic collection.
    Collection {
        /// Collection type name.
        collection: String,
        /// Element type.
        element: Box<TypeRef>,
    },
    /// Raw array.
    Array(Box<TypeRef>),
    /// Framework type.
    WellKnown(WellKnownType),
}

impl TypeRef {
    /// Wraps the reference in a nullable wrapper.
    #[must_use]
    pub fn nullable(self) -> Self {
        Self::Nullable(Box::new(self))
    }

    /// Returns true for a nullable wrapper.
    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable(_))
    }

    /// Returns true for collections and arrays.
    #[must_use]
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::Collection { .. } | Self::Array(_))
    }

    /// Returns the named type's name, looking through wrappers.
    #[must_use]
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Self::Named { name, .. } => Some(name),
            Self::Nullable(inner) | Self::Array(inner) => inner.type_name(),
            Self::Collection { element, .. } => element.type_name(),
            _ => None,
        }
    }
}

/// Member visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    /// Public.
    #[default]
    Public,
    /// Visible to derived types.
    Protected,
    /// Private.
    Private,
}

/// Primitive literal value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    /// Boolean.
    Bool(bool),
    /// Integer.
    Int(i128),
    /// Decimal in canonical lexical form.
    Decimal(String),
    /// Floating point in lexical form.
    Float(String),
    /// Text.
    Text(String),
}

/// Initializer or annotation argument expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// Primitive literal.
    Literal(Literal),
    /// Enum member reference.
    EnumMember {
        /// Enum type.
        enum_type: TypeRef,
        /// Member name.
        member: String,
    },
    /// Runtime parse of a lexical value into a host type.
    Parse {
        /// Target type.
        target: HostType,
        /// Lexical value.
        text: String,
    },
    /// Byte sequence.
    Bytes(Vec<u8>),
    /// Qualified name construction.
    QualifiedName {
        /// Local name.
        name: String,
        /// Namespace URI.
        namespace: String,
    },
    /// Instance creation with one property set.
    ObjectInit {
        /// Created type.
        type_ref: TypeRef,
        /// Property assigned.
        property: String,
        /// Assigned value.
        value: Box<Expr>,
    },
    /// New empty collection instance.
    NewCollection(TypeRef),
    /// Empty array sentinel of the given element type.
    EmptyArray(TypeRef),
    /// Type reference used as a value.
    TypeOf(TypeRef),
}

impl Expr {
    /// Returns true for values usable as a default-value annotation argument.
    #[must_use]
    pub const fn is_constant(&self) -> bool {
        matches!(self, Self::Literal(_) | Self::EnumMember { .. })
    }
}

/// Annotation kinds attached to types and members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnotationKind {
    /// Excluded from serialization.
    XmlIgnore,
    /// Serialized as an attribute.
    XmlAttribute,
    /// Wildcard attributes.
    XmlAnyAttribute,
    /// Serialized as an element.
    XmlElement,
    /// Wildcard elements.
    XmlAnyElement,
    /// Array wrapper element.
    XmlArray,
    /// Array item element.
    XmlArrayItem,
    /// Serialized as element text.
    XmlText,
    /// Schema type name.
    XmlType,
    /// Root element name.
    XmlRoot,
    /// Known derived type.
    XmlInclude,
    /// Enum member literal.
    XmlEnum,
    /// Default value.
    DefaultValue,
    /// Required member.
    Required,
    /// Minimum length.
    MinLength,
    /// Maximum length.
    MaxLength,
    /// Pattern.
    RegularExpression,
    /// Inclusive range.
    Range,
    /// Entity key.
    Key,
    /// Not mapped to storage.
    NotMapped,
    /// Hidden from editors.
    EditorBrowsableNever,
    /// Accepts null on input.
    AllowNull,
    /// May return null.
    MaybeNull,
    /// Serializable type.
    Serializable,
}

/// Annotation argument value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnnotationValue {
    /// String.
    Str(String),
    /// Integer.
    Int(i64),
    /// Boolean.
    Bool(bool),
    /// Qualification form.
    Form(Form),
    /// Expression.
    Expr(Expr),
}

/// Annotation argument, positional or named.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnnotationArg {
    /// Argument name, `None` for positional arguments.
    pub name: Option<&'static str>,
    /// Value.
    pub value: AnnotationValue,
}

/// Annotation with ordered arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Annotation {
    /// Kind.
    pub kind: AnnotationKind,
    /// Arguments in emission order.
    pub args: Vec<AnnotationArg>,
}

impl Annotation {
    /// Creates an annotation without arguments.
    #[must_use]
    pub const fn new(kind: AnnotationKind) -> Self {
        Self {
            kind,
            args: Vec::new(),
        }
    }

    /// Appends a positional argument.
    #[must_use]
    pub fn arg(mut self, value: AnnotationValue) -> Self {
        self.args.push(AnnotationArg { name: None, value });
        self
    }

    /// Appends a named argument.
    #[must_use]
    pub fn named(mut self, name: &'static str, value: AnnotationValue) -> Self {
        self.push_named(name, value);
        self
    }

    /// Appends a named argument in place.
    pub fn push_named(&mut self, name: &'static str, value: AnnotationValue) {
        self.args.push(AnnotationArg {
            name: Some(name),
            value,
        });
    }

    /// Looks up a named argument.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AnnotationValue> {
        self.args
            .iter()
            .find(|a| a.name == Some(name))
            .map(|a| &a.value)
    }

    /// Returns the positional argument at the given index.
    #[must_use]
    pub fn positional(&self, index: usize) -> Option<&AnnotationValue> {
        self.args
            .iter()
            .filter(|a| a.name.is_none())
            .nth(index)
            .map(|a| &a.value)
    }
}

/// Equality test guarding a change-notifying setter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EqualityKind {
    /// Direct value equality.
    Value,
    /// Null-aware reference equality.
    Reference,
    /// Element-wise sequence equality.
    Sequence,
}

/// Count member of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountMember {
    /// Generic collection count.
    Count,
    /// Array length.
    Length,
}

/// Boolean query over a sibling member.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Condition {
    /// Nullable member has a value.
    HasValue {
        /// Member name.
        member: String,
    },
    /// Nullable member equals a fixed value.
    EqualsFixed {
        /// Member name.
        member: String,
        /// Fixed value.
        value: Expr,
    },
    /// Text member is neither null nor empty.
    NotEmptyString {
        /// Member name.
        member: String,
    },
    /// Reference member is not null.
    NotNull {
        /// Member name.
        member: String,
    },
    /// Collection member has items.
    CountNonZero {
        /// Member name.
        member: String,
        /// Count member used.
        count: CountMember,
        /// Guard against a null collection first.
        null_guard: bool,
    },
}

/// Property accessor shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Accessors {
    /// Automatic property.
    Auto {
        /// Setter is private.
        private_setter: bool,
    },
    /// Get and set through a backing field.
    Backed {
        /// Backing field name.
        field: String,
        /// Setter is private.
        private_setter: bool,
        /// Setter raises a change notification guarded by this equality.
        notify: Option<EqualityKind>,
    },
    /// Nullable view over a value property and its specified flag.
    NullableProjection {
        /// Value property name.
        value_property: String,
        /// Specified flag property name.
        specified_property: String,
        /// Setter raises a change notification on actual change.
        notify: bool,
    },
    /// Read-only computed property.
    Computed(Condition),
    /// Interface property.
    Abstract {
        /// Declares a setter.
        has_set: bool,
    },
}

/// Target of a constructor assignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AssignTarget {
    /// Backing field.
    Field(String),
    /// Property.
    Property(String),
}

/// Assignment performed by a constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Assignment {
    /// Target.
    pub target: AssignTarget,
    /// Assigned value.
    pub value: Expr,
}

/// Method or constructor body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Body {
    /// Returns a condition.
    Return(Condition),
    /// Raises the property changed event for the parameter name.
    RaisePropertyChanged {
        /// Event member name.
        event: String,
    },
    /// Assignments in order.
    Initialize(Vec<Assignment>),
}

/// Member kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    /// Field.
    Field,
    /// Property.
    Property,
    /// Method.
    Method,
    /// Event.
    Event,
    /// Constructor.
    Constructor,
    /// Enum member.
    EnumValue,
}

/// A fully decided type member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Kind.
    pub kind: MemberKind,
    /// Name.
    pub name: String,
    /// Declared or return type.
    pub type_ref: Option<TypeRef>,
    /// Visibility.
    pub visibility: Visibility,
    /// Annotations in emission order.
    pub annotations: Vec<Annotation>,
    /// Field initializer.
    pub initializer: Option<Expr>,
    /// Property accessors.
    pub accessors: Option<Accessors>,
    /// Method or constructor body.
    pub body: Option<Body>,
    /// Documentation entries.
    pub documentation: Vec<Documentation>,
}

impl Member {
    fn new(kind: MemberKind, name: impl Into<String>, type_ref: Option<TypeRef>) -> Self {
        Self {
            kind,
            name: name.into(),
            type_ref,
            visibility: Visibility::Public,
            annotations: Vec::new(),
            initializer: None,
            accessors: None,
            body: None,
            documentation: Vec::new(),
        }
    }

    /// Creates a private field.
    #[must_use]
    pub fn field(name: impl Into<String>, type_ref: TypeRef) -> Self {
        let mut member = Self::new(MemberKind::Field, name, Some(type_ref));
        member.visibility = Visibility::Private;
        member
    }

    /// Creates a public property.
    #[must_use]
    pub fn property(name: impl Into<String>, type_ref: TypeRef, accessors: Accessors) -> Self {
        let mut member = Self::new(MemberKind::Property, name, Some(type_ref));
        member.accessors = Some(accessors);
        member
    }

    /// Creates a public method.
    #[must_use]
    pub fn method(name: impl Into<String>, return_type: Option<TypeRef>, body: Body) -> Self {
        let mut member = Self::new(MemberKind::Method, name, return_type);
        member.body = Some(body);
        member
    }

    /// Creates a public event.
    #[must_use]
    pub fn event(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self::new(MemberKind::Event, name, Some(type_ref))
    }

    /// Creates a public constructor with no assignments.
    #[must_use]
    pub fn constructor() -> Self {
        let mut member = Self::new(MemberKind::Constructor, "", None);
        member.body = Some(Body::Initialize(Vec::new()));
        member
    }

    /// Creates an enum member.
    #[must_use]
    pub fn enum_value(name: impl Into<String>) -> Self {
        Self::new(MemberKind::EnumValue, name, None)
    }

    /// Adds an annotation, builder style.
    #[must_use]
    pub fn annotated(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Returns the first annotation of a kind.
    #[must_use]
    pub fn annotation(&self, kind: AnnotationKind) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.kind == kind)
    }

    /// Returns true if an annotation of the kind is attached.
    #[must_use]
    pub fn has_annotation(&self, kind: AnnotationKind) -> bool {
        self.annotation(kind).is_some()
    }
}

/// Declaration kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclKind {
    /// Class.
    Class {
        /// Abstract class.
        is_abstract: bool,
    },
    /// Interface.
    Interface,
    /// Enum.
    Enum,
}

/// Declaration request for one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    /// Type name.
    pub name: String,
    /// Kind.
    pub kind: DeclKind,
    /// Graph type this declaration was built from.
    pub source: TypeId,
    /// Base class first, then implemented interfaces.
    pub base_types: Vec<TypeRef>,
    /// Annotations in emission order.
    pub annotations: Vec<Annotation>,
    /// Members in emission order.
    pub members: Vec<Member>,
    /// Documentation entries.
    pub documentation: Vec<Documentation>,
}

impl TypeDeclaration {
    /// Creates an empty declaration.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: DeclKind, source: TypeId) -> Self {
        Self {
            name: name.into(),
            kind,
            source,
            base_types: Vec::new(),
            annotations: Vec::new(),
            members: Vec::new(),
            documentation: Vec::new(),
        }
    }

    /// Looks up a member by name, ignoring constructors.
    #[must_use]
    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members
            .iter()
            .find(|m| m.kind != MemberKind::Constructor && m.name == name)
    }

    /// Returns the constructor, if any.
    #[must_use]
    pub fn constructor(&self) -> Option<&Member> {
        self.members
            .iter()
            .find(|m| m.kind == MemberKind::Constructor)
    }

    /// Returns the constructor, inserting an empty one at the end if absent.
    pub fn constructor_mut(&mut self) -> &mut Member {
        let index = match self
            .members
            .iter()
            .position(|m| m.kind == MemberKind::Constructor)
        {
            Some(index) => index,
            None => {
                let mut ctor = Member::constructor();
                ctor.documentation.push(Documentation::new(
                    Some("en"),
                    format!(
                        "Initializes a new instance of the <see cref=\"{}\" /> class.",
                        self.name
                    ),
                ));
                self.members.push(ctor);
                self.members.len() - 1
            }
        };
        &mut self.members[index]
    }

    /// Returns true if an annotation of the kind is attached to the type.
    #[must_use]
    pub fn has_annotation(&self, kind: AnnotationKind) -> bool {
        self.annotations.iter().any(|a| a.kind == kind)
    }
}

/// Declaration requests for one namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceDeclaration {
    /// Namespace name.
    pub name: String,
    /// Types in graph order.
    pub types: Vec<TypeDeclaration>,
}

impl NamespaceDeclaration {
    /// Looks up a type declaration by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TypeDeclaration> {
        self.types.iter().find(|t| t.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotation_arguments() {
        let annotation = Annotation::new(AnnotationKind::XmlElement)
            .arg(AnnotationValue::Str("item".to_string()))
            .named("Order", AnnotationValue::Int(3));

        assert_eq!(
            annotation.positional(0),
            Some(&AnnotationValue::Str("item".to_string()))
        );
        assert_eq!(annotation.get("Order"), Some(&AnnotationValue::Int(3)));
        assert_eq!(annotation.get("Namespace"), None);
        assert_eq!(annotation.positional(1), None);
    }

    #[test]
    fn test_constructor_is_created_once() {
        let source = xsdgen_schema::TypeGraph::new().builtin(HostType::String);
        let mut decl = TypeDeclaration::new("Order", DeclKind::Class { is_abstract: false }, source);
        decl.constructor_mut();
        decl.constructor_mut();
        assert_eq!(
            decl.members
                .iter()
                .filter(|m| m.kind == MemberKind::Constructor)
                .count(),
            1
        );
        assert!(decl.constructor().is_some());
        assert!(decl.member("").is_none());
    }

    #[test]
    fn test_type_name_looks_through_wrappers() {
        let named = TypeRef::Named {
            namespace: "Ns".to_string(),
            name: "Order".to_string(),
            qualification: Qualification::Local,
        };
        let wrapped = TypeRef::Collection {
            collection: "List".to_string(),
            element: Box::new(named),
        };
        assert_eq!(wrapped.type_name(), Some("Order"));
        assert!(wrapped.is_collection());
        assert_eq!(TypeRef::Host(HostType::I32).nullable().type_name(), None);
    }
}
