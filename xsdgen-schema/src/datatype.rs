//! Schema datatype descriptors.
//!
//! This module contains the read-only view of an XSD datatype that the schema
//! walker hands over: the built-in type code, the value variety and the host
//! value type the datatype declares before any narrowing is applied.

use serde::{Deserialize, Serialize};

/// XML Schema namespace URI.
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

/// XML namespace URI (`xml:lang`, `xml:space`).
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Built-in XSD type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCode {
    /// `xs:anyAtomicType`, also reported for unions.
    AnyAtomicType,
    /// `xs:anySimpleType`.
    AnySimpleType,
    /// `xs:string`.
    String,
    /// `xs:normalizedString`.
    NormalizedString,
    /// `xs:token`.
    Token,
    /// `xs:language`.
    Language,
    /// `xs:Name`.
    Name,
    /// `xs:NCName`.
    NcName,
    /// `xs:ID`.
    Id,
    /// `xs:IDREF`.
    Idref,
    /// `xs:ENTITY`.
    Entity,
    /// `xs:NMTOKEN`.
    NmToken,
    /// `xs:boolean`.
    Boolean,
    /// `xs:decimal`.
    Decimal,
    /// `xs:float`.
    Float,
    /// `xs:double`.
    Double,
    /// `xs:duration`.
    Duration,
    /// `xs:dateTime`.
    DateTime,
    /// `xs:time`.
    Time,
    /// `xs:date`.
    Date,
    /// `xs:gYearMonth`.
    GYearMonth,
    /// `xs:gYear`.
    GYear,
    /// `xs:gMonthDay`.
    GMonthDay,
    /// `xs:gDay`.
    GDay,
    /// `xs:gMonth`.
    GMonth,
    /// `xs:hexBinary`.
    HexBinary,
    /// `xs:base64Binary`.
    Base64Binary,
    /// `xs:anyURI`.
    AnyUri,
    /// `xs:QName`.
    QName,
    /// `xs:NOTATION`.
    Notation,
    /// `xs:integer`.
    Integer,
    /// `xs:nonPositiveInteger`.
    NonPositiveInteger,
    /// `xs:negativeInteger`.
    NegativeInteger,
    /// `xs:long`.
    Long,
    /// `xs:int`.
    Int,
    /// `xs:short`.
    Short,
    /// `xs:byte`.
    Byte,
    /// `xs:nonNegativeInteger`.
    NonNegativeInteger,
    /// `xs:unsignedLong`.
    UnsignedLong,
    /// `xs:unsignedInt`.
    UnsignedInt,
    /// `xs:unsignedShort`.
    UnsignedShort,
    /// `xs:unsignedByte`.
    UnsignedByte,
    /// `xs:positiveInteger`.
    PositiveInteger,
}

impl TypeCode {
    /// Returns the local name of the built-in type in the XSD namespace.
    #[must_use]
    pub const fn xsd_name(&self) -> &'static str {
        match self {
            Self::AnyAtomicType => "anyAtomicType",
            Self::AnySimpleType => "anySimpleType",
            Self::String => "string",
            Self::NormalizedString => "normalizedString",
            Self::Token => "token",
            Self::Language => "language",
            Self::Name => "Name",
            Self::NcName => "NCName",
            Self::Id => "ID",
            Self::Idref => "IDREF",
            Self::Entity => "ENTITY",
            Self::NmToken => "NMTOKEN",
            Self::Boolean => "boolean",
            Self::Decimal => "decimal",
            Self::Float => "float",
            Self::Double => "double",
            Self::Duration => "duration",
            Self::DateTime => "dateTime",
            Self::Time => "time",
            Self::Date => "date",
            Self::GYearMonth => "gYearMonth",
            Self::GYear => "gYear",
            Self::GMonthDay => "gMonthDay",
            Self::GDay => "gDay",
            Self::GMonth => "gMonth",
            Self::HexBinary => "hexBinary",
            Self::Base64Binary => "base64Binary",
            Self::AnyUri => "anyURI",
            Self::QName => "QName",
            Self::Notation => "NOTATION",
            Self::Integer => "integer",
            Self::NonPositiveInteger => "nonPositiveInteger",
            Self::NegativeInteger => "negativeInteger",
            Self::Long => "long",
            Self::Int => "int",
            Self::Short => "short",
            Self::Byte => "byte",
            Self::NonNegativeInteger => "nonNegativeInteger",
            Self::UnsignedLong => "unsignedLong",
            Self::UnsignedInt => "unsignedInt",
            Self::UnsignedShort => "unsignedShort",
            Self::UnsignedByte => "unsignedByte",
            Self::PositiveInteger => "positiveInteger",
        }
    }

    /// Parses a type code from its XSD local name.
    ///
    /// An optional `xs:` / `xsd:` prefix is accepted.
    #[must_use]
    pub fn from_xsd_name(name: &str) -> Option<Self> {
        let local = name.rsplit(':').next().unwrap_or(name);
        let code = match local {
            "anyAtomicType" => Self::AnyAtomicType,
            "anySimpleType" => Self::AnySimpleType,
            "string" => Self::String,
            "normalizedString" => Self::NormalizedString,
            "token" => Self::Token,
            "language" => Self::Language,
            "Name" => Self::Name,
            "NCName" => Self::NcName,
            "ID" => Self::Id,
            "IDREF" => Self::Idref,
            "ENTITY" => Self::Entity,
            "NMTOKEN" => Self::NmToken,
            "boolean" => Self::Boolean,
            "decimal" => Self::Decimal,
            "float" => Self::Float,
            "double" => Self::Double,
            "duration" => Self::Duration,
            "dateTime" => Self::DateTime,
            "time" => Self::Time,
            "date" => Self::Date,
            "gYearMonth" => Self::GYearMonth,
            "gYear" => Self::GYear,
            "gMonthDay" => Self::GMonthDay,
            "gDay" => Self::GDay,
            "gMonth" => Self::GMonth,
            "hexBinary" => Self::HexBinary,
            "base64Binary" => Self::Base64Binary,
            "anyURI" => Self::AnyUri,
            "QName" => Self::QName,
            "NOTATION" => Self::Notation,
            "integer" => Self::Integer,
            "nonPositiveInteger" => Self::NonPositiveInteger,
            "negativeInteger" => Self::NegativeInteger,
            "long" => Self::Long,
            "int" => Self::Int,
            "short" => Self::Short,
            "byte" => Self::Byte,
            "nonNegativeInteger" => Self::NonNegativeInteger,
            "unsignedLong" => Self::UnsignedLong,
            "unsignedInt" => Self::UnsignedInt,
            "unsignedShort" => Self::UnsignedShort,
            "unsignedByte" => Self::UnsignedByte,
            "positiveInteger" => Self::PositiveInteger,
            _ => return None,
        };
        Some(code)
    }

    /// Returns the host type the datatype declares for a single value.
    #[must_use]
    pub fn declared_host_type(&self) -> HostType {
        match self {
            Self::AnyAtomicType | Self::AnySimpleType => HostType::Object,
            Self::String
            | Self::NormalizedString
            | Self::Token
            | Self::Language
            | Self::Name
            | Self::NcName
            | Self::Id
            | Self::Idref
            | Self::Entity
            | Self::NmToken => HostType::String,
            Self::Boolean => HostType::Bool,
            Self::Decimal
            | Self::Integer
            | Self::NonPositiveInteger
            | Self::NegativeInteger
            | Self::NonNegativeInteger
            | Self::PositiveInteger => HostType::Decimal,
            Self::Float => HostType::F32,
            Self::Double => HostType::F64,
            Self::Duration => HostType::Duration,
            Self::DateTime
            | Self::Date
            | Self::GYearMonth
            | Self::GYear
            | Self::GMonthDay
            | Self::GDay
            | Self::GMonth => HostType::DateTime,
            Self::Time => HostType::Time,
            Self::HexBinary | Self::Base64Binary => HostType::Bytes,
            Self::AnyUri => HostType::Uri,
            Self::QName | Self::Notation => HostType::QualifiedName,
            Self::Long => HostType::I64,
            Self::Int => HostType::I32,
            Self::Short => HostType::I16,
            Self::Byte => HostType::I8,
            Self::UnsignedLong => HostType::U64,
            Self::UnsignedInt => HostType::U32,
            Self::UnsignedShort => HostType::U16,
            Self::UnsignedByte => HostType::U8,
        }
    }

    /// Returns true for the unbounded integer family that goes through narrowing.
    #[must_use]
    pub const fn is_integer_family(&self) -> bool {
        matches!(
            self,
            Self::Integer
                | Self::NegativeInteger
                | Self::NonNegativeInteger
                | Self::NonPositiveInteger
                | Self::PositiveInteger
        )
    }

    /// Returns true for integer codes whose value space is non-negative.
    #[must_use]
    pub const fn is_non_negative_family(&self) -> bool {
        matches!(self, Self::NonNegativeInteger | Self::PositiveInteger)
    }
}

/// Datatype variety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variety {
    /// Single atomic value.
    #[default]
    Atomic,
    /// Whitespace-separated list of atomic values (`xs:list`).
    List,
    /// Union of member types.
    Union,
}

/// Host value types a schema datatype can map to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HostType {
    /// Text.
    String,
    /// Boolean.
    Bool,
    /// Unsigned 8-bit integer.
    U8,
    /// Signed 8-bit integer.
    I8,
    /// Unsigned 16-bit integer.
    U16,
    /// Signed 16-bit integer.
    I16,
    /// Unsigned 32-bit integer.
    U32,
    /// Signed 32-bit integer.
    I32,
    /// Unsigned 64-bit integer.
    U64,
    /// Signed 64-bit integer.
    I64,
    /// Arbitrary-precision decimal.
    Decimal,
    /// 32-bit floating point.
    F32,
    /// 64-bit floating point.
    F64,
    /// Offset-naive date and time.
    DateTime,
    /// Offset-aware date and time.
    DateTimeOffset,
    /// Time of day.
    Time,
    /// Duration.
    Duration,
    /// Raw byte sequence.
    Bytes,
    /// Qualified XML name.
    QualifiedName,
    /// URI.
    Uri,
    /// Untyped value.
    Object,
    /// Array of the inner type.
    Array(Box<HostType>),
}

impl HostType {
    /// Returns true if values of this type are copied by value in the host.
    ///
    /// Only value types can be wrapped in a nullable wrapper.
    #[must_use]
    pub const fn is_value_type(&self) -> bool {
        matches!(
            self,
            Self::Bool
                | Self::U8
                | Self::I8
                | Self::U16
                | Self::I16
                | Self::U32
                | Self::I32
                | Self::U64
                | Self::I64
                | Self::Decimal
                | Self::F32
                | Self::F64
                | Self::DateTime
                | Self::DateTimeOffset
                | Self::Time
                | Self::Duration
        )
    }

    /// Returns true for array-shaped types, including byte sequences.
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(_) | Self::Bytes)
    }

    /// Returns the element type of an array-shaped type.
    #[must_use]
    pub fn element_type(&self) -> Option<HostType> {
        match self {
            Self::Array(inner) => Some((**inner).clone()),
            Self::Bytes => Some(Self::U8),
            _ => None,
        }
    }

    /// Returns true for the integer widths.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::U8
                | Self::I8
                | Self::U16
                | Self::I16
                | Self::U32
                | Self::I32
                | Self::U64
                | Self::I64
        )
    }

    /// Returns the inclusive range covered by an integer width.
    #[must_use]
    pub const fn integer_range(&self) -> Option<(i128, i128)> {
        match self {
            Self::U8 => Some((0, u8::MAX as i128)),
            Self::I8 => Some((i8::MIN as i128, i8::MAX as i128)),
            Self::U16 => Some((0, u16::MAX as i128)),
            Self::I16 => Some((i16::MIN as i128, i16::MAX as i128)),
            Self::U32 => Some((0, u32::MAX as i128)),
            Self::I32 => Some((i32::MIN as i128, i32::MAX as i128)),
            Self::U64 => Some((0, u64::MAX as i128)),
            Self::I64 => Some((i64::MIN as i128, i64::MAX as i128)),
            _ => None,
        }
    }
}

/// Read-only descriptor of a schema datatype.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Datatype {
    /// Built-in type code (the item type code for lists).
    pub type_code: TypeCode,
    /// Value variety.
    pub variety: Variety,
    /// Declared host type before narrowing; array-shaped for lists.
    pub value_type: HostType,
}

impl Datatype {
    /// Creates an atomic datatype for a built-in type code.
    #[must_use]
    pub fn atomic(type_code: TypeCode) -> Self {
        Self {
            type_code,
            variety: Variety::Atomic,
            value_type: type_code.declared_host_type(),
        }
    }

    /// Creates a list datatype whose items have the given type code.
    #[must_use]
    pub fn list(item: TypeCode) -> Self {
        Self {
            type_code: item,
            variety: Variety::List,
            value_type: HostType::Array(Box::new(item.declared_host_type())),
        }
    }

    /// Creates a union datatype.
    #[must_use]
    pub fn union() -> Self {
        Self {
            type_code: TypeCode::AnyAtomicType,
            variety: Variety::Union,
            value_type: HostType::Object,
        }
    }

    /// Returns true for list datatypes.
    #[must_use]
    pub fn is_list(&self) -> bool {
        self.variety == Variety::List
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_code_round_trip_names() {
        assert_eq!(TypeCode::from_xsd_name("xs:int"), Some(TypeCode::Int));
        assert_eq!(TypeCode::from_xsd_name("dateTime"), Some(TypeCode::DateTime));
        assert_eq!(TypeCode::from_xsd_name("xsd:anyURI"), Some(TypeCode::AnyUri));
        assert_eq!(TypeCode::from_xsd_name("unknown"), None);
        assert_eq!(TypeCode::GMonthDay.xsd_name(), "gMonthDay");
    }

    #[test]
    fn test_declared_host_types() {
        assert_eq!(TypeCode::Integer.declared_host_type(), HostType::Decimal);
        assert_eq!(TypeCode::UnsignedByte.declared_host_type(), HostType::U8);
        assert_eq!(TypeCode::HexBinary.declared_host_type(), HostType::Bytes);
        assert_eq!(TypeCode::Date.declared_host_type(), HostType::DateTime);
    }

    #[test]
    fn test_value_type_predicate() {
        assert!(HostType::I32.is_value_type());
        assert!(HostType::Decimal.is_value_type());
        assert!(!HostType::String.is_value_type());
        assert!(!HostType::Bytes.is_value_type());
        assert!(!HostType::Array(Box::new(HostType::I32)).is_value_type());
    }

    #[test]
    fn test_list_datatype_is_array_shaped() {
        let dt = Datatype::list(TypeCode::Int);
        assert!(dt.is_list());
        assert_eq!(dt.value_type, HostType::Array(Box::new(HostType::I32)));
        assert_eq!(dt.value_type.element_type(), Some(HostType::I32));
    }

    #[test]
    fn test_integer_ranges() {
        assert_eq!(HostType::U8.integer_range(), Some((0, 255)));
        assert_eq!(HostType::I16.integer_range(), Some((-32768, 32767)));
        assert_eq!(HostType::Decimal.integer_range(), None);
    }
}
