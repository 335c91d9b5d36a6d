//! # xsdgen Schema
//!
//! Schema-derived type graph and type resolution for XSD code generation.
//!
//! This crate provides:
//! - XSD datatype descriptors and restriction facets
//! - Effective host type resolution with integer narrowing
//! - The type graph (namespaces, classes, interfaces, enums, value carriers)
//! - Name allocation for types, properties and backing fields
//! - Graph validation

pub mod datatype;
pub mod error;
pub mod model;
pub mod naming;
pub mod resolver;
pub mod restriction;
pub mod validation;

pub use datatype::{Datatype, HostType, TypeCode, Variety, XML_NAMESPACE, XSD_NAMESPACE};
pub use error::SchemaError;
pub use model::{
    ClassModel, Documentation, EnumModel, EnumValue, Form, InterfaceModel, NamespaceId,
    NamespaceModel, PropertyModel, QualifiedName, SimpleModel, Substitute, TypeGraph, TypeId,
    TypeKind, TypeModel,
};
pub use resolver::{IntegerOverride, ResolverOptions, TypeResolver, narrowest_for_range};
pub use restriction::{Restriction, RestrictionSet, parse_integer_bound};
pub use validation::validate_graph;
