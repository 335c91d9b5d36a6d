//! # xsdgen
//!
//! Object model generation from XSD-derived type graphs.
//!
//! A front end (schema parser) populates a [`schema::TypeGraph`] with
//! namespaces, classes, interfaces, enums and value carriers. The generator
//! resolves every value carrier to a host type, narrows integer ranges,
//! settles property names and hands one fully decided declaration request
//! per namespace to a [`codegen::DeclarationSink`].
//!
//! ## Quick Start
//!
//! ```
//! use xsdgen::prelude::*;
//!
//! let mut graph = TypeGraph::new();
//! let ns = graph.add_namespace("Shop", "urn:shop");
//! let int = graph.add_type(
//!     ns,
//!     TypeModel::new(
//!         "int",
//!         TypeKind::Simple(SimpleModel::from_datatype(
//!             Datatype::atomic(TypeCode::Int),
//!             RestrictionSet::new(),
//!         )),
//!     ),
//! );
//! let order = graph.add_type(
//!     ns,
//!     TypeModel::new("Order", TypeKind::Class(ClassModel::default()))
//!         .with_xml_name("order", "urn:shop"),
//! );
//! let mut quantity = PropertyModel::new("Quantity", int).with_xml_name("quantity", "urn:shop");
//! quantity.is_nullable = true;
//! graph.add_property(order, quantity)?;
//!
//! let namespaces = generate_declarations(&mut graph, GeneratorConfig::default())?;
//! let order = namespaces[0].get("Order").expect("order declaration");
//! assert!(order.member("QuantitySpecified").is_some());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Datatypes, facets, type resolution, the type graph and naming
//! - [`codegen`] - Member synthesis, annotations and declaration requests

pub mod prelude;

/// Datatypes, facets, type resolution and the type graph.
pub mod schema {
    pub use xsdgen_schema::*;
}

/// Declaration requests built from a type graph.
pub mod codegen {
    pub use xsdgen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use xsdgen_codegen::{
    CodegenError, CollectingSink, DeclarationSink, DeclarationVisitor, Generator,
    GeneratorConfig, NamespaceDeclaration, TypeDeclaration, generate, generate_declarations,
};
pub use xsdgen_schema::{SchemaError, TypeGraph, TypeResolver};
