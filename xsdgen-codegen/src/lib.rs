//! # xsdgen Codegen
//!
//! Declaration requests from an XSD-derived type graph.
//!
//! This crate provides:
//! - Member synthesis for schema properties (nullable, nillable, collection,
//!   default-value and data-binding shapes)
//! - Class, interface and enum declaration building
//! - Serialization and validation annotations
//! - Default literal conversion
//! - Visitor hooks and declaration sinks

pub mod annotations;
pub mod config;
pub mod context;
pub mod decl;
pub mod defaults;
pub mod emit;
pub mod error;
pub mod generator;
pub mod sink;
pub mod visitor;

pub use config::{CollectionKind, CollectionSettersMode, DataAnnotationMode, GeneratorConfig};
pub use context::GenerationContext;
pub use decl::{
    Accessors, Annotation, AnnotationArg, AnnotationKind, AnnotationValue, AssignTarget,
    Assignment, Body, Condition, CountMember, DeclKind, EqualityKind, Expr, Literal, Member,
    MemberKind, NamespaceDeclaration, Qualification, TypeDeclaration, TypeRef, Visibility,
    WellKnownType,
};
pub use error::CodegenError;
pub use generator::Generator;
pub use sink::{CollectingSink, DeclarationSink};
pub use visitor::{DeclarationVisitor, MemberContext};

/// Generates declarations for a type graph into a sink.
///
/// # Arguments
/// * `graph` - Populated type graph; duplicate property names are settled in place
/// * `config` - Generator configuration
/// * `sink` - Receiver of one declaration request per namespace
///
/// # Errors
/// Returns `CodegenError` if validation or generation fails.
pub fn generate(
    graph: &mut xsdgen_schema::TypeGraph,
    config: GeneratorConfig,
    sink: &mut dyn DeclarationSink,
) -> Result<(), CodegenError> {
    Generator::new(config).generate(graph, sink)
}

/// Generates declarations for a type graph and returns them.
///
/// # Errors
/// Returns `CodegenError` if validation or generation fails.
pub fn generate_declarations(
    graph: &mut xsdgen_schema::TypeGraph,
    config: GeneratorConfig,
) -> Result<Vec<NamespaceDeclaration>, CodegenError> {
    let mut sink = CollectingSink::new();
    generate(graph, config, &mut sink)?;
    Ok(sink.into_namespaces())
}
