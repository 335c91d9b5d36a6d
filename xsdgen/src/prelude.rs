//! Prelude module for convenient imports.
//!
//! ```
//! use xsdgen::prelude::*;
//! ```

// Schema types
pub use xsdgen_schema::{
    ClassModel, Datatype, EnumModel, EnumValue, HostType, InterfaceModel, PropertyModel,
    QualifiedName, Restriction, RestrictionSet, SimpleModel, TypeCode, TypeGraph, TypeId,
    TypeKind, TypeModel, TypeResolver,
};
pub use xsdgen_schema::SchemaError;

// Generation
pub use xsdgen_codegen::{
    CodegenError, CollectingSink, CollectionKind, CollectionSettersMode, DataAnnotationMode,
    DeclarationSink, DeclarationVisitor, Generator, GeneratorConfig, MemberContext,
    generate, generate_declarations,
};

// Declaration requests
pub use xsdgen_codegen::{
    Accessors, Annotation, AnnotationKind, Member, MemberKind, NamespaceDeclaration,
    TypeDeclaration, TypeRef,
};
