//! Declaration builders per type kind.

pub mod classes;
pub mod enums;
pub mod interfaces;
pub mod members;


pub use classes::{ClassGenerator, ClassLayout};
pub use enums::EnumGenerator;
pub use interfaces::InterfaceGenerator;
pub use members::{MemberSynthesizer, PropertyPlan};

use crate::context::GenerationContext;
use crate::decl::{Annotation, AnnotationKind, AnnotationValue, TypeDeclaration};
use xsdgen_schema::TypeModel;

/// Adds the serializable marker and the schema type annotation.
fn add_type_annotations(ctx: &GenerationContext<'_>, decl: &mut TypeDeclaration, model: &TypeModel) {
    if ctx.config.generate_serializable {
        decl.annotations
            .push(Annotation::new(AnnotationKind::Serializable));
    }

    if let Some(xml_name) = &model.xml_name {
        let mut annotation = Annotation::new(AnnotationKind::XmlType)
            .arg(AnnotationValue::Str(xml_name.name.clone()))
            .named("Namespace", AnnotationValue::Str(xml_name.namespace.clone()));
        // Derived anonymous types cannot be included by the serializer.
        if model.is_anonymous && !model.is_subtype() {
            annotation.push_named("AnonymousType", AnnotationValue::Bool(true));
        }
        decl.annotations.push(annotation);
    }
}

fn add_root_annotation(decl: &mut TypeDeclaration, model: &TypeModel) {
    if let Some(root) = &model.root_element {
        decl.annotations.push(
            Annotation::new(AnnotationKind::XmlRoot)
                .arg(AnnotationValue::Str(root.name.clone()))
                .named("Namespace", AnnotationValue::Str(root.namespace.clone())),
        );
    }
}
