//! Enum declaration building.

use crate::context::GenerationContext;
use crate::decl::{Annotation, AnnotationKind, AnnotationValue, DeclKind, Member, TypeDeclaration};
use crate::error::CodegenError;
use crate::visitor::MemberContext;
use xsdgen_schema::{Documentation, TypeId};

/// Generator for enum declarations.
pub struct EnumGenerator<'c, 'a> {
    ctx: &'c GenerationContext<'a>,
}

impl<'c, 'a> EnumGenerator<'c, 'a> {
    /// Creates a new enum generator.
    #[must_use]
    pub fn new(ctx: &'c GenerationContext<'a>) -> Self {
        Self { ctx }
    }

    /// Builds the declaration of an enum.
    ///
    /// # Errors
    /// Returns `CodegenError` if `id` is not an enum.
    pub fn generate(&self, id: TypeId) -> Result<TypeDeclaration, CodegenError> {
        let ctx = self.ctx;
        let model = ctx.graph.get(id);
        let values = model
            .as_enum()
            .ok_or_else(|| CodegenError::generation(format!("'{}' is not an enum", model.name)))?;

        let mut decl = TypeDeclaration::new(model.name.clone(), DeclKind::Enum, id);
        decl.documentation = model.documentation.clone();
        super::add_type_annotations(ctx, &mut decl, model);

        let context = MemberContext {
            owner: id,
            owner_model: model,
            property: None,
        };
        for value in &values.values {
            let mut member = Member::enum_value(value.name.clone());
            member.documentation = value.documentation.clone();

            // Literals that are not valid identifiers keep their schema spelling.
            if value.name != value.value {
                member.annotations.push(
                    Annotation::new(AnnotationKind::XmlEnum)
                        .arg(AnnotationValue::Str(value.value.clone())),
                );
            }
            if value.is_deprecated {
                member
                    .documentation
                    .push(Documentation::new(Some("en"), "[Obsolete]"));
            }

            ctx.visit_member(&mut member, &context);
            decl.members.push(member);
        }

        super::add_root_annotation(&mut decl, model);
        ctx.visit_type(&mut decl, model);
        Ok(decl)
    }
}
