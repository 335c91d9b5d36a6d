//! Interface declaration building.

use super::members::MemberSynthesizer;
use crate::context::GenerationContext;
use crate::decl::{DeclKind, TypeDeclaration};
use crate::error::CodegenError;
use xsdgen_schema::TypeId;

/// Generator for interface declarations.
pub struct InterfaceGenerator<'c, 'a> {
    ctx: &'c GenerationContext<'a>,
}

impl<'c, 'a> InterfaceGenerator<'c, 'a> {
    /// Creates a new interface generator.
    #[must_use]
    pub fn new(ctx: &'c GenerationContext<'a>) -> Self {
        Self { ctx }
    }

    /// Builds the declaration of an interface.
    ///
    /// # Errors
    /// Returns `CodegenError` if `id` is not an interface or a default value
    /// cannot be converted.
    pub fn generate(&self, id: TypeId) -> Result<TypeDeclaration, CodegenError> {
        let ctx = self.ctx;
        let model = ctx.graph.get(id);
        let interface = model.as_interface().ok_or_else(|| {
            CodegenError::generation(format!("'{}' is not an interface", model.name))
        })?;

        let mut decl = TypeDeclaration::new(model.name.clone(), DeclKind::Interface, id);
        decl.documentation = model.documentation.clone();

        let synthesizer = MemberSynthesizer::new(ctx);
        for property in &interface.properties {
            synthesizer.add_interface_member(&mut decl, id, property)?;
        }

        decl.base_types.extend(
            interface
                .interfaces
                .iter()
                .map(|&i| ctx.type_ref(i, model.namespace, false, false, false)),
        );

        ctx.visit_type(&mut decl, model);
        Ok(decl)
    }
}
