//! Customization callbacks applied to finished declarations.
//!
//! Visitors run in registration order. Type visitors see a declaration after
//! all of its members are in place; member visitors see each member right
//! before it is added to its declaration.

use crate::decl::{Member, TypeDeclaration};
use xsdgen_schema::{PropertyModel, TypeId, TypeModel};

/// What a member was synthesized from.
#[derive(Debug, Clone, Copy)]
pub struct MemberContext<'a> {
    /// Declaring type.
    pub owner: TypeId,
    /// Declaring type model.
    pub owner_model: &'a TypeModel,
    /// Schema property the member represents; `None` for synthesized
    /// members such as specified flags or text members.
    pub property: Option<&'a PropertyModel>,
}

/// Callback over finished declarations.
pub trait DeclarationVisitor {
    /// Called once per type declaration.
    fn visit_type(&self, _decl: &mut TypeDeclaration, _model: &TypeModel) {}

    /// Called once per member.
    fn visit_member(&self, _member: &mut Member, _context: &MemberContext<'_>) {}
}
