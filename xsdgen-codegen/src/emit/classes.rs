//! Class declaration building.

use super::members::{MemberSynthesizer, equality_for};
use crate::annotations::restriction_annotations;
use crate::context::GenerationContext;
use crate::decl::{
    Accessors, Annotation, AnnotationKind, AnnotationValue, Body, DeclKind, Expr, Member,
    TypeDeclaration, TypeRef, Visibility, WellKnownType,
};
use crate::error::CodegenError;
use crate::visitor::MemberContext;
use xsdgen_schema::naming::{field_name_among, to_backing_field};
use xsdgen_schema::{ClassModel, Documentation, HostType, TypeId, TypeKind};

/// Name of the change notification event on data-bound classes.
pub const PROPERTY_CHANGED_EVENT: &str = "PropertyChanged";

/// Member names of a class's properties once duplicates are settled.
///
/// Within a group of equal property names the n-th property (n > 1) is
/// named `<name>_<n>`. It is folded away when an earlier group member has
/// the same schema name. The class model itself is left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassLayout {
    /// Member name per property, in schema order.
    pub names: Vec<String>,
    /// Per-property flag; folded duplicates are `false`.
    pub emitted: Vec<bool>,
}

impl ClassLayout {
    /// Settles the property names of a class.
    #[must_use]
    pub fn new(class: &ClassModel) -> Self {
        let mut names: Vec<String> = class.properties.iter().map(|p| p.name.clone()).collect();
        let mut emitted = vec![true; names.len()];

        let mut groups: Vec<(&str, Vec<usize>)> = Vec::new();
        for (index, property) in class.properties.iter().enumerate() {
            match groups.iter_mut().find(|(name, _)| *name == property.name) {
                Some((_, members)) => members.push(index),
                None => groups.push((property.name.as_str(), vec![index])),
            }
        }

        for (name, members) in groups {
            for (position, &index) in members.iter().enumerate().skip(1) {
                let xml_name = &class.properties[index].xml_name;
                let folded = members[..position]
                    .iter()
                    .any(|&earlier| class.properties[earlier].xml_name == *xml_name);
                names[index] = format!("{name}_{}", position + 1);
                tracing::debug!("Duplicate property {} named {}", name, names[index]);
                if folded {
                    emitted[index] = false;
                }
            }
        }

        Self { names, emitted }
    }

    /// Member name of a property; `None` past the end.
    #[must_use]
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Returns true unless the property is a folded duplicate.
    #[must_use]
    pub fn is_emitted(&self, index: usize) -> bool {
        self.emitted.get(index).copied().unwrap_or(true)
    }

    /// Backing-field name of a property, unique among the class's fields.
    #[must_use]
    pub fn field_name(&self, index: usize, prefix: &str) -> String {
        let names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        field_name_among(&names, index, prefix)
    }
}

/// Generator for class declarations.
pub struct ClassGenerator<'c, 'a> {
    ctx: &'c GenerationContext<'a>,
}

impl<'c, 'a> ClassGenerator<'c, 'a> {
    /// Creates a new class generator.
    #[must_use]
    pub fn new(ctx: &'c GenerationContext<'a>) -> Self {
        Self { ctx }
    }

    /// Builds the declaration of a class.
    ///
    /// # Errors
    /// Returns `CodegenError` if `id` is not a class or a member cannot be
    /// synthesized.
    pub fn generate(&self, id: TypeId) -> Result<TypeDeclaration, CodegenError> {
        let ctx = self.ctx;
        let config = ctx.config;
        let model = ctx.graph.get(id);
        let class = model
            .as_class()
            .ok_or_else(|| CodegenError::generation(format!("'{}' is not a class", model.name)))?;
        let ns = model.namespace;

        let mut decl = TypeDeclaration::new(
            model.name.clone(),
            DeclKind::Class {
                is_abstract: class.is_abstract,
            },
            id,
        );
        decl.documentation = model.documentation.clone();
        super::add_type_annotations(ctx, &mut decl, model);

        let base_is_class = class
            .base
            .is_some_and(|b| ctx.graph.get(b).as_class().is_some());
        let synthesized = MemberContext {
            owner: id,
            owner_model: model,
            property: None,
        };

        if config.enable_data_binding && !base_is_class {
            let mut event = Member::event(
                PROPERTY_CHANGED_EVENT,
                TypeRef::WellKnown(WellKnownType::PropertyChangedEventHandler),
            );
            ctx.visit_member(&mut event, &synthesized);
            decl.members.push(event);

            let mut on_changed = Member::method(
                "OnPropertyChanged",
                None,
                Body::RaisePropertyChanged {
                    event: PROPERTY_CHANGED_EVENT.to_string(),
                },
            );
            on_changed.visibility = Visibility::Protected;
            decl.members.push(on_changed);
        }

        if let Some(base) = class.base {
            if base_is_class {
                decl.base_types.push(ctx.type_ref(base, ns, false, false, false));
            } else if let Some(text_name) = config
                .text_value_property_name
                .as_deref()
                .filter(|n| !n.is_empty())
            {
                self.add_text_member(&mut decl, id, base, text_name);
            }
        }

        if config.enable_data_binding {
            decl.base_types
                .push(TypeRef::WellKnown(WellKnownType::NotifyPropertyChanged));
        }

        let layout = ClassLayout::new(class);
        let synthesizer = MemberSynthesizer::new(ctx);
        for index in 0..class.properties.len() {
            if layout.is_emitted(index) {
                synthesizer.add_class_members(&mut decl, id, index, &layout)?;
            } else {
                tracing::debug!(
                    "Folded duplicate property {} on {}",
                    class.properties[index].name,
                    model.name
                );
            }
        }

        let has_mixed_ancestor = ctx
            .graph
            .all_base_classes(id)
            .into_iter()
            .any(|b| ctx.graph.get(b).as_class().is_some_and(|c| c.is_mixed));
        if class.is_mixed && (class.base.is_none() || (base_is_class && !has_mixed_ancestor)) {
            let name = mixed_text_name(&decl.name, layout.names.iter().map(String::as_str));
            let mut text = Member::property(
                name,
                TypeRef::Array(Box::new(TypeRef::Host(HostType::String))),
                Accessors::Auto {
                    private_setter: false,
                },
            )
            .annotated(Annotation::new(AnnotationKind::XmlText));
            ctx.visit_member(&mut text, &synthesized);
            decl.members.push(text);
        }

        super::add_root_annotation(&mut decl, model);

        let mut derived = ctx.graph.all_derived_types(id);
        derived.sort_by(|a, b| ctx.graph.get(*a).name.cmp(&ctx.graph.get(*b).name));
        for d in derived {
            decl.annotations.push(
                Annotation::new(AnnotationKind::XmlInclude)
                    .arg(AnnotationValue::Expr(Expr::TypeOf(ctx.type_ref(d, ns, false, false, false)))),
            );
        }

        decl.base_types.extend(
            class
                .interfaces
                .iter()
                .map(|&i| ctx.type_ref(i, ns, false, false, false)),
        );

        ctx.visit_type(&mut decl, model);
        Ok(decl)
    }

    /// Adds the text member of a class whose base is a value carrier.
    fn add_text_member(&self, decl: &mut TypeDeclaration, id: TypeId, base: TypeId, name: &str) {
        let ctx = self.ctx;
        let config = ctx.config;
        let model = ctx.graph.get(id);
        let type_ref = ctx.type_ref(base, model.namespace, false, false, false);

        let accessors = if config.enable_data_binding {
            let field = to_backing_field(name, &config.private_member_prefix);
            decl.members.push(Member::field(field.clone(), type_ref.clone()));
            Accessors::Backed {
                field,
                private_setter: false,
                notify: Some(equality_for(ctx, base, false)),
            }
        } else {
            Accessors::Auto {
                private_setter: false,
            }
        };

        let mut member = Member::property(name, type_ref, accessors);
        member
            .documentation
            .push(Documentation::new(Some("en"), "Gets or sets the text value."));

        let mut text = Annotation::new(AnnotationKind::XmlText);
        if let TypeKind::Simple(simple) = &ctx.graph.get(base).kind {
            member.documentation.extend(
                simple
                    .restrictions
                    .descriptions()
                    .into_iter()
                    .map(|d| Documentation::new(Some("en"), d)),
            );
            let host = ctx.effective_type(base, false);
            member.annotations.extend(restriction_annotations(
                config.data_annotation_mode,
                &simple.restrictions,
                host.as_ref(),
            ));
            if let Some(data_type) = ctx.data_type_name(base) {
                text.push_named("DataType", AnnotationValue::Str(data_type.to_string()));
            }
        }
        member.annotations.push(text);

        ctx.visit_member(
            &mut member,
            &MemberContext {
                owner: id,
                owner_model: model,
                property: None,
            },
        );
        decl.members.push(member);
    }
}

/// Picks the mixed-content text member name: `Text`, then `Text_1`,
/// `Text_2` and so on, avoiding property names and the class name.
fn mixed_text_name<'n>(class_name: &str, property_names: impl Iterator<Item = &'n str> + Clone) -> String {
    let taken = |candidate: &str| {
        candidate == class_name || property_names.clone().any(|p| p == candidate)
    };
    let mut candidate = "Text".to_string();
    let mut index = 1;
    while taken(&candidate) {
        candidate = format!("Text_{index}");
        index += 1;
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_text_name_avoids_collisions() {
        assert_eq!(mixed_text_name("Para", ["Title"].into_iter()), "Text");
        assert_eq!(mixed_text_name("Para", ["Text"].into_iter()), "Text_1");
        assert_eq!(mixed_text_name("Text", ["Text_1"].into_iter()), "Text_2");
    }

    #[test]
    fn test_layout_folds_same_schema_name() {
        let mut graph = xsdgen_schema::TypeGraph::new();
        let text = graph.builtin(HostType::String);
        let mut class = ClassModel::default();
        for namespace in ["urn:ns", "urn:other", "urn:ns"] {
            class
                .properties
                .push(xsdgen_schema::PropertyModel::new("Name", text).with_xml_name("name", namespace));
        }
        class
            .properties
            .push(xsdgen_schema::PropertyModel::new("Code", text));

        let layout = ClassLayout::new(&class);
        assert_eq!(layout.names, vec!["Name", "Name_2", "Name_3", "Code"]);
        assert_eq!(layout.emitted, vec![true, true, false, true]);
        assert_eq!(layout.field_name(1, "_"), "_name_2");
        assert!(layout.is_emitted(7));
        assert_eq!(class.properties[2].name, "Name");
    }
}
