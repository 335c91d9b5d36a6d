//! Member synthesis for schema properties.
//!
//! Every property of a class expands into a fixed sequence of members:
//! optional backing field, optional should-serialize method, the property
//! itself, then optional specified flag, nullable projection or has-items
//! query. Interface properties expand into a single abstract property.

use super::classes::ClassLayout;
use crate::annotations::{array_item_annotations, property_annotations, restriction_annotations};
use crate::config::{CollectionSettersMode, DataAnnotationMode};
use crate::context::GenerationContext;
use crate::decl::{
    Accessors, Annotation, AnnotationKind, AnnotationValue, AssignTarget, Assignment, Body,
    Condition, CountMember, EqualityKind, Expr, Literal, Member, TypeDeclaration, TypeRef,
};
use crate::defaults::default_value_for;
use crate::error::CodegenError;
use crate::visitor::MemberContext;
use xsdgen_schema::{
    Documentation, HostType, PropertyModel, TypeCode, TypeId, TypeKind, XML_NAMESPACE,
};

/// Equality used by change-notifying setters of a member of the given type.
#[must_use]
pub fn equality_for(ctx: &GenerationContext<'_>, type_id: TypeId, is_attribute: bool) -> EqualityKind {
    match &ctx.graph.get(type_id).kind {
        TypeKind::Enum(_) => EqualityKind::Value,
        TypeKind::Simple(_) => match ctx.effective_type(type_id, is_attribute) {
            Some(host) if host.is_array() => EqualityKind::Sequence,
            Some(host) if host.is_value_type() => EqualityKind::Value,
            _ => EqualityKind::Reference,
        },
        _ => EqualityKind::Reference,
    }
}

/// Per-property decisions shared by all emitted members of a property.
#[derive(Debug, Clone)]
pub struct PropertyPlan {
    /// Property is a folded single-collection wrapper.
    pub is_array: bool,
    /// Type members are declared with; the wrapped item type when folded.
    pub property_type: TypeId,
    /// Property type is a list datatype.
    pub is_list: bool,
    /// Property type is `xs:boolean`.
    pub is_boolean: bool,
    /// Collection, folded array, or list in attribute position.
    pub is_collection_like: bool,
    /// Optional scalar of value type without a default.
    pub is_nullable_value_type: bool,
    /// Optional reference-typed member without a default.
    pub is_nullable_reference_type: bool,
    /// Nillable scalar of value type.
    pub is_nillable_value_type: bool,
    /// Accessors go through a private field.
    pub requires_backing_field: bool,
    /// Member type reference, wrapped in the collection when collection-like.
    pub type_ref: TypeRef,
}

impl PropertyPlan {
    /// Decides the member shape of a property of `owner`.
    #[must_use]
    pub fn new(ctx: &GenerationContext<'_>, owner: TypeId, property: &PropertyModel) -> Self {
        let graph = ctx.graph;
        let attr = property.is_attribute;
        let is_list = graph
            .get(property.type_id)
            .as_simple()
            .is_some_and(|s| s.is_list());

        let folded_item = graph
            .get(property.type_id)
            .as_class()
            .filter(|c| c.base.is_none() && c.properties.len() == 1)
            .map(|c| &c.properties[0])
            .filter(|inner| !inner.is_attribute && !inner.is_any && inner.is_collection);
        let is_array = ctx.config.use_array_item_attribute
            && !property.is_collection
            && !attr
            && !is_list
            && folded_item.is_some();
        let property_type = match folded_item {
            Some(item) if is_array => item.type_id,
            _ => property.type_id,
        };

        let collection_or_array = property.is_collection || is_array;
        let is_value_kind = ctx.is_value_kind(property_type, attr);
        let is_nullable_value_type = property.default_value.is_none()
            && property.is_nullable
            && !collection_or_array
            && !is_list
            && is_value_kind;
        let is_nullable_reference_type = property.default_value.is_none()
            && property.is_nullable
            && (collection_or_array
                || is_list
                || graph.get(property_type).as_class().is_some()
                || (graph.get(property_type).is_simple() && !is_value_kind));
        let is_nillable_value_type = property.is_nillable && !collection_or_array && is_value_kind;
        let is_collection_like = collection_or_array || (is_list && attr);

        let owner_ns = graph.get(owner).namespace;
        Self {
            is_array,
            property_type,
            is_list,
            is_boolean: ctx.type_code(property.type_id) == Some(TypeCode::Boolean),
            is_collection_like,
            is_nullable_value_type,
            is_nullable_reference_type,
            is_nillable_value_type,
            requires_backing_field: ctx.config.enable_data_binding
                || property.default_value.is_some()
                || collection_or_array,
            type_ref: ctx.type_ref(property_type, owner_ns, is_collection_like, false, attr),
        }
    }
}

/// Synthesizes the members of class and interface properties.
pub struct MemberSynthesizer<'c, 'a> {
    ctx: &'c GenerationContext<'a>,
}

impl<'c, 'a> MemberSynthesizer<'c, 'a> {
    /// Creates a new member synthesizer.
    #[must_use]
    pub fn new(ctx: &'c GenerationContext<'a>) -> Self {
        Self { ctx }
    }

    /// Appends the members of one class property to a declaration, named
    /// after the property's entry in `layout`.
    ///
    /// # Errors
    /// Returns `CodegenError` if the property's default or fixed literal
    /// cannot be converted.
    pub fn add_class_members(
        &self,
        decl: &mut TypeDeclaration,
        owner: TypeId,
        property_index: usize,
        layout: &ClassLayout,
    ) -> Result<(), CodegenError> {
        let ctx = self.ctx;
        let config = ctx.config;
        let owner_model = ctx.graph.get(owner);
        let property = owner_model.properties().get(property_index).ok_or_else(|| {
            CodegenError::generation(format!(
                "property {property_index} missing on '{}'",
                owner_model.name
            ))
        })?;
        let plan = PropertyPlan::new(ctx, owner, property);
        let attr = property.is_attribute;
        let name = layout
            .name(property_index)
            .unwrap_or(&property.name)
            .to_string();
        let field_name = layout.field_name(property_index, &config.private_member_prefix);
        let notify = |equality: EqualityKind| config.enable_data_binding.then_some(equality);

        let backing_type = if plan.is_nillable_value_type {
            plan.type_ref.clone().nullable()
        } else {
            plan.type_ref.clone()
        };
        let mut backing = Member::field(&field_name, backing_type)
            .annotated(Annotation::new(AnnotationKind::XmlIgnore));
        let mut method = None;

        let mut member = if property.default_value.is_none()
            || (plan.is_collection_like && property.is_nullable)
        {
            let should_serialize = config.use_should_serialize && !attr;
            let mut member_name = name.clone();
            if plan.is_nullable_value_type && config.generate_nullables && !should_serialize {
                member_name.push_str("Value");
            }

            let member_type = if plan.is_nillable_value_type
                || (plan.is_nullable_value_type && should_serialize)
            {
                plan.type_ref.clone().nullable()
            } else {
                plan.type_ref.clone()
            };

            let condition = if plan.is_nullable_value_type && should_serialize {
                Some(match &property.fixed_value {
                    Some(fixed) if !fixed.is_empty() => Condition::EqualsFixed {
                        member: member_name.clone(),
                        value: self.fixed_value(&plan, property, fixed)?,
                    },
                    _ => Condition::HasValue {
                        member: member_name.clone(),
                    },
                })
            } else if plan.is_nullable_reference_type && should_serialize {
                Some(if property.is_collection || plan.is_array {
                    Condition::CountNonZero {
                        member: member_name.clone(),
                        count: self.count_member(),
                        null_guard: false,
                    }
                } else if ctx.type_code(plan.property_type) == Some(TypeCode::String) {
                    Condition::NotEmptyString {
                        member: member_name.clone(),
                    }
                } else {
                    Condition::NotNull {
                        member: member_name.clone(),
                    }
                })
            } else {
                None
            };
            method = condition.map(|condition| {
                Member::method(
                    format!("ShouldSerialize{member_name}"),
                    Some(TypeRef::Host(HostType::Bool)),
                    Body::Return(condition),
                )
            });

            let private_setter = plan.is_collection_like
                && config.collection_setters == CollectionSettersMode::Private;
            let accessors = if plan.requires_backing_field {
                let equality = if plan.is_collection_like {
                    EqualityKind::Sequence
                } else {
                    equality_for(ctx, plan.property_type, attr)
                };
                Accessors::Backed {
                    field: field_name.clone(),
                    private_setter,
                    notify: notify(equality),
                }
            } else {
                Accessors::Auto { private_setter }
            };
            Member::property(member_name, member_type, accessors)
        } else {
            let literal = property.default_value.as_deref().unwrap_or_default();
            let default = default_value_for(ctx, plan.property_type, literal, attr)?;
            backing.initializer = Some(default.clone());

            let member_type = if plan.is_nillable_value_type {
                plan.type_ref.clone().nullable()
            } else {
                plan.type_ref.clone()
            };
            let mut member = Member::property(
                name.clone(),
                member_type,
                Accessors::Backed {
                    field: field_name.clone(),
                    private_setter: false,
                    notify: notify(equality_for(ctx, plan.property_type, attr)),
                },
            );
            if property.is_nullable && default.is_constant() && !is_xml_lang_or_space(property) {
                member
                    .annotations
                    .push(default_value_annotation(&plan.type_ref, default, literal));
            }
            member
        };

        self.add_docs(&mut member, property, plan.property_type);

        if !property.is_nullable && config.data_annotation_mode != DataAnnotationMode::None {
            member.annotations.push(Annotation::new(AnnotationKind::Required));
        }

        let mut specified = None;
        let mut projection = None;
        let mut has_items = None;
        let context = MemberContext {
            owner,
            owner_model,
            property: Some(property),
        };
        let synthesized = MemberContext {
            property: None,
            ..context
        };

        if plan.is_nullable_value_type {
            let mut generate_nullable = config.generate_nullables;
            let mut generate_specified = true;
            if generate_nullable && config.use_should_serialize && !attr {
                generate_nullable = false;
                generate_specified = false;
            }

            let specified_name = if generate_nullable {
                format!("{name}Value")
            } else {
                name.clone()
            };

            if generate_specified {
                let mut flag = Member::property(
                    format!("{specified_name}Specified"),
                    TypeRef::Host(HostType::Bool),
                    Accessors::Auto {
                        private_setter: false,
                    },
                )
                .annotated(Annotation::new(AnnotationKind::XmlIgnore));
                if config.entity_framework && generate_nullable {
                    flag.annotations.push(Annotation::new(AnnotationKind::NotMapped));
                }
                flag.documentation.push(Documentation::new(
                    Some("en"),
                    format!("Gets or sets a value indicating whether the {name} property is specified."),
                ));
                ctx.visit_member(&mut flag, &synthesized);
                specified = Some(flag);
            }

            if generate_nullable {
                let mut nullable = Member::property(
                    name.clone(),
                    plan.type_ref.clone().nullable(),
                    Accessors::NullableProjection {
                        value_property: format!("{name}Value"),
                        specified_property: format!("{specified_name}Specified"),
                        notify: config.enable_data_binding,
                    },
                )
                .annotated(Annotation::new(AnnotationKind::XmlIgnore));
                nullable.documentation = member.documentation.clone();

                if let Some(flag) = specified.as_mut() {
                    flag.annotations.push(editor_browsable_never());
                }
                member.annotations.push(editor_browsable_never());
                if config.entity_framework {
                    member.annotations.push(Annotation::new(AnnotationKind::NotMapped));
                }
                ctx.visit_member(&mut nullable, &context);
                projection = Some(nullable);
            }
        } else if plan.is_collection_like && property.is_nullable {
            let mut query = Member::property(
                format!("{name}Specified"),
                TypeRef::Host(HostType::Bool),
                Accessors::Computed(Condition::CountNonZero {
                    member: name.clone(),
                    count: self.count_member(),
                    null_guard: matches!(
                        config.collection_setters,
                        CollectionSettersMode::Public
                            | CollectionSettersMode::PublicWithoutConstructorInitialization
                    ),
                }),
            )
            .annotated(Annotation::new(AnnotationKind::XmlIgnore));
            if config.entity_framework {
                query.annotations.push(Annotation::new(AnnotationKind::NotMapped));
            }
            query.documentation.push(Documentation::new(
                Some("en"),
                format!("Gets a value indicating whether the {name} collection is empty."),
            ));
            ctx.visit_member(&mut query, &synthesized);
            has_items = Some(query);
        }

        if plan.is_nullable_reference_type && config.enable_nullable_reference_attributes {
            member.annotations.push(Annotation::new(AnnotationKind::AllowNull));
            member.annotations.push(Annotation::new(AnnotationKind::MaybeNull));
        }

        member
            .annotations
            .extend(property_annotations(ctx, property, plan.is_array, None));

        let initializer = (plan.is_collection_like
            && config.collection_setters != CollectionSettersMode::PublicWithoutConstructorInitialization)
            .then(|| {
                let owner_ns = owner_model.namespace;
                let value = if config.collection.is_array() {
                    Expr::EmptyArray(ctx.type_ref(plan.property_type, owner_ns, false, true, attr))
                } else {
                    Expr::NewCollection(ctx.type_ref(plan.property_type, owner_ns, true, true, attr))
                };
                let target = if plan.requires_backing_field {
                    AssignTarget::Field(field_name.clone())
                } else {
                    AssignTarget::Property(name.clone())
                };
                Assignment { target, value }
            });

        let array_item = ctx
            .graph
            .get(property.type_id)
            .as_class()
            .and_then(|c| c.properties.first())
            .filter(|_| plan.is_array);
        if let Some(item) = array_item {
            member
                .annotations
                .extend(array_item_annotations(ctx, item, owner));
        }

        if property.is_key {
            member.annotations.push(Annotation::new(AnnotationKind::Key));
        }
        if property.is_any && config.entity_framework {
            member.annotations.push(Annotation::new(AnnotationKind::NotMapped));
        }

        ctx.visit_member(&mut member, &context);

        tracing::trace!("Synthesized members for {}.{}", owner_model.name, name);

        if plan.requires_backing_field {
            decl.members.push(backing);
        }
        decl.members.extend(method);
        decl.members.push(member);
        decl.members.extend(specified);
        decl.members.extend(projection);
        decl.members.extend(has_items);

        if let Some(assignment) = initializer {
            match decl.constructor_mut().body.as_mut() {
                Some(Body::Initialize(assignments)) => assignments.push(assignment),
                _ => {
                    return Err(CodegenError::generation(format!(
                        "constructor of '{}' cannot initialize {}",
                        decl.name, name
                    )));
                }
            }
        }

        Ok(())
    }

    /// Appends the abstract member of one interface property.
    ///
    /// # Errors
    /// Returns `CodegenError` if the property's default literal cannot be
    /// converted.
    pub fn add_interface_member(
        &self,
        decl: &mut TypeDeclaration,
        owner: TypeId,
        property: &PropertyModel,
    ) -> Result<(), CodegenError> {
        let ctx = self.ctx;
        let plan = PropertyPlan::new(ctx, owner, property);

        let type_ref = if plan.is_nullable_value_type && ctx.config.generate_nullables {
            plan.type_ref.clone().nullable()
        } else {
            plan.type_ref.clone()
        };
        let mut member = Member::property(
            property.name.clone(),
            type_ref.clone(),
            Accessors::Abstract {
                has_set: !property.is_collection && !plan.is_array,
            },
        );

        if let (Some(literal), true) = (property.default_value.as_deref(), property.is_nullable) {
            let default = default_value_for(ctx, plan.property_type, literal, property.is_attribute)?;
            if default.is_constant() && !is_xml_lang_or_space(property) {
                member
                    .annotations
                    .push(default_value_annotation(&type_ref, default, literal));
            }
        }

        self.add_docs(&mut member, property, plan.property_type);

        let owner_model = ctx.graph.get(owner);
        ctx.visit_member(
            &mut member,
            &MemberContext {
                owner,
                owner_model,
                property: Some(property),
            },
        );
        decl.members.push(member);
        Ok(())
    }

    /// Adds property documentation and, for value carriers, their
    /// documentation, facet descriptions and facet annotations.
    fn add_docs(&self, member: &mut Member, property: &PropertyModel, property_type: TypeId) {
        member.documentation.extend(property.documentation.iter().cloned());

        let model = self.ctx.graph.get(property_type);
        if let Some(simple) = model.as_simple() {
            member.documentation.extend(model.documentation.iter().cloned());
            member.documentation.extend(
                simple
                    .restrictions
                    .descriptions()
                    .into_iter()
                    .map(|text| Documentation::new(Some("en"), text)),
            );
            let host = self.ctx.effective_type(property_type, property.is_attribute);
            member.annotations.extend(restriction_annotations(
                self.ctx.config.data_annotation_mode,
                &simple.restrictions,
                host.as_ref(),
            ));
        }
    }

    fn fixed_value(
        &self,
        plan: &PropertyPlan,
        property: &PropertyModel,
        fixed: &str,
    ) -> Result<Expr, CodegenError> {
        if plan.is_boolean {
            return Ok(Expr::Literal(Literal::Bool(
                fixed == "1" || fixed.eq_ignore_ascii_case("true"),
            )));
        }
        default_value_for(self.ctx, plan.property_type, fixed, property.is_attribute)
    }

    fn count_member(&self) -> CountMember {
        if self.ctx.config.collection.is_array() {
            CountMember::Length
        } else {
            CountMember::Count
        }
    }
}

fn is_xml_lang_or_space(property: &PropertyModel) -> bool {
    property
        .xml_name
        .as_ref()
        .is_some_and(|q| q.namespace == XML_NAMESPACE && (q.name == "lang" || q.name == "space"))
}

fn default_value_annotation(type_ref: &TypeRef, default: Expr, literal: &str) -> Annotation {
    let annotation = Annotation::new(AnnotationKind::DefaultValue);
    match type_ref {
        TypeRef::Host(HostType::Decimal) => annotation
            .arg(AnnotationValue::Expr(Expr::TypeOf(TypeRef::Host(HostType::Decimal))))
            .arg(AnnotationValue::Str(literal.to_string())),
        _ => annotation.arg(AnnotationValue::Expr(default)),
    }
}

fn editor_browsable_never() -> Annotation {
    Annotation::new(AnnotationKind::EditorBrowsableNever)
}
