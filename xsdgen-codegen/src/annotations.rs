//! Serialization and validation annotations for properties.

use crate::config::DataAnnotationMode;
use crate::context::GenerationContext;
use crate::decl::{Annotation, AnnotationKind, AnnotationValue, Expr, TypeRef};
use xsdgen_schema::{Form, HostType, PropertyModel, RestrictionSet, Restriction, TypeId};

/// Builds the serialization annotations of a property.
///
/// # Arguments
/// * `ctx` - Generation context
/// * `property` - Property being emitted
/// * `is_array` - Property is emitted as an array container
/// * `owner` - Type whose namespace references are resolved from; defaults
///   to the property's owning type
#[must_use]
pub fn property_annotations(
    ctx: &GenerationContext<'_>,
    property: &PropertyModel,
    is_array: bool,
    owner: Option<TypeId>,
) -> Vec<Annotation> {
    if property.is_key && property.xml_name.is_none() {
        return vec![Annotation::new(AnnotationKind::XmlIgnore)];
    }

    let owner = owner.or(property.owning_type);
    let owner_ns = owner.and_then(|o| ctx.graph.get(o).namespace);
    let xml_name = xml_local_name(property);
    let mut annotations = Vec::new();

    if property.is_attribute {
        if property.is_any {
            annotations.push(with_order(
                Annotation::new(AnnotationKind::XmlAnyAttribute),
                property.order,
            ));
        } else {
            annotations.push(
                Annotation::new(AnnotationKind::XmlAttribute).arg(AnnotationValue::Str(xml_name)),
            );
        }
    } else if !is_array {
        if property.is_any {
            annotations.push(with_order(
                Annotation::new(AnnotationKind::XmlAnyElement),
                property.order,
            ));
        } else {
            if !ctx.config.separate_substitutes {
                for substitute in &property.substitutes {
                    let type_ref = ctx.type_ref(substitute.type_id, owner_ns, false, false, false);
                    let annotation = Annotation::new(AnnotationKind::XmlElement)
                        .arg(AnnotationValue::Str(substitute.element.name.clone()))
                        .named("Type", AnnotationValue::Expr(Expr::TypeOf(type_ref)))
                        .named(
                            "Namespace",
                            AnnotationValue::Str(substitute.element.namespace.clone()),
                        );
                    annotations.push(with_order(annotation, property.order));
                }
            }
            annotations.push(with_order(
                Annotation::new(AnnotationKind::XmlElement).arg(AnnotationValue::Str(xml_name)),
                property.order,
            ));
        }
    } else {
        annotations.push(with_order(
            Annotation::new(AnnotationKind::XmlArray).arg(AnnotationValue::Str(xml_name)),
            property.order,
        ));
    }

    let owner_xml_namespace = owner
        .and_then(|o| ctx.graph.get(o).xml_name.as_ref())
        .map(|q| q.namespace.clone())
        .unwrap_or_default();
    let force_is_nullable = property.is_nillable
        && !(property.is_collection
            && ctx.graph.get(property.type_id).is_simple()
            && ctx.is_value_kind(property.type_id, property.is_attribute))
        && !(property.is_nullable && ctx.config.do_not_force_is_nullable);
    let data_type = ctx.data_type_name(property.type_id);

    for annotation in &mut annotations {
        if annotation.get("Namespace").is_none() {
            if let Some(namespace) = &property.xml_namespace {
                annotation.push_named("Namespace", AnnotationValue::Str(namespace.clone()));
            }

            if property.form == Form::Qualified && property.is_attribute {
                if property.xml_namespace.is_none() {
                    annotation.push_named(
                        "Namespace",
                        AnnotationValue::Str(owner_xml_namespace.clone()),
                    );
                }
                annotation.push_named("Form", AnnotationValue::Form(Form::Qualified));
            } else if matches!(property.form, Form::Unqualified | Form::None)
                && !property.is_attribute
                && !property.is_any
                && property.xml_namespace.is_none()
            {
                annotation.push_named("Form", AnnotationValue::Form(Form::Unqualified));
            }
        }

        if force_is_nullable {
            annotation.push_named("IsNullable", AnnotationValue::Bool(true));
        }

        if let Some(data_type) = data_type {
            annotation.push_named("DataType", AnnotationValue::Str(data_type.to_string()));
        }
    }

    annotations
}

/// Repackages the annotations of an array's item property as array item
/// annotations, dropping ordering and making the item namespace explicit.
#[must_use]
pub fn array_item_annotations(
    ctx: &GenerationContext<'_>,
    item: &PropertyModel,
    owner: TypeId,
) -> Vec<Annotation> {
    property_annotations(ctx, item, false, Some(owner))
        .into_iter()
        .map(|annotation| {
            let mut repackaged = Annotation::new(AnnotationKind::XmlArrayItem);
            repackaged.args = annotation
                .args
                .into_iter()
                .filter(|a| a.name != Some("Order"))
                .collect();
            let has_namespace = repackaged.get("Namespace").is_some();
            let item_namespace = item
                .xml_name
                .as_ref()
                .filter(|name| !name.is_empty() && !name.namespace.is_empty());
            if let (false, Some(name)) = (has_namespace, item_namespace) {
                repackaged.push_named("Namespace", AnnotationValue::Str(name.namespace.clone()));
            }
            repackaged
        })
        .collect()
}

/// Builds validation annotations for the facets of a value carrier.
///
/// # Arguments
/// * `mode` - Data annotation mode
/// * `restrictions` - Facets of the value carrier
/// * `host` - Effective host type, used as the range operand type
#[must_use]
pub fn restriction_annotations(
    mode: DataAnnotationMode,
    restrictions: &RestrictionSet,
    host: Option<&HostType>,
) -> Vec<Annotation> {
    if mode == DataAnnotationMode::None {
        return Vec::new();
    }

    let mut annotations = Vec::new();
    for restriction in restrictions {
        match restriction {
            Restriction::MinLength(n) => annotations.push(length(AnnotationKind::MinLength, *n)),
            Restriction::MaxLength(n) => annotations.push(length(AnnotationKind::MaxLength, *n)),
            Restriction::Length(n) => {
                annotations.push(length(AnnotationKind::MinLength, *n));
                annotations.push(length(AnnotationKind::MaxLength, *n));
            }
            Restriction::Pattern(pattern) if mode == DataAnnotationMode::All => {
                annotations.push(
                    Annotation::new(AnnotationKind::RegularExpression)
                        .arg(AnnotationValue::Str(pattern.clone())),
                );
            }
            _ => {}
        }
    }

    if let (Some(min), Some(max)) = (restrictions.min_inclusive(), restrictions.max_inclusive()) {
        let operand = host.cloned().unwrap_or(HostType::String);
        annotations.push(
            Annotation::new(AnnotationKind::Range)
                .arg(AnnotationValue::Expr(Expr::TypeOf(TypeRef::Host(operand))))
                .arg(AnnotationValue::Str(min.to_string()))
                .arg(AnnotationValue::Str(max.to_string())),
        );
    }

    annotations
}

fn length(kind: AnnotationKind, n: u32) -> Annotation {
    Annotation::new(kind).arg(AnnotationValue::Int(i64::from(n)))
}

fn with_order(annotation: Annotation, order: Option<u32>) -> Annotation {
    match order {
        Some(order) => annotation.named("Order", AnnotationValue::Int(i64::from(order))),
        None => annotation,
    }
}

fn xml_local_name(property: &PropertyModel) -> String {
    property
        .xml_name
        .as_ref()
        .map_or_else(|| property.original_name.clone(), |q| q.name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use xsdgen_schema::{
        ClassModel, Datatype, QualifiedName, SimpleModel, Substitute, TypeCode, TypeGraph,
        TypeKind, TypeModel,
    };

    struct Fixture {
        graph: TypeGraph,
        owner: TypeId,
        int: TypeId,
        date: TypeId,
    }

    fn fixture() -> Fixture {
        let mut graph = TypeGraph::new();
        let ns = graph.add_namespace("Ns", "urn:ns");
        let owner = graph.add_type(
            ns,
            TypeModel::new("Order", TypeKind::Class(ClassModel::default()))
                .with_xml_name("order", "urn:ns"),
        );
        let int = graph.add_type(
            ns,
            TypeModel::new(
                "int",
                TypeKind::Simple(SimpleModel::from_datatype(
                    Datatype::atomic(TypeCode::Int),
                    RestrictionSet::new(),
                )),
            ),
        );
        let date = graph.add_type(
            ns,
            TypeModel::new(
                "date",
                TypeKind::Simple(SimpleModel::from_datatype(
                    Datatype::atomic(TypeCode::Date),
                    RestrictionSet::new(),
                )),
            ),
        );
        Fixture {
            graph,
            owner,
            int,
            date,
        }
    }

    fn owned(f: &Fixture, name: &str, type_id: TypeId) -> PropertyModel {
        let mut property = PropertyModel::new(name, type_id).with_xml_name(name.to_lowercase(), "urn:ns");
        property.owning_type = Some(f.owner);
        property
    }

    #[test]
    fn test_element_gets_unqualified_form_and_order() {
        let f = fixture();
        let config = GeneratorConfig::default();
        let ctx = GenerationContext::new(&f.graph, &config, &[]);
        let mut property = owned(&f, "Count", f.int);
        property.order = Some(3);

        let annotations = property_annotations(&ctx, &property, false, None);
        assert_eq!(annotations.len(), 1);
        let element = &annotations[0];
        assert_eq!(element.kind, AnnotationKind::XmlElement);
        assert_eq!(element.positional(0), Some(&AnnotationValue::Str("count".to_string())));
        assert_eq!(element.get("Order"), Some(&AnnotationValue::Int(3)));
        assert_eq!(element.get("Form"), Some(&AnnotationValue::Form(Form::Unqualified)));
        assert_eq!(element.get("Namespace"), None);
    }

    #[test]
    fn test_qualified_attribute_uses_owner_namespace() {
        let f = fixture();
        let config = GeneratorConfig::default();
        let ctx = GenerationContext::new(&f.graph, &config, &[]);
        let mut property = owned(&f, "Code", f.int);
        property.is_attribute = true;
        property.form = Form::Qualified;

        let annotations = property_annotations(&ctx, &property, false, None);
        let attribute = &annotations[0];
        assert_eq!(attribute.kind, AnnotationKind::XmlAttribute);
        assert_eq!(attribute.get("Namespace"), Some(&AnnotationValue::Str("urn:ns".to_string())));
        assert_eq!(attribute.get("Form"), Some(&AnnotationValue::Form(Form::Qualified)));
    }

    #[test]
    fn test_explicit_namespace_suppresses_form() {
        let f = fixture();
        let config = GeneratorConfig::default();
        let ctx = GenerationContext::new(&f.graph, &config, &[]);
        let mut property = owned(&f, "Note", f.int);
        property.xml_namespace = Some("urn:other".to_string());

        let annotations = property_annotations(&ctx, &property, false, None);
        assert_eq!(
            annotations[0].get("Namespace"),
            Some(&AnnotationValue::Str("urn:other".to_string()))
        );
        assert_eq!(annotations[0].get("Form"), None);
    }

    #[test]
    fn test_substitutes_fold_into_repeated_elements() {
        let mut f = fixture();
        let ns = f.graph.get(f.owner).namespace.unwrap();
        let car = f.graph.add_type(ns, TypeModel::new("Car", TypeKind::Class(ClassModel::default())));
        let mut property = owned(&f, "Vehicle", car);
        property.order = Some(1);
        property.substitutes.push(Substitute {
            element: QualifiedName::new("car", "urn:ns"),
            type_id: car,
        });

        let config = GeneratorConfig::default();
        let ctx = GenerationContext::new(&f.graph, &config, &[]);
        let annotations = property_annotations(&ctx, &property, false, None);
        assert_eq!(annotations.len(), 2);
        assert_eq!(annotations[0].positional(0), Some(&AnnotationValue::Str("car".to_string())));
        assert!(matches!(
            annotations[0].get("Type"),
            Some(AnnotationValue::Expr(Expr::TypeOf(TypeRef::Named { .. })))
        ));
        assert_eq!(annotations[0].get("Order"), Some(&AnnotationValue::Int(1)));
        assert_eq!(annotations[0].get("Form"), None);
        assert_eq!(annotations[1].positional(0), Some(&AnnotationValue::Str("vehicle".to_string())));

        let config = GeneratorConfig::default().separate_substitutes(true);
        let ctx = GenerationContext::new(&f.graph, &config, &[]);
        assert_eq!(property_annotations(&ctx, &property, false, None).len(), 1);
    }

    #[test]
    fn test_nillable_and_data_type_arguments() {
        let f = fixture();
        let config = GeneratorConfig::default();
        let ctx = GenerationContext::new(&f.graph, &config, &[]);
        let mut property = owned(&f, "Due", f.date);
        property.is_nillable = true;

        let annotations = property_annotations(&ctx, &property, false, None);
        assert_eq!(annotations[0].get("IsNullable"), Some(&AnnotationValue::Bool(true)));
        assert_eq!(annotations[0].get("DataType"), Some(&AnnotationValue::Str("date".to_string())));

        property.is_nullable = true;
        let config = GeneratorConfig::default().do_not_force_is_nullable(true);
        let ctx = GenerationContext::new(&f.graph, &config, &[]);
        let annotations = property_annotations(&ctx, &property, false, None);
        assert_eq!(annotations[0].get("IsNullable"), None);
    }

    #[test]
    fn test_key_without_schema_name_is_ignored() {
        let f = fixture();
        let config = GeneratorConfig::default();
        let ctx = GenerationContext::new(&f.graph, &config, &[]);
        let mut property = PropertyModel::new("Id", f.int);
        property.is_key = true;

        let annotations = property_annotations(&ctx, &property, false, None);
        assert_eq!(annotations, vec![Annotation::new(AnnotationKind::XmlIgnore)]);
    }

    #[test]
    fn test_array_item_drops_order() {
        let f = fixture();
        let config = GeneratorConfig::default();
        let ctx = GenerationContext::new(&f.graph, &config, &[]);
        let mut item = owned(&f, "Line", f.int);
        item.order = Some(0);

        let annotations = array_item_annotations(&ctx, &item, f.owner);
        assert_eq!(annotations.len(), 1);
        assert_eq!(annotations[0].kind, AnnotationKind::XmlArrayItem);
        assert_eq!(annotations[0].get("Order"), None);
        assert_eq!(annotations[0].get("Namespace"), Some(&AnnotationValue::Str("urn:ns".to_string())));
    }

    #[test]
    fn test_restriction_annotations_by_mode() {
        let restrictions = RestrictionSet::new()
            .with(Restriction::Length(4))
            .with(Restriction::Pattern("[A-Z]+".to_string()))
            .with(Restriction::MinInclusive("1".to_string()))
            .with(Restriction::MaxInclusive("9".to_string()));

        assert!(restriction_annotations(DataAnnotationMode::None, &restrictions, None).is_empty());

        let partial = restriction_annotations(DataAnnotationMode::Partial, &restrictions, Some(&HostType::U8));
        let kinds: Vec<_> = partial.iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![AnnotationKind::MinLength, AnnotationKind::MaxLength, AnnotationKind::Range]
        );
        assert_eq!(
            partial[2].positional(0),
            Some(&AnnotationValue::Expr(Expr::TypeOf(TypeRef::Host(HostType::U8))))
        );

        let all = restriction_annotations(DataAnnotationMode::All, &restrictions, None);
        assert!(all.iter().any(|a| a.kind == AnnotationKind::RegularExpression));
    }
}
