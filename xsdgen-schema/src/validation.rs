//! Type graph validation.
//!
//! Checks the structural invariants code generation relies on: every id is
//! in range, base chains are acyclic and end in a class or simple type,
//! derived back-references agree with base links and enum members are
//! distinct.

use crate::error::SchemaError;
use crate::model::{EnumModel, TypeGraph, TypeId, TypeKind, TypeModel};
use std::collections::HashSet;

/// Validates a type graph.
///
/// # Errors
/// Returns `SchemaError` describing the first violation found.
pub fn validate_graph(graph: &TypeGraph) -> Result<(), SchemaError> {
    validate_namespaces(graph)?;
    for (id, model) in graph.types() {
        validate_type(graph, id, model)?;
    }
    tracing::debug!("Validated type graph with {} types", graph.len());
    Ok(())
}

fn check_id(graph: &TypeGraph, id: TypeId) -> Result<&TypeModel, SchemaError> {
    graph
        .try_get(id)
        .ok_or(SchemaError::UnknownType { index: id.index() })
}

fn validate_namespaces(graph: &TypeGraph) -> Result<(), SchemaError> {
    for (ns_id, ns) in graph.namespaces() {
        for (name, id) in ns.types() {
            let model = check_id(graph, id)?;
            if model.namespace != Some(ns_id) {
                return Err(SchemaError::Validation {
                    message: format!(
                        "Type '{}' is registered in namespace '{}' it does not belong to",
                        name, ns.name
                    ),
                });
            }
        }
    }
    Ok(())
}

fn validate_type(graph: &TypeGraph, id: TypeId, model: &TypeModel) -> Result<(), SchemaError> {
    match &model.kind {
        TypeKind::Class(class) => {
            if let Some(base) = class.base {
                let base_model = check_id(graph, base)?;
                if !matches!(base_model.kind, TypeKind::Class(_) | TypeKind::Simple(_)) {
                    return Err(SchemaError::invalid_base(&model.name, &base_model.name));
                }
                validate_base_chain(graph, id)?;
            }
            for &derived in &class.derived_types {
                let derived_base = check_id(graph, derived)?
                    .as_class()
                    .and_then(|c| c.base);
                if derived_base != Some(id) {
                    return Err(SchemaError::Validation {
                        message: format!(
                            "'{}' lists '{}' as derived but is not its base",
                            model.name,
                            graph.get(derived).name
                        ),
                    });
                }
            }
            validate_interfaces(graph, model, &class.interfaces)?;
        }
        TypeKind::Interface(iface) => {
            for &derived in &iface.derived_types {
                check_id(graph, derived)?;
            }
            validate_interfaces(graph, model, &iface.interfaces)?;
        }
        TypeKind::Enum(e) => validate_enum(&model.name, e)?,
        TypeKind::Simple(_) => {}
    }

    for property in model.properties() {
        check_id(graph, property.type_id)?;
        for substitute in &property.substitutes {
            check_id(graph, substitute.type_id)?;
        }
        if property.owning_type != Some(id) {
            return Err(SchemaError::Validation {
                message: format!(
                    "Property '{}' is not owned by '{}'",
                    property.name, model.name
                ),
            });
        }
    }
    Ok(())
}

fn validate_base_chain(graph: &TypeGraph, start: TypeId) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();
    let mut path = Vec::new();
    let mut cursor = Some(start);
    while let Some(current) = cursor {
        let model = check_id(graph, current)?;
        path.push(model.name.clone());
        if !seen.insert(current) {
            return Err(SchemaError::CircularReference {
                path: path.join(" -> "),
            });
        }
        cursor = model.as_class().and_then(|c| c.base);
    }
    Ok(())
}

fn validate_interfaces(
    graph: &TypeGraph,
    model: &TypeModel,
    interfaces: &[TypeId],
) -> Result<(), SchemaError> {
    for &iface in interfaces {
        if check_id(graph, iface)?.as_interface().is_none() {
            return Err(SchemaError::Validation {
                message: format!(
                    "'{}' implements '{}' which is not an interface",
                    model.name,
                    graph.get(iface).name
                ),
            });
        }
    }
    Ok(())
}

fn validate_enum(name: &str, enum_model: &EnumModel) -> Result<(), SchemaError> {
    let mut seen_names = HashSet::new();
    let mut seen_values = HashSet::new();

    for value in &enum_model.values {
        if !seen_names.insert(value.name.as_str()) {
            return Err(SchemaError::Validation {
                message: format!("Duplicate enum member name '{}' in enum '{}'", value.name, name),
            });
        }
        if !seen_values.insert(value.value.as_str()) {
            return Err(SchemaError::InvalidEnumValue {
                enum_name: name.to_string(),
                value: value.value.clone(),
            });
        }
    }
    Ok(())
}
