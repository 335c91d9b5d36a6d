//! Synthetic schemas for benchmarks.

use xsdgen_schema::{
    ClassModel, Datatype, PropertyModel, Restriction, RestrictionSet, SchemaError, SimpleModel,
    TypeCode, TypeGraph, TypeId, TypeKind, TypeModel,
};

/// Datatype codes cycled through by [`wide_schema`]. Defaulted members land
/// on odd positions, whose carriers all accept the literal `7`.
const CODES: [TypeCode; 6] = [
    TypeCode::Int,
    TypeCode::String,
    TypeCode::Boolean,
    TypeCode::Decimal,
    TypeCode::DateTime,
    TypeCode::Integer,
];

/// Builds an `xs:integer` restriction bounded to `[min, max]`.
#[must_use]
pub fn bounded_integer(min: i128, max: i128) -> (Datatype, RestrictionSet) {
    (
        Datatype::atomic(TypeCode::Integer),
        RestrictionSet::new()
            .with(Restriction::MinInclusive(min.to_string()))
            .with(Restriction::MaxInclusive(max.to_string())),
    )
}

/// Builds a graph of `classes` classes with `properties` properties each.
///
/// Property shapes rotate through optional, nillable, repeating and
/// defaulted members so a generation pass exercises every member path.
///
/// # Errors
/// Returns `SchemaError` if the graph cannot be linked.
pub fn wide_schema(classes: usize, properties: usize) -> Result<TypeGraph, SchemaError> {
    let mut graph = TypeGraph::new();
    let ns = graph.add_namespace("Bench", "urn:bench");

    let carriers: Vec<TypeId> = CODES
        .iter()
        .map(|&code| {
            let restrictions = if code == TypeCode::Integer {
                bounded_integer(0, 1000).1
            } else {
                RestrictionSet::new()
            };
            graph.add_type(
                ns,
                TypeModel::new(
                    code.xsd_name(),
                    TypeKind::Simple(SimpleModel::from_datatype(Datatype::atomic(code), restrictions)),
                ),
            )
        })
        .collect();

    let mut previous: Option<TypeId> = None;
    for c in 0..classes {
        let name = format!("Type{c}");
        let class = graph.add_type(
            ns,
            TypeModel::new(name.clone(), TypeKind::Class(ClassModel::default()))
                .with_xml_name(name.to_lowercase(), "urn:bench"),
        );
        // Every fourth class derives from its predecessor.
        if let Some(base) = previous.filter(|_| c % 4 == 3) {
            graph.set_base(class, base)?;
        }

        for p in 0..properties {
            let carrier = carriers[p % carriers.len()];
            let mut property = PropertyModel::new(format!("Field{p}"), carrier)
                .with_xml_name(format!("field{p}"), "urn:bench");
            property.order = u32::try_from(p).ok();
            match p % 4 {
                0 => property.is_nullable = true,
                1 => {
                    property.is_nullable = true;
                    property.is_nillable = true;
                }
                2 => {
                    property.is_collection = true;
                    property.is_nullable = true;
                }
                _ => property.default_value = Some("7".to_string()),
            }
            graph.add_property(class, property)?;
        }
        previous = Some(class);
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_schema_shape() {
        let graph = wide_schema(8, 12).unwrap();
        let classes = graph.types().filter(|(_, t)| t.as_class().is_some()).count();
        assert_eq!(classes, 8);
        assert!(
            graph
                .types()
                .filter_map(|(_, t)| t.as_class())
                .all(|c| c.properties.len() == 12)
        );
        assert!(xsdgen_schema::validate_graph(&graph).is_ok());
    }
}
