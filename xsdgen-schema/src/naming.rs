//! Name allocation for types, properties and backing fields.
//!
//! All allocators read the current graph and return a candidate name; they
//! never mutate. Suffixes are plain decimal integers appended to the
//! requested name.

use crate::model::{NamespaceId, TypeGraph, TypeId, TypeKind};

/// Words that cannot be used as bare member identifiers in generated code.
pub const RESERVED_WORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Prefix that escapes a reserved word.
pub const ESCAPE_PREFIX: &str = "@";

/// Returns true if the identifier is a reserved word, ignoring case.
#[must_use]
pub fn is_reserved(identifier: &str) -> bool {
    let lower = identifier.to_lowercase();
    RESERVED_WORDS.contains(&lower.as_str())
}

/// Uppercases the first letter and every letter that follows a non-letter.
///
/// `testcase` becomes `Testcase`, `html5element` becomes `Html5Element` and
/// `test_case` becomes `Test_Case`.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev: Option<char> = None;
    for (i, c) in s.chars().enumerate() {
        let upper = match prev {
            None => true,
            Some(p) => i >= 2 && c.is_alphabetic() && !p.is_alphabetic(),
        };
        if upper {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev = Some(c);
    }
    out
}

/// Lowercases the first character.
#[must_use]
pub fn to_camel_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Backing-field spelling for a property name.
#[must_use]
pub fn to_backing_field(property_name: &str, prefix: &str) -> String {
    format!("{prefix}{}", to_camel_case(property_name))
}

fn escaped_backing_field(property_name: &str, prefix: &str) -> String {
    let field = to_backing_field(property_name, prefix);
    if is_reserved(&field) {
        format!("{ESCAPE_PREFIX}{field}")
    } else {
        field
    }
}

/// Returns a type name not yet taken in the namespace.
///
/// Simple value carriers do not reserve their name.
#[must_use]
pub fn unique_type_name(graph: &TypeGraph, namespace: NamespaceId, name: &str) -> String {
    let ns = graph.namespace(namespace);
    let taken = |candidate: &str| {
        ns.get(candidate)
            .is_some_and(|id| !graph.get(id).is_simple())
    };

    let mut candidate = name.to_string();
    let mut i = 2;
    while taken(&candidate) {
        candidate = format!("{name}{i}");
        i += 1;
    }
    candidate
}

/// Returns a property name not used by the class's own, inherited or
/// interface-declared properties.
///
/// Non-class owners get the name unchanged.
#[must_use]
pub fn unique_property_name(graph: &TypeGraph, owner: TypeId, name: &str) -> String {
    if !matches!(graph.get(owner).kind, TypeKind::Class(_)) {
        return name.to_string();
    }

    let visible = graph.visible_property_names(owner);
    let mut candidate = name.to_string();
    let mut i = 2;
    while visible.contains(&candidate.as_str()) {
        candidate = format!("{name}{i}");
        i += 1;
    }
    candidate
}

/// Returns the backing-field name for a property of a class.
///
/// Reserved words are escaped. When earlier properties of the same class map
/// to the same spelling, the occurrence number (counting from the second
/// occurrence) is appended.
#[must_use]
pub fn unique_field_name(
    graph: &TypeGraph,
    owner: TypeId,
    property_index: usize,
    prefix: &str,
) -> String {
    let model = graph.get(owner);
    let properties = model.properties();
    let Some(property) = properties.get(property_index) else {
        return String::new();
    };
    if model.as_class().is_none() {
        return escaped_backing_field(&property.name, prefix);
    }

    let names: Vec<&str> = properties.iter().map(|p| p.name.as_str()).collect();
    let field = field_name_among(&names, property_index, prefix);
    tracing::trace!("Backing field {} on {}", field, model.name);
    field
}

/// Returns the backing-field name of the `index`-th entry of a list of
/// member names, appending the occurrence number when earlier entries map
/// to the same spelling.
#[must_use]
pub fn field_name_among(names: &[&str], index: usize, prefix: &str) -> String {
    let Some(name) = names.get(index) else {
        return String::new();
    };
    let field = escaped_backing_field(name, prefix);
    let occurrence = 1 + names[..index]
        .iter()
        .filter(|n| escaped_backing_field(n, prefix) == field)
        .count();

    if occurrence <= 1 {
        field
    } else {
        format!("{field}{occurrence}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClassModel, PropertyModel, TypeModel};
    use crate::HostType;

    fn class_with_properties(names: &[&str]) -> (TypeGraph, TypeId) {
        let mut graph = TypeGraph::new();
        let ns = graph.add_namespace("Test", "urn:test");
        let text = graph.builtin(HostType::String);
        let owner = graph.add_type(ns, TypeModel::new("Owner", TypeKind::Class(ClassModel::default())));
        for name in names {
            graph
                .add_property(owner, PropertyModel::new(*name, text))
                .unwrap();
        }
        (graph, owner)
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("testcase"), "Testcase");
        assert_eq!(to_pascal_case("html5element"), "Html5Element");
        assert_eq!(to_pascal_case("test_case"), "Test_Case");
        assert_eq!(to_pascal_case("_x"), "_x");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case_and_backing_field() {
        assert_eq!(to_camel_case("Value"), "value");
        assert_eq!(to_camel_case(""), "");
        assert_eq!(to_backing_field("OrderId", "_"), "_orderId");
        assert_eq!(to_backing_field("OrderId", ""), "orderId");
    }

    #[test]
    fn test_reserved_words_are_escaped() {
        let (graph, owner) = class_with_properties(&["Class", "Name"]);
        assert_eq!(unique_field_name(&graph, owner, 0, ""), "@class");
        assert_eq!(unique_field_name(&graph, owner, 1, ""), "name");
        assert_eq!(unique_field_name(&graph, owner, 0, "_"), "_class");
    }

    #[test]
    fn test_field_name_occurrence_suffix() {
        let (graph, owner) = class_with_properties(&["Value", "value", "Other", "VALUE", "value"]);
        assert_eq!(unique_field_name(&graph, owner, 0, "_"), "_value");
        assert_eq!(unique_field_name(&graph, owner, 1, "_"), "_value2");
        assert_eq!(unique_field_name(&graph, owner, 2, "_"), "_other");
        assert_eq!(unique_field_name(&graph, owner, 3, "_"), "_vALUE");
        assert_eq!(unique_field_name(&graph, owner, 4, "_"), "_value3");
    }

    #[test]
    fn test_field_name_among_plain_names() {
        let names = ["Name", "Name_2", "name"];
        assert_eq!(field_name_among(&names, 0, "_"), "_name");
        assert_eq!(field_name_among(&names, 1, "_"), "_name_2");
        assert_eq!(field_name_among(&names, 2, "_"), "_name2");
        assert_eq!(field_name_among(&names, 3, "_"), "");
    }

    #[test]
    fn test_field_name_is_stable() {
        let (graph, owner) = class_with_properties(&["Value", "value"]);
        let first = unique_field_name(&graph, owner, 1, "_");
        let second = unique_field_name(&graph, owner, 1, "_");
        assert_eq!(first, second);
    }

    #[test]
    fn test_unique_property_name_sequence() {
        let (mut graph, owner) = class_with_properties(&[]);
        let text = graph.builtin(HostType::String);
        let mut names = Vec::new();
        for _ in 0..4 {
            let idx = graph
                .add_property_unique(owner, PropertyModel::new("Item", text))
                .unwrap();
            names.push(graph.get(owner).properties()[idx].name.clone());
        }
        assert_eq!(names, vec!["Item", "Item2", "Item3", "Item4"]);
    }

    #[test]
    fn test_unique_type_name_returns_registered_name_for_new_namespace() {
        let mut graph = TypeGraph::new();
        let ns = graph.add_namespace("Test", "urn:test");
        assert_eq!(unique_type_name(&graph, ns, "Order"), "Order");
        graph.add_type(ns, TypeModel::new("Order", TypeKind::Class(ClassModel::default())));
        assert_eq!(unique_type_name(&graph, ns, "Order"), "Order2");
    }
}
