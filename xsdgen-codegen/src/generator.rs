//! Generation pass over a type graph.

use crate::config::GeneratorConfig;
use crate::context::GenerationContext;
use crate::decl::NamespaceDeclaration;
use crate::emit::{ClassGenerator, EnumGenerator, InterfaceGenerator};
use crate::error::CodegenError;
use crate::sink::DeclarationSink;
use crate::visitor::DeclarationVisitor;
use xsdgen_schema::{
    Documentation, HostType, PropertyModel, TypeGraph, TypeId, TypeKind, validate_graph,
};

/// Main code generator.
///
/// Runs one synchronous pass: validates the graph, settles entity keys, then
/// hands one declaration request per namespace to the sink. Duplicate
/// property names are settled per class during generation and never written
/// back to the graph.
pub struct Generator<'c> {
    config: GeneratorConfig,
    visitors: Vec<Box<dyn DeclarationVisitor + 'c>>,
}

impl<'c> Generator<'c> {
    /// Creates a new generator.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            visitors: Vec::new(),
        }
    }

    /// Registers a visitor; visitors run in registration order.
    #[must_use]
    pub fn with_visitor(mut self, visitor: impl DeclarationVisitor + 'c) -> Self {
        self.visitors.push(Box::new(visitor));
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates declarations for every non-simple type of the graph.
    ///
    /// With entity framework output enabled, root classes without an id
    /// property get an `Id` key property inserted into the graph; a second
    /// pass finds it and produces the same declarations.
    ///
    /// # Errors
    /// Returns `CodegenError` if the graph is inconsistent, a default value
    /// cannot be converted, or the sink rejects a namespace.
    pub fn generate(
        &self,
        graph: &mut TypeGraph,
        sink: &mut dyn DeclarationSink,
    ) -> Result<(), CodegenError> {
        validate_graph(graph)?;

        if self.config.entity_framework {
            let classes: Vec<TypeId> = graph
                .types()
                .filter(|(_, t)| t.namespace.is_some() && t.as_class().is_some())
                .map(|(id, _)| id)
                .collect();
            for id in classes {
                assign_entity_key(graph, id);
            }
        }

        let graph: &TypeGraph = graph;
        let ctx = GenerationContext::new(graph, &self.config, &self.visitors);
        let classes = ClassGenerator::new(&ctx);
        let enums = EnumGenerator::new(&ctx);
        let interfaces = InterfaceGenerator::new(&ctx);

        for (_, namespace) in graph.namespaces() {
            let mut declarations = NamespaceDeclaration {
                name: namespace.name.clone(),
                types: Vec::new(),
            };

            for (name, id) in namespace.types() {
                let decl = match &graph.get(id).kind {
                    TypeKind::Class(_) => classes.generate(id)?,
                    TypeKind::Interface(_) => interfaces.generate(id)?,
                    TypeKind::Enum(_) => enums.generate(id)?,
                    TypeKind::Simple(_) => {
                        tracing::trace!("Skipping value carrier {} in {}", name, namespace.name);
                        continue;
                    }
                };
                tracing::debug!("Generated {} {} in {}", graph.get(id).kind_name(), name, namespace.name);
                declarations.types.push(decl);
            }

            sink.accept(declarations)?;
        }

        Ok(())
    }
}

/// Marks the entity key of a root class, inserting an `Id` property when no
/// property named `id` or `<class>id` exists.
fn assign_entity_key(graph: &mut TypeGraph, id: TypeId) {
    let model = graph.get(id);
    let base_is_class = model
        .as_class()
        .and_then(|c| c.base)
        .is_some_and(|b| graph.get(b).as_class().is_some());
    if base_is_class {
        return;
    }

    let class_id = format!("{}id", model.name.to_lowercase());
    let properties = model.properties();
    let existing = properties
        .iter()
        .position(|p| p.name.to_lowercase() == "id")
        .or_else(|| {
            properties
                .iter()
                .position(|p| p.name.to_lowercase() == class_id)
        });

    let key_type = if existing.is_none() {
        Some(graph.builtin(HostType::I64))
    } else {
        None
    };

    let TypeKind::Class(class) = &mut graph.get_mut(id).kind else {
        return;
    };
    let index = match (existing, key_type) {
        (Some(index), _) => index,
        (None, Some(key_type)) => {
            let mut key = PropertyModel::new("Id", key_type);
            key.owning_type = Some(id);
            key.documentation.push(Documentation::new(
                Some("en"),
                "Gets or sets a value uniquely identifying this entity.",
            ));
            class.properties.insert(0, key);
            0
        }
        (None, None) => return,
    };
    class.properties[index].is_key = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::CollectingSink;
    use xsdgen_schema::{ClassModel, TypeModel};

    #[test]
    fn test_entity_key_prefers_existing_id() {
        let mut graph = TypeGraph::new();
        let ns = graph.add_namespace("Ns", "urn:ns");
        let int = graph.builtin(HostType::I32);
        let order = graph.add_type(ns, TypeModel::new("Order", TypeKind::Class(ClassModel::default())));
        graph.add_property(order, PropertyModel::new("Total", int)).unwrap();
        graph.add_property(order, PropertyModel::new("OrderID", int)).unwrap();
        let plain = graph.add_type(ns, TypeModel::new("Plain", TypeKind::Class(ClassModel::default())));
        graph.add_property(plain, PropertyModel::new("Total", int)).unwrap();

        assign_entity_key(&mut graph, order);
        assign_entity_key(&mut graph, plain);

        let order_props = graph.get(order).properties();
        assert_eq!(order_props.len(), 2);
        assert!(order_props[1].is_key);

        let plain_props = graph.get(plain).properties();
        assert_eq!(plain_props.len(), 2);
        assert_eq!(plain_props[0].name, "Id");
        assert!(plain_props[0].is_key);
        assert_eq!(plain_props[0].owning_type, Some(plain));
        assert_eq!(
            graph.get(plain_props[0].type_id).as_simple().map(|s| &s.value_type),
            Some(&HostType::I64)
        );
    }

    #[test]
    fn test_generate_skips_value_carriers() {
        let mut graph = TypeGraph::new();
        let ns = graph.add_namespace("Ns", "urn:ns");
        let text = graph.builtin(HostType::String);
        graph.add_type(
            ns,
            TypeModel::new("Code", TypeKind::Simple(xsdgen_schema::SimpleModel::host(HostType::String))),
        );
        let item = graph.add_type(ns, TypeModel::new("Item", TypeKind::Class(ClassModel::default())));
        graph.add_property(item, PropertyModel::new("Name", text)).unwrap();

        let mut sink = CollectingSink::new();
        Generator::new(GeneratorConfig::default())
            .generate(&mut graph, &mut sink)
            .unwrap();

        let namespace = sink.namespace("Ns").unwrap();
        assert_eq!(namespace.types.len(), 1);
        assert_eq!(namespace.types[0].name, "Item");
    }
}
