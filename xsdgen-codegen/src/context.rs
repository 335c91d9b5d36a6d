//! Shared state of one generation pass.

use crate::config::{CollectionKind, GeneratorConfig};
use crate::decl::{Member, Qualification, TypeDeclaration, TypeRef};
use crate::visitor::{DeclarationVisitor, MemberContext};
use xsdgen_schema::{
    HostType, NamespaceId, TypeCode, TypeGraph, TypeId, TypeKind, TypeModel, TypeResolver,
};

/// Read-only view over the graph, configuration and visitors.
pub struct GenerationContext<'a> {
    /// Type graph being generated.
    pub graph: &'a TypeGraph,
    /// Frozen configuration.
    pub config: &'a GeneratorConfig,
    /// Resolver over the configuration's resolver options.
    pub resolver: TypeResolver<'a>,
    visitors: &'a [Box<dyn DeclarationVisitor + 'a>],
}

impl<'a> GenerationContext<'a> {
    /// Creates a context.
    #[must_use]
    pub fn new(
        graph: &'a TypeGraph,
        config: &'a GeneratorConfig,
        visitors: &'a [Box<dyn DeclarationVisitor + 'a>],
    ) -> Self {
        Self {
            graph,
            config,
            resolver: TypeResolver::new(&config.resolver),
            visitors,
        }
    }

    /// Effective host type of a value carrier; `None` for other kinds.
    #[must_use]
    pub fn effective_type(&self, id: TypeId, is_attribute: bool) -> Option<HostType> {
        let simple = self.graph.get(id).as_simple()?;
        Some(match &simple.datatype {
            Some(datatype) => {
                self.resolver
                    .resolve_effective_type(datatype, &simple.restrictions, is_attribute)
            }
            None => simple.value_type.clone(),
        })
    }

    /// Returns true for enums and value-typed carriers.
    #[must_use]
    pub fn is_value_kind(&self, id: TypeId, is_attribute: bool) -> bool {
        match &self.graph.get(id).kind {
            TypeKind::Enum(_) => true,
            TypeKind::Simple(_) => self
                .effective_type(id, is_attribute)
                .is_some_and(|t| t.is_value_type()),
            _ => false,
        }
    }

    /// Returns the datatype code of a value carrier.
    #[must_use]
    pub fn type_code(&self, id: TypeId) -> Option<TypeCode> {
        self.graph
            .get(id)
            .as_simple()
            .and_then(|s| s.datatype.as_ref())
            .map(|d| d.type_code)
    }

    /// Schema built-in name to carry as a data type annotation argument.
    #[must_use]
    pub fn data_type_name(&self, id: TypeId) -> Option<&'static str> {
        let datatype = self.graph.get(id).as_simple()?.datatype.as_ref()?;
        if datatype.type_code == TypeCode::AnySimpleType
            || !self.resolver.data_type_annotation_allowed(datatype)
        {
            return None;
        }
        Some(datatype.type_code.xsd_name())
    }

    /// Builds a reference to a type as seen from a namespace.
    ///
    /// # Arguments
    /// * `target` - Referenced type
    /// * `referencing` - Namespace of the referencing declaration, `None` for
    ///   expressions that are always qualified
    /// * `collection` - Wrap in the configured collection
    /// * `for_init` - Use the collection implementation type
    /// * `is_attribute` - Resolve value carriers for attribute position
    #[must_use]
    pub fn type_ref(
        &self,
        target: TypeId,
        referencing: Option<NamespaceId>,
        collection: bool,
        for_init: bool,
        is_attribute: bool,
    ) -> TypeRef {
        let model = self.graph.get(target);
        let element = match self.effective_type(target, is_attribute) {
            Some(host) => TypeRef::Host(host),
            None => self.named_ref(model, referencing),
        };

        if !collection {
            return element;
        }
        match &self.config.collection {
            CollectionKind::Array => TypeRef::Array(Box::new(element)),
            kind => TypeRef::Collection {
                collection: kind.type_name(for_init).unwrap_or_default().to_string(),
                element: Box::new(element),
            },
        }
    }

    fn named_ref(&self, model: &TypeModel, referencing: Option<NamespaceId>) -> TypeRef {
        let namespace = model
            .namespace
            .map(|ns| self.graph.namespace(ns).name.clone())
            .unwrap_or_default();

        let qualification = if referencing.is_some() && referencing == model.namespace {
            Qualification::Local
        } else if referencing
            .or(model.namespace)
            .is_some_and(|ns| self.graph.namespace(ns).is_ambiguous)
        {
            Qualification::Global
        } else {
            Qualification::Namespace
        };

        TypeRef::Named {
            namespace,
            name: model.name.clone(),
            qualification,
        }
    }

    /// Applies member visitors in order.
    pub fn visit_member(&self, member: &mut Member, context: &MemberContext<'_>) {
        for visitor in self.visitors {
            visitor.visit_member(member, context);
        }
    }

    /// Applies type visitors in order.
    pub fn visit_type(&self, decl: &mut TypeDeclaration, model: &TypeModel) {
        for visitor in self.visitors {
            visitor.visit_type(decl, model);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xsdgen_schema::{ClassModel, Datatype, RestrictionSet, SimpleModel};

    fn simple(code: TypeCode) -> TypeModel {
        TypeModel::new(
            code.xsd_name(),
            TypeKind::Simple(SimpleModel::from_datatype(
                Datatype::atomic(code),
                RestrictionSet::new(),
            )),
        )
    }

    #[test]
    fn test_type_ref_qualification() {
        let mut graph = TypeGraph::new();
        let a = graph.add_namespace("A", "urn:a");
        let b = graph.add_namespace("B", "urn:b");
        let order = graph.add_type(a, TypeModel::new("Order", TypeKind::Class(ClassModel::default())));
        let config = GeneratorConfig::default();
        let ctx = GenerationContext::new(&graph, &config, &[]);

        let local = ctx.type_ref(order, Some(a), false, false, false);
        assert!(matches!(local, TypeRef::Named { qualification: Qualification::Local, .. }));

        let other = ctx.type_ref(order, Some(b), false, false, false);
        assert!(matches!(other, TypeRef::Named { qualification: Qualification::Namespace, .. }));

        graph.namespace_mut(b).is_ambiguous = true;
        let ctx = GenerationContext::new(&graph, &config, &[]);
        let ambiguous = ctx.type_ref(order, Some(b), false, false, false);
        assert!(matches!(ambiguous, TypeRef::Named { qualification: Qualification::Global, .. }));
    }

    #[test]
    fn test_type_ref_collections() {
        let mut graph = TypeGraph::new();
        let ns = graph.add_namespace("A", "urn:a");
        let int = graph.add_type(ns, simple(TypeCode::Int));

        let config = GeneratorConfig::default().collection(CollectionKind::Generic {
            definition: "IList".to_string(),
            implementation: Some("List".to_string()),
        });
        let ctx = GenerationContext::new(&graph, &config, &[]);
        assert_eq!(
            ctx.type_ref(int, Some(ns), true, false, false),
            TypeRef::Collection {
                collection: "IList".to_string(),
                element: Box::new(TypeRef::Host(HostType::I32)),
            }
        );
        assert_eq!(
            ctx.type_ref(int, Some(ns), true, true, false),
            TypeRef::Collection {
                collection: "List".to_string(),
                element: Box::new(TypeRef::Host(HostType::I32)),
            }
        );

        let config = GeneratorConfig::default().collection(CollectionKind::Array);
        let ctx = GenerationContext::new(&graph, &config, &[]);
        assert_eq!(
            ctx.type_ref(int, Some(ns), true, false, false),
            TypeRef::Array(Box::new(TypeRef::Host(HostType::I32)))
        );
    }

    #[test]
    fn test_data_type_name() {
        let mut graph = TypeGraph::new();
        let ns = graph.add_namespace("A", "urn:a");
        let date = graph.add_type(ns, simple(TypeCode::Date));
        let text = graph.add_type(ns, simple(TypeCode::String));
        let stamp = graph.add_type(ns, simple(TypeCode::DateTime));

        let config = GeneratorConfig::default();
        let ctx = GenerationContext::new(&graph, &config, &[]);
        assert_eq!(ctx.data_type_name(date), Some("date"));
        assert_eq!(ctx.data_type_name(text), None);
        assert_eq!(ctx.data_type_name(stamp), Some("dateTime"));

        let config = GeneratorConfig::default().date_time_offset(true);
        let ctx = GenerationContext::new(&graph, &config, &[]);
        assert_eq!(ctx.data_type_name(stamp), None);
    }
}
