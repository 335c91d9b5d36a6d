//! Receivers of finished declaration requests.

use crate::decl::{NamespaceDeclaration, TypeDeclaration};
use crate::error::CodegenError;

/// Receives one declaration request per namespace.
pub trait DeclarationSink {
    /// Accepts a finished namespace.
    ///
    /// # Errors
    /// Returns `CodegenError` if the backend rejects the declarations.
    fn accept(&mut self, namespace: NamespaceDeclaration) -> Result<(), CodegenError>;
}

/// Sink that keeps every namespace in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    namespaces: Vec<NamespaceDeclaration>,
}

impl CollectingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the collected namespaces in acceptance order.
    #[must_use]
    pub fn namespaces(&self) -> &[NamespaceDeclaration] {
        &self.namespaces
    }

    /// Looks up a collected namespace by name.
    #[must_use]
    pub fn namespace(&self, name: &str) -> Option<&NamespaceDeclaration> {
        self.namespaces.iter().find(|n| n.name == name)
    }

    /// Looks up a type declaration by name across all namespaces.
    #[must_use]
    pub fn find_type(&self, name: &str) -> Option<&TypeDeclaration> {
        self.namespaces.iter().find_map(|n| n.get(name))
    }

    /// Consumes the sink, returning the collected namespaces.
    #[must_use]
    pub fn into_namespaces(self) -> Vec<NamespaceDeclaration> {
        self.namespaces
    }
}

impl DeclarationSink for CollectingSink {
    fn accept(&mut self, namespace: NamespaceDeclaration) -> Result<(), CodegenError> {
        tracing::trace!(
            "Collected namespace {} with {} types",
            namespace.name,
            namespace.types.len()
        );
        self.namespaces.push(namespace);
        Ok(())
    }
}
