//! Registry holding the dialect handlers in priority order.

use roxmltree::Node;

use super::handler::InterfaceDialect;
use crate::types::Interface;
use crate::xml::XmlQuery;

/// Ordered collection of interface dialects.
///
/// Output keeps registration order: every interface of the first dialect,
/// then every interface of the second, and so on. Nothing is merged or
/// deduplicated across dialects.
pub struct DialectRegistry {
    dialects: Vec<Box<dyn InterfaceDialect>>,
}

impl DialectRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dialects: Vec::new(),
        }
    }

    /// Register a dialect after the ones already present.
    pub fn register(&mut self, dialect: impl InterfaceDialect + 'static) {
        self.dialects.push(Box::new(dialect));
    }

    /// Item tags of the registered dialects, in order.
    #[must_use]
    pub fn item_tags(&self) -> Vec<&'static str> {
        self.dialects.iter().map(|d| d.item_tag()).collect()
    }

    /// Run every dialect over the tree below `root`.
    pub fn extract(&self, root: Node<'_, '_>) -> Vec<Interface> {
        let mut interfaces = Vec::new();

        for dialect in &self.dialects {
            let items = root.elements_named(dialect.item_tag());
            tracing::debug!(
                dialect = dialect.name(),
                items = items.len(),
                "Extracting configuration items"
            );
            interfaces.extend(items.into_iter().map(|item| dialect.extract_item(item)));
        }

        interfaces
    }

    /// Number of registered dialects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dialects.len()
    }

    /// Check whether no dialect is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dialects.is_empty()
    }
}

impl Default for DialectRegistry {
    fn default() -> Self {
        Self::new()
    }
}
