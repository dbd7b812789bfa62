//! Interface dialect trait definition.

use roxmltree::Node;

use crate::types::Interface;

/// Trait for configuration-item dialect handlers.
///
/// A handler owns one container tag and turns each matching element into an
/// [`Interface`]. Handlers never look at elements outside the item they are
/// given.
pub trait InterfaceDialect: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Local tag name of the item container this dialect reads.
    fn item_tag(&self) -> &'static str;

    /// Build an interface from one item container.
    fn extract_item(&self, item: Node<'_, '_>) -> Interface;
}
