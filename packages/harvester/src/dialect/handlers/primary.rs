//! Primary dialect: `IntegratedConfiguration` items with nested mappings.

use roxmltree::Node;

use crate::config::PRIMARY_ITEM_TAG;
use crate::dialect::InterfaceDialect;
use crate::types::{FieldMapping, Interface};
use crate::xml::XmlQuery;

/// Handler for the primary configuration-item dialect.
///
/// ```xml
/// <IntegratedConfiguration id="ICO_Orders">
///   <Party>Shop</Party>        <!-- sender -->
///   <Party>ERP</Party>         <!-- receiver -->
///   <Adapter>SOAP</Adapter>
///   <Module>XMLAnonymizerBean</Module>
///   <Mapping>
///     <Source>OrderID</Source><Target>DocNum</Target><Program>MM_Order</Program>
///   </Mapping>
/// </IntegratedConfiguration>
/// ```
///
/// Sender and receiver are purely positional: the first `Party` is the
/// sender, the second the receiver, regardless of any role attribute.
pub struct PrimaryDialect;

impl InterfaceDialect for PrimaryDialect {
    fn name(&self) -> &'static str {
        "primary"
    }

    fn item_tag(&self) -> &'static str {
        PRIMARY_ITEM_TAG
    }

    fn extract_item(&self, item: Node<'_, '_>) -> Interface {
        let mut parties = item.texts_of("Party").into_iter();
        let sender = parties.next().unwrap_or_default();
        let receiver = parties.next().unwrap_or_default();

        Interface {
            id: item.attr("id"),
            sender,
            receiver,
            adapter: item.text_of("Adapter"),
            modules: item.texts_of("Module"),
            mappings: item
                .elements_named("Mapping")
                .into_iter()
                .map(field_mapping)
                .collect(),
        }
    }
}

fn field_mapping(node: Node<'_, '_>) -> FieldMapping {
    FieldMapping {
        source: node.text_of("Source"),
        target: node.text_of("Target"),
        program: node.text_of("Program"),
        name: None,
    }
}
