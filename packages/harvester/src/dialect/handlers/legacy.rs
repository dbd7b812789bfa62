//! Legacy dialect: flat `ICO` items identified by attributes.

use std::sync::LazyLock;

use roxmltree::Node;

use crate::config::LEGACY_ITEM_TAG;
use crate::dialect::InterfaceDialect;
use crate::types::Interface;
use crate::xml::{Selector, XmlQuery};

/// Sender candidates, in order of preference.
static SENDER_SELECTORS: LazyLock<Vec<Selector>> =
    LazyLock::new(|| parse_selectors(&["SenderParty[name]", "SenderComponent[name]"]));

/// Receiver candidates, in order of preference.
static RECEIVER_SELECTORS: LazyLock<Vec<Selector>> =
    LazyLock::new(|| parse_selectors(&["ReceiverParty[name]", "ReceiverComponent[name]"]));

#[allow(clippy::expect_used)] // Static selectors that are guaranteed to be valid
fn parse_selectors(sources: &[&str]) -> Vec<Selector> {
    sources
        .iter()
        .map(|source| source.parse().expect("valid selector"))
        .collect()
}

/// Handler for the older `ICO` item layout.
///
/// ```xml
/// <ICO name="ICO_Invoices">
///   <SenderComponent name="BS_Shop"/>
///   <ReceiverParty name="ERP"/>
///   <AdapterType>IDOC</AdapterType>
///   <ModuleName>CallSapAdapter</ModuleName>
/// </ICO>
/// ```
///
/// Items of this dialect never carry nested mappings.
pub struct LegacyDialect;

impl InterfaceDialect for LegacyDialect {
    fn name(&self) -> &'static str {
        "legacy"
    }

    fn item_tag(&self) -> &'static str {
        LEGACY_ITEM_TAG
    }

    fn extract_item(&self, item: Node<'_, '_>) -> Interface {
        let id = Some(item.attr("id"))
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| item.attr("name"));

        Interface {
            id,
            sender: party_name(item, &SENDER_SELECTORS),
            receiver: party_name(item, &RECEIVER_SELECTORS),
            adapter: item.text_of("AdapterType"),
            modules: item.texts_of("ModuleName"),
            mappings: Vec::new(),
        }
    }
}

/// `name` attribute of the first candidate that has a non-empty one.
fn party_name(item: Node<'_, '_>, candidates: &[Selector]) -> String {
    candidates
        .iter()
        .filter_map(|selector| item.select_first(selector))
        .map(|node| node.attr("name"))
        .find(|name| !name.is_empty())
        .unwrap_or_default()
}
