//! XML utility functions for navigating and extracting data from DOM trees.

use roxmltree::Node;

/// Get the tag name without namespace.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use integration_harvester::xml::get_tag_name;
///
/// let xml = r#"<root><Party>Acme</Party></root>"#;
/// let doc = Document::parse(xml).unwrap();
/// let party = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(party), "Party");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Check if a node is an element with the given local name.
pub fn has_tag(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && get_tag_name(node) == tag
}

/// Get the direct text content of a node, trimmed.
///
/// All direct text children are joined, so comments or child elements
/// between text runs do not hide any of it. Returns an empty string when
/// the node has no text.
pub fn get_text(node: Node<'_, '_>) -> String {
    let text: String = node
        .children()
        .filter(|child| child.is_text())
        .filter_map(|child| child.text())
        .collect();
    text.trim().to_string()
}

/// Get an attribute value, or an empty string when it is absent.
pub fn attribute_or_empty(node: Node<'_, '_>, name: &str) -> String {
    node.attribute(name).unwrap_or_default().to_string()
}
