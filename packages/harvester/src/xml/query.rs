//! Namespace-agnostic element lookup.
//!
//! Extractors navigate documents only through [`XmlQuery`], which works on
//! local tag names and a small selector syntax: `Tag`, `Tag[attr]` and
//! `Tag[attr=value]`.

use std::fmt;
use std::str::FromStr;

use roxmltree::Node;

use super::utils::{attribute_or_empty, get_text, has_tag};
use crate::error::{HarvesterError, Result};

/// Attribute condition of a [`Selector`].
#[derive(Debug, Clone, PartialEq, Eq)]
enum AttributeFilter {
    Present(String),
    Equals(String, String),
}

/// A simple element selector: a local tag name optionally qualified by an
/// attribute.
///
/// # Examples
/// ```
/// use integration_harvester::xml::Selector;
///
/// let selector: Selector = "SenderParty[name]".parse().unwrap();
/// assert_eq!(selector.tag(), "SenderParty");
/// assert!("[name]".parse::<Selector>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    tag: String,
    attribute: Option<AttributeFilter>,
}

impl Selector {
    /// Select elements by tag name only.
    #[must_use]
    pub fn tag_only(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attribute: None,
        }
    }

    /// Additionally require the attribute to be present.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>) -> Self {
        self.attribute = Some(AttributeFilter::Present(name.into()));
        self
    }

    /// Additionally require the attribute to have the given value.
    #[must_use]
    pub fn with_attribute_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attribute = Some(AttributeFilter::Equals(name.into(), value.into()));
        self
    }

    /// The local tag name this selector matches.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Check whether an element matches this selector.
    pub fn matches(&self, node: Node<'_, '_>) -> bool {
        if !has_tag(node, &self.tag) {
            return false;
        }
        match &self.attribute {
            None => true,
            Some(AttributeFilter::Present(name)) => node.has_attribute(name.as_str()),
            Some(AttributeFilter::Equals(name, value)) => {
                node.attribute(name.as_str()) == Some(value.as_str())
            }
        }
    }
}

impl FromStr for Selector {
    type Err = HarvesterError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| HarvesterError::InvalidSelector {
            selector: s.to_string(),
            reason: reason.to_string(),
        };

        let s = s.trim();
        let (tag, filter) = match s.split_once('[') {
            None => (s, None),
            Some((tag, rest)) => {
                let inner = rest
                    .strip_suffix(']')
                    .ok_or_else(|| invalid("missing closing ']'"))?;
                (tag, Some(inner.trim()))
            }
        };

        if !is_name(tag) {
            return Err(invalid("tag name must be a non-empty XML name"));
        }

        let selector = Selector::tag_only(tag);
        let Some(filter) = filter else {
            return Ok(selector);
        };

        match filter.split_once('=') {
            None if is_name(filter) => Ok(selector.with_attribute(filter)),
            None => Err(invalid("attribute name must be a non-empty XML name")),
            Some((name, value)) => {
                let name = name.trim();
                if !is_name(name) {
                    return Err(invalid("attribute name must be a non-empty XML name"));
                }
                Ok(selector.with_attribute_value(name, unquote(value.trim())))
            }
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.attribute {
            None => write!(f, "{}", self.tag),
            Some(AttributeFilter::Present(name)) => write!(f, "{}[{name}]", self.tag),
            Some(AttributeFilter::Equals(name, value)) => {
                write!(f, "{}[{name}=\"{value}\"]", self.tag)
            }
        }
    }
}

fn is_name(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .unwrap_or(value)
}

/// Lookups an extractor may perform on an element.
///
/// Every lookup searches the element's descendants (never the element
/// itself) by local tag name, and every text or attribute read falls back to
/// an empty string.
pub trait XmlQuery<'a, 'input: 'a>: Copy {
    /// All descendant elements with the given tag, in document order.
    fn elements_named(self, tag: &str) -> Vec<Node<'a, 'input>>;

    /// The first descendant element matching the selector.
    fn select_first(self, selector: &Selector) -> Option<Node<'a, 'input>>;

    /// Direct text of the first descendant with the given tag.
    fn text_of(self, tag: &str) -> String {
        self.select_first(&Selector::tag_only(tag))
            .map(get_text)
            .unwrap_or_default()
    }

    /// Direct text of every descendant with the given tag.
    fn texts_of(self, tag: &str) -> Vec<String> {
        self.elements_named(tag).into_iter().map(get_text).collect()
    }

    /// Attribute of the element itself.
    fn attr(self, name: &str) -> String;
}

impl<'a, 'input> XmlQuery<'a, 'input> for Node<'a, 'input> {
    fn elements_named(self, tag: &str) -> Vec<Node<'a, 'input>> {
        self.descendants()
            .skip(1)
            .filter(|node| has_tag(*node, tag))
            .collect()
    }

    fn select_first(self, selector: &Selector) -> Option<Node<'a, 'input>> {
        self.descendants()
            .skip(1)
            .find(|node| selector.matches(*node))
    }

    fn attr(self, name: &str) -> String {
        attribute_or_empty(self, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    const SAMPLE: &str = r#"<ICO name="Orders">
        <SenderParty/>
        <SenderParty name="ACME"/>
        <Adapter kind="SOAP">SOAP</Adapter>
        <Adapter kind="REST">REST</Adapter>
        <ModuleName>a</ModuleName>
        <Nested><ModuleName>b</ModuleName></Nested>
    </ICO>"#;

    #[test]
    fn test_parse_tag_only() {
        let selector: Selector = "Adapter".parse().unwrap();
        assert_eq!(selector, Selector::tag_only("Adapter"));
    }

    #[test]
    fn test_parse_attribute_forms() {
        let present: Selector = "SenderParty[name]".parse().unwrap();
        assert_eq!(present, Selector::tag_only("SenderParty").with_attribute("name"));

        let quoted: Selector = r#"Adapter[kind="REST"]"#.parse().unwrap();
        assert_eq!(
            quoted,
            Selector::tag_only("Adapter").with_attribute_value("kind", "REST")
        );

        let bare: Selector = "Adapter[kind=REST]".parse().unwrap();
        assert_eq!(bare, quoted);
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert!("".parse::<Selector>().is_err());
        assert!("Adapter[kind".parse::<Selector>().is_err());
        assert!("Adapter[]".parse::<Selector>().is_err());
        assert!("Bad Tag".parse::<Selector>().is_err());
        assert!("Adapter[=x]".parse::<Selector>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        let selector = Selector::tag_only("Adapter").with_attribute_value("kind", "REST");
        assert_eq!(selector.to_string(), r#"Adapter[kind="REST"]"#);
        assert_eq!(selector.to_string().parse::<Selector>().unwrap(), selector);
    }

    #[test]
    fn test_select_first_honours_attribute() {
        let doc = Document::parse(SAMPLE).unwrap();
        let ico = doc.root_element();

        let sender = ico
            .select_first(&"SenderParty[name]".parse().unwrap())
            .unwrap();
        assert_eq!(sender.attr("name"), "ACME");

        let rest = ico
            .select_first(&"Adapter[kind=REST]".parse().unwrap())
            .unwrap();
        assert_eq!(get_text(rest), "REST");
    }

    #[test]
    fn test_text_helpers() {
        let doc = Document::parse(SAMPLE).unwrap();
        let ico = doc.root_element();

        assert_eq!(ico.text_of("Adapter"), "SOAP");
        assert_eq!(ico.text_of("Missing"), "");
        assert_eq!(ico.texts_of("ModuleName"), vec!["a", "b"]);
        assert_eq!(ico.attr("name"), "Orders");
        assert_eq!(ico.attr("id"), "");
    }

    fn adapter_summary<'a, 'input: 'a>(item: impl XmlQuery<'a, 'input>) -> (String, Vec<String>) {
        (item.text_of("Adapter"), item.texts_of("Adapter"))
    }

    #[test]
    fn test_default_methods_through_trait_bound() {
        let doc = Document::parse(SAMPLE).unwrap();

        let (first, all) = adapter_summary(doc.root_element());
        assert_eq!(first, "SOAP");
        assert_eq!(all, vec!["SOAP", "REST"]);
    }

    #[test]
    fn test_elements_named_excludes_self() {
        let doc = Document::parse("<ICO><ICO/></ICO>").unwrap();
        assert_eq!(doc.root_element().elements_named("ICO").len(), 1);
    }
}
