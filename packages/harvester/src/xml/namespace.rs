//! Namespace stripping for exported XML.
//!
//! Exporting tools disagree on namespace prefixes (`p1:`, `ns0:`, none at
//! all). Removing declarations and prefixes before parsing lets every
//! extractor look elements up by local name only.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Matches comments, CDATA sections and processing instructions (copied
/// verbatim) or a start/end tag with its attribute list.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static MARKUP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)<!--.*?-->|<!\[CDATA\[.*?\]\]>|<\?.*?\?>|<(?P<close>/?)(?P<name>[A-Za-z_][\w.\-:]*)(?P<attrs>(?:\s+[^\s=/>]+\s*=\s*(?:"[^"]*"|'[^']*'))*)(?P<tail>\s*/?>)"#,
    )
    .expect("valid regex")
});

/// Matches a single attribute inside a tag's attribute list.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ATTRIBUTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?P<ws>\s+)(?P<name>[^\s=/>]+)(?P<eq>\s*=\s*)(?P<value>"[^"]*"|'[^']*')"#)
        .expect("valid regex")
});

/// Strip namespace declarations and prefixes from XML text.
///
/// Removes every `xmlns` and `xmlns:prefix` attribute and reduces
/// `prefix:Local` element and attribute names to `Local`. Attribute values,
/// text content, comments, CDATA and processing instructions are untouched.
/// Applying it twice yields the same text as applying it once.
///
/// # Examples
/// ```
/// use integration_harvester::xml::strip_namespaces;
///
/// let xml = r#"<p1:Root xmlns:p1="urn:x"><p1:Item p1:id="a:b">v</p1:Item></p1:Root>"#;
/// assert_eq!(strip_namespaces(xml), r#"<Root><Item id="a:b">v</Item></Root>"#);
/// ```
pub fn strip_namespaces(xml: &str) -> String {
    MARKUP_RE
        .replace_all(xml, |caps: &Captures<'_>| match caps.name("name") {
            Some(name) => rewrite_tag(caps, name.as_str()),
            None => caps[0].to_string(),
        })
        .into_owned()
}

fn rewrite_tag(caps: &Captures<'_>, name: &str) -> String {
    let close = caps.name("close").map_or("", |m| m.as_str());
    let attrs = caps.name("attrs").map_or("", |m| m.as_str());
    let tail = caps.name("tail").map_or(">", |m| m.as_str());

    format!(
        "<{close}{}{}{tail}",
        local_name(name),
        rewrite_attributes(attrs)
    )
}

fn rewrite_attributes(attrs: &str) -> Cow<'_, str> {
    if attrs.is_empty() {
        return Cow::Borrowed(attrs);
    }

    ATTRIBUTE_RE.replace_all(attrs, |caps: &Captures<'_>| {
        let name = &caps["name"];
        if is_namespace_declaration(name) {
            return String::new();
        }
        format!(
            "{}{}{}{}",
            &caps["ws"],
            local_name(name),
            &caps["eq"],
            &caps["value"]
        )
    })
}

/// `xmlns`, `xmlns:p`, and prefixed names whose local part is `xmlns`.
fn is_namespace_declaration(name: &str) -> bool {
    name == "xmlns" || name.starts_with("xmlns:") || local_name(name) == "xmlns"
}

fn local_name(name: &str) -> &str {
    name.rsplit(':').next().unwrap_or(name)
}
