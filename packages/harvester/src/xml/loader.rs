//! Loading exported XML into a navigable tree.

use roxmltree::Document;

use super::namespace::strip_namespaces;
use crate::error::Result;

/// XML text with namespaces already stripped, ready to be parsed.
///
/// The parsed [`Document`] borrows from this value, so keep it alive for as
/// long as the tree is in use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedXml {
    text: String,
}

impl NormalizedXml {
    /// Strip namespaces from raw XML text.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            text: strip_namespaces(raw),
        }
    }

    /// The normalized text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Parse the normalized text.
    ///
    /// # Errors
    /// Returns `HarvesterError::MalformedDocument` when the text is not
    /// well-formed XML.
    pub fn parse(&self) -> Result<Document<'_>> {
        load_document(&self.text)
    }
}

/// Parse XML text into a document tree.
///
/// # Examples
/// ```
/// use integration_harvester::xml::load_document;
///
/// assert!(load_document("<Root/>").is_ok());
/// assert!(load_document("<Root>").is_err());
/// ```
pub fn load_document(text: &str) -> Result<Document<'_>> {
    Ok(Document::parse(text)?)
}
