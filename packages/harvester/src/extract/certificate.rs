//! Certificate extraction from configuration XML and PEM bundles.
//!
//! PEM blocks are only located, never decoded: the subject of a PEM-derived
//! certificate is a fixed-length prefix of the block itself.

use std::sync::LazyLock;

use regex::Regex;
use roxmltree::Node;

use crate::config::{
    truncate_chars, CERTIFICATE_TAG, PEM_ALIAS_PREFIX, PEM_SUBJECT_CHARS, XML_ALIAS_PREFIX,
};
use crate::types::{Certificate, ValidityWindow};
use crate::xml::XmlQuery;

/// One PEM certificate block, delimiters included.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PEM_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)-----BEGIN CERTIFICATE-----.*?-----END CERTIFICATE-----")
        .expect("valid regex")
});

/// Extract certificates declared in a configuration export.
///
/// Reads `Alias`, `Subject`, `ValidFrom` and `ValidTo` child text. A
/// certificate without an alias is named `cert-<n>` after its position.
pub fn extract_xml_certificates(root: Node<'_, '_>) -> Vec<Certificate> {
    root.elements_named(CERTIFICATE_TAG)
        .into_iter()
        .enumerate()
        .map(|(index, cert)| {
            let alias = cert.text_of("Alias");
            Certificate {
                alias: if alias.is_empty() {
                    format!("{XML_ALIAS_PREFIX}{index}")
                } else {
                    alias
                },
                subject: cert.text_of("Subject"),
                validity: Some(ValidityWindow {
                    from: cert.text_of("ValidFrom"),
                    to: cert.text_of("ValidTo"),
                }),
            }
        })
        .collect()
}

/// Extract every PEM certificate block from raw text.
///
/// Blocks are numbered `pem-0`, `pem-1`, … in textual order.
///
/// # Examples
/// ```
/// use integration_harvester::extract::extract_pem_certificates;
///
/// let pem = "-----BEGIN CERTIFICATE-----\nMIIB\n-----END CERTIFICATE-----\n";
/// let certs = extract_pem_certificates(pem);
/// assert_eq!(certs.len(), 1);
/// assert_eq!(certs[0].alias, "pem-0");
/// assert!(certs[0].subject.starts_with("-----BEGIN CERTIFICATE-----"));
/// ```
pub fn extract_pem_certificates(text: &str) -> Vec<Certificate> {
    PEM_BLOCK_RE
        .find_iter(text)
        .enumerate()
        .map(|(index, block)| Certificate {
            alias: format!("{PEM_ALIAS_PREFIX}{index}"),
            subject: truncate_chars(block.as_str(), PEM_SUBJECT_CHARS),
            validity: None,
        })
        .collect()
}
