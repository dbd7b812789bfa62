//! Configuration constants for the harvester.
//!
//! Tag names, attribute names and size limits that the extractors and the
//! dispatcher agree on. Lookups happen after namespace stripping, so every
//! name here is a local name.

/// Primary-dialect configuration item container.
pub const PRIMARY_ITEM_TAG: &str = "IntegratedConfiguration";

/// Legacy-dialect configuration item container.
pub const LEGACY_ITEM_TAG: &str = "ICO";

/// Partner record element, shared by embedded and directory documents.
pub const PARTNER_TAG: &str = "Partner";

/// Certificate record element in configuration documents.
pub const CERTIFICATE_TAG: &str = "Certificate";

/// Number of characters kept from an archive entry's content.
pub const SNIPPET_CHARS: usize = 200;

/// Number of characters of a PEM block kept as its placeholder subject.
pub const PEM_SUBJECT_CHARS: usize = 50;

/// Prefix for the synthetic name of flattened interface mappings.
pub const PROVENANCE_PREFIX: &str = "[ICO] ";

/// Alias prefix for certificates read from PEM bundles.
pub const PEM_ALIAS_PREFIX: &str = "pem-";

/// Alias prefix for XML certificates that carry no alias of their own.
pub const XML_ALIAS_PREFIX: &str = "cert-";

/// Case-insensitive substring marking an archive entry as a mapping.
pub const ARCHIVE_MAPPING_MARKER: &str = "mapping";

/// Substring that, together with an `.xml` suffix, marks a configuration export.
pub const CONFIGURATION_MARKER: &str = "ico";

/// File suffixes treated as mapping archives.
pub const ARCHIVE_SUFFIXES: &[&str] = &[".tpz", ".zip"];

/// Substrings marking a partner-directory document.
pub const PARTNER_MARKERS: &[&str] = &["b2b", "partner"];

/// File suffixes treated as PEM certificate bundles.
pub const CERTIFICATE_SUFFIXES: &[&str] = &[".crt", ".pem"];

/// Build the synthetic provenance name for a flattened mapping.
///
/// # Examples
/// ```
/// use integration_harvester::config::provenance_name;
///
/// assert_eq!(provenance_name("ICO_Orders"), "[ICO] ICO_Orders");
/// ```
pub fn provenance_name(interface_id: &str) -> String {
    format!("{PROVENANCE_PREFIX}{interface_id}")
}

/// Keep at most `max` characters of `text`.
///
/// Counts characters, not bytes, so multi-byte text is never split.
///
/// # Examples
/// ```
/// use integration_harvester::config::truncate_chars;
///
/// assert_eq!(truncate_chars("abcdef", 3), "abc");
/// assert_eq!(truncate_chars("ab", 3), "ab");
/// assert_eq!(truncate_chars("ééé", 2), "éé");
/// ```
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
