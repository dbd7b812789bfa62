//! Per-format entity extractors.
//!
//! Each extractor turns one kind of input into entity records. They share
//! only the XML layer; none of them keeps state between calls.

pub mod archive;
pub mod certificate;
pub mod configuration;
pub mod partner;

pub use archive::extract_archive_mappings;
pub use certificate::{extract_pem_certificates, extract_xml_certificates};
pub use configuration::{extract_configuration, flatten_mappings};
pub use partner::{extract_directory_partners, extract_embedded_partners};
